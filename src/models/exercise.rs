// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Dataset showcase data structures.
//!
//! One record per exercise in the Fitness-AQA subset: rep and subject
//! counts plus the prevalence of each annotated form error.

use serde::{Deserialize, Serialize};

/// The three exercises covered by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    Ohp,
    Squat,
    Row,
}

/// How an error is annotated in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricFormat {
    /// Frame ranges where the error occurs.
    Temporal,
    /// A single per-rep yes/no label.
    Binary,
}

impl MetricFormat {
    pub fn label(&self) -> &'static str {
        match self {
            MetricFormat::Temporal => "Temporal",
            MetricFormat::Binary => "Binary",
        }
    }
}

/// Prevalence of one annotated form error, in percent of reps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMetric {
    pub label: String,
    pub value: f32,
    pub format: MetricFormat,
}

/// Dataset statistics for a single exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub kind: ExerciseKind,
    pub label: String,
    pub reps: u32,
    pub subjects: u32,
    pub errors: Vec<ErrorMetric>,
}

impl Exercise {
    /// Average annotated reps per subject.
    pub fn reps_per_subject(&self) -> f32 {
        if self.subjects == 0 {
            0.0
        } else {
            self.reps as f32 / self.subjects as f32
        }
    }
}

fn metric(label: &str, value: f32, format: MetricFormat) -> ErrorMetric {
    ErrorMetric {
        label: label.into(),
        value,
        format,
    }
}

/// The built-in exercise catalog.
pub fn default_exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            kind: ExerciseKind::Ohp,
            label: "Overhead Press".into(),
            reps: 1639,
            subjects: 215,
            errors: vec![
                metric("Elbow Flare", 14.2, MetricFormat::Temporal),
                metric("Knee Lockout", 13.8, MetricFormat::Temporal),
            ],
        },
        Exercise {
            kind: ExerciseKind::Squat,
            label: "Back Squat".into(),
            reps: 1934,
            subjects: 251,
            errors: vec![
                metric("Knees Forward", 68.1, MetricFormat::Temporal),
                metric("Shallow Depth", 31.4, MetricFormat::Binary),
                metric("Knees Inward", 13.6, MetricFormat::Temporal),
            ],
        },
        Exercise {
            kind: ExerciseKind::Row,
            label: "Barbell Row".into(),
            reps: 1406,
            subjects: 183,
            errors: vec![
                metric("Torso Angle", 48.7, MetricFormat::Binary),
                metric("Lumbar Rounding", 45.2, MetricFormat::Binary),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reps_per_subject() {
        let squat = default_exercises()
            .into_iter()
            .find(|e| e.kind == ExerciseKind::Squat)
            .unwrap();
        assert!((squat.reps_per_subject() - 1934.0 / 251.0).abs() < 0.001);
    }

    #[test]
    fn test_reps_per_subject_no_subjects() {
        let ex = Exercise {
            kind: ExerciseKind::Row,
            label: "Empty".into(),
            reps: 10,
            subjects: 0,
            errors: Vec::new(),
        };
        assert_eq!(ex.reps_per_subject(), 0.0);
    }

    #[test]
    fn test_catalog_covers_all_kinds() {
        let catalog = default_exercises();
        for kind in [ExerciseKind::Ohp, ExerciseKind::Squat, ExerciseKind::Row] {
            assert!(catalog.iter().any(|e| e.kind == kind));
        }
    }
}
