// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Content pack: everything data-driven on the page in one document.
//!
//! A pack can be exported, edited by hand and re-imported (File menu), so
//! the presentation content is adjustable without rebuilding the app.

use super::exercise::{default_exercises, Exercise};
use super::slide::{default_slides, Slide};
use super::testimonial::{default_testimonials, Testimonial};
use serde::{Deserialize, Serialize};

/// One headline number on the stats strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Complete presentation content for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPack {
    pub stats: Vec<Stat>,
    pub slides: Vec<Slide>,
    pub exercises: Vec<Exercise>,
    pub testimonials: Vec<Testimonial>,
}

impl Default for ContentPack {
    fn default() -> Self {
        let stat = |value: &str, label: &str| Stat {
            value: value.into(),
            label: label.into(),
        };
        Self {
            stats: vec![
                stat("4,979", "Total annotated reps"),
                stat("222", "Features extracted per frame"),
                stat("33", "MediaPipe landmarks tracked"),
                stat("147k", "Model parameters (TCN)"),
            ],
            slides: default_slides(),
            exercises: default_exercises(),
            testimonials: default_testimonials(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pack_json_roundtrip() {
        let pack = ContentPack::default();
        let json = serde_json::to_string(&pack).unwrap();
        let back: ContentPack = serde_json::from_str(&json).unwrap();
        assert_eq!(pack, back);
    }
}
