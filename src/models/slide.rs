// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Carousel slide data structures.
//!
//! A slide is an immutable unit of carousel content: headline, subtitle,
//! body copy, an accent color and an optional photograph. The deck is fixed
//! for the lifetime of the carousel; nothing here mutates at runtime.

use serde::{Deserialize, Serialize};

/// An RGB accent color, serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accent(pub [u8; 3]);

impl Accent {
    pub fn color32(&self) -> egui::Color32 {
        egui::Color32::from_rgb(self.0[0], self.0[1], self.0[2])
    }
}

/// One unit of carousel content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub accent: Accent,
    /// Photograph path, resolved relative to the content pack file.
    /// Missing or unreadable images fall back to painted placeholder art.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// The built-in problem deck.
pub fn default_slides() -> Vec<Slide> {
    vec![
        Slide {
            title: "Invisible Errors".into(),
            subtitle: "The Anatomy of Injury".into(),
            description: "Knee valgus, elbow flare, shoulder impingement: small angular \
                          errors that compound into serious injuries over time, entirely \
                          invisible to the lifter without real-time tracking."
                .into(),
            accent: Accent([0xE8, 0x61, 0x3C]),
            image: Some("slides/invisible-errors.jpg".into()),
        },
        Slide {
            title: "Structural Failure".into(),
            subtitle: "Under Heavy Load".into(),
            description: "Lumbar rounding creates dangerous shear forces on the spine. \
                          It's a biomechanical issue that must be caught instantly before \
                          chronic damage occurs."
                .into(),
            accent: Accent([0x52, 0x52, 0x5B]),
            image: Some("slides/structural-failure.jpg".into()),
        },
        Slide {
            title: "Asymmetric Loading".into(),
            subtitle: "Chronic Imbalance".into(),
            description: "Left-right imbalances and uneven loading patterns lead to \
                          overuse injuries that develop gradually. Our TCN maps both \
                          sides of the body simultaneously."
                .into(),
            accent: Accent([0xA1, 0xA1, 0xAA]),
            image: Some("slides/asymmetric-loading.jpg".into()),
        },
        Slide {
            title: "Blind Spots".into(),
            subtitle: "Depth & Tempo".into(),
            description: "Hitting parallel requires precise feedback. With real-time \
                          MediaPipe joint tracking, we instantly flag shallow reps and \
                          erratic movement velocities."
                .into(),
            accent: Accent([0x3F, 0x3F, 0x46]),
            image: Some("slides/blind-spots.jpg".into()),
        },
    ]
}
