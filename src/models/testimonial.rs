// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Testimonial card data structures.

use serde::{Deserialize, Serialize};

/// A quoted post shown in the testimonial stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub author: String,
    pub handle: String,
    pub body: String,
    pub date: String,
    pub verified: bool,
    pub likes: u32,
    pub reposts: u32,
}

/// The built-in testimonial stack.
pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            author: "Dr. Elena Rostova".into(),
            handle: "@erostova_dpt".into(),
            body: "Watching lifters blow out their lumbar spine because they can't \
                   accurately gauge their torso angle mid-lift is the most frustrating \
                   part of physiotherapy. We need automated biomechanical feedback \
                   systems yesterday."
                .into(),
            date: "Feb 14, 2026".into(),
            verified: true,
            likes: 843,
            reposts: 112,
        },
        Testimonial {
            author: "Men's Fitness".into(),
            handle: "@MensFitnessX".into(),
            body: "Without proper form, these lifts can cause more harm than good.".into(),
            date: "Feb 26, 2026".into(),
            verified: true,
            likes: 2847,
            reposts: 412,
        },
        Testimonial {
            author: "James Mac".into(),
            handle: "@JamesMac_Fit".into(),
            body: "Good morning.\n\nDeadlifts didn't wreck your back.\nYour shitty form \
                   did.\n\nDeadlifts done properly are an elite exercise for posterior \
                   chain strength. Stop blaming the exercise and fix your angles."
                .into(),
            date: "Feb 26, 2026".into(),
            verified: true,
            likes: 4502,
            reposts: 890,
        },
    ]
}
