// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Exercise Advisor presentation.

pub mod carousel;
pub mod hero;
pub mod pose;
pub mod sections;
pub mod showcase;
pub mod testimonials;
pub mod theme;
