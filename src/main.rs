// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Exercise Advisor - ML Posture Analysis
//!
//! A cross-platform desktop presentation for the exercise-form-analysis
//! project: problem carousel, dataset showcase and architecture overview.

mod app;
mod io;
mod models;
mod ui;
mod util;

use app::AdvisorApp;
use anyhow::Result;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([960.0, 640.0])
            .with_title("Exercise Advisor — ML Posture Analysis"),
        follow_system_theme: true,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Exercise Advisor",
        options,
        Box::new(|cc| Ok(Box::new(AdvisorApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
