// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Theme preference and palette.
//!
//! Several channels can decide light vs dark: the OS theme (eframe follows
//! it while we leave the visuals alone), the stored preference, and the
//! View menu toggle. They all fan into one `ThemePreference` resolved once
//! per frame in `apply`, so no two parts of the UI can disagree about the
//! active theme.

use serde::{Deserialize, Serialize};

/// Storage key for the persisted preference.
pub const STORAGE_KEY: &str = "theme-preference";

/// Accent used for primary highlights (bars, CTAs, active segments).
pub fn accent() -> egui::Color32 {
    egui::Color32::from_rgb(0x25, 0x63, 0xEB)
}

/// Color for error metrics above the destructive threshold.
pub fn destructive() -> egui::Color32 {
    egui::Color32::from_rgb(0xDC, 0x26, 0x26)
}

/// Color for error metrics above the warning threshold.
pub fn warning() -> egui::Color32 {
    egui::Color32::from_rgb(0xF5, 0x9E, 0x0B)
}

/// Bar color band for an error-prevalence value in percent.
pub fn metric_color(value: f32) -> egui::Color32 {
    if value > 40.0 {
        destructive()
    } else if value > 20.0 {
        warning()
    } else {
        accent()
    }
}

/// The user's theme choice. `System` defers to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::System => "Follow System",
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
        }
    }

    /// Resolve the preference into visuals. For `System` the visuals set
    /// by the windowing backend are left untouched; explicit choices are
    /// re-applied every frame so they win over late OS theme events.
    pub fn apply(&self, ctx: &egui::Context) {
        match self {
            ThemePreference::System => {}
            ThemePreference::Light => {
                if ctx.style().visuals.dark_mode {
                    ctx.set_visuals(egui::Visuals::light());
                }
            }
            ThemePreference::Dark => {
                if !ctx.style().visuals.dark_mode {
                    ctx.set_visuals(egui::Visuals::dark());
                }
            }
        }
    }

    /// Restore the stored preference, defaulting to `System`.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        let Some(storage) = storage else {
            return Self::default();
        };
        match storage.get_string(STORAGE_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("ignoring malformed theme preference: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn store(&self, storage: &mut dyn eframe::Storage) {
        match serde_json::to_string(self) {
            Ok(raw) => storage.set_string(STORAGE_KEY, raw),
            Err(e) => log::error!("failed to serialize theme preference: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_color_bands() {
        assert_eq!(metric_color(68.1), destructive());
        assert_eq!(metric_color(31.4), warning());
        assert_eq!(metric_color(13.6), accent());
        assert_eq!(metric_color(40.0), warning());
        assert_eq!(metric_color(20.0), accent());
    }

    #[test]
    fn test_preference_roundtrip() {
        for pref in [
            ThemePreference::System,
            ThemePreference::Light,
            ThemePreference::Dark,
        ] {
            let json = serde_json::to_string(&pref).unwrap();
            let back: ThemePreference = serde_json::from_str(&json).unwrap();
            assert_eq!(pref, back);
        }
    }
}
