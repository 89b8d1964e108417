// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Dataset showcase: exercise tabs, pose illustration and error metrics.
//!
//! Switching tabs restarts the entrance choreography: the data panel fades
//! in and the prevalence bars grow to their values with staggered delays.

use crate::models::exercise::{Exercise, ExerciseKind};
use crate::ui::{pose, theme};
use crate::util::anim::ease_out;

/// Delay before the first bar starts growing, in seconds.
const BAR_BASE_DELAY: f64 = 0.3;
/// Additional delay per bar row.
const BAR_STAGGER: f64 = 0.15;
/// How long one bar takes to reach its value.
const BAR_GROW_TIME: f64 = 1.0;

/// Showcase UI state.
pub struct ShowcaseState {
    active: ExerciseKind,
    /// UI clock timestamp of the last tab switch.
    switched_at: f64,
}

impl ShowcaseState {
    pub fn new() -> Self {
        Self {
            active: ExerciseKind::Squat,
            switched_at: 0.0,
        }
    }

    pub fn active(&self) -> ExerciseKind {
        self.active
    }

    pub fn set_active(&mut self, kind: ExerciseKind, now: f64) {
        if self.active != kind {
            self.active = kind;
            self.switched_at = now;
            log::debug!("showcase: switched to {:?}", kind);
        }
    }

    /// Entrance factor for the data panel, 0 right after a switch.
    fn reveal(&self, now: f64) -> f32 {
        ease_out(((now - self.switched_at) / 0.4) as f32)
    }

    /// Growth factor for bar `index`, honoring the stagger.
    fn bar_growth(&self, index: usize, now: f64) -> f32 {
        let delay = BAR_BASE_DELAY + index as f64 * BAR_STAGGER;
        ease_out(((now - self.switched_at - delay) / BAR_GROW_TIME) as f32)
    }
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self::new()
    }
}

/// Display the showcase for the given exercise catalog.
pub fn show(ui: &mut egui::Ui, state: &mut ShowcaseState, exercises: &[Exercise]) {
    let now = ui.input(|i| i.time);

    let Some(active) = exercises.iter().find(|e| e.kind == state.active()) else {
        ui.label(egui::RichText::new("No exercise data loaded").weak());
        return;
    };

    let frame = egui::Frame::none()
        .fill(ui.visuals().panel_fill)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(0.0));

    frame.show(ui, |ui| {
        ui.set_min_height(380.0);
        ui.horizontal_top(|ui| {
            let pose_width = 280.0_f32.min(ui.available_width() * 0.4);
            ui.allocate_ui_with_layout(
                egui::vec2(pose_width, 380.0),
                egui::Layout::top_down(egui::Align::Center),
                |ui| show_pose_panel(ui, state, exercises, now),
            );
            ui.separator();
            ui.vertical(|ui| show_data_panel(ui, state, active, now));
        });
    });
}

fn show_pose_panel(
    ui: &mut egui::Ui,
    state: &mut ShowcaseState,
    exercises: &[Exercise],
    now: f64,
) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 300.0),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);

    painter.rect_filled(
        rect,
        egui::Rounding {
            nw: 12.0,
            sw: 12.0,
            ..Default::default()
        },
        ui.visuals().faint_bg_color,
    );
    draw_grid(&painter, rect, ui.visuals().weak_text_color().gamma_multiply(0.15));

    // The figure scales in after a tab switch.
    let reveal = state.reveal(now);
    let figure_rect = egui::Rect::from_center_size(
        rect.center(),
        egui::vec2(150.0, 250.0) * (0.9 + 0.1 * reveal),
    );
    let style = pose::PoseStyle::from_visuals(ui.visuals(), theme::accent());
    pose::draw(&painter, figure_rect, state.active(), now, &style);

    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        ui.add_space(8.0);
        for exercise in exercises {
            let selected = exercise.kind == state.active();
            if ui
                .selectable_label(selected, &exercise.label)
                .clicked()
            {
                state.set_active(exercise.kind, now);
            }
        }
    });
    ui.add_space(8.0);
}

fn draw_grid(painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
    let stroke = egui::Stroke::new(0.5, color);
    let step = 20.0;
    let mut x = rect.left() + step;
    while x < rect.right() {
        painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);
        x += step;
    }
    let mut y = rect.top() + step;
    while y < rect.bottom() {
        painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
        y += step;
    }
}

fn show_data_panel(ui: &mut egui::Ui, state: &ShowcaseState, exercise: &Exercise, now: f64) {
    let reveal = state.reveal(now);
    let fg = ui.visuals().strong_text_color().gamma_multiply(reveal);
    let weak = ui.visuals().weak_text_color().gamma_multiply(reveal);

    ui.add_space(20.0);
    ui.label(egui::RichText::new(&exercise.label).size(22.0).strong().color(fg));
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{}", exercise.reps))
                .size(22.0)
                .strong()
                .color(theme::accent().gamma_multiply(reveal)),
        );
        ui.label(egui::RichText::new("reps").color(weak));
        ui.separator();
        ui.label(
            egui::RichText::new(format!("{}", exercise.subjects))
                .size(22.0)
                .strong()
                .color(fg),
        );
        ui.label(egui::RichText::new("subjects").color(weak));
    });
    ui.add_space(16.0);

    ui.label(
        egui::RichText::new("ERROR PREVALENCE")
            .size(10.0)
            .strong()
            .color(weak),
    );
    ui.add_space(8.0);

    for (index, metric) in exercise.errors.iter().enumerate() {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&metric.label).size(13.0).strong().color(fg));
            ui.label(
                egui::RichText::new(metric.format.label())
                    .size(9.0)
                    .color(weak),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("{:.1}%", metric.value))
                        .size(13.0)
                        .strong()
                        .color(fg),
                );
            });
        });

        // Track + animated fill.
        let width = ui.available_width().min(420.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 8.0), egui::Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, egui::Rounding::same(4.0), ui.visuals().faint_bg_color);
        let growth = state.bar_growth(index, now);
        let fraction = (metric.value / 100.0) * growth;
        if fraction > 0.0 {
            let mut fill = rect;
            fill.set_width(rect.width() * fraction);
            painter.rect_filled(fill, egui::Rounding::same(4.0), theme::metric_color(metric.value));
        }
        ui.add_space(10.0);
    }

    ui.separator();
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("~{:.1} reps/subject", exercise.reps_per_subject()))
                .size(11.0)
                .color(weak),
        );
        ui.label(egui::RichText::new("·").color(weak));
        ui.label(egui::RichText::new("Zero subject leakage").size(11.0).color(weak));
        ui.label(egui::RichText::new("·").color(weak));
        ui.label(egui::RichText::new("Train/Val/Test splits").size(11.0).color(weak));
    });
    ui.add_space(16.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_restarts_choreography() {
        let mut state = ShowcaseState::new();
        assert_eq!(state.active(), ExerciseKind::Squat);
        // Well past the entrance: everything fully revealed.
        assert_eq!(state.reveal(10.0), 1.0);
        assert_eq!(state.bar_growth(2, 10.0), 1.0);

        state.set_active(ExerciseKind::Row, 10.0);
        assert_eq!(state.active(), ExerciseKind::Row);
        assert_eq!(state.reveal(10.0), 0.0);
        assert_eq!(state.bar_growth(0, 10.0), 0.0);
    }

    #[test]
    fn test_reselecting_active_tab_keeps_clock() {
        let mut state = ShowcaseState::new();
        state.set_active(ExerciseKind::Squat, 5.0);
        assert_eq!(state.reveal(5.5), 1.0, "no restart on a no-op switch");
    }

    #[test]
    fn test_bar_stagger_ordering() {
        let mut state = ShowcaseState::new();
        state.set_active(ExerciseKind::Ohp, 0.0);
        // Midway through the stagger the first bar leads the last.
        let t = BAR_BASE_DELAY + BAR_STAGGER + 0.2;
        assert!(state.bar_growth(0, t) > state.bar_growth(2, t));
    }
}
