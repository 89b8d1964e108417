// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hero panel: headline, capability badge, CTAs and the scanned skeleton.

use crate::app::Section;
use crate::models::exercise::ExerciseKind;
use crate::ui::{pose, theme};
use crate::util::anim::ping_pong;

/// Display the hero. Returns the section a CTA asked to jump to.
pub fn show(ui: &mut egui::Ui) -> Option<Section> {
    let mut jump = None;

    let frame = egui::Frame::none()
        .fill(ui.visuals().panel_fill)
        .inner_margin(egui::Margin::symmetric(40.0, 48.0));

    let inner = frame.show(ui, |ui| {
        ui.set_min_height(460.0);
        ui.columns(2, |columns| {
            jump = show_copy(&mut columns[0]);
            show_skeleton(&mut columns[1]);
        });
    });

    draw_corner_brackets(ui.painter(), inner.response.rect, ui.visuals().strong_text_color());
    jump
}

fn show_copy(ui: &mut egui::Ui) -> Option<Section> {
    let mut jump = None;
    let weak = ui.visuals().weak_text_color();
    let fg = ui.visuals().strong_text_color();

    ui.add_space(24.0);
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(24.0, 1.0), egui::Sense::hover());
        ui.painter()
            .line_segment([rect.left_center(), rect.right_center()], egui::Stroke::new(1.0, fg));
        ui.label(egui::RichText::new("001").monospace().small().color(weak));
    });
    ui.add_space(16.0);

    egui::Frame::none()
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .inner_margin(egui::Margin::symmetric(10.0, 4.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new("ML · COMPUTER VISION · POSE ESTIMATION")
                    .monospace()
                    .size(9.0)
                    .color(weak),
            );
        });
    ui.add_space(20.0);

    let headline = |text: &str, color: egui::Color32| {
        egui::RichText::new(text).size(46.0).strong().color(color)
    };
    ui.label(headline("SAFER", fg));
    ui.label(headline("REPS,", theme::accent()));
    ui.label(headline("SMARTER", fg));
    ui.label(headline("FORM.", fg));
    ui.add_space(16.0);

    ui.label(
        egui::RichText::new(
            "Real-time posture evaluation from any camera. No coach. No motion capture. Just ML.",
        )
        .size(13.0)
        .color(weak),
    );
    ui.add_space(24.0);

    ui.horizontal(|ui| {
        let primary = egui::Button::new(
            egui::RichText::new("EXPLORE PIPELINE")
                .monospace()
                .size(11.0)
                .color(ui.visuals().extreme_bg_color),
        )
        .fill(fg)
        .min_size(egui::vec2(160.0, 36.0));
        if ui.add(primary).clicked() {
            jump = Some(Section::Solution);
        }

        let secondary = egui::Button::new(egui::RichText::new("VIEW DATA").monospace().size(11.0))
            .min_size(egui::vec2(120.0, 36.0));
        if ui.add(secondary).clicked() {
            jump = Some(Section::Data);
        }
    });

    ui.add_space(32.0);
    ui.label(egui::RichText::new("⌄ SCROLL").monospace().size(9.0).color(weak));

    jump
}

fn show_skeleton(ui: &mut egui::Ui) {
    let now = ui.input(|i| i.time);
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 440.0),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, egui::Rounding::ZERO, ui.visuals().faint_bg_color);

    let figure_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(200.0, 360.0));
    let style = pose::PoseStyle::from_visuals(ui.visuals(), theme::accent());
    pose::draw(&painter, figure_rect, ExerciseKind::Squat, now, &style);

    // Tracking scan line sweeping the figure.
    let sweep = ping_pong(now, 5.0);
    let y = rect.top() + rect.height() * (0.1 + 0.8 * sweep);
    painter.line_segment(
        [egui::pos2(rect.left() + 16.0, y), egui::pos2(rect.right() - 16.0, y)],
        egui::Stroke::new(1.0, theme::accent().gamma_multiply(0.6)),
    );
    painter.text(
        egui::pos2(rect.right() - 20.0, y - 8.0),
        egui::Align2::RIGHT_BOTTOM,
        "TRACKING",
        egui::FontId::monospace(8.0),
        theme::accent().gamma_multiply(0.8),
    );
}

fn draw_corner_brackets(painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
    let len = 28.0;
    let stroke = egui::Stroke::new(2.0, color);
    let corners = [
        (rect.left_top(), egui::vec2(1.0, 1.0)),
        (rect.right_top(), egui::vec2(-1.0, 1.0)),
        (rect.left_bottom(), egui::vec2(1.0, -1.0)),
        (rect.right_bottom(), egui::vec2(-1.0, -1.0)),
    ];
    for (corner, dir) in corners {
        painter.line_segment([corner, corner + egui::vec2(len * dir.x, 0.0)], stroke);
        painter.line_segment([corner, corner + egui::vec2(0.0, len * dir.y)], stroke);
    }
}
