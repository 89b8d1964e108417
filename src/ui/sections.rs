// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Static page sections: stats strip, problem cards, pipeline,
//! architecture notes and footer.

use crate::models::pack::Stat;
use crate::ui::theme;
use crate::util::anim::ping_pong;

/// Numbered section label, e.g. "002 — THE PROBLEM".
pub fn section_label(ui: &mut egui::Ui, label: &str) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(24.0, 1.0), egui::Sense::hover());
        ui.painter().line_segment(
            [rect.left_center(), rect.right_center()],
            egui::Stroke::new(1.0, ui.visuals().weak_text_color()),
        );
        ui.label(
            egui::RichText::new(label.to_uppercase())
                .monospace()
                .size(10.0)
                .color(ui.visuals().weak_text_color()),
        );
    });
    ui.add_space(10.0);
}

/// Section heading in the display style.
pub fn heading(ui: &mut egui::Ui, lines: &[&str]) -> egui::Response {
    let mut response = None;
    for line in lines {
        let r = ui.label(
            egui::RichText::new(*line)
                .size(30.0)
                .strong()
                .color(ui.visuals().strong_text_color()),
        );
        response.get_or_insert(r);
    }
    response.unwrap_or_else(|| ui.label(""))
}

/// The headline numbers strip under the hero.
pub fn stats_strip(ui: &mut egui::Ui, stats: &[Stat]) {
    let frame = egui::Frame::none()
        .fill(ui.visuals().panel_fill)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .inner_margin(egui::Margin::symmetric(32.0, 24.0));
    frame.show(ui, |ui| {
        ui.columns(stats.len().max(1), |columns| {
            for (column, stat) in columns.iter_mut().zip(stats) {
                column.label(
                    egui::RichText::new(&stat.value)
                        .size(26.0)
                        .strong()
                        .color(column.visuals().strong_text_color()),
                );
                column.label(
                    egui::RichText::new(&stat.label)
                        .size(10.0)
                        .color(column.visuals().weak_text_color()),
                );
            }
        });
    });
}

/// The three problem cards under the carousel.
pub fn problem_cards(ui: &mut egui::Ui) {
    let cards = [
        ("Joint Angles", "Knee valgus, elbow flare — small errors that compound."),
        ("Spinal Load", "Lumbar rounding under heavy barbell creates shear forces."),
        ("Asymmetry", "Left-right imbalances lead to chronic overuse injuries."),
    ];
    ui.columns(cards.len(), |columns| {
        for (column, (title, desc)) in columns.iter_mut().zip(cards) {
            egui::Frame::none()
                .fill(column.visuals().panel_fill)
                .stroke(column.visuals().widgets.noninteractive.bg_stroke)
                .inner_margin(egui::Margin::same(16.0))
                .show(column, |ui| {
                    ui.label(egui::RichText::new(title).size(12.0).strong());
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(desc)
                            .size(11.0)
                            .color(ui.visuals().weak_text_color()),
                    );
                });
        }
    });
}

/// The four pipeline stages plus the feature-engineering card.
pub fn pipeline(ui: &mut egui::Ui) {
    let steps: [(&str, &str, &str, bool); 4] = [
        ("01", "Video Input", "Standard camera — no specialist hardware.", false),
        ("02", "Pose Estimation", "33 landmarks via MediaPipe, hip-centred, shoulder-scaled.", true),
        ("03", "Exercise Classification", "Multi-class classifier from 222-dim feature vectors.", true),
        ("04", "Posture Verdict", "Safe/Unsafe + specific error flags returned in real time.", false),
    ];

    ui.columns(2, |columns| {
        let left = &mut columns[0];
        for (num, title, sub, ml) in steps {
            left.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("STEP {}", num))
                        .monospace()
                        .size(9.0)
                        .color(ui.visuals().weak_text_color()),
                );
                if ml {
                    egui::Frame::none()
                        .fill(ui.visuals().strong_text_color())
                        .inner_margin(egui::Margin::symmetric(5.0, 1.0))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new("ML")
                                    .monospace()
                                    .size(8.0)
                                    .color(ui.visuals().extreme_bg_color),
                            );
                        });
                }
            });
            left.label(egui::RichText::new(title).size(14.0).strong());
            left.label(
                egui::RichText::new(sub)
                    .size(11.0)
                    .color(left.visuals().weak_text_color()),
            );
            left.add_space(10.0);
            left.separator();
            left.add_space(10.0);
        }

        feature_card(&mut columns[1]);
    });
}

fn feature_card(ui: &mut egui::Ui) {
    let frame = egui::Frame::none()
        .fill(ui.visuals().panel_fill)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .inner_margin(egui::Margin::same(20.0));
    let inner = frame.show(ui, |ui| {
        ui.label(
            egui::RichText::new("FEATURE ENGINEERING")
                .monospace()
                .size(9.0)
                .color(ui.visuals().weak_text_color()),
        );
        ui.add_space(6.0);
        ui.label(egui::RichText::new("222 features per frame.").size(16.0).strong());
        ui.add_space(10.0);

        let rows = [
            ("99", "33 landmarks × 3 coords (x, y, z)"),
            ("12", "Joint angles via law of cosines"),
            ("111", "First-order velocity features"),
        ];
        for (value, label) in rows {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(value)
                        .size(18.0)
                        .strong()
                        .color(theme::accent()),
                );
                ui.label(
                    egui::RichText::new(label)
                        .size(11.0)
                        .color(ui.visuals().weak_text_color()),
                );
            });
            ui.add_space(6.0);
        }

        ui.separator();
        ui.label(
            egui::RichText::new(
                "Hip-centred + shoulder-scaled normalization achieves 88% reduction \
                 in intra-subject variance.",
            )
            .size(11.0)
            .strong(),
        );
    });
    draw_corner_ticks(ui.painter(), inner.response.rect, ui.visuals().strong_text_color());
}

/// Architecture Q&A rows and the TCN stack diagram.
pub fn architecture(ui: &mut egui::Ui) {
    let rows = [
        ("Why TCN over LSTM?", "All timesteps processed simultaneously — faster GPU training."),
        ("Dilation strategy", "d = 1, 2, 4, 8, 16, 32 — block 6 sees all 100 frames."),
        ("Regression head", "Huber Loss (δ=0.1) — robust to mislabeled reps."),
        ("Classification head", "BCE with pos_weight up to 12× for rare errors."),
        ("Regularization", "Dropout 0.2, weight decay 1e-4, gradient clipping at 1.0."),
    ];

    ui.columns(2, |columns| {
        let left = &mut columns[0];
        for (label, detail) in rows {
            left.horizontal_top(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(4.0, 4.0), egui::Sense::hover());
                ui.painter().rect_filled(
                    rect.translate(egui::vec2(0.0, 6.0)),
                    egui::Rounding::ZERO,
                    theme::accent(),
                );
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(label).size(12.0).strong());
                    ui.label(
                        egui::RichText::new(detail)
                            .size(11.0)
                            .color(ui.visuals().weak_text_color()),
                    );
                });
            });
            left.add_space(10.0);
        }

        tcn_diagram(&mut columns[1]);
    });

    ui.add_space(16.0);
    ui.horizontal_wrapped(|ui| {
        ui.label(
            egui::RichText::new("STACK:")
                .monospace()
                .size(9.0)
                .color(ui.visuals().weak_text_color()),
        );
        for chip in ["MediaPipe", "PyTorch", "TCN", "AdamW", "Huber Loss", "BCE + pos_weight"] {
            egui::Frame::none()
                .fill(ui.visuals().faint_bg_color)
                .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
                .inner_margin(egui::Margin::symmetric(8.0, 3.0))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(chip).monospace().size(10.0));
                });
        }
    });
}

fn tcn_diagram(ui: &mut egui::Ui) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width().min(360.0), 300.0),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    let fg = ui.visuals().strong_text_color();
    let weak = ui.visuals().weak_text_color();
    let mono = egui::FontId::monospace(10.0);

    let block_h = 26.0;
    let gap = 8.0;
    let block_w = rect.width() * 0.7;
    let x = rect.center().x;
    let mut y = rect.top() + 16.0;

    painter.text(
        egui::pos2(x, y),
        egui::Align2::CENTER_CENTER,
        "input · 100 × 222",
        mono.clone(),
        weak,
    );
    y += 18.0;

    for dilation in [1u32, 2, 4, 8, 16, 32] {
        let block = egui::Rect::from_center_size(
            egui::pos2(x, y + block_h / 2.0),
            egui::vec2(block_w, block_h),
        );
        painter.rect_filled(block, egui::Rounding::same(4.0), ui.visuals().faint_bg_color);
        painter.rect_stroke(block, egui::Rounding::same(4.0), egui::Stroke::new(1.0, fg));
        painter.text(
            block.center(),
            egui::Align2::CENTER_CENTER,
            format!("conv block · d = {}", dilation),
            mono.clone(),
            fg,
        );
        y += block_h + gap;
        painter.line_segment(
            [egui::pos2(x, y - gap), egui::pos2(x, y)],
            egui::Stroke::new(1.0, weak),
        );
    }

    // Dual heads.
    let head_w = block_w / 2.0 - 8.0;
    for (offset, label) in [(-1.0_f32, "regression"), (1.0, "classification")] {
        let cx = x + offset * (head_w / 2.0 + 8.0);
        let block = egui::Rect::from_center_size(
            egui::pos2(cx, y + block_h / 2.0),
            egui::vec2(head_w, block_h),
        );
        painter.rect_filled(
            block,
            egui::Rounding::same(4.0),
            theme::accent().gamma_multiply(0.15),
        );
        painter.rect_stroke(
            block,
            egui::Rounding::same(4.0),
            egui::Stroke::new(1.0, theme::accent()),
        );
        painter.text(
            block.center(),
            egui::Align2::CENTER_CENTER,
            label,
            mono.clone(),
            fg,
        );
    }
}

fn draw_corner_ticks(painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
    let len = 12.0;
    let stroke = egui::Stroke::new(1.0, color);
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

/// Footer with brand line, waveform and status dots.
pub fn footer(ui: &mut egui::Ui) {
    let now = ui.input(|i| i.time);
    ui.separator();
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("EXERCISE ADVISOR · 2026")
                .monospace()
                .size(10.0)
                .color(ui.visuals().weak_text_color()),
        );

        // Idle waveform, heights lifted from the web footer.
        let heights = [4.0f32, 7.0, 5.0, 9.0, 6.0, 11.0, 4.0, 8.0, 5.0, 10.0, 7.0, 9.0];
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(heights.len() as f32 * 5.0, 12.0),
            egui::Sense::hover(),
        );
        let painter = ui.painter();
        for (index, h) in heights.iter().enumerate() {
            let x = rect.left() + index as f32 * 5.0;
            painter.rect_filled(
                egui::Rect::from_min_max(
                    egui::pos2(x, rect.bottom() - h),
                    egui::pos2(x + 3.0, rect.bottom()),
                ),
                egui::Rounding::ZERO,
                ui.visuals().weak_text_color().gamma_multiply(0.5),
            );
        }

        ui.label(
            egui::RichText::new("V1.0.0")
                .monospace()
                .size(9.0)
                .color(ui.visuals().weak_text_color()),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Blinking status dots.
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(24.0, 8.0), egui::Sense::hover());
            for index in 0..3 {
                let pulse = ping_pong(now + index as f64 * 0.3, 1.6);
                ui.painter().circle_filled(
                    egui::pos2(rect.left() + 4.0 + index as f32 * 8.0, rect.center().y),
                    2.0,
                    ui.visuals().strong_text_color().gamma_multiply(0.3 + 0.7 * pulse),
                );
            }
            ui.label(
                egui::RichText::new("SYSTEM.ACTIVE")
                    .monospace()
                    .size(9.0)
                    .color(ui.visuals().weak_text_color()),
            );
        });
    });
    ui.add_space(8.0);
}
