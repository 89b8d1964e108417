// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Testimonial card stack.
//!
//! Three overlapping cards; hovering or clicking one fans the cards above
//! it aside so the focused card is readable. Click toggles a pinned focus
//! so the stack also works without a hover-capable pointer.

use crate::models::testimonial::Testimonial;

const CARD_SIZE: egui::Vec2 = egui::vec2(400.0, 230.0);
const STACK_STEP: egui::Vec2 = egui::vec2(52.0, 38.0);
/// Extra shift applied to cards covering the focused one.
const FAN_SHIFT: egui::Vec2 = egui::vec2(44.0, 96.0);

/// Focus state for the card stack.
#[derive(Default)]
pub struct TestimonialsState {
    hovered: Option<usize>,
    pinned: Option<usize>,
}

impl TestimonialsState {
    pub fn focused(&self) -> Option<usize> {
        self.hovered.or(self.pinned)
    }

    /// Click behavior: clicking the focused card unpins, any other pins.
    fn toggle_pin(&mut self, index: usize) {
        self.pinned = if self.pinned == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

/// Display the testimonial stack.
pub fn show(ui: &mut egui::Ui, state: &mut TestimonialsState, testimonials: &[Testimonial]) {
    if testimonials.is_empty() {
        return;
    }

    let count = testimonials.len();
    let area = egui::vec2(
        CARD_SIZE.x + STACK_STEP.x * (count - 1) as f32 + FAN_SHIFT.x,
        CARD_SIZE.y + STACK_STEP.y * (count - 1) as f32 + FAN_SHIFT.y,
    );
    let (stack_rect, _) = ui.allocate_exact_size(area, egui::Sense::hover());

    let focused = state.focused();
    let mut hovered = None;

    for (index, testimonial) in testimonials.iter().enumerate() {
        let mut offset = STACK_STEP * index as f32;
        if let Some(f) = focused {
            if index > f {
                offset += FAN_SHIFT;
            }
            if index == f {
                offset.y -= 12.0;
            }
        }
        // Smooth the fan-out.
        let x = ui.ctx().animate_value_with_time(
            ui.id().with(("card-x", index)),
            offset.x,
            0.3,
        );
        let y = ui.ctx().animate_value_with_time(
            ui.id().with(("card-y", index)),
            offset.y,
            0.3,
        );
        let rect = egui::Rect::from_min_size(stack_rect.min + egui::vec2(x, y), CARD_SIZE);

        let dimmed = focused.is_some_and(|f| f != index);
        let response = show_card(ui, rect, testimonial, dimmed);
        if response.hovered() {
            hovered = Some(index);
        }
        if response.clicked() {
            state.toggle_pin(index);
        }
    }

    state.hovered = hovered;
}

fn show_card(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    testimonial: &Testimonial,
    dimmed: bool,
) -> egui::Response {
    let response = ui.allocate_rect(rect, egui::Sense::click());
    let opacity = if dimmed { 0.55 } else { 1.0 };

    let painter = ui.painter();
    painter.rect_filled(
        rect,
        egui::Rounding::same(14.0),
        ui.visuals().panel_fill.gamma_multiply(opacity),
    );
    painter.rect_stroke(
        rect,
        egui::Rounding::same(14.0),
        egui::Stroke::new(
            1.0,
            if response.hovered() {
                crate::ui::theme::accent()
            } else {
                ui.visuals().widgets.noninteractive.bg_stroke.color
            },
        ),
    );

    let fg = ui.visuals().strong_text_color().gamma_multiply(opacity);
    let weak = ui.visuals().weak_text_color().gamma_multiply(opacity);

    ui.allocate_ui_at_rect(rect.shrink(16.0), |card_ui| {
        show_card_body(card_ui, testimonial, fg, weak, opacity);
    });

    response
}

fn show_card_body(
    card_ui: &mut egui::Ui,
    testimonial: &Testimonial,
    fg: egui::Color32,
    weak: egui::Color32,
    opacity: f32,
) {
    card_ui.horizontal(|ui| {
        // Avatar disc with the author's initial.
        let (avatar, _) = ui.allocate_exact_size(egui::vec2(32.0, 32.0), egui::Sense::hover());
        ui.painter()
            .circle_filled(avatar.center(), 16.0, ui.visuals().faint_bg_color);
        ui.painter().text(
            avatar.center(),
            egui::Align2::CENTER_CENTER,
            testimonial.author.chars().next().unwrap_or('?'),
            egui::FontId::proportional(14.0),
            fg,
        );

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&testimonial.author).size(13.0).strong().color(fg));
                if testimonial.verified {
                    ui.label(
                        egui::RichText::new("✔")
                            .size(11.0)
                            .color(egui::Color32::from_rgb(0x1D, 0x9B, 0xF0).gamma_multiply(opacity)),
                    );
                }
            });
            ui.label(egui::RichText::new(&testimonial.handle).size(11.0).color(weak));
        });
    });

    card_ui.add_space(8.0);
    card_ui.label(egui::RichText::new(&testimonial.body).size(12.0).color(fg));
    card_ui.add_space(6.0);

    card_ui.horizontal(|ui| {
        ui.label(egui::RichText::new(&testimonial.date).monospace().size(10.0).color(weak));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("⇄ {}", testimonial.reposts))
                    .size(10.0)
                    .color(weak),
            );
            ui.label(
                egui::RichText::new(format!("♥ {}", testimonial.likes))
                    .size(10.0)
                    .color(weak),
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_takes_priority_over_pin() {
        let state = TestimonialsState {
            hovered: Some(2),
            pinned: Some(0),
        };
        assert_eq!(state.focused(), Some(2));
    }

    #[test]
    fn test_click_toggles_pin() {
        let mut state = TestimonialsState::default();
        state.toggle_pin(1);
        assert_eq!(state.focused(), Some(1));
        state.toggle_pin(1);
        assert_eq!(state.focused(), None);
        state.toggle_pin(0);
        state.toggle_pin(2);
        assert_eq!(state.focused(), Some(2), "pin moves to the latest card");
    }
}
