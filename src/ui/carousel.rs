// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Autoplaying problem carousel.
//!
//! The carousel cycles through a fixed slide deck, advances on a dwell
//! timer, supports arrow/segment navigation and swipe gestures, and shows
//! a segmented progress bar synchronized with the dwell clock.
//!
//! `CarouselState` is a plain state machine driven by `tick(now)`: one
//! monotonic elapsed-time accumulator yields both the progress fraction and
//! the auto-advance decision, so the two can never drift apart and there
//! are no timer handles to leak. It takes no UI types and is unit-tested
//! with a mock clock below.

use crate::models::slide::Slide;
use std::collections::HashMap;

/// How long each slide dwells before auto-advancing, in seconds.
pub const SLIDE_DURATION: f64 = 6.0;
/// Total crossfade budget, in seconds.
pub const TRANSITION_DURATION: f64 = 0.8;
/// The new index commits halfway through the transition.
const COMMIT_DELAY: f64 = TRANSITION_DURATION / 2.0;
/// Settle delay after the commit before the transition flag clears.
const SETTLE_DELAY: f64 = 0.05;
/// Minimum horizontal drag, in points, recognized as a swipe.
pub const SWIPE_THRESHOLD: f32 = 60.0;

/// Last navigation direction. Animation choice only, not correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Transitioning {
        target: usize,
        started: f64,
        committed: bool,
    },
}

/// Carousel state machine.
pub struct CarouselState {
    slide_count: usize,
    current: usize,
    phase: Phase,
    direction: Direction,
    /// Unpaused seconds spent on the current slide.
    dwell: f64,
    paused: bool,
    last_tick: Option<f64>,
    /// Horizontal pointer position where the active drag began.
    drag_origin: Option<f32>,
    drag_last: f32,
}

impl CarouselState {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            current: 0,
            phase: Phase::Idle,
            direction: Direction::Next,
            dwell: 0.0,
            paused: false,
            last_tick: None,
            drag_origin: None,
            drag_last: 0.0,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Elapsed fraction of the current slide's dwell period, in percent.
    pub fn progress(&self) -> f32 {
        if self.slide_count == 0 {
            return 0.0;
        }
        ((self.dwell / SLIDE_DURATION) * 100.0).clamp(0.0, 100.0) as f32
    }

    /// Fill percentage for progress segment `index`: slides already viewed
    /// are full, upcoming ones empty, the current one tracks the dwell.
    pub fn segment_fill(&self, index: usize) -> f32 {
        if index < self.current {
            100.0
        } else if index == self.current {
            self.progress()
        } else {
            0.0
        }
    }

    /// Advance the clock. Transition choreography runs on wall time (a
    /// hover must not wedge a half-finished crossfade); dwell accrues only
    /// while unpaused.
    pub fn tick(&mut self, now: f64) {
        let dt = match self.last_tick {
            Some(prev) if now > prev => now - prev,
            _ => 0.0,
        };
        self.last_tick = Some(now);

        if let Phase::Transitioning {
            target,
            started,
            committed,
        } = self.phase
        {
            if !committed && now - started >= COMMIT_DELAY {
                self.current = target;
                self.phase = Phase::Transitioning {
                    target,
                    started,
                    committed: true,
                };
                log::debug!("carousel: committed slide {}", target);
            }
            if let Phase::Transitioning {
                started,
                committed: true,
                ..
            } = self.phase
            {
                if now - started >= COMMIT_DELAY + SETTLE_DELAY {
                    self.phase = Phase::Idle;
                }
            }
        }

        if !self.paused && self.slide_count > 1 {
            self.dwell += dt;
            if self.phase == Phase::Idle && self.dwell >= SLIDE_DURATION {
                self.go_next(now);
            }
        }
    }

    /// Request a transition to `target`. Out-of-range targets, the current
    /// index and calls while a transition is in flight are all dropped.
    pub fn go_to(&mut self, target: usize, now: f64) {
        self.go_to_directed(target, None, now);
    }

    pub fn go_next(&mut self, now: f64) {
        if self.slide_count == 0 {
            return;
        }
        let target = (self.current + 1) % self.slide_count;
        self.go_to_directed(target, Some(Direction::Next), now);
    }

    pub fn go_prev(&mut self, now: f64) {
        if self.slide_count == 0 {
            return;
        }
        let target = (self.current + self.slide_count - 1) % self.slide_count;
        self.go_to_directed(target, Some(Direction::Prev), now);
    }

    fn go_to_directed(&mut self, target: usize, direction: Option<Direction>, now: f64) {
        if target >= self.slide_count {
            log::warn!("carousel: slide index {} out of range", target);
            return;
        }
        if target == self.current || self.is_transitioning() {
            return;
        }
        self.direction = direction.unwrap_or(if target > self.current {
            Direction::Next
        } else {
            Direction::Prev
        });
        self.dwell = 0.0;
        self.phase = Phase::Transitioning {
            target,
            started: now,
            committed: false,
        };
    }

    /// Suspend or resume the dwell clock (hover / touch interaction).
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn drag_start(&mut self, x: f32) {
        self.drag_origin = Some(x);
        self.drag_last = x;
    }

    pub fn drag_move(&mut self, x: f32) {
        if self.drag_origin.is_some() {
            self.drag_last = x;
        }
    }

    /// Finish a drag; a horizontal travel beyond the swipe threshold
    /// navigates once, anything smaller is noise.
    pub fn drag_release(&mut self, now: f64) {
        let Some(origin) = self.drag_origin.take() else {
            return;
        };
        let delta = origin - self.drag_last;
        if delta.abs() > SWIPE_THRESHOLD {
            if delta > 0.0 {
                self.go_next(now);
            } else {
                self.go_prev(now);
            }
        }
    }

    pub fn drag_active(&self) -> bool {
        self.drag_origin.is_some()
    }
}

/// Display the carousel. `photos` maps slide indices to loaded textures;
/// slides without one get painted placeholder art.
pub fn show(
    ui: &mut egui::Ui,
    state: &mut CarouselState,
    slides: &[Slide],
    photos: &HashMap<usize, egui::TextureHandle>,
) {
    let now = ui.input(|i| i.time);
    state.tick(now);

    if slides.is_empty() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new("No slides loaded").weak());
            });
        });
        return;
    }

    let accent = slides[state.current_index()].accent.color32();
    let visible = !state.is_transitioning();
    let alpha = ui
        .ctx()
        .animate_bool_with_time(ui.id().with("carousel-fade"), visible, COMMIT_DELAY as f32);

    let frame = egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .rounding(egui::Rounding::same(16.0))
        .inner_margin(egui::Margin::symmetric(28.0, 24.0));

    let inner = frame.show(ui, |ui| {
        // Accent wash behind everything.
        let wash_rect = ui.max_rect().expand(12.0);
        ui.painter().rect_filled(
            wash_rect,
            egui::Rounding::same(16.0),
            accent.gamma_multiply(0.05),
        );

        ui.set_min_height(380.0);
        ui.columns(2, |columns| {
            show_content(&mut columns[0], state, slides, alpha, now);
            show_photo(&mut columns[1], state, slides, photos, alpha, now);
        });

        ui.add_space(16.0);
        show_segments(ui, state, slides, accent, now);
    });

    let hovered = inner.response.hovered() || ui.rect_contains_pointer(inner.response.rect);
    state.set_paused(hovered || state.drag_active());
}

fn show_content(
    ui: &mut egui::Ui,
    state: &mut CarouselState,
    slides: &[Slide],
    alpha: f32,
    now: f64,
) {
    let slide = &slides[state.current_index()];
    let accent = slide.accent.color32();
    let fg = ui.visuals().strong_text_color();

    ui.add_space(24.0);
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(28.0, 1.0), egui::Sense::hover());
        ui.painter().line_segment(
            [rect.left_center(), rect.right_center()],
            egui::Stroke::new(1.0, ui.visuals().weak_text_color()),
        );
        ui.label(
            egui::RichText::new(format!(
                "{:02} / {:02}",
                state.current_index() + 1,
                slides.len()
            ))
            .monospace()
            .small()
            .weak(),
        );
    });
    ui.add_space(16.0);

    ui.label(
        egui::RichText::new(&slide.title)
            .size(34.0)
            .strong()
            .color(fg.gamma_multiply(alpha)),
    );
    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(slide.subtitle.to_uppercase())
            .size(11.0)
            .strong()
            .color(accent.gamma_multiply(alpha)),
    );
    ui.add_space(14.0);
    ui.label(
        egui::RichText::new(&slide.description)
            .size(13.5)
            .color(ui.visuals().text_color().gamma_multiply(alpha)),
    );
    ui.add_space(24.0);

    ui.horizontal(|ui| {
        let arrow = |text: &str| {
            egui::Button::new(egui::RichText::new(text).size(16.0))
                .min_size(egui::vec2(40.0, 40.0))
                .rounding(egui::Rounding::same(20.0))
        };
        if ui.add(arrow("←")).on_hover_text("Previous slide").clicked() {
            state.go_prev(now);
        }
        if ui.add(arrow("→")).on_hover_text("Next slide").clicked() {
            state.go_next(now);
        }
    });
}

fn show_photo(
    ui: &mut egui::Ui,
    state: &mut CarouselState,
    slides: &[Slide],
    photos: &HashMap<usize, egui::TextureHandle>,
    alpha: f32,
    now: f64,
) {
    let index = state.current_index();
    let accent = slides[index].accent.color32();

    // 3:4 portrait frame fitted to the column.
    let available = ui.available_size();
    let height = available.y.max(320.0);
    let width = (height * 0.75).min(available.x);
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(available.x, height),
        egui::Sense::click_and_drag(),
    );
    // The frame drifts with the navigation direction while faded out.
    let drift = match state.direction() {
        Direction::Next => 1.0,
        Direction::Prev => -1.0,
    } * (1.0 - alpha) * 10.0;
    let frame_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(width, height))
        .translate(egui::vec2(0.0, drift));

    // Swipe gesture: horizontal travel decides, release commits.
    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            state.drag_start(pos.x);
        }
    }
    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            state.drag_move(pos.x);
        }
    }
    if response.drag_stopped() {
        state.drag_release(now);
    }

    let painter = ui.painter_at(rect);
    let rounding = egui::Rounding::same(12.0);
    painter.rect_filled(frame_rect, rounding, ui.visuals().extreme_bg_color);

    match photos.get(&index) {
        Some(texture) => {
            let tint = egui::Color32::WHITE.gamma_multiply(0.5 + 0.5 * alpha);
            painter.image(
                texture.id(),
                frame_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                tint,
            );
        }
        None => draw_placeholder(&painter, frame_rect, accent, alpha),
    }

    // Accent overlay from the top-left corner, like the web gradient.
    painter.rect_filled(frame_rect, rounding, accent.gamma_multiply(0.08 * alpha));
    painter.rect_stroke(
        frame_rect,
        rounding,
        ui.visuals().widgets.noninteractive.bg_stroke,
    );
}

/// Placeholder art for slides whose photograph is missing or failed to
/// decode: a faint grid and a barbell glyph.
fn draw_placeholder(painter: &egui::Painter, rect: egui::Rect, accent: egui::Color32, alpha: f32) {
    let grid = accent.gamma_multiply(0.10 * alpha);
    let step = 24.0;
    let mut x = rect.left() + step;
    while x < rect.right() {
        painter.line_segment(
            [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
            egui::Stroke::new(0.5, grid),
        );
        x += step;
    }
    let mut y = rect.top() + step;
    while y < rect.bottom() {
        painter.line_segment(
            [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
            egui::Stroke::new(0.5, grid),
        );
        y += step;
    }

    let center = rect.center();
    let bar = accent.gamma_multiply(alpha);
    let half = rect.width() * 0.28;
    painter.line_segment(
        [
            egui::pos2(center.x - half, center.y),
            egui::pos2(center.x + half, center.y),
        ],
        egui::Stroke::new(3.0, bar),
    );
    for side in [-1.0_f32, 1.0] {
        let x = center.x + side * half * 0.85;
        painter.circle_filled(egui::pos2(x, center.y), 12.0, bar.gamma_multiply(0.35));
        painter.circle_stroke(
            egui::pos2(x, center.y),
            12.0,
            egui::Stroke::new(2.0, bar),
        );
    }
}

fn show_segments(
    ui: &mut egui::Ui,
    state: &mut CarouselState,
    slides: &[Slide],
    accent: egui::Color32,
    now: f64,
) {
    let track = ui.visuals().widgets.noninteractive.bg_stroke.color;
    let viewed = ui.visuals().weak_text_color();
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        let seg_width =
            (ui.available_width() - 4.0 * (slides.len() as f32 - 1.0)) / slides.len() as f32;
        for index in 0..slides.len() {
            let (rect, response) = ui
                .allocate_exact_size(egui::vec2(seg_width, 4.0), egui::Sense::click());
            let painter = ui.painter();
            painter.rect_filled(rect, egui::Rounding::same(2.0), track);
            let fill = state.segment_fill(index) / 100.0;
            if fill > 0.0 {
                let mut filled = rect;
                filled.set_width(rect.width() * fill);
                let mut color = if index == state.current_index() {
                    accent
                } else {
                    viewed
                };
                if state.is_paused() && index == state.current_index() {
                    color = color.gamma_multiply(0.6);
                }
                painter.rect_filled(filled, egui::Rounding::same(2.0), color);
            }
            let response = response.on_hover_text(format!("Go to slide {}", index + 1));
            if response.clicked() {
                state.go_to(index, now);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive the clock to `now` in small steps, like frame ticks.
    fn run_until(state: &mut CarouselState, from: f64, to: f64) {
        let mut t = from;
        while t < to {
            t = (t + 0.025).min(to);
            state.tick(t);
        }
    }

    /// Start a transition and tick through commit + settle.
    fn settle(state: &mut CarouselState, now: f64) -> f64 {
        let end = now + COMMIT_DELAY + SETTLE_DELAY;
        run_until(state, now, end);
        end
    }

    #[test]
    fn test_initial_state() {
        let state = CarouselState::new(4);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.progress(), 0.0);
        assert!(!state.is_transitioning());
        assert!(!state.is_paused());
    }

    #[test]
    fn test_wrap_next_and_prev() {
        let mut state = CarouselState::new(4);
        state.tick(0.0);
        state.go_to(3, 0.0);
        let t = settle(&mut state, 0.0);
        assert_eq!(state.current_index(), 3);

        state.go_next(t);
        let t = settle(&mut state, t);
        assert_eq!(state.current_index(), 0, "next from the last slide wraps");

        state.go_prev(t);
        let t = settle(&mut state, t);
        assert_eq!(state.current_index(), 3, "prev from the first slide wraps");
        let _ = t;
    }

    #[test]
    fn test_next_then_wrap_scenario() {
        let mut state = CarouselState::new(4);
        state.tick(0.0);
        state.go_to(2, 0.0);
        let t = settle(&mut state, 0.0);
        assert_eq!(state.current_index(), 2);
        state.go_next(t);
        let t = settle(&mut state, t);
        assert_eq!(state.current_index(), 3);
        state.go_next(t);
        let _ = settle(&mut state, t);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_go_to_current_is_noop() {
        let mut state = CarouselState::new(4);
        state.tick(0.0);
        run_until(&mut state, 0.0, 1.0);
        let progress = state.progress();
        let direction = state.direction();
        state.go_to(0, 1.0);
        assert!(!state.is_transitioning());
        assert_eq!(state.progress(), progress);
        assert_eq!(state.direction(), direction);
    }

    #[test]
    fn test_navigation_dropped_while_transitioning() {
        let mut state = CarouselState::new(4);
        state.tick(0.0);
        state.go_to(1, 0.0);
        assert!(state.is_transitioning());
        // A second request mid-flight must not retarget the transition.
        state.go_to(3, 0.1);
        state.go_next(0.2);
        state.go_prev(0.3);
        let _ = settle(&mut state, 0.0);
        assert_eq!(state.current_index(), 1);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn test_out_of_range_target_is_noop() {
        let mut state = CarouselState::new(4);
        state.tick(0.0);
        state.go_to(4, 0.0);
        state.go_to(99, 0.0);
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn test_commit_and_settle_timing() {
        let mut state = CarouselState::new(4);
        state.tick(0.0);
        state.go_to(1, 0.0);
        state.tick(0.39);
        assert_eq!(state.current_index(), 0, "index uncommitted before 400ms");
        state.tick(0.41);
        assert_eq!(state.current_index(), 1, "index commits at 400ms");
        assert!(state.is_transitioning(), "still settling");
        state.tick(0.46);
        assert!(!state.is_transitioning(), "settled after a further 50ms");
    }

    #[test]
    fn test_progress_resets_on_navigation() {
        let mut state = CarouselState::new(4);
        state.tick(0.0);
        run_until(&mut state, 0.0, 3.0);
        assert!(state.progress() > 40.0);
        state.go_next(3.0);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn test_autoplay_scenario() {
        // 4 slides, 6s dwell: at 6s the advance fires and progress resets;
        // 3s later the fresh slide is half dwelt.
        let mut state = CarouselState::new(4);
        state.tick(0.0);
        run_until(&mut state, 0.0, 6.05);
        assert!(
            state.progress() < 2.0,
            "progress just reset, got {}",
            state.progress()
        );
        run_until(&mut state, 6.05, 6.5);
        assert_eq!(state.current_index(), 1);
        run_until(&mut state, 6.5, 9.0);
        assert!(
            (state.progress() - 50.0).abs() < 2.0,
            "progress ~50 after half a dwell, got {}",
            state.progress()
        );
    }

    #[test]
    fn test_pause_halts_progress_and_advance() {
        let mut state = CarouselState::new(4);
        state.tick(0.0);
        run_until(&mut state, 0.0, 2.0);
        let frozen = state.progress();
        state.set_paused(true);
        run_until(&mut state, 2.0, 20.0);
        assert_eq!(state.current_index(), 0, "no auto-advance while paused");
        assert_eq!(state.progress(), frozen, "progress frozen while paused");
        state.set_paused(false);
        run_until(&mut state, 20.0, 24.5);
        assert_eq!(state.current_index(), 1, "autoplay resumes after unpause");
    }

    #[test]
    fn test_progress_bounds_invariant() {
        let mut state = CarouselState::new(2);
        state.tick(0.0);
        let mut t = 0.0;
        while t < 30.0 {
            t += 0.05;
            state.tick(t);
            let p = state.progress();
            assert!((0.0..=100.0).contains(&p), "progress out of bounds: {}", p);
            assert!(state.current_index() < 2);
        }
    }

    #[test]
    fn test_single_slide_never_flickers() {
        let mut state = CarouselState::new(1);
        state.tick(0.0);
        run_until(&mut state, 0.0, 20.0);
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_transitioning());
        state.go_next(20.0);
        state.go_prev(20.0);
        assert!(!state.is_transitioning(), "self-targets are dropped");
    }

    #[test]
    fn test_empty_deck_is_inert() {
        let mut state = CarouselState::new(0);
        state.tick(0.0);
        run_until(&mut state, 0.0, 10.0);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.progress(), 0.0);
        state.go_next(10.0);
        state.go_prev(10.0);
        state.go_to(0, 10.0);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn test_swipe_below_threshold_ignored() {
        let mut state = CarouselState::new(4);
        state.tick(0.0);
        state.drag_start(100.0);
        state.drag_move(55.0); // 45px leftward
        state.drag_release(0.0);
        assert!(!state.is_transitioning());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_swipe_left_fires_next_once() {
        let mut state = CarouselState::new(4);
        state.tick(0.0);
        state.drag_start(100.0);
        state.drag_move(25.0); // 75px leftward
        state.drag_release(0.0);
        assert!(state.is_transitioning());
        let _ = settle(&mut state, 0.0);
        assert_eq!(state.current_index(), 1, "exactly one advance");
        // Releasing again without a new drag does nothing.
        state.drag_release(1.0);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn test_swipe_right_fires_prev() {
        let mut state = CarouselState::new(4);
        state.tick(0.0);
        state.drag_start(25.0);
        state.drag_move(100.0); // 75px rightward
        state.drag_release(0.0);
        let _ = settle(&mut state, 0.0);
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn test_segment_fill_policy() {
        let mut state = CarouselState::new(4);
        state.tick(0.0);
        state.go_to(2, 0.0);
        let t = settle(&mut state, 0.0);
        run_until(&mut state, t, t + 3.0);
        assert_eq!(state.segment_fill(0), 100.0);
        assert_eq!(state.segment_fill(1), 100.0);
        let current = state.segment_fill(2);
        assert!(current > 0.0 && current < 100.0);
        assert_eq!(state.segment_fill(3), 0.0);
    }

    #[test]
    fn test_transition_completes_while_paused() {
        let mut state = CarouselState::new(4);
        state.tick(0.0);
        state.go_to(1, 0.0);
        state.set_paused(true);
        run_until(&mut state, 0.0, 1.0);
        assert_eq!(state.current_index(), 1, "crossfade runs on wall time");
        assert!(!state.is_transitioning());
        assert_eq!(state.progress(), 0.0, "dwell stays frozen at zero");
    }
}
