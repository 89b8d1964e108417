// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Animated pose illustrations for the dataset showcase.
//!
//! Each exercise gets a stick figure drawn in a 120x200 (row: 140x200)
//! design space and interpolated between a top and a bottom keyframe on a
//! ping-pong clock, so the figure performs the movement continuously.

use crate::models::exercise::ExerciseKind;
use crate::util::anim::{ease_in_out, lerp, ping_pong};

/// Colors for a pose figure, sampled from the active visuals.
pub struct PoseStyle {
    pub figure: egui::Color32,
    pub accent: egui::Color32,
    pub muted: egui::Color32,
    pub background: egui::Color32,
}

impl PoseStyle {
    pub fn from_visuals(visuals: &egui::Visuals, accent: egui::Color32) -> Self {
        Self {
            figure: visuals.strong_text_color(),
            accent,
            muted: visuals.weak_text_color(),
            background: visuals.extreme_bg_color,
        }
    }
}

/// Maps design-space coordinates into a screen rect, preserving aspect.
struct Space {
    origin: egui::Pos2,
    scale: f32,
}

impl Space {
    fn fit(rect: egui::Rect, width: f32, height: f32) -> Self {
        let scale = (rect.width() / width).min(rect.height() / height);
        let origin = egui::pos2(
            rect.center().x - width * scale / 2.0,
            rect.center().y - height * scale / 2.0,
        );
        Self { origin, scale }
    }

    fn at(&self, x: f32, y: f32) -> egui::Pos2 {
        egui::pos2(self.origin.x + x * self.scale, self.origin.y + y * self.scale)
    }

    fn stroke(&self, width: f32, color: egui::Color32) -> egui::Stroke {
        egui::Stroke::new(width * self.scale.clamp(0.6, 1.6), color)
    }
}

/// Draw the animated figure for `kind` into `rect`. `time` is the UI clock
/// in seconds; one rep takes a full ping-pong period.
pub fn draw(painter: &egui::Painter, rect: egui::Rect, kind: ExerciseKind, time: f64, style: &PoseStyle) {
    match kind {
        ExerciseKind::Ohp => draw_ohp(painter, rect, time, style),
        ExerciseKind::Squat => draw_squat(painter, rect, time, style),
        ExerciseKind::Row => draw_row(painter, rect, time, style),
    }
}

fn ground(painter: &egui::Painter, space: &Space, x0: f32, x1: f32, y: f32, style: &PoseStyle) {
    painter.extend(egui::Shape::dashed_line(
        &[space.at(x0, y), space.at(x1, y)],
        space.stroke(1.5, style.muted),
        4.0,
        4.0,
    ));
}

fn joint(painter: &egui::Painter, space: &Space, pos: egui::Pos2, style: &PoseStyle) {
    let r = 3.0 * space.scale.clamp(0.6, 1.6);
    painter.circle_filled(pos, r, style.background);
    painter.circle_stroke(pos, r, space.stroke(1.5, style.figure));
}

fn head(painter: &egui::Painter, space: &Space, pos: egui::Pos2, style: &PoseStyle) {
    let r = 9.0 * space.scale.clamp(0.6, 1.6);
    painter.circle_filled(pos, r, style.background);
    painter.circle_stroke(pos, r, space.stroke(2.0, style.figure));
}

fn draw_ohp(painter: &egui::Painter, rect: egui::Rect, time: f64, style: &PoseStyle) {
    let space = Space::fit(rect, 120.0, 200.0);
    // 0 = bar racked at the shoulders, 1 = lockout overhead.
    let k = ease_in_out(ping_pong(time, 3.0));
    let body = space.stroke(2.5, style.figure);

    ground(painter, &space, 20.0, 100.0, 180.0, style);

    // Legs stay planted.
    for seg in [
        [(50.0, 100.0), (45.0, 140.0)],
        [(45.0, 140.0), (45.0, 180.0)],
        [(70.0, 100.0), (75.0, 140.0)],
        [(75.0, 140.0), (75.0, 180.0)],
        [(35.0, 180.0), (55.0, 180.0)],
        [(65.0, 180.0), (85.0, 180.0)],
        [(50.0, 100.0), (70.0, 100.0)],
    ] {
        painter.line_segment([space.at(seg[0].0, seg[0].1), space.at(seg[1].0, seg[1].1)], body);
    }

    // Shoulders rise slightly with the press.
    let shoulder_y = lerp(50.0, 45.0, k);
    let l_shoulder = space.at(40.0, shoulder_y);
    let r_shoulder = space.at(80.0, shoulder_y);
    painter.line_segment([space.at(50.0, 100.0), l_shoulder], body);
    painter.line_segment([space.at(70.0, 100.0), r_shoulder], body);
    painter.line_segment([l_shoulder, r_shoulder], body);

    // Elbows travel from flared-down to stacked under the bar.
    let l_elbow = space.at(lerp(30.0, 35.0, k), lerp(75.0, 30.0, k));
    let r_elbow = space.at(lerp(90.0, 85.0, k), lerp(75.0, 30.0, k));
    let bar_y = lerp(50.0, 10.0, k);
    painter.line_segment([l_shoulder, l_elbow], body);
    painter.line_segment([l_elbow, space.at(40.0, bar_y)], body);
    painter.line_segment([r_shoulder, r_elbow], body);
    painter.line_segment([r_elbow, space.at(80.0, bar_y)], body);

    // Barbell.
    painter.line_segment(
        [space.at(20.0, bar_y), space.at(100.0, bar_y)],
        space.stroke(3.5, style.accent),
    );

    head(painter, &space, space.at(60.0, lerp(25.0, 20.0, k)), style);
    for pos in [l_shoulder, r_shoulder, l_elbow, r_elbow] {
        joint(painter, &space, pos, style);
    }
}

fn draw_squat(painter: &egui::Painter, rect: egui::Rect, time: f64, style: &PoseStyle) {
    let space = Space::fit(rect, 120.0, 200.0);
    // 0 = standing tall, 1 = in the hole.
    let k = ease_in_out(ping_pong(time, 3.0));
    let body = space.stroke(2.5, style.figure);

    ground(painter, &space, 20.0, 100.0, 170.0, style);
    painter.line_segment([space.at(70.0, 170.0), space.at(90.0, 170.0)], body);

    let ankle = space.at(70.0, 170.0);
    let knee = space.at(lerp(70.0, 95.0, k), 120.0);
    let hip = space.at(lerp(70.0, 45.0, k), lerp(70.0, 130.0, k));
    let shoulder = space.at(lerp(70.0, 75.0, k), lerp(30.0, 75.0, k));
    let hand = space.at(lerp(60.0, 65.0, k), lerp(45.0, 90.0, k));

    painter.line_segment([ankle, knee], body);
    painter.line_segment([knee, hip], body);
    painter.line_segment([hip, shoulder], body);
    painter.line_segment([shoulder, hand], body);

    head(
        painter,
        &space,
        space.at(lerp(70.0, 85.0, k), lerp(12.0, 55.0, k)),
        style,
    );

    // Bar rides on the shoulder joint.
    painter.circle_filled(shoulder, 5.0 * space.scale.clamp(0.6, 1.6), style.accent);

    // Hip-angle cue fades in toward the bottom of the rep.
    let cue = style.accent.gamma_multiply(ease_in_out(k));
    painter.extend(egui::Shape::dashed_line(
        &[hip, egui::pos2(hip.x + 18.0 * space.scale, hip.y)],
        egui::Stroke::new(1.5, cue),
        2.0,
        2.0,
    ));

    for pos in [knee, hip, shoulder, hand] {
        joint(painter, &space, pos, style);
    }
}

fn draw_row(painter: &egui::Painter, rect: egui::Rect, time: f64, style: &PoseStyle) {
    let space = Space::fit(rect, 140.0, 200.0);
    // 0 = arms extended, 1 = bar pulled to the torso. Rows are quicker.
    let k = ease_in_out(ping_pong(time, 2.4));
    let body = space.stroke(2.5, style.figure);

    ground(painter, &space, 20.0, 120.0, 170.0, style);
    painter.line_segment([space.at(70.0, 170.0), space.at(90.0, 170.0)], body);

    let ankle = space.at(70.0, 170.0);
    let knee = space.at(80.0, 140.0);
    let hip = space.at(40.0, 100.0);
    let shoulder = space.at(90.0, 60.0);
    painter.line_segment([ankle, knee], body);
    painter.line_segment([knee, hip], body);
    painter.line_segment([hip, shoulder], body);

    head(painter, &space, space.at(105.0, 45.0), style);

    // Hinge-angle reference line and label.
    painter.extend(egui::Shape::dashed_line(
        &[hip, space.at(90.0, 100.0)],
        space.stroke(1.5, style.muted),
        3.0,
        3.0,
    ));
    painter.text(
        space.at(68.0, 90.0),
        egui::Align2::LEFT_CENTER,
        "45°",
        egui::FontId::proportional(8.0 * space.scale.clamp(0.6, 1.6)),
        style.accent,
    );

    let elbow = space.at(lerp(85.0, 65.0, k), lerp(95.0, 55.0, k));
    let bar = space.at(lerp(85.0, 75.0, k), lerp(130.0, 95.0, k));
    painter.line_segment([shoulder, elbow], body);
    painter.line_segment([elbow, bar], body);

    // Plates.
    let plate_r = 14.0 * space.scale.clamp(0.6, 1.6);
    painter.circle_filled(bar, plate_r, style.figure.gamma_multiply(0.1));
    painter.circle_filled(bar, 5.0 * space.scale.clamp(0.6, 1.6), style.accent);

    for pos in [knee, hip, shoulder, elbow] {
        joint(painter, &space, pos, style);
    }
}
