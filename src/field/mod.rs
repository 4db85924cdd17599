//! Field geometry and pitch scenery
//!
//! `FieldGeometry` is handed to the simulation systems once at setup and
//! never mutated during a match. The spawn functions below are pure
//! presentation.

use bevy::prelude::*;

use crate::constants::*;

/// Read-only layout of the field, goal mouth, and penalty spot.
///
/// Coordinates are world units, origin at field center, y-up. The goal
/// mouth sits on the top edge and gravity pulls toward the kicker's end.
#[derive(Resource, Clone, Copy, Debug)]
pub struct FieldGeometry {
    pub half_width: f32,
    pub half_height: f32,
    /// Left edge of the goal mouth
    pub goal_x: f32,
    pub goal_width: f32,
    pub goal_line_y: f32,
    /// How far the net region extends from the goal line into the field
    pub net_depth: f32,
    pub post_inset: f32,
    pub post_radius: f32,
    pub crossbar_thickness: f32,
    /// Top of the ground band at the kicker's end
    pub ground_y: f32,
    pub penalty_spot: Vec2,
    pub keeper_y: f32,
}

impl Default for FieldGeometry {
    fn default() -> Self {
        Self {
            half_width: FIELD_HALF_W,
            half_height: FIELD_HALF_H,
            goal_x: GOAL_X,
            goal_width: GOAL_WIDTH,
            goal_line_y: GOAL_LINE_Y,
            net_depth: GOAL_NET_DEPTH,
            post_inset: POST_INSET,
            post_radius: POST_RADIUS,
            crossbar_thickness: CROSSBAR_THICKNESS,
            ground_y: GROUND_Y,
            penalty_spot: Vec2::new(PENALTY_SPOT_X, PENALTY_SPOT_Y),
            keeper_y: KEEPER_Y,
        }
    }
}

impl FieldGeometry {
    /// Collision point of the left post tip
    pub fn left_post(&self) -> Vec2 {
        Vec2::new(self.goal_x + self.post_inset, self.goal_line_y)
    }

    /// Collision point of the right post tip
    pub fn right_post(&self) -> Vec2 {
        Vec2::new(self.goal_x + self.goal_width - self.post_inset, self.goal_line_y)
    }

    /// Whether an x coordinate lies within the goal mouth span
    pub fn in_goal_span(&self, x: f32) -> bool {
        x >= self.goal_x && x <= self.goal_x + self.goal_width
    }

    /// Whether a point is inside the field bounds
    pub fn in_bounds(&self, pos: Vec2) -> bool {
        pos.x.abs() <= self.half_width && pos.y.abs() <= self.half_height
    }

    /// Clamp a point into the field bounds
    pub fn clamp_to_field(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            pos.x.clamp(-self.half_width, self.half_width),
            pos.y.clamp(-self.half_height, self.half_height),
        )
    }

    /// Lateral range the keeper's body center may occupy inside the goal
    pub fn keeper_span(&self, keeper_half_width: f32) -> (f32, f32) {
        (
            self.goal_x + keeper_half_width,
            self.goal_x + self.goal_width - keeper_half_width,
        )
    }
}

/// Spawn the striped pitch, boundary lines, and penalty markings
pub fn spawn_pitch(commands: &mut Commands) {
    let stripe_height = 20.0;
    let stripe_count = (FIELD_HEIGHT / stripe_height) as i32;
    for i in 0..stripe_count {
        let color = if i % 2 == 0 { PITCH_STRIPE_A } else { PITCH_STRIPE_B };
        let y = FIELD_HALF_H - stripe_height / 2.0 - i as f32 * stripe_height;
        commands.spawn((
            Sprite::from_color(color, Vec2::new(FIELD_WIDTH, stripe_height)),
            Transform::from_xyz(0.0, y, -1.0),
        ));
    }

    // Goal line and midfield line
    for y in [FIELD_HALF_H - 2.0, -FIELD_HALF_H + 2.0] {
        commands.spawn((
            Sprite::from_color(LINE_COLOR, Vec2::new(FIELD_WIDTH, 4.0)),
            Transform::from_xyz(0.0, y, 0.0),
        ));
    }

    // Penalty area outline
    let area_bottom = FIELD_HALF_H - PENALTY_AREA_DEPTH;
    commands.spawn((
        Sprite::from_color(LINE_COLOR, Vec2::new(PENALTY_AREA_WIDTH, 2.0)),
        Transform::from_xyz(0.0, area_bottom, 0.0),
    ));
    for x in [-PENALTY_AREA_WIDTH / 2.0, PENALTY_AREA_WIDTH / 2.0] {
        commands.spawn((
            Sprite::from_color(LINE_COLOR, Vec2::new(2.0, PENALTY_AREA_DEPTH)),
            Transform::from_xyz(x, FIELD_HALF_H - PENALTY_AREA_DEPTH / 2.0, 0.0),
        ));
    }

    // Penalty spot
    commands.spawn((
        Sprite::from_color(LINE_COLOR, Vec2::new(8.0, 8.0)),
        Transform::from_xyz(PENALTY_SPOT_X, PENALTY_SPOT_Y, 0.0),
    ));
}

/// Spawn the goal frame: posts, crossbar, and a translucent net region
pub fn spawn_goal(commands: &mut Commands) {
    let post_height = GOAL_NET_DEPTH;
    let post_y = GOAL_LINE_Y - post_height / 2.0;

    for x in [GOAL_X + POST_INSET, GOAL_X + GOAL_WIDTH - POST_INSET] {
        commands.spawn((
            Sprite::from_color(LINE_COLOR, Vec2::new(POST_RADIUS * 2.0, post_height)),
            Transform::from_xyz(x, post_y, 0.5),
        ));
    }

    commands.spawn((
        Sprite::from_color(
            LINE_COLOR,
            Vec2::new(GOAL_WIDTH, CROSSBAR_THICKNESS),
        ),
        Transform::from_xyz(0.0, GOAL_LINE_Y - CROSSBAR_THICKNESS / 2.0, 0.5),
    ));

    // Net region tint
    commands.spawn((
        Sprite::from_color(
            Color::srgba(1.0, 1.0, 1.0, 0.15),
            Vec2::new(GOAL_WIDTH, GOAL_NET_DEPTH),
        ),
        Transform::from_xyz(0.0, GOAL_LINE_Y - GOAL_NET_DEPTH / 2.0, 0.2),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_sit_inside_goal_mouth() {
        let geom = FieldGeometry::default();
        let left = geom.left_post();
        let right = geom.right_post();
        assert!(left.x < right.x);
        assert!(geom.in_goal_span(left.x));
        assert!(geom.in_goal_span(right.x));
        assert_eq!(left.y, geom.goal_line_y);
    }

    #[test]
    fn test_clamp_to_field() {
        let geom = FieldGeometry::default();
        let clamped = geom.clamp_to_field(Vec2::new(1000.0, -1000.0));
        assert_eq!(clamped, Vec2::new(geom.half_width, -geom.half_height));
        assert!(geom.in_bounds(clamped));
    }

    #[test]
    fn test_keeper_span_narrower_than_goal() {
        let geom = FieldGeometry::default();
        let (lo, hi) = geom.keeper_span(KEEPER_BODY_WIDTH / 2.0);
        assert!(lo > geom.goal_x);
        assert!(hi < geom.goal_x + geom.goal_width);
        assert!(lo < hi);
    }
}
