//! Ball flight integration and collision resolution
//!
//! Pure functions over component data; the `FixedUpdate` systems in
//! `physics.rs` are thin wrappers. One call advances exactly one tick -
//! there is no dt decoupling, so perceived ball speed tracks the tick rate.
//! That is the intended arcade behavior, not an oversight.

use bevy::prelude::*;
use rand::Rng;

use crate::ball::components::BallFlight;
use crate::constants::{BALL_RADIUS, POST_SPIN_TRANSFER, SERVE_ANGLE_MAX, SERVE_ANGLE_MIN,
    SERVE_OFFSET, SERVE_POWER_MAX, SERVE_POWER_MIN};
use crate::field::FieldGeometry;
use crate::helpers::{contact_normal, reflect_velocity, tangential_spin};
use crate::tuning::PhysicsTweaks;

/// How a flight ended this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightEnd {
    /// Speed fell below the stop threshold; ball is at rest on the field
    Settled,
    /// Ball left the field bounds
    OutOfBounds,
}

/// Velocity and spin for a kick at the given power (launch speed) and aim
/// angle in degrees. Angle 0 points along +x, -90 straight at the goal;
/// spin grows with how far the aim sits off a cardinal axis and with power,
/// so full-power straight shots fly true.
pub fn kick_velocity(power: f32, angle_degrees: f32, tweaks: &PhysicsTweaks) -> (Vec2, f32) {
    let rad = angle_degrees.to_radians();
    let velocity = Vec2::new(power * rad.cos(), -power * rad.sin());
    let power_factor = (power / tweaks.kick_power_scale).clamp(0.0, 1.0);
    let spin = (angle_degrees % 90.0) * tweaks.kick_spin_factor * power_factor;
    (velocity, spin)
}

/// Apply a kick unless the ball is already in flight. Returns whether the
/// kick took effect.
pub fn try_kick(
    flight: &mut BallFlight,
    velocity: &mut Vec2,
    spin: &mut f32,
    power: f32,
    angle_degrees: f32,
    tweaks: &PhysicsTweaks,
) -> bool {
    if flight.in_flight {
        return false;
    }
    let (v, s) = kick_velocity(power, angle_degrees, tweaks);
    *velocity = v;
    *spin = s;
    flight.in_flight = true;
    flight.shot_by_kicker = true;
    flight.just_saved = false;
    flight.left_field = false;
    true
}

/// One tick of free flight: gravity, curve force, quadratic drag, position
/// integration. No collision handling - `step_flight` layers that on top,
/// and the keeper's shot prediction reuses this directly.
pub fn integrate_step(pos: &mut Vec2, vel: &mut Vec2, spin: f32, tweaks: &PhysicsTweaks) {
    // Gravity pulls toward the kicker's end
    vel.y -= tweaks.ball_gravity;

    // Spin bends the path sideways once the ball is moving
    if vel.length() > tweaks.curve_min_speed {
        *vel += vel.perp() * spin * tweaks.curve_coefficient;
    }

    // Quadratic drag opposing the velocity
    let speed = vel.length();
    let drag = tweaks.ball_drag * speed * speed;
    *vel -= vel.normalize_or_zero() * drag;

    *pos += *vel;
}

/// Advance an in-flight ball by one tick and resolve collisions.
///
/// Resolution order: integration, ground contact, stop check, goalposts and
/// crossbar, bounds exit. On either returned `FlightEnd` the velocity and
/// spin have been zeroed; the caller owns the flag bookkeeping.
pub fn step_flight(
    pos: &mut Vec2,
    vel: &mut Vec2,
    spin: &mut f32,
    tweaks: &PhysicsTweaks,
    geom: &FieldGeometry,
) -> Option<FlightEnd> {
    integrate_step(pos, vel, *spin, tweaks);

    // Low bounce off the ground band at the kicker's end of the goal column
    if pos.y - BALL_RADIUS <= geom.ground_y && geom.in_goal_span(pos.x) {
        pos.y = geom.ground_y + BALL_RADIUS;
        if vel.y < 0.0 {
            vel.y = -vel.y * tweaks.ground_restitution;
        }
        vel.x *= tweaks.ground_friction;
    }

    // Authoritative "shot resolved" signal
    if vel.length() < tweaks.ball_stop_speed {
        *vel = Vec2::ZERO;
        *spin = 0.0;
        return Some(FlightEnd::Settled);
    }

    resolve_goal_frame(pos, vel, spin, tweaks, geom);

    if !geom.in_bounds(*pos) {
        // A single bad tick must not leak unbounded values downstream
        *pos = geom.clamp_to_field(*pos);
        *vel = Vec2::ZERO;
        *spin = 0.0;
        return Some(FlightEnd::OutOfBounds);
    }

    None
}

/// Reflect the ball off the post tips and the crossbar
fn resolve_goal_frame(
    pos: &mut Vec2,
    vel: &mut Vec2,
    spin: &mut f32,
    tweaks: &PhysicsTweaks,
    geom: &FieldGeometry,
) {
    let contact_radius = BALL_RADIUS + geom.post_radius;

    for post in [geom.left_post(), geom.right_post()] {
        if pos.distance(post) < contact_radius {
            let normal = contact_normal(*pos - post, Vec2::NEG_Y);
            *vel = reflect_velocity(*vel, normal, tweaks.post_restitution);
            *spin = tangential_spin(*vel, normal, POST_SPIN_TRANSFER);
            // Push out to the exact contact boundary so the ball cannot sink in
            *pos = post + normal * contact_radius;
            return;
        }
    }

    // Crossbar: ball top against the bar bottom, within the goal mouth
    let bar_bottom = geom.goal_line_y - geom.crossbar_thickness;
    if geom.in_goal_span(pos.x) && pos.y + BALL_RADIUS >= bar_bottom {
        pos.y = bar_bottom - BALL_RADIUS;
        if vel.y > 0.0 {
            vel.y = -vel.y * tweaks.crossbar_restitution;
        }
        *spin = vel.x * POST_SPIN_TRANSFER;
    }
}

/// Whether the ball's full circular extent lies inside the goal rectangle.
/// Eligibility (shot-by-kicker) is the caller's concern.
pub fn goal_contains(pos: Vec2, geom: &FieldGeometry) -> bool {
    pos.x - BALL_RADIUS >= geom.goal_x
        && pos.x + BALL_RADIUS <= geom.goal_x + geom.goal_width
        && pos.y + BALL_RADIUS <= geom.goal_line_y
        && pos.y - BALL_RADIUS >= geom.goal_line_y - geom.net_depth
}

/// Reposition the ball to a restart spot and clear all flight state.
/// Calling this twice in a row is the same as calling it once.
pub fn reset_to_spot(
    pos: &mut Vec2,
    vel: &mut Vec2,
    spin: &mut f32,
    flight: &mut BallFlight,
    spot: Vec2,
) {
    *pos = spot;
    *vel = Vec2::ZERO;
    *spin = 0.0;
    flight.reset();
}

/// Keeper-initiated restart. With a keeper position the ball is placed next
/// to the keeper and served downfield with randomized angle, power, and
/// spin; the serve is not a kicker shot, so it can neither be saved nor
/// score. Without a keeper the ball is parked dead at field center.
pub fn serve_from_keeper(
    pos: &mut Vec2,
    vel: &mut Vec2,
    spin: &mut f32,
    flight: &mut BallFlight,
    keeper: Option<Vec2>,
    rng: &mut impl Rng,
) {
    let Some(keeper_pos) = keeper else {
        reset_to_spot(pos, vel, spin, flight, Vec2::ZERO);
        return;
    };

    *pos = keeper_pos
        + Vec2::new(
            rng.gen_range(-SERVE_OFFSET..SERVE_OFFSET),
            rng.gen_range(-SERVE_OFFSET..SERVE_OFFSET),
        );

    let angle = rng.gen_range(SERVE_ANGLE_MIN..SERVE_ANGLE_MAX).to_radians();
    let power = rng.gen_range(SERVE_POWER_MIN..SERVE_POWER_MAX);
    *vel = Vec2::new(power * angle.cos(), -power * angle.sin());
    *spin = rng.gen_range(-1.0..1.0);
    flight.reset();
    flight.in_flight = true;
}

/// Predicted x where the ball will cross the given line, extrapolating the
/// current flight (including curve) without collisions. Falls back to the
/// last integrated x when the ball stalls or the step budget runs out.
pub fn predict_crossing_x(
    pos: Vec2,
    vel: Vec2,
    spin: f32,
    crossing_y: f32,
    max_steps: u32,
    tweaks: &PhysicsTweaks,
) -> f32 {
    let mut p = pos;
    let mut v = vel;
    for _ in 0..max_steps {
        integrate_step(&mut p, &mut v, spin, tweaks);
        if p.y >= crossing_y {
            break;
        }
        if v.length() < tweaks.ball_stop_speed {
            break;
        }
    }
    p.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    fn setup() -> (PhysicsTweaks, FieldGeometry) {
        (PhysicsTweaks::default(), FieldGeometry::default())
    }

    #[test]
    fn test_kick_speed_proportional_to_power() {
        let (tweaks, _) = setup();
        let (half, _) = kick_velocity(0.5 * KICK_POWER_SCALE, -90.0, &tweaks);
        let (full, _) = kick_velocity(KICK_POWER_SCALE, -90.0, &tweaks);
        assert!((full.length() - 2.0 * half.length()).abs() < 1e-4);
        // -90 degrees points straight at the goal
        assert!(full.x.abs() < 1e-4);
        assert!(full.y > 0.0);
    }

    #[test]
    fn test_straight_kick_has_no_spin() {
        let (tweaks, _) = setup();
        let (_, spin) = kick_velocity(KICK_POWER_SCALE, -90.0, &tweaks);
        assert!(spin.abs() < 1e-6);
        let (_, angled_spin) = kick_velocity(KICK_POWER_SCALE, -120.0, &tweaks);
        assert!(angled_spin.abs() > 1e-3);
    }

    #[test]
    fn test_kick_is_noop_while_in_flight() {
        let (tweaks, _) = setup();
        let mut flight = BallFlight::default();
        let mut vel = Vec2::ZERO;
        let mut spin = 0.0;
        assert!(try_kick(&mut flight, &mut vel, &mut spin, 10.0, -90.0, &tweaks));
        let before = vel;
        assert!(!try_kick(&mut flight, &mut vel, &mut spin, 15.0, -45.0, &tweaks));
        assert_eq!(vel, before);
        assert!(flight.in_flight);
        assert!(flight.shot_by_kicker);
    }

    #[test]
    fn test_drag_slows_the_ball() {
        let (tweaks, _) = setup();
        let mut pos = Vec2::new(0.0, 0.0);
        let mut vel = Vec2::new(12.0, 0.0);
        integrate_step(&mut pos, &mut vel, 0.0, &tweaks);
        assert!(vel.x < 12.0);
    }

    #[test]
    fn test_spin_bends_the_path() {
        let (tweaks, geom) = setup();
        let mut straight = (Vec2::new(0.0, 0.0), Vec2::new(0.0, 12.0), 0.0);
        let mut curved = (Vec2::new(0.0, 0.0), Vec2::new(0.0, 12.0), 0.5);
        for _ in 0..10 {
            let _ = step_flight(&mut straight.0, &mut straight.1, &mut straight.2, &tweaks, &geom);
            let _ = step_flight(&mut curved.0, &mut curved.1, &mut curved.2, &tweaks, &geom);
        }
        assert!(straight.0.x.abs() < 1e-3);
        assert!(curved.0.x.abs() > 1.0);
    }

    #[test]
    fn test_post_collision_dissipates_energy_and_repositions() {
        let (tweaks, geom) = setup();
        let post = geom.left_post();
        // Ball just below the post, flying straight into it
        let mut pos = post + Vec2::new(0.0, -(BALL_RADIUS + geom.post_radius) - 8.0);
        let mut vel = Vec2::new(0.0, 9.0);
        let mut spin = 0.0;
        let pre_speed = vel.length();
        let mut hit = false;
        for _ in 0..5 {
            let _ = step_flight(&mut pos, &mut vel, &mut spin, &tweaks, &geom);
            if vel.y < 0.0 {
                hit = true;
                break;
            }
        }
        assert!(hit, "ball never reached the post");
        assert!(vel.length() <= pre_speed * tweaks.post_restitution + 1e-3);
        let dist = pos.distance(post);
        assert!((dist - (BALL_RADIUS + geom.post_radius)).abs() < 1e-3);
    }

    #[test]
    fn test_crossbar_reflects_downward() {
        let (tweaks, geom) = setup();
        let bar_bottom = geom.goal_line_y - geom.crossbar_thickness;
        let mut pos = Vec2::new(0.0, bar_bottom - BALL_RADIUS - 4.0);
        let mut vel = Vec2::new(0.0, 8.0);
        let mut spin = 0.0;
        let _ = step_flight(&mut pos, &mut vel, &mut spin, &tweaks, &geom);
        assert!(vel.y < 0.0);
        assert!(pos.y + BALL_RADIUS <= bar_bottom + 1e-3);
    }

    #[test]
    fn test_bounds_exit_ends_flight() {
        let (tweaks, geom) = setup();
        let mut pos = Vec2::new(geom.half_width - 2.0, 0.0);
        let mut vel = Vec2::new(10.0, 0.0);
        let mut spin = 0.3;
        let end = step_flight(&mut pos, &mut vel, &mut spin, &tweaks, &geom);
        assert_eq!(end, Some(FlightEnd::OutOfBounds));
        assert_eq!(vel, Vec2::ZERO);
        assert_eq!(spin, 0.0);
        assert!(geom.in_bounds(pos));
    }

    #[test]
    fn test_slow_ball_settles() {
        let (tweaks, geom) = setup();
        let mut pos = Vec2::new(50.0, 0.0);
        // Barely moving; gravity and drag keep it under the stop threshold
        let mut vel = Vec2::new(0.0, 0.12);
        let mut spin = 0.1;
        let mut settled = false;
        for _ in 0..4 {
            if step_flight(&mut pos, &mut vel, &mut spin, &tweaks, &geom)
                == Some(FlightEnd::Settled)
            {
                settled = true;
                break;
            }
        }
        assert!(settled);
        assert_eq!(vel, Vec2::ZERO);
        assert_eq!(spin, 0.0);
    }

    #[test]
    fn test_reset_to_spot_is_idempotent() {
        let (tweaks, geom) = setup();
        let spot = geom.penalty_spot;
        let mut flight = BallFlight::default();
        let mut pos = Vec2::new(100.0, 100.0);
        let mut vel = Vec2::ZERO;
        let mut spin = 0.0;
        try_kick(&mut flight, &mut vel, &mut spin, 10.0, -120.0, &tweaks);
        reset_to_spot(&mut pos, &mut vel, &mut spin, &mut flight, spot);
        let first = (pos, vel, spin, flight);
        reset_to_spot(&mut pos, &mut vel, &mut spin, &mut flight, spot);
        assert_eq!(pos, first.0);
        assert_eq!(vel, Vec2::ZERO);
        assert_eq!(spin, 0.0);
        assert!(!flight.in_flight);
        assert!(!flight.shot_by_kicker);
    }

    #[test]
    fn test_goal_containment() {
        let (_, geom) = setup();
        let inside = Vec2::new(0.0, geom.goal_line_y - geom.net_depth / 2.0);
        assert!(goal_contains(inside, &geom));
        // Straddling the goal line is not yet a goal
        let straddling = Vec2::new(0.0, geom.goal_line_y);
        assert!(!goal_contains(straddling, &geom));
        // Outside the mouth horizontally
        let wide = Vec2::new(geom.goal_x - 30.0, geom.goal_line_y - geom.net_depth / 2.0);
        assert!(!goal_contains(wide, &geom));
    }

    #[test]
    fn test_serve_from_keeper_randomized_but_bounded() {
        let (_, geom) = setup();
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let mut flight = BallFlight::default();
            let mut pos = Vec2::ZERO;
            let mut vel = Vec2::ZERO;
            let mut spin = 0.0;
            let keeper = Vec2::new(0.0, geom.keeper_y);
            serve_from_keeper(&mut pos, &mut vel, &mut spin, &mut flight, Some(keeper), &mut rng);
            assert!(flight.in_flight);
            assert!(!flight.shot_by_kicker);
            assert!(pos.distance(keeper) <= SERVE_OFFSET * std::f32::consts::SQRT_2 + 1e-3);
            let speed = vel.length();
            assert!(speed >= SERVE_POWER_MIN - 1e-3 && speed <= SERVE_POWER_MAX + 1e-3);
            // Serves always push downfield, away from the goal
            assert!(vel.y < 0.0);
            assert!(spin.abs() <= 1.0);
        }
    }

    #[test]
    fn test_serve_without_keeper_parks_the_ball() {
        let mut rng = rand::thread_rng();
        let mut flight = BallFlight {
            in_flight: true,
            shot_by_kicker: true,
            ..Default::default()
        };
        let mut pos = Vec2::new(120.0, -200.0);
        let mut vel = Vec2::new(3.0, 3.0);
        let mut spin = 0.4;
        serve_from_keeper(&mut pos, &mut vel, &mut spin, &mut flight, None, &mut rng);
        assert_eq!(pos, Vec2::ZERO);
        assert!(!flight.in_flight);
        assert_eq!(vel, Vec2::ZERO);
    }

    #[test]
    fn test_full_power_straight_kick_reaches_goal() {
        // End-to-end: max power, -90 degrees, from the penalty spot, no
        // keeper. The ball must fly straight and end up contained in goal.
        let (tweaks, geom) = setup();
        let mut flight = BallFlight::default();
        let mut pos = geom.penalty_spot;
        let mut vel = Vec2::ZERO;
        let mut spin = 0.0;
        try_kick(&mut flight, &mut vel, &mut spin, tweaks.kick_power_scale, -90.0, &tweaks);
        assert!(spin.abs() < 1e-6);

        let mut scored = false;
        for _ in 0..200 {
            assert!(pos.x.abs() < 1e-3, "straight shot must not curve");
            if goal_contains(pos, &geom) {
                scored = true;
                break;
            }
            if step_flight(&mut pos, &mut vel, &mut spin, &tweaks, &geom).is_some() {
                break;
            }
        }
        assert!(scored, "full-power straight kick should enter the goal");
    }

    #[test]
    fn test_prediction_matches_straight_flight() {
        let (tweaks, geom) = setup();
        let pos = geom.penalty_spot;
        let vel = Vec2::new(0.0, 12.0);
        let x = predict_crossing_x(pos, vel, 0.0, geom.keeper_y, PREDICT_MAX_STEPS, &tweaks);
        assert!((x - pos.x).abs() < 1e-3);
    }
}
