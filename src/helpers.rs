//! Utility functions for spotkick

use bevy::prelude::*;
use rand::Rng;

/// Reflect a velocity about a contact normal, keeping `restitution` of the
/// speed. The normal must be unit length.
pub fn reflect_velocity(velocity: Vec2, normal: Vec2, restitution: f32) -> Vec2 {
    let dot = velocity.dot(normal);
    (velocity - 2.0 * dot * normal) * restitution
}

/// Rotate a vector by an angle in radians.
pub fn rotate_vec(v: Vec2, radians: f32) -> Vec2 {
    let (sin_a, cos_a) = radians.sin_cos();
    Vec2::new(v.x * cos_a - v.y * sin_a, v.x * sin_a + v.y * cos_a)
}

/// Reflect a velocity about a normal and scatter it by a random angle.
/// Used for keeper saves so deflections stay unpredictable.
pub fn deflect_with_jitter(
    velocity: Vec2,
    normal: Vec2,
    restitution: f32,
    jitter_degrees: f32,
    rng: &mut impl Rng,
) -> Vec2 {
    let reflected = reflect_velocity(velocity, normal, restitution);
    if jitter_degrees <= 0.0 {
        return reflected;
    }
    let jitter = rng.gen_range(-jitter_degrees..jitter_degrees).to_radians();
    rotate_vec(reflected, jitter)
}

/// Move a value toward a target by a maximum delta
pub fn move_toward(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

/// Normalize an offset, falling back to a default axis when the offset is
/// degenerate (overlapping centers must not produce a NaN normal).
pub fn contact_normal(offset: Vec2, fallback: Vec2) -> Vec2 {
    let n = offset.normalize_or_zero();
    if n == Vec2::ZERO { fallback } else { n }
}

/// Spin imparted by the tangential component of a velocity against a normal
pub fn tangential_spin(velocity: Vec2, normal: Vec2, transfer: f32) -> f32 {
    (velocity.x * normal.y - velocity.y * normal.x) * transfer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_head_on() {
        let v = reflect_velocity(Vec2::new(0.0, -10.0), Vec2::Y, 0.8);
        assert!((v.y - 8.0).abs() < 1e-5);
        assert!(v.x.abs() < 1e-5);
    }

    #[test]
    fn test_reflect_preserves_tangential() {
        let v = reflect_velocity(Vec2::new(3.0, -4.0), Vec2::Y, 1.0);
        assert!((v.x - 3.0).abs() < 1e-5);
        assert!((v.y - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_move_toward_clamps_at_target() {
        assert_eq!(move_toward(0.0, 10.0, 3.0), 3.0);
        assert_eq!(move_toward(9.0, 10.0, 3.0), 10.0);
        assert_eq!(move_toward(10.0, 10.0, 3.0), 10.0);
        assert_eq!(move_toward(0.0, -10.0, 3.0), -3.0);
    }

    #[test]
    fn test_contact_normal_fallback() {
        assert_eq!(contact_normal(Vec2::ZERO, Vec2::Y), Vec2::Y);
        let n = contact_normal(Vec2::new(3.0, 4.0), Vec2::Y);
        assert!((n.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_jitter_keeps_speed() {
        let mut rng = rand::thread_rng();
        let v = Vec2::new(5.0, -12.0);
        let out = deflect_with_jitter(v, Vec2::Y, 0.7, 10.0, &mut rng);
        // Jitter only rotates; speed is exactly restitution * incoming speed
        assert!((out.length() - v.length() * 0.7).abs() < 1e-4);
    }
}
