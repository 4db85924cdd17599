//! Input module - buffered input resources and the capture_input system
//!
//! Key map: the kicker moves with WASD, aims with Left/Right arrows, and
//! charges with Space. In two-player mode the keeper dives with J/L/I/K
//! (fire-once; presses during a dive are dropped) and walks with H and
//! Semicolon.

use bevy::prelude::*;

use crate::keeper::DiveDirection;

/// Buffered input state for the kicking player
#[derive(Resource, Default)]
pub struct KickInput {
    pub move_dir: Vec2,
    /// -1.0 aiming left, 1.0 aiming right, 0.0 idle
    pub aim_dir: f32,
    /// Space held - power keeps building
    pub charge_held: bool,
    /// Space released - execute the kick (accumulates until consumed)
    pub charge_released: bool,
}

/// Buffered input state for a human-controlled keeper
#[derive(Resource, Default)]
pub struct KeeperInput {
    /// -1.0 walking left, 1.0 walking right, 0.0 idle
    pub walk_dir: f32,
    /// Dive command, fire-once per press (accumulates until consumed)
    pub dive: Option<DiveDirection>,
}

/// Runs in Update to capture input state before it's consumed by the
/// FixedUpdate gameplay systems.
pub fn capture_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut kick: ResMut<KickInput>,
    mut keeper: ResMut<KeeperInput>,
) {
    // Kicker movement (continuous - overwrite each frame)
    let mut move_dir = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        move_dir.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        move_dir.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        move_dir.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        move_dir.x += 1.0;
    }
    kick.move_dir = move_dir;

    // Aiming (continuous)
    let mut aim_dir = 0.0;
    if keyboard.pressed(KeyCode::ArrowLeft) {
        aim_dir -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowRight) {
        aim_dir += 1.0;
    }
    kick.aim_dir = aim_dir;

    // Charge - accumulate the release edge until the kick system consumes it
    let charge_held_now = keyboard.pressed(KeyCode::Space);
    if kick.charge_held && !charge_held_now {
        kick.charge_released = true;
    }
    kick.charge_held = charge_held_now;

    // Keeper walk (continuous)
    let mut walk_dir = 0.0;
    if keyboard.pressed(KeyCode::KeyH) {
        walk_dir -= 1.0;
    }
    if keyboard.pressed(KeyCode::Semicolon) {
        walk_dir += 1.0;
    }
    keeper.walk_dir = walk_dir;

    // Keeper dives - fire once per press, accumulate until consumed
    let dive = if keyboard.just_pressed(KeyCode::KeyJ) {
        Some(DiveDirection::Left)
    } else if keyboard.just_pressed(KeyCode::KeyL) {
        Some(DiveDirection::Right)
    } else if keyboard.just_pressed(KeyCode::KeyI) {
        Some(DiveDirection::Up)
    } else if keyboard.just_pressed(KeyCode::KeyK) {
        Some(DiveDirection::Down)
    } else {
        None
    };
    if dive.is_some() {
        keeper.dive = dive;
    }
}
