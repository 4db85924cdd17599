//! Charge gauge UI components and systems

use bevy::prelude::*;

use crate::kicker::{ChargingKick, Kicker};

const GAUGE_WIDTH: f32 = 8.0;
const GAUGE_HEIGHT: f32 = 40.0;
const GAUGE_OFFSET_X: f32 = -24.0;

/// Charge gauge background component
#[derive(Component)]
pub struct ChargeGaugeBackground;

/// Charge gauge fill component
#[derive(Component)]
pub struct ChargeGaugeFill;

/// Spawn the gauge as children of the kicker (called from setup)
pub fn spawn_charge_gauge(commands: &mut Commands, kicker: Entity) {
    let gauge_bg = commands
        .spawn((
            Sprite::from_color(Color::BLACK, Vec2::new(GAUGE_WIDTH, GAUGE_HEIGHT)),
            Transform::from_xyz(GAUGE_OFFSET_X, 0.0, 0.5),
            ChargeGaugeBackground,
        ))
        .id();
    commands.entity(kicker).add_child(gauge_bg);

    let gauge_fill = commands
        .spawn((
            Sprite::from_color(
                Color::srgb(0.0, 0.8, 0.0),
                Vec2::new(GAUGE_WIDTH - 2.0, GAUGE_HEIGHT - 2.0),
            ),
            Transform::from_xyz(GAUGE_OFFSET_X, 0.0, 0.6).with_scale(Vec3::new(1.0, 0.0, 1.0)),
            ChargeGaugeFill,
        ))
        .id();
    commands.entity(kicker).add_child(gauge_fill);
}

/// Update charge gauge display
pub fn update_charge_gauge(
    kicker_query: Query<&ChargingKick, With<Kicker>>,
    mut fill_query: Query<(&mut Sprite, &mut Transform), With<ChargeGaugeFill>>,
) {
    let Ok(charging) = kicker_query.single() else {
        return;
    };
    let fill_height = GAUGE_HEIGHT - 2.0;

    for (mut sprite, mut transform) in &mut fill_query {
        if !charging.charging || charging.power < 0.001 {
            // Not charging - hide the fill (scale to 0)
            transform.scale.y = 0.0;
            continue;
        }

        transform.scale.y = charging.power;

        // Bar grows from the bottom of the gauge
        transform.translation.y = -fill_height / 2.0 * (1.0 - charging.power);

        // Color transition: green (0%) -> red (100%)
        let r = charging.power * 0.9;
        let g = (1.0 - charging.power) * 0.8;
        sprite.color = Color::srgb(r, g, 0.0);
    }
}
