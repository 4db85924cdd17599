//! HUD text - scores, shot counter, aim and power readouts

use bevy::prelude::*;

use crate::constants::*;
use crate::kicker::{AimAngle, ChargingKick, Kicker};
use crate::match_flow::MatchState;
use crate::settings::GameMode;

/// Marker for the score/shots line
#[derive(Component)]
pub struct ScoreText;

/// Marker for the aim/power line
#[derive(Component)]
pub struct AimPowerText;

/// Spawn the HUD text entities (called from setup)
pub fn spawn_hud(commands: &mut Commands) {
    commands.spawn((
        Text2d::new(""),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextLayout::new_with_justify(Justify::Center),
        TextColor(TEXT_PRIMARY),
        Transform::from_xyz(0.0, FIELD_HALF_H - 24.0, 5.0),
        ScoreText,
    ));

    commands.spawn((
        Text2d::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextLayout::new_with_justify(Justify::Left),
        TextColor(TEXT_PRIMARY),
        Transform::from_xyz(-FIELD_HALF_W + 110.0, -FIELD_HALF_H + 40.0, 5.0),
        AimPowerText,
    ));
}

/// Refresh the score line each frame
pub fn update_score_text(
    state: Res<MatchState>,
    mut query: Query<&mut Text2d, With<ScoreText>>,
) {
    for mut text in &mut query {
        text.0 = match state.mode {
            GameMode::SingleKicker => format!(
                "Score: {}   Shots: {}/{}",
                state.scores[0], state.shots_taken, state.max_shots
            ),
            GameMode::TwoLocalRoles => format!(
                "P1 {} - {} P2   Shots: {}/{}   {} kicking",
                state.scores[0], state.scores[1], state.shots_taken, state.max_shots, state.kicker
            ),
        };
    }
}

/// Refresh the aim/power line each frame
pub fn update_aim_power_text(
    kicker_query: Query<(&AimAngle, &ChargingKick), With<Kicker>>,
    mut query: Query<&mut Text2d, With<AimPowerText>>,
) {
    let Ok((aim, charging)) = kicker_query.single() else {
        return;
    };
    for mut text in &mut query {
        text.0 = format!(
            "Aim: {:.0}   Power: {:.0}%",
            aim.degrees,
            charging.power * 100.0
        );
    }
}
