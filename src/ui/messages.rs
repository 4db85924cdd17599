//! Transient outcome banners and the game-over screen text

use bevy::prelude::*;

use crate::constants::*;
use crate::match_flow::{BannerKind, MatchPhase, MatchState, OutcomeBanner};
use crate::settings::GameMode;

/// Marker for the big center banner
#[derive(Component)]
pub struct BannerText;

/// Spawn the banner text entity (called from setup)
pub fn spawn_banner_text(commands: &mut Commands) {
    commands.spawn((
        Text2d::new(""),
        TextFont {
            font_size: 64.0,
            ..default()
        },
        TextLayout::new_with_justify(Justify::Center),
        TextColor(TEXT_GOAL),
        Transform::from_xyz(0.0, 0.0, 10.0),
        Visibility::Hidden,
        BannerText,
    ));
}

/// Show the current outcome banner, or the final score once the match ends
pub fn update_banner_text(
    banner: Res<OutcomeBanner>,
    state: Res<MatchState>,
    mut query: Query<(&mut Text2d, &mut TextColor, &mut Visibility), With<BannerText>>,
) {
    for (mut text, mut color, mut visibility) in &mut query {
        if state.phase == MatchPhase::GameOver {
            *visibility = Visibility::Visible;
            *color = TextColor(TEXT_PRIMARY);
            text.0 = match state.mode {
                GameMode::SingleKicker => {
                    format!("Game Over!\nFinal Score: {}", state.scores[0])
                }
                GameMode::TwoLocalRoles => format!(
                    "Game Over!\nP1 {} - {} P2",
                    state.scores[0], state.scores[1]
                ),
            };
            continue;
        }

        match banner.kind {
            Some(kind) if banner.frames > 0 => {
                *visibility = Visibility::Visible;
                let (label, banner_color) = match kind {
                    BannerKind::Goal => ("GOOOAL!", TEXT_GOAL),
                    BannerKind::Missed => ("MISSED!", TEXT_MISS),
                    BannerKind::Saved => ("SAVED!", TEXT_MISS),
                };
                text.0 = label.to_string();
                *color = TextColor(banner_color);
            }
            _ => {
                *visibility = Visibility::Hidden;
            }
        }
    }
}
