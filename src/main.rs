//! Spotkick - a penalty-kick arcade game built with Bevy
//!
//! Main entry point: app setup and system registration.

use bevy::{camera::ScalingMode, prelude::*};

use spotkick::{
    AimAngle, Ball, BallFlight, BallSpin, ChargingKick, CurrentSettings, DiveIntent, DiveState,
    EventBus, EventLogger, FieldGeometry, GameConfig, GameEvent, HandPosition, HumanControlled,
    Keeper, KeeperBody, KeeperInput, KeeperReaction, KickInput, Kicker, MatchState, OutcomeBanner,
    PhysicsTweaks, Velocity, ball, constants::*, events, field, input, keeper, kicker, match_flow,
    save_settings_system, settings::Difficulty, settings::GameMode, ui,
};

fn main() {
    // Parse command-line overrides for the persisted settings
    let args: Vec<String> = std::env::args().collect();
    let difficulty_override = args.iter().position(|a| a == "--difficulty").and_then(|i| {
        args.get(i + 1).and_then(|s| match s.as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        })
    });
    let two_player = args.iter().any(|a| a == "--two-player");

    // Load persistent settings (uses defaults if file doesn't exist)
    let mut current_settings = CurrentSettings::default();
    if let Some(difficulty) = difficulty_override {
        current_settings.settings.difficulty = difficulty;
    }
    if two_player {
        current_settings.settings.mode = GameMode::TwoLocalRoles;
    }

    // Save settings on first run to ensure file exists
    if let Err(e) = current_settings.settings.save() {
        warn!("Failed to save initial settings: {}", e);
    }

    let match_state = MatchState::new(
        current_settings.settings.mode,
        current_settings.settings.difficulty,
        current_settings.settings.max_shots,
    );

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                // Set scale_factor_override to 1.0 for consistent behavior
                // on HiDPI displays
                resolution: bevy::window::WindowResolution::new(
                    FIELD_WIDTH as u32,
                    FIELD_HEIGHT as u32,
                )
                .with_scale_factor_override(1.0),
                title: "Spotkick".into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(PITCH_STRIPE_A))
        .insert_resource(current_settings)
        .insert_resource(match_state)
        .insert_resource(PhysicsTweaks::from_config())
        .insert_resource(FieldGeometry::default())
        .insert_resource(EventBus::new())
        .insert_resource(EventLogger::new_session())
        .init_resource::<KickInput>()
        .init_resource::<KeeperInput>()
        .init_resource::<OutcomeBanner>()
        .add_systems(Startup, (setup, start_session).chain())
        // Input and presentation run at render cadence
        .add_systems(
            Update,
            (
                input::capture_input,
                ui::update_score_text,
                ui::update_aim_power_text,
                ui::update_charge_gauge,
                ui::update_banner_text,
                ball::ball_roll_visual,
            ),
        )
        // Event plumbing and settings persistence
        .add_systems(
            Update,
            (
                events::update_event_bus_time,
                events::flush_event_log,
                save_settings_system,
            ),
        )
        // One simulation tick: input consumers, keeper, ball, outcome
        .add_systems(
            FixedUpdate,
            (
                kicker::kicker_move,
                kicker::aim_update,
                kicker::charge_update,
                kicker::kick_release,
                keeper::keeper_decide_autonomous,
                keeper::keeper_decide_human,
                keeper::keeper_apply_intent,
                keeper::keeper_block_shots,
                ball::ball_flight_update,
                match_flow::evaluate_outcome,
                match_flow::tick_outcome_banner,
                match_flow::perform_reset,
            )
                .chain()
                .run_if(match_flow::match_active),
        )
        .run();
}

/// Setup the game world
fn setup(mut commands: Commands, state: Res<MatchState>, geom: Res<FieldGeometry>) {
    // Camera - orthographic, shows the entire field regardless of window
    commands.spawn((
        Camera2d,
        Transform::from_xyz(0.0, 0.0, 0.0),
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: FIELD_HEIGHT,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));

    field::spawn_pitch(&mut commands);
    field::spawn_goal(&mut commands);

    // Ball on the penalty spot
    commands.spawn((
        Sprite::from_color(Color::WHITE, Vec2::splat(BALL_RADIUS * 2.0)),
        Transform::from_translation(BALL_SPAWN),
        Ball,
        Velocity::default(),
        BallSpin::default(),
        BallFlight::default(),
    ));

    // Kicker behind the spot
    let kicker = commands
        .spawn((
            Sprite::from_color(Color::srgb(0.8, 0.1, 0.1), Vec2::new(20.0, 32.0)),
            Transform::from_translation(KICKER_SPAWN),
            Kicker,
            AimAngle::default(),
            ChargingKick::default(),
        ))
        .id();
    ui::spawn_charge_gauge(&mut commands, kicker);

    // Keeper on the goal line
    let goal_center_x = geom.goal_x + geom.goal_width / 2.0;
    let keeper = commands
        .spawn((
            Sprite::from_color(Color::srgb(0.1, 0.1, 0.8), Vec2::new(24.0, 36.0)),
            Transform::from_translation(KEEPER_SPAWN),
            Keeper,
            KeeperBody::new(state.difficulty.keeper_speed(), goal_center_x),
            KeeperReaction::default(),
            DiveState::default(),
            HandPosition(KEEPER_SPAWN.truncate()),
            DiveIntent::default(),
        ))
        .id();
    if state.mode.human_keeper() {
        commands.entity(keeper).insert(HumanControlled);
    }

    ui::spawn_hud(&mut commands);
    ui::spawn_banner_text(&mut commands);
}

/// Emit the session header events once at startup
fn start_session(
    logger: Res<EventLogger>,
    state: Res<MatchState>,
    tweaks: Res<PhysicsTweaks>,
    mut bus: ResMut<EventBus>,
) {
    bus.emit(logger.session_start_event());
    bus.emit(GameEvent::Config(GameConfig {
        ball_gravity: tweaks.ball_gravity,
        ball_drag: tweaks.ball_drag,
        curve_coefficient: tweaks.curve_coefficient,
        post_restitution: tweaks.post_restitution,
        ground_restitution: tweaks.ground_restitution,
        kick_power_scale: tweaks.kick_power_scale,
        kick_spin_factor: tweaks.kick_spin_factor,
        charge_rate: tweaks.charge_rate,
        save_restitution: tweaks.save_restitution,
        keeper_speed: state.difficulty.keeper_speed(),
        max_shots: state.max_shots,
    }));
    bus.emit(GameEvent::MatchStart {
        mode: state.mode.label().to_string(),
        difficulty: state.difficulty.label().to_string(),
        max_shots: state.max_shots,
        seed: rand::random::<u64>(),
    });
}
