//! Hoopshot - single-player arcade basketball built with Bevy
//!
//! Main entry point: app setup and system registration.

use bevy::camera::ScalingMode;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

use hoopshot::{
    BasketRig, CurrentSettings, EventBus, EventLogConfig, EventLogger, GameEvent, PlayerInput,
    ScoreBoard, ShotLifecycle, advance_basket, apply_aim_and_launch, apply_global_tuning, ball,
    capture_input, check_out_of_bounds, check_scoring, constants::*, court, log_events,
    save_settings_system, sync_render_transforms, tick_shot_clocks, tuning, ui,
    update_event_bus_time,
};

fn main() {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let no_log = args.iter().any(|a| a == "--no-log");

    // Check for --angle <deg> override of the starting aim
    let angle_override = args
        .iter()
        .position(|a| a == "--angle")
        .and_then(|i| args.get(i + 1).and_then(|s| s.parse::<f32>().ok()));

    // Load persistent settings (uses defaults if file doesn't exist)
    let current_settings = CurrentSettings::default();
    if let Err(e) = current_settings.settings.save() {
        warn!("Failed to save initial settings: {}", e);
    }

    // Gameplay tuning: constants, overridden by the tuning file if present
    let mut tweaks = tuning::PhysicsTweaks::default();
    apply_global_tuning(&mut tweaks);

    let lifecycle = angle_override
        .map(ShotLifecycle::new)
        .unwrap_or_default();
    let rig = BasketRig::with_speed(tweaks.basket_speed);

    // Event log for the session
    let mut logger = EventLogger::new(EventLogConfig {
        enabled: !no_log,
        ..default()
    });
    logger.start_session();
    logger.log(0, &GameEvent::Config(tweaks.snapshot()));

    // Use loaded viewport preset (clamped to valid range)
    let viewport_index = current_settings
        .settings
        .viewport_index
        .min(VIEWPORT_PRESETS.len() - 1);
    let (viewport_width, viewport_height, _) = VIEWPORT_PRESETS[viewport_index];

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    // Set scale_factor_override to 1.0 for consistent
                    // behavior on HiDPI displays
                    resolution: bevy::window::WindowResolution::new(
                        viewport_width as u32,
                        viewport_height as u32,
                    )
                    .with_scale_factor_override(1.0),
                    title: "Hoopshot".into(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
            FrameTimeDiagnosticsPlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(Time::<Fixed>::from_hz(TICK_HZ as f64))
        .insert_resource(tweaks)
        .insert_resource(rig)
        .insert_resource(lifecycle)
        .insert_resource(current_settings)
        .insert_resource(logger)
        .insert_resource(EventBus::new())
        .init_resource::<ScoreBoard>()
        .init_resource::<PlayerInput>()
        .add_systems(Startup, setup)
        // Input and bus timestamps run before the fixed tick consumes them
        .add_systems(Update, (capture_input, update_event_bus_time))
        // Simulation chain, per-tick order: basket -> launch -> integrate
        // -> collide -> score -> out-of-bounds -> clocks
        .add_systems(
            FixedUpdate,
            (
                advance_basket,
                apply_aim_and_launch,
                ball::integrate_ball,
                ball::ball_collisions,
                check_scoring,
                check_out_of_bounds,
                tick_shot_clocks,
            )
                .chain(),
        )
        // Presentation: HUD, preview, effects, render sync, logging
        .add_systems(
            Update,
            (
                ui::toggle_preview,
                ui::update_preview,
                ui::update_hud_text,
                ui::update_hud_visibility,
                ui::update_particles,
                ui::animate_score_flash,
                sync_render_transforms,
                log_events,
                save_settings_system,
            ),
        )
        .run();
}

/// Setup the game world
fn setup(mut commands: Commands, rig: Res<BasketRig>, tweaks: Res<tuning::PhysicsTweaks>) {
    // Camera - orthographic, frames the full court height regardless of
    // window size
    commands.spawn((
        Camera2d,
        Transform::from_xyz(0.0, 0.0, 0.0),
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: COURT_HEIGHT,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));

    court::spawn_court(&mut commands, &rig, &tweaks);
    ball::spawn_ball(&mut commands);
    ui::spawn_hud(&mut commands);
    ui::spawn_preview_dots(&mut commands);
}
