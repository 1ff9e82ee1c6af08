//! Hoopshot - single-player arcade basketball built with Bevy
//!
//! This crate provides all game components, resources, and systems
//! organized into modules. The simulation runs at a fixed 60 Hz tick in
//! court space (y down, per-tick velocities); rendering maps from it.

// Core modules
pub mod constants;
pub mod events;
pub mod settings;
pub mod simulation;
pub mod tuning;

// Game logic modules
pub mod ball;
pub mod court;
pub mod input;
pub mod scoring;
pub mod shooting;
pub mod ui;

// Re-export commonly used types for convenience
pub use ball::{Ball, Velocity, ball_collisions, integrate_ball, spawn_ball};
pub use constants::*;
pub use court::kinematics::{BasketRig, advance_basket};
pub use court::{
    BasketPart, CourtPos, SensorPlate, StaticBody, circle_rect_overlap, spawn_court,
    sync_render_transforms,
};
pub use events::{
    BusEvent, ConfigSnapshot, EventBus, EventLogConfig, EventLogger, GameEvent, MissReason,
    log_events, update_event_bus_time,
};
pub use input::{PlayerInput, capture_input};
pub use scoring::ScoreBoard;
pub use settings::{CurrentSettings, InitSettings, save_settings_system};
pub use shooting::{
    ActiveShot, ClockFired, ShotId, ShotLifecycle, ShotPhase, Trajectory, apply_aim_and_launch,
    check_out_of_bounds, check_scoring, predict, tick_shot_clocks,
};
pub use tuning::{GameplayTuning, PhysicsTweaks, apply_global_tuning};
pub use ui::{
    AngleText, BurstKind, ControlsHint, FireIndicator, Particle, ScoreFlash, ScoreText,
    TrajectoryDot, animate_score_flash, spawn_burst, spawn_hud, spawn_preview_dots,
    toggle_preview, update_hud_text, update_hud_visibility, update_particles, update_preview,
};
