//! Tunable constants for hoopshot
//!
//! All gameplay values are defined here for easy tweaking. The
//! simulation runs in court space: origin at the top-left corner of the
//! court, y grows downward, velocities in pixels per fixed tick.

use bevy::prelude::*;
use std::time::Duration;

// =============================================================================
// COURT DIMENSIONS / TIMESTEP
// =============================================================================

pub const COURT_WIDTH: f32 = 1000.0;
pub const COURT_HEIGHT: f32 = 700.0;

/// Fixed simulation rate
pub const TICK_HZ: f32 = 60.0;
/// Duration of one fixed tick (clocks are advanced by exactly this)
pub const TICK: Duration = Duration::from_micros(16_667);

/// Distance past a court edge before a flying ball counts as gone
pub const OFFSCREEN_MARGIN: f32 = 50.0;

// =============================================================================
// COLORS
// =============================================================================

pub const BACKGROUND_COLOR: Color = Color::srgb(0.08, 0.09, 0.16);
pub const BALL_COLOR: Color = Color::srgb(1.0, 0.42, 0.21);
pub const RIM_COLOR: Color = Color::srgb(0.91, 0.30, 0.24);
pub const SENSOR_COLOR: Color = Color::srgba(0.75, 0.22, 0.17, 0.5);
pub const BACKBOARD_COLOR: Color = Color::srgb(0.17, 0.24, 0.31);
pub const PREVIEW_COLOR: Color = Color::srgba(0.40, 0.49, 0.92, 0.6);

pub const TEXT_PRIMARY: Color = Color::srgb(0.95, 0.9, 0.8);
pub const TEXT_SECONDARY: Color = Color::srgb(0.7, 0.65, 0.55);
pub const TEXT_ACCENT: Color = Color::srgb(0.9, 0.75, 0.4);

// =============================================================================
// BALL
// =============================================================================

pub const BALL_RADIUS: f32 = 20.0;
pub const BALL_RESTITUTION: f32 = 0.7;
/// Tangential velocity fraction lost per surface contact
pub const BALL_FRICTION: f32 = 0.05;
pub const BALL_DENSITY: f32 = 0.04;
/// Post-bounce normal speed below this seats the ball instead of bouncing
pub const BALL_REST_SPEED: f32 = 1.6;
/// Where every fresh ball appears (court space)
pub const BALL_SPAWN: Vec2 = Vec2::new(100.0, COURT_HEIGHT - 100.0);

// =============================================================================
// PHYSICS (per-tick units)
// =============================================================================

pub const GRAVITY_PER_TICK: f32 = 0.8;

// =============================================================================
// BASKET
// =============================================================================

/// Basket center x, fixed for the session
pub const BASKET_X: f32 = COURT_WIDTH - 150.0;
/// Vertical oscillation bounds for the basket center
pub const BASKET_MIN_Y: f32 = 100.0;
pub const BASKET_MAX_Y: f32 = COURT_HEIGHT - 100.0;
pub const BASKET_SPEED: f32 = 2.0;

/// Rim posts sit this far to either side of the basket center
pub const RIM_POST_OFFSET_X: f32 = 40.0;
pub const RIM_POST_SIZE: Vec2 = Vec2::new(10.0, 10.0);
/// Scoring plate hangs just below the rim line
pub const SENSOR_OFFSET_Y: f32 = 5.0;
pub const SENSOR_SIZE: Vec2 = Vec2::new(90.0, 5.0);
pub const BACKBOARD_OFFSET: Vec2 = Vec2::new(45.0, -20.0);
pub const BACKBOARD_SIZE: Vec2 = Vec2::new(10.0, 100.0);
pub const BACKBOARD_RESTITUTION: f32 = 0.8;

// =============================================================================
// GROUND
// =============================================================================

/// Invisible floor just below the visible court
pub const GROUND_CENTER: Vec2 = Vec2::new(COURT_WIDTH / 2.0, COURT_HEIGHT + 50.0);
pub const GROUND_SIZE: Vec2 = Vec2::new(COURT_WIDTH, 100.0);

// =============================================================================
// SHOOTING
// =============================================================================

/// Launch speed, pixels per tick (power is fixed; only the angle is aimed)
pub const LAUNCH_POWER: f32 = 18.0;
/// Aim starts 45 degrees up-right (y-down convention)
pub const START_ANGLE: f32 = 315.0;
/// Degrees per tick while an aim key is held
pub const ANGLE_STEP: f32 = 2.0;
/// Unresolved shots are ruled a miss after this long
pub const SHOT_TIMEOUT_MS: u64 = 5000;
/// Delay between scoring and the ball reset, so the ball drops through the net
pub const RESET_DELAY_MS: u64 = 800;
/// Streak length that counts as being on fire
pub const STREAK_FIRE: u32 = 3;

// =============================================================================
// TRAJECTORY PREVIEW
// =============================================================================

pub const TRAJECTORY_POINTS: usize = 30;
pub const TRAJECTORY_DOT_SIZE: f32 = 4.0;

// =============================================================================
// PARTICLES
// =============================================================================

pub const PARTICLES_SUCCESS: usize = 20;
pub const PARTICLES_FIRE: usize = 10;
pub const PARTICLES_MISS: usize = 12;
pub const PARTICLE_LIFETIME: f32 = 1.0;
/// Particle ring radius range (the scatter distance from the burst origin)
pub const PARTICLE_MIN_DISTANCE: f32 = 50.0;
pub const PARTICLE_MAX_DISTANCE: f32 = 100.0;

// =============================================================================
// RENDER LAYERS
// =============================================================================

pub const Z_COURT: f32 = 0.0;
pub const Z_PREVIEW: f32 = 1.0;
pub const Z_BALL: f32 = 2.0;
pub const Z_PARTICLES: f32 = 3.0;
pub const Z_TEXT: f32 = 5.0;

// =============================================================================
// VIEWPORT PRESETS (for different screen sizes)
// =============================================================================

/// Window presets: (width, height, label). The camera always frames the
/// full court height regardless of window size.
pub const VIEWPORT_PRESETS: &[(f32, f32, &str)] = &[
    (1000.0, 700.0, "1000x700 (native)"),
    (1500.0, 1050.0, "1500x1050"),
    (2000.0, 1400.0, "2000x1400"),
];
