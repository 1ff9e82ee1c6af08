//! Event type definitions for the logging system

use serde::{Deserialize, Serialize};

/// Why a shot was ruled a miss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissReason {
    /// Shot clock expired with the ball still live
    Timeout,
    /// Ball left the court past the margin
    OutOfBounds,
}

impl std::fmt::Display for MissReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissReason::Timeout => write!(f, "timeout"),
            MissReason::OutOfBounds => write!(f, "out of bounds"),
        }
    }
}

/// Gameplay tuning snapshot, logged once after session start
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub gravity_per_tick: f32,
    pub launch_power: f32,
    pub basket_speed: f32,
    pub shot_timeout_ms: u64,
    pub reset_delay_ms: u64,
}

/// All game events that can be logged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    /// Session started (generated once per game launch)
    SessionStart {
        session_id: String, // UUID v4
        timestamp: String,  // ISO 8601
    },
    /// Tuning snapshot (logged after session start)
    Config(ConfigSnapshot),
    /// Shot launched
    Launch {
        angle: f32,
        power: f32,
        shots_taken: u32,
        on_fire: bool,
    },
    /// Shot scored
    Score {
        score: u32,
        streak: u32,
        best_score: u32,
        basket_y: f32,
    },
    /// Shot missed
    Miss {
        reason: MissReason,
        shots_taken: u32,
    },
    /// Fresh ball placed at the spawn point
    BallReset,
}

impl GameEvent {
    /// Event type code for compact log lines
    pub fn type_code(&self) -> &'static str {
        match self {
            GameEvent::SessionStart { .. } => "SE",
            GameEvent::Config(_) => "CF",
            GameEvent::Launch { .. } => "L",
            GameEvent::Score { .. } => "G",
            GameEvent::Miss { .. } => "M",
            GameEvent::BallReset => "R",
        }
    }
}
