//! Global gameplay tuning (decoupled from the constants)
//!
//! Systems read live values from the [`PhysicsTweaks`] resource, which
//! starts from the constants and may be overridden by an optional
//! config/gameplay_tuning.json file.

use bevy::log::{info, warn};
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::*;

/// Path to the optional gameplay tuning config
pub const GAMEPLAY_TUNING_FILE: &str = "config/gameplay_tuning.json";

/// Live tuning values read by the simulation systems
#[derive(Resource, Debug, Clone)]
pub struct PhysicsTweaks {
    pub gravity_per_tick: f32,
    pub launch_power: f32,
    pub basket_speed: f32,
    pub ball_restitution: f32,
    pub backboard_restitution: f32,
    pub ball_friction: f32,
    pub angle_step: f32,
    pub shot_timeout_ms: u64,
    pub reset_delay_ms: u64,
}

impl Default for PhysicsTweaks {
    fn default() -> Self {
        Self {
            gravity_per_tick: GRAVITY_PER_TICK,
            launch_power: LAUNCH_POWER,
            basket_speed: BASKET_SPEED,
            ball_restitution: BALL_RESTITUTION,
            backboard_restitution: BACKBOARD_RESTITUTION,
            ball_friction: BALL_FRICTION,
            angle_step: ANGLE_STEP,
            shot_timeout_ms: SHOT_TIMEOUT_MS,
            reset_delay_ms: RESET_DELAY_MS,
        }
    }
}

impl PhysicsTweaks {
    /// Snapshot for the event log
    pub fn snapshot(&self) -> crate::events::ConfigSnapshot {
        crate::events::ConfigSnapshot {
            gravity_per_tick: self.gravity_per_tick,
            launch_power: self.launch_power,
            basket_speed: self.basket_speed,
            shot_timeout_ms: self.shot_timeout_ms,
            reset_delay_ms: self.reset_delay_ms,
        }
    }
}

/// Serializable tuning values stored in config. Every field is
/// optional; absent fields keep their default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayTuning {
    pub gravity_per_tick: Option<f32>,
    pub launch_power: Option<f32>,
    pub basket_speed: Option<f32>,
    pub ball_restitution: Option<f32>,
    pub backboard_restitution: Option<f32>,
    pub ball_friction: Option<f32>,
    pub angle_step: Option<f32>,
    pub shot_timeout_ms: Option<u64>,
    pub reset_delay_ms: Option<u64>,
}

impl GameplayTuning {
    /// Load the tuning file; None when it doesn't exist
    pub fn load() -> Option<Self> {
        let path = Path::new(GAMEPLAY_TUNING_FILE);
        if !path.exists() {
            return None;
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(tuning) => Some(tuning),
                Err(e) => {
                    warn!("Failed to parse {}: {}, ignoring", GAMEPLAY_TUNING_FILE, e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}, ignoring", GAMEPLAY_TUNING_FILE, e);
                None
            }
        }
    }

    pub fn apply_to(&self, tweaks: &mut PhysicsTweaks) {
        if let Some(v) = self.gravity_per_tick {
            tweaks.gravity_per_tick = v;
        }
        if let Some(v) = self.launch_power {
            tweaks.launch_power = v;
        }
        if let Some(v) = self.basket_speed {
            tweaks.basket_speed = v;
        }
        if let Some(v) = self.ball_restitution {
            tweaks.ball_restitution = v;
        }
        if let Some(v) = self.backboard_restitution {
            tweaks.backboard_restitution = v;
        }
        if let Some(v) = self.ball_friction {
            tweaks.ball_friction = v;
        }
        if let Some(v) = self.angle_step {
            tweaks.angle_step = v;
        }
        if let Some(v) = self.shot_timeout_ms {
            tweaks.shot_timeout_ms = v;
        }
        if let Some(v) = self.reset_delay_ms {
            tweaks.reset_delay_ms = v;
        }
    }
}

/// Apply the tuning file on top of the defaults, if present
pub fn apply_global_tuning(tweaks: &mut PhysicsTweaks) {
    if let Some(tuning) = GameplayTuning::load() {
        tuning.apply_to(tweaks);
        info!("Applied gameplay tuning from {}", GAMEPLAY_TUNING_FILE);
    }
}
