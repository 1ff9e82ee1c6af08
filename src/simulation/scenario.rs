//! TOML shot scenario parsing
//!
//! Scenario files describe a sequence of shots and what each should do:
//!
//! ```toml
//! name = "bank shots"
//!
//! [[shot]]
//! angle = 315.0
//! expect = "miss"
//!
//! [[shot]]
//! angle = 300.0
//! max_ticks = 400
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Complete scenario from a TOML file
#[derive(Debug, Deserialize)]
pub struct ShotScenario {
    pub name: String,
    pub description: Option<String>,
    #[serde(default, rename = "shot")]
    pub shots: Vec<ShotDef>,
}

/// One shot to take
#[derive(Debug, Clone, Deserialize)]
pub struct ShotDef {
    /// Launch angle in degrees (y-down convention; 315 aims up-right)
    pub angle: f32,
    /// Give up waiting for a resolution after this many ticks
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u32,
    /// Expected outcome; unset shots are informational only
    pub expect: Option<Expected>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expected {
    Score,
    Miss,
}

fn default_max_ticks() -> u32 {
    // A full shot clock plus the reset delay, with slack
    600
}

/// Parse a scenario file from path
pub fn parse_scenario_file(path: &Path) -> Result<ShotScenario, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    toml::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}
