//! Headless simulation - app builder, shot runner, and TOML scenarios

mod app_builder;
mod runner;
mod scenario;

pub use app_builder::HeadlessAppBuilder;
pub use runner::{Outcome, ShotReport, run_scenario, run_single_shot, run_sweep};
pub use scenario::{Expected, ShotDef, ShotScenario, parse_scenario_file};
