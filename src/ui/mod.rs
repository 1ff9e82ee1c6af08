//! UI module - HUD text, particle effects, and the aim preview

mod effects;
mod hud;
mod preview;

pub use effects::*;
pub use hud::*;
pub use preview::*;
