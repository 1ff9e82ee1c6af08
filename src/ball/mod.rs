//! Ball module - components and fixed-tick physics

mod components;
mod physics;

pub use components::*;
pub use physics::*;
