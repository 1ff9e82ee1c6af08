//! Game event logging
//!
//! The EventBus enables decoupled communication between game systems:
//! the shot lifecycle emits Launch/Score/Miss events, and the logger
//! drains them into an .evlog file for later analysis.

mod bus;
mod logger;
mod types;

pub use bus::{BusEvent, EventBus, update_event_bus_time};
pub use logger::{EventLogConfig, EventLogger, log_events};
pub use types::{ConfigSnapshot, GameEvent, MissReason};
