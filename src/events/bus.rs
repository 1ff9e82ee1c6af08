//! Event Bus - central hub for cross-module communication
//!
//! Systems emit events to the bus; the logger drains them once per
//! frame. Headless runs that don't care about logging can inspect the
//! drained events directly, or build a disabled bus that drops them.

use bevy::prelude::*;

use super::types::GameEvent;

/// Timestamped event for the event bus
#[derive(Debug, Clone)]
pub struct BusEvent {
    /// Time in milliseconds since session start
    pub time_ms: u32,
    /// The event data
    pub event: GameEvent,
}

/// Central event bus for cross-module communication
#[derive(Resource)]
pub struct EventBus {
    /// Events emitted this frame, waiting to be drained
    pending: Vec<BusEvent>,
    /// Current elapsed time in milliseconds (for timestamping)
    elapsed_ms: u32,
    /// Whether the bus is enabled (disabled buses drop events)
    enabled: bool,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Create a new enabled event bus
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            elapsed_ms: 0,
            enabled: true,
        }
    }

    /// Create a disabled event bus (events are dropped)
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    /// Update the elapsed time (called each frame)
    pub fn update_time(&mut self, elapsed_secs: f32) {
        self.elapsed_ms = (elapsed_secs * 1000.0) as u32;
    }

    /// Emit an event to the bus
    pub fn emit(&mut self, event: GameEvent) {
        if !self.enabled {
            return;
        }
        self.pending.push(BusEvent {
            time_ms: self.elapsed_ms,
            event,
        });
    }

    /// Get pending events without draining them
    pub fn peek(&self) -> &[BusEvent] {
        &self.pending
    }

    /// Drain all pending events
    pub fn drain(&mut self) -> Vec<BusEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }
}

/// System to update the event bus time each frame
pub fn update_event_bus_time(mut bus: ResMut<EventBus>, time: Res<Time>) {
    bus.update_time(time.elapsed_secs());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::types::MissReason;

    #[test]
    fn test_emit_and_drain() {
        let mut bus = EventBus::new();
        bus.update_time(1.5);

        bus.emit(GameEvent::Miss {
            reason: MissReason::Timeout,
            shots_taken: 3,
        });

        assert_eq!(bus.pending_count(), 1);
        let events = bus.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].time_ms, 1500);
        assert_eq!(bus.pending_count(), 0);
    }

    #[test]
    fn test_disabled_bus_drops_events() {
        let mut bus = EventBus::disabled();
        bus.emit(GameEvent::BallReset);
        assert_eq!(bus.pending_count(), 0);
    }

    #[test]
    fn test_score_event_round_trip() {
        let mut bus = EventBus::new();
        bus.emit(GameEvent::Score {
            score: 4,
            streak: 2,
            best_score: 7,
            basket_y: 350.0,
        });

        let events = bus.drain();
        if let GameEvent::Score { score, streak, .. } = &events[0].event {
            assert_eq!(*score, 4);
            assert_eq!(*streak, 2);
        } else {
            panic!("Wrong event type");
        }
    }
}
