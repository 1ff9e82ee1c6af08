//! Event logger - writes the session's events to an .evlog file
//!
//! One JSON object per line: `{"t": <ms>, "c": <type code>, "e": {...}}`.

use bevy::prelude::*;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use uuid::Uuid;

use super::bus::EventBus;
use super::types::GameEvent;

/// Configuration for event logging
#[derive(Clone)]
pub struct EventLogConfig {
    /// Directory for log files
    pub log_dir: PathBuf,
    /// Whether logging is enabled
    pub enabled: bool,
}

impl Default for EventLogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            enabled: true,
        }
    }
}

#[derive(Serialize)]
struct LogLine<'a> {
    t: u32,
    c: &'static str,
    e: &'a GameEvent,
}

/// Active event logger with file handle
#[derive(Resource)]
pub struct EventLogger {
    writer: Option<BufWriter<File>>,
    session_id: String,
    config: EventLogConfig,
}

impl EventLogger {
    /// Create a new event logger (but don't open a file yet)
    pub fn new(config: EventLogConfig) -> Self {
        Self {
            writer: None,
            session_id: String::new(),
            config,
        }
    }

    /// Open the log file and write the SessionStart line.
    /// A logger that fails to open simply stays silent.
    pub fn start_session(&mut self) {
        if !self.config.enabled {
            return;
        }

        self.session_id = Uuid::new_v4().to_string();

        if let Err(e) = std::fs::create_dir_all(&self.config.log_dir) {
            warn!("Failed to create log directory: {}", e);
            return;
        }

        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("{}_{}.evlog", stamp, &self.session_id[..8]);
        let path = self.config.log_dir.join(filename);

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
        {
            Ok(file) => {
                self.writer = Some(BufWriter::new(file));
                info!(
                    "Event logging started: {} (session: {})",
                    path.display(),
                    &self.session_id[..8]
                );
                self.log(
                    0,
                    &GameEvent::SessionStart {
                        session_id: self.session_id.clone(),
                        timestamp: chrono::Utc::now().to_rfc3339(),
                    },
                );
            }
            Err(e) => {
                warn!("Failed to open event log: {}", e);
            }
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Write one event; flushes so a crash loses at most nothing
    pub fn log(&mut self, time_ms: u32, event: &GameEvent) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        let line = LogLine {
            t: time_ms,
            c: event.type_code(),
            e: event,
        };
        match serde_json::to_string(&line) {
            Ok(json) => {
                if writeln!(writer, "{}", json).and_then(|_| writer.flush()).is_err() {
                    // Drop the writer on IO failure rather than warn every frame
                    self.writer = None;
                    warn!("Event log write failed; logging disabled for this session");
                }
            }
            Err(e) => warn!("Failed to serialize event: {}", e),
        }
    }
}

/// System: drain the bus into the log file once per frame
pub fn log_events(mut logger: ResMut<EventLogger>, mut bus: ResMut<EventBus>) {
    if bus.pending_count() == 0 {
        return;
    }
    for ev in bus.drain() {
        logger.log(ev.time_ms, &ev.event);
    }
}
