//! Session log writer
//!
//! Drains the event bus into a compact `.evlog` text file under `logs/`.
//! Logging failures degrade to warnings; the game never stalls on I/O.

use bevy::prelude::*;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

use super::bus::EventBus;
use super::format::serialize_event;
use super::types::GameEvent;

/// Directory for session logs
pub const LOG_DIR: &str = "logs";

/// Where the current session's events end up
#[derive(Resource)]
pub struct EventLogger {
    path: Option<PathBuf>,
    pub session_id: String,
}

impl EventLogger {
    /// Start a new session log; on failure logging is disabled for the run
    pub fn new_session() -> Self {
        let session_id = Uuid::new_v4().to_string();
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();

        if let Err(e) = fs::create_dir_all(LOG_DIR) {
            warn!("Could not create {}: {}, event logging disabled", LOG_DIR, e);
            return Self {
                path: None,
                session_id,
            };
        }

        let path = PathBuf::from(LOG_DIR).join(format!("spotkick_{}.evlog", timestamp));
        info!("Logging session {} to {}", session_id, path.display());
        Self {
            path: Some(path),
            session_id,
        }
    }

    /// A logger that drops everything (headless simulation default)
    pub fn disabled() -> Self {
        Self {
            path: None,
            session_id: String::new(),
        }
    }

    /// The SessionStart event for this logger
    pub fn session_start_event(&self) -> GameEvent {
        GameEvent::SessionStart {
            session_id: self.session_id.clone(),
            timestamp: chrono::Local::now().to_rfc3339(),
        }
    }

    fn append(&self, lines: &str) {
        let Some(path) = &self.path else { return };
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut f| writeln!(f, "{}", lines));
        if let Err(e) = result {
            warn!("Failed to append to {}: {}", path.display(), e);
        }
    }
}

/// Drain pending bus events into the session log
pub fn flush_event_log(mut bus: ResMut<EventBus>, logger: Res<EventLogger>) {
    if !bus.has_pending() {
        return;
    }
    let lines = bus
        .drain()
        .iter()
        .map(|e| serialize_event(e.time_ms, &e.event))
        .collect::<Vec<_>>()
        .join("\n");
    logger.append(&lines);
}
