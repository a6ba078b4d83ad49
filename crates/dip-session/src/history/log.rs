//! Session log storage and text export.

use serde::{Deserialize, Serialize};

use super::event::SessionEvent;

/// A chronological log of session events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionLog {
    events: Vec<SessionEvent>,
}

impl SessionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to the log.
    pub fn append(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Export the log as plain text, one event per line.
    pub fn export_text(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            out.push_str(&format!(
                "[{}] {}\n",
                event.timestamp().format("%Y-%m-%d %H:%M:%S"),
                event.describe()
            ));
        }
        out.trim_end().to_string()
    }
}
