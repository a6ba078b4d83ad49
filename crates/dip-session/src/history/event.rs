//! Session event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single lifecycle or roster change recorded in the session log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The session was opened.
    Created {
        /// When the session was created.
        timestamp: DateTime<Utc>,
    },
    /// A player joined the roster.
    Joined {
        /// Display name of the player.
        player: String,
        /// When the player joined.
        timestamp: DateTime<Utc>,
    },
    /// A player left the roster before the game started.
    Left {
        /// Display name of the player.
        player: String,
        /// When the player left.
        timestamp: DateTime<Utc>,
    },
    /// Factions were drawn and the game began.
    Started {
        /// Number of seated players (the rest are empty seats).
        players: usize,
        /// Whether the start was forced with fewer than seven players.
        forced: bool,
        /// When the game started.
        timestamp: DateTime<Utc>,
    },
    /// The game was paused.
    Paused {
        /// When the game was paused.
        timestamp: DateTime<Utc>,
    },
    /// The game was resumed.
    Resumed {
        /// When the game was resumed.
        timestamp: DateTime<Utc>,
    },
    /// A turn was resolved and the clock moved on.
    SeasonAdvanced {
        /// The new season and year, e.g. `"Fall 1901"`.
        clock: String,
        /// When the clock advanced.
        timestamp: DateTime<Utc>,
    },
    /// The game was ended.
    Ended {
        /// When the game ended.
        timestamp: DateTime<Utc>,
    },
}

impl SessionEvent {
    /// When the event happened.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Created { timestamp }
            | Self::Joined { timestamp, .. }
            | Self::Left { timestamp, .. }
            | Self::Started { timestamp, .. }
            | Self::Paused { timestamp }
            | Self::Resumed { timestamp }
            | Self::SeasonAdvanced { timestamp, .. }
            | Self::Ended { timestamp } => *timestamp,
        }
    }

    /// One-line human description without the timestamp.
    pub fn describe(&self) -> String {
        match self {
            Self::Created { .. } => "Game created".to_string(),
            Self::Joined { player, .. } => format!("{player} joined"),
            Self::Left { player, .. } => format!("{player} left"),
            Self::Started {
                players, forced, ..
            } => {
                if *forced {
                    format!("Game force-started with {players} players")
                } else {
                    format!("Game started with {players} players")
                }
            }
            Self::Paused { .. } => "Game paused".to_string(),
            Self::Resumed { .. } => "Game resumed".to_string(),
            Self::SeasonAdvanced { clock, .. } => format!("Advanced to {clock}"),
            Self::Ended { .. } => "Game ended".to_string(),
        }
    }
}
