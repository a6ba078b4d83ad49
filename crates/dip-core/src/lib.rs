//! Core types for Diplomat: participants, factions, the season clock, and errors.
//!
//! This crate holds the value types shared by the session engine and any
//! transport that drives it. Nothing here performs I/O or owns mutable game
//! state.

/// Season/year turn clock.
pub mod clock;
/// Error taxonomy shared by every game operation.
pub mod error;
/// The seven fixed factions.
pub mod faction;
/// Participant identities supplied by the transport.
pub mod participant;

/// Re-export clock types.
pub use clock::{GameClock, START_YEAR, Season};
/// Re-export error types.
pub use error::{GameError, GameResult};
/// Re-export faction types.
pub use faction::{FACTION_COUNT, Faction};
/// Re-export participant types.
pub use participant::{Participant, ParticipantId};
