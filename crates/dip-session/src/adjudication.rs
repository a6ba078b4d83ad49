//! Extension point for the move-adjudication engine.
//!
//! The session owns the lifecycle and the clock; an [`Adjudicator`] owns
//! everything about orders and their resolution. Until a real engine is
//! plugged in, [`Unadjudicated`] rejects every request with
//! [`GameError::NotImplemented`].

use dip_core::{Faction, GameClock, GameError, GameResult};

/// Outcome of resolving one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Human-readable report of what happened this turn.
    pub report: String,
    /// Whether the turn is complete and the clock should move on.
    pub advance: bool,
}

/// A pluggable engine that collects and resolves orders.
pub trait Adjudicator: Send {
    /// Record an order text issued by the holder of `faction`.
    fn submit_order(&mut self, faction: Faction, order: &str) -> GameResult<String>;

    /// Resolve the orders for the turn at `clock`.
    fn adjudicate(&mut self, clock: &GameClock) -> GameResult<Resolution>;

    /// Describe how much time is left before the current turn resolves.
    fn time_remaining(&self, clock: &GameClock) -> GameResult<String>;
}

/// Placeholder engine used until adjudication is implemented.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unadjudicated;

impl Adjudicator for Unadjudicated {
    fn submit_order(&mut self, _faction: Faction, _order: &str) -> GameResult<String> {
        Err(GameError::NotImplemented("order"))
    }

    fn adjudicate(&mut self, _clock: &GameClock) -> GameResult<Resolution> {
        Err(GameError::NotImplemented("adjudicate"))
    }

    fn time_remaining(&self, _clock: &GameClock) -> GameResult<String> {
        Err(GameError::NotImplemented("time"))
    }
}
