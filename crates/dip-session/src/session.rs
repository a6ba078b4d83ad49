//! Game session state machine.
//!
//! A `GameSession` owns the roster, the faction assignment, and the season
//! clock of one game, and moves through `Unstarted -> Active <-> Paused ->
//! Ended`. Ending is allowed from any state that is not already ended.

use std::fmt;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use dip_core::{
    FACTION_COUNT, Faction, GameClock, GameError, GameResult, Participant, ParticipantId,
};

use crate::adjudication::{Adjudicator, Unadjudicated};
use crate::draw::{Assignment, draw_factions, seat_roster};
use crate::history::{SessionEvent, SessionLog};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    /// Lobby: players may join and leave.
    Unstarted,
    /// Factions are assigned and turns are being played.
    Active,
    /// Play is suspended; the clock cannot advance.
    Paused,
    /// The game is over.
    Ended,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unstarted => "not started",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Ended => "ended",
        })
    }
}

/// One game: roster, faction assignment, lifecycle, and clock.
pub struct GameSession {
    roster: Vec<Participant>,
    lifecycle: Lifecycle,
    assignment: Option<Assignment>,
    clock: GameClock,
    log: SessionLog,
    rng: StdRng,
    adjudicator: Box<dyn Adjudicator>,
}

impl GameSession {
    /// Create an unstarted session whose faction draw is seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create an unstarted session drawing factions from `rng`.
    pub fn with_rng(rng: StdRng) -> Self {
        let mut log = SessionLog::new();
        log.append(SessionEvent::Created {
            timestamp: Utc::now(),
        });

        Self {
            roster: Vec::new(),
            lifecycle: Lifecycle::Unstarted,
            assignment: None,
            clock: GameClock::new(),
            log,
            rng,
            adjudicator: Box::new(Unadjudicated),
        }
    }

    /// Replace the adjudication engine.
    pub fn with_adjudicator(mut self, adjudicator: Box<dyn Adjudicator>) -> Self {
        self.adjudicator = adjudicator;
        self
    }

    /// Joined players in join order.
    pub fn roster(&self) -> &[Participant] {
        &self.roster
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Whether the game is over.
    pub fn is_ended(&self) -> bool {
        self.lifecycle == Lifecycle::Ended
    }

    /// The faction assignment, present once the game has started.
    pub fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }

    /// The season clock.
    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// The session log.
    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// Whether the player with `id` is on the roster.
    pub fn has_joined(&self, id: ParticipantId) -> bool {
        self.roster.iter().any(|p| p.id == id)
    }

    /// The faction held by the player with `id`, once factions are drawn.
    pub fn faction_of(&self, id: ParticipantId) -> Option<Faction> {
        self.assignment.as_ref().and_then(|a| a.faction_of(id))
    }

    /// Add a player to the lobby.
    pub fn join(&mut self, participant: Participant) -> GameResult<()> {
        if self.lifecycle != Lifecycle::Unstarted {
            return Err(GameError::AlreadyStarted);
        }
        if self.has_joined(participant.id) {
            return Err(GameError::AlreadyJoined(participant.name));
        }
        if self.roster.len() >= FACTION_COUNT {
            return Err(GameError::RosterFull);
        }

        self.log.append(SessionEvent::Joined {
            player: participant.name.clone(),
            timestamp: Utc::now(),
        });
        self.roster.push(participant);
        Ok(())
    }

    /// Remove a player from the lobby.
    pub fn leave(&mut self, participant: &Participant) -> GameResult<()> {
        if self.lifecycle != Lifecycle::Unstarted {
            return Err(GameError::AlreadyStarted);
        }
        let Some(pos) = self.roster.iter().position(|p| p.id == participant.id) else {
            return Err(GameError::NotJoined(participant.name.clone()));
        };

        let removed = self.roster.remove(pos);
        self.log.append(SessionEvent::Left {
            player: removed.name,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// Draw factions and begin play. Returns the rendered summary.
    ///
    /// Without `force` the roster must be full; with it, missing players
    /// become unfilled factions.
    pub fn start(&mut self, force: bool) -> GameResult<String> {
        if self.lifecycle != Lifecycle::Unstarted {
            return Err(GameError::AlreadyStarted);
        }
        if self.roster.len() != FACTION_COUNT && !force {
            return Err(GameError::InsufficientPlayers {
                have: self.roster.len(),
            });
        }

        let assignment = draw_factions(seat_roster(&self.roster), &mut self.rng);
        let players = assignment.filled();
        self.assignment = Some(assignment);
        self.lifecycle = Lifecycle::Active;
        self.clock = GameClock::new();

        self.log.append(SessionEvent::Started {
            players,
            forced: force && players != FACTION_COUNT,
            timestamp: Utc::now(),
        });
        Ok(self.summary())
    }

    /// Suspend an active game.
    pub fn pause(&mut self) -> GameResult<()> {
        self.require("pause", Lifecycle::Active)?;
        self.lifecycle = Lifecycle::Paused;
        self.log.append(SessionEvent::Paused {
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// Continue a paused game.
    pub fn resume(&mut self) -> GameResult<()> {
        self.require("resume", Lifecycle::Paused)?;
        self.lifecycle = Lifecycle::Active;
        self.log.append(SessionEvent::Resumed {
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// Pause an active game or resume a paused one. Returns the new state.
    pub fn toggle_pause(&mut self) -> GameResult<Lifecycle> {
        match self.lifecycle {
            Lifecycle::Paused => self.resume()?,
            _ => self.pause()?,
        }
        Ok(self.lifecycle)
    }

    /// End the game from any state except `Ended`.
    pub fn end(&mut self) -> GameResult<()> {
        if self.is_ended() {
            return Err(self.invalid("end"));
        }
        self.lifecycle = Lifecycle::Ended;
        self.log.append(SessionEvent::Ended {
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// Move the clock to the next season. Only valid while active.
    pub fn advance_season(&mut self) -> GameResult<GameClock> {
        self.require("advance the season", Lifecycle::Active)?;
        self.clock.advance();
        self.log.append(SessionEvent::SeasonAdvanced {
            clock: self.clock.to_string(),
            timestamp: Utc::now(),
        });
        Ok(self.clock)
    }

    /// Hand the current turn to the adjudicator, advancing the clock when it
    /// reports the turn resolved.
    pub fn adjudicate(&mut self) -> GameResult<String> {
        self.require("adjudicate", Lifecycle::Active)?;
        let resolution = self.adjudicator.adjudicate(&self.clock)?;
        if !resolution.advance {
            return Ok(resolution.report);
        }
        let clock = self.advance_season()?;
        Ok(format!("{}\nNow {clock}", resolution.report))
    }

    /// Pass an order from `requester` to the adjudicator.
    pub fn submit_order(&mut self, requester: &Participant, order: &str) -> GameResult<String> {
        self.require("order", Lifecycle::Active)?;
        let faction = self
            .faction_of(requester.id)
            .ok_or_else(|| GameError::NotJoined(requester.name.clone()))?;
        self.adjudicator.submit_order(faction, order)
    }

    /// Ask the adjudicator how long the current turn has left.
    pub fn time_remaining(&self) -> GameResult<String> {
        self.adjudicator.time_remaining(&self.clock)
    }

    /// Render the game state for the channel.
    ///
    /// Once factions are drawn this lists every faction in nation order with
    /// its player (or `None`) followed by the season and year; before that
    /// it lists the roster.
    pub fn summary(&self) -> String {
        let Some(assignment) = &self.assignment else {
            return self.roster_summary();
        };

        let mut out = String::new();
        for (faction, player) in assignment.iter() {
            let name = player.map_or("None", |p| p.name.as_str());
            out.push_str(&format!("{faction}: {name}\n"));
        }
        out.push_str(&self.clock.to_string());
        out
    }

    fn roster_summary(&self) -> String {
        if self.roster.is_empty() {
            return format!("No players have joined yet (0/{FACTION_COUNT}).");
        }
        let mut out = format!(
            "Waiting for players ({}/{FACTION_COUNT}):\n",
            self.roster.len()
        );
        for (i, p) in self.roster.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, p.name));
        }
        out.trim_end().to_string()
    }

    fn require(&self, action: &'static str, state: Lifecycle) -> GameResult<()> {
        if self.lifecycle == state {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn invalid(&self, action: &'static str) -> GameError {
        GameError::InvalidTransition {
            action,
            state: self.lifecycle.to_string(),
        }
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("roster", &self.roster)
            .field("lifecycle", &self.lifecycle)
            .field("assignment", &self.assignment)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}
