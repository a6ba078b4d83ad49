//! Per-context session storage and command routing.
//!
//! The registry keeps one slot per context. Each slot has its own mutex, so
//! commands for the same game are applied one at a time while different
//! games proceed in parallel. The context map itself is locked only long
//! enough to find or insert a slot.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use dip_core::{FACTION_COUNT, GameError, GameResult, Participant};

use crate::adjudication::{Adjudicator, Unadjudicated};
use crate::command::Command;
use crate::config::BotConfig;
use crate::provision::{Effect, ProvisionPlan, TeardownPlan};
use crate::session::{GameSession, Lifecycle};

type Slot = Arc<Mutex<Option<GameSession>>>;

/// Builds the adjudicator for each new session.
pub type AdjudicatorFactory = Arc<dyn Fn() -> Box<dyn Adjudicator> + Send + Sync>;

/// What the transport should say and do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to post back to the channel.
    pub text: String,
    /// Platform changes to apply once the reply is sent.
    pub effects: Vec<Effect>,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            effects: Vec::new(),
        }
    }
}

/// Shared access to the session stored for one context.
#[derive(Clone)]
pub struct SessionHandle {
    context: String,
    slot: Slot,
}

impl SessionHandle {
    /// The context this handle belongs to.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Run `f` against the session while holding its lock.
    ///
    /// Fails with [`GameError::NotFound`] if the session was cleared after
    /// the handle was obtained.
    pub fn with<T>(&self, f: impl FnOnce(&mut GameSession) -> GameResult<T>) -> GameResult<T> {
        let mut guard = self.slot.lock();
        let session = guard.as_mut().ok_or(GameError::NotFound)?;
        f(session)
    }
}

/// Holds at most one game in progress per context.
pub struct SessionRegistry {
    slots: Mutex<HashMap<String, Slot>>,
    config: BotConfig,
    created: AtomicU64,
    adjudicators: AdjudicatorFactory,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new(config: BotConfig) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            config,
            created: AtomicU64::new(0),
            adjudicators: Arc::new(|| Box::new(Unadjudicated)),
        }
    }

    /// Use `factory` to build the adjudicator of every session created from
    /// now on.
    pub fn with_adjudicator_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn Adjudicator> + Send + Sync + 'static,
    {
        self.adjudicators = Arc::new(factory);
        self
    }

    /// The configuration the registry was built with.
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Open a new game in `context`.
    ///
    /// Fails with [`GameError::AlreadyExists`] if a game there has not ended.
    pub fn create_session(&self, context: &str) -> GameResult<SessionHandle> {
        let slot = self.slot(context);
        {
            let mut guard = slot.lock();
            if guard.as_ref().is_some_and(|s| !s.is_ended()) {
                return Err(GameError::AlreadyExists);
            }
            *guard = Some(self.fresh_session());
        }
        info!(context, "session created");
        Ok(SessionHandle {
            context: context.to_string(),
            slot,
        })
    }

    /// The game stored for `context`.
    pub fn get_session(&self, context: &str) -> GameResult<SessionHandle> {
        let slot = self.existing_slot(context).ok_or(GameError::NotFound)?;
        if slot.lock().is_none() {
            return Err(GameError::NotFound);
        }
        Ok(SessionHandle {
            context: context.to_string(),
            slot,
        })
    }

    /// Drop whatever game is stored for `context`.
    pub fn clear_session(&self, context: &str) {
        if let Some(slot) = self.existing_slot(context) {
            *slot.lock() = None;
            debug!(context, "session cleared");
        }
    }

    /// Apply `command` from `requester` to the game in `context`.
    pub fn handle(
        &self,
        context: &str,
        requester: &Participant,
        command: &Command,
    ) -> GameResult<Reply> {
        let result = self.dispatch(context, requester, command);
        if let Err(e) = &result {
            debug!(
                context,
                command = command.name(),
                player = %requester,
                error = %e,
                "command rejected"
            );
        }
        result
    }

    fn dispatch(
        &self,
        context: &str,
        requester: &Participant,
        command: &Command,
    ) -> GameResult<Reply> {
        match command {
            Command::New => {
                self.create_session(context)?;
                Ok(Reply::text(format!(
                    "New game starting! Type {}join to take a seat.",
                    self.config.prefix
                )))
            }
            Command::Unknown { name } => Err(GameError::UnknownCommand(name.clone())),
            Command::Join => self.with_session(context, |session| {
                session.join(requester.clone())?;
                debug!(context, player = %requester, "player joined");
                Ok(Reply::text(format!(
                    "Added {requester} to the game ({}/{FACTION_COUNT})",
                    session.roster().len()
                )))
            }),
            Command::Leave => self.with_session(context, |session| {
                session.leave(requester)?;
                debug!(context, player = %requester, "player left");
                Ok(Reply::text(format!(
                    "Removed {requester} from the game ({}/{FACTION_COUNT})",
                    session.roster().len()
                )))
            }),
            Command::Start | Command::ForceStart => self.with_session(context, |session| {
                let summary = session.start(*command == Command::ForceStart)?;
                let effects: Vec<Effect> = session
                    .assignment()
                    .map(|a| Effect::Provision(ProvisionPlan::for_assignment(a, &self.config)))
                    .into_iter()
                    .collect();
                info!(context, players = session.roster().len(), "game started");
                Ok(Reply {
                    text: format!("The game has begun!\n{summary}"),
                    effects,
                })
            }),
            Command::Pause => self.with_session(context, |session| {
                let state = session.toggle_pause()?;
                info!(context, state = %state, "pause toggled");
                Ok(Reply::text(match state {
                    Lifecycle::Paused => "Game paused.",
                    _ => "Game resumed.",
                }))
            }),
            Command::Resume => self.with_session(context, |session| {
                session.resume()?;
                info!(context, "game resumed");
                Ok(Reply::text("Game resumed."))
            }),
            Command::End => self.with_slot(context, |slot| {
                let session = slot.as_mut().ok_or(GameError::NotFound)?;
                session.end()?;
                let had_factions = session.assignment().is_some();
                *slot = None;
                info!(context, "game ended");
                let effects = if had_factions {
                    vec![Effect::Teardown(TeardownPlan::all_factions())]
                } else {
                    Vec::new()
                };
                Ok(Reply {
                    text: format!(
                        "Game over. Type {}new to start another.",
                        self.config.prefix
                    ),
                    effects,
                })
            }),
            Command::Status => self.with_session(context, |session| {
                Ok(Reply::text(session.summary()))
            }),
            Command::History => self.with_session(context, |session| {
                Ok(Reply::text(session.log().export_text()))
            }),
            Command::Adjudicate => self.with_session(context, |session| {
                let report = session.adjudicate()?;
                info!(context, clock = %session.clock(), "turn adjudicated");
                Ok(Reply::text(report))
            }),
            Command::Order { text } => self.with_session(context, |session| {
                Ok(Reply::text(session.submit_order(requester, text)?))
            }),
            Command::Time => self.with_session(context, |session| {
                Ok(Reply::text(session.time_remaining()?))
            }),
        }
    }

    /// Run `f` on the slot for `context` under its lock.
    fn with_slot<T>(
        &self,
        context: &str,
        f: impl FnOnce(&mut Option<GameSession>) -> GameResult<T>,
    ) -> GameResult<T> {
        let slot = self.existing_slot(context).ok_or(GameError::NotFound)?;
        let mut guard = slot.lock();
        f(&mut guard)
    }

    fn with_session<T>(
        &self,
        context: &str,
        f: impl FnOnce(&mut GameSession) -> GameResult<T>,
    ) -> GameResult<T> {
        self.with_slot(context, |slot| {
            let session = slot.as_mut().ok_or(GameError::NotFound)?;
            f(session)
        })
    }

    fn fresh_session(&self) -> GameSession {
        let n = self.created.fetch_add(1, Ordering::Relaxed);
        let rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(n)),
            None => StdRng::from_os_rng(),
        };
        GameSession::with_rng(rng).with_adjudicator((self.adjudicators)())
    }

    /// The slot for `context`, created on demand.
    ///
    /// Empty slots of other contexts are pruned on the way. A slot is only
    /// dropped while the map is its sole owner, so no caller can be holding
    /// it, and new owners must go through the map lock.
    fn slot(&self, context: &str) -> Slot {
        let mut slots = self.slots.lock();
        slots.retain(|key, slot| {
            key == context
                || Arc::strong_count(slot) > 1
                || slot.try_lock().is_none_or(|guard| guard.is_some())
        });
        Arc::clone(slots.entry(context.to_string()).or_default())
    }

    fn existing_slot(&self, context: &str) -> Option<Slot> {
        self.slots.lock().get(context).cloned()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(BotConfig::default())
    }
}
