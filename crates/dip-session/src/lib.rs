//! Game-session engine for Diplomat.
//!
//! Provides the session state machine (roster, faction draw, lifecycle, and
//! season clock), a registry that keeps one game per chat context and
//! serializes commands against it, command parsing, and the plans a
//! transport needs to sync platform roles and channels.

pub mod adjudication;
pub mod command;
pub mod config;
pub mod draw;
pub mod history;
pub mod provision;
pub mod registry;
pub mod session;

pub use adjudication::{Adjudicator, Resolution, Unadjudicated};
pub use command::{Command, parse_command};
pub use config::BotConfig;
pub use draw::{Assignment, draw_factions};
pub use provision::{Effect, ProvisionPlan, TeardownPlan};
pub use registry::{Reply, SessionHandle, SessionRegistry};
pub use session::{GameSession, Lifecycle};
