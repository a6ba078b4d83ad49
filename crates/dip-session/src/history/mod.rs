//! Timestamped record of everything that happened to a session.

pub mod event;
pub mod log;

pub use event::SessionEvent;
pub use log::SessionLog;
