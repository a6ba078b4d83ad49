use crate::faction::FACTION_COUNT;

/// Alias for `Result<T, GameError>`.
pub type GameResult<T> = Result<T, GameError>;

/// Reasons a command against a game session can be rejected.
///
/// All variants are precondition failures: they are reported back to the
/// requester and never abort the process.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A session is already in progress in this context.
    #[error("a game is already in progress")]
    AlreadyExists,

    /// No session exists in this context.
    #[error("no game in progress")]
    NotFound,

    /// The participant is already on the roster.
    #[error("{0} is already in this game")]
    AlreadyJoined(String),

    /// The participant is not on the roster (or holds no faction).
    #[error("{0} is not in this game")]
    NotJoined(String),

    /// The roster already holds one player per faction.
    #[error("sorry, only {} players may join a game", FACTION_COUNT)]
    RosterFull,

    /// The game has already left the lobby.
    #[error("the game has already started")]
    AlreadyStarted,

    /// Not enough players to start without forcing.
    #[error(
        "need {} players to start, have {have} (use forcestart to fill empty seats)",
        FACTION_COUNT
    )]
    InsufficientPlayers {
        /// Number of players currently on the roster.
        have: usize,
    },

    /// The requested lifecycle change is not allowed from the current state.
    #[error("cannot {action} while the game is {state}")]
    InvalidTransition {
        /// The attempted operation.
        action: &'static str,
        /// The lifecycle state the session was in.
        state: String,
    },

    /// The command is reserved for the adjudication engine.
    #[error("'{0}' is not implemented yet")]
    NotImplemented(&'static str),

    /// The command name is not recognized.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The command was issued outside the game channel.
    #[error("wrong channel, game commands belong in #{0}")]
    WrongChannel(String),
}
