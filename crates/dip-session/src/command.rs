//! Command parsing for chat input.

/// A parsed game command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open a new game in this context.
    New,
    /// Join the lobby.
    Join,
    /// Leave the lobby.
    Leave,
    /// Start with a full roster.
    Start,
    /// Start even if seats are empty.
    ForceStart,
    /// Toggle between paused and active.
    Pause,
    /// Resume a paused game.
    Resume,
    /// End the game and free the context.
    End,
    /// Show the game summary.
    Status,
    /// Show the session log.
    History,
    /// Resolve the current turn.
    Adjudicate,
    /// Submit an order for the requester's faction.
    Order {
        /// The order text as typed.
        text: String,
    },
    /// Ask how long the current turn has left.
    Time,
    /// Anything else after the prefix.
    Unknown {
        /// The unrecognized command name.
        name: String,
    },
}

impl Command {
    /// The command name as typed after the prefix.
    pub fn name(&self) -> &str {
        match self {
            Self::New => "new",
            Self::Join => "join",
            Self::Leave => "leave",
            Self::Start => "start",
            Self::ForceStart => "forcestart",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::End => "end",
            Self::Status => "status",
            Self::History => "history",
            Self::Adjudicate => "adjudicate",
            Self::Order { .. } => "order",
            Self::Time => "time",
            Self::Unknown { name } => name,
        }
    }
}

/// Parse a chat line into a command.
///
/// Returns `None` when the line does not start with `prefix` or nothing
/// follows it. Command names are case-sensitive.
pub fn parse_command(input: &str, prefix: &str) -> Option<Command> {
    let rest = input.trim().strip_prefix(prefix)?;
    let mut parts = rest.trim_start().splitn(2, char::is_whitespace);
    let name = parts.next().filter(|n| !n.is_empty())?;
    let args = parts.next().map(str::trim).unwrap_or("");

    let cmd = match name {
        "new" => Command::New,
        "join" => Command::Join,
        "leave" => Command::Leave,
        "start" => Command::Start,
        "forcestart" => Command::ForceStart,
        "pause" => Command::Pause,
        "resume" => Command::Resume,
        "end" => Command::End,
        "status" => Command::Status,
        "history" => Command::History,
        "adjudicate" => Command::Adjudicate,
        "order" => Command::Order {
            text: args.to_string(),
        },
        "time" => Command::Time,
        other => Command::Unknown {
            name: other.to_string(),
        },
    };
    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("!new", "!"), Some(Command::New));
        assert_eq!(parse_command("!join", "!"), Some(Command::Join));
        assert_eq!(parse_command("  !forcestart  ", "!"), Some(Command::ForceStart));
        assert_eq!(parse_command("!status", "!"), Some(Command::Status));
    }

    #[test]
    fn parse_order_keeps_text() {
        assert_eq!(
            parse_command("!order  A Par - Bur ", "!"),
            Some(Command::Order {
                text: "A Par - Bur".to_string()
            })
        );
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(
            parse_command("!Join", "!"),
            Some(Command::Unknown {
                name: "Join".to_string()
            })
        );
    }

    #[test]
    fn requires_prefix() {
        assert_eq!(parse_command("join", "!"), None);
        assert_eq!(parse_command("hello everyone", "!"), None);
        assert_eq!(parse_command("!", "!"), None);
        assert_eq!(parse_command("!   ", "!"), None);
    }

    #[test]
    fn custom_prefix() {
        assert_eq!(parse_command("dip: start", "dip:"), Some(Command::Start));
        assert_eq!(parse_command("!start", "dip:"), None);
    }

    #[test]
    fn name_round_trips() {
        for line in ["!new", "!leave", "!pause", "!resume", "!end", "!time", "!adjudicate"] {
            let cmd = parse_command(line, "!").unwrap();
            assert_eq!(format!("!{}", cmd.name()), line);
        }
    }
}
