use std::collections::HashMap;
use std::io::{self, BufRead};

use colored::Colorize;
use tracing::warn;

use dip_core::{GameError, Participant};
use dip_session::{BotConfig, Effect, SessionRegistry, parse_command};

/// One line of chat: who said what, and where.
#[derive(Debug, PartialEq, Eq)]
struct ChatLine<'a> {
    channel: Option<&'a str>,
    user: &'a str,
    text: &'a str,
}

/// Parse `[#channel] user: message`.
fn parse_chat_line(line: &str) -> Option<ChatLine<'_>> {
    let line = line.trim();
    let (channel, rest) = match line.strip_prefix('#') {
        Some(after) => {
            let (channel, rest) = after.split_once(char::is_whitespace)?;
            (Some(channel), rest)
        }
        None => (None, line),
    };
    let (user, text) = rest.split_once(':')?;
    let user = user.trim();
    if user.is_empty() {
        return None;
    }
    Some(ChatLine {
        channel,
        user,
        text: text.trim(),
    })
}

/// Hands out stable ids to chat users by name.
#[derive(Default)]
struct Directory {
    ids: HashMap<String, u64>,
}

impl Directory {
    fn participant(&mut self, name: &str) -> Participant {
        let next = self.ids.len() as u64 + 1;
        let id = *self.ids.entry(name.to_string()).or_insert(next);
        Participant::new(id, name)
    }
}

pub fn run(config: BotConfig, context: &str, show_effects: bool) -> Result<(), String> {
    let registry = SessionRegistry::new(config);
    let BotConfig {
        prefix,
        game_channel,
        ..
    } = registry.config();
    let mut directory = Directory::default();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        if line.trim().is_empty() {
            continue;
        }
        let Some(chat) = parse_chat_line(&line) else {
            warn!(line = line.trim(), "ignoring malformed chat line");
            continue;
        };
        let Some(command) = parse_command(chat.text, prefix) else {
            continue;
        };

        let requester = directory.participant(chat.user);
        let in_game_channel = chat.channel.is_none_or(|c| c == game_channel.as_str());
        let result = if in_game_channel {
            registry.handle(context, &requester, &command)
        } else {
            Err(GameError::WrongChannel(game_channel.clone()))
        };

        match result {
            Ok(reply) => {
                println!("{}\n", reply.text);
                if show_effects {
                    for effect in &reply.effects {
                        let steps = match effect {
                            Effect::Provision(plan) => plan.describe(),
                            Effect::Teardown(plan) => plan.describe(),
                        };
                        println!("{}\n", steps.dimmed());
                    }
                }
            }
            Err(e) => {
                warn!(user = chat.user, command = command.name(), error = %e, "command rejected");
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
