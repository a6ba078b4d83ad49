//! Configuration for the game bot.

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`BotConfig::prefix`].
pub const ENV_PREFIX: &str = "DIPLOMAT_PREFIX";
/// Environment variable overriding [`BotConfig::game_channel`].
pub const ENV_GAME_CHANNEL: &str = "DIPLOMAT_GAME_CHANNEL";
/// Environment variable overriding [`BotConfig::seed`].
pub const ENV_SEED: &str = "DIPLOMAT_SEED";

/// Settings shared by the registry and the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Trigger prefix that marks a chat line as a command.
    pub prefix: String,
    /// Only commands issued in this channel are accepted.
    pub game_channel: String,
    /// RNG seed for reproducible faction draws; OS entropy when unset.
    pub seed: Option<u64>,
    /// Role given to every seated player.
    pub player_role: String,
    /// Role allowed into every faction channel.
    pub adjudicator_role: String,
    /// Category the faction channels are created under.
    pub channel_category: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            game_channel: "game".to_string(),
            seed: None,
            player_role: "Diplomat".to_string(),
            adjudicator_role: "Adjudicator".to_string(),
            channel_category: "Diplomacy".to_string(),
        }
    }
}

impl BotConfig {
    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Set the command prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the game channel.
    pub fn with_game_channel(mut self, channel: impl Into<String>) -> Self {
        self.game_channel = channel.into();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Apply overrides from a variable lookup such as `std::env::var`.
    ///
    /// Empty values are ignored. An unparsable seed is returned as an error
    /// naming the offending value.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(prefix) = get(ENV_PREFIX) {
            self.prefix = prefix;
        }
        if let Some(channel) = get(ENV_GAME_CHANNEL) {
            self.game_channel = channel;
        }
        if let Some(seed) = get(ENV_SEED) {
            let parsed = seed
                .trim()
                .parse::<u64>()
                .map_err(|_| format!("invalid {ENV_SEED} '{seed}': expected an integer"))?;
            self.seed = Some(parsed);
        }
        Ok(self)
    }

    /// Check that the settings can drive a transport.
    ///
    /// An empty prefix would turn every chat line into a command, and an
    /// empty game channel could never match.
    pub fn validate(&self) -> Result<(), String> {
        if self.prefix.trim().is_empty() {
            return Err("invalid prefix: must not be empty".to_string());
        }
        if self.game_channel.trim().is_empty() {
            return Err("invalid game channel: must not be empty".to_string());
        }
        Ok(())
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, String> {
        self.with_overrides(|key| std::env::var(key).ok())
    }
}
