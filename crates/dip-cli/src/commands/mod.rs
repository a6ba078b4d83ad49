pub mod config;
pub mod factions;
pub mod play;

use std::fs;
use std::path::Path;

use dip_session::BotConfig;

/// Load the configuration file (if any) and apply environment overrides.
///
/// The result is validated, so a bad file or variable fails here.
pub fn load_config(path: Option<&Path>) -> Result<BotConfig, String> {
    let config = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|e| format!("cannot read config '{}': {e}", path.display()))?;
            BotConfig::from_json(&raw)
                .map_err(|e| format!("invalid config '{}': {e}", path.display()))?
        }
        None => BotConfig::default(),
    };
    let config = config.with_env_overrides()?;
    config.validate()?;
    Ok(config)
}

/// Command-line flags win over the file and the environment.
pub fn apply_flags(
    mut config: BotConfig,
    seed: Option<u64>,
    prefix: Option<String>,
    channel: Option<String>,
) -> Result<BotConfig, String> {
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(prefix) = prefix {
        config = config.with_prefix(prefix);
    }
    if let Some(channel) = channel {
        config = config.with_game_channel(channel);
    }
    config.validate()?;
    Ok(config)
}
