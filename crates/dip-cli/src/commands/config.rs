use dip_session::BotConfig;

pub fn run(config: &BotConfig) -> Result<(), String> {
    let json = serde_json::to_string_pretty(config).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
