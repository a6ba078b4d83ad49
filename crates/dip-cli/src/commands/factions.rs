use comfy_table::{ContentArrangement, Table};

use dip_core::Faction;
use dip_session::BotConfig;

pub fn run(config: &BotConfig) -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Faction", "Channel", "Role"]);

    for faction in Faction::ALL {
        table.add_row(vec![
            faction.name().to_string(),
            format!("#{}", faction.slug()),
            faction.slug().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  Channels live under '{}'. Players get '{}', the referee '{}'.",
        config.channel_category, config.player_role, config.adjudicator_role
    );

    Ok(())
}
