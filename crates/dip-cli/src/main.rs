//! CLI frontend for the Diplomat game bot.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "diplomat",
    about = "Diplomat: run seven-player Diplomacy games from a chat channel",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log registry activity to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read chat lines (`[#channel] user: message`) from stdin and answer commands
    Play {
        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// RNG seed for reproducible faction draws
        #[arg(short, long)]
        seed: Option<u64>,

        /// Command prefix (default: `!`)
        #[arg(long)]
        prefix: Option<String>,

        /// Channel that accepts game commands (default: `game`)
        #[arg(long)]
        channel: Option<String>,

        /// Context key the games are stored under
        #[arg(long, default_value = "local")]
        context: String,

        /// Print the role and channel changes each reply requires
        #[arg(short, long)]
        effects: bool,
    },

    /// List the factions with their channel and role names
    Factions {
        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the effective configuration as JSON
    Config {
        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            config,
            seed,
            prefix,
            channel,
            context,
            effects,
        } => commands::load_config(config.as_deref())
            .and_then(|cfg| commands::apply_flags(cfg, seed, prefix, channel))
            .and_then(|cfg| commands::play::run(cfg, &context, effects)),
        Commands::Factions { config } => {
            commands::load_config(config.as_deref()).and_then(|cfg| commands::factions::run(&cfg))
        }
        Commands::Config { config } => {
            commands::load_config(config.as_deref()).and_then(|cfg| commands::config::run(&cfg))
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
