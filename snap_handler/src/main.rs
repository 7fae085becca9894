pub mod handlers;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use moodsnap::{Mode, Session, SnapConfig};
use tracing_subscriber::EnvFilter;
use url::Url;


#[derive(Debug, Parser)]
#[command(name = "snap_handler", about = "Snap a mood and get activity suggestions")]
struct Cli {
    /// TOML config file (falls back to MOODSNAP_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    mood_endpoint: Option<Url>,

    #[arg(long, global = true)]
    suggestion_endpoint: Option<Url>,

    /// development shows the debug panel
    #[arg(long, global = true)]
    mode: Option<Mode>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// One fetch, then print the result
    Snap {
        /// Skip the network and use the local table
        #[arg(long)]
        offline: bool,
    },
    /// Read commands from stdin until `q`
    Interactive,
}


#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let session = Session::new(&config).context("Error building session")?;

    match cli.command.unwrap_or(Command::Snap { offline: false }) {
        Command::Snap { offline } => handlers::snap_once(&session, config.mode, offline).await,
        Command::Interactive => handlers::interactive(&session, config.mode).await,
    }
}

fn load_config(cli: &Cli) -> Result<SnapConfig> {
    let mut config = SnapConfig::load(cli.config.as_deref()).context("Error loading config")?;

    if let Some(url) = &cli.mood_endpoint {
        config.mood_endpoint = url.to_owned();
    }
    if let Some(url) = &cli.suggestion_endpoint {
        config.suggestion_endpoint = url.to_owned();
    }
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    config.validate().context("Invalid command line override")?;

    Ok(config)
}
