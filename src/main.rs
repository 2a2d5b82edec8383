//! Daywall host - runs the wallpaper against the system clock.
//!
//! Property events are read from stdin, one JSON object per line, and the
//! render surface is printed to stdout as a JSON line whenever it changes.

use std::{error::Error, path::PathBuf};

use clap::{Parser, Subcommand};
use daywall::{
    clock::SystemClock,
    config::{Config, ConfigPaths},
    intake::Inbox,
    surface::RenderSurface,
    tracing_config,
    wallpaper::{Wallpaper, ready_signal},
};
use futures::StreamExt;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{Level, debug, error, info, span, warn};

#[derive(Parser)]
#[command(name = "daywall")]
#[command(about = "Live clock wallpaper with a day/night theme")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the wallpaper, reading property events from stdin
    Run {
        /// Configuration file (defaults to the XDG config location)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also write logs to ~/.daywall/logs
        #[arg(long)]
        log_file: bool,
    },
    /// Print the configuration JSON schema
    Schema,
    /// Print the default configuration as TOML
    DefaultConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, log_file } => run(config, log_file).await,
        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&Config::schema())?);
            Ok(())
        }
        Commands::DefaultConfig => {
            print!("{}", toml::to_string_pretty(&Config::default())?);
            Ok(())
        }
    }
}

async fn run(config_path: Option<PathBuf>, log_file: bool) -> Result<(), Box<dyn Error>> {
    let config_path = match config_path {
        Some(path) => path,
        None => ConfigPaths::main_config()?,
    };
    let config = Config::load(&config_path)?;

    if log_file {
        tracing_config::init_with_file(config.general.log_level)?;
    } else {
        tracing_config::init(config.general.log_level)?;
    }
    let _span = span!(Level::INFO, "daywall").entered();
    info!(config = %config_path.display(), "Starting daywall");

    let wallpaper = Wallpaper::new(config.wallpaper, SystemClock)?;
    let surface = wallpaper.surface();
    let (inbox, receiver) = Inbox::channel();
    let (trigger, ready) = ready_signal();

    tokio::spawn(wallpaper.run(receiver, ready));
    tokio::spawn(print_surface(surface));
    tokio::spawn(read_events(inbox));

    trigger.fire();

    tokio::signal::ctrl_c().await?;
    info!("Interrupted, exiting");
    Ok(())
}

async fn read_events(inbox: Inbox) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) if line.trim().is_empty() => {}
            Ok(Some(line)) => match inbox.deliver_json(&line).await {
                Ok(true) => {}
                Ok(false) => return,
                Err(e) => warn!("Skipping event: {e}"),
            },
            Ok(None) => {
                debug!("stdin closed, no more property events");
                return;
            }
            Err(e) => {
                error!("Failed to read stdin: {e}");
                return;
            }
        }
    }
}

async fn print_surface(surface: RenderSurface) {
    let mut changes = Box::pin(surface.changes());
    let mut last = None;

    while changes.next().await.is_some() {
        let snapshot = surface.snapshot();
        if last.as_ref() == Some(&snapshot) {
            continue;
        }
        match serde_json::to_string(&snapshot) {
            Ok(line) => println!("{line}"),
            Err(e) => error!("Failed to encode surface: {e}"),
        }
        last = Some(snapshot);
    }
}
