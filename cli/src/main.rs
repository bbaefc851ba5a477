//! Virtual Pet Simulator
//!
//! Terminal front end: a numbered menu driving the simulation engine.

mod commands;
mod menu;
mod state;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use state::{AppState, DEFAULT_MAX_ADVANCE_HOURS};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "petsim")]
#[command(about = "Take care of virtual pets", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for the random generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with simulation tuning
    #[arg(long)]
    config: Option<PathBuf>,

    /// Largest number of hours a single "advance time" may cover
    #[arg(long, default_value_t = DEFAULT_MAX_ADVANCE_HOURS)]
    max_hours: u32,

    /// Log level written to stderr
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the menu
    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = commands::config::load_config(cli.config.as_deref())?;
    let seed = cli.seed.unwrap_or_else(rand::random::<u64>);
    info!(seed, max_hours = cli.max_hours, "starting session");

    let mut state = AppState::new(config, seed, cli.max_hours);
    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&mut state, &mut stdin.lock(), &mut stdout.lock())?;

    info!(seed = state.seed, pets = state.world.pet_count(), "session ended");
    Ok(())
}
