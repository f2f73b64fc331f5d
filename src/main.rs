/*
 * Bird Flock Simulator
 *
 * Birds flock under three rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Cohesion: Steer towards the centre of the flock
 * 3. Alignment: Turn towards the flock's average heading
 *
 * and bounce elastically off each other and off the window edges.
 * The window has a control panel to adjust the rules in real-time;
 * `headless` runs the same simulation without a window.
 */

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use birdflock::{app, headless, Settings, UpdateMode};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML settings file with optional [flock], [population] and [window] sections
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of birds
    #[arg(long)]
    flock_size: Option<usize>,

    /// How the steering rules read the flock during a pass
    #[arg(long, value_enum, default_value_t = UpdateMode::Sequential)]
    mode: UpdateMode,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the simulation window (default)
    Window,

    /// Run without a window and log a summary
    Headless {
        #[arg(long)]
        ticks: u64,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = Cli::parse();
    log::info!("{args:#?}");

    let settings = load_settings(&args)?;
    log::info!("{settings:#?}");

    match args.command.unwrap_or(Command::Window) {
        Command::Window => app::run(settings, args.mode),
        Command::Headless { ticks } => {
            let summary = headless::run_default(&settings, args.mode, ticks);
            log::info!("headless run finished: {summary:#?}");
        }
    }

    Ok(())
}

fn load_settings(args: &Cli) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::from_file(path).context("failed to load settings")?,
        None => Settings::default(),
    };

    if let Some(flock_size) = args.flock_size {
        settings.population.flock_size = flock_size;
        settings.validate().context("invalid command line override")?;
    }

    Ok(settings)
}
