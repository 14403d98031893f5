#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Grid Claim arena.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gridclaim_controller::GameController;
use gridclaim_core::{ControlCommand, Simulation, WELCOME_BANNER};
use gridclaim_rendering::{RecordingSurface, SurfaceSize};
use gridclaim_rendering_macroquad::MacroquadBackend;
use gridclaim_world::ArenaWorld;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::ArenaConfig;

/// Watch bots compete for territory on a square grid.
#[derive(Debug, Parser)]
#[command(name = "gridclaim", version)]
struct Args {
    /// TOML file with `[game]` and `[window]` settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of rounds per game.
    #[arg(long)]
    rounds: Option<u32>,

    /// Side length of the board in cells.
    #[arg(long)]
    grid_length: Option<u32>,

    /// Seed for bot spawn positions and random walks.
    #[arg(long)]
    seed: Option<u64>,

    /// Window width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Disable vertical sync.
    #[arg(long)]
    no_vsync: bool,

    /// Play a whole game without opening a window and print the standings.
    #[arg(long)]
    headless: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<ArenaConfig> {
        let mut config = match &self.config {
            Some(path) => ArenaConfig::load(path)?,
            None => ArenaConfig::default(),
        };

        if let Some(rounds) = self.rounds {
            config.game.rounds = rounds;
        }
        if let Some(grid_length) = self.grid_length {
            config.game.grid_length = grid_length;
        }
        if let Some(seed) = self.seed {
            config.game.seed = seed;
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if self.no_vsync {
            config.window.vsync = false;
        }
        Ok(config)
    }
}

/// Entry point for the Grid Claim command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let config = args.resolve_config()?;
    info!(
        rounds = config.game.rounds,
        grid_length = config.game.grid_length,
        seed = config.game.seed,
        "{}",
        WELCOME_BANNER
    );

    if args.headless {
        run_headless(&config)
    } else {
        run_windowed(config)
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")
}

fn build_world(config: &ArenaConfig) -> Result<ArenaWorld> {
    ArenaWorld::with_default_roster(config.game.grid_length, config.game.seed)
        .context("failed to create arena")
}

fn run_windowed(config: ArenaConfig) -> Result<()> {
    let controller_config = config.controller_config()?;
    let world = build_world(&config)?;

    MacroquadBackend::new()
        .with_vsync(config.window.vsync)
        .with_window_size(config.window.width, config.window.height)
        .run(move |surface| Ok(GameController::new(world, surface, controller_config)?))
}

fn run_headless(config: &ArenaConfig) -> Result<()> {
    let controller_config = config.controller_config()?;
    let world = build_world(config)?;
    let surface = RecordingSurface::new(SurfaceSize::new(
        config.window.width as f32,
        config.window.height as f32,
    ));

    let mut controller = GameController::new(world, surface, controller_config)
        .context("failed to set up headless game")?;
    controller
        .handle_command(ControlCommand::FastForward)
        .context("failed to start game")?;
    while !controller.is_done() {
        let _ = controller.process().context("failed to process round")?;
    }

    let scene = controller.scene().context("failed to capture final standings")?;
    info!(
        rounds = controller.simulation().current_round(),
        frames = controller.surface().frames_presented(),
        "headless game finished"
    );
    for (rank, row) in scene.scoreboard.iter().enumerate() {
        println!("{:>2}. {:<12} {:>3} %", rank + 1, row.name, row.percentage);
    }
    Ok(())
}
