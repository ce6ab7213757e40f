//! Weather desk: per-city weather records, simulated hourly forecasts,
//! alerts, and continent reports.
//!
//! Single-process interactive application that:
//! 1. Seeds the city registry from configuration
//! 2. Optionally restores a saved snapshot
//! 3. Runs the menu shell on stdin/stdout

mod config;
mod glossary;
mod shell;

use std::io;
use std::path::PathBuf;

use analysis::ForecastSimulator;
use clap::Parser;
use common::Error;
use registry::CityRegistry;
use tracing::{error, info, warn};

use crate::config::ConfigOverrides;
use crate::shell::Shell;

/// Weather Desk
#[derive(Parser)]
#[command(name = "weather-desk", about = "Per-city weather records, forecasts and reports")]
struct Cli {
    /// Config file (TOML). Missing file means built-in defaults.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Snapshot file for save/load.
    #[arg(long)]
    data_file: Option<String>,

    /// Fixed RNG seed for reproducible forecasts.
    #[arg(long)]
    seed: Option<u64>,

    /// Start with an empty registry instead of the built-in cities.
    #[arg(long)]
    no_defaults: bool,

    /// Load the snapshot file on startup.
    #[arg(long)]
    load: bool,
}

fn main() {
    // Initialize logging. Stdout belongs to the shell.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "weather_desk=info,registry=info,analysis=info".into()
            }),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    info!("🌦️  Weather Desk starting up...");

    let cfg = match config::load_config(
        &cli.config,
        ConfigOverrides {
            data_file: cli.data_file,
            forecast_seed: cli.seed,
            no_defaults: cli.no_defaults,
            load_on_start: cli.load,
        },
    ) {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Data file: {}, seed defaults: {}, load on start: {}, forecast seed: {:?}",
        cfg.data_file, cfg.seed_default_cities, cfg.load_on_start, cfg.forecast_seed
    );

    let mut registry = if cfg.seed_default_cities {
        CityRegistry::with_records(cfg.cities)
    } else {
        CityRegistry::new()
    };

    let data_file = PathBuf::from(&cfg.data_file);
    if cfg.load_on_start {
        match registry::load(&mut registry, &data_file) {
            Ok(summary) => info!(
                "Restored {} cities from {}",
                summary.added,
                data_file.display()
            ),
            Err(Error::FileNotFound(path)) => {
                warn!("No snapshot at {}; keeping seeded cities", path.display())
            }
            Err(e) => warn!("Snapshot not loaded: {}", e),
        }
    }

    let simulator = match cfg.forecast_seed {
        Some(seed) => ForecastSimulator::seeded(seed),
        None => ForecastSimulator::from_entropy(),
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(registry, simulator, data_file, stdin.lock(), io::stdout());
    if let Err(e) = shell.run() {
        error!("Shell I/O error: {}", e);
        std::process::exit(1);
    }

    info!("Weather Desk shut down.");
}
