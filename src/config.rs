//! Configuration loader — merges env vars, .env file, and config.toml.

use common::{AppConfig, Error};
use std::path::Path;

/// Per-run overrides taken from the command line.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub data_file: Option<String>,
    pub forecast_seed: Option<u64>,
    pub no_defaults: bool,
    pub load_on_start: bool,
}

fn parse_bool(raw: &str) -> bool {
    let lowered = raw.trim().to_ascii_lowercase();
    lowered != "0" && lowered != "false" && lowered != "no" && lowered != "off"
}

fn parse_seed(raw: &str, env_name: &str) -> Result<u64, Error> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| Error::Config(format!("{env_name} must be an integer >= 0")))
}

fn validate_config(config: &AppConfig) -> Result<(), Error> {
    let mut issues: Vec<String> = Vec::new();

    if config.data_file.trim().is_empty() {
        issues.push("data_file must not be empty".into());
    }

    for (idx, city) in config.cities.iter().enumerate() {
        if city.city.trim().is_empty() {
            issues.push(format!("cities[{idx}].city must not be blank"));
        }
        if !(0..=100).contains(&city.humidity) {
            issues.push(format!(
                "cities[{idx}] ({}): humidity must be in [0,100]",
                city.city
            ));
        }
        if city.wind_speed < 0 {
            issues.push(format!(
                "cities[{idx}] ({}): windSpeed must be >= 0",
                city.city
            ));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "Invalid config:\n - {}",
            issues.join("\n - ")
        )))
    }
}

/// Read `config_path` if it exists, otherwise start from defaults.
fn read_config_file(config_path: &Path) -> Result<AppConfig, Error> {
    if !config_path.exists() {
        tracing::debug!("No config file at {}", config_path.display());
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(config_path).map_err(|e| {
        Error::Config(format!("Failed to read {}: {}", config_path.display(), e))
    })?;
    toml::from_str(&contents).map_err(|e| {
        Error::Config(format!("Failed to parse {}: {}", config_path.display(), e))
    })
}

/// Apply `WEATHER_*` environment overrides.
fn apply_env(config: &mut AppConfig) -> Result<(), Error> {
    if let Ok(path) = std::env::var("WEATHER_DATA_FILE") {
        config.data_file = path;
    }
    if let Ok(raw) = std::env::var("WEATHER_SEED_DEFAULTS") {
        config.seed_default_cities = parse_bool(&raw);
    }
    if let Ok(raw) = std::env::var("WEATHER_LOAD_ON_START") {
        config.load_on_start = parse_bool(&raw);
    }
    if let Ok(raw) = std::env::var("WEATHER_FORECAST_SEED") {
        config.forecast_seed = Some(parse_seed(&raw, "WEATHER_FORECAST_SEED")?);
    }
    Ok(())
}

fn apply_overrides(config: &mut AppConfig, overrides: ConfigOverrides) {
    if let Some(path) = overrides.data_file {
        config.data_file = path;
    }
    if let Some(seed) = overrides.forecast_seed {
        config.forecast_seed = Some(seed);
    }
    if overrides.no_defaults {
        config.seed_default_cities = false;
    }
    if overrides.load_on_start {
        config.load_on_start = true;
    }
}

/// Load desk configuration from the config file, environment, and CLI.
pub fn load_config(config_path: &Path, overrides: ConfigOverrides) -> Result<AppConfig, Error> {
    // 1. Load .env file from project root or parent directories.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env file loaded: {}", e);
    }

    // 2. Defaults, replaced by the config file when present.
    let mut config = read_config_file(config_path)?;

    // 3. Environment variables.
    apply_env(&mut config)?;

    // 4. Command-line flags (highest priority).
    apply_overrides(&mut config, overrides);

    validate_config(&config)?;

    Ok(config)
}
