//! Unified error type for the weather desk.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("City '{0}' not found")]
    CityNotFound(String),

    #[error("No hourly forecast generated for {0}")]
    ForecastNotFound(String),

    #[error("Weather data for {0} already exists")]
    DuplicateCity(String),

    #[error("Invalid input for {field}: {value:?} is not an integer")]
    InvalidNumericInput { field: String, value: String },

    #[error("Forecast analysis needs at least one entry")]
    EmptyInput,

    #[error("No save data file found at {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
