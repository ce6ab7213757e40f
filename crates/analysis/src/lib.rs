//! Forecast and reporting crate.
//!
//! Derives hourly forecasts, evaluates alerts, and aggregates statistics
//! over weather records.

pub mod alerts;
pub mod analyzer;
pub mod report;
pub mod simulator;

pub use alerts::{evaluate_alerts, Alert};
pub use analyzer::{ForecastAnalyzer, ForecastSummary};
pub use report::{continent_report, ContinentSummary};
pub use simulator::{ForecastSimulator, FORECAST_HOURS};
