//! City registry: the in-memory store of weather records and their
//! hourly forecast sets.
//!
//! Records are keyed by [`normalize_city`], so identity is
//! case-insensitive while the original spelling is kept for display.
//! Iteration follows insertion order.

use std::collections::HashMap;
use std::fmt;

use analysis::ForecastSimulator;
use common::{normalize_city, Error, Result, WeatherRecord};
use indexmap::IndexMap;
use rand::Rng;
use tracing::{debug, info};

// ── Update Types ──────────────────────────────────────────────────────

/// Raw field values for [`CityRegistry::update`].
///
/// `None` or blank means "keep the current value". Numeric fields are
/// parsed by the registry; a field that fails to parse is skipped.
#[derive(Debug, Clone, Default)]
pub struct CityUpdate {
    pub temperature: Option<String>,
    pub condition: Option<String>,
    pub wind_speed: Option<String>,
    pub humidity: Option<String>,
}

/// A field that can be changed by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateField {
    Temperature,
    Condition,
    WindSpeed,
    Humidity,
}

impl UpdateField {
    pub fn label(self) -> &'static str {
        match self {
            UpdateField::Temperature => "temperature",
            UpdateField::Condition => "condition",
            UpdateField::WindSpeed => "wind speed",
            UpdateField::Humidity => "humidity",
        }
    }
}

impl fmt::Display for UpdateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What an update changed, and which fields were skipped.
#[derive(Debug, Default)]
pub struct UpdateReport {
    /// Display name of the updated city.
    pub city: String,
    pub applied: Vec<UpdateField>,
    /// One [`Error::InvalidNumericInput`] per skipped field.
    pub warnings: Vec<Error>,
}

/// Outcome of [`CityRegistry::replace_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Entries offered.
    pub entries: usize,
    /// Entries kept after duplicate rejection.
    pub added: usize,
}

// ── Registry ──────────────────────────────────────────────────────────

/// Insertion-ordered store of weather records plus per-city forecast sets.
#[derive(Debug, Default)]
pub struct CityRegistry {
    records: IndexMap<String, WeatherRecord>,
    forecasts: HashMap<String, Vec<WeatherRecord>>,
}

impl CityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from seed records. Case-insensitive duplicates in
    /// `seed` are dropped; the first occurrence wins.
    pub fn with_records<I>(seed: I) -> Self
    where
        I: IntoIterator<Item = WeatherRecord>,
    {
        let mut registry = Self::new();
        let summary = registry.add_all(seed);
        info!(
            "Seeded registry with {} cities ({} duplicates dropped)",
            summary.added,
            summary.entries - summary.added
        );
        registry
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a record unless its city already exists (case-insensitive).
    ///
    /// Values are stored as given; no range checks are applied.
    pub fn insert(&mut self, record: WeatherRecord) -> Result<()> {
        let key = record.key();
        if self.records.contains_key(&key) {
            debug!("Rejected duplicate city {}", record.city);
            return Err(Error::DuplicateCity(record.city));
        }
        debug!("Added weather data for {}", record.city);
        self.records.insert(key, record);
        Ok(())
    }

    /// Like [`insert`](Self::insert), but reports only whether it was added.
    pub fn add(&mut self, record: WeatherRecord) -> bool {
        self.insert(record).is_ok()
    }

    /// Records in insertion order.
    pub fn list(&self) -> impl ExactSizeIterator<Item = &WeatherRecord> {
        self.records.values()
    }

    pub fn find(&self, city: &str) -> Option<&WeatherRecord> {
        self.records.get(&normalize_city(city))
    }

    /// Apply the non-blank fields of `update` to `city`.
    ///
    /// Fails only when the city does not exist. Unparseable numeric fields
    /// are skipped and reported in [`UpdateReport::warnings`]; the rest are
    /// still applied. Ranges are not re-validated here. A new condition is
    /// stored trimmed of surrounding whitespace. An existing forecast set is
    /// left as it was; regenerate it to reflect the new base values.
    pub fn update(&mut self, city: &str, update: CityUpdate) -> Result<UpdateReport> {
        let record = self
            .records
            .get_mut(&normalize_city(city))
            .ok_or_else(|| Error::CityNotFound(city.to_string()))?;

        let mut report = UpdateReport {
            city: record.city.clone(),
            ..UpdateReport::default()
        };

        if let Some(value) = non_blank(update.temperature.as_deref()) {
            match parse_field(UpdateField::Temperature, value) {
                Ok(v) => {
                    record.temperature = v;
                    report.applied.push(UpdateField::Temperature);
                }
                Err(e) => report.warnings.push(e),
            }
        }
        if let Some(value) = non_blank(update.condition.as_deref()) {
            record.condition = value.trim().to_string();
            report.applied.push(UpdateField::Condition);
        }
        if let Some(value) = non_blank(update.wind_speed.as_deref()) {
            match parse_field(UpdateField::WindSpeed, value) {
                Ok(v) => {
                    record.wind_speed = v;
                    report.applied.push(UpdateField::WindSpeed);
                }
                Err(e) => report.warnings.push(e),
            }
        }
        if let Some(value) = non_blank(update.humidity.as_deref()) {
            match parse_field(UpdateField::Humidity, value) {
                Ok(v) => {
                    record.humidity = v;
                    report.applied.push(UpdateField::Humidity);
                }
                Err(e) => report.warnings.push(e),
            }
        }

        info!(
            "Updated {}: {} applied, {} skipped",
            report.city,
            report.applied.len(),
            report.warnings.len()
        );
        Ok(report)
    }

    /// Remove a city and its forecast set. Returns whether a record existed.
    pub fn delete(&mut self, city: &str) -> bool {
        let key = normalize_city(city);
        self.forecasts.remove(&key);
        let removed = self.records.shift_remove(&key).is_some();
        if removed {
            info!("Deleted {}", city);
        }
        removed
    }

    // ── Forecast Sets ─────────────────────────────────────────────────

    /// Simulate a fresh forecast set for `city`, replacing any previous one.
    pub fn generate_forecast<R: Rng>(
        &mut self,
        city: &str,
        simulator: &mut ForecastSimulator<R>,
    ) -> Result<&[WeatherRecord]> {
        let key = normalize_city(city);
        let base = self
            .records
            .get(&key)
            .ok_or_else(|| Error::CityNotFound(city.to_string()))?;

        let forecast = simulator.generate(base);
        info!("Generated {}-hour forecast for {}", forecast.len(), base.city);
        let slot = self.forecasts.entry(key).or_default();
        *slot = forecast;
        Ok(slot.as_slice())
    }

    /// The stored forecast set for `city`.
    pub fn forecast(&self, city: &str) -> Result<&[WeatherRecord]> {
        self.forecasts
            .get(&normalize_city(city))
            .map(Vec::as_slice)
            .ok_or_else(|| Error::ForecastNotFound(city.to_string()))
    }

    // ── Bulk Replacement ──────────────────────────────────────────────

    /// Discard all records and forecast sets, then add `records` through
    /// the duplicate-checked path.
    pub fn replace_all<I>(&mut self, records: I) -> LoadSummary
    where
        I: IntoIterator<Item = WeatherRecord>,
    {
        self.records.clear();
        self.forecasts.clear();
        self.add_all(records)
    }

    fn add_all<I>(&mut self, records: I) -> LoadSummary
    where
        I: IntoIterator<Item = WeatherRecord>,
    {
        let mut summary = LoadSummary {
            entries: 0,
            added: 0,
        };
        for record in records {
            summary.entries += 1;
            if self.add(record) {
                summary.added += 1;
            }
        }
        summary
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_field(field: UpdateField, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidNumericInput {
            field: field.label().to_string(),
            value: raw.to_string(),
        })
}
