//! JSON snapshot save/load for the registry.
//!
//! File layout:
//! ```json
//! { "saved_at": "YYYY-MM-DD HH:MM:SS", "data": [ { "city": ..., ... } ] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use common::{Error, Result, WeatherRecord};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::registry::{CityRegistry, LoadSummary};

/// `saved_at` timestamp format (local time).
pub const SAVED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Full registry contents plus the time they were captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub saved_at: String,
    #[serde(default)]
    pub data: Vec<WeatherRecord>,
}

impl Snapshot {
    /// Capture `registry` stamped with the current local time.
    pub fn capture(registry: &CityRegistry) -> Self {
        Self::capture_at(registry, Local::now().naive_local())
    }

    pub fn capture_at(registry: &CityRegistry, at: NaiveDateTime) -> Self {
        Self {
            saved_at: at.format(SAVED_AT_FORMAT).to_string(),
            data: registry.list().cloned().collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Write `registry` to `path`, replacing any existing file.
///
/// The snapshot is written to a sibling temp file and renamed into place.
pub fn save(registry: &CityRegistry, path: &Path) -> Result<Snapshot> {
    let snapshot = Snapshot::capture(registry);
    let json = snapshot.to_json()?;

    let tmp = temp_path(path);
    fs::write(&tmp, json)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    info!(
        "Saved {} cities to {}",
        snapshot.data.len(),
        path.display()
    );
    Ok(snapshot)
}

/// Replace the contents of `registry` with the snapshot at `path`.
///
/// A missing or malformed file leaves the registry untouched.
pub fn load(registry: &mut CityRegistry, path: &Path) -> Result<LoadSummary> {
    if !path.exists() {
        warn!("No save data file at {}", path.display());
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path)?;
    let snapshot = Snapshot::from_json(&raw).map_err(|e| {
        warn!("Failed to parse {}: {}", path.display(), e);
        e
    })?;

    let summary = registry.replace_all(snapshot.data);
    info!(
        "Loaded {} of {} entries from {} (saved_at={:?})",
        summary.added,
        summary.entries,
        path.display(),
        snapshot.saved_at
    );
    Ok(summary)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis::ForecastSimulator;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn sample() -> CityRegistry {
        CityRegistry::with_records(vec![
            WeatherRecord::new("São Paulo", "South America", 25, "Rainy", 8, 80),
            WeatherRecord::new("Moscow", "Europe", 5, "Snowy", 25, 75),
            WeatherRecord::new("Dubai", "Asia", 38, "Sunny", 18, 20),
        ])
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weather_data.json");

        let original = sample();
        save(&original, &path).unwrap();

        let mut restored = CityRegistry::new();
        restored.add(WeatherRecord::new("Stale", "X", 0, "Sunny", 0, 0));
        let summary = load(&mut restored, &path).unwrap();

        assert_eq!(summary, LoadSummary { entries: 3, added: 3 });
        let a: Vec<&WeatherRecord> = original.list().collect();
        let b: Vec<&WeatherRecord> = restored.list().collect();
        assert_eq!(a, b);
        assert!(!path.with_file_name("weather_data.json.tmp").exists());
    }

    #[test]
    fn test_snapshot_layout() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 0)
            .unwrap();
        let reg = CityRegistry::with_records(vec![WeatherRecord::new(
            "Lima",
            "South America",
            22,
            "Cloudy",
            10,
            50,
        )]);
        let json = Snapshot::capture_at(&reg, at).to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["saved_at"], "2024-03-09 07:05:00");
        assert_eq!(value["data"][0]["windSpeed"], 10);
        assert_eq!(value["data"][0]["city"], "Lima");
        // Pretty-printed with two-space indentation.
        assert!(json.contains("\n  \"data\""));
    }

    #[test]
    fn test_missing_file_leaves_registry_unchanged() {
        let dir = tempdir().unwrap();
        let mut reg = sample();
        let err = load(&mut reg, &dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn test_malformed_file_leaves_registry_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"data\": [ { \"city\": \"Oslo\" } ").unwrap();

        let mut reg = sample();
        let err = load(&mut reg, &path).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert_eq!(reg.len(), 3);

        // Structurally valid JSON with a missing field is also rejected.
        fs::write(&path, r#"{"data":[{"city":"Oslo","continent":"Europe"}]}"#).unwrap();
        assert!(matches!(load(&mut reg, &path), Err(Error::Json(_))));
        assert!(reg.find("Oslo").is_none());
    }

    #[test]
    fn test_load_drops_in_file_duplicates_and_forecasts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dupes.json");
        fs::write(
            &path,
            r#"{
              "saved_at": "2024-01-01 00:00:00",
              "data": [
                {"city": "Oslo", "continent": "Europe", "temperature": 3, "condition": "Snowy", "windSpeed": 12, "humidity": 70},
                {"city": "OSLO", "continent": "Europe", "temperature": 9, "condition": "Sunny", "windSpeed": 1, "humidity": 10}
              ]
            }"#,
        )
        .unwrap();

        let mut reg = sample();
        reg.generate_forecast("Moscow", &mut ForecastSimulator::seeded(9))
            .unwrap();

        let summary = load(&mut reg, &path).unwrap();
        assert_eq!(summary, LoadSummary { entries: 2, added: 1 });
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.find("oslo").unwrap().temperature, 3);
        assert!(reg.forecast("Moscow").is_err());
    }

    #[test]
    fn test_missing_data_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, r#"{"saved_at": "2024-01-01 00:00:00"}"#).unwrap();

        let mut reg = sample();
        let summary = load(&mut reg, &path).unwrap();
        assert_eq!(summary, LoadSummary { entries: 0, added: 0 });
        assert!(reg.is_empty());
    }
}
