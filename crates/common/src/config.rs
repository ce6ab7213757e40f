//! Desk configuration types.

use serde::{Deserialize, Serialize};

use crate::types::WeatherRecord;

/// Top-level desk configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Snapshot file used by save/load.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Load `cities` into the registry at startup.
    #[serde(default = "default_true")]
    pub seed_default_cities: bool,

    /// Load `data_file` at startup, after seeding.
    #[serde(default)]
    pub load_on_start: bool,

    /// Fixed RNG seed for reproducible forecasts. Entropy when unset.
    #[serde(default)]
    pub forecast_seed: Option<u64>,

    /// Seed records.
    #[serde(default = "default_cities")]
    pub cities: Vec<WeatherRecord>,
}

// ── Defaults ──────────────────────────────────────────────────────────

/// Default snapshot file name.
pub const DEFAULT_DATA_FILE: &str = "weather_data.json";

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.into()
}

fn default_true() -> bool {
    true
}

fn seed(
    city: &str,
    continent: &str,
    temperature: i64,
    condition: &str,
    wind_speed: i64,
    humidity: i64,
) -> WeatherRecord {
    WeatherRecord::new(city, continent, temperature, condition, wind_speed, humidity)
}

/// Built-in city list loaded when `seed_default_cities` is on.
pub fn default_cities() -> Vec<WeatherRecord> {
    vec![
        seed("Tokyo", "Asia", 22, "Sunny", 10, 60),
        seed("New York", "North America", 18, "Cloudy", 12, 55),
        seed("São Paulo", "South America", 25, "Rainy", 8, 80),
        seed("Cairo", "Africa", 30, "Sunny", 15, 30),
        seed("London", "Europe", 16, "Cloudy", 20, 70),
        seed("Sydney", "Australia", 20, "Sunny", 18, 65),
        seed("Moscow", "Europe", 5, "Snowy", 25, 75),
        seed("Delhi", "Asia", 35, "Sunny", 10, 40),
        seed("Lagos", "Africa", 28, "Sunny", 22, 55),
        seed("Toronto", "North America", 10, "Cloudy", 14, 60),
        seed("Paris", "Europe", 17, "Rainy", 12, 65),
        seed("Jakarta", "Asia", 29, "Stormy", 30, 90),
        seed("Mexico City", "North America", 20, "Sunny", 10, 55),
        seed("Cape Town", "Africa", 23, "Sunny", 20, 60),
        seed("Berlin", "Europe", 15, "Cloudy", 15, 60),
        seed("Seoul", "Asia", 21, "Sunny", 14, 55),
        seed("Chicago", "North America", 12, "Rainy", 20, 75),
        seed("Rio de Janeiro", "South America", 26, "Sunny", 12, 60),
        seed("Athens", "Europe", 24, "Sunny", 15, 55),
        seed("Bangkok", "Asia", 31, "Stormy", 35, 85),
        seed("Lima", "South America", 22, "Cloudy", 10, 50),
        seed("Nairobi", "Africa", 27, "Sunny", 18, 40),
        seed("Brisbane", "Australia", 21, "Sunny", 12, 50),
        seed("Rome", "Europe", 19, "Sunny", 14, 55),
        seed("Singapore", "Asia", 28, "Rainy", 20, 85),
        seed("Houston", "North America", 25, "Sunny", 15, 60),
        seed("Auckland", "Australia", 17, "Cloudy", 11, 65),
        seed("Lisbon", "Europe", 23, "Sunny", 12, 60),
        seed("Istanbul", "Europe", 20, "Cloudy", 16, 65),
        seed("Dubai", "Asia", 38, "Sunny", 18, 20),
        seed("Kuala Lumpur", "Asia", 30, "Rainy", 15, 80),
        seed("Buenos Aires", "South America", 20, "Cloudy", 10, 75),
        seed("Santiago", "South America", 21, "Sunny", 8, 55),
        seed("Casablanca", "Africa", 25, "Sunny", 14, 60),
        seed("Algiers", "Africa", 27, "Sunny", 13, 55),
        seed("Reykjavik", "Europe", 8, "Snowy", 20, 70),
        seed("Honolulu", "Australia", 27, "Sunny", 10, 60),
        seed("Manila", "Asia", 32, "Rainy", 20, 90),
        seed("Bogotá", "South America", 16, "Cloudy", 12, 65),
        seed("Helsinki", "Europe", 10, "Cloudy", 15, 75),
        seed("Zurich", "Europe", 18, "Rainy", 14, 70),
        seed("Vienna", "Europe", 19, "Sunny", 12, 65),
        seed("Warsaw", "Europe", 17, "Cloudy", 10, 60),
        seed("Lahore", "Asia", 34, "Sunny", 14, 40),
        seed("Karachi", "Asia", 33, "Sunny", 16, 45),
        seed("Tehran", "Asia", 28, "Sunny", 13, 30),
        seed("Baghdad", "Asia", 36, "Sunny", 20, 25),
        seed("Melbourne", "Australia", 19, "Cloudy", 13, 70),
        seed("Adelaide", "Australia", 22, "Sunny", 14, 55),
        seed("Perth", "Australia", 25, "Sunny", 15, 50),
        seed("Montreal", "North America", 9, "Cloudy", 15, 65),
        seed("Calgary", "North America", 7, "Snowy", 18, 70),
        seed("Edmonton", "North America", 6, "Snowy", 20, 75),
        seed("Vancouver", "North America", 14, "Rainy", 16, 80),
        seed("Ottawa", "North America", 12, "Cloudy", 14, 60),
        seed("Detroit", "North America", 11, "Rainy", 19, 70),
        seed("Minneapolis", "North America", 10, "Snowy", 22, 75),
        seed("Phoenix", "North America", 29, "Sunny", 12, 30),
        seed("Las Vegas", "North America", 35, "Sunny", 10, 20),
        seed("Guatemala City", "North America", 24, "Rainy", 14, 80),
        seed("San Francisco", "North America", 17, "Cloudy", 13, 60),
        seed("Seattle", "North America", 14, "Rainy", 15, 85),
        seed("Caracas", "South America", 27, "Sunny", 14, 55),
        seed("Quito", "South America", 20, "Sunny", 12, 60),
        seed("Medellín", "South America", 22, "Cloudy", 10, 65),
        seed("Brasília", "South America", 25, "Sunny", 13, 50),
    ]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            seed_default_cities: true,
            load_on_start: false,
            forecast_seed: None,
            cities: default_cities(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_cities_are_unique_and_in_range() {
        let cities = default_cities();
        assert_eq!(cities.len(), 66);

        let keys: HashSet<String> = cities.iter().map(WeatherRecord::key).collect();
        assert_eq!(keys.len(), cities.len());

        for c in &cities {
            assert!((0..=100).contains(&c.humidity), "{} humidity", c.city);
            assert!(c.wind_speed >= 0, "{} wind", c.city);
        }
    }

    #[test]
    fn test_default_config() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.data_file, "weather_data.json");
        assert!(cfg.seed_default_cities);
        assert!(!cfg.load_on_start);
        assert!(cfg.forecast_seed.is_none());
        assert_eq!(cfg.cities[0].city, "Tokyo");
    }
}
