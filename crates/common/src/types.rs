//! Domain types shared across the desk.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Weather Records ───────────────────────────────────────────────────

/// One city's current weather snapshot.
///
/// Field order is the persisted field order. `wind_speed` is stored as
/// `windSpeed` on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Display name; identity is case-insensitive (see [`normalize_city`]).
    pub city: String,
    /// Free-form grouping label used by continent reports.
    pub continent: String,
    /// Degrees Celsius.
    pub temperature: i64,
    /// Conventionally one of [`Condition::ALL`], but any string is accepted.
    pub condition: String,
    /// km/h. Clamped to >= 0 only when derived by the forecast simulator.
    #[serde(rename = "windSpeed")]
    pub wind_speed: i64,
    /// Percent. Clamped to [0, 100] only when derived by the forecast simulator.
    pub humidity: i64,
}

impl WeatherRecord {
    pub fn new(
        city: impl Into<String>,
        continent: impl Into<String>,
        temperature: i64,
        condition: impl Into<String>,
        wind_speed: i64,
        humidity: i64,
    ) -> Self {
        Self {
            city: city.into(),
            continent: continent.into(),
            temperature,
            condition: condition.into(),
            wind_speed,
            humidity,
        }
    }

    /// Registry key for this record.
    pub fn key(&self) -> String {
        normalize_city(&self.city)
    }
}

impl fmt::Display for WeatherRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {}°C, {}, Wind: {} km/h, Humidity: {}%",
            self.city,
            self.continent,
            self.temperature,
            self.condition,
            self.wind_speed,
            self.humidity
        )
    }
}

/// Case-insensitive identity key for a city name.
pub fn normalize_city(city: &str) -> String {
    city.to_lowercase()
}

// ── Conditions ────────────────────────────────────────────────────────

/// The conventional sky conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
}

impl Condition {
    /// All conditions, in the order the forecast simulator draws from.
    pub const ALL: [Condition; 5] = [
        Condition::Sunny,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::Stormy,
        Condition::Snowy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Stormy => "Stormy",
            Condition::Snowy => "Snowy",
        }
    }

    /// Exact, case-sensitive match against a record's condition string.
    pub fn matches(self, raw: &str) -> bool {
        self.as_str() == raw
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_listing_format() {
        let rec = WeatherRecord::new("Tokyo", "Asia", 22, "Sunny", 10, 60);
        assert_eq!(
            rec.to_string(),
            "Tokyo (Asia) - 22°C, Sunny, Wind: 10 km/h, Humidity: 60%"
        );
    }

    #[test]
    fn test_normalize_is_case_insensitive() {
        assert_eq!(normalize_city("São Paulo"), normalize_city("SÃO PAULO"));
        assert_eq!(WeatherRecord::new("NEW York", "", 0, "", 0, 0).key(), "new york");
    }

    #[test]
    fn test_wind_speed_serializes_as_camel_case() {
        let rec = WeatherRecord::new("Lima", "South America", 22, "Cloudy", 10, 50);
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(
            json,
            r#"{"city":"Lima","continent":"South America","temperature":22,"condition":"Cloudy","windSpeed":10,"humidity":50}"#
        );
    }

    #[test]
    fn test_condition_match_is_exact() {
        assert!(Condition::Stormy.matches("Stormy"));
        assert!(!Condition::Stormy.matches("stormy"));
    }
}
