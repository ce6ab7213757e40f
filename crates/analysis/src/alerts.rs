//! Weather alert rules.
//!
//! Rules are independent predicates over one record, evaluated in table
//! order. Every rule is always checked; a record can trigger any subset.

use std::fmt;

use common::{Condition, WeatherRecord};

/// Wind speed (km/h) above which a wind warning fires.
pub const FAST_WIND_KMH: i64 = 30;
/// Humidity (%) above which a humidity alert fires.
pub const VERY_HUMID_PCT: i64 = 80;

/// An alert raised for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    SevereWeather,
    FastWinds,
    VeryHumid,
}

impl Alert {
    pub fn message(self) -> &'static str {
        match self {
            Alert::SevereWeather => "Severe weather expected",
            Alert::FastWinds => "Fast winds warning",
            Alert::VeryHumid => "Very humid",
        }
    }

    /// Symbol shown next to the message in the shell.
    pub fn icon(self) -> &'static str {
        match self {
            Alert::SevereWeather => "⚠️",
            Alert::FastWinds => "💨",
            Alert::VeryHumid => "💧",
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.message())
    }
}

type Rule = (Alert, fn(&WeatherRecord) -> bool);

/// Evaluation order. Append new rules at the end.
const RULES: &[Rule] = &[
    (Alert::SevereWeather, is_severe),
    (Alert::FastWinds, is_windy),
    (Alert::VeryHumid, is_humid),
];

fn is_severe(record: &WeatherRecord) -> bool {
    Condition::Stormy.matches(&record.condition) || Condition::Snowy.matches(&record.condition)
}

fn is_windy(record: &WeatherRecord) -> bool {
    record.wind_speed > FAST_WIND_KMH
}

fn is_humid(record: &WeatherRecord) -> bool {
    record.humidity > VERY_HUMID_PCT
}

/// All alerts triggered by `record`, in rule order. Empty means no alerts.
pub fn evaluate_alerts(record: &WeatherRecord) -> Vec<Alert> {
    RULES
        .iter()
        .filter(|(_, triggered)| triggered(record))
        .map(|(alert, _)| *alert)
        .collect()
}
