//! Aggregate statistics over one city's forecast set.

use common::{Error, Result, WeatherRecord};
use indexmap::IndexMap;

/// Max/min temperature and most likely condition of a forecast set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastSummary {
    pub max_temperature: i64,
    pub min_temperature: i64,
    pub dominant_condition: String,
}

/// Read-only view over a non-empty forecast set.
#[derive(Debug, Clone, Copy)]
pub struct ForecastAnalyzer<'a> {
    entries: &'a [WeatherRecord],
}

impl<'a> ForecastAnalyzer<'a> {
    /// Fails with [`Error::EmptyInput`] when `entries` is empty, so the
    /// accessors below never see an empty set.
    pub fn new(entries: &'a [WeatherRecord]) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(Self { entries })
    }

    pub fn max_temperature(&self) -> i64 {
        self.entries
            .iter()
            .map(|e| e.temperature)
            .max()
            .unwrap_or_default()
    }

    pub fn min_temperature(&self) -> i64 {
        self.entries
            .iter()
            .map(|e| e.temperature)
            .min()
            .unwrap_or_default()
    }

    /// Most frequent condition. On a tie, the condition seen first wins.
    pub fn dominant_condition(&self) -> &'a str {
        let mut tally: IndexMap<&'a str, usize> = IndexMap::new();
        for entry in self.entries {
            *tally.entry(entry.condition.as_str()).or_insert(0) += 1;
        }

        let mut best: Option<(&'a str, usize)> = None;
        for (condition, count) in tally {
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((condition, count));
            }
        }
        best.map(|(condition, _)| condition).unwrap_or_default()
    }

    pub fn summary(&self) -> ForecastSummary {
        ForecastSummary {
            max_temperature: self.max_temperature(),
            min_temperature: self.min_temperature(),
            dominant_condition: self.dominant_condition().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour(temperature: i64, condition: &str) -> WeatherRecord {
        WeatherRecord::new("Paris", "Europe", temperature, condition, 10, 50)
    }

    #[test]
    fn test_extrema() {
        let set = vec![hour(10, "Sunny"), hour(20, "Rainy"), hour(15, "Sunny")];
        let analyzer = ForecastAnalyzer::new(&set).unwrap();
        assert_eq!(analyzer.max_temperature(), 20);
        assert_eq!(analyzer.min_temperature(), 10);
    }

    #[test]
    fn test_dominant_condition() {
        let set = vec![hour(10, "Sunny"), hour(20, "Rainy"), hour(15, "Sunny")];
        let analyzer = ForecastAnalyzer::new(&set).unwrap();
        assert_eq!(analyzer.dominant_condition(), "Sunny");
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let set = vec![
            hour(0, "Stormy"),
            hour(0, "Cloudy"),
            hour(0, "Cloudy"),
            hour(0, "Stormy"),
            hour(0, "Snowy"),
        ];
        let analyzer = ForecastAnalyzer::new(&set).unwrap();
        assert_eq!(analyzer.dominant_condition(), "Stormy");
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = ForecastAnalyzer::new(&[]).unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[test]
    fn test_summary() {
        let set = vec![hour(-4, "Snowy"), hour(-1, "Cloudy"), hour(-7, "Snowy")];
        let summary = ForecastAnalyzer::new(&set).unwrap().summary();
        assert_eq!(
            summary,
            ForecastSummary {
                max_temperature: -1,
                min_temperature: -7,
                dominant_condition: "Snowy".into(),
            }
        );
    }
}
