//! Continent-level averages over the registry.

use common::WeatherRecord;
use indexmap::IndexMap;

/// Averages for one continent group.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinentSummary {
    pub continent: String,
    pub cities: usize,
    pub avg_temperature: f64,
    pub avg_humidity: f64,
    pub avg_wind_speed: f64,
}

#[derive(Default)]
struct Totals {
    count: usize,
    temperature: i128,
    humidity: i128,
    wind_speed: i128,
}

/// Group records by exact `continent` string and average each group.
///
/// Groups appear in order of first occurrence. No records, no groups.
pub fn continent_report<'a, I>(records: I) -> Vec<ContinentSummary>
where
    I: IntoIterator<Item = &'a WeatherRecord>,
{
    let mut groups: IndexMap<&'a str, Totals> = IndexMap::new();
    for record in records {
        let totals = groups.entry(record.continent.as_str()).or_default();
        totals.count += 1;
        totals.temperature += i128::from(record.temperature);
        totals.humidity += i128::from(record.humidity);
        totals.wind_speed += i128::from(record.wind_speed);
    }

    groups
        .into_iter()
        .map(|(continent, t)| {
            let n = t.count as f64;
            ContinentSummary {
                continent: continent.to_string(),
                cities: t.count,
                avg_temperature: t.temperature as f64 / n,
                avg_humidity: t.humidity as f64 / n,
                avg_wind_speed: t.wind_speed as f64 / n,
            }
        })
        .collect()
}
