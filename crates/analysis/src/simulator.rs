//! Hourly forecast simulation.
//!
//! Each hour is an independent bounded perturbation of the base record:
//! there is no smoothing between consecutive hours.

use common::{Condition, WeatherRecord};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Entries in one forecast set ("Hour 0" .. "Hour 23").
pub const FORECAST_HOURS: usize = 24;

const TEMP_JITTER: i64 = 3;
const WIND_JITTER: i64 = 5;
const HUMIDITY_JITTER: i64 = 10;

/// Derives forecast sets from a base record using an injected random source.
#[derive(Debug, Clone)]
pub struct ForecastSimulator<R = ChaCha8Rng> {
    rng: R,
}

impl ForecastSimulator<ChaCha8Rng> {
    /// Reproducible simulator: identical seeds produce identical forecasts.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Simulator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> ForecastSimulator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate exactly [`FORECAST_HOURS`] snapshots from `base`.
    pub fn generate(&mut self, base: &WeatherRecord) -> Vec<WeatherRecord> {
        let forecast: Vec<WeatherRecord> =
            (0..FORECAST_HOURS).map(|_| self.perturb(base)).collect();
        debug!("Simulated {} hours for {}", forecast.len(), base.city);
        forecast
    }

    fn perturb(&mut self, base: &WeatherRecord) -> WeatherRecord {
        let temp_delta = self.rng.gen_range(-TEMP_JITTER..=TEMP_JITTER);
        let humidity_delta = self.rng.gen_range(-HUMIDITY_JITTER..=HUMIDITY_JITTER);
        let wind_delta = self.rng.gen_range(-WIND_JITTER..=WIND_JITTER);
        let condition = Condition::ALL[self.rng.gen_range(0..Condition::ALL.len())];

        WeatherRecord {
            city: base.city.clone(),
            continent: base.continent.clone(),
            temperature: base.temperature.saturating_add(temp_delta),
            condition: condition.as_str().to_string(),
            wind_speed: base.wind_speed.saturating_add(wind_delta).max(0),
            humidity: base.humidity.saturating_add(humidity_delta).clamp(0, 100),
        }
    }
}
