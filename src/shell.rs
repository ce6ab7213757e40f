//! Interactive menu shell.
//!
//! Reads commands from any `BufRead`, renders results to any `Write`.
//! All state changes go through the registry; the shell only parses
//! input and formats output.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use analysis::{continent_report, evaluate_alerts, ForecastAnalyzer, ForecastSimulator};
use common::{Error, WeatherRecord};
use registry::{CityRegistry, CityUpdate};
use tracing::warn;

use crate::glossary;

const RULE: &str = "--------------------------------------------------";

/// Whether the menu loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R, W> {
    registry: CityRegistry,
    simulator: ForecastSimulator,
    data_file: PathBuf,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(
        registry: CityRegistry,
        simulator: ForecastSimulator,
        data_file: PathBuf,
        input: R,
        out: W,
    ) -> Self {
        Self {
            registry,
            simulator,
            data_file,
            input,
            out,
        }
    }

    /// Run the menu loop until `0` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "🌦️ Weather Desk started")?;
        loop {
            self.show_menu()?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };
            if self.dispatch(choice.trim())? == Flow::Exit {
                break;
            }
        }
        writeln!(self.out, "Closing application.")?;
        writeln!(self.out, "Goodbye!")?;
        self.out.flush()
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "🌦️ Weather Desk 🌦️")?;
        for line in [
            "1) Add Weather Data",
            "2) List Cities",
            "3) Generate Hourly Forecast",
            "4) Show Hourly Forecast",
            "5) Generate Weather Report",
            "6) Show Weather Alerts",
            "7) Analyze Forecast",
            "8) Update City Info",
            "9) Delete City",
            "10) Save Data to File",
            "11) Load Data from File",
            "12) Learn Weather Terms",
            "0) Exit",
        ] {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out, "{RULE}")
    }

    fn dispatch(&mut self, choice: &str) -> io::Result<Flow> {
        match choice {
            "1" => self.add_city(),
            "2" => self.list_cities().map(|_| Flow::Continue),
            "3" => self.with_city("City for hourly forecast: ", Self::generate_forecast),
            "4" => self.with_city("City to show hourly forecast: ", Self::show_forecast),
            "5" => self.report().map(|_| Flow::Continue),
            "6" => self.with_city("City for weather alerts: ", Self::show_alerts),
            "7" => self.with_city("City to analyze forecast: ", Self::analyze_forecast),
            "8" => self.update_city(),
            "9" => self.with_city("City to delete: ", Self::delete_city),
            "10" => self.save().map(|_| Flow::Continue),
            "11" => self.load().map(|_| Flow::Continue),
            "12" => self.glossary(),
            "0" => Ok(Flow::Exit),
            _ => {
                writeln!(self.out, "Invalid option. Please try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    // ── Input ─────────────────────────────────────────────────────────

    /// Print `label` and read one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// Prompt for a city name, then run `command` with it.
    fn with_city(
        &mut self,
        label: &str,
        command: fn(&mut Self, &str) -> io::Result<()>,
    ) -> io::Result<Flow> {
        match self.prompt(label)? {
            Some(city) => command(self, city.trim()).map(|_| Flow::Continue),
            None => Ok(Flow::Exit),
        }
    }

    // ── Commands ──────────────────────────────────────────────────────

    fn add_city(&mut self) -> io::Result<Flow> {
        let Some(city) = self.prompt("City name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(continent) = self.prompt("Continent: ")? else {
            return Ok(Flow::Exit);
        };

        let mut numbers = [0i64; 3];
        let fields = [
            ("temperature", "Temperature (°C): "),
            ("wind speed", "Wind speed (km/h): "),
            ("humidity", "Humidity (%): "),
        ];
        for (slot, (field, label)) in numbers.iter_mut().zip(fields) {
            let Some(raw) = self.prompt(label)? else {
                return Ok(Flow::Exit);
            };
            match raw.trim().parse::<i64>() {
                Ok(v) => *slot = v,
                Err(_) => {
                    let e = Error::InvalidNumericInput {
                        field: field.into(),
                        value: raw,
                    };
                    warn!("Add aborted: {}", e);
                    writeln!(self.out, "{e}. Please try again.")?;
                    return Ok(Flow::Continue);
                }
            }
        }
        let [temperature, wind_speed, humidity] = numbers;

        let Some(condition) = self.prompt("Condition (Sunny, Rainy, etc.): ")? else {
            return Ok(Flow::Exit);
        };

        let record = WeatherRecord::new(
            city.trim(),
            continent.trim(),
            temperature,
            condition.trim(),
            wind_speed,
            humidity,
        );
        let name = record.city.clone();
        match self.registry.insert(record) {
            Ok(()) => writeln!(self.out, "Added weather data for {name}.")?,
            Err(e) => writeln!(self.out, "{e}. Use 'Update City Info' to modify it.")?,
        }
        Ok(Flow::Continue)
    }

    fn list_cities(&mut self) -> io::Result<()> {
        if self.registry.is_empty() {
            return writeln!(
                self.out,
                "\nNo cities available. Add some weather data first!"
            );
        }
        writeln!(self.out, "\n🌍 Cities Weather Data:")?;
        for (i, record) in self.registry.list().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, record)?;
        }
        Ok(())
    }

    fn generate_forecast(&mut self, city: &str) -> io::Result<()> {
        match self.registry.generate_forecast(city, &mut self.simulator) {
            Ok(forecast) => writeln!(
                self.out,
                "Generated {}-hour forecast for {city}.",
                forecast.len()
            ),
            Err(e) => writeln!(self.out, "{e}."),
        }
    }

    fn show_forecast(&mut self, city: &str) -> io::Result<()> {
        let forecast = match self.registry.forecast(city) {
            Ok(f) => f,
            Err(e) => return writeln!(self.out, "{e}."),
        };
        writeln!(self.out, "\n🕒 {}-hour forecast for {city}:", forecast.len())?;
        for (hour, f) in forecast.iter().enumerate() {
            writeln!(
                self.out,
                "Hour {hour}: {}°C, {}, Wind: {} km/h, Humidity: {}%",
                f.temperature, f.condition, f.wind_speed, f.humidity
            )?;
        }
        Ok(())
    }

    fn report(&mut self) -> io::Result<()> {
        let report = continent_report(self.registry.list());
        if report.is_empty() {
            return writeln!(
                self.out,
                "\nNo weather data available to generate a report."
            );
        }
        writeln!(self.out, "\n📊 Weather Report by Continent:")?;
        for group in report {
            writeln!(
                self.out,
                "{}: Avg Temp {:.1}°C, Avg Humidity {:.1}%, Avg Wind {:.1} km/h",
                group.continent, group.avg_temperature, group.avg_humidity, group.avg_wind_speed
            )?;
        }
        Ok(())
    }

    fn show_alerts(&mut self, city: &str) -> io::Result<()> {
        let Some(record) = self.registry.find(city) else {
            return writeln!(self.out, "{}.", Error::CityNotFound(city.to_string()));
        };
        let alerts = evaluate_alerts(record);
        if alerts.is_empty() {
            return writeln!(self.out, "No alerts for {city}.");
        }
        writeln!(self.out, "\n⚠️ Weather alerts for {city}:")?;
        for alert in alerts {
            writeln!(self.out, " - {alert}")?;
        }
        Ok(())
    }

    fn analyze_forecast(&mut self, city: &str) -> io::Result<()> {
        let summary = match self
            .registry
            .forecast(city)
            .and_then(ForecastAnalyzer::new)
        {
            Ok(analyzer) => analyzer.summary(),
            Err(Error::ForecastNotFound(_)) => {
                return writeln!(
                    self.out,
                    "No hourly forecast available for {city}. Please generate one first."
                );
            }
            Err(e) => return writeln!(self.out, "{e}."),
        };
        writeln!(self.out, "\n🔍 Forecast Summary:")?;
        writeln!(self.out, "   📈 Max Temp: {}°C", summary.max_temperature)?;
        writeln!(self.out, "   📉 Min Temp: {}°C", summary.min_temperature)?;
        writeln!(
            self.out,
            "   ☁️ Most Likely Weather: {}",
            summary.dominant_condition
        )
    }

    fn update_city(&mut self) -> io::Result<Flow> {
        let Some(city) = self.prompt("City to update: ")? else {
            return Ok(Flow::Exit);
        };
        let city = city.trim();
        let Some(current) = self.registry.find(city).cloned() else {
            writeln!(self.out, "City '{city}' not found. Please try again.")?;
            return Ok(Flow::Continue);
        };

        writeln!(
            self.out,
            "Updating info for {} (leave blank to keep current)",
            current.city
        )?;
        let update = CityUpdate {
            temperature: self.prompt(&format!(
                "Current temp {}°C, new: ",
                current.temperature
            ))?,
            condition: self.prompt(&format!(
                "Current condition '{}', new: ",
                current.condition
            ))?,
            wind_speed: self.prompt(&format!(
                "Current wind speed {} km/h, new: ",
                current.wind_speed
            ))?,
            humidity: self.prompt(&format!("Current humidity {}%, new: ", current.humidity))?,
        };

        match self.registry.update(city, update) {
            Ok(report) => {
                for warning in &report.warnings {
                    writeln!(self.out, "{warning}. Skipping...")?;
                }
                writeln!(self.out, "City info for {} updated successfully.", report.city)?;
            }
            Err(e) => writeln!(self.out, "{e}.")?,
        }
        Ok(Flow::Continue)
    }

    fn delete_city(&mut self, city: &str) -> io::Result<()> {
        if self.registry.delete(city) {
            writeln!(self.out, "{city} deleted.")
        } else {
            writeln!(self.out, "City '{city}' not found.")
        }
    }

    fn save(&mut self) -> io::Result<()> {
        match registry::save(&self.registry, &self.data_file) {
            Ok(_) => writeln!(self.out, "Data saved to {}", self.data_file.display()),
            Err(e) => {
                warn!("Save failed: {}", e);
                writeln!(self.out, "Save failed: {e}")
            }
        }
    }

    fn load(&mut self) -> io::Result<()> {
        match registry::load(&mut self.registry, &self.data_file) {
            Ok(summary) => writeln!(
                self.out,
                "Data loaded from {}. Loaded {} cities ({} duplicates skipped).",
                self.data_file.display(),
                summary.added,
                summary.entries - summary.added
            ),
            Err(Error::FileNotFound(_)) => writeln!(self.out, "No save data file found."),
            Err(e) => writeln!(self.out, "Load failed: {e}"),
        }
    }

    fn glossary(&mut self) -> io::Result<Flow> {
        writeln!(self.out, "\n📘 Weather Terms Guide")?;
        for (idx, (term, _)) in glossary::TERMS.iter().enumerate() {
            writeln!(self.out, "{}) {term}", idx + 1)?;
        }
        writeln!(self.out, "0) Return to main menu")?;

        loop {
            let Some(choice) = self.prompt("Select a term to learn: ")? else {
                return Ok(Flow::Exit);
            };
            if choice.trim() == "0" {
                return Ok(Flow::Continue);
            }
            match glossary::by_choice(&choice) {
                Some((term, meaning)) => writeln!(self.out, "\n📖 {term}:\n{meaning}\n")?,
                None => writeln!(self.out, "Invalid option. Try again.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn shell(script: &str, data_file: PathBuf) -> Shell<Cursor<Vec<u8>>, Vec<u8>> {
        let registry = CityRegistry::with_records(vec![
            WeatherRecord::new("Jakarta", "Asia", 29, "Stormy", 35, 90),
            WeatherRecord::new("Lima", "South America", 22, "Cloudy", 10, 50),
        ]);
        Shell::new(
            registry,
            ForecastSimulator::seeded(1),
            data_file,
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
        )
    }

    fn run(script: &str) -> (Shell<Cursor<Vec<u8>>, Vec<u8>>, String) {
        let mut sh = shell(script, PathBuf::from("unused.json"));
        sh.run().unwrap();
        let out = String::from_utf8(sh.out.clone()).unwrap();
        (sh, out)
    }

    #[test]
    fn test_add_and_list() {
        let (sh, out) = run("1\nOslo\nEurope\n3\n12\n70\nSnowy\n2\n0\n");
        assert!(out.contains("Added weather data for Oslo."));
        assert!(out.contains("3. Oslo (Europe) - 3°C, Snowy, Wind: 12 km/h, Humidity: 70%"));
        assert_eq!(sh.registry.len(), 3);
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_add_bad_number_aborts_without_change() {
        let (sh, out) = run("1\nOslo\nEurope\nwarm\n0\n");
        assert!(out.contains("Invalid input for temperature"));
        assert!(sh.registry.find("oslo").is_none());
    }

    #[test]
    fn test_add_duplicate_reported() {
        let (sh, out) = run("1\nLIMA\nSouth America\n1\n1\n1\nSunny\n0\n");
        assert!(out.contains("Weather data for LIMA already exists"));
        assert_eq!(sh.registry.find("lima").unwrap().temperature, 22);
    }

    #[test]
    fn test_alerts_and_missing_city() {
        let (_, out) = run("6\njakarta\n6\nLima\n6\nAtlantis\n0\n");
        assert!(out.contains("⚠️ Weather alerts for jakarta:"));
        assert!(out.contains(" - ⚠️ Severe weather expected"));
        assert!(out.contains(" - 💨 Fast winds warning"));
        assert!(out.contains(" - 💧 Very humid"));
        assert!(out.contains("No alerts for Lima."));
        assert!(out.contains("City 'Atlantis' not found."));
    }

    #[test]
    fn test_forecast_flow() {
        let (sh, out) = run("7\nLima\n3\nLima\n4\nlima\n7\nLIMA\n0\n");
        assert!(out.contains("No hourly forecast available for Lima. Please generate one first."));
        assert!(out.contains("Generated 24-hour forecast for Lima."));
        assert!(out.contains("Hour 0: "));
        assert!(out.contains("Hour 23: "));
        assert!(!out.contains("Hour 24: "));
        assert!(out.contains("🔍 Forecast Summary:"));
        assert_eq!(sh.registry.forecast("lima").unwrap().len(), 24);
    }

    #[test]
    fn test_update_skips_bad_field() {
        let (sh, out) = run("8\nlima\nhot\nRainy\n\n99\n0\n");
        assert!(out.contains("Updating info for Lima"));
        assert!(out.contains("Invalid input for temperature: \"hot\" is not an integer. Skipping..."));
        assert!(out.contains("City info for Lima updated successfully."));
        let r = sh.registry.find("Lima").unwrap();
        assert_eq!(
            (r.temperature, r.condition.as_str(), r.wind_speed, r.humidity),
            (22, "Rainy", 10, 99)
        );
    }

    #[test]
    fn test_report_and_delete() {
        let (sh, out) = run("9\nJAKARTA\n9\nJakarta\n5\n0\n");
        assert!(out.contains("JAKARTA deleted."));
        assert!(out.contains("City 'Jakarta' not found."));
        assert!(out.contains(
            "South America: Avg Temp 22.0°C, Avg Humidity 50.0%, Avg Wind 10.0 km/h"
        ));
        assert!(!out.contains("Asia: Avg"));
        assert_eq!(sh.registry.len(), 1);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weather_data.json");

        let mut sh = shell("11\n10\n9\nLima\n11\n0\n", path.clone());
        sh.run().unwrap();
        let out = String::from_utf8(sh.out.clone()).unwrap();

        assert!(out.contains("No save data file found."));
        assert!(out.contains(&format!("Data saved to {}", path.display())));
        assert!(out.contains("Loaded 2 cities (0 duplicates skipped)."));
        assert!(sh.registry.find("Lima").is_some());
    }

    #[test]
    fn test_glossary_and_invalid_option() {
        let (_, out) = run("42\n12\n2\n9\n0\n0\n");
        assert!(out.contains("Invalid option. Please try again."));
        assert!(out.contains("📖 Humidity:"));
        assert!(out.contains("Invalid option. Try again."));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_, out) = run("2\n");
        assert!(out.contains("1. Jakarta (Asia)"));
        assert!(out.ends_with("Goodbye!\n"));
    }
}
