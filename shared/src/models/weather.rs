//! Weather data models

use serde::{Deserialize, Serialize};

/// Current weather conditions for a named location
///
/// Only `temperature`, `humidity` and `weather` feed the suitability scorer;
/// the remaining fields are carried through for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub location: String,
    #[serde(default)]
    pub country: String,
    /// Air temperature in °C
    pub temperature: f64,
    #[serde(default)]
    pub feels_like: f64,
    /// Relative humidity (0-100)
    pub humidity: f64,
    /// Pressure in hPa
    #[serde(default)]
    pub pressure: f64,
    /// Condition label, e.g. "Partly cloudy"
    pub weather: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    /// Wind speed in m/s
    #[serde(default)]
    pub wind_speed: f64,
    /// Cloud cover (0-100)
    #[serde(default)]
    pub clouds: f64,
    /// Observation time in unix seconds
    #[serde(default)]
    pub timestamp: i64,
}

impl WeatherSnapshot {
    /// Snapshot with only the fields the scorer reads
    pub fn new(
        location: impl Into<String>,
        temperature: f64,
        humidity: f64,
        weather: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            temperature,
            humidity,
            weather: weather.into(),
            ..Self::default()
        }
    }
}

/// Multi-day forecast for a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherForecast {
    pub location: String,
    pub daily: Vec<DailyForecast>,
}

/// One day of forecast data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyForecast {
    /// Day start in unix seconds
    pub date: i64,
    pub temp_day: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: f64,
    pub weather: String,
    pub description: String,
    pub icon: String,
    /// Total precipitation in mm
    pub rain: f64,
    /// Maximum wind speed in m/s
    pub wind_speed: f64,
}
