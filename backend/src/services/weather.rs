//! Weather service with live lookups and synthetic fallback
//!
//! Callers always receive a reading: when no API key is configured or the
//! upstream call fails, deterministic synthetic data is returned instead.

use async_trait::async_trait;
use chrono::Utc;
use shared::models::{DailyForecast, WeatherForecast, WeatherSnapshot};

use crate::config::WeatherConfig;
use crate::external::weather::{WeatherApiClient, FORECAST_DAYS};

const SECONDS_PER_DAY: i64 = 86_400;

/// Source of weather readings for a named location
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// "live" or "synthetic"
    fn source(&self) -> &'static str;

    async fn current_weather(&self, location: &str) -> WeatherSnapshot;

    async fn forecast(&self, location: &str) -> WeatherForecast;
}

/// WeatherAPI.com backed provider
#[derive(Clone, Default)]
pub struct WeatherService {
    client: Option<WeatherApiClient>,
}

impl WeatherService {
    /// Provider that only serves synthetic data
    pub fn new() -> Self {
        Self { client: None }
    }

    /// Provider that queries the given client first
    pub fn with_client(client: WeatherApiClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Build from configuration; placeholder or empty keys mean synthetic mode
    pub fn from_config(config: &WeatherConfig) -> Self {
        if config.is_live() {
            Self::with_client(WeatherApiClient::with_base_url(
                config.api_key.trim().to_string(),
                config.api_endpoint.clone(),
            ))
        } else {
            Self::new()
        }
    }

    pub fn is_live(&self) -> bool {
        self.client.is_some()
    }
}

#[async_trait]
impl WeatherProvider for WeatherService {
    fn source(&self) -> &'static str {
        if self.is_live() {
            "live"
        } else {
            "synthetic"
        }
    }

    async fn current_weather(&self, location: &str) -> WeatherSnapshot {
        let now = Utc::now().timestamp();

        let Some(client) = &self.client else {
            tracing::warn!("Using synthetic weather data (API key not configured)");
            return synthetic_current_weather(location, now);
        };

        tracing::debug!(location, "Fetching current weather");
        match client.get_current_weather(location).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!(location, error = %e, "Current weather lookup failed");
                tracing::warn!("Falling back to synthetic weather data");
                synthetic_current_weather(location, now)
            }
        }
    }

    async fn forecast(&self, location: &str) -> WeatherForecast {
        let now = Utc::now().timestamp();

        let Some(client) = &self.client else {
            tracing::warn!("Using synthetic forecast data (API key not configured)");
            return synthetic_forecast(location, now);
        };

        tracing::debug!(location, "Fetching weather forecast");
        match client.get_forecast(location).await {
            Ok(forecast) => forecast,
            Err(e) => {
                tracing::error!(location, error = %e, "Forecast lookup failed");
                tracing::warn!("Falling back to synthetic forecast data");
                synthetic_forecast(location, now)
            }
        }
    }
}

/// Fixed tropical reading for `location` observed at `now`
pub fn synthetic_current_weather(location: &str, now: i64) -> WeatherSnapshot {
    WeatherSnapshot {
        location: location.to_string(),
        country: "IN".to_string(),
        temperature: 28.0,
        feels_like: 30.0,
        humidity: 65.0,
        pressure: 1012.0,
        weather: "Partly cloudy".to_string(),
        description: "Partly cloudy".to_string(),
        icon: condition_icon(116),
        wind_speed: 3.5,
        clouds: 40.0,
        timestamp: now,
    }
}

/// Seven synthetic days starting at `now`
///
/// Values vary by day but are reproducible for the same inputs.
pub fn synthetic_forecast(location: &str, now: i64) -> WeatherForecast {
    let daily = (0..i64::from(FORECAST_DAYS))
        .map(|day| {
            let (label, code) = match day % 3 {
                0 => ("Sunny", 113),
                1 => ("Partly cloudy", 116),
                _ => ("Cloudy", 119),
            };

            DailyForecast {
                date: now + day * SECONDS_PER_DAY,
                temp_day: 28.0 + 4.0 * spread(day, 0),
                temp_min: 22.0 + 3.0 * spread(day, 1),
                temp_max: 32.0 + 3.0 * spread(day, 2),
                humidity: 60.0 + 20.0 * spread(day, 3),
                weather: label.to_string(),
                description: label.to_string(),
                icon: condition_icon(code),
                rain: 5.0 * spread(day, 4),
                wind_speed: 2.0 + 3.0 * spread(day, 5),
            }
        })
        .collect();

    WeatherForecast {
        location: location.to_string(),
        daily,
    }
}

/// Fraction in [0, 0.9] that varies with day and field
fn spread(day: i64, salt: i64) -> f64 {
    ((day * 7 + salt * 3) % 10) as f64 / 10.0
}

fn condition_icon(code: u16) -> String {
    format!("//cdn.weatherapi.com/weather/64x64/day/{}.png", code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_current_weather() {
        let snapshot = synthetic_current_weather("Pune", 1_700_000_000);

        assert_eq!(snapshot.location, "Pune");
        assert_eq!(snapshot.country, "IN");
        assert_eq!(snapshot.temperature, 28.0);
        assert_eq!(snapshot.humidity, 65.0);
        assert_eq!(snapshot.icon, "//cdn.weatherapi.com/weather/64x64/day/116.png");
        assert_eq!(snapshot.timestamp, 1_700_000_000);
    }

    #[test]
    fn test_synthetic_forecast_ranges() {
        let forecast = synthetic_forecast("Pune", 0);

        assert_eq!(forecast.daily.len(), 7);
        for (i, day) in forecast.daily.iter().enumerate() {
            assert_eq!(day.date, i as i64 * SECONDS_PER_DAY);
            assert!((28.0..32.0).contains(&day.temp_day));
            assert!((22.0..25.0).contains(&day.temp_min));
            assert!((32.0..35.0).contains(&day.temp_max));
            assert!((60.0..80.0).contains(&day.humidity));
            assert!((0.0..5.0).contains(&day.rain));
            assert!((2.0..5.0).contains(&day.wind_speed));
        }
    }

    #[test]
    fn test_synthetic_forecast_condition_cycle() {
        let forecast = synthetic_forecast("Pune", 0);
        let labels: Vec<_> = forecast.daily.iter().map(|d| d.weather.as_str()).collect();

        assert_eq!(
            labels,
            ["Sunny", "Partly cloudy", "Cloudy", "Sunny", "Partly cloudy", "Cloudy", "Sunny"]
        );
        assert!(forecast.daily[2].icon.ends_with("/119.png"));
    }

    #[test]
    fn test_from_config_modes() {
        let mut config = WeatherConfig::default();
        assert!(!WeatherService::from_config(&config).is_live());

        config.api_key = "placeholder_token".to_string();
        assert_eq!(WeatherService::from_config(&config).source(), "synthetic");

        config.api_key = "abc123".to_string();
        assert_eq!(WeatherService::from_config(&config).source(), "live");
    }
}
