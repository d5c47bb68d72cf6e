//! Weather API client for fetching weather data
//!
//! Integrates with WeatherAPI.com for current conditions and forecasts

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use shared::models::{DailyForecast, WeatherForecast, WeatherSnapshot};

use crate::error::{AppError, AppResult};

/// Number of forecast days requested from the provider
pub const FORECAST_DAYS: u8 = 7;

const KPH_PER_MPS: f64 = 3.6;

/// Weather API client
#[derive(Clone)]
pub struct WeatherApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// WeatherAPI.com response for current weather
#[derive(Debug, Deserialize)]
struct WapiCurrentResponse {
    location: WapiLocation,
    current: WapiCurrent,
}

#[derive(Debug, Deserialize)]
struct WapiLocation {
    name: String,
    #[serde(default)]
    country: String,
    localtime_epoch: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WapiCurrent {
    temp_c: f64,
    feelslike_c: f64,
    humidity: f64,
    pressure_mb: f64,
    condition: WapiCondition,
    wind_kph: f64,
    cloud: f64,
    last_updated_epoch: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WapiCondition {
    text: String,
    #[serde(default)]
    icon: String,
}

/// WeatherAPI.com response for forecast
#[derive(Debug, Deserialize)]
struct WapiForecastResponse {
    location: WapiLocation,
    forecast: WapiForecast,
}

#[derive(Debug, Deserialize)]
struct WapiForecast {
    forecastday: Vec<WapiForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WapiForecastDay {
    date: String,
    day: WapiDay,
}

#[derive(Debug, Deserialize)]
struct WapiDay {
    avgtemp_c: f64,
    mintemp_c: f64,
    maxtemp_c: f64,
    avghumidity: f64,
    condition: WapiCondition,
    totalprecip_mm: Option<f64>,
    maxwind_kph: f64,
}

impl WeatherApiClient {
    /// Create a client against `base_url`, e.g. `https://api.weatherapi.com/v1`
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch current weather conditions for a city name or "lat,lon" pair
    pub async fn get_current_weather(&self, location: &str) -> AppResult<WeatherSnapshot> {
        let url = format!("{}/current.json", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", location), ("aqi", "no")])
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: WapiCurrentResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse weather response: {}", e))
        })?;

        Ok(convert_current_response(data))
    }

    /// Fetch the daily forecast for a city name or "lat,lon" pair
    pub async fn get_forecast(&self, location: &str) -> AppResult<WeatherForecast> {
        let url = format!("{}/forecast.json", self.base_url);
        let days = FORECAST_DAYS.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", location),
                ("days", days.as_str()),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: WapiForecastResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse forecast response: {}", e))
        })?;

        convert_forecast_response(data)
    }
}

/// Convert a WeatherAPI.com current response to our format
fn convert_current_response(data: WapiCurrentResponse) -> WeatherSnapshot {
    let current = data.current;

    WeatherSnapshot {
        location: data.location.name,
        country: data.location.country,
        temperature: current.temp_c,
        feels_like: current.feelslike_c,
        humidity: current.humidity,
        pressure: current.pressure_mb,
        weather: current.condition.text.clone(),
        description: current.condition.text,
        icon: current.condition.icon,
        wind_speed: current.wind_kph / KPH_PER_MPS,
        clouds: current.cloud,
        timestamp: data
            .location
            .localtime_epoch
            .or(current.last_updated_epoch)
            .unwrap_or_else(|| chrono::Utc::now().timestamp()),
    }
}

/// Convert a WeatherAPI.com forecast response to our format
fn convert_forecast_response(data: WapiForecastResponse) -> AppResult<WeatherForecast> {
    let daily = data
        .forecast
        .forecastday
        .into_iter()
        .map(|item| {
            let day = item.day;
            Ok(DailyForecast {
                date: date_to_timestamp(&item.date)?,
                temp_day: day.avgtemp_c,
                temp_min: day.mintemp_c,
                temp_max: day.maxtemp_c,
                humidity: day.avghumidity,
                weather: day.condition.text.clone(),
                description: day.condition.text,
                icon: day.condition.icon,
                rain: day.totalprecip_mm.unwrap_or(0.0),
                wind_speed: day.maxwind_kph / KPH_PER_MPS,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(WeatherForecast {
        location: data.location.name,
        daily,
    })
}

/// Unix seconds at midnight UTC for a `YYYY-MM-DD` date
fn date_to_timestamp(date: &str) -> AppResult<i64> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
        .ok_or_else(|| AppError::ExternalService(format!("Invalid forecast date: {}", date)))
}
