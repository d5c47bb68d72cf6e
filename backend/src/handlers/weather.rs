//! HTTP handlers for weather and climate suitability endpoints

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use shared::models::{
    calculate_climate_suitability, PlantRequirements, SuitabilityReport, WeatherForecast,
    WeatherSnapshot,
};
use shared::validation::{validate_location, validate_plant_requirements};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Body of a suitability request
#[derive(Debug, Default)]
pub struct SuitabilityRequest {
    pub location: Option<String>,
    pub plant_requirements: Option<PlantRequirements>,
}

impl SuitabilityRequest {
    /// Read a raw request body. An empty body is a request with no fields, so
    /// it fails on the missing location like `{}` does.
    pub fn from_body(body: &[u8]) -> AppResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::validation("body", format!("Invalid JSON body: {}", e)))?;
        let Value::Object(mut fields) = value else {
            return Err(AppError::validation("body", "Request body must be a JSON object"));
        };

        let location = match fields.remove("location") {
            None | Some(Value::Null) => None,
            Some(Value::String(location)) => Some(location),
            Some(_) => return Err(AppError::validation("location", "Location must be a string")),
        };

        let plant_requirements = match fields.remove("plantRequirements") {
            None | Some(Value::Null) => None,
            Some(requirements) => Some(serde_json::from_value(requirements).map_err(|e| {
                AppError::validation(
                    "plantRequirements",
                    format!("Invalid plant requirements: {}", e),
                )
            })?),
        };

        Ok(Self {
            location,
            plant_requirements,
        })
    }
}

/// Suitability report tagged with the resolved location name
#[derive(Debug, Serialize)]
pub struct SuitabilityResponse {
    pub location: String,
    #[serde(flatten)]
    pub report: SuitabilityReport,
}

/// Current conditions for a location
pub async fn get_current_weather(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> AppResult<Json<WeatherSnapshot>> {
    let location = require_location(Some(location.as_str()))?;
    let snapshot = state.weather.current_weather(location).await;
    Ok(Json(snapshot))
}

/// Daily forecast for a location
pub async fn get_weather_forecast(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> AppResult<Json<WeatherForecast>> {
    let location = require_location(Some(location.as_str()))?;
    let forecast = state.weather.forecast(location).await;
    Ok(Json(forecast))
}

/// Score current weather at a location against plant requirements
pub async fn get_climate_suitability(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<SuitabilityResponse>> {
    let body = SuitabilityRequest::from_body(&body)?;
    let location = require_location(body.location.as_deref())?;

    if let Some(requirements) = &body.plant_requirements {
        validate_plant_requirements(requirements)
            .map_err(|e| AppError::validation(e.field(), e.to_string()))?;
    }

    let weather = state.weather.current_weather(location).await;
    let report = calculate_climate_suitability(&weather, body.plant_requirements.as_ref());

    tracing::debug!(
        location = %weather.location,
        score = report.score,
        suitability = %report.suitability,
        "Climate suitability calculated"
    );

    Ok(Json(SuitabilityResponse {
        location: weather.location,
        report,
    }))
}

fn require_location(location: Option<&str>) -> AppResult<&str> {
    validate_location(location).map_err(|message| AppError::validation("location", message))
}
