//! Climate suitability scoring
//!
//! Compares current weather against a plant's preferred temperature and
//! humidity ranges, producing a 0-100 score, a qualitative band and paired
//! warnings/recommendations.

use serde::{Deserialize, Serialize};

use super::weather::WeatherSnapshot;

pub const DEFAULT_TEMP_MIN: f64 = 10.0;
pub const DEFAULT_TEMP_MAX: f64 = 35.0;
pub const DEFAULT_HUMIDITY_MIN: f64 = 30.0;
pub const DEFAULT_HUMIDITY_MAX: f64 = 80.0;
pub const DEFAULT_RAINFALL_MIN: f64 = 0.0;

const TEMPERATURE_PENALTY_PER_DEGREE: f64 = 5.0;
const TEMPERATURE_PENALTY_CAP: f64 = 30.0;
const HUMIDITY_PENALTY_PER_PERCENT: f64 = 0.5;
const HUMIDITY_PENALTY_CAP: f64 = 20.0;

/// A plant's preferred growing conditions
///
/// Every field is optional; missing fields fall back to the `DEFAULT_*`
/// constants. `rainfall_min` is accepted but does not affect the score.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlantRequirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rainfall_min: Option<f64>,
}

impl PlantRequirements {
    pub fn temp_min(&self) -> f64 {
        self.temp_min.unwrap_or(DEFAULT_TEMP_MIN)
    }

    pub fn temp_max(&self) -> f64 {
        self.temp_max.unwrap_or(DEFAULT_TEMP_MAX)
    }

    pub fn humidity_min(&self) -> f64 {
        self.humidity_min.unwrap_or(DEFAULT_HUMIDITY_MIN)
    }

    pub fn humidity_max(&self) -> f64 {
        self.humidity_max.unwrap_or(DEFAULT_HUMIDITY_MAX)
    }

    pub fn rainfall_min(&self) -> f64 {
        self.rainfall_min.unwrap_or(DEFAULT_RAINFALL_MIN)
    }
}

/// Qualitative suitability band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Suitability {
    /// Below 40
    Poor,
    /// 40-59
    Fair,
    /// 60-79
    Good,
    /// 80 and above
    Excellent,
}

impl std::fmt::Display for Suitability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suitability::Poor => write!(f, "Poor"),
            Suitability::Fair => write!(f, "Fair"),
            Suitability::Good => write!(f, "Good"),
            Suitability::Excellent => write!(f, "Excellent"),
        }
    }
}

/// Classify a rounded score into its band
pub fn classify_suitability(score: u8) -> Suitability {
    match score {
        0..=39 => Suitability::Poor,
        40..=59 => Suitability::Fair,
        60..=79 => Suitability::Good,
        _ => Suitability::Excellent,
    }
}

/// The readings the score was computed from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub humidity: f64,
    pub weather: String,
}

/// Result of a suitability calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuitabilityReport {
    pub score: u8,
    pub suitability: Suitability,
    pub warnings: Vec<String>,
    /// Positionally paired with `warnings`
    pub recommendations: Vec<String>,
    pub current_conditions: CurrentConditions,
}

/// Score how well the current weather suits a plant
///
/// Temperature outside the preferred range costs 5 points per degree (at
/// most 30); humidity outside its range costs 0.5 points per percent (at most
/// 20). The result is clamped to 0-100 and rounded before classification.
pub fn calculate_climate_suitability(
    weather: &WeatherSnapshot,
    requirements: Option<&PlantRequirements>,
) -> SuitabilityReport {
    let defaults = PlantRequirements::default();
    let requirements = requirements.unwrap_or(&defaults);

    let temp_min = requirements.temp_min();
    let temp_max = requirements.temp_max();
    let humidity_min = requirements.humidity_min();
    let humidity_max = requirements.humidity_max();

    let mut score = 100.0_f64;
    let mut warnings = Vec::new();
    let mut recommendations = Vec::new();

    if weather.temperature < temp_min {
        let diff = temp_min - weather.temperature;
        score -= (diff * TEMPERATURE_PENALTY_PER_DEGREE).min(TEMPERATURE_PENALTY_CAP);
        warnings.push(format!(
            "Temperature too low ({}°C). Plant prefers {}°C minimum.",
            format_reading(weather.temperature),
            format_reading(temp_min)
        ));
        recommendations.push("Consider indoor growing or greenhouse protection.".to_string());
    } else if weather.temperature > temp_max {
        let diff = weather.temperature - temp_max;
        score -= (diff * TEMPERATURE_PENALTY_PER_DEGREE).min(TEMPERATURE_PENALTY_CAP);
        warnings.push(format!(
            "Temperature too high ({}°C). Plant prefers {}°C maximum.",
            format_reading(weather.temperature),
            format_reading(temp_max)
        ));
        recommendations
            .push("Provide shade during peak hours and ensure adequate watering.".to_string());
    }

    if weather.humidity < humidity_min {
        let diff = humidity_min - weather.humidity;
        score -= (diff * HUMIDITY_PENALTY_PER_PERCENT).min(HUMIDITY_PENALTY_CAP);
        warnings.push(format!(
            "Humidity too low ({}%). Plant prefers {}% minimum.",
            format_reading(weather.humidity),
            format_reading(humidity_min)
        ));
        recommendations.push("Increase humidity with misting or humidifiers.".to_string());
    } else if weather.humidity > humidity_max {
        let diff = weather.humidity - humidity_max;
        score -= (diff * HUMIDITY_PENALTY_PER_PERCENT).min(HUMIDITY_PENALTY_CAP);
        warnings.push(format!(
            "Humidity too high ({}%). Plant prefers {}% maximum.",
            format_reading(weather.humidity),
            format_reading(humidity_max)
        ));
        recommendations
            .push("Ensure good air circulation to prevent fungal diseases.".to_string());
    }

    // Non-negative after the clamp, so round() matches round-half-up
    let score = score.clamp(0.0, 100.0).round() as u8;

    SuitabilityReport {
        score,
        suitability: classify_suitability(score),
        warnings,
        recommendations,
        current_conditions: CurrentConditions {
            temperature: weather.temperature,
            humidity: weather.humidity,
            weather: weather.weather.clone(),
        },
    }
}

/// Render a reading the way the browser client prints numbers
fn format_reading(value: f64) -> String {
    if value == 0.0 {
        // folds -0
        "0".to_string()
    } else if value.is_infinite() {
        let label = if value > 0.0 { "Infinity" } else { "-Infinity" };
        label.to_string()
    } else if value.is_finite() && (value.abs() >= 1e21 || value.abs() < 1e-6) {
        // Shortest digits in exponent form, with an explicit sign on the exponent
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        value.to_string()
    }
}
