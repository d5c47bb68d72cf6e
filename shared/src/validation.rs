//! Validation utilities for the Plant Care Platform
//!
//! The suitability scorer itself never rejects input; these checks run at the
//! API boundary before it is called.

use thiserror::Error;

use crate::models::PlantRequirements;

/// Why a set of plant requirements was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequirementsError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{min_field} cannot be greater than {max_field}")]
    InvertedRange {
        min_field: &'static str,
        max_field: &'static str,
    },

    #[error("rainfall_min cannot be negative")]
    NegativeRainfall,
}

impl RequirementsError {
    /// The request field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            RequirementsError::NotFinite { field } => field,
            RequirementsError::InvertedRange { min_field, .. } => min_field,
            RequirementsError::NegativeRainfall => "rainfall_min",
        }
    }
}

/// Validate explicitly supplied requirement values
///
/// Ranges are checked after defaults are applied, so `{"temp_min": 40}`
/// is rejected against the default maximum of 35.
pub fn validate_plant_requirements(
    requirements: &PlantRequirements,
) -> Result<(), RequirementsError> {
    let supplied = [
        ("temp_min", requirements.temp_min),
        ("temp_max", requirements.temp_max),
        ("humidity_min", requirements.humidity_min),
        ("humidity_max", requirements.humidity_max),
        ("rainfall_min", requirements.rainfall_min),
    ];

    for (field, value) in supplied {
        if value.is_some_and(|v| !v.is_finite()) {
            return Err(RequirementsError::NotFinite { field });
        }
    }

    if requirements.temp_min() > requirements.temp_max() {
        return Err(RequirementsError::InvertedRange {
            min_field: "temp_min",
            max_field: "temp_max",
        });
    }

    if requirements.humidity_min() > requirements.humidity_max() {
        return Err(RequirementsError::InvertedRange {
            min_field: "humidity_min",
            max_field: "humidity_max",
        });
    }

    if requirements.rainfall_min() < 0.0 {
        return Err(RequirementsError::NegativeRainfall);
    }

    Ok(())
}

/// Validate a free-text location and return it trimmed
pub fn validate_location(location: Option<&str>) -> Result<&str, &'static str> {
    match location.map(str::trim) {
        Some(location) if !location.is_empty() => Ok(location),
        _ => Err("Location is required"),
    }
}
