//! WebAssembly module for the Plant Care Platform
//!
//! Provides client-side computation for:
//! - Climate suitability scoring against a cached weather reading
//! - Suitability band lookups
//! - An explicit translation cache owned by the page

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Score a weather reading against plant requirements
///
/// `requirements_json` may be empty, in which case the defaults apply.
/// Returns the report as JSON.
#[wasm_bindgen]
pub fn calculate_climate_suitability(
    weather_json: &str,
    requirements_json: &str,
) -> Result<String, JsValue> {
    score_json(weather_json, requirements_json).map_err(|e| JsValue::from_str(&e))
}

/// Classify a 0-100 score into "Poor", "Fair", "Good" or "Excellent"
#[wasm_bindgen]
pub fn classify_suitability(score: u8) -> String {
    shared::classify_suitability(score).to_string()
}

fn score_json(weather_json: &str, requirements_json: &str) -> Result<String, String> {
    let weather: WeatherSnapshot = serde_json::from_str(weather_json)
        .map_err(|e| format!("Invalid weather JSON: {}", e))?;

    let requirements: Option<PlantRequirements> = if requirements_json.trim().is_empty() {
        None
    } else {
        Some(
            serde_json::from_str(requirements_json)
                .map_err(|e| format!("Invalid requirements JSON: {}", e))?,
        )
    };

    if let Some(requirements) = &requirements {
        validate_plant_requirements(requirements).map_err(|e| e.to_string())?;
    }

    let report = shared::calculate_climate_suitability(&weather, requirements.as_ref());
    serde_json::to_string(&report).map_err(|e| format!("Failed to encode report: {}", e))
}

/// Page-lifetime cache of translated strings
#[wasm_bindgen(js_name = TranslationCache)]
#[derive(Default)]
pub struct ClientTranslationCache {
    inner: shared::TranslationCache,
}

#[wasm_bindgen(js_class = TranslationCache)]
impl ClientTranslationCache {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached translation, or `undefined` on a miss or unknown language code
    pub fn get(&self, text: &str, source: &str, target: &str) -> Option<String> {
        let source = Language::from_code(source)?;
        let target = Language::from_code(target)?;
        self.inner.get(text, source, target)
    }

    /// Store a translation; returns false for unknown language codes
    pub fn insert(&mut self, text: &str, source: &str, target: &str, translation: &str) -> bool {
        match (Language::from_code(source), Language::from_code(target)) {
            (Some(source), Some(target)) => {
                self.inner.insert(text, source, target, translation);
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
