//! Trefle API client for plant data
//!
//! Responses are passed through as raw JSON; the browser renders them directly.

use reqwest::Client;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Trefle API client
#[derive(Clone)]
pub struct TrefleClient {
    client: Client,
    api_token: String,
    base_url: String,
}

impl TrefleClient {
    /// Create a client against `base_url`, e.g. `https://trefle.io/api/v1`
    pub fn with_base_url(api_token: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full-text plant search
    pub async fn search_plants(&self, query: &str, page: u32) -> AppResult<Value> {
        let page = page.to_string();
        self.get_json("plants/search", &[("q", query), ("page", page.as_str())])
            .await
    }

    /// Plant details by Trefle id or slug
    pub async fn get_plant(&self, id: &str) -> AppResult<Value> {
        self.get_json(&format!("plants/{}", id), &[]).await
    }

    /// Paginated plant listing
    pub async fn list_plants(&self, page: u32) -> AppResult<Value> {
        let page = page.to_string();
        self.get_json("plants", &[("page", page.as_str())]).await
    }

    async fn get_json(&self, path: &str, params: &[(&str, &str)]) -> AppResult<Value> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(&[("token", self.api_token.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Trefle request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Trefle API error: {} - {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("Failed to parse Trefle response: {}", e)))
    }
}
