//! Plant catalogue service backed by Trefle

use serde_json::Value;

use crate::config::TrefleConfig;
use crate::error::{AppError, AppResult};
use crate::external::TrefleClient;

/// Plant lookups proxied to Trefle
#[derive(Clone)]
pub struct PlantService {
    client: TrefleClient,
}

impl PlantService {
    pub fn new(client: TrefleClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &TrefleConfig) -> Self {
        Self::new(TrefleClient::with_base_url(
            config.api_token.clone(),
            config.api_endpoint.clone(),
        ))
    }

    /// Search plants by name
    pub async fn search(&self, query: &str, page: u32) -> AppResult<Value> {
        self.client
            .search_plants(query, page)
            .await
            .map_err(|e| upstream_failure(e, "Failed to search plants"))
    }

    /// Plant details by id or slug
    pub async fn details(&self, id: &str) -> AppResult<Value> {
        if !is_valid_plant_id(id) {
            return Err(AppError::validation("id", "Invalid plant id"));
        }

        tracing::debug!(plant_id = id, "Fetching plant details");
        self.client
            .get_plant(id)
            .await
            .map_err(|e| upstream_failure(e, "Failed to get plant details"))
    }

    /// Paginated catalogue listing
    pub async fn list(&self, page: u32) -> AppResult<Value> {
        self.client
            .list_plants(page)
            .await
            .map_err(|e| upstream_failure(e, "Failed to fetch plants"))
    }
}

/// Log the upstream error and replace it with a user-facing message
fn upstream_failure(error: AppError, message: &str) -> AppError {
    tracing::error!(error = %error, "{}", message);
    AppError::ExternalService(message.to_string())
}

/// Trefle ids are numeric; slugs are lowercase words joined by dashes
fn is_valid_plant_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
