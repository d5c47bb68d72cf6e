//! HTTP handlers for the plant catalogue

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppResult;
use crate::AppState;

/// Query parameters for plant search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub page: Option<u32>,
}

/// Query parameters for the catalogue listing
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

/// Search plants by name
pub async fn search_plants(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Value>> {
    let data = state
        .plants
        .search(query.q.trim(), query.page.unwrap_or(1))
        .await?;
    Ok(Json(data))
}

/// Paginated plant listing
pub async fn list_plants(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<Value>> {
    let data = state.plants.list(query.page.unwrap_or(1)).await?;
    Ok(Json(data))
}

/// Plant details by Trefle id or slug
pub async fn get_plant_details(
    State(state): State<AppState>,
    Path(plant_id): Path<String>,
) -> AppResult<Json<Value>> {
    let data = state.plants.details(&plant_id).await?;
    Ok(Json(data))
}
