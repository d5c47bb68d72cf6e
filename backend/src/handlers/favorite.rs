//! HTTP handlers for a user's favorite plants

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::CurrentUser;
use crate::services::favorite::{AddFavoriteInput, Favorite, FavoriteService};
use crate::AppState;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List the signed-in user's favorites
pub async fn list_favorites(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<Favorite>>> {
    let service = FavoriteService::new(state.db);
    let favorites = service.list(current_user.0.user_id).await?;
    Ok(Json(favorites))
}

/// Save a plant to the signed-in user's favorites
pub async fn add_favorite(
    State(state): State<AppState>,
    current_user: CurrentUser,
    AppJson(input): AppJson<AddFavoriteInput>,
) -> AppResult<(StatusCode, Json<Favorite>)> {
    let service = FavoriteService::new(state.db);
    let favorite = service.add(current_user.0.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Remove one of the signed-in user's favorites
pub async fn remove_favorite(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(favorite_id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    let service = FavoriteService::new(state.db);
    service.remove(current_user.0.user_id, favorite_id).await?;
    Ok(Json(MessageResponse {
        message: "Favorite removed".to_string(),
    }))
}
