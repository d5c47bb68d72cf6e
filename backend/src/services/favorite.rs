//! Favorite plants service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Favorites service for a user's saved plants
#[derive(Clone)]
pub struct FavoriteService {
    db: PgPool,
}

/// A saved plant
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub plant_id: i64,
    pub common_name: String,
    pub scientific_name: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for saving a plant
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteInput {
    pub plant_id: i64,
    #[validate(length(min = 1, message = "Common name is required"))]
    pub common_name: String,
    pub scientific_name: Option<String>,
    pub image_url: Option<String>,
}

impl FavoriteService {
    /// Create a new FavoriteService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Save a plant for a user
    pub async fn add(&self, user_id: Uuid, input: AddFavoriteInput) -> AppResult<Favorite> {
        input.validate()?;

        if input.plant_id <= 0 {
            return Err(AppError::validation("plantId", "Invalid plant id"));
        }

        let common_name = input.common_name.trim();
        if common_name.is_empty() {
            return Err(AppError::validation("commonName", "Common name is required"));
        }

        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM favorites WHERE user_id = $1 AND plant_id = $2",
        )
        .bind(user_id)
        .bind(input.plant_id)
        .fetch_one(&self.db)
        .await?;

        if existing > 0 {
            return Err(already_saved());
        }

        let favorite = sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (id, user_id, plant_id, common_name, scientific_name, image_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, plant_id, common_name, scientific_name, image_url,
                      created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(input.plant_id)
        .bind(common_name)
        .bind(&input.scientific_name)
        .bind(&input.image_url)
        .fetch_one(&self.db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => already_saved(),
            other => AppError::DatabaseError(other),
        })?;

        tracing::info!(user_id = %user_id, plant_id = favorite.plant_id, "Favorite added");

        Ok(favorite)
    }

    /// All favorites of a user, newest first
    pub async fn list(&self, user_id: Uuid) -> AppResult<Vec<Favorite>> {
        let favorites = sqlx::query_as::<_, Favorite>(
            r#"
            SELECT id, user_id, plant_id, common_name, scientific_name, image_url,
                   created_at, updated_at
            FROM favorites
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(favorites)
    }

    /// Delete one of the user's favorites
    pub async fn remove(&self, user_id: Uuid, favorite_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = $1 AND user_id = $2")
            .bind(favorite_id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Favorite".to_string()));
        }

        tracing::info!(user_id = %user_id, favorite_id = %favorite_id, "Favorite removed");

        Ok(())
    }
}

fn already_saved() -> AppError {
    AppError::DuplicateEntry("Plant already in favorites".to_string())
}
