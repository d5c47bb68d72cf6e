//! Route definitions for the Plant Care Platform

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (public)
        .nest("/auth", auth_routes())
        // Weather and suitability routes (public)
        .nest("/weather", weather_routes())
        // Plant catalogue (public) and favorites (protected)
        .nest("/plants", plant_routes(state))
}

/// Authentication routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
}

/// Weather routes (public)
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/current/:location", get(handlers::get_current_weather))
        .route("/forecast/:location", get(handlers::get_weather_forecast))
        .route("/suitability", post(handlers::get_climate_suitability))
}

/// Plant catalogue routes
fn plant_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_plants))
        .route("/search", get(handlers::search_plants))
        .route("/:plant_id", get(handlers::get_plant_details))
        .merge(favorite_routes(state))
}

/// Favorite routes (protected)
fn favorite_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/favorites",
            get(handlers::list_favorites).post(handlers::add_favorite),
        )
        .route("/favorites/:favorite_id", delete(handlers::remove_favorite))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
