//! Plant Care Platform - Backend Library
//!
//! REST API for plant search, favorites, weather lookups and climate
//! suitability scoring.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

pub use config::Config;

use services::{PlantService, WeatherProvider, WeatherService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub config: Arc<Config>,
    pub weather: Arc<dyn WeatherProvider>,
    pub plants: PlantService,
}

impl AppState {
    /// Wire up services from configuration
    pub fn new(db: sqlx::PgPool, config: Config) -> Self {
        let weather = WeatherService::from_config(&config.weather);
        let plants = PlantService::from_config(&config.trefle);

        Self {
            db,
            config: Arc::new(config),
            weather: Arc::new(weather),
            plants,
        }
    }

    /// Replace the weather provider
    pub fn with_weather(mut self, weather: Arc<dyn WeatherProvider>) -> Self {
        self.weather = weather;
        self
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api", routes::api_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Plant Care Platform API"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
