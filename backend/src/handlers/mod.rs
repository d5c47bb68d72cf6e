//! HTTP request handlers

pub mod auth;
pub mod favorite;
pub mod health;
pub mod plant;
pub mod weather;

pub use auth::{login, register};
pub use favorite::{add_favorite, list_favorites, remove_favorite};
pub use health::health_check;
pub use plant::{get_plant_details, list_plants, search_plants};
pub use weather::{get_climate_suitability, get_current_weather, get_weather_forecast};
