//! Business logic services for the Plant Care Platform

pub mod auth;
pub mod favorite;
pub mod plant;
pub mod weather;

pub use auth::AuthService;
pub use favorite::FavoriteService;
pub use plant::PlantService;
pub use weather::{WeatherProvider, WeatherService};
