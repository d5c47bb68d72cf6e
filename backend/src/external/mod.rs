//! External API integrations

pub mod trefle;
pub mod weather;

pub use trefle::TrefleClient;
pub use weather::WeatherApiClient;
