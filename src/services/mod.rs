//! Services for configuration, forecast retrieval and geocoding

pub mod config;
pub mod forecast;
pub mod geocode;

pub use config::{Config, ConfigService, Location};
pub use forecast::ForecastService;
pub use geocode::geocode;
