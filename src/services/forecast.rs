//! Forecast retrieval from a forecast.io-compatible API

use std::time::Duration;

use crate::services::config::Location;
use crate::types::{Forecast, Result, SkycastError};

/// Pirate Weather serves the forecast.io request and response format
const FORECAST_URL: &str = "https://api.pirateweather.net/forecast";

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Fetches hourly forecasts over blocking HTTP
pub struct ForecastService {
    client: reqwest::blocking::Client,
}

impl ForecastService {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }

    /// Request the forecast for a location.
    ///
    /// `units` and `lang` are passed through to the API unchanged; the
    /// response echoes the resolved unit system back in its flags.
    pub fn fetch(
        &self,
        api_key: &str,
        location: &Location,
        units: &str,
        lang: &str,
    ) -> Result<Forecast> {
        let url = format!(
            "{}/{}/{:.5},{:.5}?units={}&lang={}",
            FORECAST_URL, api_key, location.latitude, location.longitude, units, lang
        );

        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(SkycastError::Forecast(format!(
                "forecast API returned {} for {}",
                response.status(),
                location.city
            )));
        }

        response
            .json()
            .map_err(|e| SkycastError::Forecast(format!("invalid API response: {}", e)))
    }
}
