//! Forward geocoding: resolve a place name to coordinates.
//! Uses Nominatim (OpenStreetMap) - free, no API key required.

use std::time::Duration;

use serde::Deserialize;

use crate::services::config::Location;
use crate::types::{Result, SkycastError};

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "skycast/0.4 (https://github.com/wfarley16/skycast)";

/// One match from the Nominatim search endpoint.
/// Coordinates arrive as strings on this API.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    display_name: String,
    lat: String,
    lon: String,
}

impl NominatimPlace {
    fn into_location(self, shortcut: &str) -> Result<Location> {
        let latitude = self
            .lat
            .parse::<f64>()
            .map_err(|e| SkycastError::Geocode(format!("bad latitude '{}': {}", self.lat, e)))?;
        let longitude = self
            .lon
            .parse::<f64>()
            .map_err(|e| SkycastError::Geocode(format!("bad longitude '{}': {}", self.lon, e)))?;
        Ok(Location {
            city: self.display_name,
            latitude,
            longitude,
            shortcut: shortcut.to_string(),
        })
    }
}

/// Resolve a place name to a saved-location entry.
pub fn geocode(place: &str) -> Result<Location> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    let response = client
        .get(NOMINATIM_URL)
        .query(&[("q", place), ("format", "json"), ("limit", "1")])
        .send()?;

    if !response.status().is_success() {
        return Err(SkycastError::Geocode(format!(
            "geocoding API returned {}",
            response.status()
        )));
    }

    let mut places: Vec<NominatimPlace> = response
        .json()
        .map_err(|e| SkycastError::Geocode(format!("invalid geocoding response: {}", e)))?;

    if places.is_empty() {
        return Err(SkycastError::Geocode(format!(
            "no match found for '{}'",
            place
        )));
    }
    places.remove(0).into_location(place)
}
