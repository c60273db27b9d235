//! Forecast response types and the hourly sample consumed by the renderer

use chrono::{DateTime, Local, Timelike};
use serde::Deserialize;

/// Weather phenomena at a single instant, as returned by the forecast API
/// (forecast.io wire shape, served today by Pirate Weather).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)] // wire shape; the chart consumes a subset of fields
pub struct DataPoint {
    /// Unix timestamp (seconds)
    pub time: i64,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub precip_intensity: f64,
    #[serde(default)]
    pub precip_probability: f64,
    /// "rain", "snow" or "sleet" when precipitation is expected
    #[serde(default)]
    pub precip_type: Option<String>,
    #[serde(default)]
    pub temperature: f64,
    #[serde(default)]
    pub apparent_temperature: f64,
    /// 0.0 = clear sky, 1.0 = overcast
    #[serde(default)]
    pub cloud_cover: f64,
    #[serde(default)]
    pub humidity: f64,
    #[serde(default)]
    pub wind_speed: f64,
}

/// Weather phenomena over a period of time
#[derive(Debug, Clone, Default, Deserialize)]
#[allow(dead_code)] // wire shape; the chart consumes a subset of fields
pub struct DataBlock {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub data: Vec<DataPoint>,
}

/// Request metadata echoed back by the API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Flags {
    /// Resolved unit system ("si", "us", "uk", "ca")
    #[serde(default)]
    pub units: String,
}

/// Full forecast response
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)] // wire shape; the chart consumes a subset of fields
pub struct Forecast {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub currently: Option<DataPoint>,
    #[serde(default)]
    pub hourly: DataBlock,
    #[serde(default)]
    pub flags: Flags,
}

impl Forecast {
    /// Convert the hourly data block into chart samples, preserving order.
    pub fn hourly_samples(&self) -> Vec<HourSample> {
        self.hourly.data.iter().map(HourSample::from_point).collect()
    }
}

/// One hour's weather reading, resolved to the local calendar.
///
/// This is the only shape the rendering engine consumes; everything else in
/// this module is wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct HourSample {
    pub time: DateTime<Local>,
    pub temperature: f64,
    pub feels_like: f64,
    // reserved for a precipitation/cloud indicator row under the curve
    #[allow(dead_code)]
    pub precip_probability: f64,
    #[allow(dead_code)]
    pub precip_type: Option<String>,
    #[allow(dead_code)]
    pub cloud_cover: f64,
}

impl HourSample {
    pub fn from_point(point: &DataPoint) -> Self {
        let time = DateTime::from_timestamp(point.time, 0)
            .unwrap_or_default()
            .with_timezone(&Local);
        Self {
            time,
            temperature: point.temperature,
            feels_like: point.apparent_temperature,
            precip_probability: point.precip_probability,
            precip_type: point.precip_type.clone(),
            cloud_cover: point.cloud_cover,
        }
    }

    /// Hour of day on the local calendar (0-23).
    /// Day-group boundaries are detected at hour 0.
    pub fn local_hour(&self) -> u32 {
        self.time.hour()
    }
}
