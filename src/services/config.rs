//! User configuration: API key, units, heat map and saved locations
//!
//! Persisted as JSON under the platform config directory. A first run writes
//! a default file and asks the user to fill in the API key.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::render::heat::{HeatColor, Rgb};
use crate::types::{Result, SkycastError};

/// A saved place the forecast can be requested for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Short handle the location was added under, used for selection
    pub shortcut: String,
}

/// All user-adjustable settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_key: String,
    /// "si", "us", "uk", "ca" or "auto" (API decides from the location)
    pub unit_format: String,
    /// Forecast language code ("en", "de", ...)
    pub language: String,
    /// Ascending temperature -> color anchors for the chart heat map
    pub heat_map: Vec<HeatColor>,
    /// Index into `locations` used when no shortcut is given
    pub default_location: usize,
    pub locations: Vec<Location>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            unit_format: "auto".to_string(),
            language: "en".to_string(),
            heat_map: default_heat_map(),
            default_location: 0,
            locations: Vec::new(),
        }
    }
}

/// Blue through cyan, green and yellow up to red, in degrees Celsius
fn default_heat_map() -> Vec<HeatColor> {
    vec![
        HeatColor {
            temperature: -10.0,
            color: Rgb { r: 0, g: 0, b: 5 },
        },
        HeatColor {
            temperature: 0.0,
            color: Rgb { r: 0, g: 5, b: 5 },
        },
        HeatColor {
            temperature: 10.0,
            color: Rgb { r: 0, g: 5, b: 0 },
        },
        HeatColor {
            temperature: 20.0,
            color: Rgb { r: 5, g: 5, b: 0 },
        },
        HeatColor {
            temperature: 30.0,
            color: Rgb { r: 5, g: 0, b: 0 },
        },
    ]
}

impl Config {
    /// Single-letter temperature unit for the chart's sidebar labels.
    pub fn temp_unit(&self) -> &'static str {
        match self.unit_format.as_str() {
            "us" => "F",
            _ => "C",
        }
    }

    /// Select a saved location by shortcut, or the default one.
    pub fn location(&self, shortcut: Option<&str>) -> Result<&Location> {
        match shortcut {
            Some(s) => self
                .locations
                .iter()
                .find(|l| l.shortcut == s)
                .ok_or_else(|| SkycastError::Config(format!("no saved location '{}'", s))),
            None => self.locations.get(self.default_location).ok_or_else(|| {
                SkycastError::Config(
                    "no saved locations; add one with `skycast add <place>`".to_string(),
                )
            }),
        }
    }
}

/// Loads and saves the config file
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Service over the default path (`<config dir>/skycast/config.json`).
    pub fn new() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "skycast")
            .ok_or_else(|| SkycastError::Config("failed to locate config directory".into()))?;
        Ok(Self {
            path: dirs.config_dir().join("config.json"),
        })
    }

    /// Service over a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the config, creating a default file on first run.
    ///
    /// A freshly created default and an unset API key are both configuration
    /// errors: the chart cannot be fetched until the user edits the file.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            self.save(&Config::default())?;
            return Err(SkycastError::Config(format!(
                "created default config at {}; set api_key and add a location",
                self.path.display()
            )));
        }

        let config = self.read()?;
        if config.api_key.is_empty() {
            return Err(SkycastError::Config(format!(
                "api_key is not set in {}",
                self.path.display()
            )));
        }
        Ok(config)
    }

    /// Load without requiring an API key, falling back to the default config.
    /// Used by location management, which works before the key is set.
    pub fn load_or_default(&self) -> Result<Config> {
        if self.path.exists() {
            self.read()
        } else {
            Ok(Config::default())
        }
    }

    fn read(&self) -> Result<Config> {
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content)
            .map_err(|e| SkycastError::Config(format!("invalid config file: {}", e)))
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(config)
            .map_err(|e| SkycastError::Config(format!("serialization failed: {}", e)))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
