use clap::{Parser, Subcommand};

use crate::render::ChartRenderer;
use crate::services::{geocode, ConfigService, ForecastService};
use crate::types::{Result, SkycastError};

/// Smallest terminal the chart stays readable in
const MIN_COLS: u16 = 80;
const MIN_ROWS: u16 = 24;

/// Hourly weather forecast as a colored ANSI chart
#[derive(Parser)]
#[command(name = "skycast")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the forecast chart (default)
    Show {
        /// Shortcut of a saved location (defaults to the configured one)
        location: Option<String>,
    },

    /// Resolve a place name and save it as a location
    Add {
        /// Place name to look up, e.g. "Darmstadt"
        place: String,

        /// Make the new location the default
        #[arg(long)]
        default: bool,
    },

    /// List saved locations
    Locations,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            None => show(None)?,
            Some(Commands::Show { location }) => show(location.as_deref())?,
            Some(Commands::Add { place, default }) => add(&place, default)?,
            Some(Commands::Locations) => list_locations()?,
        }
        Ok(())
    }
}

/// Fetch the forecast for the selected location and print the chart.
fn show(shortcut: Option<&str>) -> Result<()> {
    let config = ConfigService::new()?.load()?;
    let location = config.location(shortcut)?;

    let (cols, rows) = crossterm::terminal::size()?;
    if cols < MIN_COLS || rows < MIN_ROWS {
        return Err(SkycastError::Terminal(format!(
            "terminal must be at least {}x{} characters, got {}x{}",
            MIN_COLS, MIN_ROWS, cols, rows
        )));
    }

    let forecast = ForecastService::new()?.fetch(
        &config.api_key,
        location,
        &config.unit_format,
        &config.language,
    )?;
    let samples = forecast.hourly_samples();

    // the API resolves "auto" to a concrete unit system
    let temp_unit = match forecast.flags.units.as_str() {
        "us" => "F",
        "si" | "uk" | "ca" => "C",
        _ => config.temp_unit(),
    };

    // keep one column free so styled lines never wrap
    let renderer = ChartRenderer::new(&config.heat_map, temp_unit, cols as usize - 1);
    let chart = renderer.render(&samples)?;

    println!("Weather for: {} [#{}]", location.city, location.shortcut);
    print!("{}", chart);
    Ok(())
}

/// Geocode a place and append it to the saved locations.
fn add(place: &str, make_default: bool) -> Result<()> {
    let service = ConfigService::new()?;
    let mut config = service.load_or_default()?;

    if config.locations.iter().any(|l| l.shortcut == place) {
        return Err(SkycastError::Config(format!(
            "location '{}' is already saved",
            place
        )));
    }

    let location = geocode(place)?;
    println!("Saved location: {} [#{}]", location.city, location.shortcut);

    config.locations.push(location);
    if make_default {
        config.default_location = config.locations.len() - 1;
    }
    service.save(&config)
}

fn list_locations() -> Result<()> {
    let config = ConfigService::new()?.load_or_default()?;
    if config.locations.is_empty() {
        println!("No saved locations; add one with `skycast add <place>`");
        return Ok(());
    }

    for (i, location) in config.locations.iter().enumerate() {
        let marker = if i == config.default_location { '*' } else { ' ' };
        println!(
            "{} {:<12} {} ({:.4}, {:.4})",
            marker, location.shortcut, location.city, location.latitude, location.longitude
        );
    }
    Ok(())
}
