use thiserror::Error;

/// skycast error types
#[derive(Error, Debug)]
pub enum SkycastError {
    /// Canvas allocated with a zero-sized dimension
    #[error("invalid canvas dimensions: {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// Canvas write or read outside the allocated grid
    #[error("canvas coordinates out of bounds: row {row}, col {col}")]
    OutOfBounds { row: usize, col: usize },

    /// No hourly samples to plot
    #[error("forecast contains no hourly data")]
    EmptyForecast,

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// Forecast API returned an unusable response
    #[error("forecast error: {0}")]
    Forecast(String),

    /// Geocoding lookup failed
    #[error("geocoding error: {0}")]
    Geocode(String),

    /// Terminal is unusable for rendering
    #[error("terminal error: {0}")]
    Terminal(String),

    /// HTTP request failed
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for skycast
pub type Result<T> = std::result::Result<T, SkycastError>;
