//! Type definitions for skycast

mod error;
mod forecast;

pub use error::*;
pub use forecast::*;
