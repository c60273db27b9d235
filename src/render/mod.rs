//! ANSI chart rendering engine

pub mod canvas;
pub mod chart;
pub mod heat;
pub mod layout;

pub use canvas::Canvas;
pub use chart::ChartRenderer;
pub use heat::{color_for_temp, HeatColor, Rgb};
pub use layout::{bin_hours, ChartLayout, DayGroup, TemperatureScale};
