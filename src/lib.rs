//! Crossing counter crate root: re-exports and module wiring.
//!
//! Loads a tab-separated recording, plots its three signal channels against
//! time, and counts upward threshold crossings of channel 1 over the most
//! recent window whenever a pointer button is released over the plot. The
//! threshold is the y position of a horizontal cursor that follows the pointer.
//!
//! - `data`: the table loader, crossing counting and curve styling
//! - `cursor`: the horizontal threshold cursor
//! - `app`: the eframe application and the [`run_counter`] entry point
//! - `config`: defaults and optional YAML overrides
//! - `error`: typed errors

pub mod app;
pub mod config;
pub mod cursor;
pub mod data;
pub mod error;

pub use app::{run_counter, CounterApp};
pub use config::CounterConfig;
pub use cursor::ThresholdCursor;
pub use data::crossings::{count_upward_crossings, recent_window, CrossingCounter, CrossingReport};
pub use data::table::Table;
pub use error::{ConfigError, CounterError, TableError};

pub use egui_plot::PlotPoint;
