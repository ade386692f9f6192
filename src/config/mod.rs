//! Configuration loading for the timecard engine.
//!
//! The engine's detection thresholds are fixed; what can be configured is
//! how shift rows are read out of a timecard sheet: which columns hold which
//! field, how many header rows to skip and which datetime text formats to
//! accept.
//!
//! # Example
//!
//! ```no_run
//! use timecard_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/timecard.yaml").unwrap();
//! println!("Skipping {} header rows", config.layout().header_rows);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ColumnLayout, TimecardLayout, MAX_SHEET_COLUMN, MAX_SHEET_ROWS};
