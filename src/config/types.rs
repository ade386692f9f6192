//! Configuration types for timecard parsing.
//!
//! This module contains the strongly-typed layout structures that are
//! deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Highest zero-based column index an Excel worksheet can hold.
pub const MAX_SHEET_COLUMN: usize = 16_383;

/// Number of rows an Excel worksheet can hold.
pub const MAX_SHEET_ROWS: usize = 1_048_576;

/// Zero-based column positions of each shift field in a timecard sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Column holding the employee name.
    pub name: usize,
    /// Column holding the employee position.
    pub position: usize,
    /// Column holding the shift start timestamp.
    pub start: usize,
    /// Column holding the shift end timestamp.
    pub end: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            name: 7,
            position: 0,
            start: 2,
            end: 3,
        }
    }
}

/// Describes how to read shift records out of a timecard sheet.
///
/// Missing keys fall back to the layout of the standard timecard export.
///
/// # Example
///
/// ```
/// use timecard_engine::config::TimecardLayout;
///
/// let layout: TimecardLayout = serde_yaml::from_str("header_rows: 2").unwrap();
/// assert_eq!(layout.header_rows, 2);
/// assert_eq!(layout.columns.name, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimecardLayout {
    /// Column positions.
    pub columns: ColumnLayout,
    /// Number of leading rows to skip before shift rows start.
    pub header_rows: usize,
    /// `chrono` format strings tried in order for text timestamps.
    pub datetime_formats: Vec<String>,
}

impl Default for TimecardLayout {
    fn default() -> Self {
        Self {
            columns: ColumnLayout::default(),
            header_rows: 1,
            datetime_formats: vec![
                "%m/%d/%Y %I:%M %p".to_string(),
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%Y-%m-%d %H:%M".to_string(),
            ],
        }
    }
}

impl TimecardLayout {
    /// The highest column index the layout reads.
    pub fn max_column(&self) -> usize {
        let c = &self.columns;
        c.name.max(c.position).max(c.start).max(c.end)
    }

    /// Checks that the layout can address a worksheet.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidLayout`] if no datetime formats are
    /// listed, a column lies past the last worksheet column, or more header
    /// rows are skipped than a worksheet holds.
    pub fn validate(&self) -> EngineResult<()> {
        if self.datetime_formats.is_empty() {
            return Err(invalid("datetime_formats must list at least one format"));
        }
        if self.max_column() > MAX_SHEET_COLUMN {
            return Err(invalid(format!(
                "column {} is beyond the last sheet column {}",
                self.max_column(),
                MAX_SHEET_COLUMN
            )));
        }
        if self.header_rows > MAX_SHEET_ROWS {
            return Err(invalid(format!(
                "header_rows {} exceeds the sheet row limit {}",
                self.header_rows, MAX_SHEET_ROWS
            )));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidLayout {
        message: message.into(),
    }
}
