//! Error types for the timecard engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the engine, the timecard adapter and the
//! layout configuration can raise.

use thiserror::Error;

/// The main error type for the timecard engine.
///
/// # Example
///
/// ```
/// use timecard_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/timecard.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/timecard.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The timecard layout cannot address a worksheet.
    #[error("Invalid timecard layout: {message}")]
    InvalidLayout {
        /// A description of the offending setting.
        message: String,
    },

    /// Date arithmetic on a shift left the representable calendar range.
    #[error("Invalid interval at shift {index}: {message}")]
    InvalidInterval {
        /// Index of the offending record in the analysed sequence.
        index: usize,
        /// A description of what went wrong.
        message: String,
    },

    /// A timecard row held a value that could not be converted.
    #[error("Invalid record at row {row}, field '{field}': {message}")]
    InvalidRecord {
        /// One-based row number in the source sheet.
        row: usize,
        /// The field that failed to convert.
        field: String,
        /// A description of the conversion failure.
        message: String,
    },

    /// The timecard file could not be opened or read.
    #[error("Failed to read timecard '{path}': {message}")]
    TimecardRead {
        /// The path of the timecard.
        path: String,
        /// A description of the read failure.
        message: String,
    },

    /// The timecard file extension is not supported.
    #[error("Unsupported timecard format: '{extension}' (expected xlsx or csv)")]
    UnsupportedFormat {
        /// The extension that was rejected.
        extension: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
