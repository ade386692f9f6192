//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a timecard
//! layout from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::TimecardLayout;

/// Loads and provides access to the timecard layout.
///
/// # File format
///
/// ```yaml
/// columns:
///   name: 7
///   position: 0
///   start: 2
///   end: 3
/// header_rows: 1
/// datetime_formats:
///   - "%m/%d/%Y %I:%M %p"
/// ```
///
/// # Example
///
/// ```no_run
/// use timecard_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/timecard.yaml").unwrap();
/// println!("Name column: {}", loader.layout().columns.name);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    layout: TimecardLayout,
}

impl ConfigLoader {
    /// Loads a layout from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - The layout lists no datetime formats
    /// - A column or the header row count lies outside a worksheet
    ///
    /// # Example
    ///
    /// ```no_run
    /// use timecard_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/timecard.yaml")?;
    /// # Ok::<(), timecard_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let layout = Self::load_yaml::<TimecardLayout>(path)?;

        layout.validate().map_err(|err| match err {
            EngineError::InvalidLayout { message } => EngineError::ConfigParseError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path.display(), ?layout, "Loaded timecard layout");
        Ok(Self { layout })
    }

    /// Loads the layout from `path` if given, otherwise uses the default.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> EngineResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded layout.
    pub fn layout(&self) -> &TimecardLayout {
        &self.layout
    }

    /// Consumes the loader, returning the layout.
    pub fn into_layout(self) -> TimecardLayout {
        self.layout
    }
}
