//! Application state for the timecard engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, TimecardLayout};

/// Shared application state.
///
/// Holds the timecard layout used to read uploaded CSV timecards.
#[derive(Clone)]
pub struct AppState {
    layout: Arc<TimecardLayout>,
}

impl AppState {
    /// Creates a new application state from a configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            layout: Arc::new(config.into_layout()),
        }
    }

    /// Returns the timecard layout.
    pub fn layout(&self) -> &TimecardLayout {
        &self.layout
    }
}
