//! HTTP API module for the timecard engine.
//!
//! This module provides the REST API endpoints for running the anomaly
//! detectors over shifts posted as JSON or as a CSV timecard export.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AnalyzeRequest, ShiftRequest, TimecardQuery};
pub use response::{AnalysisResponse, ApiError};
pub use state::AppState;
