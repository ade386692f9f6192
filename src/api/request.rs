//! Request types for the timecard engine API.
//!
//! This module defines the JSON request structures for the `/analyze`
//! endpoint and the query parameters of `/analyze/timecard`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisMode;
use crate::models::ShiftRecord;

/// Request body for the `/analyze` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// The shifts to analyse, in the order they should be paired.
    pub shifts: Vec<ShiftRequest>,
    /// How records are paired up; defaults to sequential.
    #[serde(default)]
    pub mode: AnalysisMode,
}

/// Shift information in an analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// The employee's name.
    pub name: String,
    /// The employee's position.
    #[serde(default)]
    pub position: String,
    /// When the shift started.
    pub start: NaiveDateTime,
    /// When the shift ended.
    pub end: NaiveDateTime,
}

/// Query parameters for the `/analyze/timecard` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimecardQuery {
    /// How records are paired up; defaults to sequential.
    #[serde(default)]
    pub mode: AnalysisMode,
}

impl From<ShiftRequest> for ShiftRecord {
    fn from(req: ShiftRequest) -> Self {
        ShiftRecord {
            name: req.name,
            position: req.position,
            start: req.start,
            end: req.end,
        }
    }
}
