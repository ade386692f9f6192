//! Core data models for the timecard engine.
//!
//! This module contains the shift records the engine reads and the findings
//! it produces.

mod finding;
mod shift_record;

pub use finding::{AnalysisReport, ConsecutivePolicy, DetectorFailure, Finding, FindingKind};
pub use shift_record::ShiftRecord;
