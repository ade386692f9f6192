//! Scheduling anomaly detection for employee timecards.
//!
//! This crate reads shift records from timecard exports and flags three
//! kinds of anomaly: seven consecutive working days, short rest gaps
//! between shifts, and shifts longer than fourteen hours.
//!
//! The detectors live in [`analysis`] and work on plain
//! [`ShiftRecord`](models::ShiftRecord) sequences. [`timecard`] reads Excel
//! and CSV exports, [`api`] serves the detectors over HTTP.

#![warn(missing_docs)]

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod timecard;
