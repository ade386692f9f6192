//! Anomaly detection over ordered shift sequences.
//!
//! This module contains the interval arithmetic helpers, the three
//! detectors (seven consecutive days, short gaps between shifts, overly long
//! shifts) and the driver that runs them together. Every detector is a pure
//! function of a borrowed `&[ShiftRecord]`.

mod consecutive_days;
mod driver;
mod interval;
mod long_shift;
mod shift_gap;

pub use consecutive_days::{
    detect_consecutive_days, is_strict_calendar_chain, is_working_day_chain, window_policy,
    CONSECUTIVE_DAY_WINDOW,
};
pub use driver::{analyze, analyze_by_employee, analyze_shifts, AnalysisMode};
pub use interval::{
    add_days, calendar_days_between, count_weekend_days, days_between, hours_between,
    is_weekend_day,
};
pub use long_shift::{detect_long_shifts, LONG_SHIFT_HOURS};
pub use shift_gap::{detect_shift_gaps, is_short_gap, MAX_GAP_HOURS, MIN_GAP_HOURS};
