//! Consecutive-day detection.
//!
//! Slides a seven-shift window over the sequence and reports every window in
//! which each shift follows the previous one on the next day. Two policies
//! decide what "next day" means:
//!
//! - strict calendar: the next shift starts exactly one day after the
//!   previous shift ended, to the minute;
//! - working day: the next shift starts on the following calendar date, or
//!   later only by skipped weekend days (Friday then Monday).
//!
//! Adjacent records are assumed to belong to the same employee; the finding
//! is attributed to the first record of the window.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{ConsecutivePolicy, Finding, ShiftRecord};

use super::interval::{add_days, calendar_days_between, count_weekend_days};

/// Number of shifts in one consecutive-day window.
pub const CONSECUTIVE_DAY_WINDOW: usize = 7;

/// Detects windows of seven consecutive working days.
///
/// Every window `[i, i + 6]` is evaluated independently, so overlapping
/// windows each produce a finding. Sequences shorter than the window produce
/// none.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInterval`] if stepping a shift's end by a
/// day leaves chrono's supported calendar.
///
/// # Example
///
/// ```
/// use timecard_engine::analysis::detect_consecutive_days;
/// use timecard_engine::models::ShiftRecord;
/// use chrono::{Duration, NaiveDateTime};
///
/// let first = NaiveDateTime::parse_from_str("2026-01-12 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let shifts: Vec<ShiftRecord> = (0..7)
///     .map(|day| {
///         let start = first + Duration::days(day);
///         ShiftRecord::new("Jane Doe", "Nurse", start, start + Duration::hours(8))
///     })
///     .collect();
///
/// let findings = detect_consecutive_days(&shifts).unwrap();
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].subject_index, 0);
/// ```
pub fn detect_consecutive_days(shifts: &[ShiftRecord]) -> EngineResult<Vec<Finding>> {
    if shifts.len() < CONSECUTIVE_DAY_WINDOW {
        return Ok(Vec::new());
    }

    let mut findings = Vec::new();

    for (offset, window) in shifts.windows(CONSECUTIVE_DAY_WINDOW).enumerate() {
        if let Some(policy) = window_policy(window, offset)? {
            debug!(
                subject_index = offset,
                employee = %window[0].name,
                ?policy,
                "Consecutive-day window detected"
            );
            findings.push(Finding::consecutive_days(offset, &window[0].name, policy));
        }
    }

    Ok(findings)
}

/// Returns the policy a window satisfies, preferring strict calendar.
///
/// `offset` is the index of the window's first record in the full sequence
/// and only used to locate errors.
pub fn window_policy(
    window: &[ShiftRecord],
    offset: usize,
) -> EngineResult<Option<ConsecutivePolicy>> {
    if is_strict_calendar_chain(window, offset)? {
        return Ok(Some(ConsecutivePolicy::StrictCalendar));
    }
    if is_working_day_chain(window, offset)? {
        return Ok(Some(ConsecutivePolicy::WorkingDay));
    }
    Ok(None)
}

/// Returns true if every shift starts exactly one day after the previous
/// shift ended.
pub fn is_strict_calendar_chain(window: &[ShiftRecord], offset: usize) -> EngineResult<bool> {
    for (j, pair) in window.windows(2).enumerate() {
        let next_day = add_days(pair[0].end, 1).ok_or_else(|| out_of_range(offset + j, pair[0].end))?;
        if next_day != pair[1].start {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Returns true if every shift starts on the calendar day after the previous
/// shift ended, allowing only weekend days to be skipped in between.
pub fn is_working_day_chain(window: &[ShiftRecord], offset: usize) -> EngineResult<bool> {
    for (j, pair) in window.windows(2).enumerate() {
        if !follows_on_working_day(pair[0].end, pair[1].start, offset + j)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn follows_on_working_day(
    previous_end: NaiveDateTime,
    next_start: NaiveDateTime,
    index: usize,
) -> EngineResult<bool> {
    let advance = calendar_days_between(previous_end, next_start);
    if advance < 2 {
        return Ok(advance == 1);
    }
    // At most a Saturday and a Sunday can lie in between
    if advance > 3 {
        return Ok(false);
    }

    // Weekend days strictly between the two dates
    let first_skipped =
        add_days(previous_end, 1).ok_or_else(|| out_of_range(index, previous_end))?;
    let skipped_weekend_days =
        count_weekend_days(first_skipped, advance - 2).ok_or_else(|| out_of_range(index, first_skipped))?;

    Ok(advance - skipped_weekend_days == 1)
}

fn out_of_range(index: usize, timestamp: NaiveDateTime) -> EngineError {
    EngineError::InvalidInterval {
        index,
        message: format!("stepping a day past {} leaves the supported calendar", timestamp),
    }
}
