//! Long-shift detection.

use tracing::debug;

use crate::error::EngineResult;
use crate::models::{Finding, ShiftRecord};

use super::interval::hours_between;

/// Shifts must run strictly longer than this many whole hours to be flagged.
pub const LONG_SHIFT_HOURS: i64 = 14;

/// Detects single shifts longer than [`LONG_SHIFT_HOURS`] whole hours.
///
/// Durations are truncated, so 14h59m is not flagged. Records are checked
/// independently of one another.
///
/// # Example
///
/// ```
/// use timecard_engine::analysis::detect_long_shifts;
/// use timecard_engine::models::ShiftRecord;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let shifts = vec![ShiftRecord::new(
///     "Jane Doe",
///     "Nurse",
///     at("2026-01-12 06:00"),
///     at("2026-01-12 21:00"),
/// )];
///
/// let findings = detect_long_shifts(&shifts).unwrap();
/// assert_eq!(findings[0].observed_hours, Some(15));
/// ```
pub fn detect_long_shifts(shifts: &[ShiftRecord]) -> EngineResult<Vec<Finding>> {
    let findings = shifts
        .iter()
        .enumerate()
        .filter_map(|(index, shift)| {
            let shift_hours = hours_between(shift.start, shift.end);
            (shift_hours > LONG_SHIFT_HOURS).then(|| {
                debug!(
                    subject_index = index,
                    employee = %shift.name,
                    shift_hours,
                    "Long shift"
                );
                Finding::long_shift(index, &shift.name, shift_hours)
            })
        })
        .collect();

    Ok(findings)
}
