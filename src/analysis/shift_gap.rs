//! Shift-gap detection.
//!
//! Flags adjacent shifts separated by more than one but fewer than ten whole
//! hours. Both bounds are exclusive and the gap is truncated to whole hours
//! before comparing, so 1h59m is not flagged while 2h is.

use tracing::debug;

use crate::error::EngineResult;
use crate::models::{Finding, ShiftRecord};

use super::interval::hours_between;

/// Gaps must be strictly longer than this many whole hours.
pub const MIN_GAP_HOURS: i64 = 1;

/// Gaps must be strictly shorter than this many whole hours.
pub const MAX_GAP_HOURS: i64 = 10;

/// Detects short rest gaps between adjacent shifts.
///
/// Each pair `(i, i + 1)` is measured from the end of shift `i` to the start
/// of shift `i + 1`; a finding is attributed to shift `i`.
///
/// # Example
///
/// ```
/// use timecard_engine::analysis::detect_shift_gaps;
/// use timecard_engine::models::ShiftRecord;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let shifts = vec![
///     ShiftRecord::new("Jane Doe", "Nurse", at("2026-01-12 06:00"), at("2026-01-12 14:00")),
///     ShiftRecord::new("Jane Doe", "Nurse", at("2026-01-12 19:00"), at("2026-01-12 23:00")),
/// ];
///
/// let findings = detect_shift_gaps(&shifts).unwrap();
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].observed_hours, Some(5));
/// ```
pub fn detect_shift_gaps(shifts: &[ShiftRecord]) -> EngineResult<Vec<Finding>> {
    let mut findings = Vec::new();

    for (index, pair) in shifts.windows(2).enumerate() {
        let gap_hours = hours_between(pair[0].end, pair[1].start);
        if is_short_gap(gap_hours) {
            debug!(
                subject_index = index,
                employee = %pair[0].name,
                gap_hours,
                "Short gap between shifts"
            );
            findings.push(Finding::shift_gap(index, &pair[0].name, gap_hours));
        }
    }

    Ok(findings)
}

/// Returns true if a whole-hour gap lies strictly between the bounds.
pub fn is_short_gap(gap_hours: i64) -> bool {
    gap_hours > MIN_GAP_HOURS && gap_hours < MAX_GAP_HOURS
}
