//! Shift record model.
//!
//! A [`ShiftRecord`] is one worked shift as read from a timecard row.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Represents one worked shift for an employee.
///
/// Records are produced by the timecard adapter and only borrowed by the
/// analysis engine. `start <= end` is expected but not checked; a reversed
/// record yields negative durations that simply fail every threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The employee's name, used to attribute findings.
    pub name: String,
    /// The employee's position or role.
    pub position: String,
    /// When the shift started.
    pub start: NaiveDateTime,
    /// When the shift ended.
    pub end: NaiveDateTime,
}

impl ShiftRecord {
    /// Creates a new shift record.
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            start,
            end,
        }
    }

    /// Returns the whole hours worked in the shift, truncated.
    ///
    /// # Examples
    ///
    /// ```
    /// use timecard_engine::models::ShiftRecord;
    /// use chrono::NaiveDateTime;
    ///
    /// let shift = ShiftRecord::new(
    ///     "Jane Doe",
    ///     "Nurse",
    ///     NaiveDateTime::parse_from_str("2026-01-12 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     NaiveDateTime::parse_from_str("2026-01-12 17:45:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    /// );
    /// assert_eq!(shift.duration_hours(), 8);
    /// ```
    pub fn duration_hours(&self) -> i64 {
        (self.end - self.start).num_hours()
    }
}
