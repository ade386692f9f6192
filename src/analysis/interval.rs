//! Interval arithmetic over shift timestamps.
//!
//! All differences are truncated toward zero, so a gap of 1h59m counts as
//! one hour. Calendar stepping is checked: helpers return `None` instead of
//! panicking when a step would leave chrono's representable range.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Weekday};

/// Returns the whole hours from `a` to `b`, truncated toward zero.
///
/// Negative when `b` is before `a`.
///
/// # Example
///
/// ```
/// use timecard_engine::analysis::hours_between;
/// use chrono::NaiveDateTime;
///
/// let a = NaiveDateTime::parse_from_str("2026-01-12 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let b = NaiveDateTime::parse_from_str("2026-01-12 18:59:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(hours_between(a, b), 1);
/// assert_eq!(hours_between(b, a), -1);
/// ```
pub fn hours_between(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    b.signed_duration_since(a).num_hours()
}

/// Returns the whole days from `a` to `b`, truncated toward zero.
pub fn days_between(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    b.signed_duration_since(a).num_days()
}

/// Returns the number of calendar dates from the date of `a` to the date of
/// `b`, ignoring time of day.
///
/// Monday 17:00 to Tuesday 09:00 is one calendar day even though fewer than
/// 24 hours elapse.
pub fn calendar_days_between(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    days_between(start_of_day(a), start_of_day(b))
}

/// Returns true if the timestamp falls on a Saturday or Sunday.
///
/// # Example
///
/// ```
/// use timecard_engine::analysis::is_weekend_day;
/// use chrono::NaiveDateTime;
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDateTime::parse_from_str("2026-01-17 23:59:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(is_weekend_day(saturday));
/// ```
pub fn is_weekend_day(timestamp: NaiveDateTime) -> bool {
    matches!(timestamp.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Adds whole days to a timestamp, keeping the time of day.
///
/// Returns `None` if the result is outside the supported calendar.
pub fn add_days(timestamp: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    timestamp.checked_add_signed(Duration::try_days(days)?)
}

/// Counts the weekend days among the `day_count + 1` calendar days starting
/// at `start` (inclusive).
///
/// Steps one day at a time. A negative `day_count` counts nothing. Returns
/// `None` if stepping leaves the supported calendar.
///
/// # Example
///
/// ```
/// use timecard_engine::analysis::count_weekend_days;
/// use chrono::NaiveDateTime;
///
/// // Friday 2026-01-16 plus three more days: Fri, Sat, Sun, Mon
/// let friday = NaiveDateTime::parse_from_str("2026-01-16 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(count_weekend_days(friday, 3), Some(2));
/// ```
pub fn count_weekend_days(start: NaiveDateTime, day_count: i64) -> Option<i64> {
    let mut weekend_days = 0;
    let mut current = start;

    for offset in 0..=day_count {
        if offset > 0 {
            current = add_days(current, 1)?;
        }
        if is_weekend_day(current) {
            weekend_days += 1;
        }
    }

    Some(weekend_days)
}

/// Midnight at the start of the timestamp's date.
fn start_of_day(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp.date().and_time(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    #[test]
    fn test_hours_between_truncates() {
        let a = make_datetime("2026-01-12", "17:00:00");
        assert_eq!(hours_between(a, make_datetime("2026-01-12", "18:59:59")), 1);
        assert_eq!(hours_between(a, make_datetime("2026-01-12", "19:00:00")), 2);
        assert_eq!(hours_between(a, a), 0);
    }

    #[test]
    fn test_hours_between_negative_truncates_toward_zero() {
        let a = make_datetime("2026-01-12", "17:00:00");
        let b = make_datetime("2026-01-12", "15:30:00");
        assert_eq!(hours_between(a, b), -1);
    }

    #[test]
    fn test_days_between_truncates() {
        let a = make_datetime("2026-01-12", "17:00:00");
        assert_eq!(days_between(a, make_datetime("2026-01-13", "09:00:00")), 0);
        assert_eq!(days_between(a, make_datetime("2026-01-13", "17:00:00")), 1);
        assert_eq!(days_between(a, make_datetime("2026-01-15", "16:59:00")), 2);
        assert_eq!(days_between(a, make_datetime("2026-01-11", "09:00:00")), -1);
    }

    #[test]
    fn test_calendar_days_between_ignores_time_of_day() {
        // Monday evening to Tuesday morning
        let a = make_datetime("2026-01-12", "17:00:00");
        let b = make_datetime("2026-01-13", "09:00:00");
        assert_eq!(calendar_days_between(a, b), 1);

        // Friday evening to Monday morning
        let friday = make_datetime("2026-01-16", "17:00:00");
        let monday = make_datetime("2026-01-19", "09:00:00");
        assert_eq!(calendar_days_between(friday, monday), 3);
    }

    #[test]
    fn test_is_weekend_day() {
        // 2026-01-16 Friday, 17 Saturday, 18 Sunday, 19 Monday
        assert!(!is_weekend_day(make_datetime("2026-01-16", "23:59:59")));
        assert!(is_weekend_day(make_datetime("2026-01-17", "00:00:00")));
        assert!(is_weekend_day(make_datetime("2026-01-18", "12:00:00")));
        assert!(!is_weekend_day(make_datetime("2026-01-19", "00:00:00")));
    }

    #[test]
    fn test_count_weekend_days_inclusive_of_start() {
        let saturday = make_datetime("2026-01-17", "09:00:00");
        assert_eq!(count_weekend_days(saturday, 0), Some(1));
        assert_eq!(count_weekend_days(saturday, 1), Some(2));
        assert_eq!(count_weekend_days(saturday, 2), Some(2));
    }

    #[test]
    fn test_count_weekend_days_full_fortnight() {
        let monday = make_datetime("2026-01-12", "09:00:00");
        assert_eq!(count_weekend_days(monday, 13), Some(4));
    }

    #[test]
    fn test_count_weekend_days_negative_count_is_zero() {
        let saturday = make_datetime("2026-01-17", "09:00:00");
        assert_eq!(count_weekend_days(saturday, -1), Some(0));
        assert_eq!(count_weekend_days(saturday, -5), Some(0));
    }

    #[test]
    fn test_add_days_keeps_time_of_day() {
        let a = make_datetime("2026-01-31", "17:30:00");
        assert_eq!(add_days(a, 1), Some(make_datetime("2026-02-01", "17:30:00")));
    }

    #[test]
    fn test_add_days_overflow_is_none() {
        assert_eq!(add_days(NaiveDateTime::MAX, 1), None);
        assert_eq!(count_weekend_days(NaiveDateTime::MAX, 1), None);
    }
}
