//! Finding models for the timecard engine.
//!
//! A [`Finding`] is one anomaly reported by a detector. An
//! [`AnalysisReport`] collects the findings of a full analysis pass along with
//! any detector that had to be abandoned.

use serde::{Deserialize, Serialize};

/// The kind of anomaly a finding reports.
///
/// # Example
///
/// ```
/// use timecard_engine::models::FindingKind;
///
/// assert_eq!(FindingKind::ShiftGap.to_string(), "shift_gap");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// The employee worked seven consecutive days.
    ConsecutiveDays,
    /// Less than 10 but more than 1 hour between two shifts.
    ShiftGap,
    /// A single shift of more than 14 hours.
    LongShift,
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingKind::ConsecutiveDays => write!(f, "consecutive_days"),
            FindingKind::ShiftGap => write!(f, "shift_gap"),
            FindingKind::LongShift => write!(f, "long_shift"),
        }
    }
}

/// Which adjacency policy made a seven-day window count as consecutive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsecutivePolicy {
    /// Every shift starts exactly one day after the previous shift ended.
    StrictCalendar,
    /// Shifts follow on the next calendar day, or skip only weekend days.
    WorkingDay,
}

/// One anomaly detected in a shift sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// The kind of anomaly.
    pub kind: FindingKind,
    /// Index of the record the finding is attributed to.
    pub subject_index: usize,
    /// Name of the employee on that record.
    pub employee_name: String,
    /// Human-readable description.
    pub message: String,
    /// The policy that matched, for consecutive-day findings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<ConsecutivePolicy>,
    /// The whole-hour measurement that tripped the rule, for gap and
    /// long-shift findings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_hours: Option<i64>,
}

impl Finding {
    /// Creates a consecutive-days finding.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_engine::models::{ConsecutivePolicy, Finding, FindingKind};
    ///
    /// let finding = Finding::consecutive_days(0, "Jane Doe", ConsecutivePolicy::WorkingDay);
    /// assert_eq!(finding.kind, FindingKind::ConsecutiveDays);
    /// assert_eq!(finding.message, "Employee Jane Doe worked for 7 consecutive days.");
    /// ```
    pub fn consecutive_days(
        subject_index: usize,
        employee_name: &str,
        policy: ConsecutivePolicy,
    ) -> Self {
        Self {
            kind: FindingKind::ConsecutiveDays,
            subject_index,
            employee_name: employee_name.to_string(),
            message: format!("Employee {} worked for 7 consecutive days.", employee_name),
            policy: Some(policy),
            observed_hours: None,
        }
    }

    /// Creates a shift-gap finding.
    pub fn shift_gap(subject_index: usize, employee_name: &str, gap_hours: i64) -> Self {
        Self {
            kind: FindingKind::ShiftGap,
            subject_index,
            employee_name: employee_name.to_string(),
            message: format!(
                "Employee {} has less than 10 hours between shifts but greater than 1 hour.",
                employee_name
            ),
            policy: None,
            observed_hours: Some(gap_hours),
        }
    }

    /// Creates a long-shift finding.
    pub fn long_shift(subject_index: usize, employee_name: &str, shift_hours: i64) -> Self {
        Self {
            kind: FindingKind::LongShift,
            subject_index,
            employee_name: employee_name.to_string(),
            message: format!(
                "Employee {} worked for more than 14 hours in a single shift.",
                employee_name
            ),
            policy: None,
            observed_hours: Some(shift_hours),
        }
    }
}

/// A detector pass that was abandoned because of an error.
///
/// The failing detector contributes no findings to the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorFailure {
    /// The detector that failed, named by the kind of finding it produces.
    pub detector: FindingKind,
    /// The error that stopped it.
    pub message: String,
}

/// The result of running every detector over one shift sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Findings in detector order, ascending index within each detector.
    pub findings: Vec<Finding>,
    /// Detectors that could not complete.
    #[serde(default)]
    pub failures: Vec<DetectorFailure>,
}

impl AnalysisReport {
    /// Returns the findings of one kind.
    pub fn findings_of(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.kind == kind)
    }

    /// Returns true if every detector completed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
