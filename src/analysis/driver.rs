//! Analysis driver.
//!
//! Runs every detector over one shift sequence and collects their findings
//! into an [`AnalysisReport`]. Detectors run in a fixed order (consecutive
//! days, shift gaps, long shifts) and each one is isolated: a detector that
//! fails contributes no findings and does not stop the others.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{AnalysisReport, DetectorFailure, Finding, FindingKind, ShiftRecord};

use super::consecutive_days::detect_consecutive_days;
use super::long_shift::detect_long_shifts;
use super::shift_gap::detect_shift_gaps;

type Detector = fn(&[ShiftRecord]) -> EngineResult<Vec<Finding>>;

/// The detectors in reporting order.
const DETECTORS: [(FindingKind, Detector); 3] = [
    (FindingKind::ConsecutiveDays, detect_consecutive_days),
    (FindingKind::ShiftGap, detect_shift_gaps),
    (FindingKind::LongShift, detect_long_shifts),
];

/// How records are paired up before detection.
///
/// # Example
///
/// ```
/// use timecard_engine::analysis::AnalysisMode;
///
/// assert_eq!(AnalysisMode::default(), AnalysisMode::Sequential);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    /// Adjacent records are treated as the same employee's consecutive
    /// shifts, whatever their names.
    #[default]
    Sequential,
    /// Records are split per employee name (keeping their relative order)
    /// and each employee's shifts are analysed on their own.
    ByEmployee,
}

/// Runs every detector in the given mode.
pub fn analyze(shifts: &[ShiftRecord], mode: AnalysisMode) -> AnalysisReport {
    match mode {
        AnalysisMode::Sequential => analyze_shifts(shifts),
        AnalysisMode::ByEmployee => analyze_by_employee(shifts),
    }
}

/// Runs every detector over the sequence as given.
///
/// Findings are concatenated in detector order and keep each detector's
/// ascending index order. The result depends only on the input.
///
/// # Example
///
/// ```
/// use timecard_engine::analysis::analyze_shifts;
/// use timecard_engine::models::{FindingKind, ShiftRecord};
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let shifts = vec![
///     ShiftRecord::new("Jane Doe", "Nurse", at("2026-01-12 06:00"), at("2026-01-12 21:00")),
///     ShiftRecord::new("Jane Doe", "Nurse", at("2026-01-13 01:00"), at("2026-01-13 05:00")),
/// ];
///
/// let report = analyze_shifts(&shifts);
/// let kinds: Vec<FindingKind> = report.findings.iter().map(|f| f.kind).collect();
/// assert_eq!(kinds, vec![FindingKind::ShiftGap, FindingKind::LongShift]);
/// ```
pub fn analyze_shifts(shifts: &[ShiftRecord]) -> AnalysisReport {
    let mut report = AnalysisReport::default();

    for (kind, detector) in DETECTORS {
        match detector(shifts) {
            Ok(findings) => report.findings.extend(findings),
            Err(err) => record_failure(&mut report, kind, err),
        }
    }

    log_summary(shifts.len(), &report, AnalysisMode::Sequential);
    report
}

/// Runs every detector separately over each employee's shifts.
///
/// Records are grouped by exact `name` match, keeping their relative order.
/// Finding indices refer to the input sequence, so output is still
/// detector order then ascending index.
pub fn analyze_by_employee(shifts: &[ShiftRecord]) -> AnalysisReport {
    let groups = group_by_employee(shifts);
    let mut report = AnalysisReport::default();

    for (kind, detector) in DETECTORS {
        match run_per_group(detector, &groups) {
            Ok(findings) => report.findings.extend(findings),
            Err(err) => record_failure(&mut report, kind, err),
        }
    }

    log_summary(shifts.len(), &report, AnalysisMode::ByEmployee);
    report
}

/// One employee's shifts together with their positions in the input.
struct EmployeeGroup {
    indices: Vec<usize>,
    shifts: Vec<ShiftRecord>,
}

fn group_by_employee(shifts: &[ShiftRecord]) -> Vec<EmployeeGroup> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<EmployeeGroup> = Vec::new();

    for (index, shift) in shifts.iter().enumerate() {
        let slot = *positions.entry(shift.name.as_str()).or_insert_with(|| {
            groups.push(EmployeeGroup {
                indices: Vec::new(),
                shifts: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].indices.push(index);
        groups[slot].shifts.push(shift.clone());
    }

    groups
}

fn run_per_group(detector: Detector, groups: &[EmployeeGroup]) -> EngineResult<Vec<Finding>> {
    let mut findings = Vec::new();

    for group in groups {
        let group_findings = detector(&group.shifts).map_err(|err| match err {
            EngineError::InvalidInterval { index, message } => EngineError::InvalidInterval {
                index: group.indices[index],
                message,
            },
            other => other,
        })?;

        findings.extend(group_findings.into_iter().map(|mut finding| {
            finding.subject_index = group.indices[finding.subject_index];
            finding
        }));
    }

    findings.sort_by_key(|finding| finding.subject_index);
    Ok(findings)
}

fn record_failure(report: &mut AnalysisReport, detector: FindingKind, err: EngineError) {
    warn!(%detector, error = %err, "Detector abandoned");
    report.failures.push(DetectorFailure {
        detector,
        message: err.to_string(),
    });
}

fn log_summary(shifts_count: usize, report: &AnalysisReport, mode: AnalysisMode) {
    info!(
        shifts_count,
        ?mode,
        findings_count = report.findings.len(),
        failures_count = report.failures.len(),
        "Analysis completed"
    );
}
