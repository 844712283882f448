//! Consecutive working days and consecutive nights.
//!
//! A run is a stretch of calendar dates with no gap. A violation is dated
//! on the day the run first passes a limit and is raised once per run;
//! the earlier days of the run are listed as related dates.

use chrono::NaiveDate;

use crate::config::ComplianceLimits;
use crate::models::{ComplianceViolation, Severity, ViolationType};
use crate::resolution::ResolvedShift;

/// Splits sorted dates into runs of consecutive calendar days.
/// Duplicate dates count once.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use fatigue_engine::compliance::consecutive_runs;
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
/// let runs = consecutive_runs([d(1), d(2), d(2), d(3), d(5)]);
/// assert_eq!(runs, vec![vec![d(1), d(2), d(3)], vec![d(5)]]);
/// ```
pub fn consecutive_runs<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Vec<Vec<NaiveDate>> {
    let mut runs: Vec<Vec<NaiveDate>> = Vec::new();

    for date in dates {
        let previous = runs.last().and_then(|run| run.last()).copied();
        match previous {
            Some(prev) if prev == date => {}
            Some(prev) if prev.succ_opt() == Some(date) => {
                if let Some(run) = runs.last_mut() {
                    run.push(date);
                }
            }
            _ => runs.push(vec![date]),
        }
    }

    runs
}

/// Raises one violation for each run longer than `limit`.
fn check_runs(
    runs: &[Vec<NaiveDate>],
    limit: u32,
    employee_id: &str,
    violation_type: ViolationType,
    severity: Severity,
    describe: impl Fn(usize) -> String,
) -> Vec<ComplianceViolation> {
    let limit = limit as usize;

    runs.iter()
        .filter(|run| run.len() > limit)
        .map(|run| {
            ComplianceViolation::new(
                violation_type,
                severity,
                employee_id,
                run[limit],
                describe(run.len()),
            )
            .with_related_dates(run[..limit].to_vec())
        })
        .collect()
}

/// Flags runs of working days longer than `max_consecutive_days`.
pub fn check_consecutive_days(
    employee_id: &str,
    shifts: &[ResolvedShift],
    limits: &ComplianceLimits,
) -> Vec<ComplianceViolation> {
    let runs = consecutive_runs(shifts.iter().map(|s| s.date));
    check_runs(
        &runs,
        limits.max_consecutive_days,
        employee_id,
        ViolationType::MaxConsecutiveDays,
        Severity::Breach,
        |len| {
            format!(
                "Day {} of {} consecutive working days exceeds the {} day maximum",
                limits.max_consecutive_days + 1,
                len,
                limits.max_consecutive_days
            )
        },
    )
}

/// Flags runs of nights past the warning threshold and past the maximum.
pub fn check_consecutive_nights(
    employee_id: &str,
    shifts: &[ResolvedShift],
    limits: &ComplianceLimits,
) -> Vec<ComplianceViolation> {
    let runs = consecutive_runs(shifts.iter().filter(|s| s.is_night).map(|s| s.date));

    let mut violations = check_runs(
        &runs,
        limits.consecutive_nights_warning,
        employee_id,
        ViolationType::ConsecutiveNightsWarning,
        Severity::Warning,
        |len| {
            format!(
                "{} consecutive night shifts is beyond the recommended {}",
                len, limits.consecutive_nights_warning
            )
        },
    );
    violations.extend(check_runs(
        &runs,
        limits.max_consecutive_nights,
        employee_id,
        ViolationType::MaxConsecutiveNights,
        Severity::Level2,
        |len| {
            format!(
                "{} consecutive night shifts exceeds the {} night maximum",
                len, limits.max_consecutive_nights
            )
        },
    ));
    violations
}
