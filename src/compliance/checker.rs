//! Runs every compliance rule over one employee's history.

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::fatigue::evaluate_with;
use crate::models::{Assignment, ComplianceResult, ShiftPattern};
use crate::resolution::{resolve_assignments, to_shift_definitions};

use super::consecutive::{check_consecutive_days, check_consecutive_nights};
use super::fatigue_index::check_fatigue_scores;
use super::rest_period::check_rest_periods;
use super::same_day::check_same_day;
use super::shift_length::{check_duty_with_commute, check_shift_length};
use super::weekly_hours::check_weekly_hours;

/// Checks an employee's whole assignment history.
///
/// Only assignments for `employee_id` are considered. The full history is
/// scanned so rolling windows and runs see past any display period. The
/// fatigue evaluator runs over the same resolved shifts to drive the
/// elevated-index rules.
///
/// # Errors
///
/// Returns an error if a resolved time does not parse or a workload or
/// attention rating is outside 1–4.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use fatigue_engine::compliance::check_compliance;
/// use fatigue_engine::config::EngineConfig;
/// use fatigue_engine::models::{Assignment, ShiftPattern, ViolationType};
///
/// let patterns = vec![ShiftPattern::new("long", "Long day", "06:00", "19:00", false)];
/// let assignments = vec![Assignment::new(
///     "a1",
///     "emp_001",
///     "long",
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
/// )];
///
/// let result = check_compliance("emp_001", &assignments, &patterns, &EngineConfig::default()).unwrap();
/// assert!(result.has_errors);
/// assert_eq!(result.of_type(ViolationType::MaxShiftLength).len(), 1);
/// ```
pub fn check_compliance(
    employee_id: &str,
    assignments: &[Assignment],
    patterns: &[ShiftPattern],
    config: &EngineConfig,
) -> EngineResult<ComplianceResult> {
    let shifts = resolve_assignments(employee_id, assignments, patterns, &config.defaults)?;
    let fatigue = evaluate_with(&to_shift_definitions(&shifts), &config.defaults)?;
    let limits = &config.limits;

    let mut violations = check_shift_length(employee_id, &shifts, limits);
    violations.extend(check_duty_with_commute(employee_id, &shifts, limits));
    violations.extend(check_rest_periods(employee_id, &shifts, limits));
    violations.extend(check_weekly_hours(employee_id, &shifts, limits));
    violations.extend(check_consecutive_days(employee_id, &shifts, limits));
    violations.extend(check_consecutive_nights(employee_id, &shifts, limits));
    violations.extend(check_same_day(employee_id, &shifts));
    violations.extend(check_fatigue_scores(
        employee_id,
        &shifts,
        &fatigue,
        &config.thresholds,
    ));

    debug!(
        employee_id,
        assignments = shifts.len(),
        violations = violations.len(),
        "Compliance check complete"
    );

    Ok(ComplianceResult::from_violations(violations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::test_support::date;
    use crate::error::EngineError;
    use crate::models::{Severity, ViolationType};
    use rust_decimal::Decimal;

    fn pattern(id: &str, start: &str, end: &str, is_night: bool) -> ShiftPattern {
        ShiftPattern::new(id, id, start, end, is_night)
    }

    fn assign(id: &str, employee: &str, pattern: &str, day: &str) -> Assignment {
        Assignment::new(id, employee, pattern, date(day))
    }

    #[test]
    fn test_empty_history_is_clean() {
        let result = check_compliance("emp_001", &[], &[], &EngineConfig::default()).unwrap();
        assert!(result.violations.is_empty());
        assert!(!result.has_errors);
        assert!(!result.has_warnings);
    }

    #[test]
    fn test_other_employees_are_ignored() {
        let patterns = vec![pattern("long", "06:00", "20:00", false)];
        let assignments = vec![assign("a1", "emp_002", "long", "2024-01-10")];

        let result =
            check_compliance("emp_001", &assignments, &patterns, &EngineConfig::default()).unwrap();
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_insufficient_rest_with_raised_minimum() {
        let patterns = vec![pattern("day", "08:00", "20:00", false)];
        let assignments = vec![
            assign("a2", "emp_001", "day", "2024-01-11"),
            assign("a1", "emp_001", "day", "2024-01-10"),
        ];
        let mut config = EngineConfig::default();

        let relaxed = check_compliance("emp_001", &assignments, &patterns, &config).unwrap();
        assert!(relaxed.of_type(ViolationType::InsufficientRest).is_empty());

        config.limits.min_rest_hours = Decimal::from(13);
        let strict = check_compliance("emp_001", &assignments, &patterns, &config).unwrap();
        let rest = strict.of_type(ViolationType::InsufficientRest);
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].date, date("2024-01-11"));
        assert!(
            strict
                .violations
                .iter()
                .filter(|v| v.violation_type == ViolationType::InsufficientRest)
                .all(|v| v.date != date("2024-01-10"))
        );
    }

    #[test]
    fn test_missing_pattern_uses_default_times() {
        let assignments = vec![assign("a1", "emp_001", "missing", "2024-01-10")];
        let result =
            check_compliance("emp_001", &assignments, &[], &EngineConfig::default()).unwrap();
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_night_thresholds_apply_to_night_patterns() {
        // A lone 19:00-07:00 shift scores an FGI of about 36.4.
        let assignments = vec![assign("a1", "emp_001", "n", "2024-01-10")];
        let config = EngineConfig::default();

        let as_night = check_compliance(
            "emp_001",
            &assignments,
            &[pattern("n", "19:00", "07:00", true)],
            &config,
        )
        .unwrap();
        assert!(as_night.of_type(ViolationType::ElevatedFatigueIndex).is_empty());

        let as_day = check_compliance(
            "emp_001",
            &assignments,
            &[pattern("n", "19:00", "07:00", false)],
            &config,
        )
        .unwrap();
        let elevated = as_day.of_type(ViolationType::ElevatedFatigueIndex);
        assert_eq!(elevated.len(), 1);
        assert_eq!(elevated[0].severity, Severity::Level2);
    }

    #[test]
    fn test_night_run_scores_and_counts() {
        let patterns = vec![pattern("n", "19:00", "07:00", true)];
        let assignments: Vec<_> = (1..=5)
            .map(|d| assign(&format!("a{d}"), "emp_001", "n", &format!("2024-01-{d:02}")))
            .collect();

        let result =
            check_compliance("emp_001", &assignments, &patterns, &EngineConfig::default()).unwrap();

        assert_eq!(result.of_type(ViolationType::ConsecutiveNightsWarning).len(), 1);
        assert_eq!(result.of_type(ViolationType::ApproachingWeeklyLimit).len(), 1);
        assert!(!result.of_type(ViolationType::ElevatedFatigueIndex).is_empty());
        assert!(!result.of_type(ViolationType::ElevatedRiskIndex).is_empty());
        assert!(result.has_errors);
        assert!(result.has_warnings);
        assert_eq!(
            result.error_count + result.warning_count,
            result
                .violations
                .iter()
                .filter(|v| v.severity != Severity::Info)
                .count()
        );
    }

    #[test]
    fn test_extreme_commute_overrides_are_reported() {
        let patterns = vec![pattern("day", "08:00", "16:00", false)];
        let mut a = assign("a1", "emp_001", "day", "2024-01-10");
        a.commute_in = Some(u32::MAX);
        a.commute_out = Some(1);

        let result = check_compliance("emp_001", &[a], &patterns, &EngineConfig::default()).unwrap();
        assert_eq!(result.of_type(ViolationType::LongDutyWithCommute).len(), 1);
    }

    #[test]
    fn test_last_representable_date_is_an_error() {
        let patterns = vec![pattern("n", "22:00", "06:00", true)];
        let assignments = vec![Assignment::new("a1", "emp_001", "n", chrono::NaiveDate::MAX)];

        let err = check_compliance("emp_001", &assignments, &patterns, &EngineConfig::default());
        assert!(matches!(err, Err(EngineError::InvalidParameter { .. })));
    }

    #[test]
    fn test_invalid_rating_is_an_error() {
        let mut p = pattern("day", "08:00", "16:00", false);
        p.workload = Some(7);
        let assignments = vec![assign("a1", "emp_001", "day", "2024-01-10")];

        let err = check_compliance("emp_001", &assignments, &[p], &EngineConfig::default());
        assert!(matches!(err, Err(EngineError::InvalidParameter { .. })));
    }
}
