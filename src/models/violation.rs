//! Compliance violation models.
//!
//! This module contains the [`Severity`] tier system, the [`ViolationType`]
//! taxonomy, and the [`ComplianceResult`] returned by the rule checker.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Severity tier of a violation.
///
/// Tiers form a total order by [`Severity::priority`]:
/// `Breach > Level2 > Level1 > Warning > Info`.
///
/// # Example
///
/// ```
/// use fatigue_engine::models::Severity;
///
/// let worst = Severity::worst([Severity::Warning, Severity::Breach, Severity::Level1]);
/// assert_eq!(worst, Some(Severity::Breach));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A hard limit was broken.
    Breach,
    /// A level-2 exceedance; needs formal risk assessment.
    Level2,
    /// A level-1 exceedance; needs local sign-off.
    Level1,
    /// Outside good practice.
    Warning,
    /// Informational only.
    Info,
}

impl Severity {
    /// Numeric priority, higher is worse.
    pub fn priority(self) -> u8 {
        match self {
            Severity::Breach => 5,
            Severity::Level2 => 4,
            Severity::Level1 => 3,
            Severity::Warning => 2,
            Severity::Info => 1,
        }
    }

    /// Counted towards `error_count`.
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Breach | Severity::Level2)
    }

    /// Counted towards `warning_count`.
    pub fn is_warning(self) -> bool {
        matches!(self, Severity::Level1 | Severity::Warning)
    }

    /// Returns the highest-priority tier, or `None` for an empty input.
    pub fn worst<I: IntoIterator<Item = Severity>>(severities: I) -> Option<Severity> {
        severities.into_iter().max()
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Breach => "breach",
            Severity::Level2 => "level2",
            Severity::Level1 => "level1",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        f.write_str(label)
    }
}

/// The rule a violation was raised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationType {
    /// A single shift is longer than the maximum.
    MaxShiftLength,
    /// Shift plus commuting is longer than the door-to-door maximum.
    LongDutyWithCommute,
    /// Too little rest before a shift.
    InsufficientRest,
    /// A 7-day window is at or above the level-1 hours threshold.
    ApproachingWeeklyLimit,
    /// A 7-day window is above the maximum hours.
    MaxWeeklyHours,
    /// Too many consecutive working days.
    MaxConsecutiveDays,
    /// A run of nights is past good practice.
    ConsecutiveNightsWarning,
    /// Too many consecutive night shifts.
    MaxConsecutiveNights,
    /// Night and non-night shifts on the same date.
    DayNightTransition,
    /// More than one shift on the same date.
    MultipleShiftsSameDay,
    /// FGI above the level-2 threshold for the shift type.
    ElevatedFatigueIndex,
    /// FRI above the risk limit.
    ElevatedRiskIndex,
}

impl ViolationType {
    /// The wire name, e.g. `INSUFFICIENT_REST`.
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationType::MaxShiftLength => "MAX_SHIFT_LENGTH",
            ViolationType::LongDutyWithCommute => "LONG_DUTY_WITH_COMMUTE",
            ViolationType::InsufficientRest => "INSUFFICIENT_REST",
            ViolationType::ApproachingWeeklyLimit => "APPROACHING_WEEKLY_LIMIT",
            ViolationType::MaxWeeklyHours => "MAX_WEEKLY_HOURS",
            ViolationType::MaxConsecutiveDays => "MAX_CONSECUTIVE_DAYS",
            ViolationType::ConsecutiveNightsWarning => "CONSECUTIVE_NIGHTS_WARNING",
            ViolationType::MaxConsecutiveNights => "MAX_CONSECUTIVE_NIGHTS",
            ViolationType::DayNightTransition => "DAY_NIGHT_TRANSITION",
            ViolationType::MultipleShiftsSameDay => "MULTIPLE_SHIFTS_SAME_DAY",
            ViolationType::ElevatedFatigueIndex => "ELEVATED_FATIGUE_INDEX",
            ViolationType::ElevatedRiskIndex => "ELEVATED_RISK_INDEX",
        }
    }
}

impl fmt::Display for ViolationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule violation for one employee.
///
/// The violation applies to `date` only. `window_end` and `related_dates`
/// are context for highlighting, not additional violation dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceViolation {
    /// The rule that raised the violation.
    #[serde(rename = "type")]
    pub violation_type: ViolationType,
    /// Severity tier.
    pub severity: Severity,
    /// The employee the violation belongs to.
    pub employee_id: String,
    /// The date the violation is attributed to.
    pub date: NaiveDate,
    /// Human-readable description.
    pub message: String,
    /// Last date of the offending 7-day window, for weekly rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_end: Option<NaiveDate>,
    /// Other dates that contributed (window or run members).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_dates: Vec<NaiveDate>,
}

impl ComplianceViolation {
    /// Creates a violation with no window or related dates.
    pub fn new(
        violation_type: ViolationType,
        severity: Severity,
        employee_id: impl Into<String>,
        date: NaiveDate,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            severity,
            employee_id: employee_id.into(),
            date,
            message: message.into(),
            window_end: None,
            related_dates: Vec::new(),
        }
    }

    /// Sets the last date of the offending window.
    pub fn with_window_end(mut self, window_end: NaiveDate) -> Self {
        self.window_end = Some(window_end);
        self
    }

    /// Sets the context dates.
    pub fn with_related_dates(mut self, related_dates: Vec<NaiveDate>) -> Self {
        self.related_dates = related_dates;
        self
    }
}

/// The outcome of checking one employee's assignment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    /// Every violation found, unmerged.
    pub violations: Vec<ComplianceViolation>,
    /// Whether any `breach` or `level2` violation exists.
    pub has_errors: bool,
    /// Whether any `level1` or `warning` violation exists.
    pub has_warnings: bool,
    /// Number of `breach` and `level2` violations.
    pub error_count: usize,
    /// Number of `level1` and `warning` violations.
    pub warning_count: usize,
}

impl ComplianceResult {
    /// Builds the result and its summary counts from a list of violations.
    pub fn from_violations(violations: Vec<ComplianceViolation>) -> Self {
        let error_count = violations.iter().filter(|v| v.severity.is_error()).count();
        let warning_count = violations.iter().filter(|v| v.severity.is_warning()).count();

        Self {
            violations,
            has_errors: error_count > 0,
            has_warnings: warning_count > 0,
            error_count,
            warning_count,
        }
    }

    /// The highest severity present.
    pub fn worst_severity(&self) -> Option<Severity> {
        Severity::worst(self.violations.iter().map(|v| v.severity))
    }

    /// Violations of one type.
    pub fn of_type(&self, violation_type: ViolationType) -> Vec<&ComplianceViolation> {
        self.violations
            .iter()
            .filter(|v| v.violation_type == violation_type)
            .collect()
    }

    /// Violations in display order: by date, worst severity first.
    pub fn sorted_by_date(&self) -> Vec<ComplianceViolation> {
        let mut sorted = self.violations.clone();
        sorted.sort_by(|a, b| a.date.cmp(&b.date).then(b.severity.cmp(&a.severity)));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(
        violation_type: ViolationType,
        severity: Severity,
        date: &str,
    ) -> ComplianceViolation {
        ComplianceViolation {
            violation_type,
            severity,
            employee_id: "emp_001".to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            message: "test".to_string(),
            window_end: None,
            related_dates: vec![],
        }
    }

    #[test]
    fn test_severity_total_order() {
        let mut tiers = vec![
            Severity::Info,
            Severity::Breach,
            Severity::Warning,
            Severity::Level1,
            Severity::Level2,
        ];
        tiers.sort();
        assert_eq!(
            tiers,
            vec![
                Severity::Info,
                Severity::Warning,
                Severity::Level1,
                Severity::Level2,
                Severity::Breach,
            ]
        );
    }

    #[test]
    fn test_worst_of_empty_is_none() {
        assert_eq!(Severity::worst(Vec::new()), None);
    }

    #[test]
    fn test_severity_wire_names() {
        assert_eq!(serde_json::to_string(&Severity::Level2).unwrap(), "\"level2\"");
        assert_eq!(serde_json::to_string(&Severity::Breach).unwrap(), "\"breach\"");
        assert_eq!(Severity::Level1.to_string(), "level1");
    }

    #[test]
    fn test_violation_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&ViolationType::InsufficientRest).unwrap(),
            "\"INSUFFICIENT_REST\""
        );
        assert_eq!(
            serde_json::to_string(&ViolationType::ApproachingWeeklyLimit).unwrap(),
            "\"APPROACHING_WEEKLY_LIMIT\""
        );
        for t in [
            ViolationType::MaxShiftLength,
            ViolationType::LongDutyWithCommute,
            ViolationType::MaxWeeklyHours,
            ViolationType::MaxConsecutiveDays,
            ViolationType::ConsecutiveNightsWarning,
            ViolationType::MaxConsecutiveNights,
            ViolationType::DayNightTransition,
            ViolationType::MultipleShiftsSameDay,
            ViolationType::ElevatedFatigueIndex,
            ViolationType::ElevatedRiskIndex,
        ] {
            assert_eq!(
                serde_json::to_string(&t).unwrap(),
                format!("\"{}\"", t.as_str())
            );
        }
    }

    #[test]
    fn test_violation_serialization_shape() {
        let mut v = violation(ViolationType::MaxWeeklyHours, Severity::Breach, "2024-01-10");
        v.window_end = NaiveDate::from_ymd_opt(2024, 1, 16);

        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["type"], "MAX_WEEKLY_HOURS");
        assert_eq!(json["employeeId"], "emp_001");
        assert_eq!(json["date"], "2024-01-10");
        assert_eq!(json["windowEnd"], "2024-01-16");
        assert!(json.get("relatedDates").is_none());
    }

    #[test]
    fn test_result_counts() {
        let result = ComplianceResult::from_violations(vec![
            violation(ViolationType::InsufficientRest, Severity::Breach, "2024-01-11"),
            violation(ViolationType::ElevatedFatigueIndex, Severity::Level2, "2024-01-12"),
            violation(ViolationType::ApproachingWeeklyLimit, Severity::Level1, "2024-01-10"),
            violation(ViolationType::ConsecutiveNightsWarning, Severity::Warning, "2024-01-14"),
            violation(ViolationType::LongDutyWithCommute, Severity::Info, "2024-01-10"),
        ]);

        assert!(result.has_errors);
        assert!(result.has_warnings);
        assert_eq!(result.error_count, 2);
        assert_eq!(result.warning_count, 2);
        assert_eq!(result.worst_severity(), Some(Severity::Breach));
    }

    #[test]
    fn test_empty_result() {
        let result = ComplianceResult::from_violations(vec![]);
        assert!(!result.has_errors);
        assert!(!result.has_warnings);
        assert_eq!(result.worst_severity(), None);
    }

    #[test]
    fn test_sorted_by_date_puts_worst_first_within_a_day() {
        let result = ComplianceResult::from_violations(vec![
            violation(ViolationType::MultipleShiftsSameDay, Severity::Warning, "2024-01-12"),
            violation(ViolationType::LongDutyWithCommute, Severity::Info, "2024-01-10"),
            violation(ViolationType::InsufficientRest, Severity::Breach, "2024-01-12"),
        ]);

        let sorted = result.sorted_by_date();
        assert_eq!(sorted[0].violation_type, ViolationType::LongDutyWithCommute);
        assert_eq!(sorted[1].violation_type, ViolationType::InsufficientRest);
        assert_eq!(sorted[2].violation_type, ViolationType::MultipleShiftsSameDay);
    }
}
