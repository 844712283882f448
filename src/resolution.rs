//! Parameter resolution for rostered assignments.
//!
//! Every fatigue parameter is looked up in three layers: the assignment's
//! own override, then the shift pattern, then the configured default.
//! Resolved shifts feed both the compliance rules and the fatigue
//! evaluator, so the two always agree on times and parameters.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::warn;

use crate::config::ParameterDefaults;
use crate::duty_time::DutyWindow;
use crate::error::{EngineError, EngineResult};
use crate::models::{Assignment, ShiftDefinition, ShiftPattern};

/// Display name used when an assignment's pattern cannot be found.
pub const UNKNOWN_PATTERN_NAME: &str = "Unknown";

/// Picks the first defined value: assignment override, then pattern, then
/// default.
///
/// # Example
///
/// ```
/// use fatigue_engine::resolution::resolve_param;
///
/// assert_eq!(resolve_param(Some(1), Some(3), 2), 1);
/// assert_eq!(resolve_param(None, Some(3), 2), 3);
/// assert_eq!(resolve_param(None, None, 2), 2);
/// ```
pub fn resolve_param<T>(assignment: Option<T>, pattern: Option<T>, default: T) -> T {
    assignment.or(pattern).unwrap_or(default)
}

/// Looks up a pattern by ID, failing when it is absent.
pub fn require_pattern<'a>(
    patterns: &'a [ShiftPattern],
    pattern_id: &str,
) -> EngineResult<&'a ShiftPattern> {
    patterns
        .iter()
        .find(|p| p.id == pattern_id)
        .ok_or_else(|| EngineError::UnknownShiftPattern {
            pattern_id: pattern_id.to_string(),
        })
}

/// An assignment with every time and parameter resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedShift {
    /// ID of the source assignment.
    pub assignment_id: String,
    /// Date the shift starts on.
    pub date: NaiveDate,
    /// Pattern display name, or [`UNKNOWN_PATTERN_NAME`].
    pub pattern_name: String,
    /// Start time as supplied.
    pub start_time: String,
    /// End time as supplied.
    pub end_time: String,
    /// Parsed duty window.
    pub window: DutyWindow,
    /// Start of the duty on its date.
    pub starts_at: NaiveDateTime,
    /// End of the duty, on the next date if it crosses midnight.
    pub ends_at: NaiveDateTime,
    /// Night-shift flag from the pattern.
    pub is_night: bool,
    /// Workload rating.
    pub workload: u8,
    /// Attention rating.
    pub attention: u8,
    /// Commute to work, minutes.
    pub commute_in: u32,
    /// Commute home, minutes.
    pub commute_out: u32,
    /// Minutes of work between breaks.
    pub break_frequency: u32,
    /// Break length, minutes.
    pub break_length: u32,
}

impl ResolvedShift {
    /// Resolves one assignment against its pattern.
    ///
    /// A missing pattern is tolerated: times fall back to the configured
    /// defaults and the shift is treated as a day shift.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShiftTime`] if the resolved times do
    /// not parse, or [`EngineError::InvalidParameter`] if the duty runs past
    /// the last representable date.
    pub fn resolve(
        assignment: &Assignment,
        pattern: Option<&ShiftPattern>,
        defaults: &ParameterDefaults,
    ) -> EngineResult<Self> {
        if pattern.is_none() {
            warn!(
                assignment_id = %assignment.id,
                pattern_id = %assignment.shift_pattern_id,
                "Shift pattern not found, using default times"
            );
        }

        let start_time = resolve_param(
            assignment.custom_start_time.clone(),
            pattern.map(|p| p.start_time.clone()),
            defaults.start_time.clone(),
        );
        let end_time = resolve_param(
            assignment.custom_end_time.clone(),
            pattern.map(|p| p.end_time.clone()),
            defaults.end_time.clone(),
        );
        let window = DutyWindow::parse(&start_time, &end_time)?;
        let (starts_at, ends_at) = window.on_date(assignment.date)?;

        // A pattern carries one commute figure for the round trip.
        let commute_total = pattern.and_then(|p| p.commute_time);
        let pattern_commute_in = commute_total.map(|total| total / 2);
        let pattern_commute_out = commute_total.map(|total| total - total / 2);

        Ok(Self {
            assignment_id: assignment.id.clone(),
            date: assignment.date,
            pattern_name: pattern.map_or_else(|| UNKNOWN_PATTERN_NAME.to_string(), |p| p.name.clone()),
            start_time,
            end_time,
            window,
            starts_at,
            ends_at,
            is_night: pattern.is_some_and(|p| p.is_night),
            workload: resolve_param(
                assignment.workload,
                pattern.and_then(|p| p.workload),
                defaults.workload,
            ),
            attention: resolve_param(
                assignment.attention,
                pattern.and_then(|p| p.attention),
                defaults.attention,
            ),
            commute_in: resolve_param(assignment.commute_in, pattern_commute_in, defaults.commute_in),
            commute_out: resolve_param(
                assignment.commute_out,
                pattern_commute_out,
                defaults.commute_out,
            ),
            break_frequency: resolve_param(
                assignment.break_frequency,
                pattern.and_then(|p| p.break_frequency),
                defaults.break_frequency,
            ),
            break_length: resolve_param(
                assignment.break_length,
                pattern.and_then(|p| p.break_length),
                defaults.break_length,
            ),
        })
    }

    /// Duty hours, exact.
    pub fn duty_hours(&self) -> Decimal {
        self.window.duration_decimal()
    }

    /// Total commute hours, exact.
    pub fn commute_hours(&self) -> Decimal {
        (Decimal::from(self.commute_in) + Decimal::from(self.commute_out)) / Decimal::from(60)
    }

    /// Start of the duty.
    pub fn start(&self) -> NaiveDateTime {
        self.starts_at
    }

    /// End of the duty, on the next date if it crosses midnight.
    pub fn end(&self) -> NaiveDateTime {
        self.ends_at
    }

    /// Converts to an evaluator input at sequence position `day`.
    pub fn to_shift_definition(&self, day: u32) -> ShiftDefinition {
        ShiftDefinition {
            day,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            workload: Some(self.workload),
            attention: Some(self.attention),
            commute_in: Some(self.commute_in),
            commute_out: Some(self.commute_out),
            break_freq: Some(self.break_frequency),
            break_len: Some(self.break_length),
            is_night: Some(self.is_night),
        }
    }
}

/// Resolves one employee's assignments, sorted by date then start time.
///
/// Assignments for other employees are skipped.
pub fn resolve_assignments(
    employee_id: &str,
    assignments: &[Assignment],
    patterns: &[ShiftPattern],
    defaults: &ParameterDefaults,
) -> EngineResult<Vec<ResolvedShift>> {
    let mut shifts = assignments
        .iter()
        .filter(|a| a.employee_id == employee_id)
        .map(|a| {
            let pattern = patterns.iter().find(|p| p.id == a.shift_pattern_id);
            ResolvedShift::resolve(a, pattern, defaults)
        })
        .collect::<EngineResult<Vec<_>>>()?;

    shifts.sort_by_key(|s| (s.date, s.window.start_minute));
    Ok(shifts)
}

/// Numbers sorted shifts for the evaluator.
///
/// Day 1 is the date of the first shift; a calendar gap between shifts
/// becomes the same gap in day numbers, so rest days keep their recovery
/// effect.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use fatigue_engine::config::ParameterDefaults;
/// use fatigue_engine::models::{Assignment, ShiftPattern};
/// use fatigue_engine::resolution::{resolve_assignments, to_shift_definitions};
///
/// let patterns = vec![ShiftPattern::new("early", "Early", "06:00", "14:00", false)];
/// let assignments = vec![
///     Assignment::new("a1", "emp_001", "early", NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()),
///     Assignment::new("a2", "emp_001", "early", NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()),
/// ];
///
/// let shifts =
///     resolve_assignments("emp_001", &assignments, &patterns, &ParameterDefaults::default()).unwrap();
/// let days: Vec<u32> = to_shift_definitions(&shifts).iter().map(|s| s.day).collect();
/// assert_eq!(days, vec![1, 4]);
/// ```
pub fn to_shift_definitions(shifts: &[ResolvedShift]) -> Vec<ShiftDefinition> {
    let Some(first) = shifts.first() else {
        return Vec::new();
    };

    shifts
        .iter()
        .map(|s| {
            let offset = (s.date - first.date).num_days().max(0);
            s.to_shift_definition(u32::try_from(offset + 1).unwrap_or(u32::MAX))
        })
        .collect()
}

/// Builds the evaluator input for one employee, optionally limited to the
/// inclusive date range `period`.
pub fn build_shift_definitions(
    employee_id: &str,
    assignments: &[Assignment],
    patterns: &[ShiftPattern],
    period: Option<(NaiveDate, NaiveDate)>,
    defaults: &ParameterDefaults,
) -> EngineResult<Vec<ShiftDefinition>> {
    let mut shifts = resolve_assignments(employee_id, assignments, patterns, defaults)?;
    if let Some((from, to)) = period {
        shifts.retain(|s| s.date >= from && s.date <= to);
    }
    Ok(to_shift_definitions(&shifts))
}
