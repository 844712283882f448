//! Several shifts starting on one calendar date.

use crate::models::{ComplianceViolation, Severity, ViolationType};
use crate::resolution::ResolvedShift;

/// Flags dates with more than one shift.
///
/// Mixing night and non-night shifts on one date is a day/night transition
/// breach; otherwise the date gets a multiple-shifts warning. `shifts` must
/// be sorted by date.
pub fn check_same_day(employee_id: &str, shifts: &[ResolvedShift]) -> Vec<ComplianceViolation> {
    shifts
        .chunk_by(|a, b| a.date == b.date)
        .filter(|group| group.len() > 1)
        .map(|group| {
            let date = group[0].date;
            let nights = group.iter().filter(|s| s.is_night).count();
            let names: Vec<&str> = group.iter().map(|s| s.pattern_name.as_str()).collect();

            if nights > 0 && nights < group.len() {
                ComplianceViolation::new(
                    ViolationType::DayNightTransition,
                    Severity::Breach,
                    employee_id,
                    date,
                    format!("Day and night shifts on the same date ({})", names.join(", ")),
                )
            } else {
                ComplianceViolation::new(
                    ViolationType::MultipleShiftsSameDay,
                    Severity::Warning,
                    employee_id,
                    date,
                    format!("{} shifts on the same date ({})", group.len(), names.join(", ")),
                )
            }
        })
        .collect()
}
