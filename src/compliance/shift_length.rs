//! Shift length rules.
//!
//! A single duty over the maximum is a breach. Duty plus commuting over the
//! door-to-door limit is reported for information only.

use crate::config::ComplianceLimits;
use crate::models::{ComplianceViolation, Severity, ViolationType};
use crate::resolution::ResolvedShift;

use super::format_hours;

/// Flags shifts longer than `max_shift_hours`.
pub fn check_shift_length(
    employee_id: &str,
    shifts: &[ResolvedShift],
    limits: &ComplianceLimits,
) -> Vec<ComplianceViolation> {
    shifts
        .iter()
        .filter(|s| s.duty_hours() > limits.max_shift_hours)
        .map(|s| {
            ComplianceViolation::new(
                ViolationType::MaxShiftLength,
                Severity::Breach,
                employee_id,
                s.date,
                format!(
                    "{} shift of {} hours exceeds the {} hour maximum",
                    s.pattern_name,
                    format_hours(s.duty_hours()),
                    format_hours(limits.max_shift_hours)
                ),
            )
        })
        .collect()
}

/// Flags shifts whose duty plus commute exceeds `max_duty_with_commute_hours`.
pub fn check_duty_with_commute(
    employee_id: &str,
    shifts: &[ResolvedShift],
    limits: &ComplianceLimits,
) -> Vec<ComplianceViolation> {
    shifts
        .iter()
        .filter_map(|s| {
            let door_to_door = s.duty_hours() + s.commute_hours();
            (door_to_door > limits.max_duty_with_commute_hours).then(|| {
                ComplianceViolation::new(
                    ViolationType::LongDutyWithCommute,
                    Severity::Info,
                    employee_id,
                    s.date,
                    format!(
                        "{} hours door to door including commute (guideline {} hours)",
                        format_hours(door_to_door),
                        format_hours(limits.max_duty_with_commute_hours)
                    ),
                )
            })
        })
        .collect()
}
