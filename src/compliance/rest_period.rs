//! Minimum rest between consecutive shifts.
//!
//! A short rest is attributed to the shift that starts without enough rest
//! before it. The earlier shift is listed as a related date only.

use rust_decimal::Decimal;

use crate::config::ComplianceLimits;
use crate::models::{ComplianceViolation, Severity, ViolationType};
use crate::resolution::ResolvedShift;

use super::format_hours;

/// Flags every shift that starts less than `min_rest_hours` after the
/// previous one ended. `shifts` must be sorted by start.
pub fn check_rest_periods(
    employee_id: &str,
    shifts: &[ResolvedShift],
    limits: &ComplianceLimits,
) -> Vec<ComplianceViolation> {
    shifts
        .windows(2)
        .filter_map(|pair| {
            let (previous, next) = (&pair[0], &pair[1]);
            let rest_minutes = (next.start() - previous.end()).num_minutes();
            let rest_hours = Decimal::from(rest_minutes) / Decimal::from(60);

            (rest_hours < limits.min_rest_hours).then(|| {
                ComplianceViolation::new(
                    ViolationType::InsufficientRest,
                    Severity::Breach,
                    employee_id,
                    next.date,
                    format!(
                        "Only {} hours rest before this shift (minimum {} hours)",
                        format_hours(rest_hours),
                        format_hours(limits.min_rest_hours)
                    ),
                )
                .with_related_dates(vec![previous.date])
            })
        })
        .collect()
}
