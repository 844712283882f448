//! Rules driven by the fatigue evaluator's scores.
//!
//! FGI is compared with the tier table for the shift type, so a score that
//! is a level-2 exceedance on a day shift can be acceptable on a night
//! shift.

use crate::config::FatigueThresholds;
use crate::models::{
    ComplianceViolation, FatigueLevel, FatigueResult, Severity, ViolationType,
};
use crate::resolution::ResolvedShift;

/// Flags shifts whose FGI is above the level-2 tier, or whose FRI is above
/// the risk limit. `results` must line up with `shifts`.
pub fn check_fatigue_scores(
    employee_id: &str,
    shifts: &[ResolvedShift],
    results: &[FatigueResult],
    thresholds: &FatigueThresholds,
) -> Vec<ComplianceViolation> {
    let mut violations = Vec::new();

    for (shift, result) in shifts.iter().zip(results) {
        let tiers = thresholds.for_shift(result.is_night);
        let kind = if result.is_night { "night" } else { "day" };

        let severity = match result.fatigue_level(thresholds) {
            FatigueLevel::Breach => Some((Severity::Breach, tiers.breach)),
            FatigueLevel::Level2 => Some((Severity::Level2, tiers.level2)),
            FatigueLevel::Level1 | FatigueLevel::Ok => None,
        };
        if let Some((severity, threshold)) = severity {
            violations.push(ComplianceViolation::new(
                ViolationType::ElevatedFatigueIndex,
                severity,
                employee_id,
                shift.date,
                format!(
                    "Fatigue index {:.1} exceeds the {} shift {} threshold of {}",
                    result.fatigue_index_display(),
                    kind,
                    severity,
                    threshold
                ),
            ));
        }

        if result.exceeds_risk_limit(thresholds) {
            violations.push(ComplianceViolation::new(
                ViolationType::ElevatedRiskIndex,
                Severity::Level2,
                employee_id,
                shift.date,
                format!(
                    "Risk index {:.3} exceeds the limit of {}",
                    result.risk_index_display(),
                    thresholds.risk_index_limit
                ),
            ));
        }
    }

    violations
}
