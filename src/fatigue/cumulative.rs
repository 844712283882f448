//! Cumulative fatigue component.
//!
//! Fatigue is tracked as a load measured in weighted duty hours. Each duty
//! adds its hours (plus commuting, weighted up for night work) and the load
//! carried into the next duty decays exponentially over the rest in
//! between. Because decay only ever shrinks the carried load, adding rest
//! can never raise the component.

/// Time constant of recovery during rest, in hours.
pub const RECOVERY_TIME_CONSTANT_HOURS: f64 = 16.0;

/// Rest shorter than this adds a short-rest penalty.
pub const SHORT_REST_HOURS: f64 = 11.0;

/// Extra load per duty hour worked at night, as a fraction.
pub const NIGHT_LOAD_WEIGHT: f64 = 0.5;

const CUMULATIVE_BASE: f64 = 0.85;
const CUMULATIVE_PER_LOAD_HOUR: f64 = 0.012;
const SHORT_REST_RISK_PER_HOUR: f64 = 0.02;

/// Cumulative state after one duty has been applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CumulativeStep {
    /// Load carried over from earlier duties after recovery.
    pub carried: f64,
    /// Load after adding this duty.
    pub load: f64,
    /// Hours the preceding rest fell short of [`SHORT_REST_HOURS`].
    pub short_rest_deficit: f64,
    /// The cumulative risk component.
    pub component: f64,
}

/// Load contributed by one duty.
///
/// `night_hours` is the part of the duty inside the night window; it weights
/// the whole door-to-door period by the night fraction of the duty.
pub fn duty_load(duty_hours: f64, commute_hours: f64, night_hours: f64) -> f64 {
    let night_fraction = if duty_hours > 0.0 {
        night_hours / duty_hours
    } else {
        0.0
    };
    (duty_hours + commute_hours) * (1.0 + NIGHT_LOAD_WEIGHT * night_fraction)
}

/// Rest available for sleep: the gap between duties less the commutes
/// either side of it, never negative.
pub fn effective_rest_hours(gap_hours: f64, commute_out_hours: f64, commute_in_hours: f64) -> f64 {
    (gap_hours - commute_out_hours - commute_in_hours).max(0.0)
}

/// Applies one duty to the running load.
///
/// `previous_load` is `None` for the first duty of a sequence, which starts
/// fully rested.
///
/// # Example
///
/// ```
/// use fatigue_engine::fatigue::accumulate;
///
/// let first = accumulate(None, 0.0, 13.0);
/// let back_to_back = accumulate(Some(first.load), 11.0, 13.0);
/// let after_rest_day = accumulate(Some(first.load), 35.0, 13.0);
///
/// assert!(back_to_back.component > after_rest_day.component);
/// assert!(after_rest_day.component > first.component);
/// ```
pub fn accumulate(previous_load: Option<f64>, rest_hours: f64, duty_load: f64) -> CumulativeStep {
    let (carried, short_rest_deficit) = match previous_load {
        Some(load) => (
            load * (-rest_hours / RECOVERY_TIME_CONSTANT_HOURS).exp(),
            (SHORT_REST_HOURS - rest_hours).max(0.0),
        ),
        None => (0.0, 0.0),
    };

    let load = carried + duty_load;
    let component = CUMULATIVE_BASE
        + CUMULATIVE_PER_LOAD_HOUR * load
        + SHORT_REST_RISK_PER_HOUR * short_rest_deficit;

    CumulativeStep {
        carried,
        load,
        short_rest_deficit,
        component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_duty_load_day_shift() {
        approx(duty_load(8.0, 1.0, 0.0), 9.0);
    }

    #[test]
    fn test_duty_load_weights_night_fraction() {
        // 12h duty with 7h of night: fraction 7/12.
        approx(duty_load(12.0, 1.0, 7.0), 13.0 * (1.0 + 0.5 * 7.0 / 12.0));
    }

    #[test]
    fn test_effective_rest_subtracts_commutes() {
        approx(effective_rest_hours(12.0, 0.5, 0.5), 11.0);
        approx(effective_rest_hours(0.5, 0.5, 0.5), 0.0);
    }

    #[test]
    fn test_first_duty_has_no_carry_or_penalty() {
        let step = accumulate(None, 0.0, 9.0);
        approx(step.carried, 0.0);
        approx(step.short_rest_deficit, 0.0);
        approx(step.load, 9.0);
        approx(step.component, 0.85 + 0.012 * 9.0);
    }

    #[test]
    fn test_carry_decays_with_rest() {
        let step = accumulate(Some(13.0), 16.0, 13.0);
        approx(step.carried, 13.0 * (-1.0f64).exp());
        approx(step.short_rest_deficit, 0.0);
    }

    #[test]
    fn test_short_rest_penalty() {
        let step = accumulate(Some(10.0), 8.0, 9.0);
        approx(step.short_rest_deficit, 3.0);
        approx(
            step.component,
            0.85 + 0.012 * step.load + 0.02 * 3.0,
        );
    }

    #[test]
    fn test_component_never_rises_with_more_rest() {
        let mut last = f64::INFINITY;
        for rest in [0.0, 4.0, 8.0, 11.0, 12.0, 24.0, 48.0, 96.0] {
            let step = accumulate(Some(20.0), rest, 13.0);
            assert!(step.component <= last, "rest {rest} raised the component");
            last = step.component;
        }
    }
}
