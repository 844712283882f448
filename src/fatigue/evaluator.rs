//! Fatigue sequence evaluation.
//!
//! Turns an ordered list of [`ShiftDefinition`]s into one
//! [`FatigueResult`] per shift. The whole sequence is recomputed on every
//! call; nothing is carried between calls.

use crate::config::ParameterDefaults;
use crate::duty_time::MINUTES_PER_DAY;
use crate::error::{EngineError, EngineResult};
use crate::models::{FatigueResult, ShiftDefinition};

use super::cumulative::{accumulate, duty_load, effective_rest_hours};
use super::job_breaks::{JobParameters, job_breaks_component};
use super::timing::duty_timing;

/// A shift with at least this many hours inside 23:00–06:00 counts as a
/// night shift when its definition does not say.
pub const NIGHT_SHIFT_MIN_NIGHT_HOURS: f64 = 3.0;

const FGI_PER_CARRIED_LOAD_HOUR: f64 = 1.0;
const FGI_PER_DUTY_HOUR: f64 = 1.2;
const FGI_PER_CIRCADIAN_LOW_HOUR: f64 = 2.5;
const FGI_PER_NIGHT_HOUR: f64 = 1.0;
const FGI_JOB_BREAKS_SCALE: f64 = 5.0;
const FGI_PER_SHORT_REST_HOUR: f64 = 2.0;
const FGI_EARLY_START_SCALE: f64 = 10.0;

/// State handed from one duty to the next.
struct PreviousDuty {
    end_minute: i64,
    commute_out_hours: f64,
    load: f64,
}

fn check_order(shifts: &[ShiftDefinition]) -> EngineResult<()> {
    for (index, pair) in shifts.windows(2).enumerate() {
        if pair[1].day < pair[0].day {
            return Err(EngineError::InvalidSequenceOrder {
                index: index + 1,
                previous_day: pair[0].day,
                day: pair[1].day,
            });
        }
    }
    Ok(())
}

/// Evaluates a shift sequence with the built-in parameter defaults.
///
/// # Errors
///
/// - [`EngineError::InvalidShiftTime`] if any time is not `HH:MM`.
/// - [`EngineError::InvalidSequenceOrder`] if `day` decreases anywhere.
/// - [`EngineError::InvalidParameter`] for ratings outside 1–4.
///
/// # Example
///
/// ```
/// use fatigue_engine::fatigue::evaluate;
/// use fatigue_engine::models::ShiftDefinition;
///
/// let nights: Vec<_> = (1..=3).map(|day| ShiftDefinition::new(day, "19:00", "07:00")).collect();
/// let results = evaluate(&nights).unwrap();
///
/// assert_eq!(results.len(), 3);
/// assert!(results[2].fatigue_index > results[0].fatigue_index);
/// assert!(evaluate(&[]).unwrap().is_empty());
/// ```
pub fn evaluate(shifts: &[ShiftDefinition]) -> EngineResult<Vec<FatigueResult>> {
    evaluate_with(shifts, &ParameterDefaults::default())
}

/// Evaluates a shift sequence, filling missing parameters from `defaults`.
pub fn evaluate_with(
    shifts: &[ShiftDefinition],
    defaults: &ParameterDefaults,
) -> EngineResult<Vec<FatigueResult>> {
    check_order(shifts)?;

    let mut results = Vec::with_capacity(shifts.len());
    let mut previous: Option<PreviousDuty> = None;

    for shift in shifts {
        let window = shift.window()?;
        let params = JobParameters::resolve(shift, defaults)?;

        let start_minute = (i64::from(shift.day) - 1) * MINUTES_PER_DAY + window.start_minute;
        let end_minute = start_minute + window.duration_minutes;
        let duty_hours = window.duration_hours();

        let timing = duty_timing(&window);
        let job_breaks = job_breaks_component(&params);

        let rest_hours = previous.as_ref().map_or(0.0, |prev| {
            let gap_hours = (start_minute - prev.end_minute).max(0) as f64 / 60.0;
            effective_rest_hours(gap_hours, prev.commute_out_hours, params.commute_in_hours())
        });
        let cumulative = accumulate(
            previous.as_ref().map(|prev| prev.load),
            rest_hours,
            duty_load(duty_hours, params.commute_hours(), timing.night_hours),
        );

        let risk_index = cumulative.component * timing.component * job_breaks;
        let fatigue_index = FGI_PER_CARRIED_LOAD_HOUR * cumulative.carried
            + FGI_PER_DUTY_HOUR * duty_hours
            + FGI_PER_CIRCADIAN_LOW_HOUR * timing.circadian_low_hours
            + FGI_PER_NIGHT_HOUR * timing.night_hours
            + FGI_JOB_BREAKS_SCALE * job_breaks
            + FGI_PER_SHORT_REST_HOUR * cumulative.short_rest_deficit
            + FGI_EARLY_START_SCALE * timing.early_start;

        results.push(FatigueResult {
            day: shift.day,
            cumulative: cumulative.component,
            timing: timing.component,
            job_breaks,
            risk_index,
            fatigue_index,
            is_night: shift
                .is_night
                .unwrap_or(timing.night_hours >= NIGHT_SHIFT_MIN_NIGHT_HOURS),
            duty_hours,
        });

        previous = Some(PreviousDuty {
            end_minute,
            commute_out_hours: params.commute_out_hours(),
            load: cumulative.load,
        });
    }

    Ok(results)
}
