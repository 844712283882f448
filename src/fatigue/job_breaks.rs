//! Job-type and breaks component.
//!
//! Workload and attention are rated 1 (most demanding) to 4 (least). More
//! demanding work, longer stretches between breaks and longer commutes
//! raise the component; longer breaks lower it.

use crate::config::ParameterDefaults;
use crate::error::{EngineError, EngineResult};
use crate::models::ShiftDefinition;

const JOB_BASE: f64 = 0.8;
const DEMAND_WEIGHT: f64 = 0.2;
const BREAK_INTERVAL_WEIGHT_PER_HOUR: f64 = 0.03;
const BREAK_LENGTH_RELIEF_PER_MINUTE: f64 = 0.002;
const COMMUTE_WEIGHT_PER_HOUR: f64 = 0.04;
const MIN_BREAK_INTERVAL_HOURS: f64 = 0.5;
const MAX_BREAK_INTERVAL_HOURS: f64 = 8.0;
const MAX_CREDITED_BREAK_MINUTES: u32 = 60;
const JOB_FLOOR: f64 = 0.5;

/// Fatigue parameters for one shift after defaults have been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobParameters {
    /// Workload rating, 1–4.
    pub workload: u8,
    /// Attention rating, 1–4.
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

fn rating(field: &str, value: u8) -> EngineResult<u8> {
    if (1..=4).contains(&value) {
        Ok(value)
    } else {
        Err(EngineError::InvalidParameter {
            field: field.to_string(),
            message: format!("must be between 1 and 4, got {}", value),
        })
    }
}

impl JobParameters {
    /// Fills any parameter the shift leaves out from `defaults`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidParameter`] for a workload or attention
    /// rating outside 1–4.
    pub fn resolve(shift: &ShiftDefinition, defaults: &ParameterDefaults) -> EngineResult<Self> {
        Ok(Self {
            workload: rating("workload", shift.workload.unwrap_or(defaults.workload))?,
            attention: rating("attention", shift.attention.unwrap_or(defaults.attention))?,
            commute_in: shift.commute_in.unwrap_or(defaults.commute_in),
            commute_out: shift.commute_out.unwrap_or(defaults.commute_out),
            break_frequency: shift.break_freq.unwrap_or(defaults.break_frequency),
            break_length: shift.break_len.unwrap_or(defaults.break_length),
        })
    }

    /// Commute to work in hours.
    pub fn commute_in_hours(&self) -> f64 {
        f64::from(self.commute_in) / 60.0
    }

    /// Commute home in hours.
    pub fn commute_out_hours(&self) -> f64 {
        f64::from(self.commute_out) / 60.0
    }

    /// Total commute in hours.
    pub fn commute_hours(&self) -> f64 {
        self.commute_in_hours() + self.commute_out_hours()
    }

    /// Demand on a 0–1 scale, 1 being the most demanding ratings.
    pub fn demand(&self) -> f64 {
        f64::from((4 - self.workload) + (4 - self.attention)) / 6.0
    }
}

/// Computes the job-type and breaks component.
///
/// # Example
///
/// ```
/// use fatigue_engine::fatigue::{JobParameters, job_breaks_component};
///
/// let relaxed = JobParameters {
///     workload: 4,
///     attention: 4,
///     commute_in: 15,
///     commute_out: 15,
///     break_frequency: 120,
///     break_length: 30,
/// };
/// let intense = JobParameters { workload: 1, attention: 1, ..relaxed };
/// assert!(job_breaks_component(&intense) > job_breaks_component(&relaxed));
/// ```
pub fn job_breaks_component(params: &JobParameters) -> f64 {
    let break_interval_hours = (f64::from(params.break_frequency) / 60.0)
        .clamp(MIN_BREAK_INTERVAL_HOURS, MAX_BREAK_INTERVAL_HOURS);
    let credited_break = f64::from(params.break_length.min(MAX_CREDITED_BREAK_MINUTES));

    let component = JOB_BASE + DEMAND_WEIGHT * params.demand()
        + BREAK_INTERVAL_WEIGHT_PER_HOUR * break_interval_hours
        - BREAK_LENGTH_RELIEF_PER_MINUTE * credited_break
        + COMMUTE_WEIGHT_PER_HOUR * params.commute_hours();

    component.max(JOB_FLOOR)
}
