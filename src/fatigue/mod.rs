//! Fatigue risk evaluation.
//!
//! The risk index (FRI) multiplies three components: cumulative fatigue,
//! duty timing and job type with breaks. The fatigue index (FGI) is an
//! additive score built from the same inputs. Each component lives in its
//! own module so it can be tested in isolation.

mod cumulative;
mod evaluator;
mod job_breaks;
mod timing;

pub use cumulative::{
    CumulativeStep, NIGHT_LOAD_WEIGHT, RECOVERY_TIME_CONSTANT_HOURS, SHORT_REST_HOURS, accumulate,
    duty_load, effective_rest_hours,
};
pub use evaluator::{NIGHT_SHIFT_MIN_NIGHT_HOURS, evaluate, evaluate_with};
pub use job_breaks::{JobParameters, job_breaks_component};
pub use timing::{TimingBreakdown, duty_timing, early_start_penalty, length_factor};
