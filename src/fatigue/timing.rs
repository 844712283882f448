//! Duty-timing component.
//!
//! Combines a shift-length factor with a circadian factor. Hours worked in
//! the circadian low (02:00–06:00) weigh most, hours in the wider night
//! window (23:00–06:00) less, and starts between 04:00 and 07:00 add a
//! penalty that grows the earlier the start.

use crate::duty_time::{CIRCADIAN_LOW_WINDOW, DutyWindow, NIGHT_WINDOW};

const TIMING_BASE: f64 = 0.95;
const LENGTH_WEIGHT_AFTER_8H: f64 = 0.02;
const LENGTH_WEIGHT_AFTER_12H: f64 = 0.04;
const CIRCADIAN_LOW_WEIGHT: f64 = 0.05;
const NIGHT_WEIGHT: f64 = 0.02;
const EARLY_START_WEIGHT: f64 = 0.05;

/// Breakdown of the timing component for one duty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingBreakdown {
    /// Hours inside 02:00–06:00.
    pub circadian_low_hours: f64,
    /// Hours inside 23:00–06:00.
    pub night_hours: f64,
    /// Early-start penalty, zero outside 04:00–07:00 starts.
    pub early_start: f64,
    /// Multiplier from duty length.
    pub length_factor: f64,
    /// Multiplier from time of day.
    pub circadian_factor: f64,
    /// The timing component.
    pub component: f64,
}

/// Length multiplier: flat to 8 hours, rising after 8 and faster after 12.
pub fn length_factor(duty_hours: f64) -> f64 {
    1.0 + LENGTH_WEIGHT_AFTER_8H * (duty_hours - 8.0).max(0.0)
        + LENGTH_WEIGHT_AFTER_12H * (duty_hours - 12.0).max(0.0)
}

/// Early-start penalty for a start time given in hours after midnight.
pub fn early_start_penalty(start_hours: f64) -> f64 {
    if (4.0..7.0).contains(&start_hours) {
        EARLY_START_WEIGHT * (7.0 - start_hours)
    } else {
        0.0
    }
}

/// Computes the timing component for a duty.
///
/// # Example
///
/// ```
/// use fatigue_engine::duty_time::DutyWindow;
/// use fatigue_engine::fatigue::duty_timing;
///
/// let night = duty_timing(&DutyWindow::parse("22:00", "06:00").unwrap());
/// let day = duty_timing(&DutyWindow::parse("10:00", "18:00").unwrap());
/// assert!(night.component > day.component);
/// ```
pub fn duty_timing(window: &DutyWindow) -> TimingBreakdown {
    let circadian_low_hours = window.overlap_hours(CIRCADIAN_LOW_WINDOW);
    let night_hours = window.overlap_hours(NIGHT_WINDOW);
    let early_start = early_start_penalty(window.start_hours());

    let length_factor = length_factor(window.duration_hours());
    let circadian_factor = 1.0
        + CIRCADIAN_LOW_WEIGHT * circadian_low_hours
        + NIGHT_WEIGHT * night_hours
        + early_start;

    TimingBreakdown {
        circadian_low_hours,
        night_hours,
        early_start,
        length_factor,
        circadian_factor,
        component: TIMING_BASE * length_factor * circadian_factor,
    }
}
