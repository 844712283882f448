//! Shift definition model consumed by the fatigue evaluator.

use serde::{Deserialize, Serialize};

use crate::duty_time::DutyWindow;
use crate::error::EngineResult;

/// One shift in a fatigue-evaluation sequence.
///
/// `day` is the 1-based position of the shift in the roster. Values must be
/// non-decreasing; a gap between consecutive values is a run of rest days.
/// Every optional fatigue parameter falls back to the configured default
/// when absent.
///
/// # Example
///
/// ```
/// use fatigue_engine::models::ShiftDefinition;
///
/// let shift = ShiftDefinition::new(1, "19:00", "07:00");
/// assert_eq!(shift.window().unwrap().duration_minutes, 12 * 60);
/// assert!(shift.workload.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftDefinition {
    /// Position of the shift in the roster, starting at 1.
    pub day: u32,
    /// Start clock time, `HH:MM`.
    pub start_time: String,
    /// End clock time, `HH:MM`; an end at or before the start is next day.
    pub end_time: String,
    /// Workload rating, 1 (most demanding) to 4.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workload: Option<u8>,
    /// Attention rating, 1 (most demanding) to 4.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attention: Option<u8>,
    /// Commute to work in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commute_in: Option<u32>,
    /// Commute home in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commute_out: Option<u32>,
    /// Minutes of work between breaks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_freq: Option<u32>,
    /// Length of each break in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_len: Option<u32>,
    /// Night-shift flag from the shift pattern. Derived from the times when
    /// absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_night: Option<bool>,
}

impl ShiftDefinition {
    /// Creates a shift with only the required fields set.
    pub fn new(day: u32, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            day,
            start_time: start_time.into(),
            end_time: end_time.into(),
            workload: None,
            attention: None,
            commute_in: None,
            commute_out: None,
            break_freq: None,
            break_len: None,
            is_night: None,
        }
    }

    /// Parses the start and end times into a [`DutyWindow`].
    pub fn window(&self) -> EngineResult<DutyWindow> {
        DutyWindow::parse(&self.start_time, &self.end_time)
    }
}
