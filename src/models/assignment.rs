//! Assignment and shift-pattern records supplied by the rostering layer.
//!
//! These mirror the persisted records field for field. The engine never
//! stores them; it reads them once per analysis request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A reusable shift template, e.g. "Nights 19:00–07:00".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftPattern {
    /// Unique identifier for the pattern.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Default start time, `HH:MM`.
    pub start_time: String,
    /// Default end time, `HH:MM`.
    pub end_time: String,
    /// Whether shifts on this pattern count as night shifts.
    #[serde(default)]
    pub is_night: bool,
    /// Free-form duty type (e.g. "possession", "lookout").
    #[serde(default)]
    pub duty_type: Option<String>,
    /// Workload rating, 1 (most demanding) to 4.
    #[serde(default)]
    pub workload: Option<u8>,
    /// Attention rating, 1 (most demanding) to 4.
    #[serde(default)]
    pub attention: Option<u8>,
    /// Total commute in minutes, split evenly between in and out.
    #[serde(default)]
    pub commute_time: Option<u32>,
    /// Minutes of work between breaks.
    #[serde(default)]
    pub break_frequency: Option<u32>,
    /// Length of each break in minutes.
    #[serde(default)]
    pub break_length: Option<u32>,
}

/// An employee rostered onto a shift pattern for one date.
///
/// Any of the optional fields overrides the pattern's value for this
/// assignment only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Unique identifier for the assignment.
    pub id: String,
    /// The employee being rostered.
    pub employee_id: String,
    /// The project the work belongs to.
    #[serde(default)]
    pub project_id: Option<String>,
    /// The shift pattern this assignment uses.
    pub shift_pattern_id: String,
    /// Calendar date the shift starts on.
    pub date: NaiveDate,
    /// Start-time override, `HH:MM`.
    #[serde(default)]
    pub custom_start_time: Option<String>,
    /// End-time override, `HH:MM`.
    #[serde(default)]
    pub custom_end_time: Option<String>,
    /// Workload override.
    #[serde(default)]
    pub workload: Option<u8>,
    /// Attention override.
    #[serde(default)]
    pub attention: Option<u8>,
    /// Commute-in override in minutes.
    #[serde(default)]
    pub commute_in: Option<u32>,
    /// Commute-out override in minutes.
    #[serde(default)]
    pub commute_out: Option<u32>,
    /// Break-frequency override in minutes.
    #[serde(default)]
    pub break_frequency: Option<u32>,
    /// Break-length override in minutes.
    #[serde(default)]
    pub break_length: Option<u32>,
}

impl Assignment {
    /// Creates an assignment with no overrides.
    pub fn new(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        shift_pattern_id: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            project_id: None,
            shift_pattern_id: shift_pattern_id.into(),
            date,
            custom_start_time: None,
            custom_end_time: None,
            workload: None,
            attention: None,
            commute_in: None,
            commute_out: None,
            break_frequency: None,
            break_length: None,
        }
    }

    /// Sets custom start and end times.
    pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.custom_start_time = Some(start.into());
        self.custom_end_time = Some(end.into());
        self
    }
}

impl ShiftPattern {
    /// Creates a pattern with no fatigue parameters set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        is_night: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            is_night,
            duty_type: None,
            workload: None,
            attention: None,
            commute_time: None,
            break_frequency: None,
            break_length: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_assignment_with_overrides() {
        let json = r#"{
            "id": "a_001",
            "employeeId": "emp_001",
            "projectId": "proj_7",
            "shiftPatternId": "sp_nights",
            "date": "2024-01-10",
            "customStartTime": "20:00",
            "customEndTime": "06:00",
            "commuteIn": 40
        }"#;

        let assignment: Assignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.employee_id, "emp_001");
        assert_eq!(assignment.date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(assignment.custom_start_time.as_deref(), Some("20:00"));
        assert_eq!(assignment.commute_in, Some(40));
        assert!(assignment.commute_out.is_none());
    }

    #[test]
    fn test_deserialize_pattern_ignores_weekly_schedule() {
        let json = r#"{
            "id": "sp_nights",
            "name": "Nights",
            "startTime": "19:00",
            "endTime": "07:00",
            "isNight": true,
            "dutyType": "possession",
            "commuteTime": 60,
            "weeklySchedule": {"mon": true, "tue": true}
        }"#;

        let pattern: ShiftPattern = serde_json::from_str(json).unwrap();
        assert!(pattern.is_night);
        assert_eq!(pattern.commute_time, Some(60));
        assert_eq!(pattern.duty_type.as_deref(), Some("possession"));
    }

    #[test]
    fn test_builders() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let assignment = Assignment::new("a1", "emp", "sp", date).with_times("08:00", "20:00");
        assert_eq!(assignment.custom_end_time.as_deref(), Some("20:00"));

        let pattern = ShiftPattern::new("sp", "Days", "07:00", "19:00", false);
        assert!(!pattern.is_night);
        assert!(pattern.workload.is_none());
    }
}
