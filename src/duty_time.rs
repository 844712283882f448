//! Clock-time parsing and duty-window arithmetic.
//!
//! Shift times arrive as wall-clock strings (`"HH:MM"`, or `"HH:MM:SS"` as
//! returned by the persistence layer). A [`DutyWindow`] turns a start/end
//! pair into a start minute plus a duration, with an explicit flag for
//! windows that cross midnight, so callers never repeat `end < start`
//! arithmetic themselves.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A recurring daily clock window, e.g. 23:00–06:00.
///
/// `end_minute < start_minute` means the window wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockWindow {
    /// Minute of day the window opens.
    pub start_minute: i64,
    /// Minute of day the window closes.
    pub end_minute: i64,
}

/// The circadian low, 02:00–06:00.
pub const CIRCADIAN_LOW_WINDOW: ClockWindow = ClockWindow {
    start_minute: 2 * 60,
    end_minute: 6 * 60,
};

/// Night time for working-time purposes, 23:00–06:00.
pub const NIGHT_WINDOW: ClockWindow = ClockWindow {
    start_minute: 23 * 60,
    end_minute: 6 * 60,
};

impl ClockWindow {
    /// Returns the minutes of `[abs_start, abs_end)` that fall inside this
    /// window on any day. Both bounds are minutes from an arbitrary midnight.
    pub fn overlap_minutes(&self, abs_start: i64, abs_end: i64) -> i64 {
        if abs_end <= abs_start {
            return 0;
        }

        let first_day = abs_start.div_euclid(MINUTES_PER_DAY) - 1;
        let last_day = abs_end.div_euclid(MINUTES_PER_DAY);

        (first_day..=last_day)
            .map(|day| {
                let base = day * MINUTES_PER_DAY;
                let open = base + self.start_minute;
                let close = if self.end_minute > self.start_minute {
                    base + self.end_minute
                } else {
                    base + MINUTES_PER_DAY + self.end_minute
                };
                (close.min(abs_end) - open.max(abs_start)).max(0)
            })
            .sum()
    }
}

/// Parses a wall-clock time string.
///
/// Accepts `HH:MM` and `HH:MM:SS`; seconds are discarded.
///
/// # Errors
///
/// Returns [`EngineError::InvalidShiftTime`] when the value is not a valid
/// time of day.
///
/// # Example
///
/// ```
/// use fatigue_engine::duty_time::parse_clock_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock_time("07:30").unwrap(), NaiveTime::from_hms_opt(7, 30, 0).unwrap());
/// assert_eq!(parse_clock_time("19:00:00").unwrap(), NaiveTime::from_hms_opt(19, 0, 0).unwrap());
/// assert!(parse_clock_time("7.30pm").is_err());
/// ```
pub fn parse_clock_time(value: &str) -> EngineResult<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map(|t| t.with_second(0).unwrap_or(t))
        .map_err(|_| EngineError::InvalidShiftTime {
            value: value.to_string(),
        })
}

/// A single duty period expressed as a start minute and a duration.
///
/// # Example
///
/// ```
/// use fatigue_engine::duty_time::DutyWindow;
///
/// let night = DutyWindow::parse("22:00", "06:00").unwrap();
/// assert!(night.crosses_midnight);
/// assert_eq!(night.duration_minutes, 8 * 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyWindow {
    /// Minute of day the duty starts.
    pub start_minute: i64,
    /// Length of the duty in minutes, always in `1..=1440`.
    pub duration_minutes: i64,
    /// Whether the duty ends on the following calendar day.
    pub crosses_midnight: bool,
}

impl DutyWindow {
    /// Builds a window from two clock times.
    ///
    /// The duration is `(end - start) mod 24h`. Equal start and end times
    /// describe a full 24-hour duty.
    pub fn from_times(start: NaiveTime, end: NaiveTime) -> Self {
        let start_minute = i64::from(start.num_seconds_from_midnight() / 60);
        let end_minute = i64::from(end.num_seconds_from_midnight() / 60);

        let mut duration_minutes = (end_minute - start_minute).rem_euclid(MINUTES_PER_DAY);
        if duration_minutes == 0 {
            duration_minutes = MINUTES_PER_DAY;
        }

        Self {
            start_minute,
            duration_minutes,
            crosses_midnight: end_minute <= start_minute,
        }
    }

    /// Parses start and end strings and builds the window.
    pub fn parse(start: &str, end: &str) -> EngineResult<Self> {
        Ok(Self::from_times(parse_clock_time(start)?, parse_clock_time(end)?))
    }

    /// Minute the duty ends, measured from the start day's midnight.
    pub fn end_minute(&self) -> i64 {
        self.start_minute + self.duration_minutes
    }

    /// Start time as fractional hours after midnight.
    pub fn start_hours(&self) -> f64 {
        self.start_minute as f64 / 60.0
    }

    /// Duty length in fractional hours.
    pub fn duration_hours(&self) -> f64 {
        self.duration_minutes as f64 / 60.0
    }

    /// Duty length in hours as an exact decimal.
    pub fn duration_decimal(&self) -> Decimal {
        Decimal::new(self.duration_minutes, 0) / Decimal::new(60, 0)
    }

    /// Hours of this duty that fall inside a daily clock window.
    pub fn overlap_hours(&self, window: ClockWindow) -> f64 {
        window.overlap_minutes(self.start_minute, self.end_minute()) as f64 / 60.0
    }

    /// Anchors the window to a calendar date, returning start and end
    /// datetimes.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidParameter`] when the duty would end
    /// past the last representable date.
    pub fn on_date(&self, date: NaiveDate) -> EngineResult<(NaiveDateTime, NaiveDateTime)> {
        let midnight = date.and_time(NaiveTime::default());
        midnight
            .checked_add_signed(Duration::minutes(self.start_minute))
            .and_then(|start| {
                start
                    .checked_add_signed(Duration::minutes(self.duration_minutes))
                    .map(|end| (start, end))
            })
            .ok_or_else(|| EngineError::InvalidParameter {
                field: "date".to_string(),
                message: format!("{} is outside the supported calendar range", date),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start: &str, end: &str) -> DutyWindow {
        DutyWindow::parse(start, end).unwrap()
    }

    #[test]
    fn test_parse_hh_mm() {
        let t = parse_clock_time("08:15").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(8, 15, 0).unwrap());
    }

    #[test]
    fn test_parse_hh_mm_ss_drops_seconds() {
        let t = parse_clock_time("23:45:30").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(23, 45, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for value in ["", "noon", "25:00", "12:61", "12-30"] {
            match parse_clock_time(value) {
                Err(EngineError::InvalidShiftTime { value: v }) => assert_eq!(v, value),
                other => panic!("expected InvalidShiftTime for {value:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_day_window() {
        let w = window("09:00", "17:00");
        assert_eq!(w.start_minute, 540);
        assert_eq!(w.duration_minutes, 480);
        assert!(!w.crosses_midnight);
        assert_eq!(w.duration_decimal(), Decimal::new(8, 0));
    }

    #[test]
    fn test_overnight_window() {
        let w = window("19:00", "07:00");
        assert!(w.crosses_midnight);
        assert_eq!(w.duration_minutes, 12 * 60);
        assert_eq!(w.end_minute(), 31 * 60);
    }

    #[test]
    fn test_equal_times_is_full_day() {
        let w = window("06:00", "06:00");
        assert!(w.crosses_midnight);
        assert_eq!(w.duration_minutes, MINUTES_PER_DAY);
    }

    #[test]
    fn test_end_at_midnight_crosses() {
        let w = window("16:00", "00:00");
        assert!(w.crosses_midnight);
        assert_eq!(w.duration_minutes, 8 * 60);
    }

    #[test]
    fn test_fractional_duration() {
        let w = window("07:00", "18:30");
        assert_eq!(w.duration_decimal(), Decimal::new(115, 1));
        assert!((w.duration_hours() - 11.5).abs() < 1e-12);
    }

    #[test]
    fn test_overlap_with_circadian_low() {
        assert_eq!(window("22:00", "06:00").overlap_hours(CIRCADIAN_LOW_WINDOW), 4.0);
        assert_eq!(window("09:00", "17:00").overlap_hours(CIRCADIAN_LOW_WINDOW), 0.0);
        assert_eq!(window("04:00", "12:00").overlap_hours(CIRCADIAN_LOW_WINDOW), 2.0);
        assert_eq!(window("00:00", "03:00").overlap_hours(CIRCADIAN_LOW_WINDOW), 1.0);
    }

    #[test]
    fn test_overlap_with_wrapping_night_window() {
        assert_eq!(window("19:00", "07:00").overlap_hours(NIGHT_WINDOW), 7.0);
        assert_eq!(window("21:00", "23:30").overlap_hours(NIGHT_WINDOW), 0.5);
        assert_eq!(window("05:00", "13:00").overlap_hours(NIGHT_WINDOW), 1.0);
        assert_eq!(window("07:00", "19:00").overlap_hours(NIGHT_WINDOW), 0.0);
    }

    #[test]
    fn test_overlap_on_later_days() {
        // Same window shifted by whole days gives the same overlap.
        let w = window("22:00", "06:00");
        let base = w.start_minute + 3 * MINUTES_PER_DAY;
        assert_eq!(
            CIRCADIAN_LOW_WINDOW.overlap_minutes(base, base + w.duration_minutes),
            240
        );
    }

    #[test]
    fn test_on_date_anchors_overnight_end_next_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let (start, end) = window("22:00", "06:00").on_date(date).unwrap();
        assert_eq!(start.to_string(), "2024-01-10 22:00:00");
        assert_eq!(end.to_string(), "2024-01-11 06:00:00");
    }

    #[test]
    fn test_on_date_past_calendar_end_is_an_error() {
        let overnight = window("22:00", "06:00");
        match overnight.on_date(NaiveDate::MAX) {
            Err(EngineError::InvalidParameter { field, .. }) => assert_eq!(field, "date"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
        assert!(window("08:00", "16:00").on_date(NaiveDate::MAX).is_ok());
    }
}
