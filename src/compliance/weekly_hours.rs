//! Rolling seven-day hours.
//!
//! A window is anchored at every distinct shift date and covers the anchor
//! plus the following six days. Hours are attributed to the date a shift
//! starts on. A window above the maximum is a breach; one at or above the
//! level-1 threshold is a warning tier. Overlapping offending windows of
//! the same tier are reported once, at the earliest anchor.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::config::ComplianceLimits;
use crate::models::{ComplianceViolation, Severity, ViolationType};
use crate::resolution::ResolvedShift;

use super::format_hours;

/// Days in a rolling window, anchor included.
pub const WINDOW_DAYS: i64 = 7;

/// Hours worked in one window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyWindow {
    /// First date of the window.
    pub anchor: NaiveDate,
    /// Last date of the window.
    pub end: NaiveDate,
    /// Duty hours of shifts starting inside the window.
    pub hours: Decimal,
    /// Dates inside the window with at least one shift.
    pub dates: Vec<NaiveDate>,
}

/// Last date of the window anchored at `anchor`. Windows are cut short at
/// the end of the calendar.
fn window_end(anchor: NaiveDate) -> NaiveDate {
    anchor
        .checked_add_signed(Duration::days(WINDOW_DAYS - 1))
        .unwrap_or(NaiveDate::MAX)
}

/// Builds the window for every distinct shift date. `shifts` must be sorted
/// by date.
///
/// Runs in one pass: the window sum grows as dates enter at the end and
/// shrinks as each anchor leaves.
pub fn weekly_windows(shifts: &[ResolvedShift]) -> Vec<WeeklyWindow> {
    let days: Vec<(NaiveDate, Decimal)> = shifts
        .chunk_by(|a, b| a.date == b.date)
        .map(|same_date| {
            let hours: Decimal = same_date.iter().map(ResolvedShift::duty_hours).sum();
            (same_date[0].date, hours)
        })
        .collect();

    let mut windows = Vec::with_capacity(days.len());
    let mut hours = Decimal::ZERO;
    let mut next = 0;

    for (first, &(anchor, anchor_hours)) in days.iter().enumerate() {
        let end = window_end(anchor);
        while next < days.len() && days[next].0 <= end {
            hours += days[next].1;
            next += 1;
        }

        windows.push(WeeklyWindow {
            anchor,
            end,
            hours,
            dates: days[first..next].iter().map(|(date, _)| *date).collect(),
        });
        hours -= anchor_hours;
    }

    windows
}

/// Flags windows at or above the level-1 threshold or above the maximum.
pub fn check_weekly_hours(
    employee_id: &str,
    shifts: &[ResolvedShift],
    limits: &ComplianceLimits,
) -> Vec<ComplianceViolation> {
    let mut violations = Vec::new();
    let mut last_breach_end: Option<NaiveDate> = None;
    let mut last_level1_end: Option<NaiveDate> = None;

    for window in weekly_windows(shifts) {
        let (violation_type, severity, last_end, message) = if window.hours > limits.max_weekly_hours {
            (
                ViolationType::MaxWeeklyHours,
                Severity::Breach,
                &mut last_breach_end,
                format!(
                    "{} hours in 7 days ({} to {}) exceeds the {} hour maximum",
                    format_hours(window.hours),
                    window.anchor,
                    window.end,
                    format_hours(limits.max_weekly_hours)
                ),
            )
        } else if window.hours >= limits.weekly_hours_level1 {
            (
                ViolationType::ApproachingWeeklyLimit,
                Severity::Level1,
                &mut last_level1_end,
                format!(
                    "{} hours in 7 days ({} to {}) is approaching the {} hour maximum",
                    format_hours(window.hours),
                    window.anchor,
                    window.end,
                    format_hours(limits.max_weekly_hours)
                ),
            )
        } else {
            continue;
        };

        if last_end.is_some_and(|end| window.anchor <= end) {
            continue;
        }
        *last_end = Some(window.end);

        let related = window
            .dates
            .iter()
            .copied()
            .filter(|d| *d != window.anchor)
            .collect();
        violations.push(
            ComplianceViolation::new(violation_type, severity, employee_id, window.anchor, message)
                .with_window_end(window.end)
                .with_related_dates(related),
        );
    }

    violations
}
