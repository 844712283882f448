//! Compliance rules for an employee's assignment history.
//!
//! Each rule lives in its own module and runs independently over the
//! resolved, date-sorted shifts. [`check_compliance`] runs them all and
//! collects the violations without merging them.

mod checker;
mod consecutive;
mod fatigue_index;
mod rest_period;
mod same_day;
mod shift_length;
mod weekly_hours;

pub use checker::check_compliance;
pub use consecutive::{check_consecutive_days, check_consecutive_nights, consecutive_runs};
pub use fatigue_index::check_fatigue_scores;
pub use rest_period::check_rest_periods;
pub use same_day::check_same_day;
pub use shift_length::{check_duty_with_commute, check_shift_length};
pub use weekly_hours::{WINDOW_DAYS, WeeklyWindow, check_weekly_hours, weekly_windows};

use rust_decimal::Decimal;

/// Hours for messages, without trailing zeros.
fn format_hours(hours: Decimal) -> String {
    hours.normalize().to_string()
}
