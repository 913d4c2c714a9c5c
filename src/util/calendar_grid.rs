//! Month-grid arithmetic for the calendar view.
//!
//! DESIGN
//! ======
//! The grid is always six rows of seven days starting on Monday, so a month
//! render never reflows. Leading and trailing cells come from the adjacent
//! months and are styled muted by the component.

#[cfg(test)]
#[path = "calendar_grid_test.rs"]
mod calendar_grid_test;

use chrono::{Datelike, Days, NaiveDate};

/// Number of cells in the month grid.
pub const GRID_DAYS: u64 = 42;

/// The 42 days shown for a month, Monday-first.
///
/// An invalid year/month pair yields an empty grid.
pub fn month_grid(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let offset = u64::from(first.weekday().num_days_from_monday());
    let Some(start) = first.checked_sub_days(Days::new(offset)) else {
        return Vec::new();
    };
    (0..GRID_DAYS)
        .filter_map(|day| start.checked_add_days(Days::new(day)))
        .collect()
}

/// Whether a grid cell belongs to the displayed month.
pub fn in_month(day: NaiveDate, year: i32, month: u32) -> bool {
    day.year() == year && day.month() == month
}

/// Year/month one month earlier, wrapping over January.
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

/// Year/month one month later, wrapping over December.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}
