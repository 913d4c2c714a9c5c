use super::*;
use chrono::Weekday;

#[test]
fn month_grid_always_has_six_weeks() {
    // February 2027 starts on a Monday and has 28 days.
    assert_eq!(month_grid(2027, 2).len(), 42);
    // August 2026 spans six calendar rows.
    assert_eq!(month_grid(2026, 8).len(), 42);
}

#[test]
fn month_grid_starts_on_the_monday_before_the_first() {
    // 1 August 2026 is a Saturday; the grid starts on Monday 27 July.
    let grid = month_grid(2026, 8);
    assert_eq!(grid[0], NaiveDate::from_ymd_opt(2026, 7, 27).unwrap());
    assert_eq!(grid[0].weekday(), Weekday::Mon);
}

#[test]
fn month_grid_starts_on_the_first_when_it_is_a_monday() {
    // 1 February 2027 is a Monday.
    let grid = month_grid(2027, 2);
    assert_eq!(grid[0], NaiveDate::from_ymd_opt(2027, 2, 1).unwrap());
}

#[test]
fn month_grid_every_row_starts_monday() {
    let grid = month_grid(2026, 9);
    for row in grid.chunks(7) {
        assert_eq!(row[0].weekday(), Weekday::Mon);
    }
}

#[test]
fn month_grid_rejects_invalid_month() {
    assert!(month_grid(2026, 13).is_empty());
    assert!(month_grid(2026, 0).is_empty());
}

#[test]
fn in_month_separates_fill_cells() {
    let grid = month_grid(2026, 8);
    // First cell is July fill, last row contains September fill.
    assert!(!in_month(grid[0], 2026, 8));
    assert!(in_month(NaiveDate::from_ymd_opt(2026, 8, 15).unwrap(), 2026, 8));
    assert!(!in_month(NaiveDate::from_ymd_opt(2026, 9, 2).unwrap(), 2026, 8));
}

#[test]
fn prev_month_wraps_january_to_december() {
    assert_eq!(prev_month(2026, 1), (2025, 12));
    assert_eq!(prev_month(2026, 7), (2026, 6));
}

#[test]
fn next_month_wraps_december_to_january() {
    assert_eq!(next_month(2026, 12), (2027, 1));
    assert_eq!(next_month(2026, 7), (2026, 8));
}
