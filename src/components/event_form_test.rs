use super::*;

use chrono::NaiveDate;

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 9, 4)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

// =============================================================
// Coordinates
// =============================================================

#[test]
fn coordinates_accept_decimal_pair() {
    let (lat, lng) = validate_coordinates("-33.4489", "-70.6693").unwrap();
    assert_eq!(lat, -33.4489);
    assert_eq!(lng, -70.6693);
}

#[test]
fn coordinates_tolerate_surrounding_whitespace() {
    assert!(validate_coordinates(" -33.45 ", " -70.66 ").is_ok());
}

#[test]
fn coordinates_reject_blank_or_garbage() {
    assert!(validate_coordinates("", "-70.66").is_err());
    assert!(validate_coordinates("-33.45", "").is_err());
    assert!(validate_coordinates("plaza", "italia").is_err());
}

// =============================================================
// Price
// =============================================================

#[test]
fn price_accepts_bounds() {
    assert!(validate_price(0).is_ok());
    assert!(validate_price(10_000).is_ok());
}

#[test]
fn price_rejects_out_of_range() {
    assert!(validate_price(-1).is_err());
    assert!(validate_price(10_001).is_err());
}

// =============================================================
// Start time
// =============================================================

#[test]
fn start_time_accepts_exactly_four_hours_ahead() {
    assert!(validate_start_time("2026-09-04T13:00", at(9, 0)).is_ok());
}

#[test]
fn start_time_rejects_shorter_lead() {
    assert!(validate_start_time("2026-09-04T12:59", at(9, 0)).is_err());
}

#[test]
fn start_time_rejects_past_values() {
    assert!(validate_start_time("2026-09-04T08:00", at(9, 0)).is_err());
}

#[test]
fn start_time_rejects_unparseable_input() {
    assert!(validate_start_time("", at(9, 0)).is_err());
    assert!(validate_start_time("mañana", at(9, 0)).is_err());
}

#[test]
fn start_time_accepts_seconds_in_value() {
    assert!(validate_start_time("2026-09-05T09:00:00", at(9, 0)).is_ok());
}

// =============================================================
// Participant cap and catalog
// =============================================================

#[test]
fn participant_cap_clamps_to_valid_range() {
    assert_eq!(clamp_max_participants(0), 1);
    assert_eq!(clamp_max_participants(10), 10);
    assert_eq!(clamp_max_participants(500), 100);
}

#[test]
fn group_catalog_lists_six_sports() {
    assert_eq!(GROUP_OPTIONS.len(), 6);
    let ids: Vec<i64> = GROUP_OPTIONS.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}
