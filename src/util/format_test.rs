use super::*;

// =============================================================
// Timestamp parsing
// =============================================================

#[test]
fn parse_timestamp_accepts_full_iso() {
    let dt = parse_timestamp("2026-09-04T19:30:00").unwrap();
    assert_eq!(dt.hour(), 19);
    assert_eq!(dt.minute(), 30);
}

#[test]
fn parse_timestamp_accepts_fractional_seconds() {
    let dt = parse_timestamp("2026-09-04T19:30:00.123456").unwrap();
    assert_eq!(dt.second(), 0);
}

#[test]
fn parse_timestamp_accepts_datetime_local_form() {
    let dt = parse_timestamp("2026-09-04T19:30").unwrap();
    assert_eq!(dt.day(), 4);
}

#[test]
fn parse_timestamp_rejects_garbage() {
    assert!(parse_timestamp("mañana").is_none());
    assert!(parse_timestamp("").is_none());
}

// =============================================================
// Display strings
// =============================================================

#[test]
fn time_hhmm_formats_and_pads() {
    assert_eq!(time_hhmm("2026-09-04T09:05:00"), "09:05");
    assert_eq!(time_hhmm("2026-09-04T19:30:00"), "19:30");
}

#[test]
fn time_hhmm_falls_back_to_raw_value() {
    assert_eq!(time_hhmm("???"), "???");
}

#[test]
fn date_line_renders_spanish_weekday_and_month() {
    // 4 September 2026 is a Friday.
    assert_eq!(
        date_line("2026-09-04T19:30:00"),
        "viernes 4 de septiembre de 2026, 19:30"
    );
}

#[test]
fn date_only_drops_the_time() {
    assert_eq!(date_only("2026-09-04T19:30:00"), "4 de septiembre de 2026");
}

#[test]
fn month_title_capitalizes_month_name() {
    assert_eq!(month_title(2026, 9), "Septiembre 2026");
    assert_eq!(month_title(2027, 1), "Enero 2027");
}

#[test]
fn price_label_renders_zero_as_free() {
    assert_eq!(price_label(0), "Gratis");
    assert_eq!(price_label(1500), "$1500");
}

#[test]
fn occupancy_label_uses_server_spacing() {
    assert_eq!(occupancy_label(3, 8), "3 / 8");
}

#[test]
fn avatar_initial_uppercases_first_letter() {
    assert_eq!(avatar_initial("ana"), "A");
    assert_eq!(avatar_initial("Ñandú"), "Ñ");
    assert_eq!(avatar_initial(""), "");
}
