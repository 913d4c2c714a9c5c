//! Display formatting for timestamps, prices, and occupancy.
//!
//! The backend sends ISO-8601 timestamps as plain strings; everything here
//! parses on demand and falls back to the raw string when parsing fails so a
//! malformed row degrades visibly instead of crashing a render.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{Datelike, NaiveDateTime, Timelike};

const WEEKDAYS: [&str; 7] = [
    "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
];

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Parse a backend timestamp.
///
/// Accepts ISO-8601 with optional fractional seconds, plus the
/// `datetime-local` form without seconds.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// `HH:MM` display time, or the raw string when unparseable.
pub fn time_hhmm(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => format!("{:02}:{:02}", dt.hour(), dt.minute()),
        None => value.to_owned(),
    }
}

/// Long Spanish date line, e.g. `viernes 4 de septiembre de 2026, 19:30`.
pub fn date_line(value: &str) -> String {
    let Some(dt) = parse_timestamp(value) else {
        return value.to_owned();
    };
    let weekday = WEEKDAYS[dt.weekday().num_days_from_monday() as usize];
    let month = MONTHS[dt.month0() as usize];
    format!(
        "{weekday} {} de {month} de {}, {:02}:{:02}",
        dt.day(),
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}

/// Date-only Spanish line, e.g. `4 de septiembre de 2026`.
pub fn date_only(value: &str) -> String {
    let Some(dt) = parse_timestamp(value) else {
        return value.to_owned();
    };
    let month = MONTHS[dt.month0() as usize];
    format!("{} de {month} de {}", dt.day(), dt.year())
}

/// Calendar header title, e.g. `Septiembre 2026`.
pub fn month_title(year: i32, month: u32) -> String {
    let name = MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or_default();
    let mut chars = name.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    format!("{capitalized} {year}")
}

/// Price label: zero renders as free.
pub fn price_label(precio: i64) -> String {
    if precio == 0 {
        "Gratis".to_owned()
    } else {
        format!("${precio}")
    }
}

/// Occupancy label in the server's `current / max` form.
pub fn occupancy_label(inscritos: i64, max_participantes: i64) -> String {
    format!("{inscritos} / {max_participantes}")
}

/// Uppercased first letter of a display name, for avatar placeholders.
pub fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|first| first.to_uppercase().collect())
        .unwrap_or_default()
}
