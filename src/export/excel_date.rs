// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Days since the Excel epoch (1899-12-30).
pub(crate) fn date_to_excel_serial(d: &NaiveDate) -> f64 {
    match NaiveDate::from_ymd_opt(1899, 12, 30) {
        Some(epoch) => (*d - epoch).num_days() as f64,
        None => 0.0,
    }
}

/// Detail-table columns holding clock times (start, end).
pub const TIME_COLUMNS: [usize; 2] = [1, 2];

/// Interpret an `HH:MM` cell as an Excel time-of-day fraction.
pub(crate) fn parse_excel_time(s: &str) -> Option<f64> {
    let t = NaiveTime::parse_from_str(s, "%H:%M").ok()?;
    Some(t.num_seconds_from_midnight() as f64 / 86400.0)
}

/// Excel time for a detail cell, only in the clock-time columns; free text
/// such as a client tag stays text even when it looks like `HH:MM`.
pub fn time_cell_serial(col: usize, s: &str) -> Option<f64> {
    if TIME_COLUMNS.contains(&col) {
        parse_excel_time(s)
    } else {
        None
    }
}
