// src/core/range.rs

use crate::errors::{AppError, AppResult};
use crate::models::DateRange;
use chrono::{Datelike, NaiveDate};

/// Parse a `--range` expression (year / month / day / interval).
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<DateRange> {
    let r = r.trim();

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(invalid(r, "start and end must have same format"));
        }

        let (from, _) = bounds_of(start).ok_or_else(|| invalid(r, "invalid start"))?;
        let (_, to) = bounds_of(end).ok_or_else(|| invalid(r, "invalid end"))?;

        if from > to {
            return Err(invalid(r, "start is after end"));
        }
        Ok(DateRange::new(from, to))
    } else {
        let (from, to) = bounds_of(r).ok_or_else(|| invalid(r, "unsupported format"))?;
        Ok(DateRange::new(from, to))
    }
}

/// First and last day covered by a single YYYY / YYYY-MM / YYYY-MM-DD token.
fn bounds_of(token: &str) -> Option<(NaiveDate, NaiveDate)> {
    match token.len() {
        // YYYY
        4 => {
            let y: i32 = token.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{token}-01"), "%Y-%m-%d").ok()?;
            Some((first, last_day_of_month(first)?))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(token, "%Y-%m-%d").ok()?;
            Some((d, d))
        }
        _ => None,
    }
}

pub fn last_day_of_month(day: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if day.month() == 12 {
        (day.year() + 1, 1)
    } else {
        (day.year(), day.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}

fn invalid(expr: &str, why: &str) -> AppError {
    AppError::InvalidRange(format!("'{expr}': {why}"))
}
