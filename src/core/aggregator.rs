//! Report aggregation: filtering, ordering and summary metrics over a
//! caller-owned slice of time records. Every function here is pure.

use crate::models::{DateRange, FilterSpec, Summary, TimeRecord};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Length of a standard working day.
pub const STANDARD_DAY_MINUTES: u64 = 8 * 60;

/// Keep the records matching `spec`, most recent first.
///
/// Equal dates keep their input order. The input slice is never touched, so
/// re-running with a new spec must always start from the full record set.
pub fn filter_records(records: &[TimeRecord], spec: &FilterSpec) -> Vec<TimeRecord> {
    let mut out: Vec<TimeRecord> = records
        .iter()
        .filter(|r| spec.user_id.as_ref().is_none_or(|u| &r.user_id == u))
        .filter(|r| {
            spec.client_tag
                .as_ref()
                .is_none_or(|c| r.client_tag.as_ref() == Some(c))
        })
        .filter(|r| spec.selects_date(&r.date))
        .cloned()
        .collect();

    // stable
    out.sort_by(|a, b| b.date.cmp(&a.date));

    debug!(
        total = records.len(),
        kept = out.len(),
        explicit_days = spec.explicit_days.len(),
        "records filtered"
    );
    out
}

/// Summary metrics for an already filtered record set.
pub fn summarize(filtered: &[TimeRecord], spec: &FilterSpec) -> Summary {
    if filtered.is_empty() {
        return Summary::ZERO;
    }

    let unique_days_worked = filtered
        .iter()
        .map(|r| r.date)
        .collect::<HashSet<NaiveDate>>()
        .len();

    let total_workable_days = if spec.uses_explicit_days() {
        spec.explicit_days.len()
    } else {
        workable_days(&spec.date_range)
    };

    let total_minutes: u64 = filtered.iter().map(TimeRecord::worked_minutes).sum();

    let late_arrival_count = filtered.iter().filter(|r| r.used_entry_tolerance).count();

    let baseline = unique_days_worked as u64 * STANDARD_DAY_MINUTES;
    let overtime_minutes = total_minutes.saturating_sub(baseline);

    Summary {
        total_minutes,
        unique_days_worked,
        total_workable_days,
        punctuality_percent: punctuality(unique_days_worked, late_arrival_count),
        late_arrival_count,
        overtime_minutes,
    }
}

/// `filter_records` followed by `summarize`.
pub fn aggregate(records: &[TimeRecord], spec: &FilterSpec) -> (Vec<TimeRecord>, Summary) {
    let filtered = filter_records(records, spec);
    let summary = summarize(&filtered, spec);
    (filtered, summary)
}

/// Share of worked days without a late arrival, rounded half-up.
///
/// Late arrivals are counted per record, not per day, so the result may
/// leave the 0..=100 range when a day carries more than one late record.
pub fn punctuality(unique_days: usize, late_arrivals: usize) -> i64 {
    if unique_days == 0 {
        return 100;
    }
    let on_time = unique_days as f64 - late_arrivals as f64;
    (on_time / unique_days as f64 * 100.0 + 0.5).floor() as i64
}

/// Monday..=Friday dates inside the inclusive range.
pub fn workable_days(range: &DateRange) -> usize {
    range.days().filter(|d| is_weekday(d)).count()
}

pub fn is_weekday(day: &NaiveDate) -> bool {
    !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Every day of the range, for picking explicit days.
pub fn available_days(range: &DateRange) -> Vec<NaiveDate> {
    range.days().collect()
}

/// Distinct client tags in ascending order; untagged records are skipped.
pub fn unique_clients(records: &[TimeRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.client_tag.clone())
        .filter(|c| !c.trim().is_empty())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
