mod common;
use common::{d, late, rec};
use timetracker::core::aggregator::{
    available_days, punctuality, unique_clients, workable_days,
};
use timetracker::core::profile::top_clients;
use timetracker::core::{aggregate, filter_records, summarize};
use timetracker::models::{DateRange, FilterSpec, Summary, TimeRecord};

fn april() -> FilterSpec {
    FilterSpec::for_range(DateRange::new(d(2024, 4, 1), d(2024, 4, 30)))
}

fn dataset() -> Vec<TimeRecord> {
    vec![
        rec("R1", "EMP001", d(2024, 4, 18), 555, Some("Cliente A")),
        rec("R2", "EMP001", d(2024, 4, 20), 555, Some("Cliente A")),
        rec("R3", "EMP002", d(2024, 4, 19), 540, Some("Cliente C")),
        rec("R4", "EMP001", d(2024, 4, 19), 555, Some("Cliente B")),
        rec("R5", "EMP002", d(2024, 4, 20), 540, None),
        rec("R6", "EMP001", d(2024, 5, 2), 480, Some("Cliente A")),
    ]
}

fn ids(records: &[TimeRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_filter_is_idempotent() {
    let spec = april().with_user("EMP001");
    let once = filter_records(&dataset(), &spec);
    let twice = filter_records(&once, &spec);
    assert_eq!(once, twice);
}

#[test]
fn test_filter_sorts_descending_and_keeps_ties_in_input_order() {
    let out = filter_records(&dataset(), &april());
    assert_eq!(ids(&out), vec!["R2", "R5", "R3", "R4", "R1"]);
}

#[test]
fn test_filter_range_is_inclusive() {
    // neighbours on both sides: 17 April before, 20 April after
    let mut records = dataset();
    records.push(rec("R0", "EMP001", d(2024, 4, 17), 480, Some("Cliente A")));

    let spec = FilterSpec::for_range(DateRange::new(d(2024, 4, 18), d(2024, 4, 19)));
    let out = filter_records(&records, &spec);
    assert_eq!(ids(&out), vec!["R3", "R4", "R1"]);
    assert!(out.iter().all(|r| r.date != d(2024, 4, 17) && r.date != d(2024, 4, 20)));

    let single = FilterSpec::for_range(DateRange::single(d(2024, 5, 2)));
    assert_eq!(ids(&filter_records(&dataset(), &single)), vec!["R6"]);
}

#[test]
fn test_explicit_days_override_range() {
    // the range excludes May, the picked day does not
    let spec = april().with_days([d(2024, 5, 2), d(2024, 4, 18)]);
    let out = filter_records(&dataset(), &spec);
    assert_eq!(ids(&out), vec!["R6", "R1"]);

    let summary = summarize(&out, &spec);
    assert_eq!(summary.total_workable_days, 2);
}

#[test]
fn test_filter_by_user_and_client() {
    let spec = april().with_user("EMP001").with_client("Cliente A");
    assert_eq!(ids(&filter_records(&dataset(), &spec)), vec!["R2", "R1"]);

    let spec = april().with_client("Nobody");
    assert!(filter_records(&dataset(), &spec).is_empty());
}

#[test]
fn test_filter_leaves_input_untouched() {
    let input = dataset();
    let before = input.clone();
    let _ = filter_records(&input, &april().with_user("EMP002"));
    assert_eq!(input, before);
}

#[test]
fn test_empty_input_gives_zero_summary() {
    let (rows, summary) = aggregate(&[], &april());
    assert!(rows.is_empty());
    assert_eq!(summary, Summary::ZERO);
    assert_eq!(summary.punctuality_percent, 100);
    assert_eq!(summary.total_workable_days, 0);
}

#[test]
fn test_overtime_counts_minutes_beyond_standard_days() {
    let records = vec![
        rec("A", "U", d(2024, 4, 15), 600, None),
        rec("B", "U", d(2024, 4, 16), 500, None),
    ];
    let (_, s) = aggregate(&records, &april());
    assert_eq!(s.total_minutes, 1100);
    assert_eq!(s.unique_days_worked, 2);
    assert_eq!(s.overtime_minutes, 140);
}

#[test]
fn test_overtime_never_negative() {
    let records = vec![rec("A", "U", d(2024, 4, 15), 300, None)];
    let (_, s) = aggregate(&records, &april());
    assert_eq!(s.overtime_minutes, 0);
}

#[test]
fn test_punctuality_one_late_day_out_of_four() {
    let records = vec![
        late(rec("A", "U", d(2024, 4, 15), 480, None)),
        rec("B", "U", d(2024, 4, 16), 480, None),
        rec("C", "U", d(2024, 4, 17), 480, None),
        rec("D", "U", d(2024, 4, 18), 480, None),
    ];
    let (_, s) = aggregate(&records, &april());
    assert_eq!(s.late_arrival_count, 1);
    assert_eq!(s.punctuality_percent, 75);
}

#[test]
fn test_punctuality_rounds_half_up_and_is_not_clamped() {
    assert_eq!(punctuality(3, 1), 67);
    assert_eq!(punctuality(8, 1), 88); // 87.5
    assert_eq!(punctuality(0, 0), 100);
    // two late records on the only day worked
    assert_eq!(punctuality(1, 2), -100);
}

#[test]
fn test_missing_total_counts_as_zero() {
    let mut open = rec("A", "U", d(2024, 4, 15), 0, None);
    open.total_work_time = None;
    open.end_time = None;
    let (rows, s) = aggregate(&[open], &april());
    assert_eq!(rows.len(), 1);
    assert_eq!(s.total_minutes, 0);
    assert_eq!(s.unique_days_worked, 1);
}

#[test]
fn test_workable_days_skip_weekends() {
    // Monday 15 .. Sunday 21 April 2024
    let week = DateRange::new(d(2024, 4, 15), d(2024, 4, 21));
    assert_eq!(workable_days(&week), 5);

    let april = DateRange::new(d(2024, 4, 1), d(2024, 4, 30));
    assert_eq!(workable_days(&april), 22);

    let weekend = DateRange::new(d(2024, 4, 20), d(2024, 4, 21));
    assert_eq!(workable_days(&weekend), 0);
}

#[test]
fn test_available_days_lists_every_day() {
    let r = DateRange::new(d(2024, 2, 27), d(2024, 3, 2));
    let days = available_days(&r);
    assert_eq!(days.len(), 5);
    assert_eq!(days.first(), Some(&d(2024, 2, 27)));
    assert_eq!(days.last(), Some(&d(2024, 3, 2)));

    let reversed = DateRange::new(d(2024, 3, 2), d(2024, 2, 27));
    assert!(available_days(&reversed).is_empty());
}

#[test]
fn test_unique_clients_sorted_and_deduplicated() {
    let mut records = dataset();
    records.push(rec("R7", "EMP003", d(2024, 4, 22), 60, Some("  ")));
    assert_eq!(
        unique_clients(&records),
        vec!["Cliente A", "Cliente B", "Cliente C"]
    );
}

#[test]
fn test_top_clients_rank_by_minutes_then_name() {
    let records = vec![
        rec("1", "U", d(2024, 4, 15), 100, Some("Zeta")),
        rec("2", "U", d(2024, 4, 16), 300, Some("Beta")),
        rec("3", "U", d(2024, 4, 17), 300, Some("Alfa")),
        rec("4", "U", d(2024, 4, 18), 50, Some("Zeta")),
    ];
    assert_eq!(top_clients(&records, 2), vec!["Alfa", "Beta"]);
    assert_eq!(top_clients(&records, 5), vec!["Alfa", "Beta", "Zeta"]);
}
