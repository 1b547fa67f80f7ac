mod common;
use common::d;
use timetracker::core::range::{last_day_of_month, parse_range};
use timetracker::core::{Core, Language, ReportQuery};
use timetracker::export::render_text;
use timetracker::models::{DateRange, Period};
use timetracker::store::{DataSet, sample_dataset};

fn april_query() -> ReportQuery {
    ReportQuery {
        from: Some(d(2024, 4, 1)),
        to: Some(d(2024, 4, 30)),
        ..ReportQuery::default()
    }
}

#[test]
fn test_spanish_text_matches_legacy_layout() {
    let report =
        Core::build_report(&sample_dataset(), &april_query(), d(2024, 4, 20), Language::Es)
            .expect("build report");

    let expected = "\
Informe de Tiempo - 20/4/2024

Período: Personalizado
Fechas: 1/4/2024 - 30/4/2024
Usuario: Todos

Resumen:
- Horas Trabajadas: 45h 45m
- Días Trabajados: 3 / 22
- Puntualidad: 67%
- Horas Extra: 21h 45m

Detalles de Registros:
Fecha | Entrada | Salida | Total | Cliente | Estado
------|---------|--------|-------|---------|-------
sábado, 20 abr | 08:30 | 17:45 | 9h 15m | Cliente A | Completado
sábado, 20 abr | 08:30 | 17:30 | 9h 00m | Cliente C | Completado
viernes, 19 abr | 08:15 | 17:30 | 9h 15m | Cliente B | Completado
viernes, 19 abr | 08:30 | 17:30 | 9h 00m | Cliente C | Completado
jueves, 18 abr | 08:45 | 18:00 | 9h 15m | Cliente A | Llegada tarde
";

    assert_eq!(render_text(&report.document), expected);
}

#[test]
fn test_english_labels_and_user_name() {
    let query = ReportQuery {
        user_id: Some("EMP001".into()),
        client: Some("Cliente A".into()),
        ..april_query()
    };
    let report = Core::build_report(&sample_dataset(), &query, d(2024, 4, 20), Language::En)
        .expect("build report");
    let doc = &report.document;

    assert_eq!(doc.title, "Time Report - 4/20/2024");
    assert_eq!(
        doc.filters,
        vec![
            "Period: Custom",
            "Dates: 4/1/2024 - 4/30/2024",
            "User: Carlos Rodríguez",
            "Client: Cliente A",
        ]
    );
    assert_eq!(doc.columns, vec!["Date", "Start", "End", "Total", "Client", "Status"]);

    let first = &doc.rows[0];
    assert_eq!(first.date_label, "Saturday, Apr 20");
    assert_eq!(first.status, "Completed");
    assert_eq!(doc.rows[1].status, "Late arrival");
    assert_eq!(report.summary.total_minutes, 1110);
}

#[test]
fn test_open_record_and_untagged_show_placeholder() {
    let mut data: DataSet = sample_dataset();
    data.records[0].end_time = None;
    data.records[0].client_tag = None;

    let report = Core::build_report(&data, &april_query(), d(2024, 4, 20), Language::En)
        .expect("build report");
    let row = &report.document.rows[0];
    assert_eq!(row.id, "TR001");
    assert_eq!(row.end, "-");
    assert_eq!(row.client, "-");
}

#[test]
fn test_unknown_user_label_falls_back_to_id() {
    let query = ReportQuery {
        user_id: Some("GHOST".into()),
        ..april_query()
    };
    let report = Core::build_report(&sample_dataset(), &query, d(2024, 4, 20), Language::En)
        .expect("build report");
    assert!(report.records.is_empty());
    assert!(report.document.filters.contains(&"User: GHOST".to_string()));
    assert_eq!(report.summary.punctuality_percent, 100);
}

#[test]
fn test_reversed_bounds_are_rejected() {
    let query = ReportQuery {
        from: Some(d(2024, 4, 30)),
        to: Some(d(2024, 4, 1)),
        ..ReportQuery::default()
    };
    assert!(Core::build_report(&sample_dataset(), &query, d(2024, 4, 20), Language::En).is_err());
}

#[test]
fn test_period_resolution() {
    let today = d(2024, 4, 20);
    assert_eq!(Period::Day.resolve(today), Some(DateRange::single(today)));
    assert_eq!(
        Period::Week.resolve(today),
        Some(DateRange::new(d(2024, 4, 13), today))
    );
    assert_eq!(
        Period::Month.resolve(today),
        Some(DateRange::new(d(2024, 4, 1), today))
    );
    assert_eq!(Period::Custom.resolve(today), None);
}

#[test]
fn test_explicit_bounds_imply_custom_period() {
    let q = ReportQuery {
        period: Period::Week,
        ..ReportQuery::default()
    };
    assert_eq!(q.effective_period(), Period::Week);

    let q = ReportQuery {
        period: Period::Week,
        days: vec![d(2024, 4, 18)],
        ..ReportQuery::default()
    };
    assert_eq!(q.effective_period(), Period::Custom);

    // only `to`: the start falls back to the first of the month
    let q = ReportQuery {
        to: Some(d(2024, 4, 10)),
        ..ReportQuery::default()
    };
    assert_eq!(
        q.resolve_range(d(2024, 4, 20)).expect("range"),
        DateRange::new(d(2024, 4, 1), d(2024, 4, 10))
    );
}

#[test]
fn test_parse_range_forms() {
    assert_eq!(
        parse_range("2024").expect("year"),
        DateRange::new(d(2024, 1, 1), d(2024, 12, 31))
    );
    assert_eq!(
        parse_range("2024-02").expect("month"),
        DateRange::new(d(2024, 2, 1), d(2024, 2, 29))
    );
    assert_eq!(
        parse_range("2024-04-18").expect("day"),
        DateRange::single(d(2024, 4, 18))
    );
    assert_eq!(
        parse_range("2024-11:2025-01").expect("months"),
        DateRange::new(d(2024, 11, 1), d(2025, 1, 31))
    );
}

#[test]
fn test_parse_range_rejects_bad_input() {
    assert!(parse_range("2024-13").is_err());
    assert!(parse_range("2024:2024-05").is_err());
    assert!(parse_range("2024-05:2024-04").is_err());
    assert!(parse_range("last week").is_err());
}

#[test]
fn test_last_day_of_month_handles_december() {
    assert_eq!(last_day_of_month(d(2024, 12, 5)), Some(d(2024, 12, 31)));
    assert_eq!(last_day_of_month(d(2023, 2, 1)), Some(d(2023, 2, 28)));
}
