//! Demo data written by `timetracker init`.

use crate::models::{Employee, TimeRecord};
use crate::store::DataSet;
use chrono::{NaiveDate, NaiveTime};

pub fn sample_dataset() -> DataSet {
    DataSet {
        employees: sample_employees(),
        records: sample_records(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    user: &str,
    day: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    minutes: u32,
    client: &str,
    late: bool,
) -> TimeRecord {
    TimeRecord {
        end_time: Some(end),
        total_work_time: Some(minutes),
        client_tag: Some(client.to_string()),
        used_entry_tolerance: late,
        ..TimeRecord::new(id, user, day, start)
    }
}

pub fn sample_records() -> Vec<TimeRecord> {
    vec![
        record("TR001", "EMP001", date(2024, 4, 20), hm(8, 30), hm(17, 45), 555, "Cliente A", false),
        record("TR002", "EMP001", date(2024, 4, 19), hm(8, 15), hm(17, 30), 555, "Cliente B", false),
        record("TR003", "EMP001", date(2024, 4, 18), hm(8, 45), hm(18, 0), 555, "Cliente A", true),
        record("TR004", "EMP002", date(2024, 4, 20), hm(8, 30), hm(17, 30), 540, "Cliente C", false),
        record("TR005", "EMP002", date(2024, 4, 19), hm(8, 30), hm(17, 30), 540, "Cliente C", false),
    ]
}

pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: "EMP001".into(),
            name: "Carlos Rodríguez".into(),
            email: "carlos.rodriguez@magneticplace.com".into(),
            phone: Some("+34 612 345 678".into()),
            department: "Desarrollo".into(),
            position: "Desarrollador Senior".into(),
            join_date: date(2022, 3, 15),
            location: "Madrid".into(),
            tags: vec!["Proyecto A".into(), "Frontend".into()],
            work_schedule: "Lunes a Viernes, 9:00 - 18:00".into(),
            manager: Some("Javier López".into()),
        },
        Employee {
            id: "EMP002".into(),
            name: "Ana Martínez".into(),
            email: "ana.martinez@magneticplace.com".into(),
            phone: Some("+34 623 456 789".into()),
            department: "Diseño".into(),
            position: "Diseñadora UX/UI".into(),
            join_date: date(2022, 5, 20),
            location: "Barcelona".into(),
            tags: vec!["Proyecto B".into(), "Diseño".into()],
            work_schedule: "Lunes a Viernes, 9:30 - 18:30".into(),
            manager: Some("Carmen Ruiz".into()),
        },
        Employee {
            id: "EMP003".into(),
            name: "Miguel Sánchez".into(),
            email: "miguel.sanchez@magneticplace.com".into(),
            phone: None,
            department: "Ventas".into(),
            position: "Representante de Ventas".into(),
            join_date: date(2024, 1, 20),
            location: "Madrid".into(),
            tags: vec![],
            work_schedule: "Lunes a Viernes, 9:00 - 18:00".into(),
            manager: None,
        },
    ]
}
