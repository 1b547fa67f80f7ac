//! Label sets for reports. The Spanish set reproduces the legacy dashboard
//! exports character for character.

use crate::models::{Period, RecordStatus};
use chrono::{Datelike, NaiveDate, Weekday};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

pub struct Labels {
    pub report_title: &'static str,
    pub period: &'static str,
    pub dates: &'static str,
    pub user: &'static str,
    pub all_users: &'static str,
    pub client: &'static str,
    pub summary: &'static str,
    pub hours_worked: &'static str,
    pub days_worked: &'static str,
    pub punctuality: &'static str,
    pub overtime: &'static str,
    pub details: &'static str,
    pub columns: [&'static str; 6],
    pub placeholder: &'static str,
    pub no_records: &'static str,
}

const EN: Labels = Labels {
    report_title: "Time Report",
    period: "Period",
    dates: "Dates",
    user: "User",
    all_users: "All",
    client: "Client",
    summary: "Summary",
    hours_worked: "Hours Worked",
    days_worked: "Days Worked",
    punctuality: "Punctuality",
    overtime: "Overtime",
    details: "Record Details",
    columns: ["Date", "Start", "End", "Total", "Client", "Status"],
    placeholder: "-",
    no_records: "No records match the selected filters.",
};

const ES: Labels = Labels {
    report_title: "Informe de Tiempo",
    period: "Período",
    dates: "Fechas",
    user: "Usuario",
    all_users: "Todos",
    client: "Cliente",
    summary: "Resumen",
    hours_worked: "Horas Trabajadas",
    days_worked: "Días Trabajados",
    punctuality: "Puntualidad",
    overtime: "Horas Extra",
    details: "Detalles de Registros",
    columns: ["Fecha", "Entrada", "Salida", "Total", "Cliente", "Estado"],
    placeholder: "-",
    no_records: "No hay registros que coincidan con los filtros seleccionados.",
};

impl Language {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Language::En => &EN,
            Language::Es => &ES,
        }
    }

    pub fn period_name(&self, period: Period) -> &'static str {
        match (self, period) {
            (Language::En, Period::Day) => "Day",
            (Language::En, Period::Week) => "Week",
            (Language::En, Period::Month) => "Month",
            (Language::En, Period::Custom) => "Custom",
            (Language::Es, Period::Day) => "Día",
            (Language::Es, Period::Week) => "Semana",
            (Language::Es, Period::Month) => "Mes",
            (Language::Es, Period::Custom) => "Personalizado",
        }
    }

    pub fn status_name(&self, status: RecordStatus) -> &'static str {
        match (self, status) {
            (Language::En, RecordStatus::Completed) => "Completed",
            (Language::En, RecordStatus::LateArrival) => "Late arrival",
            (Language::En, RecordStatus::EarlyDeparture) => "Early departure",
            (Language::Es, RecordStatus::Completed) => "Completado",
            (Language::Es, RecordStatus::LateArrival) => "Llegada tarde",
            (Language::Es, RecordStatus::EarlyDeparture) => "Salida anticipada",
        }
    }

    /// Numeric date: `4/20/2024` (en), `20/4/2024` (es).
    pub fn short_date(&self, day: &NaiveDate) -> String {
        match self {
            Language::En => day.format("%-m/%-d/%Y").to_string(),
            Language::Es => day.format("%-d/%-m/%Y").to_string(),
        }
    }

    /// Date cell of the detail table: `Saturday, Apr 20` / `sábado, 20 abr`.
    pub fn long_date(&self, day: &NaiveDate) -> String {
        match self {
            Language::En => day.format("%A, %b %-d").to_string(),
            Language::Es => format!(
                "{}, {} {}",
                weekday_es(day.weekday()),
                day.day(),
                month_short_es(day.month())
            ),
        }
    }
}

fn weekday_es(w: Weekday) -> &'static str {
    match w {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

fn month_short_es(m: u32) -> &'static str {
    match m {
        1 => "ene",
        2 => "feb",
        3 => "mar",
        4 => "abr",
        5 => "may",
        6 => "jun",
        7 => "jul",
        8 => "ago",
        9 => "sept",
        10 => "oct",
        11 => "nov",
        _ => "dic",
    }
}
