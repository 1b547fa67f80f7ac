//! Structured report payload shared by the terminal view and every exporter.

use crate::core::labels::Language;
use crate::models::{DateRange, Period, Summary, TimeRecord};
use crate::utils::formatting::{minutes_to_hm, percent};
use crate::utils::time::format_time;
use chrono::NaiveDate;
use serde::Serialize;

/// Everything about the selection that ends up in the report header.
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub period: Period,
    pub range: DateRange,
    /// Display name of the filtered user; `None` means all users.
    pub user_label: Option<String>,
    pub client: Option<String>,
    pub generated_on: NaiveDate,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub id: String,
    pub date: NaiveDate,
    pub date_label: String,
    pub start: String,
    pub end: String,
    pub total: String,
    pub client: String,
    pub status: String,
}

impl ReportRow {
    /// Cells in column order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.date_label.clone(),
            self.start.clone(),
            self.end.clone(),
            self.total.clone(),
            self.client.clone(),
            self.status.clone(),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub title: String,
    pub filters: Vec<String>,
    pub summary_title: String,
    pub summary: Vec<SummaryLine>,
    pub metrics: Summary,
    pub details_title: String,
    pub columns: Vec<String>,
    pub rows: Vec<ReportRow>,
}

impl ReportDocument {
    pub fn build(ctx: &ReportContext, summary: &Summary, records: &[TimeRecord]) -> Self {
        let lang = ctx.language;
        let l = lang.labels();

        let mut filters = vec![
            format!("{}: {}", l.period, lang.period_name(ctx.period)),
            format!(
                "{}: {} - {}",
                l.dates,
                lang.short_date(&ctx.range.start),
                lang.short_date(&ctx.range.end)
            ),
            format!(
                "{}: {}",
                l.user,
                ctx.user_label.as_deref().unwrap_or(l.all_users)
            ),
        ];
        if let Some(client) = &ctx.client {
            filters.push(format!("{}: {}", l.client, client));
        }

        let summary_lines = vec![
            line(l.hours_worked, minutes_to_hm(summary.total_minutes)),
            line(
                l.days_worked,
                format!(
                    "{} / {}",
                    summary.unique_days_worked, summary.total_workable_days
                ),
            ),
            line(l.punctuality, percent(summary.punctuality_percent)),
            line(l.overtime, minutes_to_hm(summary.overtime_minutes)),
        ];

        let rows = records
            .iter()
            .map(|r| ReportRow {
                id: r.id.clone(),
                date: r.date,
                date_label: lang.long_date(&r.date),
                start: format_time(&r.start_time),
                end: r
                    .end_time
                    .as_ref()
                    .map(format_time)
                    .unwrap_or_else(|| l.placeholder.to_string()),
                total: minutes_to_hm(r.worked_minutes()),
                client: r
                    .client_tag
                    .clone()
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| l.placeholder.to_string()),
                status: lang.status_name(r.status()).to_string(),
            })
            .collect();

        Self {
            title: format!(
                "{} - {}",
                l.report_title,
                lang.short_date(&ctx.generated_on)
            ),
            filters,
            summary_title: l.summary.to_string(),
            summary: summary_lines,
            metrics: *summary,
            details_title: l.details.to_string(),
            columns: l.columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    pub fn table(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(ReportRow::cells).collect()
    }

    /// Header lines above the table (filters + summary), as plain strings.
    pub fn preamble(&self) -> Vec<String> {
        let mut out = self.filters.clone();
        out.push(String::new());
        out.push(self.summary_title.clone());
        for s in &self.summary {
            out.push(format!("{}: {}", s.label, s.value));
        }
        out
    }
}

fn line(label: &str, value: String) -> SummaryLine {
    SummaryLine {
        label: label.to_string(),
        value,
    }
}
