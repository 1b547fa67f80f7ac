use crate::core::aggregator::aggregate;
use crate::core::labels::Language;
use crate::core::report::{ReportContext, ReportDocument};
use crate::errors::{AppError, AppResult};
use crate::models::period::first_of_month;
use crate::models::{DateRange, FilterSpec, Period, Summary, TimeRecord};
use crate::store::DataSet;
use chrono::NaiveDate;
use tracing::debug;

/// User-facing selection, before it is turned into a `FilterSpec`.
#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    pub period: Period,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub range: Option<DateRange>,
    pub days: Vec<NaiveDate>,
    pub user_id: Option<String>,
    pub client: Option<String>,
}

pub struct Report {
    pub records: Vec<TimeRecord>,
    pub summary: Summary,
    pub document: ReportDocument,
}

impl ReportQuery {
    /// Explicit bounds or picked days always mean a custom period.
    pub fn effective_period(&self) -> Period {
        if !self.days.is_empty() || self.range.is_some() || self.from.is_some() || self.to.is_some() {
            Period::Custom
        } else {
            self.period
        }
    }

    pub fn resolve_range(&self, today: NaiveDate) -> AppResult<DateRange> {
        let range = if let Some(r) = self.range {
            r
        } else if self.from.is_some() || self.to.is_some() {
            DateRange::new(
                self.from.unwrap_or_else(|| first_of_month(today)),
                self.to.unwrap_or(today),
            )
        } else {
            self.period
                .resolve(today)
                .unwrap_or_else(|| DateRange::new(first_of_month(today), today))
        };

        if !range.is_well_formed() {
            return Err(AppError::InvalidRange(format!(
                "start {} is after end {}",
                range.start, range.end
            )));
        }
        Ok(range)
    }

    pub fn to_filter(&self, today: NaiveDate) -> AppResult<FilterSpec> {
        Ok(FilterSpec {
            user_id: self.user_id.clone(),
            client_tag: self.client.clone().filter(|c| !c.is_empty()),
            date_range: self.resolve_range(today)?,
            explicit_days: self.days.iter().copied().collect(),
        })
    }
}

pub struct Core;

impl Core {
    /// Filter, summarize and lay out a report over the full data set.
    pub fn build_report(
        data: &DataSet,
        query: &ReportQuery,
        today: NaiveDate,
        language: Language,
    ) -> AppResult<Report> {
        let spec = query.to_filter(today)?;
        let (records, summary) = aggregate(&data.records, &spec);

        debug!(
            period = query.effective_period().as_str(),
            start = %spec.date_range.start,
            end = %spec.date_range.end,
            language = ?language,
            rows = records.len(),
            "report built"
        );

        let ctx = ReportContext {
            period: query.effective_period(),
            range: spec.date_range,
            user_label: spec.user_id.as_deref().map(|id| data.display_name(id)),
            client: spec.client_tag.clone(),
            generated_on: today,
            language,
        };
        let document = ReportDocument::build(&ctx, &summary, &records);

        Ok(Report {
            records,
            summary,
            document,
        })
    }
}
