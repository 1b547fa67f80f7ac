use crate::models::filter::DateRange;
use chrono::{Datelike, Duration, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Reporting period picked by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    #[default]
    Month,
    Custom,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Custom => "custom",
        }
    }

    /// Range implied by the period, ending today.
    /// `Custom` has none: the caller supplies its own bounds.
    pub fn resolve(&self, today: NaiveDate) -> Option<DateRange> {
        match self {
            Period::Day => Some(DateRange::single(today)),
            Period::Week => Some(DateRange::new(today - Duration::days(7), today)),
            Period::Month => Some(DateRange::new(first_of_month(today), today)),
            Period::Custom => None,
        }
    }
}

pub fn first_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}
