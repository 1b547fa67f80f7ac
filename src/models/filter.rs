use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn contains(&self, day: &NaiveDate) -> bool {
        *day >= self.start && *day <= self.end
    }

    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }

    /// Every date of the range, ascending. Empty when `start > end`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }
}

/// What the aggregator keeps. `explicit_days`, when non-empty, replaces
/// `date_range` entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub user_id: Option<String>,
    pub client_tag: Option<String>,
    pub date_range: DateRange,
    pub explicit_days: BTreeSet<NaiveDate>,
}

impl FilterSpec {
    pub fn for_range(date_range: DateRange) -> Self {
        Self {
            user_id: None,
            client_tag: None,
            date_range,
            explicit_days: BTreeSet::new(),
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_client(mut self, client_tag: impl Into<String>) -> Self {
        self.client_tag = Some(client_tag.into());
        self
    }

    pub fn with_days<I: IntoIterator<Item = NaiveDate>>(mut self, days: I) -> Self {
        self.explicit_days.extend(days);
        self
    }

    pub fn uses_explicit_days(&self) -> bool {
        !self.explicit_days.is_empty()
    }

    /// Date selection only (user and client filters are applied separately).
    pub fn selects_date(&self, day: &NaiveDate) -> bool {
        if self.uses_explicit_days() {
            self.explicit_days.contains(day)
        } else {
            self.date_range.contains(day)
        }
    }
}
