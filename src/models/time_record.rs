use crate::utils::time::{hhmm, hhmm_opt};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One clock-in / clock-out session of a user on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRecord {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate, // "YYYY-MM-DD"
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime, // "HH:MM"
    /// `None` while the session is still open.
    #[serde(default, with = "hhmm_opt", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    /// Worked minutes; `None` counts as zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_work_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_tag: Option<String>,
    #[serde(default)]
    pub used_entry_tolerance: bool,
    #[serde(default)]
    pub used_exit_tolerance: bool,
}

/// Status shown in the detail table of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Completed,
    LateArrival,
    EarlyDeparture,
}

impl TimeRecord {
    pub fn new(id: &str, user_id: &str, date: NaiveDate, start_time: NaiveTime) -> Self {
        Self {
            id: id.to_string(),
            user_id: user_id.to_string(),
            date,
            start_time,
            end_time: None,
            total_work_time: None,
            client_tag: None,
            used_entry_tolerance: false,
            used_exit_tolerance: false,
        }
    }

    pub fn worked_minutes(&self) -> u64 {
        u64::from(self.total_work_time.unwrap_or(0))
    }

    /// A late arrival wins over an early departure.
    pub fn status(&self) -> RecordStatus {
        if self.used_entry_tolerance {
            RecordStatus::LateArrival
        } else if self.used_exit_tolerance {
            RecordStatus::EarlyDeparture
        } else {
            RecordStatus::Completed
        }
    }
}
