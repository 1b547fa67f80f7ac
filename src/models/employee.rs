use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Directory entry for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    pub join_date: NaiveDate,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub work_schedule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
}

impl Employee {
    /// Part of the email before `@`, lowercased.
    pub fn email_local_part(&self) -> String {
        self.email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }
}

pub fn find_employee<'a>(employees: &'a [Employee], id: &str) -> Option<&'a Employee> {
    employees.iter().find(|e| e.id == id)
}
