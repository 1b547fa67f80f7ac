use crate::errors::{AppError, AppResult};
use crate::models::{Employee, TimeRecord};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Contents of the JSON data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSet {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub records: Vec<TimeRecord>,
}

impl DataSet {
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::DataFileMissing(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let data: DataSet = serde_json::from_str(&content)?;

        debug!(
            path = %path.display(),
            employees = data.employees.len(),
            records = data.records.len(),
            "data file loaded"
        );
        Ok(data)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn employee(&self, id: &str) -> Option<&Employee> {
        crate::models::employee::find_employee(&self.employees, id)
    }

    /// Display name for a user id: directory name, else the raw id.
    pub fn display_name(&self, user_id: &str) -> String {
        self.employee(user_id)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| user_id.to_string())
    }
}
