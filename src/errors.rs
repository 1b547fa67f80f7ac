//! Unified application error type.
//! All modules (auth, store, core, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use crate::auth::AuthError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Data / logic errors
    // ---------------------------
    #[error("Data file not found: {0} (run `timetracker init` first)")]
    DataFileMissing(String),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    // ---------------------------
    // Auth errors
    // ---------------------------
    #[error(transparent)]
    Auth(#[from] AuthError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
