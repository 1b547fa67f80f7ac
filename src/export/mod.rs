// src/export/mod.rs

pub mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
mod pdf;
mod pdf_export;
pub mod text;
mod xlsx;

pub use logic::ExportLogic;
pub use pdf::PdfManager;
pub use text::render_text;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every exporter.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Txt,
    Csv,
    Json,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    /// Also the file extension.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}
