// src/export/logic.rs

use crate::core::ReportDocument;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::text::export_txt;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::debug;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `doc` to `path` in the given format.
    ///
    /// - `path` must be absolute
    /// - an existing file is only replaced with `force` or after confirmation
    /// - an empty report writes nothing and returns `Ok(false)`
    pub fn export(
        doc: &ReportDocument,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<bool> {
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                path.display()
            )));
        }

        if doc.rows.is_empty() {
            warning("No data to export");
            return Ok(false);
        }

        ensure_writable(path, force)?;

        debug!(format = format.as_str(), rows = doc.rows.len(), path = %path.display(), "exporting report");

        match format {
            ExportFormat::Txt => export_txt(doc, path)?,
            ExportFormat::Csv => export_csv(doc, path)?,
            ExportFormat::Json => export_json(doc, path)?,
            ExportFormat::Xlsx => export_xlsx(doc, path)?,
            ExportFormat::Pdf => export_pdf(doc, path)?,
        }

        Ok(true)
    }

    /// `timetracker_report_<YYYY-MM-DD>.<ext>` inside `dir`.
    pub fn default_path(dir: &Path, today: NaiveDate, format: ExportFormat) -> PathBuf {
        dir.join(format!(
            "timetracker_report_{}.{}",
            today.format("%Y-%m-%d"),
            format.as_str()
        ))
    }
}
