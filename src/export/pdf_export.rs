// src/export/pdf_export.rs

use crate::core::ReportDocument;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF through PdfManager: header block plus the detail table.
pub(crate) fn export_pdf(doc: &ReportDocument, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new();
    pdf.write_report(&doc.title, &doc.preamble(), &doc.columns, &doc.table());

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
