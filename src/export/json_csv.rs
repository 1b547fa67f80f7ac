// src/export/json_csv.rs

use crate::core::ReportDocument;
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed: the whole report payload.
pub(crate) fn export_json(doc: &ReportDocument, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(doc)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV: column labels, then one line per detail row.
pub(crate) fn export_csv(doc: &ReportDocument, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(&doc.columns)?;
    for row in &doc.rows {
        wtr.write_record(row.cells())?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
