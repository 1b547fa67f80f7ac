// src/export/text.rs

use crate::core::ReportDocument;
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Plain-text report, laid out exactly like the legacy dashboard download:
///
/// ```text
/// <title>
///
/// <filter lines>
///
/// <summary title>:
/// - <label>: <value>
///
/// <details title>:
/// <col> | <col> | ...
/// ------|---------|...
/// <cell> | <cell> | ...
/// ```
pub fn render_text(doc: &ReportDocument) -> String {
    let mut out = String::new();

    out.push_str(&doc.title);
    out.push_str("\n\n");

    for f in &doc.filters {
        out.push_str(f);
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&doc.summary_title);
    out.push_str(":\n");
    for s in &doc.summary {
        out.push_str(&format!("- {}: {}\n", s.label, s.value));
    }
    out.push('\n');

    out.push_str(&doc.details_title);
    out.push_str(":\n");
    out.push_str(&doc.columns.join(" | "));
    out.push('\n');
    out.push_str(&separator(&doc.columns));
    out.push('\n');

    for row in &doc.rows {
        out.push_str(&row.cells().join(" | "));
        out.push('\n');
    }

    out
}

/// Dashes under each header, covering the ` | ` padding on either side.
fn separator(columns: &[String]) -> String {
    let last = columns.len().saturating_sub(1);
    columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let pad = usize::from(i > 0) + usize::from(i < last);
            "-".repeat(c.chars().count() + pad)
        })
        .collect::<Vec<_>>()
        .join("|")
}

pub(crate) fn export_txt(doc: &ReportDocument, path: &Path) -> AppResult<()> {
    info(format!("Exporting to text: {}", path.display()));

    fs::write(path, render_text(doc))?;

    notify_export_success("Text", path);
    Ok(())
}
