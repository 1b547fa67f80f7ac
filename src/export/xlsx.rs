// src/export/xlsx.rs

use crate::core::ReportDocument;
use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{date_to_excel_serial, time_cell_serial};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX: report header block, then a styled table with auto widths.
pub(crate) fn export_xlsx(doc: &ReportDocument, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Report").map_err(to_app_error)?;

    // ---------------------------
    // Header block
    // ---------------------------
    let title_format = Format::new().set_bold().set_font_size(14);
    let bold = Format::new().set_bold();

    worksheet
        .write_with_format(0, 0, doc.title.as_str(), &title_format)
        .map_err(to_app_error)?;

    let mut row: u32 = 2;
    for f in &doc.filters {
        worksheet.write(row, 0, f.as_str()).map_err(to_app_error)?;
        row += 1;
    }

    row += 1;
    worksheet
        .write_with_format(row, 0, doc.summary_title.as_str(), &bold)
        .map_err(to_app_error)?;
    row += 1;
    for s in &doc.summary {
        worksheet.write(row, 0, s.label.as_str()).map_err(to_app_error)?;
        worksheet.write(row, 1, s.value.as_str()).map_err(to_app_error)?;
        row += 1;
    }

    row += 1;
    worksheet
        .write_with_format(row, 0, doc.details_title.as_str(), &bold)
        .map_err(to_app_error)?;
    row += 1;

    // ---------------------------
    // Table header
    // ---------------------------
    let header_row = row;
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in doc.columns.iter().enumerate() {
        worksheet
            .write_with_format(header_row, col as u16, header.as_str(), &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(header_row + 1, 0).ok();

    let mut col_widths: Vec<usize> = doc
        .columns
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();
    // the label column of the summary block shares column 0
    for s in &doc.summary {
        col_widths[0] = col_widths[0].max(UnicodeWidthStr::width(s.label.as_str()));
    }

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (i, r) in doc.rows.iter().enumerate() {
        let row = header_row + 1 + i as u32;
        let bg = if i % 2 == 0 { band1 } else { band2 };

        let date_fmt = cell_format(bg).set_num_format("dddd, d mmm yyyy");
        worksheet
            .write_with_format(row, 0, date_to_excel_serial(&r.date), &date_fmt)
            .map_err(to_app_error)?;
        col_widths[0] = col_widths[0].max(UnicodeWidthStr::width(r.date_label.as_str()) + 5);

        for (col, value) in r.cells().iter().enumerate().skip(1) {
            write_xlsx_cell(worksheet, row, col as u16, value, bg)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

/// Single cell: start/end `HH:MM` become Excel times, everything else stays text.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    if let Some(serial) = time_cell_serial(usize::from(col), s) {
        let fmt = cell_format(bg).set_num_format("hh:mm");
        worksheet
            .write_with_format(row, col, serial, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &cell_format(bg))
        .map_err(to_app_error)?;
    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX: {e}"))
}
