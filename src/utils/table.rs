//! Table rendering utilities for CLI outputs.

use crate::utils::colors::{BOLD, RESET};
use crate::utils::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(UnicodeWidthStr::width(cell.as_str()));
            }
        }
        widths
    }

    /// Render, letting `paint(row, col, padded_cell)` decorate each body cell.
    /// Padding happens first so escape codes do not skew the columns.
    pub fn render_with<F>(&self, paint: F) -> String
    where
        F: Fn(usize, usize, &str) -> String,
    {
        let widths = self.widths();
        let mut out = String::new();

        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad_right(h, *w))
            .collect();
        out.push_str(&format!("{BOLD}{}{RESET}\n", header.join("  ")));

        let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        out.push_str(&rule.join("  "));
        out.push('\n');

        for (r, row) in self.rows.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(c, (cell, w))| paint(r, c, &pad_right(cell, *w)))
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }

        out
    }
}
