//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Pad to a display width (accents and emoji count as they render).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - w))
    }
}

/// Minutes as `<H>h <MM>m`, e.g. `1100` → `18h 20m`, `5` → `0h 05m`.
pub fn minutes_to_hm(mins: u64) -> String {
    format!("{}h {:02}m", mins / 60, mins % 60)
}

pub fn percent(p: i64) -> String {
    format!("{p}%")
}
