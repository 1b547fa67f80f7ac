/// ANSI color helper utilities for terminal output.
use crate::models::RecordStatus;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Completed → green, late/early → yellow (as the dashboard badges).
pub fn color_for_status(status: RecordStatus) -> &'static str {
    match status {
        RecordStatus::Completed => GREEN,
        RecordStatus::LateArrival | RecordStatus::EarlyDeparture => YELLOW,
    }
}

/// Punctuality colour: 100 → green, below 90 → red, otherwise yellow.
pub fn color_for_punctuality(p: i64) -> &'static str {
    if p >= 100 {
        GREEN
    } else if p < 90 {
        RED
    } else {
        YELLOW
    }
}

/// Grey out placeholder cells (`-`).
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
