//! User-facing console messages (icon + colour). Diagnostics go through
//! `tracing` instead and stay on stderr.

use crate::utils::colors::{BLUE, BOLD, GREEN, GREY, RED, RESET, YELLOW};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}{ICON_INFO} {RESET}{msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{GREEN}{BOLD}{ICON_OK} {RESET}{msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{YELLOW}{BOLD}{ICON_WARN} {RESET}{msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{RED}{BOLD}{ICON_ERR} {RESET}{msg}");
}

/// Section header, e.g. `=== Summary ===`.
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{BLUE}{BOLD}=== {msg} ==={RESET}");
}

/// `label: value` with the label dimmed and padded to `width`.
pub fn field<T: fmt::Display>(label: &str, value: T, width: usize) {
    println!(
        "{GREY}{}{RESET} {value}",
        crate::utils::formatting::pad_right(&format!("{label}:"), width)
    );
}
