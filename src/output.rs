//! CLI output formatting.
//!
//! All user-facing text goes to stdout, including the usage text and the
//! missing-file message, so scripts can capture it the same way as progress.
//!
//! # Output Format
//!
//! ```text
//! [Gray Removal] Processing assets/icon.png...
//! Made 1834 pixels transparent.
//! Saved to assets/icon.png
//! ```
//!
//! ```text
//! [Black-to-Alpha] Processing assets/icon.png...
//! Saved to assets/icon.png
//! ```
//!
//! # Architecture
//!
//! Each message has a `format_*` function (returns `Vec<String>` or `String`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::process::ProcessEvent;
use std::path::Path;

const PROGRAM: &str = "alpha-key";

/// Usage text printed when no image path is given.
pub fn format_usage() -> Vec<String> {
    vec![
        format!("Usage: {PROGRAM} <image_path> [--black-bg]"),
        "  --black-bg : Use black-to-alpha method (recommended for new generations)".to_string(),
    ]
}

pub fn print_usage() {
    for line in format_usage() {
        println!("{}", line);
    }
}

/// Message for an input path that does not exist.
pub fn format_not_found(path: &Path) -> String {
    format!("File not found: {}", path.display())
}

pub fn print_not_found(path: &Path) {
    println!("{}", format_not_found(path));
}

/// Format one progress event as console lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::Started { method, input } => {
            vec![format!("[{}] Processing {}...", method, input.display())]
        }
        ProcessEvent::Keyed { pixels_cleared } => {
            vec![format!("Made {} pixels transparent.", pixels_cleared)]
        }
        ProcessEvent::Saved { output } => vec![format!("Saved to {}", output.display())],
    }
}
