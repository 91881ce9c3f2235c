// ABOUTME: Presentation layer selecting between human tables and machine-readable JSON
// ABOUTME: The output mode is passed explicitly to every handler; errors render per mode too
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

//! # Output
//!
//! Two mutually exclusive renderings:
//!
//! - **JSON mode**: the exact payload, pretty-printed on stdout. Nothing else
//!   is ever written to stdout in this mode, so it stays parseable.
//! - **Human mode**: tables, status lines, and a transient spinner on stderr.

/// Date and duration formatting for human mode
pub mod dates;
/// Spinner shown while network calls are in flight
pub mod progress;
/// Table builders for each resource
pub mod table;

use console::style;
use hevy_core::{HevyError, HevyResult};
use serde_json::{json, Value};

/// Output rendering selected by the global `--json` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Tables and colored messages
    #[default]
    Human,
    /// Indented JSON documents on stdout
    Json,
}

impl OutputMode {
    /// Mode for the value of the `--json` flag
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Human
        }
    }

    /// Whether this is JSON mode
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Print `value` as indented JSON on stdout
///
/// # Errors
///
/// Returns a serialization error if the value cannot be encoded
pub fn print_json(value: &Value) -> HevyResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `{"error": "<message>"}`
#[must_use]
pub fn error_document(err: &HevyError) -> Value {
    json!({ "error": err.to_string() })
}

/// Render a command failure in the given mode
///
/// JSON mode writes the error document to stdout; human mode writes a red
/// line to stderr.
pub fn report_error(mode: OutputMode, err: &HevyError) {
    match mode {
        OutputMode::Json => {
            let document = error_document(err);
            let text = serde_json::to_string_pretty(&document)
                .unwrap_or_else(|_| document.to_string());
            println!("{text}");
        }
        OutputMode::Human => {
            eprintln!("{} {err}", style("Error:").red().bold());
        }
    }
}

/// Print a green success line in human mode; no-op in JSON mode
pub fn success(mode: OutputMode, message: &str) {
    if !mode.is_json() {
        println!("{} {message}", style("✔").green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(OutputMode::from_json_flag(true), OutputMode::Json);
        assert_eq!(OutputMode::from_json_flag(false), OutputMode::Human);
        assert!(OutputMode::Json.is_json());
        assert!(!OutputMode::default().is_json());
    }

    #[test]
    fn test_error_document() {
        let doc = error_document(&HevyError::api("Hevy API", 401, "Unauthorized"));
        assert_eq!(doc, json!({"error": "Hevy API error 401: Unauthorized"}));
    }
}
