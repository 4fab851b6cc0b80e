//! Output formatting and control utilities.
//!
//! CHANGELOG:
//! - 10/16/2026 - Initial implementation

use serde::Serialize;
use serde_json::json;
use std::path::Path;

use crate::writer::SaveOutcome;

/// Output control settings from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct OutputControls {
    pub json: bool,
    pub compact: bool,
}

impl OutputControls {
    /// Emit data according to output controls.
    pub fn emit<T: Serialize>(&self, data: &T) -> String {
        let value = serde_json::to_value(data).unwrap_or(json!(null));

        if self.compact {
            serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Print data to stdout according to output controls.
    pub fn print<T: Serialize>(&self, data: &T) {
        println!("{}", self.emit(data));
    }

    /// Progress line for one write, or `None` in JSON mode.
    pub fn progress_line(&self, path: &Path, outcome: SaveOutcome) -> Option<String> {
        if self.json {
            return None;
        }
        Some(match outcome {
            SaveOutcome::Created => format!("Create file: {}", path.display()),
            SaveOutcome::Appended => format!("Append to file {}", path.display()),
        })
    }

    /// Report one write on stdout.
    pub fn progress(&self, path: &Path, outcome: SaveOutcome) {
        if let Some(line) = self.progress_line(path, outcome) {
            println!("{}", line);
        }
    }
}

/// Format error as JSON.
pub fn format_error(error: &str) -> String {
    serde_json::to_string(&json!({
        "error": error,
        "success": false
    }))
    .unwrap_or_else(|_| format!(r#"{{"error":"{}"}}"#, error))
}
