//! Output formatting for CLI display.

use crate::config::OutputFormat;
use crate::model::{Summary, WorkoutCode};

/// Render one summary as a single output line.
pub(super) fn format_summary(summary: &Summary, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(summary.message()),
        OutputFormat::Json => serde_json::to_string(summary)
            .map_err(|e| format!("failed to serialize summary: {e}")),
    }
}

/// Describe a code, its workout, and the values it expects, in order.
pub(super) fn format_code(code: WorkoutCode) -> String {
    format!("{code}  {:<13}  {}", code.label(), code.fields().join(" "))
}

/// Tally line for a batch that had problems.
pub(super) fn format_tally(built: usize, skipped: usize, failed: usize) -> String {
    format!("{built} built, {skipped} skipped (unknown type), {failed} failed")
}
