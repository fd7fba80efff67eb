pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Per-period rows of a schedule-shaped result, wherever they sit.
///
/// Schedules keep them at `result.entries`; previews nest the schedule
/// one level deeper at `result.schedule.entries`.
pub(crate) fn schedule_entries(result: &Value) -> Option<&Vec<Value>> {
    result
        .get("entries")
        .or_else(|| result.get("schedule").and_then(|s| s.get("entries")))
        .and_then(Value::as_array)
}

/// Scalar rendering shared by the table and CSV writers.
pub(crate) fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
