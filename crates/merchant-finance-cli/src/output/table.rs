use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{scalar, schedule_entries};

/// Render output as tables: headline figures first, then the period rows.
pub fn print_table(value: &Value) {
    let Some(envelope) = value.as_object() else {
        println!("{}", value);
        return;
    };

    let Some(result) = envelope.get("result") else {
        print_results_or_fields(envelope);
        return;
    };

    if let Some(summary) = headline(result) {
        print_fields(summary);
    } else if let Value::Object(map) = result {
        print_fields(map);
    } else {
        println!("{}", scalar(result));
    }

    if let Some(entries) = schedule_entries(result) {
        println!();
        print_rows(entries);
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

/// Display strings for previews, the summary for schedules.
fn headline(result: &Value) -> Option<&Map<String, Value>> {
    result
        .get("display")
        .or_else(|| result.get("summary"))
        .and_then(Value::as_object)
}

fn print_results_or_fields(map: &Map<String, Value>) {
    match map.get("results") {
        Some(Value::Array(rows)) => print_rows(rows),
        _ => print_fields(map),
    }
}

fn print_fields(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), &scalar(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_rows(rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        println!("(empty)");
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);

    for row in rows.iter().filter_map(Value::as_object) {
        let cells: Vec<String> = headers
            .iter()
            .map(|h| row.get(h.as_str()).map(scalar).unwrap_or_default())
            .collect();
        builder.push_record(cells);
    }

    println!("{}", Table::from(builder));
}
