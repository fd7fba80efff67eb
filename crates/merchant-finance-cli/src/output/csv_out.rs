use serde_json::Value;
use std::io;

use super::{scalar, schedule_entries};

/// Write output as CSV to stdout.
///
/// Schedules export one row per period; other results export
/// `field,value` pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value.get("result").unwrap_or(value);

    if let Some(entries) = schedule_entries(result) {
        write_rows(&mut wtr, entries);
    } else if let Some(Value::Array(rows)) = value.get("results") {
        write_rows(&mut wtr, rows);
    } else if let Value::Object(map) = result {
        let _ = wtr.write_record(["field", "value"]);
        for (key, val) in map {
            let _ = wtr.write_record([key.as_str(), &scalar(val)]);
        }
    } else {
        let _ = wtr.write_record([&scalar(result)]);
    }

    let _ = wtr.flush();
}

fn write_rows<W: io::Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        return;
    };

    let headers: Vec<&str> = first.keys().map(String::as_str).collect();
    let _ = wtr.write_record(&headers);

    for row in rows.iter().filter_map(Value::as_object) {
        let cells: Vec<String> = headers
            .iter()
            .map(|h| row.get(*h).map(scalar).unwrap_or_default())
            .collect();
        let _ = wtr.write_record(&cells);
    }
}
