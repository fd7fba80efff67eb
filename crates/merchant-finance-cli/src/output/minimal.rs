use serde_json::Value;

use super::scalar;

/// Headline figures, most specific first.
const PRIORITY_KEYS: [&str; 8] = [
    "formatted",
    "monthly_payment",
    "total_return",
    "financed_amount",
    "periodic_interest",
    "total_interest",
    "count",
    "number_of_payments",
];

/// Print just the key answer value from the output.
///
/// Looks through the result, its display strings, and its summary in that
/// order, then falls back to the first field of the result.
pub fn print_minimal(value: &Value) {
    let result = value.get("result").unwrap_or(value);

    let scopes = [
        Some(result),
        result.get("display"),
        result.get("summary"),
        result.get("schedule").and_then(|s| s.get("summary")),
    ];

    for scope in scopes.into_iter().flatten() {
        for key in PRIORITY_KEYS {
            if let Some(val) = scope.get(key).filter(|v| !v.is_null()) {
                println!("{}", scalar(val));
                return;
            }
        }
    }

    match result {
        Value::Object(map) => {
            if let Some((key, val)) = map.iter().next() {
                println!("{}: {}", key, scalar(val));
            }
        }
        other => println!("{}", scalar(other)),
    }
}
