use serde_json::{Number, Value};

/// Largest integer a standard JSON consumer can represent exactly (2^53 - 1).
const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// Recursively make a handler result safe for the JSON-only channel.
///
/// Integers whose magnitude exceeds the safe range (chain values like wei
/// amounts, gas totals, block numbers) become decimal strings; sequences and
/// mappings are walked preserving order, length, and keys; everything else
/// passes through unchanged. Total on acyclic input, no side effects.
pub fn sanitize_value(value: Value) -> Value {
    match value {
        Value::Number(number) => sanitize_number(number),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize_value).collect()),
        Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, entry)| (key, sanitize_value(entry)))
                .collect(),
        ),
        other => other,
    }
}

fn sanitize_number(number: Number) -> Value {
    if let Some(signed) = number.as_i64() {
        if signed.unsigned_abs() > MAX_SAFE_INTEGER {
            return Value::String(signed.to_string());
        }
    } else if let Some(unsigned) = number.as_u64() {
        // Only reachable for values above i64::MAX, all out of safe range
        return Value::String(unsigned.to_string());
    }
    Value::Number(number)
}
