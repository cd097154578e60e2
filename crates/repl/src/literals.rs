//!
//! Conversion between command-line literals and runtime values
//!

use numseq_runtime::values::RuntimeValue;
use serde_json::{Number, Value as JsonValue};
use tracing::trace;

/// Read a command-line argument as a runtime value
///
/// JSON literals are converted to their matching value, `undefined` is accepted
/// as-is, and anything else is passed along as a raw string.
pub fn parse_arg(raw: &str) -> Result<RuntimeValue, String> {
    if raw == "undefined" {
        return Ok(RuntimeValue::Undefined);
    }

    match serde_json::from_str::<JsonValue>(raw) {
        Ok(json) => json_to_value(json),
        Err(err) => {
            trace!(raw, %err, "argument is not a JSON literal, passing it as a string");
            Ok(RuntimeValue::String(raw.to_owned()))
        }
    }
}

fn json_to_value(json: JsonValue) -> Result<RuntimeValue, String> {
    match json {
        JsonValue::Null => Ok(RuntimeValue::Null),
        JsonValue::Bool(bool) => Ok(RuntimeValue::Bool(bool)),
        JsonValue::Number(number) => Ok(match number.as_i64() {
            Some(int) => RuntimeValue::Int(int),
            None => RuntimeValue::Float(number.as_f64().unwrap_or(f64::NAN)),
        }),
        JsonValue::String(string) => Ok(RuntimeValue::String(string)),
        JsonValue::Array(items) => items
            .into_iter()
            .map(json_to_value)
            .collect::<Result<_, _>>()
            .map(RuntimeValue::List),
        JsonValue::Object(_) => Err("objects cannot be used as arguments".to_owned()),
    }
}

/// Convert a runtime value to JSON
///
/// Values JSON cannot represent (undefined, NaN and infinities) become `null`.
pub fn value_to_json(value: &RuntimeValue) -> JsonValue {
    match value {
        RuntimeValue::Undefined | RuntimeValue::Null => JsonValue::Null,
        RuntimeValue::Bool(bool) => JsonValue::Bool(*bool),
        RuntimeValue::Int(int) => JsonValue::Number(Number::from(*int)),
        RuntimeValue::Float(float) => Number::from_f64(*float)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        RuntimeValue::String(string) => JsonValue::String(string.clone()),
        RuntimeValue::List(items) => JsonValue::Array(items.iter().map(value_to_json).collect()),
    }
}
