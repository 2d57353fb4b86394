//! Coercion of textual change values into native JSON values.
//!
//! Change values usually arrive as strings (from a command line or a YAML
//! task file), so `"8080"` has to become the number `8080` and `"true"` the
//! boolean `true` before it is compared with or written into a document.

use serde_json::{Number, Value};

/// Coerce a change value.
///
/// Non-string values are already native and pass through unchanged.
///
/// # Example
///
/// ```
/// use json_edit::coerce::coerce;
/// use serde_json::json;
///
/// assert_eq!(coerce(&json!("123")), json!(123));
/// assert_eq!(coerce(&json!("true")), json!(true));
/// assert_eq!(coerce(&json!(r#"["a", "b"]"#)), json!(["a", "b"]));
/// assert_eq!(coerce(&json!({"k": "v"})), json!({"k": "v"}));
/// ```
pub fn coerce(val: &Value) -> Value {
    match val {
        Value::String(s) => coerce_str(s),
        other => other.clone(),
    }
}

/// Coerce a string, trying in order: unsigned integer, `null`, boolean,
/// bracketed list of strings. Anything else stays a string.
///
/// Integers are unbounded; digit strings past `u64` keep every digit.
pub fn coerce_str(s: &str) -> Value {
    if is_digits(s) {
        if let Some(n) = parse_integer(s) {
            return Value::Number(n);
        }
    }
    match s {
        "null" => return Value::Null,
        "false" => return Value::Bool(false),
        "true" => return Value::Bool(true),
        _ => {}
    }
    if s.contains('[') && s.contains(']') {
        return Value::Array(split_list(s));
    }
    Value::String(s.to_string())
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `s` must be all ASCII digits.
fn parse_integer(s: &str) -> Option<Number> {
    if let Ok(n) = s.parse::<u64>() {
        return Some(Number::from(n));
    }
    // JSON forbids leading zeros.
    let trimmed = s.trim_start_matches('0');
    let digits = if trimmed.is_empty() { "0" } else { trimmed };
    digits.parse::<Number>().ok()
}

/// Elements stay strings; they are not coerced recursively.
fn split_list(s: &str) -> Vec<Value> {
    let inner: String = s.chars().filter(|&c| c != '[' && c != ']').collect();
    inner
        .split(',')
        .map(|item| {
            let item: String = item.chars().filter(|&c| c != '"').collect();
            Value::String(item.trim_start().to_string())
        })
        .collect()
}
