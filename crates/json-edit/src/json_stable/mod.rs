//! Deterministic JSON serialization with sorted object keys.
//!
//! The output does not depend on the order in which keys were inserted into a
//! map, so re-serializing an unchanged document gives identical bytes. That
//! keeps rewritten files diff-friendly and makes repeated runs comparable.
//!
//! Strings are written as UTF-8; non-ASCII characters are not `\uXXXX`
//! escaped. Only quotes, backslashes and control characters are escaped.
//! Numbers are written exactly as stored, so integers of any size survive.

use serde_json::{Map, Value};

const INDENT: &str = "  ";

/// Serialize `val` to a compact JSON string with sorted object keys.
pub fn stringify(val: &Value) -> String {
    let mut out = String::new();
    write_compact(&mut out, val);
    out
}

/// Serialize `val` to an indented JSON string with sorted object keys.
///
/// Two-space indentation, `": "` between key and value, one item per line
/// and no trailing newline. Empty containers stay on one line.
///
/// # Example
///
/// ```
/// use json_edit::json_stable::stringify_pretty;
/// use serde_json::json;
///
/// let out = stringify_pretty(&json!({"b": [1], "a": {}}));
/// assert_eq!(out, "{\n  \"a\": {},\n  \"b\": [\n    1\n  ]\n}");
/// ```
pub fn stringify_pretty(val: &Value) -> String {
    let mut out = String::new();
    write_pretty(&mut out, val, 0);
    out
}

fn sorted_entries(obj: &Map<String, Value>) -> Vec<(&String, &Value)> {
    let mut entries: Vec<(&String, &Value)> = obj.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}

fn write_scalar(out: &mut String, val: &Value) {
    match val {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_string(out, s),
        Value::Array(_) | Value::Object(_) => write_compact(out, val),
    }
}

fn write_string(out: &mut String, s: &str) {
    // Serializing a str cannot fail.
    out.push_str(&serde_json::to_string(s).unwrap_or_default());
}

fn write_compact(out: &mut String, val: &Value) {
    match val {
        Value::Array(arr) => {
            out.push('[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_compact(out, item);
            }
            out.push(']');
        }
        Value::Object(obj) => {
            out.push('{');
            for (i, (key, item)) in sorted_entries(obj).into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_compact(out, item);
            }
            out.push('}');
        }
        scalar => write_scalar(out, scalar),
    }
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn write_pretty(out: &mut String, val: &Value, depth: usize) {
    match val {
        Value::Array(arr) if arr.is_empty() => out.push_str("[]"),
        Value::Object(obj) if obj.is_empty() => out.push_str("{}"),
        Value::Array(arr) => {
            out.push('[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                newline(out, depth + 1);
                write_pretty(out, item, depth + 1);
            }
            newline(out, depth);
            out.push(']');
        }
        Value::Object(obj) => {
            out.push('{');
            for (i, (key, item)) in sorted_entries(obj).into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                newline(out, depth + 1);
                write_string(out, key);
                out.push_str(": ");
                write_pretty(out, item, depth + 1);
            }
            newline(out, depth);
            out.push('}');
        }
        scalar => write_scalar(out, scalar),
    }
}
