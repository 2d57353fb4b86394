//! Dotted key paths for JSON documents.
//!
//! A path such as `server.tls.cert` names a slot inside nested JSON objects.
//! Steps are separated by `.`; a literal dot inside a key is written `\.`.
//!
//! # Example
//!
//! ```
//! use json_edit_path::{format_path, parse_path, resolve};
//! use serde_json::json;
//!
//! let path = parse_path("server.tls.cert");
//! assert_eq!(path, vec!["server", "tls", "cert"]);
//! assert_eq!(format_path(&path), "server.tls.cert");
//!
//! // Missing intermediate objects are created on the way down.
//! let mut doc = json!({});
//! let mut slot = resolve(&mut doc, &path).unwrap();
//! assert!(!slot.exists());
//! slot.set(json!("cert.pem"));
//! assert_eq!(doc, json!({"server": {"tls": {"cert": "cert.pem"}}}));
//! ```

use serde_json::Value;
use thiserror::Error;

pub mod get;
pub mod resolve;
pub mod types;

pub use get::get;
pub use resolve::{resolve, resolve_existing};
pub use types::{Path, PathStep, Reference};

/// Separates path steps.
pub const DELIMITER: char = '.';

/// Marks the following delimiter as part of the key.
pub const ESCAPE: char = '\\';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path has no steps")]
    EmptyPath,
    #[error("type mismatch at '{path}': expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Unescapes a path step.
///
/// Only `\.` is an escape sequence; any other backslash is kept as is.
///
/// # Example
///
/// ```
/// use json_edit_path::unescape_step;
///
/// assert_eq!(unescape_step(r"example\.com"), "example.com");
/// assert_eq!(unescape_step(r"C:\temp"), r"C:\temp");
/// ```
pub fn unescape_step(step: &str) -> String {
    if !step.contains(ESCAPE) {
        return step.to_string();
    }
    step.replace("\\.", ".")
}

/// Escapes a path step so that [`parse_path`] reads it back as one key.
///
/// # Example
///
/// ```
/// use json_edit_path::escape_step;
///
/// assert_eq!(escape_step("example.com"), r"example\.com");
/// assert_eq!(escape_step("plain"), "plain");
/// ```
pub fn escape_step(step: &str) -> String {
    if !step.contains(DELIMITER) {
        return step.to_string();
    }
    step.replace('.', "\\.")
}

/// Parse a path string into its steps.
///
/// Splits on every `.` that is not immediately preceded by `\`. Adjacent
/// delimiters produce empty steps rather than being collapsed, and the
/// empty string is a single empty step, so a parsed path is never empty.
///
/// # Example
///
/// ```
/// use json_edit_path::parse_path;
///
/// assert_eq!(parse_path("a.b.c"), vec!["a", "b", "c"]);
/// assert_eq!(parse_path(r"hosts.example\.com"), vec!["hosts", "example.com"]);
/// assert_eq!(parse_path("a..b"), vec!["a", "", "b"]);
/// assert_eq!(parse_path(""), vec![""]);
/// ```
pub fn parse_path(path: &str) -> Path {
    let mut steps = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    for (i, ch) in path.char_indices() {
        if ch == DELIMITER && prev != Some(ESCAPE) {
            steps.push(unescape_step(&path[start..i]));
            start = i + ch.len_utf8();
        }
        prev = Some(ch);
    }
    steps.push(unescape_step(&path[start..]));
    steps
}

/// Format path steps back into a path string.
///
/// # Example
///
/// ```
/// use json_edit_path::format_path;
///
/// assert_eq!(format_path(&[]), "");
/// assert_eq!(format_path(&["a".to_string(), "b.c".to_string()]), r"a.b\.c");
/// ```
pub fn format_path(path: &[String]) -> String {
    path.iter()
        .map(|step| escape_step(step))
        .collect::<Vec<_>>()
        .join(".")
}

/// Name of the JSON kind of `val`, as used in [`PathError::TypeMismatch`].
pub fn value_kind(val: &Value) -> &'static str {
    match val {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_single_step() {
        assert_eq!(parse_path("env"), vec!["env"]);
    }

    #[test]
    fn parse_keeps_empty_steps() {
        assert_eq!(parse_path(".a."), vec!["", "a", ""]);
        assert_eq!(parse_path("."), vec!["", ""]);
    }

    #[test]
    fn parse_escaped_delimiters() {
        assert_eq!(parse_path(r"a\.b.c"), vec!["a.b", "c"]);
        assert_eq!(parse_path(r"a\.\.b"), vec!["a..b"]);
    }

    #[test]
    fn parse_keeps_other_backslashes() {
        assert_eq!(parse_path(r"dir\name.x"), vec![r"dir\name", "x"]);
    }

    #[test]
    fn parse_multibyte_keys() {
        assert_eq!(parse_path("café.naïve"), vec!["café", "naïve"]);
    }

    #[test]
    fn format_escapes_dots() {
        let path = vec!["hosts".to_string(), "example.com".to_string()];
        assert_eq!(format_path(&path), r"hosts.example\.com");
        assert_eq!(parse_path(&format_path(&path)), path);
    }

    #[test]
    fn kinds() {
        assert_eq!(value_kind(&json!(null)), "null");
        assert_eq!(value_kind(&json!(true)), "boolean");
        assert_eq!(value_kind(&json!(1)), "number");
        assert_eq!(value_kind(&json!("s")), "string");
        assert_eq!(value_kind(&json!([])), "array");
        assert_eq!(value_kind(&json!({})), "object");
    }
}
