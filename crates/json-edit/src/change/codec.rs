//! JSON codec for change requests.
//!
//! A change request is an object such as
//! `{"type": "set", "path": "server.port", "value": "8080"}`.

use serde_json::{json, Map, Value};

use json_edit_path::{format_path, parse_path};

use crate::change::types::{Change, ChangeError, ChangeKind};

// ── Field helpers ─────────────────────────────────────────────────────────

fn required<'a>(
    obj: &'a Map<String, Value>,
    index: usize,
    kind: ChangeKind,
    field: &'static str,
) -> Result<&'a Value, ChangeError> {
    obj.get(field)
        .ok_or(ChangeError::MissingField { index, kind, field })
}

fn decode_path(v: &Value, index: usize) -> Result<Vec<String>, ChangeError> {
    let s = v.as_str().ok_or_else(|| ChangeError::InvalidChange {
        index,
        reason: "'path' must be a string".into(),
    })?;
    Ok(parse_path(s))
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize the change request at position `index` of a change list.
pub fn from_json(index: usize, v: &Value) -> Result<Change, ChangeError> {
    let obj = v.as_object().ok_or_else(|| ChangeError::InvalidChange {
        index,
        reason: "change must be an object".into(),
    })?;
    let type_str = obj
        .get("type")
        .ok_or_else(|| ChangeError::InvalidChange {
            index,
            reason: "missing 'type' field".into(),
        })?
        .as_str()
        .ok_or_else(|| ChangeError::InvalidChange {
            index,
            reason: "'type' must be a string".into(),
        })?;
    let kind: ChangeKind = type_str
        .parse()
        .map_err(|kind| ChangeError::UnsupportedChange { index, kind })?;

    let path = decode_path(required(obj, index, kind, "path")?, index)?;

    match kind {
        ChangeKind::Set => {
            let value = required(obj, index, kind, "value")?.clone();
            Ok(Change::Set { path, value })
        }
        ChangeKind::Unset => Ok(Change::Unset { path }),
        ChangeKind::Append => {
            let value = required(obj, index, kind, "value")?.clone();
            Ok(Change::Append { path, value })
        }
        ChangeKind::Extend => {
            let values = required(obj, index, kind, "values")?
                .as_array()
                .ok_or_else(|| ChangeError::InvalidChange {
                    index,
                    reason: "'values' must be an array".into(),
                })?
                .clone();
            Ok(Change::Extend { path, values })
        }
    }
}

/// Deserialize a JSON array into a list of change requests.
pub fn from_json_changes(v: &Value) -> Result<Vec<Change>, ChangeError> {
    let arr = v.as_array().ok_or_else(|| ChangeError::InvalidChange {
        index: 0,
        reason: "changes must be an array".into(),
    })?;
    arr.iter()
        .enumerate()
        .map(|(index, item)| from_json(index, item))
        .collect()
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize a change request back to its JSON form.
pub fn to_json(change: &Change) -> Value {
    let path = format_path(change.path());
    match change {
        Change::Set { value, .. } => json!({
            "type": "set",
            "path": path,
            "value": value
        }),
        Change::Unset { .. } => json!({ "type": "unset", "path": path }),
        Change::Extend { values, .. } => json!({
            "type": "extend",
            "path": path,
            "values": values
        }),
        Change::Append { value, .. } => json!({
            "type": "append",
            "path": path,
            "value": value
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_all_kinds() {
        let changes = from_json_changes(&json!([
            {"type": "set", "path": "a.b", "value": "1"},
            {"type": "unset", "path": "c"},
            {"type": "extend", "path": "tags", "values": ["x", "y"]},
            {"type": "append", "path": "tags", "value": "z"},
        ]))
        .unwrap();
        assert_eq!(
            changes,
            vec![
                Change::Set {
                    path: vec!["a".to_string(), "b".to_string()],
                    value: json!("1"),
                },
                Change::Unset {
                    path: vec!["c".to_string()],
                },
                Change::Extend {
                    path: vec!["tags".to_string()],
                    values: vec![json!("x"), json!("y")],
                },
                Change::Append {
                    path: vec!["tags".to_string()],
                    value: json!("z"),
                },
            ]
        );
    }

    #[test]
    fn decode_escaped_path() {
        let change = from_json(0, &json!({"type": "unset", "path": r"hosts.a\.b"})).unwrap();
        assert_eq!(change.path(), &vec!["hosts".to_string(), "a.b".to_string()]);
    }

    #[test]
    fn decode_native_value() {
        let change = from_json(0, &json!({"type": "set", "path": "n", "value": 5})).unwrap();
        assert_eq!(change, Change::Set { path: vec!["n".to_string()], value: json!(5) });
    }

    #[test]
    fn decode_null_value_is_present() {
        let change = from_json(0, &json!({"type": "set", "path": "n", "value": null})).unwrap();
        assert_eq!(change.kind(), ChangeKind::Set);
    }

    #[test]
    fn missing_value() {
        let err = from_json(3, &json!({"type": "set", "path": "a"})).unwrap_err();
        assert_eq!(
            err,
            ChangeError::MissingField { index: 3, kind: ChangeKind::Set, field: "value" }
        );
        let err = from_json(0, &json!({"type": "append", "path": "a"})).unwrap_err();
        assert!(matches!(err, ChangeError::MissingField { field: "value", .. }));
    }

    #[test]
    fn missing_values() {
        let err = from_json(0, &json!({"type": "extend", "path": "a", "value": "x"})).unwrap_err();
        assert_eq!(
            err,
            ChangeError::MissingField { index: 0, kind: ChangeKind::Extend, field: "values" }
        );
    }

    #[test]
    fn missing_path() {
        let err = from_json(1, &json!({"type": "unset"})).unwrap_err();
        assert_eq!(
            err,
            ChangeError::MissingField { index: 1, kind: ChangeKind::Unset, field: "path" }
        );
    }

    #[test]
    fn unsupported_type() {
        let err = from_json_changes(&json!([
            {"type": "set", "path": "a", "value": "1"},
            {"type": "remove", "path": "a"},
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ChangeError::UnsupportedChange { index: 1, kind: "remove".to_string() }
        );
    }

    #[test]
    fn malformed_changes() {
        assert!(matches!(
            from_json(0, &json!("set a 1")),
            Err(ChangeError::InvalidChange { .. })
        ));
        assert!(matches!(
            from_json(0, &json!({"path": "a"})),
            Err(ChangeError::InvalidChange { .. })
        ));
        assert!(matches!(
            from_json(0, &json!({"type": "set", "path": 1, "value": 1})),
            Err(ChangeError::InvalidChange { .. })
        ));
        assert!(matches!(
            from_json(0, &json!({"type": "extend", "path": "a", "values": "x"})),
            Err(ChangeError::InvalidChange { .. })
        ));
        assert!(matches!(
            from_json_changes(&json!({"type": "unset", "path": "a"})),
            Err(ChangeError::InvalidChange { .. })
        ));
    }

    #[test]
    fn encode_uses_path_syntax() {
        let change = Change::Append {
            path: vec!["hosts".to_string(), "a.b".to_string()],
            value: json!("x"),
        };
        assert_eq!(
            to_json(&change),
            json!({"type": "append", "path": r"hosts.a\.b", "value": "x"})
        );
        assert_eq!(from_json(0, &to_json(&change)).unwrap(), change);
    }
}
