use serde_json::{Map, Value};

use crate::types::Reference;
use crate::{format_path, value_kind, PathError};

/// Resolve `path` to a slot in `val`, creating missing intermediate objects.
///
/// Every step but the last must name an object; absent ones are inserted as
/// `{}`. The last step names the returned slot, which is not created.
///
/// # Errors
///
/// - `PathError::EmptyPath` - if `path` has no steps
/// - `PathError::TypeMismatch` - if the root or an intermediate step holds
///   something other than an object
///
/// # Example
///
/// ```
/// use json_edit_path::{parse_path, resolve};
/// use serde_json::json;
///
/// let mut doc = json!({"a": {"b": 1}});
/// let r = resolve(&mut doc, &parse_path("a.b")).unwrap();
/// assert_eq!(r.get(), Some(&json!(1)));
/// assert_eq!(r.key, "b");
/// ```
pub fn resolve<'a>(val: &'a mut Value, path: &[String]) -> Result<Reference<'a>, PathError> {
    let (last, parents) = path.split_last().ok_or(PathError::EmptyPath)?;

    let mut current: &'a mut Value = val;
    for (depth, step) in parents.iter().enumerate() {
        let map = as_object_mut(current, &path[..depth])?;
        current = map
            .entry(step.clone())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    let obj = as_object_mut(current, parents)?;
    Ok(Reference {
        obj,
        key: last.clone(),
        path: format_path(path),
    })
}

/// Resolve `path` to a slot in `val` without creating anything.
///
/// Returns `Ok(None)` if an intermediate step is absent.
///
/// # Errors
///
/// Same as [`resolve`]: an intermediate step that exists but is not an
/// object is a `PathError::TypeMismatch`.
///
/// # Example
///
/// ```
/// use json_edit_path::{parse_path, resolve_existing};
/// use serde_json::json;
///
/// let mut doc = json!({"a": {}});
/// assert!(resolve_existing(&mut doc, &parse_path("a.b.c")).unwrap().is_none());
/// assert_eq!(doc, json!({"a": {}}));
/// ```
pub fn resolve_existing<'a>(
    val: &'a mut Value,
    path: &[String],
) -> Result<Option<Reference<'a>>, PathError> {
    let (last, parents) = path.split_last().ok_or(PathError::EmptyPath)?;

    let mut current: &'a mut Value = val;
    for (depth, step) in parents.iter().enumerate() {
        let map = as_object_mut(current, &path[..depth])?;
        current = match map.get_mut(step) {
            Some(next) => next,
            None => return Ok(None),
        };
    }

    let obj = as_object_mut(current, parents)?;
    Ok(Some(Reference {
        obj,
        key: last.clone(),
        path: format_path(path),
    }))
}

fn as_object_mut<'a>(
    val: &'a mut Value,
    at: &[String],
) -> Result<&'a mut Map<String, Value>, PathError> {
    match val {
        Value::Object(map) => Ok(map),
        other => Err(PathError::TypeMismatch {
            path: format_path(at),
            expected: "object",
            found: value_kind(other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_path;
    use serde_json::json;

    #[test]
    fn resolve_existing_slot() {
        let mut doc = json!({"a": {"b": {"c": 1}}});
        let r = resolve(&mut doc, &parse_path("a.b.c")).unwrap();
        assert!(r.exists());
        assert_eq!(r.path, "a.b.c");
    }

    #[test]
    fn resolve_creates_intermediate_objects() {
        let mut doc = json!({});
        let r = resolve(&mut doc, &parse_path("a.b.c")).unwrap();
        assert!(!r.exists());
        assert_eq!(doc, json!({"a": {"b": {}}}));
    }

    #[test]
    fn resolve_top_level_creates_nothing() {
        let mut doc = json!({"x": 1});
        let r = resolve(&mut doc, &parse_path("y")).unwrap();
        assert!(!r.exists());
        assert_eq!(doc, json!({"x": 1}));
    }

    #[test]
    fn resolve_through_scalar_fails() {
        let mut doc = json!({"a": "text"});
        let err = resolve(&mut doc, &parse_path("a.b")).unwrap_err();
        assert_eq!(
            err,
            PathError::TypeMismatch {
                path: "a".to_string(),
                expected: "object",
                found: "string",
            }
        );
    }

    #[test]
    fn resolve_through_array_fails() {
        let mut doc = json!({"a": {"list": [1, 2]}});
        let err = resolve(&mut doc, &parse_path("a.list.0")).unwrap_err();
        assert!(matches!(
            err,
            PathError::TypeMismatch { found: "array", .. }
        ));
    }

    #[test]
    fn resolve_non_object_root_fails() {
        let mut doc = json!([1, 2, 3]);
        let err = resolve(&mut doc, &parse_path("a")).unwrap_err();
        assert_eq!(
            err,
            PathError::TypeMismatch {
                path: String::new(),
                expected: "object",
                found: "array",
            }
        );
    }

    #[test]
    fn resolve_empty_path_fails() {
        let mut doc = json!({});
        assert_eq!(resolve(&mut doc, &[]).unwrap_err(), PathError::EmptyPath);
    }

    #[test]
    fn resolve_existing_finds_slot() {
        let mut doc = json!({"a": {"b": 1}});
        let r = resolve_existing(&mut doc, &parse_path("a.b")).unwrap().unwrap();
        assert_eq!(r.get(), Some(&json!(1)));
        let r = resolve_existing(&mut doc, &parse_path("a.c")).unwrap().unwrap();
        assert!(!r.exists());
    }

    #[test]
    fn resolve_existing_checks_types() {
        let mut doc = json!({"a": 1});
        assert!(matches!(
            resolve_existing(&mut doc, &parse_path("a.b.c")),
            Err(PathError::TypeMismatch { found: "number", .. })
        ));
    }

    #[test]
    fn resolve_empty_steps_are_keys() {
        let mut doc = json!({});
        resolve(&mut doc, &parse_path("a..b"))
            .unwrap()
            .set(json!(1));
        assert_eq!(doc, json!({"a": {"": {"b": 1}}}));
    }
}
