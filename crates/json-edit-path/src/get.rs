use serde_json::Value;

/// Get a value from a JSON document by path.
///
/// Unlike [`resolve`](crate::resolve) this never modifies the document:
/// returns `None` if any step is missing or crosses a non-object.
///
/// # Example
///
/// ```
/// use json_edit_path::{get, parse_path};
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": 42}});
/// assert_eq!(get(&doc, &parse_path("foo.bar")), Some(&json!(42)));
/// assert_eq!(get(&doc, &parse_path("foo.baz")), None);
/// ```
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for path_step in path {
        match current {
            Value::Object(map) => {
                current = map.get(path_step)?;
            }
            _ => return None,
        }
    }
    Some(current)
}
