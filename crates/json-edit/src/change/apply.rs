//! Change apply logic.
//!
//! Each applicator returns `true` if it modified the document.

use serde_json::Value;
use tracing::{debug, trace};

use json_edit_path::{format_path, resolve, resolve_existing, PathError};

use super::codec::to_json;
use super::types::{ApplyResult, Change, ChangeError};
use crate::coerce::coerce;
use crate::json_stable::stringify;

// ── Individual change applicators ─────────────────────────────────────────

/// Write the coerced `value` at `path` unless an equal value is already there.
pub fn apply_set(doc: &mut Value, path: &[String], value: &Value) -> Result<bool, PathError> {
    let value = coerce(value);
    let mut slot = resolve(doc, path)?;
    if slot.get() == Some(&value) {
        return Ok(false);
    }
    slot.set(value);
    Ok(true)
}

/// Delete the key at `path`. An absent key (or absent parent) is not an error.
pub fn apply_unset(doc: &mut Value, path: &[String]) -> Result<bool, PathError> {
    match resolve_existing(doc, path)? {
        Some(mut slot) => Ok(slot.delete().is_some()),
        None => Ok(false),
    }
}

/// Add the coerced `value` to the list at `path` unless an equal element is
/// present. An absent slot becomes a one-element list.
pub fn apply_append(doc: &mut Value, path: &[String], value: &Value) -> Result<bool, PathError> {
    let value = coerce(value);
    let mut slot = resolve(doc, path)?;
    match slot.as_array_mut()? {
        Some(arr) => {
            if arr.contains(&value) {
                return Ok(false);
            }
            arr.push(value);
        }
        None => {
            slot.set(Value::Array(vec![value]));
        }
    }
    Ok(true)
}

/// Add every coerced item of `values` that is not already in the list at
/// `path`.
///
/// Items are checked against the list as it was before the call, not
/// against each other, so repeated new items are all added.
pub fn apply_extend(doc: &mut Value, path: &[String], values: &[Value]) -> Result<bool, PathError> {
    if values.is_empty() {
        // Still reject a non-list target, but create nothing.
        if let Some(mut slot) = resolve_existing(doc, path)? {
            slot.as_array_mut()?;
        }
        return Ok(false);
    }
    let coerced: Vec<Value> = values.iter().map(coerce).collect();
    let mut slot = resolve(doc, path)?;
    match slot.as_array_mut()? {
        Some(arr) => {
            let new_items: Vec<Value> = coerced.into_iter().filter(|v| !arr.contains(v)).collect();
            if new_items.is_empty() {
                return Ok(false);
            }
            arr.extend(new_items);
        }
        None => {
            slot.set(Value::Array(coerced));
        }
    }
    Ok(true)
}

// ── Dispatch ──────────────────────────────────────────────────────────────

/// Apply a single change to `doc`.
pub fn apply_change(doc: &mut Value, change: &Change) -> Result<bool, PathError> {
    match change {
        Change::Set { path, value } => apply_set(doc, path, value),
        Change::Unset { path } => apply_unset(doc, path),
        Change::Extend { path, values } => apply_extend(doc, path, values),
        Change::Append { path, value } => apply_append(doc, path, value),
    }
}

/// Apply `changes` to `doc` in order, stopping at the first failure.
///
/// Later changes see the effects of earlier ones. On error `doc` may hold the
/// effects of the changes before the failing one; callers must not persist it.
pub fn apply_changes(doc: &mut Value, changes: &[Change]) -> Result<ApplyResult, ChangeError> {
    let mut result = ApplyResult::default();
    for (index, change) in changes.iter().enumerate() {
        let path = format_path(change.path());
        let changed = apply_change(doc, change).map_err(|source| match source {
            PathError::EmptyPath => ChangeError::InvalidChange {
                index,
                reason: source.to_string(),
            },
            PathError::TypeMismatch { .. } => ChangeError::TypeMismatch {
                index,
                path: path.clone(),
                source,
            },
        })?;
        if changed {
            debug!(index, kind = %change.kind(), %path, change = %stringify(&to_json(change)), "change applied");
            result.changed = true;
            result.changed_paths.push(path);
        } else {
            trace!(index, kind = %change.kind(), %path, "already converged");
        }
    }
    Ok(result)
}

// ── Tests ─────────────────────────────────────────────────────────────────
