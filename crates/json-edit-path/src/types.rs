//! Type definitions for key paths.

use serde_json::{Map, Value};

use crate::{value_kind, PathError};

/// A step in a path: one object key.
pub type PathStep = String;

/// A key path.
pub type Path = Vec<PathStep>;

/// A resolved slot in a JSON document.
///
/// Holds the object that owns the slot and the key naming it. The slot
/// itself may or may not exist yet.
#[derive(Debug)]
pub struct Reference<'a> {
    /// The object containing the target slot.
    pub obj: &'a mut Map<String, Value>,
    /// The key of the target slot within `obj`.
    pub key: String,
    /// The full path of the slot, formatted, for error reporting.
    pub path: String,
}

impl<'a> Reference<'a> {
    /// Check if the slot holds a value.
    pub fn exists(&self) -> bool {
        self.obj.contains_key(&self.key)
    }

    pub fn get(&self) -> Option<&Value> {
        self.obj.get(&self.key)
    }

    /// Write `value` into the slot, returning the previous value.
    pub fn set(&mut self, value: Value) -> Option<Value> {
        self.obj.insert(self.key.clone(), value)
    }

    /// Remove the slot, returning its value. Removing an absent slot is a no-op.
    pub fn delete(&mut self) -> Option<Value> {
        self.obj.remove(&self.key)
    }

    /// Borrow the slot as a list.
    ///
    /// Returns `Ok(None)` when the slot is absent.
    ///
    /// # Errors
    ///
    /// `PathError::TypeMismatch` if the slot holds anything but an array.
    pub fn as_array_mut(&mut self) -> Result<Option<&mut Vec<Value>>, PathError> {
        match self.obj.get_mut(&self.key) {
            None => Ok(None),
            Some(Value::Array(arr)) => Ok(Some(arr)),
            Some(other) => Err(PathError::TypeMismatch {
                path: self.path.clone(),
                expected: "array",
                found: value_kind(other),
            }),
        }
    }
}
