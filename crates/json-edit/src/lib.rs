//! json-edit - converge a JSON file to a list of declarative point changes.
//!
//! Changes (`set`, `unset`, `append`, `extend`) address slots with dotted
//! key paths (see [`json_edit_path`]). Applying them reports whether the
//! document changed, and the file is only rewritten when it did, in a
//! canonical form with sorted keys.
//!
//! # Example
//!
//! ```
//! use json_edit::change::{apply_changes, from_json_changes};
//! use serde_json::json;
//!
//! let changes = from_json_changes(&json!([
//!     {"type": "set", "path": "server.port", "value": "8080"},
//!     {"type": "append", "path": "server.hosts", "value": "a.example"},
//! ]))
//! .unwrap();
//!
//! let mut doc = json!({});
//! assert!(apply_changes(&mut doc, &changes).unwrap().changed);
//! assert_eq!(doc, json!({"server": {"port": 8080, "hosts": ["a.example"]}}));
//!
//! // Applying the same list again is a no-op.
//! assert!(!apply_changes(&mut doc, &changes).unwrap().changed);
//! ```

pub mod coerce;
pub mod json_stable;

pub mod change;
pub mod store;

pub mod json_cli;
