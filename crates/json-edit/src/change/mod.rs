//! Declarative point changes to a JSON document.
//!
//! # Change types
//!
//! - `set`    - write `value` at `path` (replaces what is there)
//! - `unset`  - delete the key at `path`
//! - `append` - add `value` to the list at `path` unless already present
//! - `extend` - add every item of `values` not already in the list at `path`
//!
//! Every change reports whether it modified the document, so re-applying the
//! same list to its own output reports no change.

pub mod apply;
pub mod codec;
pub mod types;

pub use apply::{apply_append, apply_change, apply_changes, apply_extend, apply_set, apply_unset};
pub use codec::{from_json, from_json_changes, to_json};
pub use types::{ApplyResult, Change, ChangeError, ChangeKind};
