//! Core types for the change module.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

pub use json_edit_path::{Path, PathError};

// ── Error ─────────────────────────────────────────────────────────────────

/// Failure of one change request; `index` is its position in the list.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChangeError {
    #[error("change #{index}: '{kind}' requires '{field}'")]
    MissingField {
        index: usize,
        kind: ChangeKind,
        field: &'static str,
    },
    #[error("change #{index}: unsupported change type '{kind}'")]
    UnsupportedChange { index: usize, kind: String },
    #[error("change #{index}: {reason}")]
    InvalidChange { index: usize, reason: String },
    #[error("change #{index} at '{path}': {source}")]
    TypeMismatch {
        index: usize,
        path: String,
        #[source]
        source: PathError,
    },
}

// ── Kind ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Set,
    Unset,
    Extend,
    Append,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Set => "set",
            ChangeKind::Unset => "unset",
            ChangeKind::Extend => "extend",
            ChangeKind::Append => "append",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "set" => Ok(ChangeKind::Set),
            "unset" => Ok(ChangeKind::Unset),
            "extend" => Ok(ChangeKind::Extend),
            "append" => Ok(ChangeKind::Append),
            other => Err(other.to_string()),
        }
    }
}

// ── Change ────────────────────────────────────────────────────────────────

/// One change request. Values are kept raw; they are coerced when applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Set { path: Path, value: Value },
    Unset { path: Path },
    Extend { path: Path, values: Vec<Value> },
    Append { path: Path, value: Value },
}

impl Change {
    pub fn kind(&self) -> ChangeKind {
        match self {
            Change::Set { .. } => ChangeKind::Set,
            Change::Unset { .. } => ChangeKind::Unset,
            Change::Extend { .. } => ChangeKind::Extend,
            Change::Append { .. } => ChangeKind::Append,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Change::Set { path, .. }
            | Change::Unset { path }
            | Change::Extend { path, .. }
            | Change::Append { path, .. } => path,
        }
    }
}

// ── Result ────────────────────────────────────────────────────────────────

/// Outcome of applying a list of changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyResult {
    /// True if at least one change modified the document.
    pub changed: bool,
    /// Formatted paths of the changes that modified the document, in order.
    pub changed_paths: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_roundtrip() {
        for kind in [ChangeKind::Set, ChangeKind::Unset, ChangeKind::Extend, ChangeKind::Append] {
            assert_eq!(kind.as_str().parse::<ChangeKind>(), Ok(kind));
        }
        assert_eq!("replace".parse::<ChangeKind>(), Err("replace".to_string()));
    }

    #[test]
    fn error_messages() {
        let err = ChangeError::MissingField {
            index: 2,
            kind: ChangeKind::Set,
            field: "value",
        };
        assert_eq!(err.to_string(), "change #2: 'set' requires 'value'");

        let err = ChangeError::UnsupportedChange {
            index: 0,
            kind: "merge".to_string(),
        };
        assert_eq!(err.to_string(), "change #0: unsupported change type 'merge'");
    }
}
