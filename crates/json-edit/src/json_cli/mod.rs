//! `json-cli` - the logic behind the `json-edit` binary.
//!
//! Loads the target file, applies a change list, and writes the file back
//! only if something changed.

use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, info};

use json_edit_path::{get, parse_path};

use crate::change::{apply_changes, from_json_changes, Change, ChangeError};
use crate::json_stable::stringify;
use crate::store::{self, ParseStrategy, StoreError};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid change list: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Change(#[from] ChangeError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ── Options / outcome ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvergeOptions {
    pub parse: ParseStrategy,
    /// Report what would change without touching the file system.
    pub dry_run: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub changed: bool,
    pub changed_paths: Vec<String>,
    /// True if the file was rewritten (never on a dry run).
    pub written: bool,
}

impl Outcome {
    /// The report printed by the binary.
    pub fn to_json(&self) -> Value {
        json!({
            "changed": self.changed,
            "paths": self.changed_paths,
        })
    }
}

// ── Converge ──────────────────────────────────────────────────────────────

/// Converge the document at `path` to `changes`.
///
/// The file is written at most once, after every change has been applied
/// successfully. Any error leaves the file untouched.
pub fn converge(
    path: &Path,
    changes: &[Change],
    options: &ConvergeOptions,
) -> Result<Outcome, CliError> {
    if !options.dry_run {
        store::ensure_parent_dir(path)?;
    }
    let mut doc = store::load(path, options.parse)?;
    let result = apply_changes(&mut doc, changes)?;
    for changed in &result.changed_paths {
        match get(&doc, &parse_path(changed)) {
            Some(value) => debug!(path = %changed, value = %stringify(value), "converged value"),
            None => debug!(path = %changed, "converged value: removed"),
        }
    }

    let written = result.changed && !options.dry_run;
    if written {
        store::save(path, &doc)?;
    } else if result.changed {
        info!(path = %path.display(), "dry run, document not written");
    } else {
        debug!(path = %path.display(), "document already converged");
    }

    Ok(Outcome {
        changed: result.changed,
        changed_paths: result.changed_paths,
        written,
    })
}

/// Decode `changes_json` (a JSON array of change requests) and converge.
pub fn converge_json(
    path: &Path,
    changes_json: &str,
    options: &ConvergeOptions,
) -> Result<Outcome, CliError> {
    let raw: Value = serde_json::from_str(changes_json)?;
    let changes = from_json_changes(&raw)?;
    converge(path, &changes, options)
}

/// Expand a leading `~` to the home directory of the current user.
///
/// Returns the path unchanged if it has no leading `~` or the home
/// directory is unknown.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(path),
    };
    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
