//! Loading and saving the target document.
//!
//! A missing file is an empty document, not an error. Saving goes through a
//! temporary file in the target directory that is then renamed over the
//! target, so a reader sees either the old or the new content.

pub mod relaxed;

pub use relaxed::strip_comments;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use crate::json_stable::stringify_pretty;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// ── Parse strategy ────────────────────────────────────────────────────────

/// How document text is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// Strip comments, then parse as JSON.
    Relaxed,
    /// Plain JSON.
    Strict,
}

impl Default for ParseStrategy {
    /// `Relaxed` when built with the `comments` feature, `Strict` otherwise.
    fn default() -> Self {
        if cfg!(feature = "comments") {
            ParseStrategy::Relaxed
        } else {
            ParseStrategy::Strict
        }
    }
}

impl ParseStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseStrategy::Relaxed => "relaxed",
            ParseStrategy::Strict => "strict",
        }
    }
}

/// Parse document text with the given strategy.
pub fn parse_document(text: &str, strategy: ParseStrategy) -> Result<Value, serde_json::Error> {
    match strategy {
        ParseStrategy::Relaxed => serde_json::from_str(&strip_comments(text)),
        ParseStrategy::Strict => serde_json::from_str(text),
    }
}

// ── Load / save ───────────────────────────────────────────────────────────

/// Load the document at `path`; a file that does not exist yields `{}`.
pub fn load(path: &Path, strategy: ParseStrategy) -> Result<Value, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "document absent, starting from an empty object");
            return Ok(Value::Object(Map::new()));
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    debug!(path = %path.display(), bytes = text.len(), strategy = strategy.as_str(), "document loaded");
    parse_document(&text, strategy).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Create the parent directory of `path` if needed.
///
/// An existing directory is success; any other failure is reported.
pub fn ensure_parent_dir(path: &Path) -> Result<(), StoreError> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })
}

/// Write `doc` to `path` in canonical form, replacing the file atomically.
pub fn save(path: &Path, doc: &Value) -> Result<(), StoreError> {
    let write_err = |source: io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let text = stringify_pretty(doc);

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    // Temp files are created 0600.
    if let Some(perms) = target_permissions(path) {
        tmp.as_file().set_permissions(perms).map_err(write_err)?;
    }
    tmp.write_all(text.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    info!(path = %path.display(), bytes = text.len(), "document written");
    Ok(())
}

/// Mode for the replacement file: the target's own, or 0644 for a new file.
fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    if let Ok(meta) = fs::metadata(path) {
        return Some(meta.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(fs::Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}
