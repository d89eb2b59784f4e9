//! Persisted lesson statuses (`status.json`).
//!
//! The file holds a flat JSON object of lesson id to status string. A missing
//! file is an empty map; every save rewrites the whole file.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::catalog::{LESSONS, merge_statuses};
use crate::core::types::{Lesson, StatusMap};

/// Errors surfaced by the status store.
#[derive(Debug, Error)]
pub enum StatusStoreError {
    #[error("status file {} is corrupt", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("permission denied accessing {}", .path.display())]
    Permission {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("serialize lesson statuses")]
    Serialize(#[source] serde_json::Error),

    #[error("{action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StatusStoreError {
    fn from_io(action: &'static str, path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::PermissionDenied {
            return Self::Permission {
                path: path.to_path_buf(),
                source,
            };
        }
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Load persisted statuses. A missing file yields an empty map.
pub fn load_statuses(path: &Path) -> Result<StatusMap, StatusStoreError> {
    debug!(path = %path.display(), "loading lesson statuses");
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("no status file, starting fresh");
            return Ok(StatusMap::new());
        }
        Err(err) => return Err(StatusStoreError::from_io("read status file", path, err)),
    };
    let statuses: StatusMap =
        serde_json::from_str(&contents).map_err(|source| StatusStoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(entries = statuses.len(), "lesson statuses loaded");
    Ok(statuses)
}

/// Atomically overwrite the status file with `statuses` (temp file + rename).
pub fn save_statuses(path: &Path, statuses: &StatusMap) -> Result<(), StatusStoreError> {
    debug!(path = %path.display(), entries = statuses.len(), "writing lesson statuses");
    let mut buf = serde_json::to_string_pretty(statuses).map_err(StatusStoreError::Serialize)?;
    buf.push('\n');
    write_atomic(path, &buf)
}

/// Load statuses and merge them into the compiled-in catalog.
pub fn load_lessons(path: &Path) -> Result<BTreeMap<String, Lesson>, StatusStoreError> {
    let statuses = load_statuses(path)?;
    Ok(merge_statuses(LESSONS, &statuses))
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), StatusStoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| StatusStoreError::from_io("create directory", parent, err))?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .map_err(|err| StatusStoreError::from_io("write temp status file", &tmp_path, err))?;
    fs::rename(&tmp_path, path)
        .map_err(|err| StatusStoreError::from_io("replace status file", path, err))?;
    Ok(())
}
