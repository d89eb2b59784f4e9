//! Copying reference solutions over the learner's workbook file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("solution file not found: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("copy {} -> {}: {source}", .source_path.display(), .dest_path.display())]
    Io {
        source_path: PathBuf,
        dest_path: PathBuf,
        source: io::Error,
    },
}

/// Copy `source` to `dest`, returning the number of bytes copied.
///
/// The source is checked first so a missing solution never truncates the
/// destination. The destination's parent must already exist.
pub fn copy_solution(source: &Path, dest: &Path) -> Result<u64, CopyError> {
    if !source.is_file() {
        return Err(CopyError::MissingSource(source.to_path_buf()));
    }
    let bytes = fs::copy(source, dest).map_err(|err| CopyError::Io {
        source_path: source.to_path_buf(),
        dest_path: dest.to_path_buf(),
        source: err,
    })?;
    debug!(source = %source.display(), dest = %dest.display(), bytes, "solution copied");
    Ok(bytes)
}
