//! Plain file system operations with path-aware errors

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Create a directory and all of its parents.
///
/// Succeeds if the directory already exists. Any other failure, including
/// a regular file occupying the path, is returned as [`Error::Io`].
pub fn ensure_dir(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    if native_path.is_dir() {
        return Ok(());
    }
    tracing::debug!(path = %path, "Creating directory");
    fs::create_dir_all(&native_path).map_err(|e| Error::io(&native_path, e))
}
