use std::path::{Path, PathBuf};

use crate::errors::ScriptError;

/// Walk up from `start` looking for a file named `filename`.
/// Returns the path to the directory containing the file, or `None`.
pub fn find_ancestor_with(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Read a UTF-8 file, logging the path at trace level.
pub fn read_text(path: &Path) -> Result<String, ScriptError> {
    tracing::trace!(path = %path.display(), "reading file");
    Ok(std::fs::read_to_string(path)?)
}
