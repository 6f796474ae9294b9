//! Placement and writing of the aggregate document.
//!
//! The document goes next to the traversed directory rather than inside it,
//! so a later run over the same root does not pick up the previous output.

use crate::{PromptpackError, Snapshot};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the aggregate document.
pub const OUTPUT_FILE_NAME: &str = "prompt.txt";

/// Returns the absolute path of the output file for `root`.
///
/// The root is canonicalized and the file placed in its parent directory. A
/// root without a parent (the filesystem root) holds the file itself.
pub fn output_path(root: impl AsRef<Path>) -> Result<PathBuf, PromptpackError> {
    let root = root.as_ref();
    let canonical = fs::canonicalize(root).map_err(|e| PromptpackError::io(root, e))?;
    let dir = canonical.parent().unwrap_or(&canonical);
    Ok(dir.join(OUTPUT_FILE_NAME))
}

/// Writes the snapshot's document to `path`, replacing any existing file.
pub fn write_document(snapshot: &Snapshot, path: impl AsRef<Path>) -> Result<(), PromptpackError> {
    fs::write(&path, &snapshot.document).map_err(|e| PromptpackError::io(path.as_ref(), e))?;
    Ok(())
}
