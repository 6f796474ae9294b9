use crate::error::PromptpackError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// The stage of the pipeline in which a path was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipPhase {
    /// Directory traversal failed; the whole subtree is missing.
    Walk,
    /// The file could not be read while classifying it, so it is treated as binary.
    BinaryCheck,
    /// The file passed classification but could not be read for aggregation.
    Read,
}

/// A recoverable error: the path is left out and the run continues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skipped {
    /// The offending path, when the underlying error names one.
    pub path: Option<PathBuf>,
    pub phase: SkipPhase,
    pub reason: String,
}

impl Skipped {
    pub(crate) fn from_error(path: &Path, phase: SkipPhase, err: PromptpackError) -> Self {
        Self {
            path: Some(path.to_path_buf()),
            phase,
            reason: err.reason(),
        }
    }
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.phase {
            SkipPhase::Walk => "Error traversing",
            SkipPhase::BinaryCheck => "Error checking binary file",
            SkipPhase::Read => "Failed to read file",
        };
        match &self.path {
            Some(path) => write!(f, "{} {}: {}", what, path.display(), self.reason),
            None => write!(f, "{}: {}", what, self.reason),
        }
    }
}

/// The complete result of one run.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    /// Tree diagram of the root, one `\n`-terminated line per entry.
    pub tree: String,
    /// Tree, a blank line, then every file block in sorted order.
    ///
    /// This is exactly what gets written to `prompt.txt`. File contents are
    /// copied byte for byte, so the document need not be valid UTF-8.
    pub document: Vec<u8>,
    /// The eligible files, sorted by path bytes.
    pub files: Vec<PathBuf>,
    /// Everything left out because of an I/O error, in a deterministic order.
    pub skipped: Vec<Skipped>,
}
