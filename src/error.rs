use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the library.
///
/// Only [`InvalidPath`](PromptpackError::InvalidPath), pattern errors and
/// pool failures end a run. Per-file I/O errors are turned into
/// [`Skipped`](crate::Skipped) records by the engine.
#[derive(Debug, Error)]
pub enum PromptpackError {
    /// The root is missing or not a directory.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// An exclude pattern could not be compiled.
    #[error("Walk error: {0}")]
    Walk(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

impl PromptpackError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PromptpackError::Io {
            path: path.into(),
            source,
        }
    }

    /// The message without the path, for reports that print the path themselves.
    pub(crate) fn reason(&self) -> String {
        match self {
            PromptpackError::Io { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}
