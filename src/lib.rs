//! # Promptpack
//!
//! `promptpack` snapshots a directory into a single text document: a tree diagram of
//! the directory followed by the contents of every text file, in a fixed order.
//!
//! Files are collected single-threaded, filtered by binary detection, sorted by path,
//! and split into contiguous chunks. One worker per chunk formats its files into a
//! private buffer, and the buffers are joined in chunk order, so the document is the
//! same on every run over an unchanged tree regardless of the worker count.
//!
//! Per-file and per-directory I/O errors never abort a run. They are collected in
//! [`Snapshot::skipped`] and the affected paths are left out.
//!
//! # Features
//!
//! - `parallel`: Runs the workers on a dedicated Rayon pool. Without it, chunks are
//!   processed one after another with identical output.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use promptpack::{BinaryDetection, PromptpackBuilder, count_tokens, output, promptpack};
//!
//! let options = PromptpackBuilder::new("my-project")
//!     .binary_detection(BinaryDetection::ControlBytes)
//!     .num_threads(8)
//!     .build();
//!
//! let snapshot = promptpack(options).expect("Failed to scan directory");
//! let path = output::output_path("my-project").expect("Failed to resolve output path");
//! output::write_document(&snapshot, &path).expect("Failed to write output");
//!
//! println!("{} files, {} tokens", snapshot.files.len(), count_tokens(&snapshot.document));
//! ```

mod aggregate;
mod binary;
mod engine;
mod error;
mod options;
pub mod output;
mod partition;
mod tokens;
mod tree;
mod types;

pub use aggregate::aggregate_file;
pub use binary::{is_binary, is_disqualifying};
pub use engine::promptpack;
pub use error::PromptpackError;
pub use options::{
    BinaryDetection, DEFAULT_EXCLUDE, FALLBACK_THREADS, PromptpackBuilder, PromptpackOptions,
};
pub use partition::partition;
pub use tokens::{count_tokens, count_tokens_in_file};
pub use types::{SkipPhase, Skipped, Snapshot};
