use crate::aggregate::aggregate_file;
use crate::binary::is_binary;
use crate::error::PromptpackError;
use crate::options::{BinaryDetection, PromptpackOptions};
use crate::partition::partition;
use crate::tree::build_tree_from_entries;
use crate::types::{SkipPhase, Skipped, Snapshot};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
/// One entry produced by the walker, the root included.
#[derive(Debug, Clone)]
pub(crate) struct WalkEntry {
    pub(crate) path: PathBuf,
    pub(crate) is_dir: bool,
    pub(crate) is_file: bool,
}
/// Output of one worker: its text blocks in chunk order and the files it had to skip.
#[derive(Debug, Default)]
struct WorkerBuffer {
    text: Vec<u8>,
    skipped: Vec<Skipped>,
}
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &PromptpackOptions) -> Result<Self, PromptpackError> {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .follow_links(true)
            .sort_by_file_name(|a, b| a.cmp(b));
        if !options.exclude_names.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for name in &options.exclude_names {
                let glob = globset::Glob::new(name).map_err(|e| {
                    PromptpackError::Walk(format!("Invalid exclude pattern '{}': {}", name, e))
                })?;
                glob_builder.add(glob);
            }
            let matcher = glob_builder
                .build()
                .map_err(|e| PromptpackError::Walk(format!("Failed to build glob set: {}", e)))?;
            builder.filter_entry(move |entry| !matcher.is_match(entry.file_name()));
        }
        Ok(Self {
            inner: builder.build(),
        })
    }
    /// Walks the whole tree, following directory links so the diagram shows
    /// their contents. Files reached through a linked directory are listed but
    /// never marked eligible; link cycles surface as walk errors.
    fn collect_entries(self) -> (Vec<WalkEntry>, Vec<Skipped>) {
        let mut entries = Vec::new();
        let mut skipped = Vec::new();
        let mut linked_dirs: Vec<PathBuf> = Vec::new();
        for result in self.inner {
            match result {
                Ok(entry) => {
                    let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                    let is_link = entry.depth() > 0 && entry.path_is_symlink();
                    let path = entry.into_path();
                    let via_link = linked_dirs.iter().any(|dir| path.starts_with(dir));
                    if is_dir && is_link && !via_link {
                        linked_dirs.push(path.clone());
                    }
                    let is_file = !via_link && path.is_file();
                    entries.push(WalkEntry {
                        path,
                        is_dir,
                        is_file,
                    });
                }
                Err(e) => {
                    let (path, reason) = split_walk_error(e);
                    let skip = Skipped {
                        path,
                        phase: SkipPhase::Walk,
                        reason,
                    };
                    #[cfg(feature = "logging")]
                    tracing::debug!("Skipped: {}", skip);
                    skipped.push(skip);
                }
            }
        }
        (entries, skipped)
    }
}
fn split_walk_error(err: ignore::Error) -> (Option<PathBuf>, String) {
    match err {
        ignore::Error::WithPath { path, err } => (Some(path), err.to_string()),
        ignore::Error::WithDepth { err, .. } => split_walk_error(*err),
        other => (None, other.to_string()),
    }
}
fn validate_root(root: &Path) -> Result<(), PromptpackError> {
    let metadata = fs::metadata(root).map_err(|_| {
        PromptpackError::InvalidPath(format!("{} does not exist", root.display()))
    })?;
    if !metadata.is_dir() {
        return Err(PromptpackError::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }
    Ok(())
}
/// Keeps the text files among `entries`, sorted by the bytes of their full path.
///
/// A file that cannot be read during classification counts as binary and is
/// recorded in `skipped`.
fn collect_eligible(
    entries: &[WalkEntry],
    detection: BinaryDetection,
    skipped: &mut Vec<Skipped>,
) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in entries.iter().filter(|e| e.is_file) {
        match is_binary(&entry.path, detection) {
            Ok(false) => files.push(entry.path.clone()),
            Ok(true) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Binary file detected: {}", entry.path.display());
            }
            Err(e) => {
                let skip = Skipped::from_error(&entry.path, SkipPhase::BinaryCheck, e);
                #[cfg(feature = "logging")]
                tracing::debug!("Skipped: {}", skip);
                skipped.push(skip);
            }
        }
    }
    files.sort_by(|a, b| {
        a.as_os_str()
            .as_encoded_bytes()
            .cmp(b.as_os_str().as_encoded_bytes())
    });
    files
}
fn aggregate_chunk(chunk: &[PathBuf]) -> WorkerBuffer {
    let mut buffer = WorkerBuffer::default();
    for path in chunk {
        if let Err(e) = aggregate_file(path, &mut buffer.text) {
            let skip = Skipped::from_error(path, SkipPhase::Read, e);
            #[cfg(feature = "logging")]
            tracing::debug!("Skipped: {}", skip);
            buffer.skipped.push(skip);
        }
    }
    buffer
}
/// Runs one task per chunk on a pool sized to the number of chunks.
///
/// Each task owns its chunk and its output slot, so the returned buffers are
/// in chunk order no matter which task finishes first.
#[cfg(feature = "parallel")]
fn run_workers(chunks: &[&[PathBuf]]) -> Result<Vec<WorkerBuffer>, PromptpackError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(chunks.len())
        .thread_name(|i| format!("promptpack-worker-{}", i))
        .build()
        .map_err(|e| PromptpackError::ThreadPool(e.to_string()))?;
    let mut buffers: Vec<WorkerBuffer> =
        chunks.iter().map(|_| WorkerBuffer::default()).collect();
    pool.scope(|scope| {
        for (chunk, buffer) in chunks.iter().zip(buffers.iter_mut()) {
            scope.spawn(move |_| *buffer = aggregate_chunk(chunk));
        }
    });
    Ok(buffers)
}
#[cfg(not(feature = "parallel"))]
fn run_workers(chunks: &[&[PathBuf]]) -> Result<Vec<WorkerBuffer>, PromptpackError> {
    Ok(chunks.iter().map(|chunk| aggregate_chunk(chunk)).collect())
}
pub fn promptpack(options: PromptpackOptions) -> Result<Snapshot, PromptpackError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting promptpack with root: {}", options.root.display());
    validate_root(&options.root)?;
    let walker = Walker::new(&options)?;
    let (entries, mut skipped) = walker.collect_entries();
    let tree = build_tree_from_entries(&options.root, &entries);
    let files = collect_eligible(&entries, options.binary_detection, &mut skipped);
    let num_threads = options.resolved_threads();
    let chunks = partition(&files, num_threads);
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Aggregating {} files across {} workers",
        files.len(),
        chunks.len()
    );
    let buffers = run_workers(&chunks)?;
    let body_len: usize = buffers.iter().map(|b| b.text.len()).sum();
    let mut document = Vec::with_capacity(tree.len() + 1 + body_len);
    document.extend_from_slice(tree.as_bytes());
    document.push(b'\n');
    for buffer in buffers {
        document.extend_from_slice(&buffer.text);
        skipped.extend(buffer.skipped);
    }
    Ok(Snapshot {
        tree,
        document,
        files,
        skipped,
    })
}
