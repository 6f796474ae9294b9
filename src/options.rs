use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::PathBuf;
/// Worker count used when the host's parallelism cannot be detected.
pub const FALLBACK_THREADS: usize = 4;
/// Name excluded from both the tree and the aggregated content by default.
pub const DEFAULT_EXCLUDE: &str = ".git";
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryDetection {
    /// Any byte below 0x20 other than `\n`, `\r`, `\t` marks the file binary.
    #[default]
    #[serde(rename = "control")]
    ControlBytes,
    /// `content_inspector` heuristics over the first block.
    Accurate,
    None,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptpackOptions {
    pub root: PathBuf,
    /// `None` means one worker per available hardware thread.
    pub num_threads: Option<usize>,
    pub binary_detection: BinaryDetection,
    /// Entry names pruned from traversal, matched against a single path component.
    pub exclude_names: Vec<String>,
}
impl Default for PromptpackOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            num_threads: None,
            binary_detection: BinaryDetection::ControlBytes,
            exclude_names: vec![DEFAULT_EXCLUDE.to_string()],
        }
    }
}
impl PromptpackOptions {
    /// Number of workers the executor will run, never zero.
    pub fn resolved_threads(&self) -> usize {
        match self.num_threads {
            Some(n) => n.max(1),
            None => std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(FALLBACK_THREADS),
        }
    }
}
#[derive(Debug, Default)]
pub struct PromptpackBuilder {
    options: PromptpackOptions,
}
impl PromptpackBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: PromptpackOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn num_threads(mut self, threads: usize) -> Self {
        self.options.num_threads = Some(threads);
        self
    }
    pub fn detect_threads(mut self) -> Self {
        self.options.num_threads = None;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn exclude_names(mut self, names: Vec<String>) -> Self {
        self.options.exclude_names = names;
        self
    }
    pub fn build(self) -> PromptpackOptions {
        self.options
    }
}
