//! Internal module for building a tree diagram from a list of walked entries.

use crate::engine::WalkEntry;
use std::collections::HashMap;
use std::path::Path;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Builds a visual tree string from a root directory and the entries under it.
///
/// Siblings are ordered by file name. Directories are suffixed with `/` and
/// expanded beneath themselves; the last sibling at each level gets the
/// closing connector. Every line, including the last, ends with `\n`.
///
/// Entries whose parent is not itself an entry (or the root) are not
/// reachable and do not appear.
pub(crate) fn build_tree_from_entries(root: &Path, entries: &[WalkEntry]) -> String {
    let mut children: HashMap<&Path, Vec<&WalkEntry>> = HashMap::new();
    for entry in entries.iter().filter(|e| e.path != root) {
        if let Some(parent) = entry.path.parent() {
            children.entry(parent).or_default().push(entry);
        }
    }
    for siblings in children.values_mut() {
        siblings.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    }
    let mut out = String::new();
    render(root, "", &children, &mut out);
    out
}

fn render(
    dir: &Path,
    prefix: &str,
    children: &HashMap<&Path, Vec<&WalkEntry>>,
    out: &mut String,
) {
    let Some(siblings) = children.get(dir) else {
        return;
    };
    for (i, entry) in siblings.iter().enumerate() {
        let is_last = i + 1 == siblings.len();
        let name = entry
            .path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        out.push_str(prefix);
        out.push_str(if is_last { LAST_BRANCH } else { BRANCH });
        out.push_str(&name);
        if entry.is_dir {
            out.push('/');
        }
        out.push('\n');
        if entry.is_dir {
            let nested = format!("{}{}", prefix, if is_last { SPACE } else { PIPE });
            render(&entry.path, &nested, children, out);
        }
    }
}
