use crate::error::PromptpackError;
use std::fs;
use std::path::Path;

pub const FENCE_OPEN: &[u8] = b"```\n";
pub const FENCE_CLOSE: &[u8] = b"\n```\n\n";

/// Appends the block for one file to `buf`: its name, an opening fence, the
/// file's bytes unchanged, then a closing fence and a blank line.
///
/// Nothing is appended if the file cannot be read.
pub fn aggregate_file(path: &Path, buf: &mut Vec<u8>) -> Result<(), PromptpackError> {
    let bytes = fs::read(path).map_err(|e| PromptpackError::io(path, e))?;
    let name = path.file_name().unwrap_or(path.as_os_str()).as_encoded_bytes();
    buf.reserve(name.len() + FENCE_OPEN.len() + bytes.len() + FENCE_CLOSE.len());
    buf.extend_from_slice(name);
    buf.extend_from_slice(FENCE_OPEN);
    buf.extend_from_slice(&bytes);
    buf.extend_from_slice(FENCE_CLOSE);
    Ok(())
}
