use crate::error::PromptpackError;
use std::fs;
use std::path::Path;

/// Counts maximal runs of non-whitespace bytes.
///
/// Whitespace is space, `\t`, `\n`, `\r`, vertical tab and form feed.
pub fn count_tokens(text: &[u8]) -> usize {
    let mut count = 0;
    let mut in_token = false;
    for &byte in text {
        if is_space(byte) {
            if in_token {
                count += 1;
                in_token = false;
            }
        } else {
            in_token = true;
        }
    }
    if in_token {
        count += 1;
    }
    count
}

/// Reads `path` back from disk and counts its tokens.
pub fn count_tokens_in_file(path: impl AsRef<Path>) -> Result<usize, PromptpackError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| PromptpackError::io(path, e))?;
    Ok(count_tokens(&bytes))
}

// u8::is_ascii_whitespace leaves out vertical tab.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}
