//! Binary content detection.

use crate::error::PromptpackError;
use crate::options::BinaryDetection;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

const BLOCK_SIZE: usize = 1024;

/// Returns `true` if `path` should be kept out of the aggregated content.
///
/// With [`BinaryDetection::ControlBytes`] the whole file is scanned block by
/// block and the scan stops at the first control byte other than newline,
/// carriage return or tab.
///
/// # Errors
///
/// Returns [`PromptpackError::Io`] when the file cannot be opened or read.
/// Callers treat that as binary.
pub fn is_binary(path: &Path, detection: BinaryDetection) -> Result<bool, PromptpackError> {
    match detection {
        BinaryDetection::None => Ok(false),
        BinaryDetection::ControlBytes => scan_control_bytes(path),
        BinaryDetection::Accurate => inspect_first_block(path),
    }
}

/// The byte test applied by [`BinaryDetection::ControlBytes`].
pub fn is_disqualifying(byte: u8) -> bool {
    byte < 32 && !matches!(byte, b'\n' | b'\r' | b'\t')
}

fn scan_control_bytes(path: &Path) -> Result<bool, PromptpackError> {
    let mut file = File::open(path).map_err(|e| PromptpackError::io(path, e))?;
    let mut block = [0u8; BLOCK_SIZE];
    loop {
        let n = match file.read(&mut block) {
            Ok(0) => return Ok(false),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(PromptpackError::io(path, e)),
        };
        if block[..n].iter().copied().any(is_disqualifying) {
            return Ok(true);
        }
    }
}

fn inspect_first_block(path: &Path) -> Result<bool, PromptpackError> {
    let file = File::open(path).map_err(|e| PromptpackError::io(path, e))?;
    let mut first_block = Vec::with_capacity(BLOCK_SIZE);
    file.take(BLOCK_SIZE as u64)
        .read_to_end(&mut first_block)
        .map_err(|e| PromptpackError::io(path, e))?;
    Ok(content_inspector::inspect(&first_block).is_binary())
}
