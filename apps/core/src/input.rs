//! Input loading.
//! Supports: inline text, stdin, and TXT / MD / TEXT files

use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use crate::error::AppError;

/// Extensions read as plain UTF-8 text. Empty means no extension.
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "markdown", "text", ""];

/// Decode file data as text based on the file extension
pub fn text_from_bytes(file_name: &str, file_data: &[u8]) -> Result<String, AppError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    if !TEXT_EXTENSIONS.iter().any(|ext| *ext == extension) {
        return Err(AppError::UnsupportedInput(format!(
            "unsupported file extension: {}",
            extension
        )));
    }

    decode_text(file_name, file_data)
}

/// UTF-8 decode, rejecting binary content
fn decode_text(source: &str, data: &[u8]) -> Result<String, AppError> {
    if data.contains(&0) {
        warn!("Rejected binary input from {}", source);
        return Err(AppError::UnsupportedInput(format!(
            "{}: binary files are not supported",
            source
        )));
    }

    String::from_utf8(data.to_vec())
        .map_err(|e| AppError::UnsupportedInput(format!("{}: invalid UTF-8 content: {}", source, e)))
}

/// Reject inputs above the configured size cap
pub fn enforce_limit(text: &str, max_bytes: usize) -> Result<(), AppError> {
    if text.len() > max_bytes {
        return Err(AppError::Validation(format!(
            "input is {} bytes, limit is {}",
            text.len(),
            max_bytes
        )));
    }
    Ok(())
}

/// Read and decode a text file
pub fn read_file(path: &Path, max_bytes: usize) -> Result<String, AppError> {
    let file_name = path.to_string_lossy();
    info!("Reading input file: {}", file_name);

    let data = std::fs::read(path)?;
    if data.len() > max_bytes {
        return Err(AppError::Validation(format!(
            "{} is {} bytes, limit is {}",
            file_name,
            data.len(),
            max_bytes
        )));
    }

    text_from_bytes(&file_name, &data)
}

/// Read all of stdin as text
pub fn read_stdin(max_bytes: usize) -> Result<String, AppError> {
    read_from(std::io::stdin().lock(), "stdin", max_bytes)
}

/// Read a stream to the end and decode it as text
pub fn read_from<R: Read>(reader: R, source: &str, max_bytes: usize) -> Result<String, AppError> {
    let mut data = Vec::new();
    // One byte past the cap is enough to detect oversize input
    reader.take(max_bytes as u64 + 1).read_to_end(&mut data)?;

    let text = decode_text(source, &data)?;
    enforce_limit(&text, max_bytes)?;
    Ok(text)
}
