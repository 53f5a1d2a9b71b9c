use std::path::Path;
use tokio::fs;
use crate::utils::{CompressorError, CompressorResult};

/// Get file size in bytes
pub async fn get_file_size(path: impl AsRef<Path>) -> CompressorResult<u64> {
    fs::metadata(path.as_ref())
        .await
        .map(|m| m.len())
        .map_err(|e| CompressorError::IO(format!("Failed to get file size: {}", e)))
}

/// Get file extension as lowercase string
pub fn get_extension(path: impl AsRef<Path>) -> CompressorResult<String> {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| {
            CompressorError::format(format!(
                "File has no extension: {}",
                path.as_ref().display()
            ))
        })
}
