//! Image task definition and output-path derivation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::core::CompressionSettings;
use crate::utils::{format_from_extension, CompressorResult, ImageFormat};

/// Represents a single image compression task.
///
/// Contains the input/output paths and settings for processing one image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageTask {
    /// Path to the source image file
    pub input_path: PathBuf,
    /// Path where the re-encoded image will be written
    pub output_path: PathBuf,
    /// Source format derived from the input extension
    pub format: ImageFormat,
    /// Compression settings for this task
    pub settings: CompressionSettings,
}

impl ImageTask {
    /// Creates a task for a discovered file, deriving the output path.
    ///
    /// JPEG inputs are re-encoded in place. PNG inputs are converted to JPEG,
    /// so the output path swaps the extension for `.jpg`; the source PNG is
    /// left on disk.
    pub fn for_file(path: &Path, settings: CompressionSettings) -> CompressorResult<Self> {
        let format = format_from_extension(path)?;
        let output_path = if format.needs_jpeg_conversion() {
            path.with_extension(ImageFormat::Jpeg.primary_extension())
        } else {
            path.to_path_buf()
        };

        Ok(Self {
            input_path: path.to_path_buf(),
            output_path,
            format,
            settings,
        })
    }

    /// Whether this task converts the file to a different format.
    pub fn converts_format(&self) -> bool {
        self.format.needs_jpeg_conversion()
    }
}
