//! Core types for compression settings and per-file outcomes.

use serde::{Deserialize, Serialize};

/// Default size cap in bytes (2 MiB).
pub const DEFAULT_MAX_SIZE: u64 = 2 * 1024 * 1024;

/// Default starting quality for the ladder.
pub const DEFAULT_START_QUALITY: u8 = 85;

/// Quality used for the single resize fallback.
pub const DEFAULT_RESIZE_QUALITY: u8 = 60;

/// Fixed tail of the quality ladder tried after the starting quality.
pub const QUALITY_LADDER_TAIL: [u8; 4] = [75, 60, 50, 40];

/// Configuration settings for size-cap compression.
///
/// Controls the byte threshold, the starting quality of the ladder, and the
/// quality used for the resize fallback.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompressionSettings {
    /// Maximum allowed file size in bytes
    #[serde(rename = "maxSize")]
    pub max_size: u64,
    /// First quality level tried (1-100)
    #[serde(rename = "startQuality")]
    pub start_quality: u8,
    /// Quality used when encoding after the resize fallback
    #[serde(rename = "resizeQuality")]
    pub resize_quality: u8,
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            start_quality: DEFAULT_START_QUALITY,
            resize_quality: DEFAULT_RESIZE_QUALITY,
        }
    }
}

impl CompressionSettings {
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_start_quality(mut self, quality: u8) -> Self {
        self.start_quality = quality;
        self
    }

    /// The full quality ladder: starting quality followed by the fixed tail.
    ///
    /// The tail is tried in order even when an entry is not lower than the
    /// starting quality; the ladder is a fixed sequence, not a strictly
    /// descending one.
    pub fn quality_ladder(&self) -> Vec<u8> {
        let mut ladder = Vec::with_capacity(1 + QUALITY_LADDER_TAIL.len());
        ladder.push(self.start_quality);
        ladder.extend_from_slice(&QUALITY_LADDER_TAIL);
        ladder
    }
}

/// Final status of a per-file compression attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    /// File was re-encoded and now fits under the cap
    Compressed,
    /// File was already under the cap and left untouched
    Skipped,
    /// File was re-encoded and downscaled but still exceeds the cap
    TooLarge,
    /// File could not be processed
    Failed,
}

/// Result of a single file compression.
///
/// Contains the original and final file information along with
/// compression statistics.
#[derive(Debug, Clone, Serialize)]
pub struct CompressionOutcome {
    /// Final status of the attempt
    pub status: OutcomeStatus,
    /// Path to the original input file
    pub input_path: String,
    /// Path the (possibly converted) output was written to
    pub output_path: String,
    /// Original file size in bytes
    pub original_size: u64,
    /// Final file size in bytes
    pub final_size: u64,
    /// Bytes saved (can be negative if the file grew)
    #[serde(rename = "savedBytes")]
    pub saved_bytes: i64,
    /// Compression ratio as a percentage of the original size removed
    #[serde(rename = "compressionRatio")]
    pub compression_ratio: f64,
    /// Whether the resize fallback was applied
    #[serde(rename = "wasResized")]
    pub was_resized: bool,
    /// Error message if the attempt failed
    pub error: Option<String>,
}

impl CompressionOutcome {
    fn ratio(original: u64, final_size: u64) -> f64 {
        if original == 0 {
            0.0
        } else {
            (original as i64 - final_size as i64) as f64 / original as f64 * 100.0
        }
    }

    pub fn compressed(
        input_path: String,
        output_path: String,
        original_size: u64,
        final_size: u64,
        was_resized: bool,
    ) -> Self {
        Self {
            status: OutcomeStatus::Compressed,
            input_path,
            output_path,
            original_size,
            final_size,
            saved_bytes: original_size as i64 - final_size as i64,
            compression_ratio: Self::ratio(original_size, final_size),
            was_resized,
            error: None,
        }
    }

    pub fn skipped(input_path: String, size: u64) -> Self {
        Self {
            status: OutcomeStatus::Skipped,
            output_path: input_path.clone(),
            input_path,
            original_size: size,
            final_size: size,
            saved_bytes: 0,
            compression_ratio: 0.0,
            was_resized: false,
            error: None,
        }
    }

    pub fn too_large(
        input_path: String,
        output_path: String,
        original_size: u64,
        final_size: u64,
    ) -> Self {
        Self {
            status: OutcomeStatus::TooLarge,
            input_path,
            output_path,
            original_size,
            final_size,
            saved_bytes: original_size as i64 - final_size as i64,
            compression_ratio: Self::ratio(original_size, final_size),
            was_resized: true,
            error: None,
        }
    }

    pub fn failed(input_path: String, error: String) -> Self {
        Self {
            status: OutcomeStatus::Failed,
            output_path: input_path.clone(),
            input_path,
            original_size: 0,
            final_size: 0,
            saved_bytes: 0,
            compression_ratio: 0.0,
            was_resized: false,
            error: Some(error),
        }
    }
}
