//! Per-file size-cap compression.
//!
//! A file over the cap is re-encoded as JPEG down a fixed quality ladder.
//! If no ladder step fits, the image is downscaled once by `sqrt(cap / size)`
//! and encoded a final time. Every attempt is encoded in memory; the output
//! file is written only when an attempt is accepted or the sequence ends, so a
//! failing file is never left half-written.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::RgbImage;
use std::fs;
use tracing::{debug, warn};

use crate::core::{CompressionOutcome, ImageTask};
use crate::processing::validation::validate_task;
use crate::utils::CompressorResult;

/// Stateless per-file compressor, shared by value across workers.
#[derive(Debug, Clone, Default)]
pub struct Compressor;

impl Compressor {
    pub fn new() -> Self {
        Self
    }

    /// Processes one task, folding any error into a failed outcome.
    ///
    /// Per-file errors never abort a batch; they are tallied in the summary.
    pub fn process(&self, task: &ImageTask) -> CompressionOutcome {
        match self.compress(task) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!("Failed to process {}: {}", task.input_path.display(), error);
                CompressionOutcome::failed(
                    task.input_path.to_string_lossy().into_owned(),
                    error.to_string(),
                )
            }
        }
    }

    fn compress(&self, task: &ImageTask) -> CompressorResult<CompressionOutcome> {
        validate_task(task)?;

        let input = task.input_path.to_string_lossy().into_owned();
        let output = task.output_path.to_string_lossy().into_owned();

        let original_size = fs::metadata(&task.input_path)?.len();
        if original_size <= task.settings.max_size {
            debug!("{} is already under the cap ({} bytes)", input, original_size);
            return Ok(CompressionOutcome::skipped(input, original_size));
        }

        // PNG inputs are flattened to RGB here, which is what makes the
        // JPEG conversion possible.
        let img = image::open(&task.input_path)?.to_rgb8();

        for quality in task.settings.quality_ladder() {
            let encoded = Self::encode_jpeg(&img, quality)?;
            debug!(
                "{}: quality {} -> {} bytes (cap {})",
                input,
                quality,
                encoded.len(),
                task.settings.max_size
            );
            if encoded.len() as u64 <= task.settings.max_size {
                fs::write(&task.output_path, &encoded)?;
                return Ok(CompressionOutcome::compressed(
                    input,
                    output,
                    original_size,
                    encoded.len() as u64,
                    false,
                ));
            }
        }

        // Ladder exhausted: one proportional downscale, then a final encode.
        let (width, height) = Self::resize_target(
            img.width(),
            img.height(),
            original_size,
            task.settings.max_size,
        );
        debug!(
            "{}: ladder exhausted, resizing {}x{} -> {}x{}",
            input,
            img.width(),
            img.height(),
            width,
            height
        );
        let resized = imageops::resize(&img, width, height, FilterType::Lanczos3);
        let encoded = Self::encode_jpeg(&resized, task.settings.resize_quality)?;
        let final_size = encoded.len() as u64;
        fs::write(&task.output_path, &encoded)?;

        if final_size <= task.settings.max_size {
            Ok(CompressionOutcome::compressed(
                input,
                output,
                original_size,
                final_size,
                true,
            ))
        } else {
            warn!(
                "{} still exceeds the cap after resize ({} > {} bytes)",
                input, final_size, task.settings.max_size
            );
            Ok(CompressionOutcome::too_large(
                input,
                output,
                original_size,
                final_size,
            ))
        }
    }

    /// Scales both dimensions by `sqrt(max_size / original_size)`.
    ///
    /// The square root keeps the pixel count proportional to the byte budget.
    /// Dimensions are floored but never drop below 1 px.
    fn resize_target(width: u32, height: u32, original_size: u64, max_size: u64) -> (u32, u32) {
        let ratio = (max_size as f64 / original_size as f64).sqrt();
        let width = ((width as f64 * ratio) as u32).max(1);
        let height = ((height as f64 * ratio) as u32).max(1);
        (width, height)
    }

    fn encode_jpeg(img: &RgbImage, quality: u8) -> CompressorResult<Vec<u8>> {
        let mut buf = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut buf, quality);
        encoder.encode_image(img)?;
        Ok(buf)
    }
}
