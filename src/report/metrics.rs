//! Aggregate metrics for a compression batch.

use serde::Serialize;
use std::time::Duration;
use crate::core::{CompressionOutcome, OutcomeStatus};

/// Aggregated statistics over a finished batch.
///
/// Built once from the collected outcomes; serializable for the optional
/// JSON report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchMetrics {
    /// Number of files considered
    pub total_files: usize,
    /// Files re-encoded under the cap
    pub compressed: usize,
    /// Files already under the cap
    pub skipped: usize,
    /// Files that stayed over the cap even after the resize fallback
    pub too_large: usize,
    /// Files that could not be processed
    pub failed: usize,
    /// Sum of original sizes across all outcomes, in bytes
    pub total_original_bytes: u64,
    /// Sum of final sizes across all outcomes, in bytes
    pub total_final_bytes: u64,
    /// Bytes saved, summed over successfully compressed files only
    pub saved_bytes: i64,
    /// Average compression ratio over compressed files, as a percentage
    pub average_compression_ratio: f64,
    /// Total wall-clock time for the batch in milliseconds
    pub total_time_ms: u64,
    /// Average time per file in milliseconds
    pub avg_per_file_ms: f64,
    /// Throughput in files per second
    pub throughput_files_per_sec: f64,
}

impl BatchMetrics {
    pub fn from_outcomes(outcomes: &[CompressionOutcome], elapsed: Duration) -> Self {
        let mut metrics = Self {
            total_files: outcomes.len(),
            compressed: 0,
            skipped: 0,
            too_large: 0,
            failed: 0,
            total_original_bytes: 0,
            total_final_bytes: 0,
            saved_bytes: 0,
            average_compression_ratio: 0.0,
            total_time_ms: elapsed.as_millis() as u64,
            avg_per_file_ms: 0.0,
            throughput_files_per_sec: 0.0,
        };

        let mut ratio_sum = 0.0;
        for outcome in outcomes {
            metrics.total_original_bytes += outcome.original_size;
            metrics.total_final_bytes += outcome.final_size;
            match outcome.status {
                OutcomeStatus::Compressed => {
                    metrics.compressed += 1;
                    metrics.saved_bytes += outcome.saved_bytes;
                    ratio_sum += outcome.compression_ratio;
                }
                OutcomeStatus::Skipped => metrics.skipped += 1,
                OutcomeStatus::TooLarge => metrics.too_large += 1,
                OutcomeStatus::Failed => metrics.failed += 1,
            }
        }

        if metrics.compressed > 0 {
            metrics.average_compression_ratio = ratio_sum / metrics.compressed as f64;
        }
        if metrics.total_files > 0 {
            metrics.avg_per_file_ms =
                elapsed.as_secs_f64() * 1000.0 / metrics.total_files as f64;
        }
        if elapsed.as_secs_f64() > 0.0 {
            metrics.throughput_files_per_sec =
                metrics.total_files as f64 / elapsed.as_secs_f64();
        }

        metrics
    }
}
