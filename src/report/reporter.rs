use super::metrics::BatchMetrics;
use std::fmt;

/// Renders a finished batch as a human-readable summary.
pub struct SummaryReporter {
    metrics: BatchMetrics,
}

impl SummaryReporter {
    pub fn from_metrics(metrics: BatchMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &BatchMetrics {
        &self.metrics
    }

    fn safe_div(numerator: f64, denominator: f64) -> f64 {
        if denominator == 0.0 {
            0.0
        } else {
            numerator / denominator
        }
    }

    pub fn format_bytes(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.2} GB", Self::safe_div(bytes as f64, GB as f64))
        } else if bytes >= MB {
            format!("{:.2} MB", Self::safe_div(bytes as f64, MB as f64))
        } else if bytes >= KB {
            format!("{:.2} KB", Self::safe_div(bytes as f64, KB as f64))
        } else {
            format!("{} B", bytes)
        }
    }
}

impl fmt::Display for SummaryReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Size-Cap Compression Report ===")?;
        writeln!(f)?;

        writeln!(f, "Files:")?;
        writeln!(f, "- Compressed successfully: {}", self.metrics.compressed)?;
        writeln!(f, "- Skipped (already small): {}", self.metrics.skipped)?;
        writeln!(f, "- Failed to reach the cap: {}", self.metrics.too_large)?;
        writeln!(f, "- Errors: {}", self.metrics.failed)?;
        writeln!(f)?;

        writeln!(f, "Sizes:")?;
        writeln!(
            f,
            "- Total: {} → {}",
            Self::format_bytes(self.metrics.total_original_bytes),
            Self::format_bytes(self.metrics.total_final_bytes)
        )?;
        writeln!(
            f,
            "- Space saved: {}",
            Self::format_bytes(self.metrics.saved_bytes.max(0) as u64)
        )?;
        if self.metrics.compressed > 0 {
            writeln!(
                f,
                "- Average compression: {:.1}% (original → final)",
                self.metrics.average_compression_ratio
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Timing:")?;
        writeln!(
            f,
            "- Total Duration: {:.2}s",
            self.metrics.total_time_ms as f64 / 1000.0
        )?;
        writeln!(
            f,
            "- Average Processing Time: {:.2}ms/file",
            self.metrics.avg_per_file_ms
        )?;
        writeln!(
            f,
            "- Throughput: {:.2} files/s",
            self.metrics.throughput_files_per_sec
        )?;

        Ok(())
    }
}
