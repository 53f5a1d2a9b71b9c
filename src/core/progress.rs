//! Batch progress tracking.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;
use crate::core::{CompressionOutcome, OutcomeStatus};

/// Snapshot of batch progress at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Number of completed tasks
    pub completed_tasks: usize,
    /// Total number of tasks in the batch
    pub total_tasks: usize,
    /// Progress percentage (0-100)
    pub progress_percentage: usize,
}

impl Progress {
    pub fn new(completed_tasks: usize, total_tasks: usize) -> Self {
        let progress_percentage = if total_tasks > 0 {
            (completed_tasks * 100) / total_tasks
        } else {
            0
        };

        Self {
            completed_tasks,
            total_tasks,
            progress_percentage,
        }
    }
}

/// Shared counter that turns task completions into progress snapshots.
///
/// Cheap to share across workers; completions may arrive in any order.
pub struct ProgressTracker {
    completed: AtomicUsize,
    total: usize,
}

impl ProgressTracker {
    pub fn new(total: usize) -> Self {
        Self {
            completed: AtomicUsize::new(0),
            total,
        }
    }

    /// Records a finished task and logs a one-line progress update.
    pub fn record(&self, outcome: &CompressionOutcome) -> Progress {
        let completed = self.completed.fetch_add(1, Ordering::SeqCst) + 1;
        let progress = Progress::new(completed, self.total);

        let verb = match outcome.status {
            OutcomeStatus::Compressed => "compressed",
            OutcomeStatus::Skipped => "skipped",
            OutcomeStatus::TooLarge => "still too large",
            OutcomeStatus::Failed => "failed",
        };
        info!(
            "[{}/{} {:>3}%] {} {}",
            progress.completed_tasks,
            progress.total_tasks,
            progress.progress_percentage,
            verb,
            outcome.input_path,
        );

        progress
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_math() {
        assert_eq!(Progress::new(0, 4).progress_percentage, 0);
        assert_eq!(Progress::new(1, 4).progress_percentage, 25);
        assert_eq!(Progress::new(4, 4).progress_percentage, 100);
        // Empty batch never divides by zero
        assert_eq!(Progress::new(0, 0).progress_percentage, 0);
    }

    #[test]
    fn test_tracker_counts_completions() {
        let tracker = ProgressTracker::new(3);
        let outcome = CompressionOutcome::skipped("a.jpg".into(), 100);

        assert_eq!(tracker.record(&outcome).completed_tasks, 1);
        assert_eq!(tracker.record(&outcome).completed_tasks, 2);
        let last = tracker.record(&outcome);
        assert_eq!(last.completed_tasks, 3);
        assert_eq!(last.progress_percentage, 100);
        assert_eq!(tracker.completed(), 3);
    }
}
