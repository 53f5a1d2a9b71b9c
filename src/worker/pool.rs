use std::sync::Arc;
use tokio::sync::{Mutex, Semaphore};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::core::{CompressionOutcome, ImageTask, ProgressTracker};
use crate::processing::Compressor;
use crate::utils::{CompressorError, CompressorResult};

/// Semaphore-bounded pool running one compression per permit.
///
/// The actual decode/encode work is CPU-bound and runs on the blocking thread
/// pool; the semaphore caps how many files are in flight at once.
#[derive(Clone)]
pub struct WorkerPool {
    compressor: Compressor,
    active_workers: Arc<Mutex<usize>>,
    semaphore: Arc<Semaphore>,
    worker_count: usize,
}

impl WorkerPool {
    /// Creates a pool with the given permit count, defaulting to the number
    /// of logical CPUs.
    pub fn new(worker_count: Option<usize>) -> Self {
        let worker_count = worker_count.unwrap_or_else(num_cpus::get).max(1);
        Self {
            compressor: Compressor::new(),
            active_workers: Arc::new(Mutex::new(0)),
            semaphore: Arc::new(Semaphore::new(worker_count)),
            worker_count,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Processes a single task through the pool.
    pub async fn process(&self, task: ImageTask) -> CompressorResult<CompressionOutcome> {
        debug!("Acquiring permit for task: {}", task.input_path.display());
        let _permit = self.semaphore.acquire().await.map_err(|e| {
            warn!("Failed to acquire semaphore: {}", e);
            CompressorError::worker(format!("Failed to acquire worker: {}", e))
        })?;

        {
            let mut count = self.active_workers.lock().await;
            *count += 1;
            debug!(
                "Worker started - Active: {}/{}, Task: {}",
                *count,
                self.worker_count,
                task.input_path.display()
            );
        }

        let compressor = self.compressor.clone();
        let result = tokio::task::spawn_blocking(move || compressor.process(&task))
            .await
            .map_err(|e| CompressorError::worker(format!("Worker task panicked: {}", e)));

        {
            let mut count = self.active_workers.lock().await;
            *count -= 1;
            debug!("Worker finished - Active: {}/{}", *count, self.worker_count);
        }

        result
    }

    /// Processes a batch of tasks, reporting progress as completions arrive.
    ///
    /// Completion order is unordered; per-file failures become outcomes rather
    /// than aborting the batch.
    pub async fn process_batch(&self, tasks: Vec<ImageTask>) -> Vec<CompressionOutcome> {
        debug!(
            "Processing batch of {} tasks with {} workers",
            tasks.len(),
            self.worker_count
        );
        let tracker = Arc::new(ProgressTracker::new(tasks.len()));

        let mut set = JoinSet::new();
        for task in tasks {
            let pool = self.clone();
            let tracker = Arc::clone(&tracker);
            set.spawn(async move {
                let input = task.input_path.to_string_lossy().into_owned();
                let outcome = match pool.process(task).await {
                    Ok(outcome) => outcome,
                    Err(error) => CompressionOutcome::failed(input, error.to_string()),
                };
                tracker.record(&outcome);
                outcome
            });
        }

        let mut outcomes = Vec::new();
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => warn!("Batch task join failed: {}", e),
            }
        }
        outcomes
    }

    pub async fn get_active_workers(&self) -> usize {
        *self.active_workers.lock().await
    }
}
