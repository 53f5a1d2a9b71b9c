// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod scanner;
pub mod processing;
pub mod worker;
pub mod report;
pub mod cli;

// Public exports for external consumers
pub use self::core::{CompressionOutcome, CompressionSettings, ImageTask, OutcomeStatus};
pub use processing::Compressor;
pub use report::{BatchMetrics, SummaryReporter};
pub use scanner::find_images;
pub use utils::{CompressorError, CompressorResult};
pub use worker::WorkerPool;

// This library file is used as a public API for consuming this crate as a library.
// The actual application entry point is in main.rs.
