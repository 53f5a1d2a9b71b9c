//! Core application types.
//!
//! This module contains the fundamental types used throughout the application:
//! - [`ImageTask`]: Represents one file to re-encode
//! - [`CompressionSettings`]: Size cap and quality ladder configuration
//! - [`CompressionOutcome`]: Result of a single file compression
//! - [`ProgressTracker`]: Progress tracking for batch operations

mod progress;
mod task;
mod types;

pub use progress::{Progress, ProgressTracker};
pub use task::ImageTask;
pub use types::{
    CompressionOutcome, CompressionSettings, OutcomeStatus, DEFAULT_MAX_SIZE,
    DEFAULT_RESIZE_QUALITY, DEFAULT_START_QUALITY, QUALITY_LADDER_TAIL,
};
