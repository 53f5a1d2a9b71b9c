pub mod metrics;
pub mod reporter;

pub use metrics::BatchMetrics;
pub use reporter::SummaryReporter;
