// This is the primary entry point for the sizecap CLI.
// The lib.rs file serves only as a public API for external consumers.

use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sizecap::cli::Cli;
use sizecap::core::ImageTask;
use sizecap::report::{BatchMetrics, SummaryReporter};
use sizecap::scanner::find_images;
use sizecap::worker::WorkerPool;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_target(false)       // Remove module path
        .with_ansi(true)          // Keep colored output
        .with_writer(std::io::stdout)
        .compact();               // Use compact formatter instead of pretty

    subscriber.init();

    let cli = Cli::parse();

    if !cli.target_directory.is_dir() {
        eprintln!("Folder not found: {}", cli.target_directory.display());
        std::process::exit(1);
    }

    info!("Scanning images in {}...", cli.target_directory.display());
    let images = find_images(&cli.target_directory)?;
    info!("Found {} images.", images.len());

    let settings = cli.settings();
    let tasks = images
        .iter()
        .map(|path| ImageTask::for_file(path, settings))
        .collect::<sizecap::CompressorResult<Vec<_>>>()?;

    let pool = WorkerPool::new(cli.threads);
    info!(
        "Compressing with {} workers (cap {} MB)...",
        pool.worker_count(),
        cli.max_size_mb
    );

    let start = Instant::now();
    let outcomes = pool.process_batch(tasks).await;
    let metrics = BatchMetrics::from_outcomes(&outcomes, start.elapsed());
    let reporter = SummaryReporter::from_metrics(metrics);

    if let Some(path) = &cli.report_json {
        let json = serde_json::to_string_pretty(reporter.metrics())?;
        tokio::fs::write(path, json).await?;
        info!("Metrics written to {}", path.display());
    }

    println!("\n{}", reporter);

    Ok(())
}
