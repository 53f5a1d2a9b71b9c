use clap::Parser;
use std::path::PathBuf;
use crate::core::CompressionSettings;

#[derive(Parser, Debug)]
#[command(name = "sizecap")]
#[command(about = "Re-encodes images in a directory tree until each fits under a size cap")]
#[command(version)]
pub struct Cli {
    /// Target directory to scan for images
    pub target_directory: PathBuf,

    /// Size cap in megabytes
    #[arg(short = 's', long, default_value = "2")]
    pub max_size_mb: u64,

    /// Starting JPEG quality for the ladder (1-100)
    #[arg(short, long, default_value = "85")]
    pub quality: u8,

    /// Number of parallel workers (defaults to the logical CPU count)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Write the aggregate metrics as JSON to this path
    #[arg(long)]
    pub report_json: Option<PathBuf>,
}

impl Cli {
    /// Translates the parsed arguments into compression settings.
    pub fn settings(&self) -> CompressionSettings {
        CompressionSettings::default()
            .with_max_size(self.max_size_mb * 1024 * 1024)
            .with_start_quality(self.quality)
    }
}
