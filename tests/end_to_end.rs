//! End-to-end tests: scan a directory tree, run the worker pool, check the
//! on-disk results and the aggregate metrics.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use tempfile::TempDir;

use sizecap::core::{CompressionSettings, ImageTask, OutcomeStatus};
use sizecap::report::BatchMetrics;
use sizecap::scanner::find_images;
use sizecap::worker::WorkerPool;

fn noise_image(width: u32, height: u32) -> RgbImage {
    let mut state: u32 = 0x9e37_79b9;
    RgbImage::from_fn(width, height, |_, _| {
        state = state.wrapping_mul(1664525).wrapping_add(1013904223);
        let bytes = state.to_le_bytes();
        Rgb([bytes[0], bytes[1], bytes[2]])
    })
}

fn write_noise_png(path: &Path, side: u32) {
    noise_image(side, side).save(path).unwrap();
}

fn write_small_jpg(path: &Path) {
    let img = RgbImage::from_pixel(8, 8, Rgb([10, 20, 30]));
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, 80)
        .encode_image(&img)
        .unwrap();
    fs::write(path, buf).unwrap();
}

fn tasks_for(dir: &Path, settings: CompressionSettings) -> Vec<ImageTask> {
    find_images(dir)
        .unwrap()
        .iter()
        .map(|p| ImageTask::for_file(p, settings).unwrap())
        .collect()
}

#[tokio::test]
async fn full_run_over_mixed_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("gallery");
    fs::create_dir(&nested).unwrap();

    write_small_jpg(&dir.path().join("tiny.jpg"));
    write_noise_png(&nested.join("large.png"), 256);
    fs::write(dir.path().join("broken.jpeg"), vec![0u8; 256 * 1024]).unwrap();
    fs::write(dir.path().join("readme.txt"), b"not an image").unwrap();

    let large_size = fs::metadata(nested.join("large.png")).unwrap().len();
    let settings = CompressionSettings::default().with_max_size(large_size / 2);

    let tasks = tasks_for(dir.path(), settings);
    assert_eq!(tasks.len(), 3, "txt file must not become a task");

    let start = Instant::now();
    let outcomes = WorkerPool::new(Some(2)).process_batch(tasks).await;
    let metrics = BatchMetrics::from_outcomes(&outcomes, start.elapsed());

    assert_eq!(metrics.total_files, 3);
    assert_eq!(metrics.compressed, 1);
    assert_eq!(metrics.skipped, 1);
    assert_eq!(metrics.failed, 1);
    assert_eq!(metrics.too_large, 0);
    assert!(metrics.saved_bytes > 0);

    // The PNG was converted next to the original, which stays in place.
    assert!(nested.join("large.jpg").exists());
    assert!(nested.join("large.png").exists());
    assert!(
        fs::metadata(nested.join("large.jpg")).unwrap().len() <= large_size / 2,
        "converted file must fit under the cap"
    );

    // The corrupt file is untouched.
    assert_eq!(
        fs::metadata(dir.path().join("broken.jpeg")).unwrap().len(),
        256 * 1024
    );
}

#[tokio::test]
async fn run_with_everything_under_cap_changes_nothing() {
    let dir = TempDir::new().unwrap();
    write_small_jpg(&dir.path().join("a.jpg"));
    write_small_jpg(&dir.path().join("b.jpg"));

    let before: Vec<(PathBuf, u64)> = find_images(dir.path())
        .unwrap()
        .into_iter()
        .map(|p| {
            let len = fs::metadata(&p).unwrap().len();
            (p, len)
        })
        .collect();

    let tasks = tasks_for(dir.path(), CompressionSettings::default());
    let outcomes = WorkerPool::new(None).process_batch(tasks).await;

    assert!(outcomes
        .iter()
        .all(|o| o.status == OutcomeStatus::Skipped));
    for (path, len) in before {
        assert_eq!(fs::metadata(&path).unwrap().len(), len);
    }
}

#[tokio::test]
async fn metrics_serialize_to_json() {
    let dir = TempDir::new().unwrap();
    write_small_jpg(&dir.path().join("a.jpg"));

    let tasks = tasks_for(dir.path(), CompressionSettings::default());
    let outcomes = WorkerPool::new(Some(1)).process_batch(tasks).await;
    let metrics = BatchMetrics::from_outcomes(&outcomes, std::time::Duration::from_millis(5));

    let json = serde_json::to_string_pretty(&metrics).unwrap();
    assert!(json.contains("\"totalFiles\": 1"));
    assert!(json.contains("\"skipped\": 1"));
}

#[test]
fn scan_of_missing_directory_fails() {
    assert!(find_images(Path::new("/no/such/folder")).is_err());
}
