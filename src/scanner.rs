//! Recursive discovery of raster images under a target directory.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;
use crate::utils::{is_supported_image, CompressorResult, PathError};

/// Walks `root` recursively and collects every supported image file.
///
/// Unreadable entries are logged and skipped rather than aborting the scan.
/// The result is sorted for a deterministic processing order.
pub fn find_images(root: &Path) -> CompressorResult<Vec<PathBuf>> {
    if !root.exists() {
        return Err(PathError::NotFound(root.to_path_buf()).into());
    }

    let mut images = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_file() && is_supported_image(entry.path()) {
            images.push(entry.into_path());
        }
    }

    images.sort();
    debug!("Discovered {} image files under {}", images.len(), root.display());
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_finds_images_recursively() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.jpg"), b"x").unwrap();
        fs::write(dir.path().join("b.PNG"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let nested = dir.path().join("sub").join("deeper");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("c.jpeg"), b"x").unwrap();

        let images = find_images(dir.path()).unwrap();
        assert_eq!(images.len(), 3);
        assert!(images.iter().any(|p| p.ends_with("a.jpg")));
        assert!(images.iter().any(|p| p.ends_with("b.PNG")));
        assert!(images.iter().any(|p| p.ends_with("sub/deeper/c.jpeg")));
    }

    #[test]
    fn test_result_is_sorted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("z.jpg"), b"x").unwrap();
        fs::write(dir.path().join("a.jpg"), b"x").unwrap();
        fs::write(dir.path().join("m.png"), b"x").unwrap();

        let images = find_images(dir.path()).unwrap();
        let mut sorted = images.clone();
        sorted.sort();
        assert_eq!(images, sorted);
    }

    #[test]
    fn test_ignores_directories_with_image_names() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("fake.jpg")).unwrap();

        let images = find_images(dir.path()).unwrap();
        assert!(images.is_empty());
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(find_images(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_errors() {
        assert!(find_images(Path::new("/definitely/not/here")).is_err());
    }
}
