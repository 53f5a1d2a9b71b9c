//! Pre-flight validation for compression tasks.

use std::path::Path;
use crate::core::ImageTask;
use crate::utils::{CompressorResult, ValidationError};

/// Validates a task before any decoding work is spent on it.
///
/// Checks the input path, the output location and the settings, in that order.
pub fn validate_task(task: &ImageTask) -> CompressorResult<()> {
    validate_input_path(&task.input_path)?;
    validate_output_path(&task.output_path)?;
    validate_settings(task)?;
    Ok(())
}

fn validate_input_path(path: &Path) -> Result<(), ValidationError> {
    if !path.exists() {
        return Err(ValidationError::path_not_found(path));
    }

    if !path.is_file() {
        return Err(ValidationError::not_a_file(path));
    }

    Ok(())
}

fn validate_output_path(path: &Path) -> Result<(), ValidationError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(ValidationError::settings(format!(
                "Output directory does not exist: {}",
                parent.display()
            )));
        }
    }

    Ok(())
}

fn validate_settings(task: &ImageTask) -> Result<(), ValidationError> {
    let settings = &task.settings;

    if settings.max_size == 0 {
        return Err(ValidationError::settings("Size cap must be greater than 0"));
    }

    if settings.start_quality == 0 || settings.start_quality > 100 {
        return Err(ValidationError::settings(format!(
            "Starting quality must be between 1 and 100, got {}",
            settings.start_quality
        )));
    }

    if settings.resize_quality == 0 || settings.resize_quality > 100 {
        return Err(ValidationError::settings(format!(
            "Resize quality must be between 1 and 100, got {}",
            settings.resize_quality
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CompressionSettings;
    use std::fs;
    use tempfile::TempDir;

    fn valid_task(dir: &TempDir) -> ImageTask {
        let path = dir.path().join("a.jpg");
        fs::write(&path, b"stub").unwrap();
        ImageTask::for_file(&path, CompressionSettings::default()).unwrap()
    }

    #[test]
    fn test_valid_task_passes() {
        let dir = TempDir::new().unwrap();
        assert!(validate_task(&valid_task(&dir)).is_ok());
    }

    #[test]
    fn test_missing_input_rejected() {
        let dir = TempDir::new().unwrap();
        let mut task = valid_task(&dir);
        task.input_path = dir.path().join("missing.jpg");
        assert!(validate_task(&task).is_err());
    }

    #[test]
    fn test_directory_input_rejected() {
        let dir = TempDir::new().unwrap();
        let mut task = valid_task(&dir);
        task.input_path = dir.path().to_path_buf();
        assert!(validate_task(&task).is_err());
    }

    #[test]
    fn test_zero_cap_rejected() {
        let dir = TempDir::new().unwrap();
        let mut task = valid_task(&dir);
        task.settings.max_size = 0;
        assert!(validate_task(&task).is_err());
    }

    #[test]
    fn test_quality_bounds() {
        let dir = TempDir::new().unwrap();

        let mut task = valid_task(&dir);
        task.settings.start_quality = 0;
        assert!(validate_task(&task).is_err());

        let mut task = valid_task(&dir);
        task.settings.start_quality = 101;
        assert!(validate_task(&task).is_err());

        let mut task = valid_task(&dir);
        task.settings.resize_quality = 0;
        assert!(validate_task(&task).is_err());
    }
}
