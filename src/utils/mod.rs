pub mod error;
pub mod formats;
pub mod fs;

pub use error::{CompressorError, CompressorResult, PathError, ValidationError};
pub use formats::{format_from_extension, is_supported_image, ImageFormat};
pub use fs::{get_extension, get_file_size};
