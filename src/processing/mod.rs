pub mod compressor;
pub mod validation;

pub use compressor::Compressor;
pub use validation::validate_task;
