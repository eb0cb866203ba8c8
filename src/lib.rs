//! Command-line compositor for uncompressed 24-bit TGA images.

pub mod image_pipeline;
pub mod logger;
