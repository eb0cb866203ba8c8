//! File-path checks run before any image is loaded.

use std::path::Path;

use crate::image_pipeline::common::error::{CompositeError, Result};

pub const TGA_EXTENSION: &str = ".tga";

/// Requires the path to end in `.tga`.
pub fn validate_file_name(path: &Path) -> Result<()> {
    let name = path.to_string_lossy();
    if name.ends_with(TGA_EXTENSION) {
        Ok(())
    } else {
        Err(CompositeError::InvalidFileName(name.into_owned()))
    }
}

/// Requires a `.tga` path that points at an existing file.
pub fn validate_input_file(path: &Path) -> Result<()> {
    validate_file_name(path)?;
    if !path.is_file() {
        return Err(CompositeError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}
