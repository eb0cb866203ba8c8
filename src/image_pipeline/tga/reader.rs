use std::path::Path;

use crate::image_pipeline::common::error::{CompositeError, Result};
use crate::image_pipeline::tga::types::TgaImage;

pub trait TgaReader {
    fn read_tga(&self, data: &[u8]) -> Result<TgaImage>;

    fn read_tga_file(&self, path: &Path) -> Result<TgaImage> {
        let data = std::fs::read(path).map_err(|e| {
            CompositeError::InputReadError(format!("{}: {}", path.display(), e))
        })?;
        self.read_tga(&data)
    }
}
