use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::tga::types::TgaImage;

pub trait TgaWriter {
    fn write_tga(&self, image: &TgaImage, output: &mut dyn Write) -> Result<()>;
}
