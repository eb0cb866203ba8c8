use std::io::{BufWriter, Write};

use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::tga::header::encode_header;
use crate::image_pipeline::tga::pixels::write_pixels;
use crate::image_pipeline::tga::types::TgaImage;
use crate::image_pipeline::tga::writer::TgaWriter;

pub struct StandardTgaWriter;

impl TgaWriter for StandardTgaWriter {
    fn write_tga(&self, image: &TgaImage, output: &mut dyn Write) -> Result<()> {
        debug!(
            "Encoding TGA image: {}x{}, {} pixels",
            image.header.width,
            image.header.height,
            image.pixels.len()
        );

        let mut writer = BufWriter::new(output);
        encode_header(&image.header, &mut writer)?;
        write_pixels(&mut writer, &image.pixels)?;
        writer.flush()?;

        debug!("TGA encoding complete");
        Ok(())
    }
}
