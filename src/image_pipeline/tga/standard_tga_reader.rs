//! TGA reader for uncompressed 24-bit true-color files.
//!
//! The payload is assumed to start immediately after the 18-byte header; the
//! image ID field and any color map are never consulted.

use std::io::Cursor;

use tracing::{debug, warn};

use crate::image_pipeline::common::error::{CompositeError, Result};
use crate::image_pipeline::tga::header::decode_header;
use crate::image_pipeline::tga::pixels::read_pixels;
use crate::image_pipeline::tga::reader::TgaReader;
use crate::image_pipeline::tga::types::{SUPPORTED_BITS_PER_PIXEL, TgaImage};

pub struct StandardTgaReader;

impl TgaReader for StandardTgaReader {
    /// Decodes a header and the `width * height` pixels that follow it.
    ///
    /// # Errors
    ///
    /// * [`CompositeError::IoError`] if the header or payload is truncated
    /// * [`CompositeError::InvalidDimensions`] if the header declares a negative size
    fn read_tga(&self, data: &[u8]) -> Result<TgaImage> {
        debug!("Decoding TGA image, {} bytes", data.len());

        let mut cursor = Cursor::new(data);
        let header = decode_header(&mut cursor)?;

        if header.bits_per_pixel != SUPPORTED_BITS_PER_PIXEL {
            warn!(
                "Header declares {} bits per pixel, reading as {}-bit",
                header.bits_per_pixel, SUPPORTED_BITS_PER_PIXEL
            );
        }

        let (width, height) = header.dimensions()?;
        let pixels = read_pixels(&mut cursor, width, height).map_err(|e| match e {
            CompositeError::IoError(io) => CompositeError::IoError(std::io::Error::new(
                io.kind(),
                format!("pixel payload shorter than {}x{}: {}", width, height, io),
            )),
            other => other,
        })?;

        debug!("Decoded image: {}x{}", width, height);
        Ok(TgaImage::new(header, pixels))
    }
}
