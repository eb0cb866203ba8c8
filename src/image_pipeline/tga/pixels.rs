//! Raw 24-bit pixel payload I/O.

use std::io::{self, Read, Write};

use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::tga::types::{BYTES_PER_PIXEL, Pixel};

/// Reads `width * height` B,G,R triplets.
///
/// Unlike a plain stream read, a truncated payload is an error rather than a
/// partially populated buffer. The buffer only grows with bytes actually read,
/// so a header declaring a huge canvas over a tiny file fails without allocating it.
pub fn read_pixels<R: Read + ?Sized>(reader: &mut R, width: usize, height: usize) -> Result<Vec<Pixel>> {
    let count = width * height;
    debug!("Reading {} pixels ({}x{})", count, width, height);

    let expected = count
        .checked_mul(BYTES_PER_PIXEL)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "pixel payload size overflows"))?;

    let mut raw = Vec::new();
    (&mut *reader).take(expected as u64).read_to_end(&mut raw)?;
    if raw.len() < expected {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("expected {} payload bytes, found {}", expected, raw.len()),
        )
        .into());
    }

    Ok(raw
        .chunks_exact(BYTES_PER_PIXEL)
        .map(|c| Pixel::from_bgr([c[0], c[1], c[2]]))
        .collect())
}

/// Writes every pixel as three raw bytes, in buffer order.
pub fn write_pixels<W: Write + ?Sized>(writer: &mut W, pixels: &[Pixel]) -> Result<()> {
    let raw: Vec<u8> = pixels.iter().flat_map(|p| p.to_bgr()).collect();
    writer.write_all(&raw)?;
    Ok(())
}
