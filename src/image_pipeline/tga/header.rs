//! Fixed-layout TGA header codec.
//!
//! | Offset | Field            | Size |
//! |--------|------------------|------|
//! | 0      | id_length        | 1    |
//! | 1      | color_map_type   | 1    |
//! | 2      | data_type_code   | 1    |
//! | 3      | color_map_origin | 2    |
//! | 5      | color_map_length | 2    |
//! | 7      | color_map_depth  | 1    |
//! | 8      | x_origin         | 2    |
//! | 10     | y_origin         | 2    |
//! | 12     | width            | 2    |
//! | 14     | height           | 2    |
//! | 16     | bits_per_pixel   | 1    |
//! | 17     | image_descriptor | 1    |
//!
//! Multi-byte fields are signed 16-bit little-endian.

use std::io::{Read, Write};

use tracing::trace;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::tga::types::{HEADER_LEN, TgaHeader};

#[inline]
fn read_i16_le(buf: &[u8; HEADER_LEN], offset: usize) -> i16 {
    i16::from_le_bytes([buf[offset], buf[offset + 1]])
}

#[inline]
fn write_i16_le(buf: &mut [u8; HEADER_LEN], offset: usize, value: i16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

/// Reads exactly 18 bytes and decodes them into a [`TgaHeader`].
///
/// A stream shorter than 18 bytes yields an `UnexpectedEof` I/O error.
pub fn decode_header<R: Read + ?Sized>(reader: &mut R) -> Result<TgaHeader> {
    let mut buf = [0u8; HEADER_LEN];
    reader.read_exact(&mut buf)?;

    let header = TgaHeader {
        id_length: buf[0],
        color_map_type: buf[1],
        data_type_code: buf[2],
        color_map_origin: read_i16_le(&buf, 3),
        color_map_length: read_i16_le(&buf, 5),
        color_map_depth: buf[7],
        x_origin: read_i16_le(&buf, 8),
        y_origin: read_i16_le(&buf, 10),
        width: read_i16_le(&buf, 12),
        height: read_i16_le(&buf, 14),
        bits_per_pixel: buf[16],
        image_descriptor: buf[17],
    };

    trace!(?header, "Decoded TGA header");
    Ok(header)
}

/// Serializes a header into its 18-byte on-disk form.
pub fn header_bytes(header: &TgaHeader) -> [u8; HEADER_LEN] {
    let mut buf = [0u8; HEADER_LEN];
    buf[0] = header.id_length;
    buf[1] = header.color_map_type;
    buf[2] = header.data_type_code;
    write_i16_le(&mut buf, 3, header.color_map_origin);
    write_i16_le(&mut buf, 5, header.color_map_length);
    buf[7] = header.color_map_depth;
    write_i16_le(&mut buf, 8, header.x_origin);
    write_i16_le(&mut buf, 10, header.y_origin);
    write_i16_le(&mut buf, 12, header.width);
    write_i16_le(&mut buf, 14, header.height);
    buf[16] = header.bits_per_pixel;
    buf[17] = header.image_descriptor;
    buf
}

pub fn encode_header<W: Write + ?Sized>(header: &TgaHeader, writer: &mut W) -> Result<()> {
    writer.write_all(&header_bytes(header))?;
    Ok(())
}
