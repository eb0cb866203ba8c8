//! TGA reading and writing module
//!
//! Covers the fixed 18-byte header codec and the raw 24-bit pixel payload that
//! follows it.

pub mod header;
pub mod pixels;
mod reader;
mod writer;
mod standard_tga_reader;
mod standard_tga_writer;
pub mod types;

pub use header::{decode_header, encode_header};
pub use pixels::{read_pixels, write_pixels};
pub use reader::TgaReader;
pub use writer::TgaWriter;
pub use standard_tga_reader::StandardTgaReader;
pub use standard_tga_writer::StandardTgaWriter;
pub use types::{Channel, Pixel, TgaHeader, TgaImage};
