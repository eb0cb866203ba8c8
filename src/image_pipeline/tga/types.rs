//! TGA image data types

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::{CompositeError, Result};

/// Size of the fixed TGA header on disk.
pub const HEADER_LEN: usize = 18;

/// Bytes per pixel for 24-bit true-color payloads.
pub const BYTES_PER_PIXEL: usize = 3;

/// The only pixel depth the compositor understands.
pub const SUPPORTED_BITS_PER_PIXEL: u8 = 24;

/// Fixed 18-byte TGA header.
///
/// Fields are stored exactly as read. Nothing here is validated, a negative
/// width survives a decode/encode cycle untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TgaHeader {
    pub id_length: u8,
    pub color_map_type: u8,
    pub data_type_code: u8,
    pub color_map_origin: i16,
    pub color_map_length: i16,
    pub color_map_depth: u8,
    pub x_origin: i16,
    pub y_origin: i16,
    /// Pixels per row
    pub width: i16,
    /// Rows
    pub height: i16,
    pub bits_per_pixel: u8,
    pub image_descriptor: u8,
}

impl TgaHeader {
    /// Header for an uncompressed 24-bit true-color image.
    pub fn true_color(width: i16, height: i16) -> Self {
        Self {
            data_type_code: 2,
            width,
            height,
            bits_per_pixel: SUPPORTED_BITS_PER_PIXEL,
            ..Self::default()
        }
    }

    /// Canvas dimensions as `(width, height)`.
    ///
    /// Fails with [`CompositeError::InvalidDimensions`] when either side is negative.
    pub fn dimensions(&self) -> Result<(usize, usize)> {
        if self.width < 0 || self.height < 0 {
            return Err(CompositeError::InvalidDimensions(self.width, self.height));
        }
        Ok((self.width as usize, self.height as usize))
    }

    pub fn pixel_count(&self) -> Result<usize> {
        let (width, height) = self.dimensions()?;
        Ok(width * height)
    }
}

/// One 24-bit pixel, laid out blue, green, red as on disk.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Pixel {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel { b: 0, g: 0, r: 0 };
    pub const WHITE: Pixel = Pixel { b: 255, g: 255, r: 255 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r }
    }

    pub const fn gray(value: u8) -> Self {
        Self { b: value, g: value, r: value }
    }

    pub fn from_bgr(bytes: [u8; BYTES_PER_PIXEL]) -> Self {
        Self { b: bytes[0], g: bytes[1], r: bytes[2] }
    }

    pub fn to_bgr(self) -> [u8; BYTES_PER_PIXEL] {
        [self.b, self.g, self.r]
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    pub fn channel_mut(&mut self, channel: Channel) -> &mut u8 {
        match channel {
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b,
        }
    }
}

/// A color channel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = CompositeError;

    fn from_str(s: &str) -> Result<Self> {
        Channel::ALL
            .into_iter()
            .find(|channel| channel.name() == s)
            .ok_or_else(|| CompositeError::InvalidChannel(s.to_string()))
    }
}

/// A decoded image: its header plus `width * height` pixels in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TgaImage {
    pub header: TgaHeader,
    pub pixels: Vec<Pixel>,
}

impl TgaImage {
    pub fn new(header: TgaHeader, pixels: Vec<Pixel>) -> Self {
        Self { header, pixels }
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }
}
