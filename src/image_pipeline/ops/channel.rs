//! Single-channel arithmetic and channel shuffling.

use tracing::debug;

use crate::image_pipeline::common::error::{CompositeError, Result};
use crate::image_pipeline::tga::types::{Channel, Pixel};

#[inline]
fn clamp_to_u8(value: i32) -> u8 {
    value.clamp(0, u8::MAX as i32) as u8
}

/// Adds `value` to one channel of every pixel, clamping to `[0, 255]`.
pub fn add_channel(pixels: &mut [Pixel], value: i32, channel: Channel) {
    debug!("Adding {} to {} channel", value, channel);
    for pixel in pixels.iter_mut() {
        let c = pixel.channel_mut(channel);
        *c = clamp_to_u8((*c as i32).saturating_add(value));
    }
}

/// Multiplies one channel of every pixel by `factor`, clamping to `[0, 255]`.
pub fn scale_channel(pixels: &mut [Pixel], factor: i32, channel: Channel) {
    debug!("Scaling {} channel by {}", channel, factor);
    for pixel in pixels.iter_mut() {
        let c = pixel.channel_mut(channel);
        *c = clamp_to_u8((*c as i32).saturating_mul(factor));
    }
}

/// Grayscale copy where every channel carries the source's `channel` value.
pub fn extract_channel(pixels: &[Pixel], channel: Channel) -> Vec<Pixel> {
    debug!("Extracting {} channel from {} pixels", channel, pixels.len());
    pixels.iter().map(|p| Pixel::gray(p.channel(channel))).collect()
}

/// Takes red from `red`, green from `green` and blue from `blue`, by position.
///
/// All three buffers must be the same length.
pub fn combine_channels(red: &[Pixel], green: &[Pixel], blue: &[Pixel]) -> Result<Vec<Pixel>> {
    for other in [green.len(), blue.len()] {
        if other != red.len() {
            return Err(CompositeError::DimensionMismatch {
                expected: red.len(),
                actual: other,
            });
        }
    }

    debug!("Combining channels of {} pixels", red.len());
    Ok(red
        .iter()
        .zip(green)
        .zip(blue)
        .map(|((r, g), b)| Pixel::rgb(r.r, g.g, b.b))
        .collect())
}
