use tracing::debug;

use crate::image_pipeline::tga::types::Pixel;

/// Rotates by 180 degrees.
///
/// For a row-major buffer this is a plain end-to-end reversal, so the canvas
/// dimensions never enter the computation.
pub fn rotate180(pixels: &mut [Pixel]) {
    debug!("Rotating {} pixels by 180 degrees", pixels.len());
    pixels.reverse();
}
