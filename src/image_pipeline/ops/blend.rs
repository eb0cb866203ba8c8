//! Pairwise blend modes.
//!
//! Channel math runs in normalized `[0, 1]` space and is quantized back with
//! `floor(x * 255 + 0.5)` clamped to `[0, 255]`. Each output channel depends
//! only on the same channel of the two inputs.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::image_pipeline::common::error::{CompositeError, Result};
use crate::image_pipeline::tga::types::Pixel;

/// Blend modes applied between the tracking image and a second image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendMode {
    Multiply,
    Subtract,
    Screen,
    Overlay,
}

impl BlendMode {
    pub const ALL: [BlendMode; 4] = [
        BlendMode::Multiply,
        BlendMode::Subtract,
        BlendMode::Screen,
        BlendMode::Overlay,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BlendMode::Multiply => "multiply",
            BlendMode::Subtract => "subtract",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
        }
    }

    /// Blends `top` (the tracking pixel) with `bottom` (the loaded pixel).
    #[inline]
    pub fn apply(self, top: Pixel, bottom: Pixel) -> Pixel {
        match self {
            BlendMode::Multiply => multiply(top, bottom),
            BlendMode::Subtract => subtract(top, bottom),
            BlendMode::Screen => screen(top, bottom),
            BlendMode::Overlay => overlay(top, bottom),
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = CompositeError;

    fn from_str(s: &str) -> Result<Self> {
        BlendMode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| CompositeError::UnknownOperation(s.to_string()))
    }
}

#[inline]
fn normalize(value: u8) -> f32 {
    value as f32 / 255.0
}

/// Quantizes a normalized value back to a byte.
#[inline]
pub fn quantize(value: f32) -> u8 {
    (value * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

#[inline]
fn per_channel(a: Pixel, b: Pixel, f: impl Fn(f32, f32) -> f32) -> Pixel {
    Pixel {
        b: quantize(f(normalize(a.b), normalize(b.b))),
        g: quantize(f(normalize(a.g), normalize(b.g))),
        r: quantize(f(normalize(a.r), normalize(b.r))),
    }
}

pub fn multiply(a: Pixel, b: Pixel) -> Pixel {
    per_channel(a, b, |x, y| x * y)
}

pub fn subtract(a: Pixel, b: Pixel) -> Pixel {
    per_channel(a, b, |x, y| x - y)
}

pub fn screen(a: Pixel, b: Pixel) -> Pixel {
    per_channel(a, b, |x, y| 1.0 - (1.0 - x) * (1.0 - y))
}

/// Overlay keyed on the second image: dark bottom pixels multiply, light ones screen.
pub fn overlay(a: Pixel, b: Pixel) -> Pixel {
    per_channel(a, b, |x, y| {
        if y <= 0.5 {
            2.0 * x * y
        } else {
            1.0 - 2.0 * (1.0 - x) * (1.0 - y)
        }
    })
}

/// Blends `bottom` into `top` element-wise, in place.
///
/// Both buffers must hold the same number of pixels.
pub fn blend_buffers(mode: BlendMode, top: &mut [Pixel], bottom: &[Pixel]) -> Result<()> {
    if top.len() != bottom.len() {
        return Err(CompositeError::DimensionMismatch {
            expected: top.len(),
            actual: bottom.len(),
        });
    }

    debug!("Blending {} pixels with {}", top.len(), mode);
    for (dst, &src) in top.iter_mut().zip(bottom) {
        *dst = mode.apply(*dst, src);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pixels() -> Vec<Pixel> {
        let mut pixels = Vec::new();
        for v in (0..=255u16).step_by(17) {
            let v = v as u8;
            pixels.push(Pixel::rgb(v, 255 - v, v / 2));
        }
        pixels
    }

    #[test]
    fn test_multiply_white_is_identity() {
        for p in sample_pixels() {
            assert_eq!(multiply(Pixel::WHITE, p), p);
            assert_eq!(multiply(p, Pixel::WHITE), p);
        }
    }

    #[test]
    fn test_screen_black_is_identity() {
        for p in sample_pixels() {
            assert_eq!(screen(Pixel::BLACK, p), p);
        }
    }

    #[test]
    fn test_multiply_rounding() {
        // 128/255 * 128/255 * 255 = 64.25 -> 64
        assert_eq!(multiply(Pixel::gray(128), Pixel::gray(128)), Pixel::gray(64));
        // 100 * 200 / 255 = 78.43 -> 78
        assert_eq!(multiply(Pixel::gray(100), Pixel::gray(200)), Pixel::gray(78));
    }

    #[test]
    fn test_subtract_clamps_at_zero() {
        let result = subtract(Pixel::rgb(10, 200, 50), Pixel::rgb(20, 100, 50));
        assert_eq!(result, Pixel::rgb(0, 100, 0));
    }

    #[test]
    fn test_screen_values() {
        // 1 - (1 - 0.5)(1 - 0.5) = 0.75 -> 191.25 + 0.5 -> 191
        let half = Pixel::gray(128);
        assert_eq!(screen(Pixel::gray(0), half), half);
        assert_eq!(screen(Pixel::gray(255), half), Pixel::WHITE);
        assert_eq!(screen(Pixel::gray(100), Pixel::gray(100)).r, 161);
    }

    #[test]
    fn test_overlay_branches() {
        // dark bottom: 2 * 0.4 * 0.2 * 255 = 40.8 -> 41
        let dark = overlay(Pixel::gray(102), Pixel::gray(51));
        assert_eq!(dark, Pixel::gray(41));
        // light bottom: (1 - 2 * 0.6 * 0.2) * 255 = 193.8 -> 194
        let light = overlay(Pixel::gray(102), Pixel::gray(204));
        assert_eq!(light, Pixel::gray(194));
    }

    #[test]
    fn test_overlay_keeps_channels_in_place() {
        let top = Pixel::gray(102);
        let bottom = Pixel::rgb(51, 204, 0);
        let result = overlay(top, bottom);
        assert_eq!(result, Pixel::rgb(41, 194, 0));
    }

    #[test]
    fn test_blend_buffers_length_mismatch() {
        let mut top = vec![Pixel::WHITE; 4];
        let bottom = vec![Pixel::WHITE; 3];
        let err = blend_buffers(BlendMode::Multiply, &mut top, &bottom).unwrap_err();
        assert!(matches!(
            err,
            CompositeError::DimensionMismatch { expected: 4, actual: 3 }
        ));
        assert_eq!(top, vec![Pixel::WHITE; 4]);
    }

    #[test]
    fn test_blend_buffers_in_place() {
        let mut top = vec![Pixel::gray(128), Pixel::WHITE];
        let bottom = vec![Pixel::gray(128), Pixel::gray(3)];
        blend_buffers(BlendMode::Multiply, &mut top, &bottom).unwrap();
        assert_eq!(top, vec![Pixel::gray(64), Pixel::gray(3)]);
    }

    #[test]
    fn test_mode_names() {
        assert_eq!("overlay".parse::<BlendMode>().unwrap(), BlendMode::Overlay);
        assert!(matches!(
            "darken".parse::<BlendMode>(),
            Err(CompositeError::UnknownOperation(_))
        ));
    }
}
