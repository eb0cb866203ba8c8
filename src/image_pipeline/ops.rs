//! Pixel operators module
//!
//! Pure per-pixel blend modes plus buffer-wide channel and orientation
//! transforms. None of these touch headers or files.

pub mod blend;
pub mod channel;
pub mod transform;

pub use blend::{BlendMode, blend_buffers, multiply, overlay, screen, subtract};
pub use channel::{add_channel, combine_channels, extract_channel, scale_channel};
pub use transform::rotate180;
