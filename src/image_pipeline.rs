//! Image compositing pipeline module
//!
//! This module provides a structured approach to TGA compositing, with separate
//! modules for file I/O, pixel operators, and pipeline orchestration.

pub mod tga;
pub mod ops;
pub mod compose;
pub mod common;

pub use common::{
    CompositeError,
    Result,
};

pub use tga::{
    Channel,
    Pixel,
    TgaHeader,
    TgaImage,
    TgaReader,
    TgaWriter,
    StandardTgaReader,
    StandardTgaWriter,
};

pub use ops::BlendMode;

pub use compose::{
    CompositeConfig,
    CompositeConfigBuilder,
    CompositePipeline,
    HeaderPolicy,
    OperationRequest,
    parse_operations,
};
