//! Compositing orchestration module
//!
//! Parses operation tokens into requests and runs them over a tracking image.

mod pipeline;
mod request;
mod types;
mod validation;


pub use pipeline::CompositePipeline;
pub use request::{OperationRequest, parse_operations};
pub use types::{CompositeConfig, CompositeConfigBuilder, HeaderPolicy};
pub use validation::{TGA_EXTENSION, validate_file_name, validate_input_file};
