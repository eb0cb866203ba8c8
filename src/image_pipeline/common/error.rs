use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompositeError {
    #[error("File does not exist: {0}")]
    FileNotFound(String),

    #[error("Invalid file name, expected a .tga file: {0}")]
    InvalidFileName(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid method name: {0}")]
    UnknownOperation(String),

    #[error("Pixel count mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(i16, i16),

    #[error("Invalid channel specified: {0}")]
    InvalidChannel(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CompositeError>;
