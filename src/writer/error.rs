use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("invalid option {field}: {reason}")]
    InvalidOption { field: &'static str, reason: String },

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WriteError>;
