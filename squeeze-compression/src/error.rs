//! Error types for compression operations

use thiserror::Error;

/// Errors that can occur during compression
#[derive(Error, Debug)]
pub enum CompressionError {
    /// Compression operation failed
    #[error("Compression failed: {0}")]
    CompressionFailed(String),

    /// Unsupported algorithm
    #[error("Unsupported compression algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

impl From<CompressionError> for squeeze_core::Error {
    fn from(err: CompressionError) -> Self {
        squeeze_core::Error::Compression(err.to_string())
    }
}
