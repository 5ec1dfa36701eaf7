//! I/O error types
//!
//! Provides a unified error type for image reading and crop writing.
//! The decode and encode paths map their underlying library errors into
//! `IoError` variants so that callers only need to handle one type.

use thiserror::Error;

/// Error type for image I/O operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input image could not be decoded
    #[error("decode error: {0}")]
    Decode(String),

    /// The output image could not be encoded
    #[error("encode error: {0}")]
    Encode(String),

    /// An error from the core library (e.g. a rectangle outside the grid)
    #[error("core error: {0}")]
    Core(#[from] glyphcut_core::Error),
}

/// Convenience alias for I/O results
pub type IoResult<T> = Result<T, IoError>;
