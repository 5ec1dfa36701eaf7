//! Error types for glyphcut-core
//!
//! Provides a unified error type for the core data structures. Each variant
//! captures enough context for diagnostics without exposing internal
//! representation details.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Grid created with zero width or height
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Raw buffer length does not match the grid dimensions
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    BadBufferLength { expected: usize, actual: usize },

    /// Rectangle extends outside the grid
    #[error("rectangle {rect} out of bounds for {width}x{height} grid")]
    RectOutOfBounds {
        rect: crate::Rect,
        width: u32,
        height: u32,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
