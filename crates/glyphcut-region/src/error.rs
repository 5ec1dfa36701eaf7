//! Error types for glyphcut-region

use thiserror::Error;

/// Errors that can occur during binarization or component analysis
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glyphcut_core::Error),

    /// Empty image
    #[error("empty image: no pixels to process")]
    EmptyImage,

    /// Threshold outside the normalized range
    #[error("threshold {value} outside [0, 1]")]
    InvalidThreshold { value: f32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
