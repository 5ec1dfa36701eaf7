//! glyphcut-core - Basic data structures for glyph segmentation
//!
//! This crate provides the fundamental containers used throughout the
//! glyphcut workspace:
//!
//! - [`GrayMap`] - owned grayscale pixel grid (binarization input)
//! - [`BinaryMap`] / [`PixelClass`] - owned two-valued grid
//!   (binarization output, segmentation input)
//! - [`Rect`] - axis-aligned bounding rectangle
//!
//! Grids are plain row-major buffers with explicit width/height and an
//! internal `(x, y) -> index` mapping; each stage of the pipeline owns
//! its grid exclusively and hands it on by value or reference.

pub mod binary;
pub mod error;
pub mod gray;
pub mod rect;

pub use binary::{BinaryMap, PixelClass};
pub use error::{Error, Result};
pub use gray::GrayMap;
pub use rect::Rect;
