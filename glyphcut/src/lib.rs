//! Glyphcut - Glyph segmentation for scanned images
//!
//! Glyphcut extracts individual glyph/digit images from a scanned page:
//! it binarizes a grayscale image with a luminosity threshold, partitions
//! the foreground into 4-connected components with a flood fill, and
//! reports each component's minimal bounding rectangle, ordered left to
//! right, ready for cropping.
//!
//! # Example
//!
//! ```
//! use glyphcut::GrayMap;
//! use glyphcut::region::{binarize, find_components, BinarizeOptions};
//!
//! // White page with one dark 2x2 glyph
//! let mut gray = GrayMap::from_raw(6, 6, vec![255; 36]).unwrap();
//! for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
//!     gray.set(x, y, 0);
//! }
//!
//! let map = binarize(&gray, &BinarizeOptions::default()).unwrap();
//! let components = find_components(&map).unwrap();
//! assert_eq!(components.len(), 1);
//! assert_eq!(components[0].bounds.w, 2);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use glyphcut_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use glyphcut_io as io;
pub use glyphcut_region as region;
