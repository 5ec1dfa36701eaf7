//! glyphcut-region - Segmentation core for glyphcut
//!
//! This crate turns a grayscale scan into per-glyph bounding rectangles:
//!
//! - **Binarization** - fixed-threshold and Otsu conversion of a
//!   [`GrayMap`](glyphcut_core::GrayMap) into a
//!   [`BinaryMap`](glyphcut_core::BinaryMap)
//! - **Connected component analysis** - breadth-first flood fill over the
//!   foreground with 4-way connectivity, one bounding rectangle per
//!   component, ordered left to right
//!
//! # Examples
//!
//! ```
//! use glyphcut_core::GrayMap;
//! use glyphcut_region::{binarize, find_components, BinarizeOptions};
//!
//! // White page with two dark pixels
//! let mut gray = GrayMap::from_raw(8, 8, vec![255; 64]).unwrap();
//! gray.set(2, 3, 0);
//! gray.set(6, 1, 0);
//!
//! let map = binarize(&gray, &BinarizeOptions::default()).unwrap();
//! let components = find_components(&map).unwrap();
//! assert_eq!(components.len(), 2);
//! assert_eq!(components[0].bounds.x, 2);
//! ```

pub mod conncomp;
pub mod error;
pub mod threshold;

pub use conncomp::{ConnectedComponent, component_bounds, find_components};
pub use error::{RegionError, RegionResult};
pub use threshold::{BinarizeOptions, binarize, otsu_threshold};
