//! glyphcut-io - Image I/O for glyphcut
//!
//! The thin boundary between the filesystem and the in-memory grids:
//!
//! - [`read_gray`] - decode an image file into a
//!   [`GrayMap`](glyphcut_core::GrayMap)
//! - [`write_crop`] - save one rectangle of a
//!   [`BinaryMap`](glyphcut_core::BinaryMap) as a grayscale PNG
//!
//! Decoding and grayscale conversion go through the `image` crate;
//! crops are encoded directly with the `png` crate.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{IoError, IoResult};
pub use reader::read_gray;
pub use writer::write_crop;
