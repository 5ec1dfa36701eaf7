//! Image decoding
//!
//! Loads an image file into a [`GrayMap`]. Format detection, decoding,
//! and grayscale conversion (weighted luminosity) are delegated to the
//! `image` crate; the rest of the pipeline only ever sees the grid.

use crate::error::{IoError, IoResult};
use glyphcut_core::GrayMap;
use image::ImageError;
use log::debug;
use std::path::Path;

/// Read an image file as an 8-bit grayscale grid
///
/// Any format the `image` crate can decode is accepted; multi-channel
/// images are reduced to luma with the standard weighted conversion.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be opened and
/// [`IoError::Decode`] if its contents cannot be decoded.
pub fn read_gray<P: AsRef<Path>>(path: P) -> IoResult<GrayMap> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|e| match e {
        ImageError::IoError(io) => IoError::Io(io),
        other => IoError::Decode(other.to_string()),
    })?;

    let luma = decoded.to_luma8();
    let (width, height) = luma.dimensions();
    debug!("decoded {} as {}x{} grayscale", path.display(), width, height);

    Ok(GrayMap::from_raw(width, height, luma.into_raw())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_gray("no-such-image-anywhere.png").unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }
}
