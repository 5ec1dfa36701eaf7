//! Glyph crop writing
//!
//! Renders a rectangular region of a [`BinaryMap`] as an 8-bit grayscale
//! PNG: foreground pixels black (0), background white (255), matching the
//! binarized page the region was cut from.

use crate::error::{IoError, IoResult};
use glyphcut_core::{BinaryMap, Error as CoreError, Rect};
use log::debug;
use png::{BitDepth, ColorType, Encoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write one rectangle of a binary grid to a grayscale PNG file
///
/// # Errors
///
/// Returns [`IoError::Core`] if the rectangle is empty or extends outside
/// the grid, [`IoError::Io`] if the file cannot be created, and
/// [`IoError::Encode`] if PNG encoding fails.
pub fn write_crop<P: AsRef<Path>>(map: &BinaryMap, rect: &Rect, path: P) -> IoResult<()> {
    let path = path.as_ref();
    if rect.is_empty()
        || rect.x < 0
        || rect.y < 0
        || rect.right() > map.width() as i32
        || rect.bottom() > map.height() as i32
    {
        return Err(IoError::Core(CoreError::RectOutOfBounds {
            rect: *rect,
            width: map.width(),
            height: map.height(),
        }));
    }

    // Row-major 8-bit rendering of the crop
    let mut data = Vec::with_capacity(rect.area() as usize);
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            let value = if map.is_foreground(x as u32, y as u32) {
                0u8
            } else {
                255u8
            };
            data.push(value);
        }
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let mut encoder = Encoder::new(writer, rect.w as u32, rect.h as u32);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::Encode(format!("PNG header error: {}", e)))?;
    png_writer
        .write_image_data(&data)
        .map_err(|e| IoError::Encode(format!("PNG data error: {}", e)))?;

    debug!("wrote {} crop to {}", rect, path.display());
    Ok(())
}
