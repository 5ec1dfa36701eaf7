//! Binary thresholding
//!
//! Converts a grayscale grid into a two-valued grid:
//! - Fixed threshold on normalized luminosity
//! - Otsu's method (automatic threshold selection)

use crate::error::{RegionError, RegionResult};
use glyphcut_core::{BinaryMap, GrayMap, PixelClass};
use log::debug;

/// Options for fixed-threshold binarization
#[derive(Debug, Clone)]
pub struct BinarizeOptions {
    /// Normalized luminosity cutoff in `[0, 1]`
    pub threshold: f32,
}

impl Default for BinarizeOptions {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

/// Convert a grayscale grid to a binary grid with a fixed threshold
///
/// A pixel with intensity `v` becomes `Foreground` iff its normalized
/// luminosity `v / 255.0` is strictly less than the threshold; a pixel
/// exactly at the threshold is `Background`.
///
/// # Errors
///
/// Returns [`RegionError::InvalidThreshold`] if the threshold is outside
/// `[0, 1]`, or [`RegionError::EmptyImage`] for a zero-area grid.
pub fn binarize(gray: &GrayMap, options: &BinarizeOptions) -> RegionResult<BinaryMap> {
    if !(0.0..=1.0).contains(&options.threshold) {
        return Err(RegionError::InvalidThreshold {
            value: options.threshold,
        });
    }
    if gray.width() == 0 || gray.height() == 0 {
        return Err(RegionError::EmptyImage);
    }

    let classes = gray
        .as_raw()
        .iter()
        .map(|&v| {
            if (v as f32) / 255.0 < options.threshold {
                PixelClass::Foreground
            } else {
                PixelClass::Background
            }
        })
        .collect();

    let map = BinaryMap::from_raw(gray.width(), gray.height(), classes)?;
    debug!(
        "binarized {}x{} at threshold {:.3}: {} foreground pixels",
        map.width(),
        map.height(),
        options.threshold,
        map.foreground_count()
    );
    Ok(map)
}

/// Compute Otsu's threshold for a grayscale grid
///
/// Picks the cut that maximizes the between-class variance of the 256-bin
/// intensity histogram and returns it normalized to `[0, 1]`, suitable for
/// [`BinarizeOptions::threshold`]. Falls back to the midpoint when the
/// histogram has a single class (e.g. a uniform image).
///
/// # Errors
///
/// Returns [`RegionError::EmptyImage`] for a zero-area grid.
pub fn otsu_threshold(gray: &GrayMap) -> RegionResult<f32> {
    if gray.width() == 0 || gray.height() == 0 {
        return Err(RegionError::EmptyImage);
    }

    let mut histogram = [0u32; 256];
    for &v in gray.as_raw() {
        histogram[v as usize] += 1;
    }

    let total = gray.as_raw().len() as f64;
    let mut best_variance = 0.0f64;
    let mut best_cut = 128u32;

    for cut in 0..=255u32 {
        let mut dark_pixels = 0u64;
        let mut dark_sum = 0u64;
        let mut light_pixels = 0u64;
        let mut light_sum = 0u64;

        for (intensity, &count) in histogram.iter().enumerate() {
            if (intensity as u32) < cut {
                dark_pixels += count as u64;
                dark_sum += count as u64 * intensity as u64;
            } else {
                light_pixels += count as u64;
                light_sum += count as u64 * intensity as u64;
            }
        }

        if dark_pixels == 0 || light_pixels == 0 {
            continue;
        }

        let dark_mean = dark_sum as f64 / dark_pixels as f64;
        let light_mean = light_sum as f64 / light_pixels as f64;
        let dark_weight = dark_pixels as f64 / total;
        let light_weight = light_pixels as f64 / total;
        let variance = dark_weight * light_weight * (dark_mean - light_mean).powi(2);

        if variance > best_variance {
            best_variance = variance;
            best_cut = cut;
        }
    }

    let threshold = best_cut as f32 / 255.0;
    debug!("otsu threshold: {:.3} (cut {})", threshold, best_cut);
    Ok(threshold)
}
