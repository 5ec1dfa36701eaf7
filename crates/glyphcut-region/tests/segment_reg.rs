//! Segmentation regression test
//!
//! Exercises the full binarize -> find_components pipeline on synthetic
//! grids and checks the structural properties of the result: partition of
//! the foreground, minimality of every bounding rectangle, determinism,
//! and left-to-right ordering.

use glyphcut_core::{BinaryMap, GrayMap, PixelClass, Rect};
use glyphcut_region::{
    BinarizeOptions, ConnectedComponent, binarize, find_components, otsu_threshold,
};
use std::collections::VecDeque;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A 16x10 page with three glyph-like blobs, left edges at 10, 2, and 7
fn three_glyph_page() -> GrayMap {
    let mut gray = GrayMap::from_raw(16, 10, vec![255; 160]).unwrap();
    // Blob A: 2x3 block with left edge 10
    for y in 1..4 {
        gray.set(10, y, 0);
        gray.set(11, y, 0);
    }
    // Blob B: vertical bar with left edge 2
    for y in 2..8 {
        gray.set(2, y, 20);
    }
    // Blob C: small L with left edge 7
    gray.set(7, 6, 0);
    gray.set(7, 7, 0);
    gray.set(8, 7, 0);
    gray
}

/// Independent re-fill of one component, used to cross-check the engine
fn refill(map: &BinaryMap, seen: &mut [bool], seed: (u32, u32)) -> Vec<(u32, u32)> {
    let width = map.width() as usize;
    let mut pixels = Vec::new();
    let mut queue = VecDeque::from([seed]);
    seen[seed.1 as usize * width + seed.0 as usize] = true;

    while let Some((x, y)) = queue.pop_front() {
        pixels.push((x, y));
        let neighbors = [
            (x.wrapping_sub(1), y),
            (x + 1, y),
            (x, y.wrapping_sub(1)),
            (x, y + 1),
        ];
        for (nx, ny) in neighbors {
            if !map.is_foreground(nx, ny) {
                continue;
            }
            let idx = ny as usize * width + nx as usize;
            if !seen[idx] {
                seen[idx] = true;
                queue.push_back((nx, ny));
            }
        }
    }
    pixels
}

/// All components of `map` as pixel sets, discovered independently
fn independent_components(map: &BinaryMap) -> Vec<Vec<(u32, u32)>> {
    let mut seen = vec![false; map.width() as usize * map.height() as usize];
    let mut all = Vec::new();
    for y in 0..map.height() {
        for x in 0..map.width() {
            if map.is_foreground(x, y) && !seen[y as usize * map.width() as usize + x as usize] {
                all.push(refill(map, &mut seen, (x, y)));
            }
        }
    }
    all
}

fn assert_minimal(bounds: &Rect, pixels: &[(u32, u32)]) {
    let xs: Vec<i32> = pixels.iter().map(|&(x, _)| x as i32).collect();
    let ys: Vec<i32> = pixels.iter().map(|&(_, y)| y as i32).collect();
    assert_eq!(bounds.x, *xs.iter().min().unwrap());
    assert_eq!(bounds.y, *ys.iter().min().unwrap());
    assert_eq!(bounds.right() - 1, *xs.iter().max().unwrap());
    assert_eq!(bounds.bottom() - 1, *ys.iter().max().unwrap());
}

#[test]
fn partition_and_minimality() {
    init_logging();

    let gray = three_glyph_page();
    let map = binarize(&gray, &BinarizeOptions::default()).unwrap();
    let components = find_components(&map).unwrap();
    let reference = independent_components(&map);

    assert_eq!(components.len(), reference.len());

    // Pixel counts partition the foreground exactly
    let total: u32 = components.iter().map(|c| c.pixel_count).sum();
    assert_eq!(total, map.foreground_count());

    // Each foreground pixel lies in exactly one component's bounds; each
    // bounding rectangle is tight around its pixel set
    for pixels in &reference {
        let owners: Vec<&ConnectedComponent> = components
            .iter()
            .filter(|c| {
                c.pixel_count == pixels.len() as u32
                    && pixels
                        .iter()
                        .all(|&(x, y)| c.bounds.contains_point(x as i32, y as i32))
            })
            .collect();
        assert_eq!(owners.len(), 1, "component {:?} not matched once", pixels);
        assert_minimal(&owners[0].bounds, pixels);
    }
}

#[test]
fn deterministic_across_runs() {
    init_logging();

    let gray = three_glyph_page();
    let map = binarize(&gray, &BinarizeOptions::default()).unwrap();

    let first = find_components(&map).unwrap();
    let second = find_components(&map).unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.bounds, b.bounds);
        assert_eq!(a.label, b.label);
        assert_eq!(a.pixel_count, b.pixel_count);
    }
}

#[test]
fn left_to_right_ordering() {
    init_logging();

    let gray = three_glyph_page();
    let map = binarize(&gray, &BinarizeOptions::default()).unwrap();
    let components = find_components(&map).unwrap();

    let left_edges: Vec<i32> = components.iter().map(|c| c.bounds.x).collect();
    assert_eq!(left_edges, vec![2, 7, 10]);
}

#[test]
fn adjacent_components_may_overlap_geometrically() {
    // An L-shaped glyph and an isolated pixel tucked into its corner:
    // disjoint pixel sets, intersecting bounding boxes
    let mut map = BinaryMap::new(6, 6).unwrap();
    for (x, y) in [(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)] {
        map.set(x, y, PixelClass::Foreground);
    }
    map.set(2, 0, PixelClass::Foreground);

    let components = find_components(&map).unwrap();
    assert_eq!(components.len(), 2);
    assert_eq!(components[0].bounds, Rect::new(0, 0, 3, 3));
    assert_eq!(components[0].pixel_count, 5);
    assert_eq!(components[1].bounds, Rect::new(2, 0, 1, 1));
    assert_eq!(components[1].pixel_count, 1);

    assert!(components[0].bounds.overlaps(&components[1].bounds));
}

#[test]
fn all_background_grid_of_any_size() {
    init_logging();

    for (w, h) in [(1, 1), (3, 9), (64, 64)] {
        let gray = GrayMap::from_raw(w, h, vec![255; (w * h) as usize]).unwrap();
        let map = binarize(&gray, &BinarizeOptions::default()).unwrap();
        assert!(find_components(&map).unwrap().is_empty());
    }
}

#[test]
fn otsu_feeds_binarizer() {
    init_logging();

    // Bimodal page: dark glyph on a light background
    let mut gray = GrayMap::from_raw(8, 8, vec![230; 64]).unwrap();
    for y in 2..5 {
        for x in 3..6 {
            gray.set(x, y, 30);
        }
    }

    let threshold = otsu_threshold(&gray).unwrap();
    let map = binarize(&gray, &BinarizeOptions { threshold }).unwrap();
    let components = find_components(&map).unwrap();

    assert_eq!(components.len(), 1);
    assert_eq!(components[0].bounds, Rect::new(3, 2, 3, 3));
    assert_eq!(components[0].pixel_count, 9);
}
