//! Connected component analysis
//!
//! Partitions the foreground pixels of a [`BinaryMap`] into 4-connected
//! components with a breadth-first flood fill and reports each component's
//! minimal bounding rectangle. Diagonal neighbors are not connected: two
//! foreground pixels touching only at a corner belong to separate
//! components.

use crate::error::{RegionError, RegionResult};
use glyphcut_core::{BinaryMap, Rect};
use log::debug;
use std::collections::VecDeque;

/// 4-neighbor offsets (left, right, up, down)
const DX: [i32; 4] = [-1, 1, 0, 0];
const DY: [i32; 4] = [0, 0, -1, 1];

/// A connected component in a binary grid
#[derive(Debug, Clone)]
pub struct ConnectedComponent {
    /// 1-based discovery index in raster scan order
    pub label: u32,
    /// Number of foreground pixels in this component
    pub pixel_count: u32,
    /// Minimal bounding rectangle of this component
    pub bounds: Rect,
}

/// Find all 4-connected foreground components in a binary grid
///
/// Scans pixels in raster order (y outer, x inner, both ascending) and
/// flood-fills each unvisited foreground pixel. The result is sorted by
/// ascending left edge; components with equal left edges keep their
/// discovery order. That tie-break is implementation-defined behavior,
/// not a guaranteed contract.
///
/// Every returned rectangle has `w, h >= 1` and is minimal: no side can
/// shrink without excluding a pixel of its component.
///
/// # Errors
///
/// Returns [`RegionError::EmptyImage`] for a zero-area grid.
pub fn find_components(map: &BinaryMap) -> RegionResult<Vec<ConnectedComponent>> {
    if map.width() == 0 || map.height() == 0 {
        return Err(RegionError::EmptyImage);
    }

    let width = map.width() as usize;
    let mut visited = vec![false; width * map.height() as usize];
    let mut components = Vec::new();

    for y in 0..map.height() {
        for x in 0..map.width() {
            if visited[y as usize * width + x as usize] || !map.is_foreground(x, y) {
                continue;
            }
            let label = components.len() as u32 + 1;
            components.push(fill_from(map, &mut visited, x, y, label));
        }
    }

    // Stable sort: equal left edges keep discovery order
    components.sort_by_key(|c| c.bounds.x);

    debug!(
        "{} component(s) in {}x{} grid",
        components.len(),
        map.width(),
        map.height()
    );
    Ok(components)
}

/// Find component bounding rectangles only
///
/// Convenience wrapper around [`find_components`]; same ordering.
pub fn component_bounds(map: &BinaryMap) -> RegionResult<Vec<Rect>> {
    Ok(find_components(map)?
        .into_iter()
        .map(|c| c.bounds)
        .collect())
}

/// Breadth-first flood fill from a seed pixel
///
/// Marks pixels visited at enqueue time so each is enqueued at most once.
/// The bounding box starts at the seed and grows monotonically as
/// neighbors are absorbed.
fn fill_from(
    map: &BinaryMap,
    visited: &mut [bool],
    seed_x: u32,
    seed_y: u32,
    label: u32,
) -> ConnectedComponent {
    let width = map.width() as usize;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (seed_x, seed_y, seed_x, seed_y);
    let mut pixel_count = 0u32;

    let mut queue = VecDeque::new();
    visited[seed_y as usize * width + seed_x as usize] = true;
    queue.push_back((seed_x, seed_y));

    while let Some((x, y)) = queue.pop_front() {
        pixel_count += 1;

        for (&dx, &dy) in DX.iter().zip(DY.iter()) {
            let Some(nx) = x.checked_add_signed(dx) else {
                continue;
            };
            let Some(ny) = y.checked_add_signed(dy) else {
                continue;
            };
            if !map.is_foreground(nx, ny) {
                continue;
            }
            let idx = ny as usize * width + nx as usize;
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            queue.push_back((nx, ny));

            min_x = min_x.min(nx);
            min_y = min_y.min(ny);
            max_x = max_x.max(nx);
            max_y = max_y.max(ny);
        }
    }

    ConnectedComponent {
        label,
        pixel_count,
        bounds: Rect::new(
            min_x as i32,
            min_y as i32,
            (max_x - min_x + 1) as i32,
            (max_y - min_y + 1) as i32,
        ),
    }
}
