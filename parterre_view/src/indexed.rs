// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid-accelerated culling for large, static item sets.

use alloc::vec::Vec;

use kurbo::Point;
use parterre_index::backends::GridF64;
use parterre_index::{Aabb2D, Backend};

use crate::cull::{CullParams, MapItem, circle_intersects_rect, cull_rect_for};
use crate::viewport::{MapFit, ScrollViewport};

/// Default grid cell edge, in map units.
pub const DEFAULT_CELL_SIZE: f64 = 128.0;

/// Culls a fixed item set by grid lookup instead of a full scan.
///
/// Build one per venue load; each query touches only the grid cells under
/// the padded viewport and then applies the exact circle test. Results are
/// identical to [`crate::visible_indices`] over the same items, including
/// ordering.
#[derive(Debug)]
pub struct IndexedCuller {
    grid: GridF64,
    positions: Vec<Point>,
    params: CullParams,
}

impl IndexedCuller {
    /// Indexes `items` with the given parameters and grid cell size.
    #[must_use]
    pub fn new<T: MapItem>(items: &[T], params: CullParams, cell_size: f64) -> Self {
        let mut grid = GridF64::new(cell_size);
        let positions: Vec<Point> = items.iter().map(|item| item.map_position()).collect();
        for (slot, p) in positions.iter().enumerate() {
            grid.insert(slot, Aabb2D::around_circle(p.x, p.y, params.item_radius));
        }
        Self {
            grid,
            positions,
            params,
        }
    }

    /// Number of indexed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if no items were indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Parameters the culler was built with.
    #[must_use]
    pub fn params(&self) -> &CullParams {
        &self.params
    }

    /// Indices of visible items, in input order.
    #[must_use]
    pub fn visible_indices(&self, viewport: &ScrollViewport, fit: &MapFit) -> Vec<usize> {
        let Some(rect) = cull_rect_for(self.len(), viewport, fit, &self.params) else {
            return (0..self.len()).collect();
        };
        let query = Aabb2D::new(rect.x0, rect.y0, rect.x1, rect.y1);
        let radius = self.params.item_radius;
        self.grid
            .query_rect_sorted(query)
            .into_iter()
            .filter(|&i| circle_intersects_rect(self.positions[i], radius, rect))
            .collect()
    }
}
