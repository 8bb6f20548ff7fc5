// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid backend: boxes are bucketed by the cells they overlap.
//!
//! Cell coordinates are `floor(v / cell_size)`. Queries only touch cells in
//! the query rectangle, clamped to the range of occupied cells, so unbounded
//! query rectangles (for example a half-plane strip) stay cheap.

use alloc::vec::Vec;
use core::fmt::Debug;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::backend::Backend;
use crate::types::Aabb2D;

type Bucket = SmallVec<[usize; 4]>;

/// Uniform grid over `f64` coordinates.
pub struct GridF64 {
    cell_size: f64,
    cells: HashMap<(i64, i64), Bucket>,
    boxes: Vec<Option<Aabb2D<f64>>>,
    // Inclusive range of cells that have ever been occupied.
    extent: Option<(i64, i64, i64, i64)>,
}

impl Debug for GridF64 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridF64")
            .field("cell_size", &self.cell_size)
            .field("occupied_cells", &self.cells.len())
            .field("alive", &self.boxes.iter().filter(|b| b.is_some()).count())
            .finish_non_exhaustive()
    }
}

impl GridF64 {
    /// Creates an empty grid.
    ///
    /// Non-positive or non-finite cell sizes fall back to `1.0`.
    pub fn new(cell_size: f64) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            1.0
        };
        Self {
            cell_size,
            cells: HashMap::new(),
            boxes: Vec::new(),
            extent: None,
        }
    }

    /// Edge length of a cell.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Bounding box of all occupied cells, in coordinates.
    pub fn occupied_bounds(&self) -> Option<Aabb2D<f64>> {
        self.extent.map(|(x0, y0, x1, y1)| {
            Aabb2D::new(
                x0 as f64 * self.cell_size,
                y0 as f64 * self.cell_size,
                x1.saturating_add(1) as f64 * self.cell_size,
                y1.saturating_add(1) as f64 * self.cell_size,
            )
        })
    }

    fn cell_of(&self, v: f64) -> i64 {
        floor_to_i64(v / self.cell_size)
    }

    fn cell_range(&self, aabb: &Aabb2D<f64>) -> (i64, i64, i64, i64) {
        (
            self.cell_of(aabb.min_x),
            self.cell_of(aabb.min_y),
            self.cell_of(aabb.max_x),
            self.cell_of(aabb.max_y),
        )
    }

    fn link(&mut self, slot: usize, aabb: &Aabb2D<f64>) {
        let (x0, y0, x1, y1) = self.cell_range(aabb);
        for cy in y0..=y1 {
            for cx in x0..=x1 {
                self.cells.entry((cx, cy)).or_default().push(slot);
            }
        }
        self.extent = Some(match self.extent {
            None => (x0, y0, x1, y1),
            Some((ex0, ey0, ex1, ey1)) => (ex0.min(x0), ey0.min(y0), ex1.max(x1), ey1.max(y1)),
        });
    }

    fn unlink(&mut self, slot: usize, aabb: &Aabb2D<f64>) {
        let (x0, y0, x1, y1) = self.cell_range(aabb);
        for cy in y0..=y1 {
            for cx in x0..=x1 {
                if let Some(bucket) = self.cells.get_mut(&(cx, cy)) {
                    bucket.retain(|s| *s != slot);
                    if bucket.is_empty() {
                        self.cells.remove(&(cx, cy));
                    }
                }
            }
        }
    }

    /// Clamp a query to occupied cells. `None` when nothing can match.
    fn clamped_range(&self, rect: &Aabb2D<f64>) -> Option<(i64, i64, i64, i64)> {
        let (ex0, ey0, ex1, ey1) = self.extent?;
        if rect.is_empty() {
            return None;
        }
        let (x0, y0, x1, y1) = self.cell_range(rect);
        let range = (x0.max(ex0), y0.max(ey0), x1.min(ex1), y1.min(ey1));
        (range.0 <= range.2 && range.1 <= range.3).then_some(range)
    }
}

impl Backend<f64> for GridF64 {
    fn insert(&mut self, slot: usize, aabb: Aabb2D<f64>) {
        if self.boxes.len() <= slot {
            self.boxes.resize_with(slot + 1, || None);
        }
        if let Some(old) = self.boxes[slot].take() {
            self.unlink(slot, &old);
        }
        self.link(slot, &aabb);
        self.boxes[slot] = Some(aabb);
    }

    fn update(&mut self, slot: usize, aabb: Aabb2D<f64>) {
        if let Some(old) = self.boxes.get_mut(slot).and_then(Option::take) {
            self.unlink(slot, &old);
            self.link(slot, &aabb);
            self.boxes[slot] = Some(aabb);
        }
    }

    fn remove(&mut self, slot: usize) {
        if let Some(old) = self.boxes.get_mut(slot).and_then(Option::take) {
            self.unlink(slot, &old);
        }
    }

    fn clear(&mut self) {
        self.cells.clear();
        self.boxes.clear();
        self.extent = None;
    }

    fn visit_point<F: FnMut(usize)>(&self, x: f64, y: f64, mut f: F) {
        let key = (self.cell_of(x), self.cell_of(y));
        if let Some(bucket) = self.cells.get(&key) {
            for &slot in bucket {
                if let Some(Some(a)) = self.boxes.get(slot)
                    && a.contains_point(x, y)
                {
                    f(slot);
                }
            }
        }
    }

    fn visit_rect<F: FnMut(usize)>(&self, rect: Aabb2D<f64>, mut f: F) {
        let Some((x0, y0, x1, y1)) = self.clamped_range(&rect) else {
            return;
        };
        for cy in y0..=y1 {
            for cx in x0..=x1 {
                let Some(bucket) = self.cells.get(&(cx, cy)) else {
                    continue;
                };
                for &slot in bucket {
                    let Some(Some(a)) = self.boxes.get(slot) else {
                        continue;
                    };
                    // A box spanning several cells is reported only from the
                    // first visited cell it shares with the query.
                    let (ax0, ay0, _, _) = self.cell_range(a);
                    if cx != ax0.max(x0) || cy != ay0.max(y0) {
                        continue;
                    }
                    if a.intersects(&rect) {
                        f(slot);
                    }
                }
            }
        }
    }
}

/// `floor` for finite values without `std`; saturates at the `i64` range.
fn floor_to_i64(v: f64) -> i64 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "cell coordinates saturate for out-of-range values"
    )]
    let t = v as i64;
    if (t as f64) > v { t.saturating_sub(1) } else { t }
}
