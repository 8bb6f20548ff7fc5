// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid-accelerated directional lookups.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use parterre_index::backends::GridF64;
use parterre_index::{Aabb2D, Backend};

use crate::{Direction, FocusEntry, FocusSpace, band_distance};

/// Default grid cell edge, in map units.
pub const DEFAULT_FOCUS_CELL_SIZE: f64 = 64.0;

/// Entries bucketed in a uniform grid for directional search.
///
/// A lookup walks windows of one cell length outward from the current point
/// along the direction, each window as wide as the tolerance band. Empty
/// stretches are skipped by jumping to the next coordinate some entry
/// occupies, so a lookup visits at most one window per distinct coordinate.
/// It stops once no unseen entry could be nearer than the best found. The
/// result is
/// identical to [`crate::AxisBandPolicy`] over the same entries, including
/// the traversal-order tie rule.
#[derive(Debug)]
pub struct GridFocusIndex<K> {
    entries: Vec<FocusEntry<K>>,
    grid: GridF64,
    tolerance: f64,
    extent: Option<Rect>,
    // Sorted, deduplicated finite coordinates of the entries on each axis.
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl<K: Copy + PartialEq> GridFocusIndex<K> {
    /// Indexes the entries of `space`.
    ///
    /// Each window spans about `2 * tolerance / cell_size` cells across the
    /// band, so a `cell_size` far below the tolerance makes lookups slower
    /// without changing their results.
    #[must_use]
    pub fn new(space: &FocusSpace<'_, K>, tolerance: f64, cell_size: f64) -> Self {
        let mut grid = GridF64::new(cell_size);
        let mut extent: Option<Rect> = None;
        for (slot, e) in space.nodes.iter().enumerate() {
            let p = e.point;
            grid.insert(slot, Aabb2D::new(p.x, p.y, p.x, p.y));
            extent = Some(match extent {
                None => Rect::from_points(p, p),
                Some(r) => r.union_pt(p),
            });
        }
        Self {
            entries: space.nodes.to_vec(),
            grid,
            tolerance,
            extent,
            xs: sorted_coords(space.nodes.iter().map(|e| e.point.x)),
            ys: sorted_coords(space.nodes.iter().map(|e| e.point.y)),
        }
    }

    /// Number of indexed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Band half-width used for lookups.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// The indexed entries, in traversal order.
    #[must_use]
    pub fn entries(&self) -> &[FocusEntry<K>] {
        &self.entries
    }

    /// The entry to focus after moving from `current`.
    ///
    /// Finding `current` is a linear scan; use [`Self::next_index`] when the
    /// caller already knows its position.
    #[must_use]
    pub fn next(&self, current: K, direction: Direction) -> Option<K> {
        let from = self.entries.iter().position(|e| e.id == current)?;
        self.next_index(from, direction).map(|i| self.entries[i].id)
    }

    /// Index of the entry to move to from the entry at `from`.
    #[must_use]
    pub fn next_index(&self, from: usize, direction: Direction) -> Option<usize> {
        let current = self.entries.get(from)?;
        let origin = current.point;
        let extent = self.extent?;
        if !origin.x.is_finite() || !origin.y.is_finite() {
            return None;
        }
        let tol = self.tolerance;
        let step = self.grid.cell_size();

        // Band entirely outside the occupied area.
        let lateral_miss = if direction.is_vertical() {
            origin.x + tol < extent.x0 || origin.x - tol > extent.x1
        } else {
            origin.y + tol < extent.y0 || origin.y - tol > extent.y1
        };
        if lateral_miss {
            return None;
        }

        let mut best: Option<(usize, f64)> = None;
        let start = axis(origin, direction);
        let mut near = start;
        loop {
            let far = match direction {
                Direction::Up | Direction::Left => near - step,
                Direction::Down | Direction::Right => near + step,
            };
            let window = window(origin, direction, near, far, tol);

            self.grid.visit_rect(window, |slot| {
                if slot == from {
                    return;
                }
                let cand = &self.entries[slot];
                if cand.id == current.id {
                    return;
                }
                let Some(d) = band_distance(direction, origin, cand.point, tol) else {
                    return;
                };
                let better = match best {
                    None => true,
                    Some((bs, bd)) => d < bd || (d == bd && slot < bs),
                };
                if better {
                    best = Some((slot, d));
                }
            });

            // Skip straight to the next coordinate any entry occupies; the
            // stretch in between is empty.
            let Some(next) = self.next_coord(direction, far) else {
                break;
            };
            if let Some((_, bd)) = best
                && (next - start).abs() > bd
            {
                break;
            }
            near = next;
        }
        best.map(|(slot, _)| slot)
    }

    /// First occupied coordinate strictly beyond `coord` in `direction`.
    fn next_coord(&self, direction: Direction, coord: f64) -> Option<f64> {
        let coords = if direction.is_vertical() { &self.ys } else { &self.xs };
        match direction {
            Direction::Down | Direction::Right => {
                coords.get(coords.partition_point(|&v| v <= coord)).copied()
            }
            Direction::Up | Direction::Left => coords
                .partition_point(|&v| v < coord)
                .checked_sub(1)
                .map(|i| coords[i]),
        }
    }
}

fn sorted_coords(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut out: Vec<f64> = values.filter(|v| v.is_finite()).collect();
    out.sort_by(f64::total_cmp);
    out.dedup();
    out
}

fn axis(p: Point, direction: Direction) -> f64 {
    if direction.is_vertical() { p.y } else { p.x }
}

fn window(origin: Point, direction: Direction, near: f64, far: f64, tol: f64) -> Aabb2D<f64> {
    let (lo, hi) = (near.min(far), near.max(far));
    if direction.is_vertical() {
        Aabb2D::new(origin.x - tol, lo, origin.x + tol, hi)
    } else {
        Aabb2D::new(lo, origin.y - tol, hi, origin.y + tol)
    }
}
