// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::{Direction, FocusPolicy, FocusSpace};

/// Half-width of the perpendicular band, in map units.
pub const DEFAULT_TOLERANCE: f64 = 50.0;

/// Axis distance from `from` to `to` if `to` is a candidate for `direction`.
///
/// `to` must be strictly beyond `from` along the axis and at most
/// `tolerance` away on the perpendicular axis.
#[must_use]
pub fn band_distance(direction: Direction, from: Point, to: Point, tolerance: f64) -> Option<f64> {
    if direction.lateral_offset(from, to) <= tolerance {
        direction.forward_distance(from, to)
    } else {
        None
    }
}

/// Nearest entry inside a perpendicular tolerance band.
///
/// A linear scan over the space: `O(n)` per call, no allocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBandPolicy {
    /// Inclusive half-width of the band.
    pub tolerance: f64,
}

impl Default for AxisBandPolicy {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl AxisBandPolicy {
    /// Policy with the given band half-width.
    #[must_use]
    pub const fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Index of the entry to move to from the entry at `from`.
    #[must_use]
    pub fn next_index<K: PartialEq>(
        &self,
        from: usize,
        direction: Direction,
        space: &FocusSpace<'_, K>,
    ) -> Option<usize> {
        let current = space.nodes.get(from)?;
        let mut best: Option<(usize, f64)> = None;
        for (i, cand) in space.nodes.iter().enumerate() {
            if i == from || cand.id == current.id {
                continue;
            }
            let Some(d) = band_distance(direction, current.point, cand.point, self.tolerance)
            else {
                continue;
            };
            // Strictly smaller: the earliest of equal candidates stays.
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }
}

impl<K: Copy + PartialEq> FocusPolicy<K> for AxisBandPolicy {
    fn next(&self, current: K, direction: Direction, space: &FocusSpace<'_, K>) -> Option<K> {
        let from = space.position(&current)?;
        self.next_index(from, direction, space)
            .map(|i| space.nodes[i].id)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;
    use crate::FocusEntry;

    fn entries(points: &[(f64, f64)]) -> alloc::vec::Vec<FocusEntry<usize>> {
        points
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| FocusEntry {
                id,
                point: Point::new(x, y),
            })
            .collect()
    }

    #[test]
    fn nearest_below_wins() {
        let nodes = entries(&[(0.0, 0.0), (0.0, 40.0)]);
        let space = FocusSpace { nodes: &nodes };
        let p = AxisBandPolicy::default();
        assert_eq!(p.next(0, Direction::Down, &space), Some(1));
        assert_eq!(p.next(1, Direction::Up, &space), Some(0));
        assert_eq!(p.next(0, Direction::Up, &space), None);
    }

    #[test]
    fn closer_seat_replaces_farther_one() {
        let nodes = entries(&[(0.0, 0.0), (0.0, 200.0)]);
        let p = AxisBandPolicy::default();
        assert_eq!(p.next(0, Direction::Down, &FocusSpace { nodes: &nodes }), Some(1));

        let nodes = entries(&[(0.0, 0.0), (0.0, 200.0), (0.0, 40.0)]);
        assert_eq!(p.next(0, Direction::Down, &FocusSpace { nodes: &nodes }), Some(2));
    }

    #[test]
    fn band_edge_is_inclusive() {
        let nodes = entries(&[(0.0, 0.0), (50.0, 10.0), (50.1, 5.0)]);
        let space = FocusSpace { nodes: &nodes };
        let p = AxisBandPolicy::default();
        assert_eq!(p.next(0, Direction::Down, &space), Some(1));

        let nodes = entries(&[(0.0, 0.0), (50.1, 5.0)]);
        let space = FocusSpace { nodes: &nodes };
        assert_eq!(p.next(0, Direction::Down, &space), None);
        assert_eq!(p.next(0, Direction::Right, &space), Some(1));
    }

    #[test]
    fn same_axis_coordinate_is_not_beyond() {
        // Same row: nothing strictly above or below.
        let nodes = entries(&[(0.0, 0.0), (30.0, 0.0), (60.0, 0.0)]);
        let space = FocusSpace { nodes: &nodes };
        let p = AxisBandPolicy::default();
        assert_eq!(p.next(1, Direction::Up, &space), None);
        assert_eq!(p.next(1, Direction::Down, &space), None);
        assert_eq!(p.next(1, Direction::Left, &space), Some(0));
        assert_eq!(p.next(1, Direction::Right, &space), Some(2));
    }

    #[test]
    fn ties_keep_traversal_order() {
        let nodes = entries(&[(0.0, 0.0), (20.0, 30.0), (-20.0, 30.0)]);
        let space = FocusSpace { nodes: &nodes };
        assert_eq!(AxisBandPolicy::default().next(0, Direction::Down, &space), Some(1));
    }

    #[test]
    fn unknown_current_has_no_neighbor() {
        let nodes = entries(&[(0.0, 0.0), (0.0, 40.0)]);
        let space = FocusSpace { nodes: &nodes };
        assert_eq!(AxisBandPolicy::default().next(9, Direction::Down, &space), None);
    }

    #[test]
    fn custom_tolerance_narrows_band() {
        let nodes = entries(&[(0.0, 0.0), (30.0, 40.0)]);
        let space = FocusSpace { nodes: &nodes };
        assert_eq!(AxisBandPolicy::new(20.0).next(0, Direction::Down, &space), None);
    }
}
