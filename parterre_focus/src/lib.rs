// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Focus: directional focus navigation over seat coordinates.
//!
//! Given the focused seat and an arrow direction, find the seat the focus
//! should move to. The model is deliberately simple:
//! - Every focusable item is a [`FocusEntry`]: an id and a center point in
//!   map coordinates.
//! - A [`FocusSpace`] is a borrowed slice of entries in traversal order
//!   (for venues: section, then row, then seat).
//! - A [`FocusPolicy`] picks the next entry for a [`Direction`].
//!
//! [`AxisBandPolicy`] is the standard policy. A candidate qualifies when it
//! lies strictly beyond the current point along the direction's axis and
//! within a tolerance band (50 map units by default, inclusive) on the
//! perpendicular axis. The candidate with the smallest axis distance wins;
//! on equal distances the earliest entry in traversal order wins. The
//! current entry is never returned.
//!
//! [`GridFocusIndex`] *(feature `indexed`)* answers the same question from a
//! uniform grid built once per entry set, and returns exactly the same
//! entry, ties included.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use parterre_focus::{AxisBandPolicy, Direction, FocusEntry, FocusPolicy, FocusSpace};
//!
//! let nodes = [
//!     FocusEntry { id: 1_u32, point: Point::new(0.0, 0.0) },
//!     FocusEntry { id: 2, point: Point::new(0.0, 200.0) },
//!     FocusEntry { id: 3, point: Point::new(30.0, 40.0) },
//! ];
//! let space = FocusSpace { nodes: &nodes };
//! let policy = AxisBandPolicy::default();
//!
//! // Seat 3 is 30 units off-axis, inside the band, and nearer than seat 2.
//! assert_eq!(policy.next(1, Direction::Down, &space), Some(3));
//! // Nothing lies above seat 1.
//! assert_eq!(policy.next(1, Direction::Up, &space), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
#[cfg(feature = "indexed")]
mod grid;
mod policy;

use kurbo::Point;

#[cfg(feature = "indexed")]
pub use grid::{DEFAULT_FOCUS_CELL_SIZE, GridFocusIndex};
pub use policy::{AxisBandPolicy, DEFAULT_TOLERANCE, band_distance};

/// Arrow-key direction in map space. `Down` is increasing `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Decreasing `y`.
    Up,
    /// Increasing `y`.
    Down,
    /// Decreasing `x`.
    Left,
    /// Increasing `x`.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns `true` for `Up` and `Down`.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Distance from `from` to `to` along this direction's axis, if `to` lies
    /// strictly beyond `from` in this direction.
    #[must_use]
    pub fn forward_distance(self, from: Point, to: Point) -> Option<f64> {
        match self {
            Self::Up => (to.y < from.y).then(|| from.y - to.y),
            Self::Down => (to.y > from.y).then(|| to.y - from.y),
            Self::Left => (to.x < from.x).then(|| from.x - to.x),
            Self::Right => (to.x > from.x).then(|| to.x - from.x),
        }
    }

    /// Absolute offset from `from` to `to` on the perpendicular axis.
    #[must_use]
    pub fn lateral_offset(self, from: Point, to: Point) -> f64 {
        if self.is_vertical() {
            (to.x - from.x).abs()
        } else {
            (to.y - from.y).abs()
        }
    }
}

/// A focusable item: an id and its center in map coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusEntry<K> {
    /// Identifier returned by policies.
    pub id: K,
    /// Center point.
    pub point: Point,
}

/// Borrowed view of the entries a policy may choose from, in traversal order.
#[derive(Clone, Copy, Debug)]
pub struct FocusSpace<'a, K> {
    /// Candidate entries.
    pub nodes: &'a [FocusEntry<K>],
}

impl<K: PartialEq> FocusSpace<'_, K> {
    /// Index of the first entry with `id`.
    #[must_use]
    pub fn position(&self, id: &K) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == *id)
    }
}

/// Chooses where focus goes next.
pub trait FocusPolicy<K> {
    /// The entry to focus after moving from `current` in `direction`, or
    /// `None` if `current` is unknown or nothing qualifies.
    fn next(&self, current: K, direction: Direction, space: &FocusSpace<'_, K>) -> Option<K>;
}
