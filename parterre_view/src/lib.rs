// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre View: scroll viewports and viewport culling for seat maps.
//!
//! A seat map is drawn on a canvas of `map` units that is scaled to fit a
//! scrollable container. Venues can hold many thousands of seats; only the
//! ones near the scrolled region need to be rendered. This crate provides:
//! - [`ScrollViewport`]: the scroll offset and visible size, in container pixels.
//! - [`MapFit`]: the aspect-preserving container-to-map scale and coordinate
//!   conversion between the two spaces.
//! - [`visible_indices`] / [`visible_items`]: the culling engine. Items are
//!   circles of a fixed radius; an item is visible iff its circle intersects
//!   the viewport rectangle (in map units) padded on every side.
//! - [`IndexedCuller`] *(feature `indexed`)*: the same answer from a uniform
//!   grid built once per item set.
//! - [`adapters::venue`] *(feature `venue_adapter`)*: culling over
//!   `parterre_venue` seats.
//!
//! Small maps are not culled at all: below [`CullParams::threshold`] items
//! (1000 by default) every item is returned.
//!
//! It does **not** own any rendering backend or scroll container. Callers are
//! expected to:
//! - Track scroll and resize events and rebuild the [`ScrollViewport`].
//! - Recompute the visible set whenever the items, the viewport, or the map
//!   dimensions change.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use parterre_view::{CullParams, MapFit, ScrollViewport, visible_items};
//!
//! // 1200 seats in a row, 20 map units apart.
//! let seats: Vec<Point> = (0..1200).map(|i| Point::new(i as f64 * 20.0, 50.0)).collect();
//!
//! // The 24000x100 map is shown at half scale in a 12000x50 container.
//! let fit = MapFit::new(Size::new(24_000.0, 100.0), Size::new(12_000.0, 50.0));
//! let viewport = ScrollViewport::new(0.0, 0.0, 400.0, 50.0);
//!
//! let visible = visible_items(&seats, &viewport, &fit, &CullParams::default());
//! // Map-space rect is 0..800, padded to -100..900; radius 8 reaches 908.
//! assert_eq!(visible.len(), 46);
//! ```
//!
//! All culling functions are pure: identical inputs give identical outputs.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
mod cull;
#[cfg(feature = "indexed")]
mod indexed;
mod viewport;

pub use cull::{
    CullParams, DEFAULT_CULL_THRESHOLD, DEFAULT_PADDING, DEFAULT_SEAT_RADIUS, MapItem,
    circle_intersects_rect, visible_indices, visible_items,
};
#[cfg(feature = "indexed")]
pub use indexed::{DEFAULT_CELL_SIZE, IndexedCuller};
pub use viewport::{MapFit, MapFitDebugInfo, ScrollViewport};
