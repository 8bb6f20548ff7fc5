// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Index: small 2D AABB backends.
//!
//! Seat maps hold thousands of small circles. The culling and focus crates
//! can answer their queries with a plain linear scan, but large venues
//! benefit from bucketing seats by location first. This crate provides the
//! shared building blocks:
//!
//! - [`Aabb2D`]: an inclusive axis-aligned box, generic over the scalar type.
//! - [`Backend`]: insert/update/remove boxes under caller-chosen slots and
//!   visit the slots that hit a point or rectangle.
//! - [`backends::GridF64`] *(feature `backend_grid`, default)*: a uniform grid
//!   backed by `hashbrown` buckets of `smallvec` slot lists.
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "backend_grid")]
//! # {
//! use parterre_index::{Aabb2D, Backend};
//! use parterre_index::backends::GridF64;
//!
//! let mut grid = GridF64::new(64.0);
//! grid.insert(0, Aabb2D::around_circle(10.0, 10.0, 8.0));
//! grid.insert(1, Aabb2D::around_circle(300.0, 10.0, 8.0));
//!
//! let hits = grid.query_rect_sorted(Aabb2D::new(0.0, 0.0, 100.0, 100.0));
//! assert_eq!(hits, [0]);
//! # }
//! ```
//!
//! ### Float semantics
//!
//! Coordinates are assumed to be free of NaNs.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod backend;
pub mod backends;
mod types;

pub use backend::Backend;
pub use types::Aabb2D;
