// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations.
//!
//! - [`GridF64`] *(feature `backend_grid`)*: uniform grid buckets keyed by
//!   quantized coordinates.

#[cfg(feature = "backend_grid")]
mod grid;

#[cfg(feature = "backend_grid")]
pub use grid::GridF64;
