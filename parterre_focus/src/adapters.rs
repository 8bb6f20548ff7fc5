// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration helpers for other Parterre crates.
//!
//! Modules in this file are behind feature flags so `parterre_focus` can
//! remain usable in contexts that do not depend on those crates.
//!
//! - `venue` (`venue_adapter` feature): build [`crate::FocusSpace`] views
//!   from a `parterre_venue::VenueData` and resolve seat neighbors by id.

#[cfg(feature = "venue_adapter")]
pub mod venue;
