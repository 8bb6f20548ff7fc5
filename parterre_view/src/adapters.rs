// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration helpers for other Parterre crates.
//!
//! Modules in this file are behind feature flags so `parterre_view` can
//! remain usable in contexts that do not depend on those crates.
//!
//! - [`venue`] (`venue_adapter` feature): cull [`parterre_venue::Seat`]s and
//!   whole [`parterre_venue::VenueData`] values.

#[cfg(feature = "venue_adapter")]
pub mod venue;
