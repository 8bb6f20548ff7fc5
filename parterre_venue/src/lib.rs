// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Venue: the data model of a seated venue.
//!
//! A venue is a static description: a map canvas, sections, rows, and seats.
//! It is loaded once per session and treated as read-only afterwards. This
//! crate provides:
//! - The serde model ([`VenueData`], [`Section`], [`Row`], [`Seat`]) matching
//!   the camelCase `venue.json` documents venues are published as.
//! - Loading with validation ([`VenueData::from_json_str`],
//!   [`VenueData::from_path`]); seat identifiers must be unique.
//! - Lookups ([`VenueData::seats`], [`VenueData::find_seat`],
//!   [`VenueData::locate_seat`]).
//! - Price tiers ([`PriceTable`], [`price_for_tier`], [`subtotal`]).
//!
//! Geometry (culling, directional focus) lives in other Parterre crates, which
//! consume [`Seat::position`].
//!
//! ## Example
//!
//! ```rust
//! use parterre_venue::{VenueData, price_for_tier, subtotal};
//!
//! let venue = VenueData::from_json_str(r#"{
//!     "venueId": "hall",
//!     "name": "Small Hall",
//!     "map": { "width": 400, "height": 300 },
//!     "sections": [{
//!         "id": "A", "label": "Stalls",
//!         "transform": { "x": 0, "y": 0, "scale": 1 },
//!         "rows": [{ "index": 1, "seats": [
//!             { "id": "A-1-1", "col": 1, "x": 20, "y": 20, "priceTier": 2, "status": "available" }
//!         ]}]
//!     }]
//! }"#).unwrap();
//!
//! assert_eq!(venue.seat_count(), 1);
//! assert_eq!(price_for_tier(2), 75);
//! assert_eq!(subtotal(Some(&venue), &["A-1-1"]), 75);
//! ```

mod load;
mod model;
mod price;

pub use load::VenueError;
pub use model::{
    MapDimensions, Row, Seat, SeatLocation, SeatRef, SeatStatus, Section, SectionTransform,
    VenueData,
};
pub use price::{PriceTable, price_for_tier, subtotal};
