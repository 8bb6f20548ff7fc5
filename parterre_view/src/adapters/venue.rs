// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Venue adapter: cull `parterre_venue` seats.
//!
//! ## Example
//!
//! ```no_run
//! use parterre_view::ScrollViewport;
//! use parterre_view::adapters::venue::visible_seats;
//! use parterre_venue::VenueData;
//!
//! let venue = VenueData::from_path("venue.json").unwrap();
//! let seats: Vec<_> = venue.seats().map(|s| s.seat.clone()).collect();
//! let viewport = ScrollViewport::new(0.0, 0.0, 800.0, 600.0);
//! let visible = visible_seats(
//!     &seats,
//!     &viewport,
//!     venue.map.width,
//!     venue.map.height,
//!     800.0,
//!     600.0,
//! );
//! println!("{} of {} seats visible", visible.len(), seats.len());
//! ```

use alloc::vec::Vec;

use kurbo::{Point, Size};
use parterre_venue::{Seat, SeatRef, VenueData};

use crate::cull::{CullParams, MapItem, visible_items};
use crate::viewport::{MapFit, ScrollViewport};

impl MapItem for Seat {
    fn map_position(&self) -> Point {
        self.position()
    }
}

impl MapItem for SeatRef<'_> {
    fn map_position(&self) -> Point {
        self.seat.position()
    }
}

/// The seats to render for `viewport`, with the default [`CullParams`].
///
/// `viewport` and the container size are in container pixels; the map size
/// is in map units.
#[must_use]
pub fn visible_seats<'a>(
    all_seats: &'a [Seat],
    viewport: &ScrollViewport,
    map_width: f64,
    map_height: f64,
    container_width: f64,
    container_height: f64,
) -> Vec<&'a Seat> {
    let fit = MapFit::new(
        Size::new(map_width, map_height),
        Size::new(container_width, container_height),
    );
    visible_items(all_seats, viewport, &fit, &CullParams::default())
}

/// The seats of `venue` to render, each with its section and row.
///
/// An absent venue has nothing visible.
#[must_use]
pub fn visible_venue_seats<'a>(
    venue: Option<&'a VenueData>,
    viewport: &ScrollViewport,
    container: Size,
    params: &CullParams,
) -> Vec<SeatRef<'a>> {
    let Some(venue) = venue else {
        return Vec::new();
    };
    let all: Vec<SeatRef<'a>> = venue.seats().collect();
    let fit = MapFit::new(venue.map.size(), container);
    visible_items(&all, viewport, &fit, params)
        .into_iter()
        .copied()
        .collect()
}
