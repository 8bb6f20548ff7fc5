// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Venue adapter: directional navigation between `parterre_venue` seats.
//!
//! Seats are visited section by section, row by row, in the order the venue
//! lists them; that order is the traversal order used to break ties.
//! Positions are the raw seat coordinates. Section transforms are not
//! applied.
//!
//! ## Example
//!
//! ```no_run
//! use parterre_focus::Direction;
//! use parterre_focus::adapters::venue::find_adjacent_seat;
//! use parterre_venue::VenueData;
//!
//! let venue = VenueData::from_path("venue.json").unwrap();
//! if let Some(next) = find_adjacent_seat(&venue, "A-1-1", Direction::Right) {
//!     println!("focus moves to {next}");
//! }
//! ```

use alloc::vec::Vec;

use parterre_venue::VenueData;

use crate::{AxisBandPolicy, Direction, FocusEntry, FocusSpace};

/// Build a [`FocusSpace`] over every seat of `venue`, keyed by seat id.
///
/// `out` is cleared and reused as backing storage.
pub fn build_focus_space<'v, 'b>(
    venue: &'v VenueData,
    out: &'b mut Vec<FocusEntry<&'v str>>,
) -> FocusSpace<'b, &'v str> {
    out.clear();
    out.extend(venue.seats().map(|s| FocusEntry {
        id: s.seat.id.as_str(),
        point: s.seat.position(),
    }));
    FocusSpace { nodes: out }
}

/// The seat adjacent to `current_seat_id` in `direction`, with the default
/// 50-unit band.
///
/// Returns `None` when the seat is unknown or has no neighbor that way.
#[must_use]
pub fn find_adjacent_seat<'a>(
    venue: &'a VenueData,
    current_seat_id: &str,
    direction: Direction,
) -> Option<&'a str> {
    find_adjacent_seat_with(venue, current_seat_id, direction, &AxisBandPolicy::default())
}

/// Like [`find_adjacent_seat`], with an explicit policy.
#[must_use]
pub fn find_adjacent_seat_with<'a>(
    venue: &'a VenueData,
    current_seat_id: &str,
    direction: Direction,
    policy: &AxisBandPolicy,
) -> Option<&'a str> {
    let mut buf = Vec::new();
    let space = build_focus_space(venue, &mut buf);
    let from = space.nodes.iter().position(|n| n.id == current_seat_id)?;
    policy
        .next_index(from, direction, &space)
        .map(|i| space.nodes[i].id)
}
