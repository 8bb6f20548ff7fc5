// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Price tiers and selection subtotals.

use crate::VenueData;

/// Maps a price tier to a whole-currency amount.
///
/// Unknown tiers price at `0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceTable {
    // Indexed by `tier - 1`.
    amounts: Vec<u32>,
}

impl Default for PriceTable {
    /// Tiers `1..=5` map to `50, 75, 100, 150, 200`.
    fn default() -> Self {
        Self {
            amounts: vec![50, 75, 100, 150, 200],
        }
    }
}

impl PriceTable {
    /// Creates a table where tier `n` costs `amounts[n - 1]`.
    #[must_use]
    pub fn new(amounts: Vec<u32>) -> Self {
        Self { amounts }
    }

    /// Amount for `tier`, or `0` for tiers outside the table.
    #[must_use]
    pub fn price(&self, tier: u32) -> u32 {
        tier.checked_sub(1)
            .and_then(|i| self.amounts.get(i as usize))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of the prices of the given seats.
    ///
    /// Returns `0` when there is no venue or nothing is selected. Identifiers
    /// that do not resolve to a seat contribute nothing.
    #[must_use]
    pub fn subtotal<S: AsRef<str>>(&self, venue: Option<&VenueData>, seat_ids: &[S]) -> u32 {
        let Some(venue) = venue else {
            return 0;
        };
        seat_ids
            .iter()
            .filter_map(|id| venue.find_seat(id.as_ref()))
            .map(|seat| self.price(seat.price_tier))
            .sum()
    }
}

/// Amount for `tier` in the default [`PriceTable`].
#[must_use]
pub fn price_for_tier(tier: u32) -> u32 {
    PriceTable::default().price(tier)
}

/// Subtotal of the given seats using the default [`PriceTable`].
#[must_use]
pub fn subtotal<S: AsRef<str>>(venue: Option<&VenueData>, seat_ids: &[S]) -> u32 {
    PriceTable::default().subtotal(venue, seat_ids)
}
