// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use parterre_venue::{PriceTable, SeatLocation, VenueData};

/// One selected seat with its location and price.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryLine {
    /// Seat identifier.
    pub seat_id: String,
    /// Section and row, if the seat exists in the venue.
    pub location: Option<SeatLocation>,
    /// Price of the seat's tier; `0` for unknown seats.
    pub price: u32,
}

/// Snapshot of the current selection for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionSummary {
    /// Selected seats in selection order.
    pub lines: Vec<SummaryLine>,
    /// Sum of the line prices.
    pub subtotal: u32,
    /// Selection limit.
    pub limit: usize,
    /// Seats that can still be added.
    pub remaining: usize,
    /// Whether the limit is reached.
    pub at_limit: bool,
}

impl SelectionSummary {
    /// Builds the summary of `seat_ids` against `venue`.
    #[must_use]
    pub fn build(
        venue: Option<&VenueData>,
        seat_ids: &[String],
        limit: usize,
        prices: &PriceTable,
    ) -> Self {
        let lines: Vec<SummaryLine> = seat_ids
            .iter()
            .map(|id| {
                let seat = venue.and_then(|v| v.seat_ref(id));
                SummaryLine {
                    seat_id: id.clone(),
                    location: seat.map(|s| SeatLocation {
                        section: s.section_id.to_owned(),
                        row: s.row_index,
                    }),
                    price: seat.map_or(0, |s| prices.price(s.seat.price_tier)),
                }
            })
            .collect();
        Self {
            subtotal: prices.subtotal(venue, seat_ids),
            limit,
            remaining: limit.saturating_sub(lines.len()),
            at_limit: lines.len() >= limit,
            lines,
        }
    }

    /// Number of selected seats.
    #[must_use]
    pub fn count(&self) -> usize {
        self.lines.len()
    }
}

impl fmt::Display for SelectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your Selection ({}/{})", self.count(), self.limit)?;
        if self.lines.is_empty() {
            return writeln!(f, "No seats selected");
        }
        for line in &self.lines {
            match &line.location {
                Some(loc) => writeln!(
                    f,
                    "  {}  Section {}, Row {}  ${}",
                    line.seat_id, loc.section, loc.row, line.price
                )?,
                None => writeln!(f, "  {}  ${}", line.seat_id, line.price)?,
            }
        }
        writeln!(f, "Subtotal: ${}", self.subtotal)?;
        if self.at_limit {
            writeln!(f, "Maximum seats selected")
        } else {
            writeln!(f, "{} more seat(s) available", self.remaining)
        }
    }
}
