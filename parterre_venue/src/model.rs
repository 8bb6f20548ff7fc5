// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size};
use serde::{Deserialize, Serialize};

/// Booking status of a seat as published by the venue description.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// Free to select.
    Available,
    /// Reserved by someone else.
    Reserved,
    /// Already sold.
    Sold,
    /// Temporarily held.
    Held,
}

impl SeatStatus {
    /// Returns `true` if a seat in this status can be selected.
    #[must_use]
    pub fn is_available(self) -> bool {
        self == Self::Available
    }

    /// Lowercase name, as used in the venue JSON and in labels.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Sold => "sold",
            Self::Held => "held",
        }
    }
}

impl core::fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single seat.
///
/// `x`/`y` are expressed in map coordinates, the same space as
/// [`VenueData::map`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    /// Venue-wide unique identifier.
    pub id: String,
    /// Column index within the row.
    pub col: u32,
    /// Center X in map coordinates.
    pub x: f64,
    /// Center Y in map coordinates.
    pub y: f64,
    /// Price tier, see [`crate::PriceTable`].
    pub price_tier: u32,
    /// Current status.
    pub status: SeatStatus,
}

impl Seat {
    /// Seat center in map coordinates.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns `true` if the seat can be selected.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }
}

/// An ordered row of seats.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Row number as displayed to users.
    pub index: u32,
    /// Seats in column order.
    pub seats: Vec<Seat>,
}

/// Offset and uniform scale a renderer applies when laying out a section.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionTransform {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Default for SectionTransform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

impl SectionTransform {
    /// The transform as an affine map: scale first, then translate.
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::translate((self.x, self.y)) * Affine::scale(self.scale)
    }
}

/// A named block of rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section identifier.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Layout transform.
    #[serde(default)]
    pub transform: SectionTransform,
    /// Rows in display order.
    pub rows: Vec<Row>,
}

/// Canvas dimensions of the venue map.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapDimensions {
    /// Width in map units.
    pub width: f64,
    /// Height in map units.
    pub height: f64,
}

impl MapDimensions {
    /// The dimensions as a [`Size`].
    #[must_use]
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// The complete, read-only description of a venue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueData {
    /// Venue identifier; also keys persisted selections.
    pub venue_id: String,
    /// Display name.
    pub name: String,
    /// Map canvas dimensions.
    pub map: MapDimensions,
    /// Sections in display order.
    pub sections: Vec<Section>,
}

/// A seat together with the section and row it belongs to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeatRef<'a> {
    /// The seat itself.
    pub seat: &'a Seat,
    /// Identifier of the owning section.
    pub section_id: &'a str,
    /// Index of the owning row.
    pub row_index: u32,
}

/// Where a seat lives within the venue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatLocation {
    /// Section identifier.
    pub section: String,
    /// Row index.
    pub row: u32,
}

impl VenueData {
    /// Iterates every seat in traversal order: section, then row, then column.
    pub fn seats(&self) -> impl Iterator<Item = SeatRef<'_>> + '_ {
        self.sections.iter().flat_map(|section| {
            section.rows.iter().flat_map(move |row| {
                row.seats.iter().map(move |seat| SeatRef {
                    seat,
                    section_id: &section.id,
                    row_index: row.index,
                })
            })
        })
    }

    /// Total number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .map(|r| r.seats.len())
            .sum()
    }

    /// Looks up a seat with its section and row.
    ///
    /// This is a linear scan; callers that look up often should build their
    /// own map.
    #[must_use]
    pub fn seat_ref(&self, id: &str) -> Option<SeatRef<'_>> {
        self.seats().find(|s| s.seat.id == id)
    }

    /// Looks up a seat by identifier.
    #[must_use]
    pub fn find_seat(&self, id: &str) -> Option<&Seat> {
        self.seat_ref(id).map(|s| s.seat)
    }

    /// Returns the section and row of a seat.
    #[must_use]
    pub fn locate_seat(&self, id: &str) -> Option<SeatLocation> {
        self.seat_ref(id).map(|s| SeatLocation {
            section: s.section_id.to_owned(),
            row: s.row_index,
        })
    }
}
