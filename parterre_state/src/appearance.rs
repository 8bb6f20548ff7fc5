// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! How a seat should be drawn and announced.

use parterre_venue::{PriceTable, SeatRef, SeatStatus};

/// Fill for selected seats, whatever their status.
pub const SELECTED_FILL: &str = "#3b82f6";
/// Stroke of the focused seat.
pub const FOCUS_STROKE: &str = "#1d4ed8";
/// Stroke of every other seat.
pub const DEFAULT_STROKE: &str = "#6b7280";

/// Fill color for a seat that is not selected.
#[must_use]
pub fn status_fill(status: SeatStatus) -> &'static str {
    match status {
        SeatStatus::Available => "#10b981",
        SeatStatus::Reserved => "#f59e0b",
        SeatStatus::Sold => "#ef4444",
        SeatStatus::Held => "#8b5cf6",
    }
}

/// Renderer-agnostic presentation of one seat.
#[derive(Clone, Debug, PartialEq)]
pub struct SeatAppearance {
    /// Fill color as `#rrggbb`.
    pub fill: &'static str,
    /// Stroke color as `#rrggbb`.
    pub stroke: &'static str,
    /// Stroke width in map units.
    pub stroke_width: f64,
    /// Whether pointer or keyboard activation may toggle the seat.
    pub clickable: bool,
    /// Whether the seat is selected (draws a check mark).
    pub selected: bool,
    /// Accessible label.
    pub label: String,
}

impl SeatAppearance {
    /// Resolves the appearance of `seat` given its selection and focus state.
    #[must_use]
    pub fn resolve(seat: SeatRef<'_>, selected: bool, focused: bool, prices: &PriceTable) -> Self {
        let status = seat.seat.status;
        let fill = if selected {
            SELECTED_FILL
        } else {
            status_fill(status)
        };
        let (stroke, stroke_width) = if focused {
            (FOCUS_STROKE, 2.0)
        } else {
            (DEFAULT_STROKE, 1.0)
        };
        Self {
            fill,
            stroke,
            stroke_width,
            clickable: status.is_available(),
            selected,
            label: format!(
                "Seat {}, Section {}, Row {}, {}, Price ${}",
                seat.seat.id,
                seat.section_id,
                seat.row_index,
                status,
                prices.price(seat.seat.price_tier)
            ),
        }
    }
}
