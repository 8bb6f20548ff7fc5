// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading and validating venue descriptions.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::VenueData;

/// Errors produced while loading a venue description.
#[derive(Debug, Error)]
pub enum VenueError {
    /// The venue file could not be read.
    #[error("failed to read venue data: {0}")]
    Io(#[from] std::io::Error),
    /// The venue document is not valid JSON or does not match the schema.
    #[error("malformed venue data: {0}")]
    Json(#[from] serde_json::Error),
    /// Two seats share an identifier.
    #[error("duplicate seat id `{0}`")]
    DuplicateSeat(String),
    /// The map dimensions are not positive and finite.
    #[error("invalid map dimensions {width}x{height}")]
    InvalidMap {
        /// Declared width.
        width: f64,
        /// Declared height.
        height: f64,
    },
}

impl VenueData {
    /// Parses and validates a venue from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, VenueError> {
        let venue: Self = serde_json::from_str(s)?;
        venue.validate()?;
        Ok(venue)
    }

    /// Parses and validates a venue from JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, VenueError> {
        let venue: Self = serde_json::from_slice(bytes)?;
        venue.validate()?;
        Ok(venue)
    }

    /// Parses and validates a venue from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, VenueError> {
        let venue: Self = serde_json::from_reader(reader)?;
        venue.validate()?;
        Ok(venue)
    }

    /// Reads, parses, and validates a venue file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VenueError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let venue = Self::from_json_slice(&bytes)?;
        tracing::debug!(
            path = %path.display(),
            venue_id = %venue.venue_id,
            seats = venue.seat_count(),
            "loaded venue"
        );
        Ok(venue)
    }

    /// Checks the structural invariants the rest of the workspace relies on.
    ///
    /// - Map dimensions are positive and finite.
    /// - Every seat identifier is unique across the venue.
    pub fn validate(&self) -> Result<(), VenueError> {
        let (width, height) = (self.map.width, self.map.height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(VenueError::InvalidMap { width, height });
        }

        let mut seen = HashSet::with_capacity(self.seat_count());
        for s in self.seats() {
            if !seen.insert(s.seat.id.as_str()) {
                return Err(VenueError::DuplicateSeat(s.seat.id.clone()));
            }
        }
        Ok(())
    }
}
