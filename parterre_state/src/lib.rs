// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre State: the interactive state of a seat map.
//!
//! [`SeatMapState`] ties the geometry crates together:
//! - the loaded venue (`parterre_venue`),
//! - a quota-bounded selection (`parterre_selection`),
//! - the focused seat and arrow-key navigation (`parterre_focus`),
//! - viewport culling (`parterre_view`).
//!
//! Pointer and keyboard input map onto a handful of calls
//! ([`SeatMapState::click_seat`], [`SeatMapState::hover_seat`],
//! [`SeatMapState::handle_key`]); everything that changes is announced to
//! observers as a [`SeatMapEvent`]. Selections are persisted per venue
//! through a [`SelectionStore`] and restored when the venue is loaded again.
//!
//! ## Minimal example
//!
//! ```rust
//! use parterre_state::{Key, KeyOutcome, SeatMapState};
//! use parterre_venue::VenueData;
//!
//! let venue = VenueData::from_json_str(r#"{
//!     "venueId": "club",
//!     "name": "Club",
//!     "map": { "width": 200, "height": 100 },
//!     "sections": [{
//!         "id": "A", "label": "Floor",
//!         "rows": [{ "index": 1, "seats": [
//!             { "id": "A-1-1", "col": 1, "x": 20, "y": 20, "priceTier": 1, "status": "available" },
//!             { "id": "A-1-2", "col": 2, "x": 50, "y": 20, "priceTier": 2, "status": "available" }
//!         ]}]
//!     }]
//! }"#).unwrap();
//!
//! let mut state = SeatMapState::default();
//! state.set_venue(venue);
//!
//! state.hover_seat("A-1-1");
//! assert_eq!(state.handle_key(Key::ArrowRight), KeyOutcome::Navigated(Some("A-1-2".into())));
//! state.handle_key(Key::Enter);
//!
//! assert_eq!(state.selected_seats(), ["A-1-2"]);
//! assert_eq!(state.summary().subtotal, 75);
//! ```
//!
//! The state is single-threaded: observers run synchronously on the calling
//! thread, in subscription order.

mod appearance;
mod config;
mod keyboard;
mod state;
pub mod store;
mod summary;
mod throttle;

pub use appearance::{DEFAULT_STROKE, FOCUS_STROKE, SELECTED_FILL, SeatAppearance, status_fill};
pub use config::{
    ConfigError, CullConfig, FocusConfig, SeatMapConfig, StorageConfig, ViewportConfig,
};
pub use keyboard::{Key, KeyOutcome};
pub use state::{SeatMapEvent, SeatMapState, SubscriptionId};
pub use store::{JsonFileStore, MemoryStore, SelectionStore, StoreError};
pub use summary::{SelectionSummary, SummaryLine};
pub use throttle::ViewportTracker;
