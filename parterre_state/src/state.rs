// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::sync::Arc;

use kurbo::Size;
use parterre_focus::Direction;
use parterre_focus::adapters::venue::find_adjacent_seat_with;
use parterre_selection::{Selection, ToggleOutcome};
use parterre_venue::{PriceTable, SeatRef, VenueData};
use parterre_view::ScrollViewport;
use parterre_view::adapters::venue::visible_venue_seats;

use crate::appearance::SeatAppearance;
use crate::config::SeatMapConfig;
use crate::store::{MemoryStore, SelectionStore};
use crate::summary::SelectionSummary;

/// Something observers are told about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeatMapEvent {
    /// A seat was clicked, whatever its status.
    SeatClicked(String),
    /// The selected seats changed; carries the new selection.
    SelectionChanged(Vec<String>),
    /// Focus moved; `None` when cleared.
    FocusChanged(Option<String>),
    /// A venue was installed; carries its id.
    VenueLoaded(String),
}

/// Handle returned by [`SeatMapState::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&SeatMapEvent)>;

/// The interactive state of one seat map.
///
/// Owns the loaded venue, the selection, the focused seat, a persistence
/// store, and any number of observers. Selection changes are written through
/// to the store while a venue is loaded; store failures are logged and do not
/// affect the in-memory state.
pub struct SeatMapState {
    config: SeatMapConfig,
    venue: Option<Arc<VenueData>>,
    selection: Selection<String>,
    focused: Option<String>,
    store: Box<dyn SelectionStore>,
    prices: PriceTable,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for SeatMapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeatMapState")
            .field("venue", &self.venue.as_ref().map(|v| v.venue_id.as_str()))
            .field("selection", &self.selection.items())
            .field("focused", &self.focused)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Default for SeatMapState {
    fn default() -> Self {
        Self::new(SeatMapConfig::default(), Box::new(MemoryStore::new()))
    }
}

impl SeatMapState {
    /// Empty state with no venue.
    #[must_use]
    pub fn new(config: SeatMapConfig, store: Box<dyn SelectionStore>) -> Self {
        Self {
            selection: Selection::with_limit(config.max_selected),
            config,
            venue: None,
            focused: None,
            store,
            prices: PriceTable::default(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Replaces the price table used for summaries and labels.
    #[must_use]
    pub fn with_prices(mut self, prices: PriceTable) -> Self {
        self.prices = prices;
        self
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &SeatMapConfig {
        &self.config
    }

    /// The loaded venue, if any.
    #[must_use]
    pub fn venue(&self) -> Option<&VenueData> {
        self.venue.as_deref()
    }

    /// Selected seat ids, in selection order.
    #[must_use]
    pub fn selected_seats(&self) -> &[String] {
        self.selection.items()
    }

    /// Returns `true` if `seat_id` is selected.
    #[must_use]
    pub fn is_selected(&self, seat_id: &str) -> bool {
        self.selection.iter().any(|s| s == seat_id)
    }

    /// Revision of the selection; changes exactly when the selection does.
    #[must_use]
    pub fn selection_revision(&self) -> u64 {
        self.selection.revision()
    }

    /// The focused seat, if any.
    #[must_use]
    pub fn focused_seat(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Registers an observer for every later event.
    pub fn subscribe(&mut self, observer: impl FnMut(&SeatMapEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    /// Installs `venue`, resetting focus and restoring its saved selection.
    ///
    /// Saved seats that are unknown to `venue` or no longer available are
    /// dropped, and a selection longer than the limit keeps its leading
    /// seats; the store is rewritten when either happens. With nothing saved
    /// (or an unreadable store) the selection starts empty.
    pub fn set_venue(&mut self, venue: impl Into<Arc<VenueData>>) {
        let venue = venue.into();
        let venue_id = venue.venue_id.clone();
        let saved = match self.store.load(&venue_id) {
            Ok(ids) => ids,
            Err(err) => {
                tracing::warn!(venue = %venue_id, error = %err, "failed to load saved selection");
                Vec::new()
            }
        };
        let saved_len = saved.len();
        let saved: Vec<String> = saved
            .into_iter()
            .filter(|id| venue.find_seat(id).is_some_and(|s| s.is_available()))
            .collect();
        let stale = saved_len - saved.len();
        if stale > 0 {
            tracing::debug!(venue = %venue_id, stale, "dropped unavailable seats from saved selection");
        }
        self.venue = Some(venue);
        self.emit(&SeatMapEvent::VenueLoaded(venue_id.clone()));

        let rev = self.selection.revision();
        let dropped = self.selection.replace_truncated(saved);
        if dropped > 0 {
            tracing::debug!(venue = %venue_id, dropped, "saved selection exceeded the limit");
        }
        if stale > 0 || dropped > 0 {
            self.persist();
        }
        if self.selection.revision() != rev {
            tracing::debug!(
                venue = %venue_id,
                restored = self.selection.len(),
                "restored selection"
            );
            self.emit(&SeatMapEvent::SelectionChanged(self.selection.items().to_vec()));
        }
        self.set_focus(None);
    }

    /// Toggles an available seat.
    ///
    /// Unknown seats, seats that are not available, and additions past the
    /// limit are rejected without any change.
    pub fn toggle_seat(&mut self, seat_id: &str) -> ToggleOutcome {
        let available = self
            .venue
            .as_deref()
            .and_then(|v| v.find_seat(seat_id))
            .is_some_and(|s| s.is_available());
        if !available {
            return ToggleOutcome::Rejected;
        }
        let outcome = self.selection.toggle(seat_id.to_owned());
        if outcome.changed() {
            self.selection_changed();
        }
        outcome
    }

    /// Replaces the selection if `seat_ids` fits the limit.
    ///
    /// Returns `false`, changing nothing, for an oversized batch or one that
    /// names a seat that is unknown or not available.
    pub fn set_selected<I, S>(&mut self, seat_ids: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = seat_ids.into_iter().map(Into::into).collect();
        let Some(venue) = self.venue.as_deref() else {
            return false;
        };
        if !ids
            .iter()
            .all(|id| venue.find_seat(id).is_some_and(|s| s.is_available()))
        {
            return false;
        }
        let rev = self.selection.revision();
        if !self.selection.try_replace_with(ids) {
            return false;
        }
        if self.selection.revision() != rev {
            self.selection_changed();
        }
        true
    }

    /// Deselects every seat.
    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.selection.clear();
        self.selection_changed();
    }

    /// Moves focus to `seat_id`, or clears it.
    pub fn set_focus(&mut self, seat_id: Option<&str>) {
        if self.focused.as_deref() == seat_id {
            return;
        }
        self.focused = seat_id.map(str::to_owned);
        self.emit(&SeatMapEvent::FocusChanged(self.focused.clone()));
    }

    /// Pointer click on a seat.
    ///
    /// Focuses the seat and reports the click whatever its status; only an
    /// available seat is toggled. Returns `None` for unknown seats.
    pub fn click_seat(&mut self, seat_id: &str) -> Option<ToggleOutcome> {
        let available = self.venue.as_deref()?.find_seat(seat_id)?.is_available();
        self.set_focus(Some(seat_id));
        self.emit(&SeatMapEvent::SeatClicked(seat_id.to_owned()));
        Some(if available {
            self.toggle_seat(seat_id)
        } else {
            ToggleOutcome::Rejected
        })
    }

    /// Pointer hover: focuses available seats only.
    pub fn hover_seat(&mut self, seat_id: &str) {
        let available = self
            .venue
            .as_deref()
            .and_then(|v| v.find_seat(seat_id))
            .is_some_and(|s| s.is_available());
        if available {
            self.set_focus(Some(seat_id));
        }
    }

    /// Moves focus to the adjacent seat in `direction`.
    ///
    /// Returns the newly focused seat. Without a focused seat, or with no
    /// neighbor that way, focus stays where it is and `None` is returned.
    pub fn navigate(&mut self, direction: Direction) -> Option<String> {
        let venue = self.venue.as_deref()?;
        let current = self.focused.as_deref()?;
        let policy = self.config.focus_policy();
        let next = find_adjacent_seat_with(venue, current, direction, &policy)?.to_owned();
        tracing::debug!(from = current, to = %next, ?direction, "focus moved");
        self.set_focus(Some(&next));
        Some(next)
    }

    /// Seats to render for `viewport` in a container of `container` pixels.
    #[must_use]
    pub fn visible_seats(&self, viewport: &ScrollViewport, container: Size) -> Vec<SeatRef<'_>> {
        visible_venue_seats(
            self.venue.as_deref(),
            viewport,
            container,
            &self.config.cull_params(),
        )
    }

    /// Presentation of `seat_id`, or `None` for unknown seats.
    #[must_use]
    pub fn appearance(&self, seat_id: &str) -> Option<SeatAppearance> {
        let seat = self.venue.as_deref()?.seat_ref(seat_id)?;
        Some(SeatAppearance::resolve(
            seat,
            self.is_selected(seat_id),
            self.focused.as_deref() == Some(seat_id),
            &self.prices,
        ))
    }

    /// Lines, subtotal, and remaining capacity of the current selection.
    #[must_use]
    pub fn summary(&self) -> SelectionSummary {
        SelectionSummary::build(
            self.venue.as_deref(),
            self.selection.items(),
            self.selection.limit(),
            &self.prices,
        )
    }

    fn selection_changed(&mut self) {
        self.persist();
        self.emit(&SeatMapEvent::SelectionChanged(self.selection.items().to_vec()));
    }

    fn persist(&self) {
        let Some(venue) = self.venue.as_deref() else {
            return;
        };
        let result = if self.selection.is_empty() {
            self.store.clear(&venue.venue_id)
        } else {
            self.store.save(&venue.venue_id, self.selection.items())
        };
        if let Err(err) = result {
            tracing::warn!(venue = %venue.venue_id, error = %err, "failed to persist selection");
        }
    }

    fn emit(&mut self, event: &SeatMapEvent) {
        for (_, observer) in &mut self.observers {
            observer(event);
        }
    }
}
