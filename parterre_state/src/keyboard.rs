// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard control of the focused seat.

use parterre_focus::Direction;
use parterre_selection::ToggleOutcome;

use crate::state::SeatMapState;

/// Keys the seat map reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Anything else.
    Other,
}

impl Key {
    /// Parses a DOM-style key name (`"Enter"`, `" "`, `"ArrowUp"`, ...).
    ///
    /// Unknown names map to [`Key::Other`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Self::Enter,
            " " | "Space" | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            _ => Self::Other,
        }
    }

    /// Navigation direction for arrow keys.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::ArrowUp => Some(Direction::Up),
            Self::ArrowDown => Some(Direction::Down),
            Self::ArrowLeft => Some(Direction::Left),
            Self::ArrowRight => Some(Direction::Right),
            _ => None,
        }
    }
}

/// What [`SeatMapState::handle_key`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// No focused seat, or a key the map does not use.
    Ignored,
    /// Enter or Space toggled the focused seat.
    Toggled(ToggleOutcome),
    /// Escape cleared the selection and the focus.
    Cleared,
    /// An arrow key; carries the new focus, or `None` if there was no
    /// neighbor that way.
    Navigated(Option<String>),
}

impl SeatMapState {
    /// Handles a key press while the seat map has keyboard focus.
    ///
    /// Keys only act while a seat is focused.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        let Some(focused) = self.focused_seat().map(str::to_owned) else {
            return KeyOutcome::Ignored;
        };
        if let Some(dir) = key.direction() {
            return KeyOutcome::Navigated(self.navigate(dir));
        }
        match key {
            Key::Enter | Key::Space => KeyOutcome::Toggled(self.toggle_seat(&focused)),
            Key::Escape => {
                self.clear_selection();
                self.set_focus(None);
                KeyOutcome::Cleared
            }
            _ => KeyOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse() {
        assert_eq!(Key::from_name(" "), Key::Space);
        assert_eq!(Key::from_name("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_name("Tab"), Key::Other);
        assert_eq!(Key::ArrowDown.direction(), Some(Direction::Down));
        assert_eq!(Key::Enter.direction(), None);
    }

    #[test]
    fn every_arrow_moves_from_the_center() {
        let venue = parterre_venue::VenueData::from_json_str(
            r#"{
                "venueId": "square",
                "name": "Square",
                "map": { "width": 120, "height": 120 },
                "sections": [{
                    "id": "A", "label": "Floor",
                    "rows": [
                        { "index": 1, "seats": [
                            { "id": "A-1-2", "col": 2, "x": 60, "y": 30, "priceTier": 1, "status": "available" }
                        ]},
                        { "index": 2, "seats": [
                            { "id": "A-2-1", "col": 1, "x": 30, "y": 60, "priceTier": 1, "status": "available" },
                            { "id": "A-2-2", "col": 2, "x": 60, "y": 60, "priceTier": 1, "status": "available" },
                            { "id": "A-2-3", "col": 3, "x": 90, "y": 60, "priceTier": 1, "status": "available" }
                        ]},
                        { "index": 3, "seats": [
                            { "id": "A-3-2", "col": 2, "x": 60, "y": 90, "priceTier": 1, "status": "available" }
                        ]}
                    ]
                }]
            }"#,
        )
        .unwrap();
        let mut state = SeatMapState::default();
        state.set_venue(venue);
        for (key, expected) in [
            (Key::ArrowUp, "A-1-2"),
            (Key::ArrowDown, "A-3-2"),
            (Key::ArrowLeft, "A-2-1"),
            (Key::ArrowRight, "A-2-3"),
        ] {
            state.set_focus(Some("A-2-2"));
            assert_eq!(
                state.handle_key(key),
                KeyOutcome::Navigated(Some(expected.into())),
                "{key:?}"
            );
        }
        state.set_focus(Some("A-2-2"));
        assert_eq!(state.handle_key(Key::Other), KeyOutcome::Ignored);
        assert_eq!(state.focused_seat(), Some("A-2-2"));
    }

    #[test]
    fn keys_without_focus_are_ignored() {
        let mut state = SeatMapState::default();
        assert_eq!(state.handle_key(Key::Enter), KeyOutcome::Ignored);
        assert_eq!(state.handle_key(Key::Escape), KeyOutcome::Ignored);
    }
}
