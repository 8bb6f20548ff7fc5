// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rate limiting of viewport updates.

use std::time::{Duration, Instant};

use parterre_view::ScrollViewport;

/// Tracks the current [`ScrollViewport`] from scroll and resize events.
///
/// Scroll events are throttled on the leading edge: the first event after a
/// quiet interval is applied immediately and later ones inside the interval
/// are dropped. Resize events always apply. Timestamps come from the caller.
#[derive(Clone, Debug)]
pub struct ViewportTracker {
    current: ScrollViewport,
    interval: Duration,
    last_scroll: Option<Instant>,
}

impl ViewportTracker {
    /// Starts from `initial` and accepts at most one scroll per `interval`.
    #[must_use]
    pub fn new(initial: ScrollViewport, interval: Duration) -> Self {
        Self {
            current: initial,
            interval,
            last_scroll: None,
        }
    }

    /// The viewport after the accepted events so far.
    #[must_use]
    pub fn viewport(&self) -> ScrollViewport {
        self.current
    }

    /// Applies a scroll to offset `(x, y)` at `now`.
    ///
    /// Returns `true` if the update was applied.
    pub fn scroll(&mut self, x: f64, y: f64, now: Instant) -> bool {
        if let Some(last) = self.last_scroll
            && now.saturating_duration_since(last) < self.interval
        {
            return false;
        }
        self.last_scroll = Some(now);
        self.current.x = x;
        self.current.y = y;
        true
    }

    /// Applies a new visible size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.current.width = width;
        self.current.height = height;
    }
}
