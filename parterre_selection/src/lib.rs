// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Selection: quota-bounded selection bookkeeping.
//!
//! This crate tracks _which_ keys are selected. It does **not** know whether a
//! key may be selected at all (a sold seat, for instance); callers check that
//! before mutating.
//!
//! The core type is [`Selection`], a small, generic container that tracks:
//! - The selected keys, unique, in the order they were added.
//! - A **limit**: the most keys that may be selected at once (8 by default).
//! - An optional **primary** key: the most recently added one.
//! - A monotonically increasing **revision** counter that bumps only when the
//!   contents actually change.
//!
//! Requests that would exceed the limit are rejected without any change;
//! they are not errors.
//!
//! ## Minimal example
//!
//! ```rust
//! use parterre_selection::{Selection, ToggleOutcome};
//!
//! let mut selection = Selection::<&str>::with_limit(2);
//!
//! assert_eq!(selection.toggle("A-1-1"), ToggleOutcome::Added);
//! assert_eq!(selection.toggle("A-1-2"), ToggleOutcome::Added);
//!
//! // Full: a third seat is turned away and nothing changes.
//! let rev = selection.revision();
//! assert_eq!(selection.toggle("A-1-3"), ToggleOutcome::Rejected);
//! assert_eq!(selection.revision(), rev);
//!
//! // Toggling a selected seat frees a slot.
//! assert_eq!(selection.toggle("A-1-1"), ToggleOutcome::Removed);
//! assert_eq!(selection.items(), &["A-1-2"]);
//! assert_eq!(selection.remaining(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Default selection limit.
pub const DEFAULT_LIMIT: usize = 8;

/// What a call to [`Selection::toggle`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToggleOutcome {
    /// The key was not selected and is now.
    Added,
    /// The key was selected and no longer is.
    Removed,
    /// The key was not selected and the selection is full; nothing changed.
    Rejected,
}

impl ToggleOutcome {
    /// Returns `true` unless the request was rejected.
    #[must_use]
    pub fn changed(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// A selection of unique keys bounded by a limit.
///
/// `Selection` only requires equality on `T`. Keys live in a small `Vec<T>`
/// and uniqueness is enforced by scanning, which is the right trade for
/// limits in the single digits.
#[derive(Clone, Debug)]
pub struct Selection<T> {
    items: Vec<T>,
    primary: Option<usize>,
    limit: usize,
    revision: u64,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Selection<T> {
    /// Creates an empty selection with [`DEFAULT_LIMIT`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_limit(DEFAULT_LIMIT)
    }

    /// Creates an empty selection holding at most `limit` keys.
    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            primary: None,
            limit,
            revision: 0,
        }
    }

    /// Maximum number of keys.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns `true` if the selection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no more keys can be added.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.limit
    }

    /// How many more keys can be added.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.items.len())
    }

    /// The selected keys, in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The most recently added key still selected, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&T> {
        self.primary.map(|idx| &self.items[idx])
    }

    /// Returns the current revision counter.
    ///
    /// Bumped only when the selected keys change. Rejected and no-op calls
    /// leave it untouched, so observers can compare revisions instead of
    /// contents.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.primary = None;
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> Selection<T>
where
    T: PartialEq,
{
    /// Returns `true` if the selection currently contains `key`.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.position_of(key).is_some()
    }

    /// Removes `key` if selected, adds it if there is room, else does nothing.
    pub fn toggle(&mut self, key: T) -> ToggleOutcome {
        if let Some(idx) = self.position_of(&key) {
            self.remove_at(idx);
            self.bump_revision();
            ToggleOutcome::Removed
        } else if self.is_full() {
            ToggleOutcome::Rejected
        } else {
            self.push(key);
            ToggleOutcome::Added
        }
    }

    /// Adds `key` if it is not selected and there is room.
    ///
    /// Returns `true` if the key was added.
    pub fn add(&mut self, key: T) -> bool {
        if self.contains(&key) || self.is_full() {
            return false;
        }
        self.push(key);
        true
    }

    /// Removes `key` if selected. Returns `true` if it was.
    pub fn remove(&mut self, key: &T) -> bool {
        match self.position_of(key) {
            Some(idx) => {
                self.remove_at(idx);
                self.bump_revision();
                true
            }
            None => false,
        }
    }

    /// Replaces the selection with `keys` if they fit within the limit.
    ///
    /// Duplicates in the input are ignored before counting. Returns `false`,
    /// leaving the selection untouched, when the batch is too large.
    pub fn try_replace_with<I>(&mut self, keys: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let new_items = dedup(keys);
        if new_items.len() > self.limit {
            return false;
        }
        self.replace_with_items(new_items);
        true
    }

    /// Replaces the selection with the first `limit` unique keys of `keys`.
    ///
    /// Returns how many keys were dropped.
    pub fn replace_truncated<I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut new_items = dedup(keys);
        let dropped = new_items.len().saturating_sub(self.limit);
        new_items.truncate(self.limit);
        self.replace_with_items(new_items);
        dropped
    }

    fn position_of(&self, key: &T) -> Option<usize> {
        self.items.iter().position(|k| k == key)
    }

    fn push(&mut self, key: T) {
        self.items.push(key);
        self.primary = Some(self.items.len() - 1);
        self.bump_revision();
    }

    fn replace_with_items(&mut self, new_items: Vec<T>) {
        if new_items == self.items {
            return;
        }
        self.primary = new_items.len().checked_sub(1);
        self.items = new_items;
        self.bump_revision();
    }

    fn remove_at(&mut self, idx: usize) {
        self.items.remove(idx);
        self.primary = match self.primary {
            Some(p) if p == idx => None,
            Some(p) if p > idx => Some(p - 1),
            other => other,
        };
    }
}

fn dedup<T: PartialEq, I: IntoIterator<Item = T>>(keys: I) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for key in keys {
        if !out.contains(&key) {
            out.push(key);
        }
    }
    out
}
