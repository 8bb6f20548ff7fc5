// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for spatial indexing implementations.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::Aabb2D;

/// Spatial backend over caller-assigned slots.
///
/// Slots are dense `usize` handles chosen by the caller (typically the
/// position of an item in its owning `Vec`). Backends report slots in no
/// particular order; callers that need traversal order sort the result.
pub trait Backend<T>
where
    T: Copy + PartialOrd + Debug,
{
    /// Insert a new slot.
    fn insert(&mut self, slot: usize, aabb: Aabb2D<T>);

    /// Replace an existing slot's box.
    fn update(&mut self, slot: usize, aabb: Aabb2D<T>);

    /// Remove a slot.
    fn remove(&mut self, slot: usize);

    /// Remove every slot.
    fn clear(&mut self);

    /// Visit slots whose box contains the point.
    fn visit_point<F: FnMut(usize)>(&self, x: T, y: T, f: F);

    /// Visit slots whose box intersects `rect`. Each slot is visited once.
    fn visit_rect<F: FnMut(usize)>(&self, rect: Aabb2D<T>, f: F);

    /// Slots whose box intersects `rect`, in ascending slot order.
    fn query_rect_sorted(&self, rect: Aabb2D<T>) -> Vec<usize> {
        let mut out = Vec::new();
        self.visit_rect(rect, |i| out.push(i));
        out.sort_unstable();
        out
    }
}
