// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;

/// Axis-aligned bounding box with inclusive edges.
///
/// A box is empty when `min > max` on either axis. Touching boxes intersect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb2D<T> {
    /// Minimum X.
    pub min_x: T,
    /// Minimum Y.
    pub min_y: T,
    /// Maximum X.
    pub max_x: T,
    /// Maximum Y.
    pub max_y: T,
}

impl<T: Copy + PartialOrd + Debug> Aabb2D<T> {
    /// Creates a box from its minimum and maximum corners.
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Returns `true` if the box contains no points.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Returns `true` if `(x, y)` lies inside or on the boundary.
    pub fn contains_point(&self, x: T, y: T) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Returns `true` if the boxes share at least one point.
    pub fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }
}

impl Aabb2D<f64> {
    /// Creates a box from an origin and a size.
    pub fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(x, y, x + w, y + h)
    }

    /// The square box enclosing a circle.
    pub fn around_circle(cx: f64, cy: f64, radius: f64) -> Self {
        Self::new(cx - radius, cy - radius, cx + radius, cy + radius)
    }
}

#[cfg(test)]
mod tests {
    use super::Aabb2D;

    #[test]
    fn touching_boxes_intersect() {
        let a = Aabb2D::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb2D::new(10.0, 10.0, 20.0, 20.0);
        assert!(a.intersects(&b));
        let c = Aabb2D::new(10.5, 0.0, 20.0, 10.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn empty_boxes_never_intersect() {
        let empty = Aabb2D::new(5, 5, 4, 4);
        assert!(empty.is_empty());
        assert!(!empty.intersects(&Aabb2D::new(0, 0, 10, 10)));
    }

    #[test]
    fn circle_box() {
        let b = Aabb2D::around_circle(10.0, 20.0, 8.0);
        assert_eq!(b, Aabb2D::new(2.0, 12.0, 18.0, 28.0));
        assert!(b.contains_point(18.0, 28.0));
    }
}
