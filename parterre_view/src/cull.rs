// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::viewport::{MapFit, ScrollViewport};

/// Map units added on every side of the visible rectangle.
pub const DEFAULT_PADDING: f64 = 100.0;

/// Radius of a rendered seat, in map units.
pub const DEFAULT_SEAT_RADIUS: f64 = 8.0;

/// Item count at which culling starts; smaller maps render everything.
pub const DEFAULT_CULL_THRESHOLD: usize = 1000;

/// Anything with a center in map coordinates.
pub trait MapItem {
    /// Center in map coordinates.
    fn map_position(&self) -> Point;
}

impl MapItem for Point {
    fn map_position(&self) -> Point {
        *self
    }
}

impl<T: MapItem + ?Sized> MapItem for &T {
    fn map_position(&self) -> Point {
        (**self).map_position()
    }
}

/// Tuning for [`visible_indices`] and friends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CullParams {
    /// Padding around the visible rectangle, in map units.
    pub padding: f64,
    /// Radius of each item's circle, in map units.
    pub item_radius: f64,
    /// Minimum item count before culling applies.
    pub threshold: usize,
}

impl Default for CullParams {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            item_radius: DEFAULT_SEAT_RADIUS,
            threshold: DEFAULT_CULL_THRESHOLD,
        }
    }
}

impl CullParams {
    /// The padded map-space rectangle items are tested against.
    ///
    /// Returns `None` when `fit` is degenerate.
    #[must_use]
    pub fn culling_rect(&self, viewport: &ScrollViewport, fit: &MapFit) -> Option<Rect> {
        fit.visible_map_rect(viewport)
            .map(|r| r.inflate(self.padding, self.padding))
    }

    /// Returns `true` if a set of `len` items is large enough to cull.
    #[must_use]
    pub fn applies_to(&self, len: usize) -> bool {
        len >= self.threshold
    }
}

/// Returns `true` if the circle at `center` with `radius` touches `rect`.
///
/// The closest point of the rectangle is found by clamping each axis
/// independently; the circle intersects iff that point is within `radius`.
#[must_use]
pub fn circle_intersects_rect(center: Point, radius: f64, rect: Rect) -> bool {
    // max/min rather than `clamp`, which panics on inverted bounds.
    let closest_x = rect.x0.max(center.x.min(rect.x1));
    let closest_y = rect.y0.max(center.y.min(rect.y1));
    let dx = center.x - closest_x;
    let dy = center.y - closest_y;
    dx * dx + dy * dy <= radius * radius
}

/// Indices of the items that should be rendered, in input order.
///
/// - Fewer than `params.threshold` items: every index.
/// - Degenerate fit (empty map or container): every index.
/// - Otherwise: items whose circle intersects the padded viewport rectangle.
///
/// This is a pure function of its inputs.
#[must_use]
pub fn visible_indices<T: MapItem>(
    items: &[T],
    viewport: &ScrollViewport,
    fit: &MapFit,
    params: &CullParams,
) -> Vec<usize> {
    match cull_rect_for(items.len(), viewport, fit, params) {
        None => (0..items.len()).collect(),
        Some(rect) => items
            .iter()
            .enumerate()
            .filter(|(_, item)| circle_intersects_rect(item.map_position(), params.item_radius, rect))
            .map(|(i, _)| i)
            .collect(),
    }
}

/// The items that should be rendered, as a subsequence of `items`.
///
/// See [`visible_indices`] for the policy.
#[must_use]
pub fn visible_items<'a, T: MapItem>(
    items: &'a [T],
    viewport: &ScrollViewport,
    fit: &MapFit,
    params: &CullParams,
) -> Vec<&'a T> {
    match cull_rect_for(items.len(), viewport, fit, params) {
        None => items.iter().collect(),
        Some(rect) => items
            .iter()
            .filter(|item| circle_intersects_rect(item.map_position(), params.item_radius, rect))
            .collect(),
    }
}

/// `None` means "do not cull".
pub(crate) fn cull_rect_for(
    len: usize,
    viewport: &ScrollViewport,
    fit: &MapFit,
    params: &CullParams,
) -> Option<Rect> {
    if !params.applies_to(len) {
        return None;
    }
    params.culling_rect(viewport, fit)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Rect, Size};

    use super::*;

    fn grid(n: usize, step: f64) -> Vec<Point> {
        let mut out = Vec::with_capacity(n * n);
        for y in 0..n {
            for x in 0..n {
                out.push(Point::new(x as f64 * step, y as f64 * step));
            }
        }
        out
    }

    #[test]
    fn circle_touching_edge_counts() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(circle_intersects_rect(Point::new(108.0, 50.0), 8.0, r));
        assert!(!circle_intersects_rect(Point::new(108.1, 50.0), 8.0, r));
        // Corner: distance sqrt(5^2 + 5^2) ~ 7.07 <= 8.
        assert!(circle_intersects_rect(Point::new(105.0, 105.0), 8.0, r));
        assert!(!circle_intersects_rect(Point::new(106.0, 106.0), 8.0, r));
        assert!(circle_intersects_rect(Point::new(50.0, 50.0), 8.0, r));
    }

    #[test]
    fn below_threshold_returns_everything() {
        let items = grid(10, 500.0);
        let fit = MapFit::new(Size::new(5000.0, 5000.0), Size::new(500.0, 500.0));
        let vp = ScrollViewport::new(0.0, 0.0, 10.0, 10.0);
        let out = visible_indices(&items, &vp, &fit, &CullParams::default());
        assert_eq!(out, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn large_set_is_culled_to_padded_viewport() {
        // 40x40 = 1600 items, 50 units apart on a 2000x2000 map.
        let items = grid(40, 50.0);
        // Container matches the map: scale 1.
        let fit = MapFit::new(Size::new(2000.0, 2000.0), Size::new(2000.0, 2000.0));
        let vp = ScrollViewport::new(500.0, 500.0, 200.0, 200.0);
        let params = CullParams::default();
        let out = visible_items(&items, &vp, &fit, &params);

        // Padded rect is 400..=800 on both axes; radius 8 adds nothing new on a
        // 50-unit lattice, so columns 8..=16 survive on each axis.
        assert_eq!(out.len(), 9 * 9);
        for p in &out {
            assert!(p.x >= 400.0 && p.x <= 800.0);
            assert!(p.y >= 400.0 && p.y <= 800.0);
        }
    }

    #[test]
    fn scale_shrinks_pixels_into_map_units() {
        let items = grid(40, 50.0);
        // 1000px container over a 2000 unit map: every pixel is two units.
        let fit = MapFit::new(Size::new(2000.0, 2000.0), Size::new(1000.0, 1000.0));
        let vp = ScrollViewport::new(250.0, 250.0, 100.0, 100.0);
        let params = CullParams {
            padding: 0.0,
            ..CullParams::default()
        };
        let out = visible_items(&items, &vp, &fit, &params);
        // Map rect 500..=700 with radius 8: lattice points 500..=700.
        assert_eq!(out.len(), 5 * 5);
        assert_eq!(*out[0], Point::new(500.0, 500.0));
    }

    #[test]
    fn degenerate_fit_keeps_everything() {
        let items = grid(40, 50.0);
        let fit = MapFit::new(Size::new(2000.0, 2000.0), Size::ZERO);
        let vp = ScrollViewport::default();
        let out = visible_indices(&items, &vp, &fit, &CullParams::default());
        assert_eq!(out.len(), items.len());
    }

    #[test]
    fn repeated_calls_agree() {
        let items = grid(40, 50.0);
        let fit = MapFit::new(Size::new(2000.0, 2000.0), Size::new(800.0, 600.0));
        let vp = ScrollViewport::new(120.0, 80.0, 300.0, 200.0);
        let params = CullParams::default();
        let a = visible_indices(&items, &vp, &fit, &params);
        let b = visible_indices(&items, &vp, &fit, &params);
        assert_eq!(a, b);
    }
}
