// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};

/// The scrolled region of a seat-map container, in container pixels.
///
/// `x`/`y` are the scroll offsets and `width`/`height` the visible client
/// size. This space is distinct from map coordinates; [`MapFit`] relates the
/// two.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollViewport {
    /// Horizontal scroll offset.
    pub x: f64,
    /// Vertical scroll offset.
    pub y: f64,
    /// Visible width.
    pub width: f64,
    /// Visible height.
    pub height: f64,
}

impl ScrollViewport {
    /// Creates a viewport from scroll offsets and visible size.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The viewport as a rectangle in container pixels.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Visible size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Aspect-preserving fit of a map canvas into a container.
///
/// The scale is `min(container.width / map.width, container.height / map.height)`:
/// the whole map fits and map units stay square. Container pixels convert to
/// map units by dividing by that scale.
#[derive(Clone, Copy, Debug)]
pub struct MapFit {
    map: Size,
    container: Size,
    scale: f64,
}

impl MapFit {
    /// Fits `map` into `container`.
    #[must_use]
    pub fn new(map: Size, container: Size) -> Self {
        let sx = container.width / map.width;
        let sy = container.height / map.height;
        Self {
            map,
            container,
            scale: sx.min(sy),
        }
    }

    /// Map canvas size.
    #[must_use]
    pub fn map_size(&self) -> Size {
        self.map
    }

    /// Container size.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// The container-pixels-per-map-unit scale.
    ///
    /// Returns `None` when either size is empty or non-finite, in which case
    /// no meaningful conversion exists.
    #[must_use]
    pub fn scale(&self) -> Option<f64> {
        (self.scale.is_finite() && self.scale > 0.0).then_some(self.scale)
    }

    /// Map-to-container transform for renderers; identity when degenerate.
    #[must_use]
    pub fn map_to_view(&self) -> Affine {
        self.scale().map_or(Affine::IDENTITY, Affine::scale)
    }

    /// Converts a map-space point into container pixels.
    #[must_use]
    pub fn map_to_view_point(&self, pt: Point) -> Point {
        self.map_to_view() * pt
    }

    /// Converts a container-pixel point into map coordinates.
    ///
    /// Returns the point unchanged when the fit is degenerate.
    #[must_use]
    pub fn view_to_map_point(&self, pt: Point) -> Point {
        match self.scale() {
            Some(s) => Point::new(pt.x / s, pt.y / s),
            None => pt,
        }
    }

    /// Converts a container-pixel rectangle into map coordinates.
    ///
    /// The origin and the extents are each divided by the scale.
    #[must_use]
    pub fn view_to_map_rect(&self, rect: Rect) -> Rect {
        let Some(s) = self.scale() else {
            return rect;
        };
        Rect::from_origin_size(
            Point::new(rect.x0 / s, rect.y0 / s),
            Size::new(rect.width() / s, rect.height() / s),
        )
    }

    /// The map-space rectangle seen through `viewport`.
    ///
    /// Returns `None` when the fit is degenerate (see [`MapFit::scale`]).
    #[must_use]
    pub fn visible_map_rect(&self, viewport: &ScrollViewport) -> Option<Rect> {
        let s = self.scale()?;
        Some(Rect::from_origin_size(
            Point::new(viewport.x / s, viewport.y / s),
            Size::new(viewport.width / s, viewport.height / s),
        ))
    }

    /// Snapshot for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MapFitDebugInfo {
        MapFitDebugInfo {
            map: self.map,
            container: self.container,
            scale: self.scale(),
            map_units_per_pixel: self.scale().map(|s| 1.0 / s),
        }
    }
}

/// Debug snapshot of a [`MapFit`].
#[derive(Clone, Copy, Debug)]
pub struct MapFitDebugInfo {
    /// Map canvas size.
    pub map: Size,
    /// Container size.
    pub container: Size,
    /// Pixels per map unit, if the fit is usable.
    pub scale: Option<f64>,
    /// Map units per pixel, if the fit is usable.
    pub map_units_per_pixel: Option<f64>,
}
