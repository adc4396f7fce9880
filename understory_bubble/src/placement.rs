// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping a bubble inside its surface.
//!
//! Each axis is decided independently and from scratch on every call. There
//! is no hysteresis: a pointer sweeping across the threshold flips the bubble
//! back and forth, and the bubble is always inside the bounds when it fits at
//! all.

use kurbo::{Point, Rect, Size};

use crate::types::{BubbleConfig, Orientation, SurfaceBounds, TipGeometry};

/// Chooses the orientation that keeps a bubble inside a [`SurfaceBounds`].
#[derive(Clone, Copy, Debug, Default)]
pub struct OrientationPolicy;

impl OrientationPolicy {
    /// Decide the flips for a bubble body of `bubble` anchored at `anchor`.
    ///
    /// - [`Orientation::TIP_ON_RIGHT`] (horizontal flip) when
    ///   `anchor.x + bubble.width > chart_width`.
    /// - [`Orientation::POINT_DOWN`] (vertical flip) when
    ///   `anchor.y + bubble.height + tip_height > chart_height`.
    ///
    /// ```rust
    /// use kurbo::{Point, Size};
    /// use understory_bubble::{Orientation, OrientationPolicy, SurfaceBounds};
    ///
    /// let o = OrientationPolicy::decide(
    ///     Point::new(90.0, 10.0),
    ///     Size::new(50.0, 30.0),
    ///     SurfaceBounds::new(120.0, 100.0),
    ///     10.0,
    /// );
    /// assert!(o.tip_on_right());
    /// assert!(!o.point_down());
    /// ```
    pub fn decide(
        anchor: Point,
        bubble: Size,
        bounds: SurfaceBounds,
        tip_height: f64,
    ) -> Orientation {
        let invert_horiz = anchor.x + bubble.width > bounds.chart_width;
        let invert_vert = anchor.y + bubble.height + tip_height > bounds.chart_height;
        Orientation::from_flips(invert_horiz, invert_vert)
    }
}

/// Where a bubble body goes for a given anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Orientation chosen by [`OrientationPolicy::decide`].
    pub orientation: Orientation,
    /// Top-left corner of the body in surface coordinates. Outlines from
    /// [`crate::BubbleOutline`] are translated by this.
    pub origin: Point,
}

impl Placement {
    /// Place a body of `size` so that its tip apex lands on `anchor`.
    pub fn resolve(anchor: Point, size: Size, bounds: SurfaceBounds, tip: &TipGeometry) -> Self {
        let orientation = OrientationPolicy::decide(anchor, size, bounds, tip.height);
        let x = if orientation.tip_on_right() {
            anchor.x - size.width + tip.tip_offset
        } else {
            anchor.x - tip.tip_offset
        };
        let y = if orientation.point_down() {
            anchor.y - size.height - tip.height
        } else {
            anchor.y + tip.height
        };
        Self {
            orientation,
            origin: Point::new(x, y),
        }
    }

    /// Outline configuration for this placement.
    pub fn bubble_config(&self, size: Size, tip: &TipGeometry) -> BubbleConfig {
        BubbleConfig::from_tip(size, tip, self.orientation)
    }

    /// The body (without tip) in surface coordinates.
    pub fn body_rect(&self, size: Size) -> Rect {
        Rect::from_origin_size(self.origin, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: SurfaceBounds = SurfaceBounds::new(120.0, 100.0);

    #[test]
    fn flips_right_edge_only() {
        let o = OrientationPolicy::decide(
            Point::new(90.0, 10.0),
            Size::new(50.0, 30.0),
            BOUNDS,
            10.0,
        );
        assert_eq!(o, Orientation::TIP_ON_RIGHT);
    }

    #[test]
    fn decide_is_idempotent() {
        let anchor = Point::new(100.0, 80.0);
        let size = Size::new(50.0, 30.0);
        let a = OrientationPolicy::decide(anchor, size, BOUNDS, 10.0);
        let b = OrientationPolicy::decide(anchor, size, BOUNDS, 10.0);
        assert_eq!(a, b);
        assert_eq!(a, Orientation::all());
    }

    #[test]
    fn thresholds_are_strict() {
        let size = Size::new(50.0, 30.0);
        // Exactly touching the edge does not flip.
        let o = OrientationPolicy::decide(Point::new(70.0, 60.0), size, BOUNDS, 10.0);
        assert_eq!(o, Orientation::empty());
        let o = OrientationPolicy::decide(Point::new(70.5, 60.5), size, BOUNDS, 10.0);
        assert_eq!(o, Orientation::all());
    }

    #[test]
    fn axes_are_independent() {
        let size = Size::new(50.0, 30.0);
        let o = OrientationPolicy::decide(Point::new(10.0, 90.0), size, BOUNDS, 10.0);
        assert_eq!(o, Orientation::POINT_DOWN);
    }

    #[test]
    fn apex_lands_on_anchor() {
        let tip = TipGeometry::default();
        let size = Size::new(50.0, 30.0);
        for anchor in [
            Point::new(10.0, 10.0),
            Point::new(110.0, 10.0),
            Point::new(10.0, 95.0),
            Point::new(110.0, 95.0),
        ] {
            let placement = Placement::resolve(anchor, size, BOUNDS, &tip);
            let apex = placement.bubble_config(size, &tip).tip_apex();
            assert_eq!(apex + placement.origin.to_vec2(), anchor);
        }
    }

    #[test]
    fn body_rect_moves_with_origin() {
        let tip = TipGeometry::default();
        let size = Size::new(50.0, 30.0);
        let placement = Placement::resolve(Point::new(90.0, 10.0), size, BOUNDS, &tip);
        assert_eq!(placement.origin, Point::new(77.5, 20.0));
        assert_eq!(placement.body_rect(size), Rect::new(77.5, 20.0, 127.5, 50.0));
    }
}
