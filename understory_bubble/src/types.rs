// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for bubble geometry: orientation flags, per-outline
//! configuration, tip geometry, and surface bounds.

use kurbo::{Point, Rect, Size};

bitflags::bitflags! {
    /// Which of the four bubble orientations is in effect.
    ///
    /// The empty set is the default orientation: tip on the top edge, near the
    /// left end of the bubble. Each flag is one independent flip, so the raw
    /// bits (`0..=3`) enumerate all four orientations.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Orientation: u8 {
        /// Tip sits near the right end of the bubble (horizontal flip).
        const TIP_ON_RIGHT = 0b0000_0001;
        /// Tip hangs from the bottom edge and points down (vertical flip).
        const POINT_DOWN   = 0b0000_0010;
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::empty()
    }
}

impl Orientation {
    /// Build an orientation from the two flip decisions.
    pub fn from_flips(invert_horiz: bool, invert_vert: bool) -> Self {
        let mut o = Self::empty();
        o.set(Self::TIP_ON_RIGHT, invert_horiz);
        o.set(Self::POINT_DOWN, invert_vert);
        o
    }

    /// Whether the bubble was flipped horizontally (tip on the right).
    pub const fn tip_on_right(self) -> bool {
        self.contains(Self::TIP_ON_RIGHT)
    }

    /// Whether the bubble was flipped vertically (tip pointing down).
    pub const fn point_down(self) -> bool {
        self.contains(Self::POINT_DOWN)
    }

    pub(crate) const fn index(self) -> usize {
        self.bits() as usize
    }
}

/// Geometry of the bubble's tip, as configured on a tooltip.
///
/// Offsets are measured from the end of the bubble the tip is nearest to (the
/// left end, or the right end when flipped).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TipGeometry {
    /// Horizontal offset of the tip apex. This is also how far the bubble body
    /// is shifted past the anchor so the apex lands on it.
    pub tip_offset: f64,
    /// How far the tip protrudes beyond the bubble edge.
    pub height: f64,
    /// Offset of the far end of the tip base; the base spans
    /// `edge_offset / 2 ..= edge_offset`.
    pub edge_offset: f64,
}

impl Default for TipGeometry {
    fn default() -> Self {
        Self {
            tip_offset: 37.5,
            height: 10.0,
            edge_offset: 50.0,
        }
    }
}

/// Everything needed to trace one bubble outline.
///
/// Built fresh for every reposition and never mutated afterwards.
///
/// `tip_offset` must not exceed `poly_width` so the tip base stays on the
/// body's edge. `tip_point_offset` is unconstrained; values past the edge
/// produce a skewed tip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleConfig {
    /// Width of the body, excluding the tip.
    pub poly_width: f64,
    /// Height of the body, excluding the tip.
    pub poly_height: f64,
    /// Offset of the far end of the tip base along the edge.
    pub tip_offset: f64,
    /// Offset of the tip apex along the edge.
    pub tip_point_offset: f64,
    /// Protrusion of the tip beyond the edge.
    pub tip_height: f64,
    /// Tip on the bottom edge, pointing down.
    pub point_down: bool,
    /// Tip measured from the right end of the bubble.
    pub tip_on_right: bool,
}

impl BubbleConfig {
    /// Configuration for a body of `size` with the given tip and orientation.
    ///
    /// The tip base is clamped to the body width, so a bubble narrower than
    /// `tip.edge_offset` gets a base spanning `width / 2 ..= width`. The apex
    /// offset is kept as given.
    pub fn from_tip(size: Size, tip: &TipGeometry, orientation: Orientation) -> Self {
        Self {
            poly_width: size.width,
            poly_height: size.height,
            tip_offset: tip.edge_offset.min(size.width.max(0.0)),
            tip_point_offset: tip.tip_offset,
            tip_height: tip.height,
            point_down: orientation.point_down(),
            tip_on_right: orientation.tip_on_right(),
        }
    }

    /// The orientation selected by `point_down` and `tip_on_right`.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_flips(self.tip_on_right, self.point_down)
    }

    /// Size of the body, excluding the tip.
    pub fn size(&self) -> Size {
        Size::new(self.poly_width, self.poly_height)
    }

    /// Apex of the tip in bubble-local coordinates.
    pub fn tip_apex(&self) -> Point {
        let x = if self.tip_on_right {
            self.poly_width - self.tip_point_offset
        } else {
            self.tip_point_offset
        };
        let y = if self.point_down {
            self.poly_height + self.tip_height
        } else {
            -self.tip_height
        };
        Point::new(x, y)
    }
}

/// The fixed rectangle a bubble must stay within, with its origin at the top
/// left of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceBounds {
    /// Width of the surface.
    pub chart_width: f64,
    /// Height of the surface.
    pub chart_height: f64,
}

impl SurfaceBounds {
    /// Bounds of a `chart_width` × `chart_height` surface.
    pub const fn new(chart_width: f64, chart_height: f64) -> Self {
        Self {
            chart_width,
            chart_height,
        }
    }

    /// The bounds as a rectangle anchored at the origin.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.chart_width, self.chart_height)
    }
}
