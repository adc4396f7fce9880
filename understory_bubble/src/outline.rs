// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bubble outlines: the body rectangle with a triangular notch for the tip.
//!
//! Both variants trace the body the same way, starting on the left edge, going
//! down, along the bottom, up the right edge and back along the top. The tip is
//! a three-point notch spliced into the top or bottom edge. Which edge and
//! which three points is looked up in a table keyed by [`Orientation`], so each
//! orientation is a single table entry and both variants share it.

#[cfg(feature = "std")]
use alloc::{format, string::String, vec::Vec};

use kurbo::{BezPath, Point, Rect, Shape, Size};
use smallvec::SmallVec;

use crate::types::{BubbleConfig, Orientation};

/// Upper bound on the corner radius of a rounded bubble.
pub const MAX_CORNER_RADIUS: f64 = 10.0;

/// Corner radius used for a rounded bubble body of `size`.
///
/// One fifth of the smaller side, capped at [`MAX_CORNER_RADIUS`], so small
/// bubbles are not over-rounded. Degenerate (zero-sized) bodies get a radius
/// of zero. Outlines further shrink it when the tip base sits closer to an end
/// of the edge than this radius.
pub fn corner_radius(size: Size) -> f64 {
    let smaller = size.width.min(size.height);
    (smaller / 5.0).clamp(0.0, MAX_CORNER_RADIUS)
}

/// Which bubble edge carries the tip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    /// Traced right to left.
    Top,
    /// Traced left to right.
    Bottom,
}

/// One orientation: the edge with the tip, and the notch in tracing order.
struct Branch {
    edge: Edge,
    notch: fn(&BubbleConfig) -> [Point; 3],
}

/// Indexed by [`Orientation::bits`].
const BRANCHES: [Branch; 4] = [
    // Tip up, on the left.
    Branch {
        edge: Edge::Top,
        notch: |c| {
            [
                Point::new(c.tip_offset, 0.0),
                Point::new(c.tip_point_offset, -c.tip_height),
                Point::new(c.tip_offset / 2.0, 0.0),
            ]
        },
    },
    // Tip up, on the right.
    Branch {
        edge: Edge::Top,
        notch: |c| {
            let w = c.poly_width;
            [
                Point::new(w - c.tip_offset / 2.0, 0.0),
                Point::new(w - c.tip_point_offset, -c.tip_height),
                Point::new(w - c.tip_offset, 0.0),
            ]
        },
    },
    // Tip down, on the left.
    Branch {
        edge: Edge::Bottom,
        notch: |c| {
            let h = c.poly_height;
            [
                Point::new(c.tip_offset / 2.0, h),
                Point::new(c.tip_point_offset, h + c.tip_height),
                Point::new(c.tip_offset, h),
            ]
        },
    },
    // Tip down, on the right.
    Branch {
        edge: Edge::Bottom,
        notch: |c| {
            let (w, h) = (c.poly_width, c.poly_height);
            [
                Point::new(w - c.tip_offset, h),
                Point::new(w - c.tip_point_offset, h + c.tip_height),
                Point::new(w - c.tip_offset / 2.0, h),
            ]
        },
    },
];

fn branch(orientation: Orientation) -> &'static Branch {
    &BRANCHES[orientation.index()]
}

/// The two bubble shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BubbleOutline {
    /// Body corners are quadratic arcs of radius [`corner_radius`], shrunk
    /// when the tip base sits closer to a corner.
    #[default]
    Rounded,
    /// Body corners are right angles; the outline is a polygon.
    Square,
}

impl BubbleOutline {
    /// Select a variant from a `rounded` switch.
    pub const fn from_rounded(rounded: bool) -> Self {
        if rounded { Self::Rounded } else { Self::Square }
    }

    /// Trace the outline for `config` in bubble-local coordinates.
    ///
    /// The body occupies `(0, 0)..(poly_width, poly_height)`; the tip sticks
    /// out above `y = 0` or below `y = poly_height`.
    pub fn outline(self, config: &BubbleConfig) -> Outline {
        match self {
            Self::Rounded => Outline::Path(rounded_path(config)),
            Self::Square => Outline::Polygon(square_points(config)),
        }
    }
}

/// Corner radius for `config`, shrunk so no corner arc reaches into the tip
/// base. The notch spans `tip_offset / 2 ..= tip_offset` from one end of the
/// edge, so both gaps to the ends must fit a radius.
fn notch_radius(config: &BubbleConfig) -> f64 {
    corner_radius(config.size())
        .min(config.tip_offset / 2.0)
        .min(config.poly_width - config.tip_offset)
        .max(0.0)
}

fn rounded_path(config: &BubbleConfig) -> BezPath {
    let (w, h) = (config.poly_width, config.poly_height);
    let r = notch_radius(config);
    let branch = branch(config.orientation());
    let notch = (branch.notch)(config);

    let mut path = BezPath::new();
    path.move_to((0.0, r));
    path.line_to((0.0, h - r));
    path.quad_to((0.0, h), (r, h));
    if branch.edge == Edge::Bottom {
        for p in notch {
            path.line_to(p);
        }
    }
    path.line_to((w - r, h));
    path.quad_to((w, h), (w, h - r));
    path.line_to((w, r));
    path.quad_to((w, 0.0), (w - r, 0.0));
    if branch.edge == Edge::Top {
        for p in notch {
            path.line_to(p);
        }
    }
    path.line_to((r, 0.0));
    path.quad_to((0.0, 0.0), (0.0, r));
    path.close_path();
    path
}

fn square_points(config: &BubbleConfig) -> SmallVec<[Point; 7]> {
    let (w, h) = (config.poly_width, config.poly_height);
    let branch = branch(config.orientation());
    let notch = (branch.notch)(config);

    let mut points = SmallVec::new();
    points.push(Point::ZERO);
    points.push(Point::new(0.0, h));
    if branch.edge == Edge::Bottom {
        points.extend(notch);
    }
    points.push(Point::new(w, h));
    points.push(Point::new(w, 0.0));
    if branch.edge == Edge::Top {
        points.extend(notch);
    }
    points
}

/// A traced bubble boundary in bubble-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    /// Rounded bubble. The last segment ends on the starting point and the
    /// path is closed.
    Path(BezPath),
    /// Square bubble as polygon vertices; the closing edge is implicit.
    Polygon(SmallVec<[Point; 7]>),
}

impl Outline {
    /// The outline as a closed path whose final segment returns to its start.
    pub fn to_path(&self) -> BezPath {
        match self {
            Self::Path(path) => path.clone(),
            Self::Polygon(points) => {
                let mut path = BezPath::new();
                let Some((&first, rest)) = points.split_first() else {
                    return path;
                };
                path.move_to(first);
                for &p in rest {
                    path.line_to(p);
                }
                path.line_to(first);
                path.close_path();
                path
            }
        }
    }

    /// Smallest rectangle containing the body and the tip.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Path(path) => path.bounding_box(),
            Self::Polygon(points) => {
                let mut it = points.iter().copied();
                let Some(first) = it.next() else {
                    return Rect::ZERO;
                };
                it.fold(Rect::from_points(first, first), |r, p| r.union_pt(p))
            }
        }
    }

    /// The attribute value an SVG renderer needs: path data (`d`) for
    /// [`Outline::Path`], or a `points` list for [`Outline::Polygon`].
    #[cfg(feature = "std")]
    pub fn svg_data(&self) -> String {
        match self {
            Self::Path(path) => path.to_svg(),
            Self::Polygon(points) => points
                .iter()
                .map(|p| format!("{},{}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}
