// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing-surface collaborator.
//!
//! A [`Surface`] is whatever owns the scene graph a tooltip draws into: an SVG
//! DOM, a retained vector scene, or [`crate::MemoryScene`]. The tooltip only
//! issues the handful of mutations below; it never reads back attributes.

use alloc::string::String;

use kurbo::{Affine, Point, Rect};
use understory_bubble::Outline;

/// Paint attributes of a bubble outline.
#[derive(Clone, Debug, PartialEq)]
pub struct OutlineStyle {
    /// Fill colour, in whatever notation the surface understands.
    pub fill: String,
    /// Opacity of the whole outline, `0.0..=1.0`.
    pub opacity: f64,
    /// Stroke colour.
    pub stroke: String,
    /// Stroke width in surface units.
    pub stroke_width: f64,
}

/// Scene-graph operations a tooltip needs.
///
/// All geometry is in the surface's local coordinate space unless a method
/// says otherwise.
pub trait Surface {
    /// Handle to a node in the scene graph.
    type Node: Copy + Eq + core::fmt::Debug;

    /// Find or create the group that holds tooltip visuals.
    ///
    /// Repeated calls return the same node.
    fn tooltip_group(&mut self) -> Self::Node;

    /// Append a rich-content container of `width` × `height` to `group` and
    /// fill it with `markup`.
    ///
    /// The markup is expected to have a single wrapping element; that element
    /// is what [`Surface::content_screen_rect`] reports on.
    fn append_content(
        &mut self,
        group: Self::Node,
        width: f64,
        height: f64,
        markup: &str,
    ) -> Self::Node;

    /// Screen-space bounding box of the wrapping element inside `content`,
    /// after layout.
    ///
    /// Returns `None` when there is no such element.
    fn content_screen_rect(&self, content: Self::Node) -> Option<Rect>;

    /// Move and resize a content container.
    fn set_content_frame(&mut self, content: Self::Node, frame: Rect);

    /// Insert an outline into `group`, painted beneath any content already in
    /// it, translated by `origin`.
    fn insert_outline(
        &mut self,
        group: Self::Node,
        outline: &Outline,
        style: &OutlineStyle,
        origin: Point,
    ) -> Self::Node;

    /// Replace the geometry and translation of an existing outline.
    fn update_outline(&mut self, node: Self::Node, outline: &Outline, origin: Point);

    /// Remove a node and everything below it.
    fn remove(&mut self, node: Self::Node);

    /// Current pointer position in local coordinates.
    fn pointer_position(&self) -> Point;

    /// Local-to-screen transform, if the platform can provide one.
    fn screen_transform(&self) -> Option<Affine>;
}
