// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`Surface`] for headless hosts and tests.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Affine, Point, Rect, Size};
use understory_bubble::Outline;

use crate::surface::{OutlineStyle, Surface};

/// Identifier of a node in a [`MemoryScene`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SceneId(u32);

/// A node stored by [`MemoryScene`].
#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    /// The tooltip group.
    Group,
    /// A rich-content container.
    Content {
        /// Owning group.
        parent: SceneId,
        /// Markup it was filled with.
        markup: String,
        /// Position and size in local coordinates.
        frame: Rect,
    },
    /// A bubble outline.
    Outline {
        /// Owning group.
        parent: SceneId,
        /// Geometry in bubble-local coordinates.
        outline: Outline,
        /// Paint.
        style: OutlineStyle,
        /// Translation applied to `outline`.
        origin: Point,
    },
}

/// A scene graph kept in a hash map, with simulated layout.
///
/// Layout is driven by two knobs:
/// - [`MemoryScene::set_screen_transform`]: the local-to-screen transform.
/// - [`MemoryScene::set_content_screen_size`]: the screen size every content
///   container's wrapping element reports, or `None` for content without a
///   wrapping element.
#[derive(Clone, Debug)]
pub struct MemoryScene {
    nodes: HashMap<SceneId, SceneNode>,
    next_id: u32,
    group: Option<SceneId>,
    pointer: Point,
    screen_transform: Option<Affine>,
    content_screen_size: Option<Size>,
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryScene {
    /// An empty scene with an identity screen transform and content that
    /// reports a zero size.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            next_id: 0,
            group: None,
            pointer: Point::ZERO,
            screen_transform: Some(Affine::IDENTITY),
            content_screen_size: Some(Size::ZERO),
        }
    }

    /// Move the pointer (local coordinates).
    pub fn set_pointer(&mut self, pointer: impl Into<Point>) {
        self.pointer = pointer.into();
    }

    /// Set the local-to-screen transform, or `None` for a platform without one.
    pub fn set_screen_transform(&mut self, transform: Option<Affine>) {
        self.screen_transform = transform;
    }

    /// Set the screen size content reports once laid out.
    pub fn set_content_screen_size(&mut self, size: Option<Size>) {
        self.content_screen_size = size;
    }

    /// Number of live nodes, including the group.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node.
    pub fn get(&self, id: SceneId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    /// All live nodes, in creation order.
    pub fn nodes(&self) -> Vec<(SceneId, &SceneNode)> {
        let mut nodes: Vec<_> = self.nodes.iter().map(|(id, n)| (*id, n)).collect();
        nodes.sort_unstable_by_key(|(id, _)| *id);
        nodes
    }

    /// Live outline nodes, in creation order.
    pub fn outlines(&self) -> Vec<(SceneId, &SceneNode)> {
        self.filtered(|n| matches!(n, SceneNode::Outline { .. }))
    }

    /// Live content nodes, in creation order.
    pub fn contents(&self) -> Vec<(SceneId, &SceneNode)> {
        self.filtered(|n| matches!(n, SceneNode::Content { .. }))
    }

    fn filtered(&self, keep: impl Fn(&SceneNode) -> bool) -> Vec<(SceneId, &SceneNode)> {
        let mut nodes = self.nodes();
        nodes.retain(|&(_, n)| keep(n));
        nodes
    }

    fn push(&mut self, node: SceneNode) -> SceneId {
        let id = SceneId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }
}

impl Surface for MemoryScene {
    type Node = SceneId;

    fn tooltip_group(&mut self) -> SceneId {
        if let Some(group) = self.group {
            return group;
        }
        let group = self.push(SceneNode::Group);
        self.group = Some(group);
        group
    }

    fn append_content(&mut self, group: SceneId, width: f64, height: f64, markup: &str) -> SceneId {
        self.push(SceneNode::Content {
            parent: group,
            markup: String::from(markup),
            frame: Rect::new(0.0, 0.0, width, height),
        })
    }

    fn content_screen_rect(&self, content: SceneId) -> Option<Rect> {
        let Some(SceneNode::Content { frame, .. }) = self.nodes.get(&content) else {
            return None;
        };
        let size = self.content_screen_size?;
        let origin = self.screen_transform.unwrap_or(Affine::IDENTITY) * frame.origin();
        Some(Rect::from_origin_size(origin, size))
    }

    fn set_content_frame(&mut self, content: SceneId, new_frame: Rect) {
        if let Some(SceneNode::Content { frame, .. }) = self.nodes.get_mut(&content) {
            *frame = new_frame;
        }
    }

    fn insert_outline(
        &mut self,
        group: SceneId,
        outline: &Outline,
        style: &OutlineStyle,
        origin: Point,
    ) -> SceneId {
        self.push(SceneNode::Outline {
            parent: group,
            outline: outline.clone(),
            style: style.clone(),
            origin,
        })
    }

    fn update_outline(&mut self, node: SceneId, new_outline: &Outline, new_origin: Point) {
        if let Some(SceneNode::Outline {
            outline, origin, ..
        }) = self.nodes.get_mut(&node)
        {
            *outline = new_outline.clone();
            *origin = new_origin;
        }
    }

    fn remove(&mut self, node: SceneId) {
        if self.nodes.remove(&node).is_none() {
            return;
        }
        if self.group == Some(node) {
            self.group = None;
            self.nodes.retain(|_, n| match n {
                SceneNode::Content { parent, .. } | SceneNode::Outline { parent, .. } => {
                    *parent != node
                }
                SceneNode::Group => true,
            });
        }
    }

    fn pointer_position(&self) -> Point {
        self.pointer
    }

    fn screen_transform(&self) -> Option<Affine> {
        self.screen_transform
    }
}
