// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip controller: pointer events in, scene-graph mutations out.
//!
//! ## States
//!
//! - [`Phase::Hidden`]: nothing drawn, cached size is zero.
//! - [`Phase::Measuring`]: content attached with a placeholder height while
//!   its real size is resolved. Only observable from inside
//!   [`Tooltip::on_pointer_enter`].
//! - [`Phase::Shown`]: outline and content positioned.
//!
//! Enter moves Hidden → Measuring → Shown. Move repositions while Shown and
//! keeps the cached size. Leave removes the visuals and returns to Hidden.
//! Moves and leaves that arrive while Hidden are ignored, and so is any event
//! whose datum has no content.

use alloc::boxed::Box;
use alloc::string::String;

use kurbo::{Point, Size};
use log::{debug, trace, warn};
use understory_bubble::{BubbleOutline, Orientation, Outline, Placement};

use crate::config::TooltipConfig;
use crate::measure::BoundsMeasurer;
use crate::surface::{OutlineStyle, Surface};
use crate::zoom::{FixedZoomProbe, ZoomCorrection, ZoomProbe};

/// Height given to freshly attached content before it is measured.
///
/// Some engines lay out nothing inside a zero-height container.
pub const PLACEHOLDER_HEIGHT: f64 = 1.0;

/// Lifecycle of a [`Tooltip`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No visuals.
    #[default]
    Hidden,
    /// Content attached, size not yet known.
    Measuring,
    /// Bubble and content positioned.
    Shown,
}

/// Pointer events a tooltip reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    /// The pointer entered an element carrying a datum.
    Enter,
    /// The pointer moved within that element.
    Move,
    /// The pointer left the element.
    Leave,
}

#[derive(Clone, Copy, Debug)]
struct Visuals<N> {
    content: N,
    outline: N,
}

/// A tooltip bound to one kind of surface and datum.
///
/// The controller owns its cached size and the handles of the nodes it
/// created. The surface is passed into every event handler.
///
/// ```rust
/// use kurbo::Size;
/// use understory_tooltip::{
///     FixedZoomProbe, MemoryScene, Phase, Tooltip, TooltipConfig, ZoomCorrection,
/// };
///
/// let zoom = ZoomCorrection::new(FixedZoomProbe::IDENTITY);
/// let mut tooltip = Tooltip::new(
///     TooltipConfig::new(400.0, 300.0),
///     &zoom,
///     |d: &u32| Some(format!("<div>value {d}</div>")),
///     |_, _| String::from("#000000"),
/// );
///
/// let mut scene = MemoryScene::new();
/// scene.set_content_screen_size(Some(Size::new(150.0, 42.0)));
/// scene.set_pointer((20.0, 20.0));
///
/// tooltip.on_pointer_enter(&mut scene, &7);
/// assert_eq!(tooltip.phase(), Phase::Shown);
/// assert_eq!(tooltip.calculated_size(), Size::new(150.0, 42.0));
///
/// tooltip.on_pointer_leave(&mut scene, &7);
/// assert_eq!(tooltip.phase(), Phase::Hidden);
/// assert!(scene.outlines().is_empty());
/// ```
pub struct Tooltip<'z, S: Surface, D: ?Sized, P = FixedZoomProbe> {
    config: TooltipConfig,
    variant: BubbleOutline,
    style: OutlineStyle,
    measurer: BoundsMeasurer<'z, P>,
    content: Box<dyn Fn(&D) -> Option<String> + 'z>,
    phase: Phase,
    size: Size,
    orientation: Orientation,
    visuals: Option<Visuals<S::Node>>,
}

impl<S: Surface, D: ?Sized, P> core::fmt::Debug for Tooltip<'_, S, D, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tooltip")
            .field("config", &self.config)
            .field("style", &self.style)
            .field("phase", &self.phase)
            .field("size", &self.size)
            .field("orientation", &self.orientation)
            .field("visuals", &self.visuals)
            .finish_non_exhaustive()
    }
}

impl<'z, S: Surface, D: ?Sized, P: ZoomProbe> Tooltip<'z, S, D, P> {
    /// Create a hidden tooltip.
    ///
    /// - `zoom`: the process-wide zoom correction.
    /// - `content`: markup for a datum, or `None` to show nothing for it.
    /// - `contrast`: picks a stroke colour for `(fill, opacity)`; only called
    ///   when [`TooltipConfig::bubble_stroke`] is `None`.
    pub fn new(
        config: TooltipConfig,
        zoom: &'z ZoomCorrection<P>,
        content: impl Fn(&D) -> Option<String> + 'z,
        contrast: impl FnOnce(&str, f64) -> String,
    ) -> Self {
        if config.tip.edge_offset > config.bubble_width {
            warn!(
                "tip base offset {} exceeds bubble width {}; clamping the base to the body",
                config.tip.edge_offset, config.bubble_width
            );
        }
        let style = config.outline_style(contrast);
        Self {
            variant: config.outline_variant(),
            style,
            config,
            measurer: BoundsMeasurer::new(zoom),
            content: Box::new(content),
            phase: Phase::Hidden,
            size: Size::ZERO,
            orientation: Orientation::empty(),
            visuals: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Cached bubble size; zero while hidden.
    pub fn calculated_size(&self) -> Size {
        self.size
    }

    /// Orientation of the bubble while shown.
    pub fn orientation(&self) -> Option<Orientation> {
        (self.phase == Phase::Shown).then_some(self.orientation)
    }

    /// The configuration this tooltip was built with.
    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Resolved outline paint.
    pub fn outline_style(&self) -> &OutlineStyle {
        &self.style
    }

    /// Route `event` to the matching handler.
    pub fn handle(&mut self, surface: &mut S, event: PointerEvent, datum: &D) {
        match event {
            PointerEvent::Enter => self.on_pointer_enter(surface, datum),
            PointerEvent::Move => self.on_pointer_move(surface, datum),
            PointerEvent::Leave => self.on_pointer_leave(surface, datum),
        }
    }

    /// Show the tooltip for `datum` at the pointer.
    pub fn on_pointer_enter(&mut self, surface: &mut S, datum: &D) {
        let Some(markup) = (self.content)(datum) else {
            trace!("no tooltip content for datum; staying hidden");
            return;
        };
        if self.visuals.is_some() {
            debug!("pointer enter while shown; replacing previous tooltip");
            self.teardown(surface);
        }

        let anchor = surface.pointer_position();
        let group = surface.tooltip_group();
        let content = surface.append_content(
            group,
            self.config.bubble_width,
            PLACEHOLDER_HEIGHT,
            &markup,
        );
        self.phase = Phase::Measuring;
        self.size = self.resolve_size(surface, content);

        let (placement, outline) = self.layout(anchor);
        let outline_node = surface.insert_outline(group, &outline, &self.style, placement.origin);
        surface.set_content_frame(content, placement.body_rect(self.size));

        self.visuals = Some(Visuals {
            content,
            outline: outline_node,
        });
        self.orientation = placement.orientation;
        self.phase = Phase::Shown;
        debug!(
            "tooltip shown at {:?} with size {:?}, orientation {:?}",
            placement.origin, self.size, placement.orientation
        );
    }

    /// Follow the pointer, flipping as needed. The size is not re-measured.
    pub fn on_pointer_move(&mut self, surface: &mut S, datum: &D) {
        if (self.content)(datum).is_none() {
            return;
        }
        let Some(visuals) = self.visuals else {
            trace!("pointer move while hidden; ignoring");
            return;
        };

        let anchor = surface.pointer_position();
        let (placement, outline) = self.layout(anchor);
        surface.update_outline(visuals.outline, &outline, placement.origin);
        surface.set_content_frame(visuals.content, placement.body_rect(self.size));
        if placement.orientation != self.orientation {
            trace!("tooltip orientation now {:?}", placement.orientation);
        }
        self.orientation = placement.orientation;
    }

    /// Remove the tooltip's visuals and forget the cached size.
    pub fn on_pointer_leave(&mut self, surface: &mut S, datum: &D) {
        if (self.content)(datum).is_none() {
            return;
        }
        if self.visuals.is_none() {
            trace!("pointer leave while hidden; ignoring");
            return;
        }
        self.teardown(surface);
        debug!("tooltip hidden");
    }

    fn resolve_size(&self, surface: &S, content: S::Node) -> Size {
        let width = self.config.bubble_width;
        if !self.config.is_auto_height() {
            return Size::new(width, self.config.bubble_height);
        }
        match self.measurer.measure(surface, content) {
            Ok(measured) => Size::new(width, measured.height),
            Err(err) => {
                warn!("{err}; falling back to the configured bubble size");
                self.config.fallback_size()
            }
        }
    }

    fn layout(&self, anchor: Point) -> (Placement, Outline) {
        let tip = &self.config.tip;
        let placement = Placement::resolve(anchor, self.size, self.config.surface_bounds(), tip);
        let outline = self
            .variant
            .outline(&placement.bubble_config(self.size, tip));
        (placement, outline)
    }

    fn teardown(&mut self, surface: &mut S) {
        if let Some(visuals) = self.visuals.take() {
            surface.remove(visuals.content);
            surface.remove(visuals.outline);
        }
        self.size = Size::ZERO;
        self.orientation = Orientation::empty();
        self.phase = Phase::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryScene, SceneNode};
    use alloc::format;
    use kurbo::{Affine, Rect};

    const UNIT: ZoomCorrection<FixedZoomProbe> = ZoomCorrection::new(FixedZoomProbe::IDENTITY);

    fn content(d: &u32) -> Option<String> {
        (*d != 0).then(|| format!("<div>value {d}</div>"))
    }

    fn tooltip<'z>(
        config: TooltipConfig,
        zoom: &'z ZoomCorrection<FixedZoomProbe>,
    ) -> Tooltip<'z, MemoryScene, u32> {
        Tooltip::new(config, zoom, content, |_, _| String::from("#000000"))
    }

    fn scene(height: f64) -> MemoryScene {
        let mut scene = MemoryScene::new();
        scene.set_content_screen_size(Some(Size::new(150.0, height)));
        scene
    }

    fn only_outline(scene: &MemoryScene) -> (Outline, Point) {
        let outlines = scene.outlines();
        assert_eq!(outlines.len(), 1);
        match outlines[0].1 {
            SceneNode::Outline {
                outline, origin, ..
            } => (outline.clone(), *origin),
            other => panic!("expected outline, got {other:?}"),
        }
    }

    fn only_content_frame(scene: &MemoryScene) -> Rect {
        let contents = scene.contents();
        assert_eq!(contents.len(), 1);
        match contents[0].1 {
            SceneNode::Content { frame, .. } => *frame,
            other => panic!("expected content, got {other:?}"),
        }
    }

    #[test]
    fn auto_height_uses_measured_content() {
        let mut tooltip = tooltip(TooltipConfig::new(400.0, 300.0), &UNIT);
        let mut scene = scene(42.0);
        scene.set_pointer((20.0, 20.0));
        tooltip.on_pointer_enter(&mut scene, &1);
        assert_eq!(tooltip.phase(), Phase::Shown);
        assert_eq!(tooltip.calculated_size(), Size::new(150.0, 42.0));
        assert_eq!(only_content_frame(&scene).height(), 42.0);
    }

    #[test]
    fn measurement_is_zoom_and_transform_corrected() {
        let zoom = ZoomCorrection::new(FixedZoomProbe {
            plain_height: 10.0,
            embedded_height: 30.0,
            device_pixel_ratio: 1.5,
        });
        let mut tooltip = tooltip(TooltipConfig::new(400.0, 300.0), &zoom);
        let mut scene = scene(252.0);
        scene.set_screen_transform(Some(Affine::scale(4.0)));
        tooltip.on_pointer_enter(&mut scene, &1);
        // 252 screen px / 4 (transform) / 1.5 (zoom) = 42 local units.
        assert_eq!(tooltip.calculated_size().height, 42.0);
    }

    #[test]
    fn fixed_height_skips_measurement() {
        let config = TooltipConfig {
            bubble_height: 60.0,
            ..TooltipConfig::new(400.0, 300.0)
        };
        let mut tooltip = tooltip(config, &UNIT);
        let mut scene = scene(42.0);
        scene.set_content_screen_size(None);
        tooltip.on_pointer_enter(&mut scene, &1);
        assert_eq!(tooltip.calculated_size(), Size::new(150.0, 60.0));
    }

    #[test]
    fn missing_content_element_falls_back() {
        let mut tooltip = tooltip(TooltipConfig::new(400.0, 300.0), &UNIT);
        let mut scene = scene(42.0);
        scene.set_content_screen_size(None);
        tooltip.on_pointer_enter(&mut scene, &1);
        assert_eq!(tooltip.phase(), Phase::Shown);
        assert_eq!(tooltip.calculated_size(), Size::new(150.0, 0.0));
        assert_eq!(scene.outlines().len(), 1);
    }

    #[test]
    fn missing_screen_transform_still_measures() {
        let mut tooltip = tooltip(TooltipConfig::new(400.0, 300.0), &UNIT);
        let mut scene = scene(42.0);
        scene.set_screen_transform(None);
        tooltip.on_pointer_enter(&mut scene, &1);
        assert_eq!(tooltip.calculated_size().height, 42.0);
    }

    #[test]
    fn absent_content_creates_nothing() {
        let mut tooltip = tooltip(TooltipConfig::new(400.0, 300.0), &UNIT);
        let mut scene = scene(42.0);
        tooltip.on_pointer_enter(&mut scene, &0);
        assert_eq!(tooltip.phase(), Phase::Hidden);
        assert!(scene.is_empty());
    }

    #[test]
    fn out_of_order_events_are_ignored() {
        let mut tooltip = tooltip(TooltipConfig::new(400.0, 300.0), &UNIT);
        let mut scene = scene(42.0);
        tooltip.on_pointer_move(&mut scene, &1);
        tooltip.on_pointer_leave(&mut scene, &1);
        assert_eq!(tooltip.phase(), Phase::Hidden);
        assert_eq!(tooltip.calculated_size(), Size::ZERO);
        assert!(scene.is_empty());
    }

    #[test]
    fn enter_move_leave_returns_to_hidden() {
        let mut tooltip = tooltip(TooltipConfig::new(400.0, 300.0), &UNIT);
        let mut scene = scene(42.0);
        scene.set_pointer((50.0, 50.0));
        tooltip.handle(&mut scene, PointerEvent::Enter, &3);
        tooltip.handle(&mut scene, PointerEvent::Move, &3);
        assert_eq!(tooltip.phase(), Phase::Shown);
        tooltip.handle(&mut scene, PointerEvent::Leave, &3);

        assert_eq!(tooltip.phase(), Phase::Hidden);
        assert_eq!(tooltip.calculated_size(), Size::ZERO);
        assert_eq!(tooltip.orientation(), None);
        assert!(scene.outlines().is_empty());
        assert!(scene.contents().is_empty());
        assert_eq!(scene.len(), 1, "only the group survives");
    }

    #[test]
    fn move_flips_across_the_right_edge() {
        let mut tooltip = tooltip(TooltipConfig::new(400.0, 300.0), &UNIT);
        let mut scene = scene(42.0);
        scene.set_pointer((100.0, 50.0));
        tooltip.on_pointer_enter(&mut scene, &1);
        assert_eq!(tooltip.orientation(), Some(Orientation::empty()));
        let (_, origin) = only_outline(&scene);
        assert_eq!(origin, Point::new(62.5, 60.0));

        scene.set_pointer((300.0, 50.0));
        tooltip.on_pointer_move(&mut scene, &1);
        assert_eq!(tooltip.orientation(), Some(Orientation::TIP_ON_RIGHT));
        let (outline, origin) = only_outline(&scene);
        assert_eq!(origin, Point::new(187.5, 60.0));
        assert_eq!(only_content_frame(&scene), Rect::new(187.5, 60.0, 337.5, 102.0));

        // Apex of the moved outline sits on the pointer.
        let bbox = outline.bounding_box();
        assert_eq!(bbox.y0 + origin.y, 50.0);

        scene.set_pointer((100.0, 50.0));
        tooltip.on_pointer_move(&mut scene, &1);
        assert_eq!(tooltip.orientation(), Some(Orientation::empty()));
        assert_eq!(tooltip.calculated_size().height, 42.0);
    }

    #[test]
    fn move_flips_near_the_bottom_edge() {
        let mut tooltip = tooltip(TooltipConfig::new(400.0, 300.0), &UNIT);
        let mut scene = scene(42.0);
        scene.set_pointer((20.0, 280.0));
        tooltip.on_pointer_enter(&mut scene, &1);
        assert_eq!(tooltip.orientation(), Some(Orientation::POINT_DOWN));
        let (_, origin) = only_outline(&scene);
        assert_eq!(origin, Point::new(-17.5, 228.0));
    }

    #[test]
    fn square_variant_draws_polygon() {
        let config = TooltipConfig {
            rounded: false,
            ..TooltipConfig::new(400.0, 300.0)
        };
        let mut tooltip = tooltip(config, &UNIT);
        let mut scene = scene(42.0);
        tooltip.on_pointer_enter(&mut scene, &1);
        let (outline, _) = only_outline(&scene);
        assert!(matches!(outline, Outline::Polygon(_)));
    }

    #[test]
    fn outline_is_painted_with_resolved_style() {
        let mut tooltip = tooltip(TooltipConfig::new(400.0, 300.0), &UNIT);
        let mut scene = scene(42.0);
        tooltip.on_pointer_enter(&mut scene, &1);
        let outlines = scene.outlines();
        let SceneNode::Outline { style, .. } = outlines[0].1 else {
            panic!("expected outline");
        };
        assert_eq!(style.stroke, "#000000");
        assert_eq!(style.stroke_width, 1.5);
        assert_eq!(style, tooltip.outline_style());
    }

    #[test]
    fn repeated_enter_replaces_visuals() {
        let mut tooltip = tooltip(TooltipConfig::new(400.0, 300.0), &UNIT);
        let mut scene = scene(42.0);
        tooltip.on_pointer_enter(&mut scene, &1);
        tooltip.on_pointer_enter(&mut scene, &2);
        assert_eq!(scene.outlines().len(), 1);
        let contents = scene.contents();
        assert_eq!(contents.len(), 1);
        let SceneNode::Content { markup, .. } = contents[0].1 else {
            panic!("expected content");
        };
        assert_eq!(markup, "<div>value 2</div>");
    }

    #[test]
    fn leave_with_absent_content_keeps_tooltip() {
        let mut tooltip = tooltip(TooltipConfig::new(400.0, 300.0), &UNIT);
        let mut scene = scene(42.0);
        tooltip.on_pointer_enter(&mut scene, &1);
        tooltip.on_pointer_leave(&mut scene, &0);
        assert_eq!(tooltip.phase(), Phase::Shown);
        assert_eq!(scene.outlines().len(), 1);
    }

    #[test]
    fn narrow_bubble_keeps_tip_base_on_body() {
        let config = TooltipConfig {
            bubble_width: 40.0,
            rounded: false,
            ..TooltipConfig::new(400.0, 300.0)
        };
        let mut tooltip = tooltip(config, &UNIT);
        let width = tooltip.config().bubble_width;
        let mut scene = scene(42.0);
        for pointer in [(100.0, 50.0), (390.0, 50.0), (100.0, 290.0), (390.0, 290.0)] {
            scene.set_pointer(pointer);
            tooltip.handle(&mut scene, PointerEvent::Enter, &1);
            let (outline, _) = only_outline(&scene);
            let bbox = outline.bounding_box();
            assert_eq!(bbox.x0, 0.0, "pointer {pointer:?}");
            assert_eq!(bbox.x1, width, "pointer {pointer:?}");
        }
    }
}
