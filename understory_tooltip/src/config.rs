// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time tooltip configuration.

use alloc::string::String;

use kurbo::Size;
use understory_bubble::{BubbleOutline, SurfaceBounds, TipGeometry};

use crate::surface::OutlineStyle;

/// Value for [`TooltipConfig::bubble_height`] that requests measuring the
/// content instead of using a fixed height.
pub const AUTO_HEIGHT: f64 = -1.0;

/// Tooltip appearance and geometry.
///
/// Fixed for the lifetime of a [`Tooltip`](crate::Tooltip). Start from
/// [`TooltipConfig::new`] and override fields with struct update syntax:
///
/// ```rust
/// use understory_tooltip::TooltipConfig;
///
/// let config = TooltipConfig {
///     bubble_width: 120.0,
///     rounded: false,
///     ..TooltipConfig::new(400.0, 300.0)
/// };
/// assert!(config.is_auto_height());
/// assert_eq!(config.stroke_width(), 1.2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipConfig {
    /// Width of the bubble body and of the content container.
    pub bubble_width: f64,
    /// Height of the bubble body. Negative values (see [`AUTO_HEIGHT`]) mean
    /// "measure the content".
    pub bubble_height: f64,
    /// Width of the surface the bubble must stay inside.
    pub chart_width: f64,
    /// Height of the surface the bubble must stay inside.
    pub chart_height: f64,
    /// Bubble fill colour.
    pub background_colour: String,
    /// Bubble opacity.
    pub background_opacity: f64,
    /// Explicit outline stroke colour. When `None`, a colour contrasting with
    /// the background is chosen at construction.
    pub bubble_stroke: Option<String>,
    /// Outline stroke width. Defaults to one hundredth of the bubble width.
    pub bubble_stroke_width: Option<f64>,
    /// Tip geometry.
    pub tip: TipGeometry,
    /// Rounded corners, or a square polygon.
    pub rounded: bool,
}

impl TooltipConfig {
    /// Defaults for a `chart_width` × `chart_height` surface: a 150 wide,
    /// auto-height, rounded white bubble.
    pub fn new(chart_width: f64, chart_height: f64) -> Self {
        Self {
            bubble_width: 150.0,
            bubble_height: AUTO_HEIGHT,
            chart_width,
            chart_height,
            background_colour: String::from("#ffffff"),
            background_opacity: 0.9,
            bubble_stroke: None,
            bubble_stroke_width: None,
            tip: TipGeometry::default(),
            rounded: true,
        }
    }

    /// Whether the bubble height comes from measuring content.
    pub fn is_auto_height(&self) -> bool {
        self.bubble_height < 0.0
    }

    /// Surface the bubble is kept inside.
    pub fn surface_bounds(&self) -> SurfaceBounds {
        SurfaceBounds::new(self.chart_width, self.chart_height)
    }

    /// Size used when the content cannot be measured.
    ///
    /// Auto-height bubbles fall back to zero height.
    pub fn fallback_size(&self) -> Size {
        Size::new(self.bubble_width, self.bubble_height.max(0.0))
    }

    /// Effective stroke width.
    pub fn stroke_width(&self) -> f64 {
        self.bubble_stroke_width.unwrap_or(self.bubble_width / 100.0)
    }

    /// Outline shape for [`TooltipConfig::rounded`].
    pub fn outline_variant(&self) -> BubbleOutline {
        BubbleOutline::from_rounded(self.rounded)
    }

    /// Resolve the outline paint, calling `contrast(fill, opacity)` only when
    /// no explicit stroke is configured.
    pub fn outline_style(&self, contrast: impl FnOnce(&str, f64) -> String) -> OutlineStyle {
        let stroke = match &self.bubble_stroke {
            Some(stroke) => stroke.clone(),
            None => contrast(&self.background_colour, self.background_opacity),
        };
        OutlineStyle {
            fill: self.background_colour.clone(),
            opacity: self.background_opacity,
            stroke,
            stroke_width: self.stroke_width(),
        }
    }
}
