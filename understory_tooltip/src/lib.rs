// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tooltip --heading-base-level=0

//! Understory Tooltip: a pointer-driven tooltip bubble for 2D surfaces.
//!
//! A [`Tooltip`] reacts to pointer enter/move/leave over elements that carry a
//! datum. On enter it asks a content provider for markup, attaches it to the
//! surface, measures it, and draws a bubble whose tip points at the pointer.
//! On move it follows the pointer, flipping so the bubble stays inside the
//! surface. On leave it removes everything it drew.
//!
//! ## Pieces
//!
//! - [`ZoomCorrection`]: compensates for engines that misreport the size of
//!   embedded content under zoom, using two reference fixtures behind a
//!   [`ZoomProbe`]. One instance is shared by every tooltip in a process.
//! - [`BoundsMeasurer`]: converts a screen-space box into surface units and
//!   applies the zoom correction.
//! - [`Surface`]: the scene graph the tooltip draws into. [`MemoryScene`] is an
//!   in-memory implementation for headless use and tests.
//! - [`TooltipConfig`]: sizes, colours, tip geometry and outline style.
//! - Geometry (outlines and flipping) comes from [`understory_bubble`], whose
//!   main types are re-exported here.
//!
//! ## Failure handling
//!
//! Nothing here aborts an interaction. Content that cannot be measured falls
//! back to the configured size, a missing screen transform is treated as the
//! identity, and both are reported through the [`log`] facade. A datum without
//! content is simply not shown.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_tooltip::{
//!     FixedZoomProbe, MemoryScene, Orientation, PointerEvent, Tooltip, TooltipConfig,
//!     ZoomCorrection,
//! };
//!
//! static ZOOM: ZoomCorrection<FixedZoomProbe> = ZoomCorrection::new(FixedZoomProbe::IDENTITY);
//!
//! let mut tooltip = Tooltip::new(
//!     TooltipConfig::new(400.0, 300.0),
//!     &ZOOM,
//!     |name: &str| (!name.is_empty()).then(|| format!("<div>{name}</div>")),
//!     |_, _| String::from("#333333"),
//! );
//!
//! let mut scene = MemoryScene::new();
//! scene.set_content_screen_size(Some(Size::new(150.0, 30.0)));
//!
//! scene.set_pointer((380.0, 20.0));
//! tooltip.handle(&mut scene, PointerEvent::Enter, "series A");
//! assert_eq!(tooltip.orientation(), Some(Orientation::TIP_ON_RIGHT));
//!
//! scene.set_pointer((40.0, 20.0));
//! tooltip.handle(&mut scene, PointerEvent::Move, "series A");
//! assert_eq!(tooltip.orientation(), Some(Orientation::empty()));
//!
//! tooltip.handle(&mut scene, PointerEvent::Leave, "series A");
//! assert!(scene.outlines().is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod measure;
mod memory;
mod surface;
mod zoom;

pub use config::{AUTO_HEIGHT, TooltipConfig};
pub use controller::{PLACEHOLDER_HEIGHT, Phase, PointerEvent, Tooltip};
pub use measure::{BoundsMeasurer, MeasureError};
pub use memory::{MemoryScene, SceneId, SceneNode};
pub use surface::{OutlineStyle, Surface};
pub use zoom::{
    DEVICE_PIXEL_RATIO_FALLBACK_BELOW, EMBEDDED_HEIGHT_MULTIPLE, FixedZoomProbe, ZoomCorrection,
    ZoomProbe,
};

pub use understory_bubble::{
    BubbleConfig, BubbleOutline, Orientation, OrientationPolicy, Outline, Placement,
    SurfaceBounds, TipGeometry,
};
