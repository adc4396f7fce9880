// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_bubble --heading-base-level=0

//! Understory Bubble: geometry for tooltip bubbles.
//!
//! A bubble is a rectangular body plus a small triangular tip that points at an
//! anchor (usually the pointer). This crate answers two purely geometric
//! questions and leaves everything else to the host:
//!
//! - **Where does the bubble go?** [`OrientationPolicy::decide`] picks one of
//!   four [`Orientation`]s so the bubble stays inside a [`SurfaceBounds`], and
//!   [`Placement::resolve`] turns that into the body's top-left origin.
//! - **What does it look like?** [`BubbleOutline`] maps a [`BubbleConfig`] to
//!   an [`Outline`]: a rounded [`kurbo::BezPath`] or a square polygon.
//!
//! All coordinates are in the surface's local space with the origin at the top
//! left and `y` growing downwards. Outlines are produced in bubble-local space
//! (body top-left at the origin); translate them by [`Placement::origin`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_bubble::{BubbleOutline, Orientation, Placement, SurfaceBounds, TipGeometry};
//!
//! let bounds = SurfaceBounds::new(120.0, 100.0);
//! let size = Size::new(50.0, 30.0);
//! let tip = TipGeometry::default();
//!
//! // Near the right edge: the bubble flips to the left of the pointer.
//! let anchor = Point::new(90.0, 10.0);
//! let placement = Placement::resolve(anchor, size, bounds, &tip);
//! assert_eq!(placement.orientation, Orientation::TIP_ON_RIGHT);
//!
//! // The tip apex, moved into surface space, lands exactly on the anchor.
//! let config = placement.bubble_config(size, &tip);
//! assert_eq!(config.tip_apex() + placement.origin.to_vec2(), anchor);
//!
//! let outline = BubbleOutline::Rounded.outline(&config);
//! assert!(outline.bounding_box().height() > size.height);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support in `kurbo` and SVG serialization
//!   via [`Outline::svg_data`].
//! - `libm`: `no_std` builds backed by `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod outline;
mod placement;
mod types;

pub use outline::{BubbleOutline, MAX_CORNER_RADIUS, Outline, corner_radius};
pub use placement::{OrientationPolicy, Placement};
pub use types::{BubbleConfig, Orientation, SurfaceBounds, TipGeometry};
