// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom correction for embedded content.
//!
//! Some rendering engines misreport the size of content embedded through a
//! nested coordinate system (an SVG `foreignObject`, for example) once the page
//! is zoomed or the display has a non-integer device pixel ratio. The error is
//! a multiplier on the reported size.
//!
//! To recover it, the host keeps two hidden reference fixtures with identical
//! nominal content: one laid out as plain content and one embedded the same
//! way tooltip content is. Comparing their live heights cancels the zoom level
//! and leaves the defect's multiplier, which [`ZoomCorrection::factor`]
//! returns.
//!
//! ## Lifetime
//!
//! The fixtures are process-wide. Hosts create them once, wrap them in a
//! single [`ZoomCorrection`], and hand out shared references to every tooltip
//! (for example from a `static` or a `OnceLock`). The correction is never
//! mutated after construction; every call to [`ZoomCorrection::factor`] reads
//! the fixtures' current layout.
//!
//! ```rust
//! use understory_tooltip::{FixedZoomProbe, ZoomCorrection};
//!
//! static ZOOM: ZoomCorrection<FixedZoomProbe> = ZoomCorrection::new(FixedZoomProbe::IDENTITY);
//! assert_eq!(ZOOM.factor(), 1.0);
//! ```

use log::debug;

/// Ratio between the embedded and plain fixture heights when there is no
/// distortion.
///
/// This is empirical: at 100% zoom the embedded fixture reports twice the
/// plain fixture's height on every engine observed so far, without a known
/// analytical reason. It is kept as measured rather than re-derived.
pub const EMBEDDED_HEIGHT_MULTIPLE: f64 = 2.0;

/// Below this value for both the computed factor and the device pixel ratio,
/// the device pixel ratio is used instead of the computed factor.
///
/// At extreme zoom-out the fixture comparison disagrees with the platform's
/// own pixel ratio while the pixel ratio is still right. This is a narrow
/// heuristic for that range, not a general zoom model.
pub const DEVICE_PIXEL_RATIO_FALLBACK_BELOW: f64 = 0.5;

/// Read access to the two reference fixtures.
pub trait ZoomProbe {
    /// Current rendered height of the plain reference fixture.
    fn plain_height(&self) -> f64;

    /// Current rendered height of the embedded reference fixture.
    fn embedded_height(&self) -> f64;

    /// The platform's device pixel ratio.
    fn device_pixel_ratio(&self) -> f64;
}

/// A probe with fixed readings.
///
/// Useful for hosts that render without a distorting engine, and for tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedZoomProbe {
    /// Reported plain fixture height.
    pub plain_height: f64,
    /// Reported embedded fixture height.
    pub embedded_height: f64,
    /// Reported device pixel ratio.
    pub device_pixel_ratio: f64,
}

impl FixedZoomProbe {
    /// Readings that produce a correction factor of exactly 1.
    pub const IDENTITY: Self = Self {
        plain_height: 1.0,
        embedded_height: EMBEDDED_HEIGHT_MULTIPLE,
        device_pixel_ratio: 1.0,
    };
}

impl Default for FixedZoomProbe {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomProbe for FixedZoomProbe {
    fn plain_height(&self) -> f64 {
        self.plain_height
    }

    fn embedded_height(&self) -> f64 {
        self.embedded_height
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }
}

/// Derives the size-correction factor for embedded content from a
/// [`ZoomProbe`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ZoomCorrection<P> {
    probe: P,
}

impl<P> ZoomCorrection<P> {
    /// Wrap the process-wide fixtures.
    pub const fn new(probe: P) -> Self {
        Self { probe }
    }

    /// The underlying probe.
    pub const fn probe(&self) -> &P {
        &self.probe
    }
}

impl<P: ZoomProbe> ZoomCorrection<P> {
    /// Current correction factor.
    ///
    /// `embedded / (EMBEDDED_HEIGHT_MULTIPLE × plain)`, except that when both
    /// that value and the device pixel ratio are below
    /// [`DEVICE_PIXEL_RATIO_FALLBACK_BELOW`] the device pixel ratio is returned.
    ///
    /// No other clamping is applied. At extreme zoom levels the factor can fall
    /// outside `[0, 1]`, and a zero plain height yields a non-finite value;
    /// callers must cope with both.
    pub fn factor(&self) -> f64 {
        let plain = self.probe.plain_height();
        let embedded = self.probe.embedded_height();
        let factor = embedded / (EMBEDDED_HEIGHT_MULTIPLE * plain);

        let dpr = self.probe.device_pixel_ratio();
        if factor < DEVICE_PIXEL_RATIO_FALLBACK_BELOW && dpr < DEVICE_PIXEL_RATIO_FALLBACK_BELOW {
            debug!("zoom factor {factor} below fallback threshold; using device pixel ratio {dpr}");
            return dpr;
        }
        factor
    }
}
