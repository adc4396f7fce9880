// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measuring rendered content in surface coordinates.

use kurbo::{Affine, Point, Rect, Size};
use log::warn;

use crate::surface::Surface;
use crate::zoom::{ZoomCorrection, ZoomProbe};

/// Why content could not be measured.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum MeasureError {
    /// The content container has no wrapping element to measure.
    #[error("tooltip content has no wrapping element to measure")]
    ContentMissing,
    /// Zoom correction produced a size that cannot be laid out.
    #[error("measured tooltip size {width}x{height} is not usable")]
    InvalidSize {
        /// Corrected width.
        width: f64,
        /// Corrected height.
        height: f64,
    },
}

/// Converts screen-space boxes into the surface's coordinate space and undoes
/// the embedded-content size distortion.
///
/// Content must be attached and laid out before it is measured. Give the
/// container a nominal height of at least 1 first; some engines report an
/// empty box for the children of a zero-height container.
#[derive(Debug)]
pub struct BoundsMeasurer<'z, P> {
    zoom: &'z ZoomCorrection<P>,
}

impl<P> Clone for BoundsMeasurer<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for BoundsMeasurer<'_, P> {}

impl<'z, P: ZoomProbe> BoundsMeasurer<'z, P> {
    /// Measure against the shared zoom correction.
    pub const fn new(zoom: &'z ZoomCorrection<P>) -> Self {
        Self { zoom }
    }

    /// Size of the content's wrapping element in surface units.
    pub fn measure<S: Surface>(&self, surface: &S, content: S::Node) -> Result<Size, MeasureError> {
        let screen_rect = surface
            .content_screen_rect(content)
            .ok_or(MeasureError::ContentMissing)?;
        let size = self.measure_rect(screen_rect, surface.screen_transform());
        let usable = |v: f64| v.is_finite() && v >= 0.0;
        if usable(size.width) && usable(size.height) {
            Ok(size)
        } else {
            Err(MeasureError::InvalidSize {
                width: size.width,
                height: size.height,
            })
        }
    }

    /// Map the corners of `screen_rect` into local space and apply the zoom
    /// correction.
    ///
    /// A missing or singular `screen_transform` is replaced by the identity.
    pub fn measure_rect(&self, screen_rect: Rect, screen_transform: Option<Affine>) -> Size {
        let to_local = local_from_screen(screen_transform);
        let top_left = to_local * Point::new(screen_rect.x0, screen_rect.y0);
        let bottom_right = to_local * Point::new(screen_rect.x1, screen_rect.y1);

        let factor = self.zoom.factor();
        Size::new(
            (bottom_right.x - top_left.x) / factor,
            (bottom_right.y - top_left.y) / factor,
        )
    }
}

fn local_from_screen(screen_transform: Option<Affine>) -> Affine {
    match screen_transform {
        Some(t) if t.determinant() != 0.0 && t.determinant().is_finite() => t.inverse(),
        Some(_) => {
            warn!("singular screen transform; measuring with identity");
            Affine::IDENTITY
        }
        None => {
            warn!("surface has no screen transform; measuring with identity");
            Affine::IDENTITY
        }
    }
}
