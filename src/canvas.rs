//! Planning for rotated raster canvases.
//!
//! Rotating a `width x height` image needs two answers before any pixel is
//! copied: how big the destination canvas is, and which source pixel each
//! destination pixel samples. [`RotatedCanvas`] answers both. It never
//! touches pixel data; callers pair it with whatever buffer type they use and
//! fill unmapped destination pixels with their own default.
//!
//! # Example
//!
//! ```
//! use discrete_geom::prelude::*;
//!
//! let plan = RotatedCanvas::plan(
//!     100,
//!     50,
//!     Angle::degrees(90.0),
//!     RotationMode::Naive,
//!     &KernelConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!((plan.width(), plan.height()), (50, 100));
//! assert_eq!(plan.source_coordinate(Point::new(0, 0)), Some(Point::new(0, 49)));
//! ```

use log::debug;

use crate::config::KernelConfig;
use crate::error::{Error, Result};
use crate::geometry::{Angle, Point, Rectangle};
use crate::raster::Shape;
use crate::rotate::RotationMode;

/// Destination size and inverse mapping for one rotation of a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedCanvas {
    width: u32,
    height: u32,
    source: Rectangle,
    rotated: Rectangle,
    pivot: Point,
    origin: Point,
    angle: Angle,
}

impl RotatedCanvas {
    /// Size the destination canvas for rotating a `width x height` source
    /// about its center.
    ///
    /// The full source bounds are rotated with `mode`; the destination is the
    /// bounding box of the result, shifted so its minimum corner is `(0, 0)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either side is zero or does not
    /// fit an `i32` coordinate, and [`Error::ResolutionTooLarge`] if the
    /// destination covers more than `config.max_resolution` pixels.
    pub fn plan(
        width: u32,
        height: u32,
        angle: Angle,
        mode: RotationMode,
        config: &KernelConfig,
    ) -> Result<Self> {
        let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
            return Err(Error::InvalidDimensions { width, height });
        };
        if w == 0 || h == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let source = Rectangle::from_corners(Point::ORIGIN, Point::new(w - 1, h - 1));
        let pivot = source.midpoint();
        let rotated = source.rotate_with(angle, pivot, mode);
        let bounds = rotated.bounding_box();

        let area = bounds.area();
        let too_large = || Error::ResolutionTooLarge { area, max: config.max_resolution };
        if area > config.max_resolution {
            return Err(too_large());
        }
        let new_width = u32::try_from(bounds.width()).map_err(|_| too_large())?;
        let new_height = u32::try_from(bounds.height()).map_err(|_| too_large())?;

        debug!(
            "canvas plan: {width}x{height} rotated {angle} about {pivot} -> {new_width}x{new_height}"
        );

        Ok(Self {
            width: new_width,
            height: new_height,
            source,
            rotated,
            pivot,
            origin: bounds.min_corner(),
            angle,
        })
    }

    /// Destination width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Destination height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Source-space position of destination pixel `(0, 0)`.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Center of rotation in source space.
    #[must_use]
    pub const fn pivot(&self) -> Point {
        self.pivot
    }

    /// Full bounds of the source canvas.
    #[must_use]
    pub const fn source_bounds(&self) -> Rectangle {
        self.source
    }

    /// The source bounds after rotation, in source space.
    #[must_use]
    pub const fn rotated_bounds(&self) -> Rectangle {
        self.rotated
    }

    /// Rotation angle.
    #[must_use]
    pub const fn angle(&self) -> Angle {
        self.angle
    }

    /// Source pixel sampled by destination pixel `dst`.
    ///
    /// Returns `None` when `dst` is outside the destination canvas or maps
    /// outside the source bounds.
    #[must_use]
    pub fn source_coordinate(&self, dst: Point) -> Option<Point> {
        if !self.in_destination(dst) {
            return None;
        }
        let world = dst.translate(self.origin.x, self.origin.y);
        let src = world.rotate(self.angle.inverse(), self.pivot);
        let max = self.source.max_corner();
        let inside = (0..=max.x).contains(&src.x) && (0..=max.y).contains(&src.y);
        inside.then_some(src)
    }

    /// Every destination pixel in row-major order.
    pub fn destination_points(&self) -> impl Iterator<Item = Point> {
        let w = i32::try_from(self.width).unwrap_or(i32::MAX);
        let h = i32::try_from(self.height).unwrap_or(i32::MAX);
        (0..h).flat_map(move |y| (0..w).map(move |x| Point::new(x, y)))
    }

    /// Every destination pixel paired with its source pixel, row-major.
    pub fn mapping(&self) -> impl Iterator<Item = (Point, Option<Point>)> + '_ {
        self.destination_points().map(|dst| (dst, self.source_coordinate(dst)))
    }

    fn in_destination(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }
}
