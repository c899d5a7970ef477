//! Discrete circles.

use crate::error::{Error, Result};
use crate::geometry::{Angle, Point, Rectangle};
use crate::raster::{circle_band, Shape};

/// A circle with an integer center and radius.
///
/// The border is the one-pixel band `(r - 1)² < d² <= r²`, an
/// approximation of a true discrete circle outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Circle {
    center: Point,
    radius: i32,
}

impl Circle {
    /// Create a circle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeRadius`] if `radius < 0`.
    pub fn new(center: Point, radius: i32) -> Result<Self> {
        if radius < 0 {
            return Err(Error::NegativeRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Center point.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Radius in pixels.
    #[must_use]
    pub const fn radius(&self) -> i32 {
        self.radius
    }

    /// Shift the center.
    #[must_use]
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self { center: self.center.translate(dx, dy), radius: self.radius }
    }

    /// Rotate the center about `pivot`; the pixel set only moves.
    #[must_use]
    pub fn rotate(&self, angle: Angle, pivot: Point) -> Self {
        Self { center: self.center.rotate(angle, pivot), radius: self.radius }
    }
}

impl Shape for Circle {
    fn bounding_box(&self) -> Rectangle {
        let r = self.radius;
        Rectangle::from_corners(self.center.translate(-r, -r), self.center.translate(r, r))
    }

    fn contains(&self, point: Point, border_only: bool) -> bool {
        circle_band(self.center, self.radius, point, border_only)
    }
}
