//! Simple polygons over an ordered vertex ring.

use crate::error::{Error, Result};
use crate::geometry::{bounds, Angle, LineSegment, Point, Rectangle};
use crate::raster::{crossing_number_contains, on_border, Shape};
use crate::rotate::{self, LengthMode, RotationMode};

/// A polygon with at least three vertices, closed from the last vertex back
/// to the first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polygon {
    points: Vec<Point>,
    segments: Vec<LineSegment>,
    bounds: Rectangle,
}

impl Polygon {
    /// Create a polygon.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewPoints`] for fewer than three points.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 3 {
            return Err(Error::TooFewPoints {
                what: "Polygon",
                required: 3,
                actual: points.len(),
            });
        }
        let bounds = bounds::bounding_box(&points)?;
        let segments = LineSegment::ring(&points);
        Ok(Self { points, segments, bounds })
    }

    /// Vertices in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Boundary segments, one per vertex, the last closing the ring.
    #[must_use]
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Shift every vertex.
    #[must_use]
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        self.with_points(self.points.iter().map(|p| p.translate(dx, dy)).collect())
    }

    /// Rotate every vertex independently about `center`.
    #[must_use]
    pub fn rotate(&self, angle: Angle, center: Point) -> Self {
        self.rotate_with(angle, center, RotationMode::Naive)
    }

    /// Rotate keeping every edge but the closing one at its length under
    /// `mode`.
    #[must_use]
    pub fn rotate_preserving(&self, angle: Angle, center: Point, mode: LengthMode) -> Self {
        self.rotate_with(angle, center, RotationMode::LengthPreserving(mode))
    }

    /// Rotate with an explicit [`RotationMode`].
    #[must_use]
    pub fn rotate_with(&self, angle: Angle, center: Point, mode: RotationMode) -> Self {
        if angle.is_identity() {
            return self.clone();
        }
        let points = match mode {
            RotationMode::Naive => rotate::rotate_naive(&self.points, angle, center),
            RotationMode::LengthPreserving(length) => {
                rotate::rotate_preserving(&self.points, angle, center, length)
            }
        };
        self.with_points(points)
    }

    /// Rebuild from a same-length vertex list, which keeps the arity valid.
    fn with_points(&self, points: Vec<Point>) -> Self {
        let segments = LineSegment::ring(&points);
        let min = points.iter().copied().fold(points[0], Point::min);
        let max = points.iter().copied().fold(points[0], Point::max);
        Self { bounds: Rectangle::from_corners(min, max), points, segments }
    }
}

impl Shape for Polygon {
    fn bounding_box(&self) -> Rectangle {
        self.bounds
    }

    fn contains(&self, point: Point, border_only: bool) -> bool {
        let border = on_border(&self.segments, point);
        if border_only {
            return border;
        }
        border || crossing_number_contains(&self.points, point)
    }
}
