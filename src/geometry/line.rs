//! Line segments and segment chains.

use crate::error::{Error, Result};
use crate::geometry::{Angle, Point, Rectangle};
use crate::raster::{Axis, Shape, Stepper};
use crate::rotate::{self, LengthMode, RotationMode};

/// A line segment between two integer points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSegment {
    a: Point,
    b: Point,
}

impl LineSegment {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Connect consecutive points into an open chain of segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewPoints`] for fewer than two points.
    pub fn chain(points: &[Point]) -> Result<Vec<Self>> {
        if points.len() < 2 {
            return Err(Error::TooFewPoints {
                what: "LineSegment chain",
                required: 2,
                actual: points.len(),
            });
        }
        Ok(points.windows(2).map(|w| Self::new(w[0], w[1])).collect())
    }

    /// Connect consecutive points into a closed ring, last back to first.
    pub(crate) fn ring(points: &[Point]) -> Vec<Self> {
        let n = points.len();
        (0..n).map(|i| Self::new(points[i], points[(i + 1) % n])).collect()
    }

    /// Start point.
    #[must_use]
    pub const fn a(&self) -> Point {
        self.a
    }

    /// End point.
    #[must_use]
    pub const fn b(&self) -> Point {
        self.b
    }

    /// `(dx, dy)` from `a` to `b`, widened so it cannot overflow.
    #[must_use]
    pub fn delta(&self) -> (i64, i64) {
        self.a.delta_to(self.b)
    }

    /// The axis with the larger absolute delta; ties go to [`Axis::X`].
    #[must_use]
    pub fn dominant_axis(&self) -> Axis {
        let (dx, dy) = self.delta();
        Axis::dominant(dx, dy)
    }

    /// Number of Bresenham steps from `a` to `b`: `max(|dx|, |dy|)`.
    #[must_use]
    pub fn step_count(&self) -> u64 {
        let (dx, dy) = self.delta();
        dx.unsigned_abs().max(dy.unsigned_abs())
    }

    /// Number of pixels in the rasterized segment.
    #[must_use]
    pub fn pixel_length(&self) -> u64 {
        self.step_count() + 1
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.a.euclidean_distance(self.b)
    }

    /// Midpoint of the two end points.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.a.midpoint(self.b)
    }

    /// The same segment running from `b` to `a`.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }

    /// Rasterize with the generalized Bresenham walk.
    ///
    /// Returns exactly `max(|dx|, |dy|) + 1` points, starting at `a`,
    /// ending at `b`, monotonic along the dominant axis.
    #[must_use]
    pub fn rasterize(&self) -> Vec<Point> {
        let count = usize::try_from(self.pixel_length()).unwrap_or(usize::MAX);
        Stepper::toward(self.a, self.b).take(count).collect()
    }

    /// Whether `point` lies exactly on the segment.
    ///
    /// The point must be collinear with `a` and `b` and its dominant-axis
    /// coordinate must lie between theirs. A zero-length segment contains
    /// only its own point.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        if self.a == self.b {
            return point == self.a;
        }

        let (ex, ey) = self.delta();
        let (px, py) = self.a.delta_to(point);
        let cross = i128::from(px) * i128::from(ey) - i128::from(py) * i128::from(ex);
        if cross != 0 {
            return false;
        }

        let axis = self.dominant_axis();
        let lo = axis.coordinate(self.a).min(axis.coordinate(self.b));
        let hi = axis.coordinate(self.a).max(axis.coordinate(self.b));
        (lo..=hi).contains(&axis.coordinate(point))
    }

    /// Shift both end points.
    #[must_use]
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.a.translate(dx, dy), self.b.translate(dx, dy))
    }

    /// Rotate both end points independently about `center`.
    #[must_use]
    pub fn rotate(&self, angle: Angle, center: Point) -> Self {
        self.rotate_with(angle, center, RotationMode::Naive)
    }

    /// Rotate `a` about `center`, then re-derive `b` by stepping from the
    /// new `a` so the segment keeps its length under `mode`.
    #[must_use]
    pub fn rotate_preserving(&self, angle: Angle, center: Point, mode: LengthMode) -> Self {
        self.rotate_with(angle, center, RotationMode::LengthPreserving(mode))
    }

    /// Rotate with an explicit [`RotationMode`].
    #[must_use]
    pub fn rotate_with(&self, angle: Angle, center: Point, mode: RotationMode) -> Self {
        if angle.is_identity() {
            return *self;
        }
        let [a, b] = rotate::rotate_vertices([self.a, self.b], angle, center, mode);
        Self::new(a, b)
    }
}

impl Shape for LineSegment {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::from_corners(self.a.min(self.b), self.a.max(self.b))
    }

    /// A segment is all border; `border_only` makes no difference.
    fn contains(&self, point: Point, _border_only: bool) -> bool {
        self.contains_point(point)
    }

    fn find_points(&self, _border_only: bool) -> Vec<Point> {
        self.rasterize()
    }
}
