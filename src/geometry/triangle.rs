//! Triangles.

use crate::geometry::{Angle, LineSegment, Point, Rectangle};
use crate::raster::{on_border, triangle_sign_test, Shape};
use crate::rotate::{self, LengthMode, RotationMode};

/// A triangle with integer vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    a: Point,
    b: Point,
    c: Point,
    segments: [LineSegment; 3],
    bounds: Rectangle,
}

impl Triangle {
    /// Create a triangle. Any three points are accepted, collinear ones
    /// included.
    #[must_use]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            a,
            b,
            c,
            segments: [LineSegment::new(a, b), LineSegment::new(b, c), LineSegment::new(c, a)],
            bounds: Rectangle::from_corners(a.min(b).min(c), a.max(b).max(c)),
        }
    }

    /// First vertex.
    #[must_use]
    pub const fn a(&self) -> Point {
        self.a
    }

    /// Second vertex.
    #[must_use]
    pub const fn b(&self) -> Point {
        self.b
    }

    /// Third vertex.
    #[must_use]
    pub const fn c(&self) -> Point {
        self.c
    }

    /// Vertices in order.
    #[must_use]
    pub const fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Boundary segments `ab`, `bc`, `ca`.
    #[must_use]
    pub const fn segments(&self) -> &[LineSegment; 3] {
        &self.segments
    }

    /// Shift every vertex.
    #[must_use]
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.a.translate(dx, dy), self.b.translate(dx, dy), self.c.translate(dx, dy))
    }

    /// Rotate every vertex independently about `center`.
    #[must_use]
    pub fn rotate(&self, angle: Angle, center: Point) -> Self {
        self.rotate_with(angle, center, RotationMode::Naive)
    }

    /// Rotate keeping the lengths of `ab` and `bc` under `mode`.
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
        let [a, b, c] = rotate::rotate_vertices(self.vertices(), angle, center, mode);
        Self::new(a, b, c)
    }
}

impl Shape for Triangle {
    fn bounding_box(&self) -> Rectangle {
        self.bounds
    }

    fn contains(&self, point: Point, border_only: bool) -> bool {
        let border = on_border(&self.segments, point);
        if border_only {
            return border;
        }
        border || triangle_sign_test(point, self.a, self.b, self.c)
    }

    /// Strict interior: inside the sign test and off every edge.
    fn contains_interior(&self, point: Point) -> bool {
        triangle_sign_test(point, self.a, self.b, self.c) && !on_border(&self.segments, point)
    }
}
