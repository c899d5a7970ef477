//! Rectangles: axis-aligned or rotated, always four integer corners.

use log::debug;

use crate::config::AngleSearch;
use crate::error::{Error, Result};
use crate::geometry::{bounds, Angle, LineSegment, Point};
use crate::raster::{crossing_number_contains, on_border, Shape};
use crate::rotate::{self, AngleSearchOutcome, LengthMode, RotationMode};

/// A rectangle given by four corners in boundary order `a -> b -> c -> d`.
///
/// Opposite sides have equal integer length (see [`Point::distance`]) when
/// built from four explicit points. The boundary segments are computed once
/// at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    a: Point,
    b: Point,
    c: Point,
    d: Point,
    segments: [LineSegment; 4],
}

impl Rectangle {
    /// Create a rectangle from four corners.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnequalSides`] unless `|ab| == |cd|` and
    /// `|bc| == |da|` in integer distance.
    pub fn new(a: Point, b: Point, c: Point, d: Point) -> Result<Self> {
        let rect = Self::from_vertices(a, b, c, d);
        let [ab, bc, cd, da] = rect.side_lengths();
        if ab != cd || bc != da {
            debug!("rejecting rectangle {a} {b} {c} {d}: sides {ab}/{cd} and {bc}/{da}");
            return Err(Error::UnequalSides { ab, bc, cd, da });
        }
        Ok(rect)
    }

    /// Create an axis-aligned rectangle from two opposite corners.
    ///
    /// `a` is `p`, `c` is `q`, and the other two corners are synthesized.
    #[must_use]
    pub fn from_corners(p: Point, q: Point) -> Self {
        Self::from_vertices(p, Point::new(q.x, p.y), q, Point::new(p.x, q.y))
    }

    /// Create a rectangle from three consecutive corners.
    ///
    /// `c` is snapped onto the perpendicular of `ab` through `b` and `d` is
    /// derived from it (see [`rotate::close_rectangle`]), so the result is
    /// always valid. Collinear input is accepted and yields a flat rectangle
    /// with `c == b` and `d == a`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateBase`] if `a == b`.
    pub fn from_three_points(a: Point, b: Point, c: Point) -> Result<Self> {
        if a == b {
            return Err(Error::DegenerateBase { point: a });
        }
        let [c, d] = rotate::close_rectangle(a, b, c);
        Ok(Self::from_vertices(a, b, c, d))
    }

    /// The axis-aligned bounding box of `points`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `points` is empty.
    pub fn from_points(points: &[Point]) -> Result<Self> {
        bounds::bounding_box(points)
    }

    pub(crate) fn from_vertices(a: Point, b: Point, c: Point, d: Point) -> Self {
        Self {
            a,
            b,
            c,
            d,
            segments: [
                LineSegment::new(a, b),
                LineSegment::new(b, c),
                LineSegment::new(c, d),
                LineSegment::new(d, a),
            ],
        }
    }

    /// First corner.
    #[must_use]
    pub const fn a(&self) -> Point {
        self.a
    }

    /// Second corner.
    #[must_use]
    pub const fn b(&self) -> Point {
        self.b
    }

    /// Third corner, opposite `a`.
    #[must_use]
    pub const fn c(&self) -> Point {
        self.c
    }

    /// Fourth corner, opposite `b`.
    #[must_use]
    pub const fn d(&self) -> Point {
        self.d
    }

    /// Corners in boundary order.
    #[must_use]
    pub const fn vertices(&self) -> [Point; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Boundary segments `ab`, `bc`, `cd`, `da`.
    #[must_use]
    pub const fn segments(&self) -> &[LineSegment; 4] {
        &self.segments
    }

    /// Integer lengths of `ab`, `bc`, `cd`, `da`.
    #[must_use]
    pub fn side_lengths(&self) -> [i64; 4] {
        [
            self.a.distance(self.b),
            self.b.distance(self.c),
            self.c.distance(self.d),
            self.d.distance(self.a),
        ]
    }

    /// Whether opposite sides have equal integer length.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let [ab, bc, cd, da] = self.side_lengths();
        ab == cd && bc == da
    }

    /// Whether every side is horizontal or vertical.
    #[must_use]
    pub fn is_axis_aligned(&self) -> bool {
        self.segments.iter().all(|s| s.a().x == s.b().x || s.a().y == s.b().y)
    }

    /// Component-wise minimum of the corners.
    #[must_use]
    pub fn min_corner(&self) -> Point {
        self.a.min(self.b).min(self.c).min(self.d)
    }

    /// Component-wise maximum of the corners.
    #[must_use]
    pub fn max_corner(&self) -> Point {
        self.a.max(self.b).max(self.c).max(self.d)
    }

    /// Pixel columns covered by the bounding box.
    #[must_use]
    pub fn width(&self) -> u64 {
        let (dx, _) = self.min_corner().delta_to(self.max_corner());
        dx.unsigned_abs() + 1
    }

    /// Pixel rows covered by the bounding box.
    #[must_use]
    pub fn height(&self) -> u64 {
        let (_, dy) = self.min_corner().delta_to(self.max_corner());
        dy.unsigned_abs() + 1
    }

    /// Pixel count of the bounding box.
    #[must_use]
    pub fn area(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }

    /// Center, as the midpoint of the diagonal `ac`.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.a.midpoint(self.c)
    }

    /// The smallest axis-aligned rectangle covering both bounding boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        bounds::union(self, other)
    }

    /// Shift every corner.
    #[must_use]
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::from_vertices(
            self.a.translate(dx, dy),
            self.b.translate(dx, dy),
            self.c.translate(dx, dy),
            self.d.translate(dx, dy),
        )
    }

    /// Rotate `a`, `b`, `c` independently about `center`, then snap `c` and
    /// derive `d` so opposite sides stay equal.
    #[must_use]
    pub fn rotate(&self, angle: Angle, center: Point) -> Self {
        self.rotate_with(angle, center, RotationMode::Naive)
    }

    /// Rotate `a` about `center`, step out `b` along the rotated `ab` and `c`
    /// along the normal of the placed `ab`, so both sides keep their length
    /// under `mode`, and close the rectangle with a derived `d`.
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
        let original = [self.a, self.b, self.c];
        let placed = rotate::rotate_vertices(original, angle, center, mode);
        let [a, b, c] = placed;
        let [c, d] = match mode {
            RotationMode::Naive => rotate::close_rectangle(a, b, c),
            RotationMode::LengthPreserving(length) => {
                rotate::close_rectangle_stepping(original, placed, length)
            }
        };
        Self::from_vertices(a, b, c, d)
    }

    /// Look for an angle near `angle` whose naive rotation keeps both side
    /// pixel lengths, trying at most `search.max_attempts` alternatives before
    /// falling back to [`LengthMode::PixelCount`] stepping.
    #[must_use]
    pub fn rotate_searching(
        &self,
        angle: Angle,
        center: Point,
        search: &AngleSearch,
    ) -> AngleSearchOutcome {
        rotate::search_rectangle_angle(self, angle, center, search)
    }
}

impl Shape for Rectangle {
    fn bounding_box(&self) -> Rectangle {
        Self::from_corners(self.min_corner(), self.max_corner())
    }

    fn contains(&self, point: Point, border_only: bool) -> bool {
        let border = on_border(&self.segments, point);
        if border_only {
            return border;
        }
        border || crossing_number_contains(&self.vertices(), point)
    }
}
