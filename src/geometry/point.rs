//! Integer points, angles and the rotation primitive.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D point with integer coordinates.
///
/// Coordinates follow raster convention: `x` grows to the right and `y`
/// grows downward. Arithmetic through the operator traits saturates at the
/// `i32` bounds; distances and products are widened so they are exact for
/// every representable point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Exact squared Euclidean distance to another point.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> i128 {
        let dx = i128::from(other.x) - i128::from(self.x);
        let dy = i128::from(other.y) - i128::from(self.y);
        dx * dx + dy * dy
    }

    /// Integer Euclidean distance: the square root of the squared distance,
    /// truncated.
    #[must_use]
    pub fn distance(self, other: Self) -> i64 {
        isqrt(self.distance_squared(other))
    }

    /// Floating-point Euclidean distance.
    #[must_use]
    pub fn euclidean_distance(self, other: Self) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy)
    }

    /// Midpoint, truncating each averaged coordinate toward zero.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        let x = (i64::from(self.x) + i64::from(other.x)) / 2;
        let y = (i64::from(self.y) + i64::from(other.y)) / 2;
        Self::new(x as i32, y as i32)
    }

    /// Component-wise minimum of two points.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum of two points.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise minimum across a list of points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `points` is empty.
    pub fn min_of(points: &[Self]) -> Result<Self> {
        points
            .iter()
            .copied()
            .reduce(Self::min)
            .ok_or(Error::EmptyInput { what: "Point::min_of" })
    }

    /// Component-wise maximum across a list of points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `points` is empty.
    pub fn max_of(points: &[Self]) -> Result<Self> {
        points
            .iter()
            .copied()
            .reduce(Self::max)
            .ok_or(Error::EmptyInput { what: "Point::max_of" })
    }

    /// Offset this point, saturating at the coordinate bounds.
    #[must_use]
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Rotate this point about `center`.
    ///
    /// The offset from `center` goes through the standard rotation matrix in
    /// double precision, is translated back, and each coordinate is then
    /// truncated toward zero. A positive angle maps `(1, 0)` onto `(0, 1)`:
    /// counterclockwise with the y axis pointing up, which shows as clockwise
    /// on a raster where y points down.
    ///
    /// An angle congruent to zero returns the point untouched, and so does a
    /// NaN or infinite angle (see [`Angle::is_identity`]).
    #[must_use]
    pub fn rotate(self, angle: Angle, center: Self) -> Self {
        if angle.is_identity() {
            return self;
        }

        let (sin, cos) = angle.sin_cos();
        let dx = f64::from(self.x) - f64::from(center.x);
        let dy = f64::from(self.y) - f64::from(center.y);

        let x = f64::from(center.x) + dx * cos - dy * sin;
        let y = f64::from(center.y) + dx * sin + dy * cos;

        // `as` truncates toward zero and saturates out-of-range values.
        Self::new(x as i32, y as i32)
    }

    /// Build a point from wide coordinates, clamping into `i32`.
    #[must_use]
    pub(crate) fn saturating_from_i64(x: i64, y: i64) -> Self {
        let clamp = |v: i64| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        Self::new(clamp(x), clamp(y))
    }

    /// Vector from `self` to `other`, widened so it cannot overflow.
    #[must_use]
    pub(crate) fn delta_to(self, other: Self) -> (i64, i64) {
        (
            i64::from(other.x) - i64::from(self.x),
            i64::from(other.y) - i64::from(self.y),
        )
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.translate(rhs.x, rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}

/// Integer square root, truncated.
pub(crate) fn isqrt(n: i128) -> i64 {
    if n <= 0 {
        return 0;
    }
    // The float estimate is within a few units; fix it up exactly.
    let mut r = (n as f64).sqrt() as i128;
    while r * r > n {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r as i64
}

/// A rotation angle in degrees or radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
    /// Angle in degrees.
    Degrees(f64),
    /// Angle in radians.
    Radians(f64),
}

impl Angle {
    /// No rotation.
    pub const ZERO: Self = Self::Degrees(0.0);

    /// Create an angle in degrees.
    #[must_use]
    pub const fn degrees(value: f64) -> Self {
        Self::Degrees(value)
    }

    /// Create an angle in radians.
    #[must_use]
    pub const fn radians(value: f64) -> Self {
        Self::Radians(value)
    }

    /// The angle in radians.
    #[must_use]
    pub fn to_radians(self) -> f64 {
        match self {
            Self::Degrees(d) => d.to_radians(),
            Self::Radians(r) => r,
        }
    }

    /// The angle in degrees.
    #[must_use]
    pub fn to_degrees(self) -> f64 {
        match self {
            Self::Degrees(d) => d,
            Self::Radians(r) => r.to_degrees(),
        }
    }

    /// True when the angle is a whole number of turns.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Degrees(d) => d % 360.0 == 0.0,
            Self::Radians(r) => (r / TAU).fract() == 0.0,
        }
    }

    /// True when the value is neither NaN nor infinite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            Self::Degrees(d) => d.is_finite(),
            Self::Radians(r) => r.is_finite(),
        }
    }

    /// True when rotating by this angle leaves every point in place: a whole
    /// number of turns, or a NaN or infinite value, which has no direction.
    #[must_use]
    pub fn is_identity(self) -> bool {
        self.is_zero() || !self.is_finite()
    }

    /// The opposite rotation.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Degrees(d) => Self::Degrees(-d),
            Self::Radians(r) => Self::Radians(-r),
        }
    }

    /// This angle shifted by `degrees`, keeping its unit.
    #[must_use]
    pub fn offset_degrees(self, degrees: f64) -> Self {
        match self {
            Self::Degrees(d) => Self::Degrees(d + degrees),
            Self::Radians(r) => Self::Radians(r + degrees.to_radians()),
        }
    }

    /// Sine and cosine, exact for quarter turns.
    #[must_use]
    pub fn sin_cos(self) -> (f64, f64) {
        let quarters = match self {
            Self::Degrees(d) => d / 90.0,
            Self::Radians(r) => r / FRAC_PI_2,
        };

        if quarters.is_finite() && quarters.fract() == 0.0 {
            return match (quarters as i64).rem_euclid(4) {
                0 => (0.0, 1.0),
                1 => (1.0, 0.0),
                2 => (0.0, -1.0),
                _ => (-1.0, 0.0),
            };
        }

        self.to_radians().sin_cos()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degrees(d) => write!(f, "{d}°"),
            Self::Radians(r) => write!(f, "{r}rad"),
        }
    }
}
