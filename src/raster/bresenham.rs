//! Integer stepping along a direction.
//!
//! Generalizes Bresenham's line algorithm: instead of stopping at an end
//! point, a [`Stepper`] keeps walking along the slope of a direction vector,
//! one unit per step on the dominant axis. Segment rasterization takes
//! `major + 1` positions from it; length-preserving rotation takes as many
//! steps as the original edge had.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

use crate::geometry::Point;

/// The coordinate axis a line advances along once per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl Axis {
    /// The dominant axis of a direction. Ties resolve to [`Axis::X`].
    #[must_use]
    pub fn dominant(dx: i64, dy: i64) -> Self {
        if dx.abs() >= dy.abs() {
            Self::X
        } else {
            Self::Y
        }
    }

    /// The coordinate of `point` along this axis.
    #[must_use]
    pub fn coordinate(self, point: Point) -> i32 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
        }
    }
}

/// Walks integer positions along a direction vector.
///
/// Iterating yields the current position first and then advances, so the
/// first item is always the origin. The iterator never ends on its own;
/// callers bound it with `take` or [`Stepper::advance`].
#[derive(Debug, Clone)]
pub struct Stepper {
    position: Point,
    axis: Axis,
    major_step: i32,
    minor_step: i32,
    major_abs: i64,
    minor_abs: i64,
    error: i64,
}

impl Stepper {
    /// Start at `origin`, heading along `(dx, dy)`.
    ///
    /// A zero direction produces a stepper that never moves.
    #[must_use]
    pub fn new(origin: Point, dx: i64, dy: i64) -> Self {
        let axis = Axis::dominant(dx, dy);
        let (major, minor) = match axis {
            Axis::X => (dx, dy),
            Axis::Y => (dy, dx),
        };
        let major_abs = major.abs();

        Self {
            position: origin,
            axis,
            major_step: major.signum() as i32,
            minor_step: minor.signum() as i32,
            major_abs,
            minor_abs: minor.abs(),
            error: major_abs / 2,
        }
    }

    /// Start at `from`, heading toward `to`.
    #[must_use]
    pub fn toward(from: Point, to: Point) -> Self {
        let (dx, dy) = from.delta_to(to);
        Self::new(from, dx, dy)
    }

    /// The current position.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// The axis this stepper advances along every step.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Move one unit along the dominant axis, and along the minor axis when
    /// the accumulated error spills over.
    pub fn step(&mut self) {
        if self.major_abs == 0 {
            return;
        }

        let mut minor = 0;
        self.error += self.minor_abs;
        if self.error >= self.major_abs {
            self.error -= self.major_abs;
            minor = self.minor_step;
        }

        self.position = match self.axis {
            Axis::X => self.position.translate(self.major_step, minor),
            Axis::Y => self.position.translate(minor, self.major_step),
        };
    }

    /// Take `steps` steps and return where the walk ends.
    #[must_use]
    pub fn advance(mut self, steps: u64) -> Point {
        for _ in 0..steps {
            self.step();
        }
        self.position
    }
}

impl Iterator for Stepper {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let current = self.position;
        self.step();
        Some(current)
    }
}
