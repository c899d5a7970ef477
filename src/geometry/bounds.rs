//! Axis-aligned bounding boxes.

use crate::error::{Error, Result};
use crate::geometry::{Point, Rectangle};

/// The smallest axis-aligned rectangle containing every point.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `points` is empty.
pub fn bounding_box(points: &[Point]) -> Result<Rectangle> {
    if points.is_empty() {
        return Err(Error::EmptyInput { what: "bounding_box" });
    }
    let min = Point::min_of(points)?;
    let max = Point::max_of(points)?;
    Ok(Rectangle::from_corners(min, max))
}

/// The smallest axis-aligned rectangle containing both rectangles.
#[must_use]
pub fn union(a: &Rectangle, b: &Rectangle) -> Rectangle {
    Rectangle::from_corners(
        a.min_corner().min(b.min_corner()),
        a.max_corner().max(b.max_corner()),
    )
}
