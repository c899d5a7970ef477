//! Rasterization and containment.
//!
//! Every shape answers three questions: its axis-aligned bounding box,
//! whether a pixel belongs to it, and which pixels it covers. Area shapes
//! answer the last one by scanning their bounding box row by row and
//! filtering with `contains`.
//!
//! # Algorithms
//!
//! - **Bresenham stepping**: integer-only line rasterization
//! - **Crossing number**: even-odd point-in-polygon test
//! - **Orientation signs**: point-in-triangle test
//! - **Radius banding**: discrete circle interior and border
//!
//! # Partitioned scans
//!
//! Scanning is `O(bounding area)` and every pixel is independent. The kernel
//! does not spawn threads; callers split the bounding box into disjoint row
//! ranges, run [`Shape::find_points_in_rows`] for each on whatever workers
//! they have, and concatenate the results in row order to reproduce
//! [`Shape::find_points`].

mod bresenham;
mod containment;

use std::ops::RangeInclusive;

use log::trace;

use crate::config::KernelConfig;
use crate::error::{Error, Result};
use crate::geometry::{Point, Rectangle};

pub use bresenham::{Axis, Stepper};
pub use containment::{
    circle_band, crossing_number_contains, on_border, orientation, triangle_sign_test,
};

/// Common capabilities of every discrete shape.
pub trait Shape {
    /// The axis-aligned bounding box.
    fn bounding_box(&self) -> Rectangle;

    /// Whether `point` belongs to the shape.
    ///
    /// With `border_only` set, only boundary pixels match. Any point that
    /// matches with `border_only` also matches without it.
    fn contains(&self, point: Point, border_only: bool) -> bool;

    /// Whether `point` is inside the shape but not on its boundary.
    fn contains_interior(&self, point: Point) -> bool {
        self.contains(point, false) && !self.contains(point, true)
    }

    /// All pixels of the shape, in row-major order.
    ///
    /// Recomputed from the shape on every call.
    fn find_points(&self, border_only: bool) -> Vec<Point> {
        let bounds = self.bounding_box();
        scan_rows(self, &bounds, border_only, bounds.min_corner().y..=bounds.max_corner().y)
    }

    /// Pixels of the shape whose row lies in `rows`, in row-major order.
    ///
    /// Rows outside the bounding box are ignored.
    fn find_points_in_rows(&self, border_only: bool, rows: RangeInclusive<i32>) -> Vec<Point> {
        let bounds = self.bounding_box();
        scan_rows(self, &bounds, border_only, rows)
    }

    /// Like [`Shape::find_points`], but refuses bounding boxes larger than
    /// the configured resolution limit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResolutionTooLarge`] if the bounding area exceeds
    /// `config.max_resolution`.
    fn find_points_with(&self, border_only: bool, config: &KernelConfig) -> Result<Vec<Point>> {
        let area = self.bounding_box().area();
        if area > config.max_resolution {
            return Err(Error::ResolutionTooLarge { area, max: config.max_resolution });
        }
        Ok(self.find_points(border_only))
    }
}

/// Scan `rows` of `bounds` and keep the pixels `shape` contains.
fn scan_rows<S: Shape + ?Sized>(
    shape: &S,
    bounds: &Rectangle,
    border_only: bool,
    rows: RangeInclusive<i32>,
) -> Vec<Point> {
    let min = bounds.min_corner();
    let max = bounds.max_corner();

    let first = (*rows.start()).max(min.y);
    let last = (*rows.end()).min(max.y);
    if first > last {
        return Vec::new();
    }

    trace!("scanning rows {first}..={last} of a {}-pixel bounding box", bounds.area());

    let mut points = Vec::new();
    for y in first..=last {
        for x in min.x..=max.x {
            let p = Point::new(x, y);
            if shape.contains(p, border_only) {
                points.push(p);
            }
        }
    }
    points
}
