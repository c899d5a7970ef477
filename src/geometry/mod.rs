//! Integer-coordinate shapes.
//!
//! Every shape stores exact `i32` vertices. Derived quantities that could
//! overflow `i32` (squared distances, cross products, areas) are computed
//! in wider integers.
//!
//! Shapes are plain values: transformations return new shapes and never
//! mutate in place.

pub mod bounds;
mod circle;
mod line;
mod point;
mod polygon;
mod rect;
mod triangle;

pub use circle::Circle;
pub use line::LineSegment;
pub use point::{Angle, Point};
pub use polygon::Polygon;
pub use rect::Rectangle;
pub use triangle::Triangle;
