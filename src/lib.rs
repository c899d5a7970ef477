//! # discrete-geom
//!
//! Integer-coordinate 2D geometry and rasterization.
//!
//! Shapes live on the pixel lattice: every vertex is an exact `(i32, i32)`
//! point, lines are drawn with Bresenham stepping, and rotations produce
//! lattice points again. The one place floating point enters is the
//! rotation itself, whose results are truncated toward zero.
//!
//! ## Features
//!
//! - **Shapes**: points, line segments, rectangles, triangles, circles and
//!   simple polygons behind one [`Shape`](raster::Shape) trait
//! - **Rasterization**: row-major pixel enumeration of borders or filled
//!   interiors, with row ranges for caller-side partitioning
//! - **Length-preserving rotation**: edges keep their pixel count instead of
//!   shrinking where truncation would shorten them
//! - **Canvas planning**: destination size and inverse mapping for rotating
//!   whole rasters
//!
//! ## Quick Start
//!
//! ```rust
//! use discrete_geom::prelude::*;
//!
//! let segment = LineSegment::from_coords(0, 0, 10, 0);
//! let turned = segment.rotate_preserving(Angle::degrees(45.0), Point::ORIGIN, LengthMode::PixelCount);
//!
//! // A naive rotation would lose three pixels to truncation.
//! assert_eq!(turned.pixel_length(), segment.pixel_length());
//! assert_eq!(turned.b(), Point::new(10, 10));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Point`](geometry::Point) and
//!   [`KernelConfig`](config::KernelConfig)
//! - `yaml`: load [`KernelConfig`](config::KernelConfig) from YAML
//! - `full`: All features enabled
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter." IBM Systems Journal 4(1).
//! - Shimrat, M. (1962). "Algorithm 112: Position of point relative to
//!   polygon." CACM 5(8).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Lattice code converts between integer widths and floats constantly
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Integer-coordinate shapes: points, segments, rectangles, triangles,
/// circles and polygons.
pub mod geometry;

/// Pixel enumeration, Bresenham stepping and containment tests.
pub mod raster;

/// Naive and length-preserving rotation of vertex chains.
pub mod rotate;

// ============================================================================
// Planning Modules
// ============================================================================

/// Destination sizing and inverse mapping for rotated canvases.
pub mod canvas;

// ============================================================================
// Configuration
// ============================================================================

/// Kernel-wide bounds: maximum resolution and angle search limits.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for discrete-geom operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use discrete_geom::prelude::*;
///
/// let square = Rectangle::from_corners(Point::new(0, 0), Point::new(3, 3));
/// assert_eq!(square.find_points(true).len(), 12);
/// ```
pub mod prelude {
    pub use crate::canvas::RotatedCanvas;
    pub use crate::config::{AngleSearch, KernelConfig};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Angle, Circle, LineSegment, Point, Polygon, Rectangle, Triangle};
    pub use crate::raster::Shape;
    pub use crate::rotate::{AngleSearchOutcome, LengthMode, RotationMode};
}

// ============================================================================
// Tests
// ============================================================================
