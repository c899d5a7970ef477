//! Error types for discrete-geom operations.

use crate::geometry::Point;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing or transforming shapes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required list of points was empty.
    #[error("Empty input: {what} requires at least one point")]
    EmptyInput {
        /// What was being built from the points.
        what: &'static str,
    },

    /// Not enough points were supplied for the requested construction.
    #[error("{what} requires at least {required} points, got {actual}")]
    TooFewPoints {
        /// What was being built from the points.
        what: &'static str,
        /// Minimum number of points.
        required: usize,
        /// Number of points supplied.
        actual: usize,
    },

    /// Opposite sides of a four-point rectangle differ in integer length.
    #[error("Rectangle sides are not equal: |ab|={ab}, |cd|={cd}, |bc|={bc}, |da|={da}")]
    UnequalSides {
        /// Length of side a-b.
        ab: i64,
        /// Length of side b-c.
        bc: i64,
        /// Length of side c-d.
        cd: i64,
        /// Length of side d-a.
        da: i64,
    },

    /// Three-point rectangle whose base points coincide.
    #[error("Degenerate rectangle base: a and b are both {point}")]
    DegenerateBase {
        /// The coincident point.
        point: Point,
    },

    /// Circle with a negative radius.
    #[error("Negative radius: {0}")]
    NegativeRadius(i32),

    /// Invalid dimensions for a canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Scanned or planned area exceeds the configured sanity bound.
    #[error("Resolution too large: {area} pixels exceeds maximum of {max}")]
    ResolutionTooLarge {
        /// Requested area in pixels.
        area: u64,
        /// Configured maximum.
        max: u64,
    },

    /// Configuration parsing error with line number.
    #[error("Configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// Configuration file not found or unreadable.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The offending key.
        key: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}
