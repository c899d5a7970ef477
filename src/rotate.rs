//! Rotation engine for discrete shapes.
//!
//! Rotating every vertex independently ([`RotationMode::Naive`]) rounds each
//! vertex on its own, so edges shrink and grow by a pixel here and there;
//! repeated small rotations drift visibly. The length-preserving mode
//! rotates only the first vertex about the center. Every later vertex is
//! placed by walking from the already-placed previous vertex along the
//! rotated edge direction, for exactly as far as the original edge reached.
//!
//! Rectangles rotate `a` and `b` by either mode, then put `c` on the
//! perpendicular through the placed `b` and close with `d = a + (c - b)`.
//! Opposite sides are the same integer vector, so every rotated rectangle
//! stays valid.

use log::debug;

use crate::config::AngleSearch;
use crate::error::{Error, Result};
use crate::geometry::{Angle, Point, Rectangle};
use crate::raster::Stepper;

/// Chebyshev length given to a direction recovered from an edge whose
/// rotated reference point truncated onto its own start.
const RECOVERED_DIRECTION_SCALE: f64 = 65_536.0;

/// What a length-preserving rotation keeps constant for each edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Walk as many Bresenham steps as the original edge had, so the new
    /// edge rasterizes to the same number of pixels.
    #[default]
    PixelCount,
    /// Walk until the Euclidean distance from the previous vertex reaches
    /// the original edge length.
    Distance,
}

/// How a rotation places vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationMode {
    /// Rotate every vertex independently about the center.
    Naive,
    /// Rotate the first vertex, then step out each following one.
    LengthPreserving(LengthMode),
}

impl Default for RotationMode {
    fn default() -> Self {
        Self::LengthPreserving(LengthMode::default())
    }
}

/// Rotate every point independently about `center`.
#[must_use]
pub fn rotate_naive(points: &[Point], angle: Angle, center: Point) -> Vec<Point> {
    points.iter().map(|p| p.rotate(angle, center)).collect()
}

/// Rotate an ordered vertex chain, keeping each edge's length under `mode`.
///
/// Only the first vertex is rotated about `center`. Every following vertex
/// is found by rotating it about its *original* predecessor to get a
/// direction, then walking from the *placed* predecessor in that direction.
#[must_use]
pub fn rotate_preserving(
    points: &[Point],
    angle: Angle,
    center: Point,
    mode: LengthMode,
) -> Vec<Point> {
    let mut out = points.to_vec();
    place_chain(points, &mut out, angle, center, RotationMode::LengthPreserving(mode));
    out
}

/// Rotate an ordered vertex chain with an explicit [`RotationMode`].
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `points` is empty.
pub fn rotate_chain(
    points: &[Point],
    angle: Angle,
    center: Point,
    mode: RotationMode,
) -> Result<Vec<Point>> {
    if points.is_empty() {
        return Err(Error::EmptyInput { what: "rotate_chain" });
    }
    let mut out = points.to_vec();
    place_chain(points, &mut out, angle, center, mode);
    Ok(out)
}

/// Fixed-size counterpart of [`rotate_chain`] used by the shape types.
pub(crate) fn rotate_vertices<const N: usize>(
    vertices: [Point; N],
    angle: Angle,
    center: Point,
    mode: RotationMode,
) -> [Point; N] {
    let mut out = vertices;
    place_chain(&vertices, &mut out, angle, center, mode);
    out
}

fn place_chain(src: &[Point], dst: &mut [Point], angle: Angle, center: Point, mode: RotationMode) {
    if angle.is_identity() {
        dst.copy_from_slice(src);
        return;
    }

    match mode {
        RotationMode::Naive => {
            for (out, p) in dst.iter_mut().zip(src) {
                *out = p.rotate(angle, center);
            }
        }
        RotationMode::LengthPreserving(length) => {
            let Some(&first) = src.first() else {
                return;
            };
            dst[0] = first.rotate(angle, center);
            for i in 1..src.len() {
                dst[i] = place_edge(src[i - 1], src[i], dst[i - 1], angle, length);
            }
        }
    }
}

/// Place the far end of the original edge `from -> to` after `from` has
/// moved to `placed_from`.
///
/// The direction comes from rotating `to` about `from`; the distance walked
/// depends on `mode`.
#[must_use]
pub fn place_edge(from: Point, to: Point, placed_from: Point, angle: Angle, mode: LengthMode) -> Point {
    let reference = to.rotate(angle, from);
    let (mut dx, mut dy) = from.delta_to(reference);
    if dx == 0 && dy == 0 && from != to {
        (dx, dy) = recovered_direction(from, to, angle);
    }

    walk(placed_from, (dx, dy), from, to, mode)
}

/// Step from `start` along `direction` until the original edge `from -> to`
/// is matched under `mode`.
fn walk(start: Point, direction: (i64, i64), from: Point, to: Point, mode: LengthMode) -> Point {
    let mut stepper = Stepper::new(start, direction.0, direction.1);
    let (ex, ey) = from.delta_to(to);

    match mode {
        LengthMode::PixelCount => stepper.advance(ex.unsigned_abs().max(ey.unsigned_abs())),
        LengthMode::Distance => {
            let target = from.distance_squared(to);
            // Each step grows the Chebyshev distance by one, so |dx| + |dy|
            // steps always reach the target.
            let bound = ex.unsigned_abs() + ey.unsigned_abs();
            let mut taken = 0;
            while taken < bound && stepper.position().distance_squared(start) < target {
                stepper.step();
                taken += 1;
            }
            stepper.position()
        }
    }
}

/// Direction of a rotated short edge, computed on an enlarged copy so
/// truncation cannot collapse it to zero.
fn recovered_direction(from: Point, to: Point, angle: Angle) -> (i64, i64) {
    let (ex, ey) = from.delta_to(to);
    let (sin, cos) = angle.sin_cos();
    let rx = ex as f64 * cos - ey as f64 * sin;
    let ry = ex as f64 * sin + ey as f64 * cos;
    let scale = RECOVERED_DIRECTION_SCALE / rx.abs().max(ry.abs());
    ((rx * scale).round() as i64, (ry * scale).round() as i64)
}

/// Close a rectangle from three corners: returns `[c', d]`.
///
/// `c'` is `c` snapped onto the perpendicular of `ab` through `b`: only the
/// normal component of `c - b` is kept, rounded to the nearest pixel. Then
/// `d = a + (c' - b)`, so `ab` and `dc` are the same vector, as are `bc` and
/// `ad`. With `a == b` there is no normal; `c` is kept and `d` equals it.
#[must_use]
pub fn close_rectangle(a: Point, b: Point, c: Point) -> [Point; 2] {
    let (ex, ey) = a.delta_to(b);
    let (nx, ny) = (-ey, ex);
    if nx == 0 && ny == 0 {
        return [c, c];
    }

    let (cx, cy) = b.delta_to(c);
    let dot = i128::from(cx) * i128::from(nx) + i128::from(cy) * i128::from(ny);
    let norm = i128::from(nx) * i128::from(nx) + i128::from(ny) * i128::from(ny);
    let t = dot as f64 / norm as f64;

    let v = ((nx as f64 * t).round() as i64, (ny as f64 * t).round() as i64);
    [offset(b, v), offset(a, v)]
}

/// Length-preserving closure for a rectangle whose `a` and `b` were placed
/// by stepping.
///
/// `c` is walked out from `placed_b` along the normal of the placed `ab`, on
/// the side the original `c` sat, as far as the original `bc` reached under
/// `mode`. A flat original (or a placed `ab` of zero length) keeps
/// `placed_c` instead. Returns `[c', d]` with `d = placed_a + (c' - placed_b)`.
pub(crate) fn close_rectangle_stepping(
    original: [Point; 3],
    placed: [Point; 3],
    mode: LengthMode,
) -> [Point; 2] {
    let [a, b, c] = original;
    let [placed_a, placed_b, placed_c] = placed;

    let side = normal_side(a, b, c);
    let (ex, ey) = placed_a.delta_to(placed_b);
    let c = if side == 0 || (ex == 0 && ey == 0) {
        placed_c
    } else {
        walk(placed_b, (-ey * side, ex * side), b, c, mode)
    };
    [c, offset(placed_a, placed_b.delta_to(c))]
}

/// Which side of `ab`, along its normal `(-ey, ex)`, `c` lies on: -1, 0 or 1.
fn normal_side(a: Point, b: Point, c: Point) -> i64 {
    let (ex, ey) = a.delta_to(b);
    let (cx, cy) = b.delta_to(c);
    let dot = i128::from(cx) * -i128::from(ey) + i128::from(cy) * i128::from(ex);
    dot.signum() as i64
}

fn offset(p: Point, (vx, vy): (i64, i64)) -> Point {
    Point::saturating_from_i64(i64::from(p.x) + vx, i64::from(p.y) + vy)
}

/// Result of [`Rectangle::rotate_searching`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSearchOutcome {
    /// The rotated rectangle.
    pub rectangle: Rectangle,
    /// The angle whose naive rotation was accepted, or `None` when the
    /// search gave up and the rectangle was placed by stepping.
    pub angle: Option<Angle>,
}

/// Try `angle`, then `angle + step`, `angle - step`, `angle + 2 step`, ...
/// for at most `search.max_attempts` alternatives. A candidate is accepted
/// when its naive rotation is a valid rectangle whose sides rasterize to the
/// original pixel lengths.
pub(crate) fn search_rectangle_angle(
    rect: &Rectangle,
    angle: Angle,
    center: Point,
    search: &AngleSearch,
) -> AngleSearchOutcome {
    if angle.is_identity() {
        return AngleSearchOutcome { rectangle: *rect, angle: Some(angle) };
    }

    let [ab, bc, _, _] = rect.segments();
    let wanted = (ab.pixel_length(), bc.pixel_length());

    let step = search.step_degrees;
    let alternatives = (1..=search.max_attempts).flat_map(|k| {
        let offset = step * f64::from(k);
        [angle.offset_degrees(offset), angle.offset_degrees(-offset)]
    });
    let candidates = std::iter::once(angle)
        .chain(alternatives.take(search.max_attempts as usize))
        .filter(|candidate| !candidate.is_identity());

    for candidate in candidates {
        let rotated = rect.rotate(candidate, center);
        let [rab, rbc, _, _] = rotated.segments();
        if rotated.is_valid() && (rab.pixel_length(), rbc.pixel_length()) == wanted {
            if candidate != angle {
                debug!("angle search: {angle} replaced by {candidate}");
            }
            return AngleSearchOutcome { rectangle: rotated, angle: Some(candidate) };
        }
    }

    debug!(
        "angle search: no candidate within {} attempts for {angle}, stepping instead",
        search.max_attempts
    );
    AngleSearchOutcome {
        rectangle: rect.rotate_preserving(angle, center, LengthMode::PixelCount),
        angle: None,
    }
}
