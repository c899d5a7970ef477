//! Point-in-shape tests shared by the shape variants.

use crate::geometry::{LineSegment, Point};

/// Crossing-number (even-odd) test over a closed vertex ring.
///
/// A horizontal ray is cast from `point` toward +x. An edge counts when
/// exactly one of its end points has a `y` greater than `point.y` (so edges
/// are half-open along y) and its x-intercept lies strictly right of
/// `point.x`. The intercept comparison is
/// cross-multiplied so it stays exact in integers.
///
/// Points on the boundary are not reliably classified; pair this with
/// [`on_border`].
#[must_use]
pub fn crossing_number_contains(vertices: &[Point], point: Point) -> bool {
    let Some(&last) = vertices.last() else {
        return false;
    };

    let px = i64::from(point.x);
    let py = i64::from(point.y);

    let mut inside = false;
    let mut prev = last;
    for &cur in vertices {
        if (cur.y > point.y) != (prev.y > point.y) {
            let (cx, cy) = (i64::from(cur.x), i64::from(cur.y));
            let edge_dx = i64::from(prev.x) - cx;
            let edge_dy = i64::from(prev.y) - cy;

            // intercept_x = cx + (py - cy) * edge_dx / edge_dy, compared to px.
            let lhs = i128::from(py - cy) * i128::from(edge_dx);
            let rhs = i128::from(px - cx) * i128::from(edge_dy);
            let crosses = if edge_dy > 0 { lhs > rhs } else { lhs < rhs };

            if crosses {
                inside = !inside;
            }
        }
        prev = cur;
    }

    inside
}

/// True when `point` lies on any of `segments`.
#[must_use]
pub fn on_border(segments: &[LineSegment], point: Point) -> bool {
    segments.iter().any(|segment| segment.contains_point(point))
}

/// Orientation of `p` relative to the directed edge `from -> to`.
///
/// Positive on one side, negative on the other, zero when collinear.
#[must_use]
pub fn orientation(p: Point, from: Point, to: Point) -> i128 {
    let (ex, ey) = from.delta_to(to);
    let (px, py) = from.delta_to(p);
    i128::from(px) * i128::from(ey) - i128::from(py) * i128::from(ex)
}

/// Sign test for a triangle: true when the three orientations of `p` are
/// not mixed. Points on an edge (a zero orientation) count as inside.
///
/// A degenerate triangle (collinear or coincident corners) has no area and
/// matches nothing; its edges are left to [`on_border`].
#[must_use]
pub fn triangle_sign_test(p: Point, a: Point, b: Point, c: Point) -> bool {
    if orientation(c, a, b) == 0 {
        return false;
    }

    let d1 = orientation(p, a, b);
    let d2 = orientation(p, b, c);
    let d3 = orientation(p, c, a);

    let has_neg = d1 < 0 || d2 < 0 || d3 < 0;
    let has_pos = d1 > 0 || d2 > 0 || d3 > 0;

    !(has_neg && has_pos)
}

/// Squared-radius banding for discrete circles.
///
/// Interior: `d² <= r²`. Border: `(r - 1)² < d² <= r²`.
#[must_use]
pub fn circle_band(center: Point, radius: i32, point: Point, border_only: bool) -> bool {
    let d2 = center.distance_squared(point);
    let r = i128::from(radius);
    let outer = r * r;

    if border_only {
        let inner = (r - 1) * (r - 1);
        d2 > inner && d2 <= outer
    } else {
        d2 <= outer
    }
}
