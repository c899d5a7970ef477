//! Falsification Tests
//!
//! Each test states a claim about the kernel that a counterexample would
//! refute. Claims 1-5 are universal properties checked with proptest;
//! claims 10-16 are concrete scenarios; claims 20+ cover rotation and
//! partitioned scanning.
//!
//! Run: cargo test --test falsification_test

#![allow(clippy::unwrap_used, clippy::manual_range_contains)]

use std::collections::HashSet;

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use rayon::prelude::*;

use discrete_geom::prelude::*;

fn point(range: i32) -> impl Strategy<Value = Point> {
    (-range..range, -range..range).prop_map(|(x, y)| Point::new(x, y))
}

// ============================================================================
// SECTION 1: UNIVERSAL PROPERTIES (Claims 1-5)
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Claim 1: a segment rasterizes to max(|dx|, |dy|) + 1 pixels from `a` to `b`
    #[test]
    fn claim_01_segment_pixel_count_and_endpoints(a in point(200), b in point(200)) {
        let points = LineSegment::new(a, b).find_points(false);
        let expected = (b.x - a.x).unsigned_abs().max((b.y - a.y).unsigned_abs()) as usize + 1;

        prop_assert_eq!(points.len(), expected);
        prop_assert_eq!(points.first().copied(), Some(a));
        prop_assert_eq!(points.last().copied(), Some(b));
    }

    /// Claim 2: border membership implies membership, for every shape kind
    #[test]
    fn claim_02_border_implies_contains(
        a in point(25),
        b in point(25),
        c in point(25),
        extra in point(25),
        radius in 0i32..20,
        p in point(30),
    ) {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(LineSegment::new(a, b)),
            Box::new(Rectangle::from_corners(a, b)),
            Box::new(Rectangle::from_corners(a, b).rotate(Angle::degrees(30.0), c)),
            Box::new(Triangle::new(a, b, c)),
            Box::new(Circle::new(c, radius).unwrap()),
            Box::new(Polygon::new(vec![a, b, c, extra]).unwrap()),
        ];
        for shape in &shapes {
            if shape.contains(p, true) {
                prop_assert!(shape.contains(p, false));
            }
        }
    }

    /// Claim 3: a rectangle that constructs has equal opposite sides
    #[test]
    fn claim_03_valid_rectangle_opposite_sides(
        a in point(50),
        b in point(50),
        c in point(50),
        d in point(50),
    ) {
        if let Ok(r) = Rectangle::new(a, b, c, d) {
            prop_assert_eq!(r.a().distance(r.b()), r.c().distance(r.d()));
            prop_assert_eq!(r.b().distance(r.c()), r.d().distance(r.a()));
        }

        let aligned = Rectangle::from_corners(a, c);
        prop_assert!(aligned.is_valid());
        prop_assert_eq!(aligned.a().distance(aligned.b()), aligned.c().distance(aligned.d()));
        prop_assert_eq!(aligned.b().distance(aligned.c()), aligned.d().distance(aligned.a()));
    }

    /// Claim 4: triangle vertices are always border points
    #[test]
    fn claim_04_triangle_vertices_are_border(a in point(100), b in point(100), c in point(100)) {
        let t = Triangle::new(a, b, c);
        for v in t.vertices() {
            prop_assert!(t.contains(v, false));
            prop_assert!(t.contains(v, true));
        }
    }

    /// Claim 5: a triangle contains nothing outside its bounding box, flat or not
    #[test]
    fn claim_05_triangle_members_within_bounds(
        a in point(4),
        b in point(4),
        c in point(4),
        p in point(40),
    ) {
        let t = Triangle::new(a, b, c);
        if t.contains(p, false) {
            let bounds = t.bounding_box();
            let (lo, hi) = (bounds.min_corner(), bounds.max_corner());
            prop_assert!(lo.x <= p.x && p.x <= hi.x && lo.y <= p.y && p.y <= hi.y,
                "Claim 5 FALSIFIED: {} outside {:?}", p, t.vertices());
        }
    }
}

// ============================================================================
// SECTION 2: CONCRETE SCENARIOS (Claims 10-16)
// ============================================================================

/// Claim 10: a ten-pixel horizontal segment covers exactly (0,0)..(9,0)
#[test]
fn claim_10_horizontal_segment_points() {
    let points = LineSegment::from_coords(0, 0, 9, 0).find_points(false);
    let expected: Vec<Point> = (0..10).map(|x| Point::new(x, 0)).collect();

    assert_eq!(points, expected, "Claim 10 FALSIFIED");
}

/// Claim 11: a circle's rim is border and its center is not
#[test]
fn claim_11_circle_border() {
    let circle = Circle::new(Point::new(0, 0), 10).unwrap();

    assert!(circle.contains(Point::new(10, 0), true), "Claim 11 FALSIFIED: rim not border");
    assert!(!circle.contains(Point::new(0, 0), true), "Claim 11 FALSIFIED: center is border");
}

/// Claim 12: a square built from its corners is axis-aligned
#[test]
fn claim_12_square_is_axis_aligned() {
    let square = Rectangle::new(
        Point::new(10, 10),
        Point::new(20, 10),
        Point::new(20, 20),
        Point::new(10, 20),
    )
    .unwrap();

    assert!(square.is_axis_aligned(), "Claim 12 FALSIFIED");
}

/// Claim 13: four +90 then four -90 length-preserving turns of a segment are the identity
#[test]
fn claim_13_segment_quarter_turn_round_trip() {
    let original = LineSegment::from_coords(0, 0, 9, 0);

    for center in [Point::ORIGIN, Point::new(3, -2), Point::new(-40, 17)] {
        let mut segment = original;
        for _ in 0..4 {
            segment = segment.rotate_preserving(Angle::degrees(90.0), center, LengthMode::PixelCount);
            assert_eq!(segment.pixel_length(), 10);
        }
        for _ in 0..4 {
            segment =
                segment.rotate_preserving(Angle::degrees(-90.0), center, LengthMode::PixelCount);
        }

        assert_eq!(segment, original, "Claim 13 FALSIFIED about {center}");
    }
}

/// Claim 14: four 90 degree length-preserving turns of a rectangle about `a` drift nowhere
#[test]
fn claim_14_rectangle_quarter_turns_about_corner() {
    let original = Rectangle::new(
        Point::new(100, 100),
        Point::new(200, 100),
        Point::new(200, 200),
        Point::new(100, 200),
    )
    .unwrap();

    let once = original.rotate_preserving(Angle::degrees(90.0), original.a(), LengthMode::PixelCount);
    assert_eq!(
        once.vertices(),
        [Point::new(100, 100), Point::new(100, 200), Point::new(0, 200), Point::new(0, 100)]
    );

    let mut r = original;
    for _ in 0..4 {
        r = r.rotate_preserving(Angle::degrees(90.0), r.a(), LengthMode::PixelCount);
        assert!(r.is_valid());
    }

    assert_eq!(r, original, "Claim 14 FALSIFIED: cumulative drift");
}

/// Claim 15: a polygon's fill is never smaller than its border, equal for a minimal triangle
#[test]
fn claim_15_polygon_fill_at_least_border() {
    let polygons = [
        vec![Point::new(0, 0), Point::new(30, 0), Point::new(30, 20), Point::new(0, 20)],
        vec![Point::new(0, 0), Point::new(12, 3), Point::new(6, 14)],
        vec![
            Point::new(0, 0),
            Point::new(20, 0),
            Point::new(20, 20),
            Point::new(10, 5),
            Point::new(0, 20),
        ],
    ];
    for vertices in polygons {
        let polygon = Polygon::new(vertices).unwrap();
        let fill = polygon.find_points(false).len();
        let border = polygon.find_points(true).len();
        assert!(fill > border, "Claim 15 FALSIFIED: {fill} <= {border}");
    }

    let minimal = Polygon::new(vec![Point::new(0, 0), Point::new(1, 0), Point::new(0, 1)]).unwrap();
    assert_eq!(minimal.find_points(false).len(), minimal.find_points(true).len());
}

/// Claim 16: a triangle with no area holds only the pixels of its edges
#[test]
fn claim_16_flat_triangles_hold_only_their_edges() {
    let point = Triangle::new(Point::ORIGIN, Point::ORIGIN, Point::ORIGIN);
    assert!(!point.contains(Point::new(500, -7), false), "Claim 16 FALSIFIED: far point inside");
    assert_eq!(point.find_points(false), vec![Point::ORIGIN]);

    let line = Triangle::new(Point::new(0, 0), Point::new(5, 0), Point::new(10, 0));
    assert!(!line.contains(Point::new(100, 0), false), "Claim 16 FALSIFIED: past the end");
    assert!(line.contains(Point::new(7, 0), false));
    assert_eq!(line.find_points(false), line.find_points(true));
}

// ============================================================================
// SECTION 3: ROTATION (Claims 20-26)
// ============================================================================

/// Claim 20: naive rotation loses pixels at 45 degrees, pixel-count stepping does not
#[test]
fn claim_20_preserving_beats_naive_at_45() {
    let segment = LineSegment::from_coords(0, 0, 10, 0);
    let angle = Angle::degrees(45.0);

    let naive = segment.rotate(angle, Point::ORIGIN);
    let kept = segment.rotate_preserving(angle, Point::ORIGIN, LengthMode::PixelCount);

    assert!(naive.pixel_length() < segment.pixel_length());
    assert_eq!(kept.pixel_length(), segment.pixel_length(), "Claim 20 FALSIFIED");
}

/// Claim 21: distance mode lands within one pixel of the original Euclidean length
#[test]
fn claim_21_distance_mode_length() {
    let segment = LineSegment::from_coords(5, 5, 45, 5);

    for degrees in [10.0, 33.0, 45.0, 71.0, 120.0, 200.0] {
        let kept =
            segment.rotate_preserving(Angle::degrees(degrees), Point::new(5, 5), LengthMode::Distance);
        assert_abs_diff_eq!(kept.length(), segment.length(), epsilon = 1.5);
        assert!(kept.a().distance_squared(kept.b()) >= segment.a().distance_squared(segment.b()));
    }
}

/// Claim 22: angle search never loops past its bound and always returns a valid answer
#[test]
fn claim_22_angle_search_bounded() {
    let rect = Rectangle::from_corners(Point::new(0, 0), Point::new(40, 20));
    let search = AngleSearch { step_degrees: 0.5, max_attempts: 8 };

    for degrees in [1.0, 17.0, 45.0, 63.0, 90.0, 135.0] {
        let outcome = rect.rotate_searching(Angle::degrees(degrees), rect.midpoint(), &search);
        let [ab, bc, _, _] = outcome.rectangle.segments();

        if let Some(found) = outcome.angle {
            let offset = (found.to_degrees() - degrees).abs();
            assert!(offset <= 0.5 * 4.0 + 1e-9, "Claim 22 FALSIFIED: searched {offset} away");
        }
        if degrees == 90.0 {
            assert_eq!(outcome.angle, Some(Angle::degrees(90.0)));
        }
        assert!(outcome.rectangle.is_valid(), "Claim 22 FALSIFIED at {degrees}");
        assert_eq!(ab.pixel_length(), rect.segments()[0].pixel_length());
        assert_eq!(bc.pixel_length(), rect.segments()[1].pixel_length());
    }
}

/// Claim 23: rotating a rectangle by any whole degree, in any mode, keeps it valid
#[test]
fn claim_23_rotation_keeps_rectangles_valid() {
    let rect = Rectangle::from_corners(Point::new(-30, -10), Point::new(50, 25));
    let lengths = rect.segments().map(|s| s.pixel_length());

    for degrees in 0..360 {
        let angle = Angle::degrees(f64::from(degrees));
        let naive = rect.rotate(angle, rect.midpoint());
        let kept = rect.rotate_preserving(angle, rect.midpoint(), LengthMode::PixelCount);
        let reached = rect.rotate_preserving(angle, rect.midpoint(), LengthMode::Distance);

        for (name, turned) in [("naive", naive), ("pixel count", kept), ("distance", reached)] {
            assert!(
                turned.is_valid(),
                "Claim 23 FALSIFIED: {name} at {degrees}° has sides {:?}",
                turned.side_lengths()
            );
            let rebuilt = Rectangle::new(turned.a(), turned.b(), turned.c(), turned.d());
            assert_eq!(rebuilt, Ok(turned));
        }
        assert_eq!(kept.segments().map(|s| s.pixel_length()), lengths);
    }
}

/// Claim 24: quarter-turn canvas plans map every source pixel exactly once
#[test]
fn claim_24_canvas_quarter_turn_bijective() {
    let config = KernelConfig::default();
    for degrees in [90.0, 180.0, 270.0] {
        let plan =
            RotatedCanvas::plan(64, 48, Angle::degrees(degrees), RotationMode::Naive, &config).unwrap();
        let sources: HashSet<Point> = plan.mapping().filter_map(|(_, src)| src).collect();

        assert_eq!(u64::from(plan.width()) * u64::from(plan.height()), 64 * 48);
        assert_eq!(sources.len(), 64 * 48, "Claim 24 FALSIFIED at {degrees}");
    }
}

/// Claim 25: the resolution guard rejects oversized scans before scanning
#[test]
fn claim_25_resolution_guard() {
    let mut config = KernelConfig::default();
    config.max_resolution = 1_000;

    let small = Circle::new(Point::ORIGIN, 10).unwrap();
    let large = Circle::new(Point::ORIGIN, 100).unwrap();

    assert_eq!(small.find_points_with(false, &config).unwrap(), small.find_points(false));
    assert!(matches!(
        large.find_points_with(false, &config),
        Err(Error::ResolutionTooLarge { max: 1_000, .. })
    ));
}

/// Claim 26: thirty-six 10 degree pixel-count turns keep every side's pixel length
#[test]
fn claim_26_repeated_rotation_does_not_drift() {
    let original = Rectangle::from_corners(Point::new(0, 0), Point::new(40, 20));
    let center = original.midpoint();

    let mut r = original;
    for turn in 1..=36 {
        r = r.rotate_preserving(Angle::degrees(10.0), center, LengthMode::PixelCount);
        let lengths = r.segments().map(|s| s.pixel_length());
        assert_eq!(lengths, [41, 21, 41, 21], "Claim 26 FALSIFIED after {turn} turns");
        assert!(r.is_valid(), "Claim 26 FALSIFIED: sides {:?}", r.side_lengths());
    }
}

// ============================================================================
// SECTION 4: PARTITIONED SCANS (Claims 30-31)
// ============================================================================

fn partitioned_scan(shape: &(dyn Shape + Sync), border_only: bool, bands: i32) -> Vec<Point> {
    let bounds = shape.bounding_box();
    let (top, bottom) = (bounds.min_corner().y, bounds.max_corner().y);
    let rows = bottom - top + 1;
    let band = (rows + bands - 1) / bands;

    let ranges: Vec<_> = (0..bands)
        .map(|i| (top + i * band)..=(top + (i + 1) * band - 1).min(bottom))
        .collect();

    ranges
        .into_par_iter()
        .map(|rows| shape.find_points_in_rows(border_only, rows))
        .collect::<Vec<_>>()
        .concat()
}

/// Claim 30: row bands scanned on worker threads concatenate to the serial scan
#[test]
fn claim_30_parallel_rows_match_serial() {
    let shapes: Vec<Box<dyn Shape + Sync>> = vec![
        Box::new(Circle::new(Point::new(7, -3), 40).unwrap()),
        Box::new(Triangle::new(Point::new(0, 0), Point::new(90, 10), Point::new(30, 70))),
        Box::new(
            Rectangle::from_corners(Point::new(0, 0), Point::new(60, 30))
                .rotate(Angle::degrees(25.0), Point::new(30, 15)),
        ),
        Box::new(
            Polygon::new(vec![
                Point::new(0, 0),
                Point::new(50, 10),
                Point::new(20, 20),
                Point::new(45, 60),
                Point::new(-5, 40),
            ])
            .unwrap(),
        ),
    ];

    for shape in &shapes {
        for border_only in [false, true] {
            let serial = shape.find_points(border_only);
            let parallel = partitioned_scan(shape.as_ref(), border_only, 7);
            assert_eq!(parallel, serial, "Claim 30 FALSIFIED");
        }
    }
}

/// Claim 31: scans are deterministic across repeated calls
#[test]
fn claim_31_scans_deterministic() {
    let circle = Circle::new(Point::new(3, 3), 25).unwrap();
    let first = circle.find_points(false);
    let runs: Vec<Vec<Point>> = (0..8).into_par_iter().map(|_| circle.find_points(false)).collect();

    for run in runs {
        assert_eq!(run, first);
    }
}
