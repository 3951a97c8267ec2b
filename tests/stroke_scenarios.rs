#![allow(clippy::unwrap_used)]

use approx::assert_abs_diff_eq;
use outline_stroke::geometry::{Curve, Hermite};
use outline_stroke::math::{Point2, Vector2};
use outline_stroke::tessellation::{CenterlineSegment, Join, JoinResolver, Side};
use outline_stroke::{
    PolygonSet, Spline, StrokeConfig, StrokeGenerator, StrokeOutcome, StrokeParams, Stroker,
    TessellateStroke, Vertex,
};

const SAMPLES: usize = 50;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn stroke(spline: &Spline, params: &StrokeParams) -> PolygonSet {
    TessellateStroke::new(spline, params)
        .execute()
        .unwrap()
        .into_polygons()
}

fn points(coords: &[(f64, f64)]) -> Vec<Point2> {
    coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
}

#[test]
fn empty_spline_is_a_warning_not_an_error() {
    init_tracing();
    let outcome = Stroker::default()
        .convert(&Spline::default(), &StrokeParams::default())
        .unwrap();
    assert_eq!(outcome, StrokeOutcome::EmptyInput);
}

#[test]
fn loop_flag_decides_polygon_count() {
    let pts = points(&[(0.0, 0.0), (3.0, 1.0), (2.0, 4.0)]);
    let params = StrokeParams::default();
    assert_eq!(stroke(&Spline::from_points(&pts, false), &params).len(), 1);
    assert_eq!(stroke(&Spline::from_points(&pts, true), &params).len(), 2);
    assert_eq!(stroke(&Spline::default_triangle(), &params).len(), 2);
}

#[test]
fn open_point_count_scales_with_segments() {
    let params = StrokeParams::default().with_round_tips(false, false);
    for n in 2..6 {
        #[allow(clippy::cast_precision_loss)]
        let pts: Vec<Point2> = (0..n)
            .map(|i| Point2::new(i as f64, (i % 2) as f64))
            .collect();
        let set = stroke(&Spline::from_points(&pts, false), &params);
        assert_eq!(set.point_count(), 2 * (n - 1) * (SAMPLES + 1));
    }
}

#[test]
fn capsule_from_two_vertices() {
    let spline = Spline::from_points(&points(&[(0.0, 0.0), (4.0, 0.0)]), false);
    let params = StrokeParams::new(2.0).unwrap().with_round_tips(true, true);
    let set = stroke(&spline, &params);

    assert_eq!(set.len(), 1);
    let outline = &set.polygons[0].points;
    assert_eq!(outline.len(), 2 * SAMPLES + 2 * SAMPLES);

    for p in outline {
        assert!(p.y.abs() <= 1.0 + 1e-9, "point {p:?} outside half-width");
        let mirrored = outline
            .iter()
            .any(|q| (q.x - p.x).abs() < 1e-9 && (q.y + p.y).abs() < 1e-9);
        assert!(mirrored, "point {p:?} has no mirror image");
    }

    let (min, max) = set.bounding_box().unwrap();
    assert_abs_diff_eq!(min.x, -1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(max.x, 5.0, epsilon = 1e-9);
}

#[test]
fn triangle_loop_gets_one_miter_per_corner() {
    let mut spline = Spline::from_points(&points(&[(0.0, 1.0), (0.0, -1.0), (1.0, 0.0)]), true);
    for v in &mut spline.vertices {
        v.split_tangent = true;
    }
    let params = StrokeParams::new(1.0).unwrap().with_sharp_cusps(true);
    let set = stroke(&spline, &params);

    assert_eq!(set.len(), 2);
    let outer = &set.polygons[0].points;
    let inner = &set.polygons[1].points;
    assert_eq!(outer.len(), 3 * (SAMPLES + 1) + 3);
    assert_eq!(inner.len(), 3 * (SAMPLES + 1));

    let v = &spline.vertices;
    let edge = |a: usize, b: usize| v[b].position - v[a].position;
    let normal = |d: Vector2| Vector2::new(d.y, -d.x).normalize();
    let miter = |vertex: Point2, d_in: Vector2, d_out: Vector2| {
        let (n1, n2) = (normal(d_in), normal(d_out));
        vertex + (n1 + n2) * (0.5 / (1.0 + n1.dot(&n2)))
    };

    // walking order starts with the closing edge 2 -> 0
    let expected = [
        (0, miter(v[2].position, edge(1, 2), edge(2, 0))),
        (SAMPLES + 2, miter(v[0].position, edge(2, 0), edge(0, 1))),
        (2 * SAMPLES + 4, miter(v[1].position, edge(0, 1), edge(1, 2))),
    ];
    for (index, point) in expected {
        assert_abs_diff_eq!(outer[index].x, point.x, epsilon = 1e-6);
        assert_abs_diff_eq!(outer[index].y, point.y, epsilon = 1e-6);
    }
}

#[test]
fn default_triangle_with_matching_tangents_stays_smooth() {
    let mut spline = Spline::default_triangle();
    for v in &mut spline.vertices {
        v.split_tangent = true;
    }
    let params = StrokeParams::new(1.0).unwrap().with_sharp_cusps(true);
    let set = stroke(&spline, &params);

    assert_eq!(set.len(), 2);
    assert_eq!(set.polygons[0].len(), 3 * (SAMPLES + 1));
    assert_eq!(set.polygons[1].len(), 3 * (SAMPLES + 1));
}

#[test]
fn default_triangle_with_split_tangents_gets_corner_points() {
    let mut spline = Spline::default_triangle();
    for v in &mut spline.vertices {
        v.tangent_in = Vector2::new(-v.tangent_out.y, v.tangent_out.x);
        v.split_tangent = true;
    }
    let params = StrokeParams::new(1.0).unwrap().with_sharp_cusps(true);
    let set = stroke(&spline, &params);
    let (outer, inner) = (&set.polygons[0].points, &set.polygons[1].points);
    assert_eq!(outer.len() + inner.len(), 6 * (SAMPLES + 1) + 3);

    let config = StrokeConfig::default();
    let adjust = config.cusp_tangent_adjust;
    let resolver = JoinResolver::new(&config);
    let v = &spline.vertices;
    let segment = |a: usize, b: usize| CenterlineSegment::build(&v[a], &v[b], &params).unwrap();
    // the wrap vertex compares against its stored incoming tangent
    let corners = [
        (2, v[2].tangent_in, segment(2, 0)),
        (0, segment(2, 0).trailing_direction(adjust), segment(0, 1)),
        (1, segment(0, 1).trailing_direction(adjust), segment(1, 2)),
    ];
    for (i, last, next) in corners {
        let join = resolver.classify(v[i].position, last, next.leading_direction(adjust), 0.5);
        let Join::Sharp { side, point } = join else {
            panic!("corner at vertex {i} should be sharp, got {join:?}");
        };
        let boundary = match side {
            Side::Outer => outer,
            Side::Inner => inner,
        };
        let found = boundary.iter().any(|p| (*p - point).norm() < 1e-9);
        assert!(found, "corner point {point:?} of vertex {i} missing");
    }
}

fn uneven_speed_outline(homogeneous: bool) -> Vec<(f64, f64)> {
    let spline = Spline::new(
        vec![
            Vertex::new(Point2::new(0.0, 0.0))
                .with_tangent(Vector2::new(20.0, 0.0))
                .with_width(1.0),
            Vertex::new(Point2::new(10.0, 0.0))
                .with_tangent(Vector2::new(2.0, 0.0))
                .with_width(5.0),
        ],
        false,
    );
    let params = StrokeParams::new(2.0)
        .unwrap()
        .with_round_tips(false, false)
        .with_homogeneous_width(homogeneous);
    let set = stroke(&spline, &params);
    // outer side: first SAMPLES + 1 points, offset to -y by the half-width
    set.polygons[0].points[..=SAMPLES]
        .iter()
        .map(|p| (p.x, -p.y))
        .collect()
}

fn width_at(samples: &[(f64, f64)], x: f64) -> f64 {
    let k = samples.iter().rposition(|&(sx, _)| sx <= x).unwrap();
    let (x0, w0) = samples[k];
    let (x1, w1) = samples[k + 1];
    w0 + (w1 - w0) * (x - x0) / (x1 - x0)
}

#[test]
fn homogeneous_width_follows_arc_length() {
    let homogeneous = uneven_speed_outline(true);
    for &(x, w) in &homogeneous {
        assert_abs_diff_eq!(w, 1.0 + 4.0 * x / 10.0, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(width_at(&homogeneous, 5.0), 3.0, epsilon = 1e-9);

    let parametric = uneven_speed_outline(false);
    assert_abs_diff_eq!(parametric[SAMPLES / 2].1, 3.0, epsilon = 1e-9);
    assert!((width_at(&parametric, 5.0) - 3.0).abs() > 0.5);
}

#[test]
fn zero_width_collapses_onto_centerline() {
    let spline = Spline::new(
        vec![
            Vertex::new(Point2::new(0.0, 0.0)).with_tangent(Vector2::new(2.0, 2.0)),
            Vertex::new(Point2::new(3.0, 1.0))
                .with_tangents(Vector2::new(3.0, 0.0), Vector2::new(1.0, -3.0))
                .with_split_tangent(true),
            Vertex::new(Point2::new(5.0, -2.0)).with_tangent(Vector2::new(2.0, -1.0)),
        ],
        false,
    );
    let params = StrokeParams::new(0.0).unwrap();
    let set = stroke(&spline, &params);

    let mut centerline = Vec::new();
    for w in spline.vertices.windows(2) {
        let curve = Hermite::new(w[0].position, w[1].position, w[0].tangent_out, w[1].tangent_in);
        for i in 0..=SAMPLES {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / SAMPLES as f64;
            centerline.push(curve.evaluate(t));
        }
    }

    for p in &set.polygons[0].points {
        let on_curve = centerline.iter().any(|c| (c - p).norm() < 1e-7);
        assert!(on_curve, "point {p:?} left the centerline");
    }
}

#[test]
fn duplicate_vertex_keeps_corner_detection() {
    let corner = |p: Point2| Vertex::new(p).with_split_tangent(true);
    let params = StrokeParams::default().with_round_tips(false, true);

    let reference = Spline::new(
        vec![
            Vertex::new(Point2::new(0.0, 0.0)),
            corner(Point2::new(4.0, 0.0)),
            Vertex::new(Point2::new(4.0, 4.0)),
        ],
        false,
    );
    let duplicated = Spline::new(
        vec![
            Vertex::new(Point2::new(0.0, 0.0)),
            corner(Point2::new(4.0, 0.0)),
            corner(Point2::new(4.0, 0.0)),
            Vertex::new(Point2::new(4.0, 4.0)),
        ],
        false,
    );

    let expected = stroke(&reference, &params);
    let actual = stroke(&duplicated, &params);
    assert_eq!(actual, expected);
    // one miter point on top of the sampled sides and the end cap
    assert_eq!(actual.point_count(), 4 * (SAMPLES + 1) + 1 - 1 + SAMPLES);
}

#[test]
fn leading_duplicate_vertex_is_ignored() {
    let params = StrokeParams::default();
    let plain = Spline::from_points(&points(&[(0.0, 0.0), (4.0, 0.0)]), false);
    let doubled = Spline::from_points(&points(&[(0.0, 0.0), (0.0, 0.0), (4.0, 0.0)]), false);
    assert_eq!(stroke(&doubled, &params), stroke(&plain, &params));
}

#[test]
fn join_classification_sweeps_smooth_sharp_spike() {
    let config = StrokeConfig::default();
    let resolver = JoinResolver::new(&config);
    let threshold_angle = 180.0 - 0.4_f64.asin().to_degrees();

    let mut last_amount = f64::INFINITY;
    for step in 1..180 {
        let deg = f64::from(step);
        let rad = deg.to_radians();
        let join = resolver.classify(
            Point2::origin(),
            Vector2::new(1.0, 0.0),
            Vector2::new(rad.cos(), rad.sin()),
            1.0,
        );
        let cross = rad.sin();
        match join {
            Join::Smooth => assert!(cross <= 0.4 && deg < 60.0, "{deg}° should not be smooth"),
            Join::Sharp { side, .. } => {
                assert_eq!(side, Side::Outer);
                assert!(cross > 0.4, "{deg}° should not be sharp");
            }
            Join::Spike { side, amount, .. } => {
                assert_eq!(side, Side::Outer);
                assert!(deg > threshold_angle, "{deg}° should not spike");
                assert_abs_diff_eq!(amount, 1.0 + cross / 0.4 * 3.0, epsilon = 1e-9);
                assert!((1.0..=4.0).contains(&amount));
                assert!(amount <= last_amount);
                last_amount = amount;
            }
        }
    }
}

#[test]
fn spike_reaches_full_amount_at_threshold() {
    let config = StrokeConfig::default();
    let resolver = JoinResolver::new(&config);
    let edge = std::f64::consts::PI - 0.4_f64.asin();
    let classify = |angle: f64| {
        resolver.classify(
            Point2::origin(),
            Vector2::new(1.0, 0.0),
            Vector2::new(angle.cos(), angle.sin()),
            1.0,
        )
    };

    assert!(matches!(classify(edge - 1e-6), Join::Sharp { .. }));
    let Join::Spike { amount, point, .. } = classify(edge + 1e-6) else {
        panic!("expected spike past the threshold");
    };
    assert_abs_diff_eq!(amount, 4.0, epsilon = 1e-4);
    assert_abs_diff_eq!(point.coords.norm(), amount, epsilon = 1e-9);

    // mirrored turn lands on the inner side
    let past = edge + 1e-6;
    let mirrored = resolver.classify(
        Point2::origin(),
        Vector2::new(1.0, 0.0),
        Vector2::new(past.cos(), -past.sin()),
        1.0,
    );
    assert!(matches!(mirrored, Join::Spike { side: Side::Inner, .. }));
}

#[test]
fn expand_and_canvas_grow_scale_the_outline() {
    let spline = Spline::from_points(&points(&[(0.0, 0.0), (10.0, 0.0)]), false);
    let params = StrokeParams::new(1.0)
        .unwrap()
        .with_expand(0.5)
        .with_canvas_grow(2.0)
        .with_round_tips(false, false);
    let set = stroke(&spline, &params);
    // 2 * (1 * 1 / 2 + 0.5) = 2
    for p in &set.polygons[0].points {
        assert_abs_diff_eq!(p.y.abs(), 2.0, epsilon = 1e-12);
    }
}

#[test]
fn identical_inputs_give_identical_outputs() {
    let spline = Spline::default_triangle();
    let params = StrokeParams::default();
    assert_eq!(stroke(&spline, &params), stroke(&spline, &params));
}
