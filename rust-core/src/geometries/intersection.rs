// Intersection engine: exact intersection points between point pairs, circles and shapes
//
// Pair/pair intersections solve the 2x2 system built from each pair's implicit
// line equation `dy·x - dx·y = c`; circle cases substitute slope-intercept form
// into the circle equation. Ray and segment extents are enforced afterwards with
// the shared same-side-of-point predicate.

use nalgebra::Vector2;

use crate::config::GeometryConfig;
use crate::geometries::geometry2d::{Circle, Geometry2D};
use crate::geometries::point::{self, Point};
use crate::geometries::point_pair::PointPair;
use crate::geometries::shape::Shape;

// ======================== PAIR / PAIR ========================

/// Intersection point of two point pairs, honoring ray and segment extents
///
/// Parallel pairs never intersect. Coincident (overlapping) pairs are reported
/// as non-intersecting as well; callers rely on that null result, so overlap is
/// not resolved into a point here.
pub fn intersect_pairs(p: &PointPair, q: &PointPair) -> Option<Point> {
    intersect_pairs_with(p, q, &GeometryConfig::default())
}

pub fn intersect_pairs_with(p: &PointPair, q: &PointPair, config: &GeometryConfig) -> Option<Point> {
    if p.is_degenerate(config) || q.is_degenerate(config) {
        return None;
    }
    let (a1, b1, c1) = implicit_line(p);
    let (a2, b2, c2) = implicit_line(q);

    // Normalized by both lengths so the parallel test reads as sin(angle) ≈ 0
    let det = a1 * b2 - a2 * b1;
    if config.approx_zero(det / (p.length() * q.length())) {
        return None;
    }

    let candidate = Vector2::new((b2 * c1 - b1 * c2) / det, (a1 * c2 - a2 * c1) / det);
    (p.within_extent(candidate, config) && q.within_extent(candidate, config)).then_some(candidate)
}

/// Coefficients (A, B, C) of `A·x + B·y = C` with A = dy, B = -dx
fn implicit_line(pair: &PointPair) -> (f64, f64, f64) {
    let d = pair.direction();
    let (a, b) = (d.y, -d.x);
    (a, b, a * pair.a.x + b * pair.a.y)
}

// ======================== CIRCLE / PAIR ========================

/// Points where a point pair crosses or touches a circle
///
/// Zero, one (tangent) or two points; order carries no meaning.
pub fn intersect_circle_pair(circle: &Circle, pair: &PointPair) -> Vec<Point> {
    intersect_circle_pair_with(circle, pair, &GeometryConfig::default())
}

pub fn intersect_circle_pair_with(
    circle: &Circle,
    pair: &PointPair,
    config: &GeometryConfig,
) -> Vec<Point> {
    if pair.is_degenerate(config) {
        return Vec::new();
    }
    let d = pair.direction();
    let h = circle.center;

    // Solve along the dominant axis so steep lines never divide by a tiny dx
    let candidates: Vec<Point> = if d.x.abs() >= d.y.abs() {
        let slope = d.y / d.x;
        let intercept = pair.a.y - slope * pair.a.x;
        solve_line_circle(slope, intercept, h.x, h.y, circle.radius, config)
            .into_iter()
            .map(|x| Vector2::new(x, slope * x + intercept))
            .collect()
    } else {
        let slope = d.x / d.y;
        let intercept = pair.a.x - slope * pair.a.y;
        solve_line_circle(slope, intercept, h.y, h.x, circle.radius, config)
            .into_iter()
            .map(|y| Vector2::new(slope * y + intercept, y))
            .collect()
    };

    candidates
        .into_iter()
        .filter(|&c| pair.within_extent(c, config))
        .collect()
}

/// Roots `u` of `(u - cu)² + (m·u + k - cv)² = r²`
fn solve_line_circle(m: f64, k: f64, cu: f64, cv: f64, r: f64, config: &GeometryConfig) -> Vec<f64> {
    let a = 1.0 + m * m;
    let b = 2.0 * (m * (k - cv) - cu);
    let c = cu * cu + (k - cv) * (k - cv) - r * r;
    let discriminant = b * b - 4.0 * a * c;

    // Squared half-chord along the solved axis
    let half_chord_sq = discriminant / (4.0 * a * a);
    if config.approx_zero(half_chord_sq) {
        vec![-b / (2.0 * a)]
    } else if half_chord_sq < 0.0 {
        Vec::new()
    } else {
        let root = discriminant.sqrt();
        vec![(-b - root) / (2.0 * a), (-b + root) / (2.0 * a)]
    }
}

// ======================== PAIR / SHAPE ========================

/// Every point where `pair` meets the boundary of `shape`
pub fn pair_shape_intersections(pair: &PointPair, shape: &Shape, config: &GeometryConfig) -> Vec<Point> {
    let mut found = Vec::new();
    match shape {
        Shape::Point(p) => {
            if pair.contains_point(*p, config) {
                found.push(*p);
            }
        }
        Shape::Circle(circle) => found.extend(intersect_circle_pair_with(circle, pair, config)),
        Shape::Rectangle(rect) => found.extend(segment_hits(pair, &rect.segments(), config)),
        Shape::Triangle(triangle) => found.extend(segment_hits(pair, &triangle.segments(), config)),
        Shape::Polygon(polygon) => found.extend(segment_hits(pair, &polygon.segments(), config)),
        Shape::Pair(other) => found.extend(intersect_pairs_with(pair, other, config)),
    }
    dedup_points(found, config)
}

/// Intersection points of `pair` against a list of shapes, duplicates removed
pub fn intersections(pair: &PointPair, shapes: &[Shape]) -> Vec<Point> {
    intersections_with(pair, shapes, &GeometryConfig::default())
}

pub fn intersections_with(pair: &PointPair, shapes: &[Shape], config: &GeometryConfig) -> Vec<Point> {
    let found = shapes
        .iter()
        .flat_map(|shape| pair_shape_intersections(pair, shape, config))
        .collect();
    dedup_points(found, config)
}

/// Speculative query: `pair` as if moved by `offset`
pub fn intersections_with_offset(pair: &PointPair, shapes: &[Shape], offset: Point) -> Vec<Point> {
    intersections(&pair.translate(offset), shapes)
}

fn segment_hits(pair: &PointPair, segments: &[PointPair], config: &GeometryConfig) -> Vec<Point> {
    segments
        .iter()
        .filter_map(|segment| intersect_pairs_with(pair, segment, config))
        .collect()
}

/// Drop tolerance-equal points, keeping the first occurrence
fn dedup_points(points: Vec<Point>, config: &GeometryConfig) -> Vec<Point> {
    let mut unique: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        if !unique.iter().any(|&q| point::points_equal(p, q, config)) {
            unique.push(p);
        }
    }
    unique
}
