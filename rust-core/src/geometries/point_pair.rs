// Point-pair module: lines, rays and segments defined by two points
// Slope, intercept, closest-point and hashing logic shared by every pair kind.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::config::GeometryConfig;
use crate::geometries::geometry2d_bounding_box::BoundingBox2D;
use crate::geometries::point::{self, Point};

/// How far a point pair extends past its endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairKind {
    /// Infinite in both directions
    Line,
    /// Starts at `a`, passes through `b` and continues past it
    Ray,
    /// Bounded by `a` and `b`
    Segment,
}

impl PairKind {
    pub fn name(&self) -> &'static str {
        match self {
            PairKind::Line => "line",
            PairKind::Ray => "ray",
            PairKind::Segment => "segment",
        }
    }

    /// Clamp a line parameter (0 at `a`, 1 at `b`) to the valid range of this kind
    #[inline]
    pub fn clamp_parameter(&self, t: f64) -> f64 {
        match self {
            PairKind::Line => t,
            PairKind::Ray => t.max(0.0),
            PairKind::Segment => t.clamp(0.0, 1.0),
        }
    }
}

/// Two points interpreted as a line, ray or segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPair {
    pub a: Point,
    pub b: Point,
    pub kind: PairKind,
}

impl PointPair {
    pub fn new(a: Point, b: Point, kind: PairKind) -> Self {
        Self { a, b, kind }
    }

    pub fn line(a: Point, b: Point) -> Self {
        Self::new(a, b, PairKind::Line)
    }

    pub fn ray(a: Point, b: Point) -> Self {
        Self::new(a, b, PairKind::Ray)
    }

    pub fn segment(a: Point, b: Point) -> Self {
        Self::new(a, b, PairKind::Segment)
    }

    /// `b - a`
    #[inline]
    pub fn direction(&self) -> Point {
        self.b - self.a
    }

    /// Distance between the defining points
    pub fn length(&self) -> f64 {
        point::distance(self.a, self.b)
    }

    pub fn midpoint(&self) -> Point {
        point::midpoint(self.a, self.b)
    }

    /// Identical endpoints: such a pair contains nothing and intersects nothing
    pub fn is_degenerate(&self, config: &GeometryConfig) -> bool {
        point::points_equal(self.a, self.b, config)
    }

    /// Slope dy/dx; vertical pairs report ±∞ by the sign of dy, never NaN
    pub fn slope(&self) -> f64 {
        let d = self.direction();
        if d.x == 0.0 {
            if d.y < 0.0 {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        } else {
            d.y / d.x
        }
    }

    /// y where the infinite line crosses x = 0, `None` for vertical lines
    pub fn y_intercept(&self) -> Option<f64> {
        let slope = self.slope();
        slope.is_finite().then(|| self.a.y - slope * self.a.x)
    }

    /// y on this pair at `x`, `None` for vertical pairs or outside the extent
    pub fn y_at_x(&self, x: f64) -> Option<f64> {
        self.y_at_x_with(x, &GeometryConfig::default())
    }

    pub fn y_at_x_with(&self, x: f64, config: &GeometryConfig) -> Option<f64> {
        let slope = self.slope();
        if !slope.is_finite() {
            return None;
        }
        let y = self.a.y + slope * (x - self.a.x);
        self.within_extent(Vector2::new(x, y), config).then_some(y)
    }

    /// x on this pair at `y`, `None` for horizontal pairs or outside the extent
    pub fn x_at_y(&self, y: f64) -> Option<f64> {
        self.x_at_y_with(y, &GeometryConfig::default())
    }

    pub fn x_at_y_with(&self, y: f64, config: &GeometryConfig) -> Option<f64> {
        let d = self.direction();
        if d.y == 0.0 {
            return None;
        }
        let x = self.a.x + d.x * (y - self.a.y) / d.y;
        self.within_extent(Vector2::new(x, y), config).then_some(x)
    }

    /// Closest point on this pair to `p`
    ///
    /// Projects onto the infinite line, then clamps to the ray/segment parameter range.
    /// A degenerate pair returns `a`.
    pub fn closest_point(&self, p: Point) -> Point {
        let d = self.direction();
        let len_sq = d.norm_squared();
        if len_sq == 0.0 {
            return self.a;
        }
        let t = (p - self.a).dot(&d) / len_sq;
        self.a + d * self.kind.clamp_parameter(t)
    }

    pub fn distance_to_point(&self, p: Point) -> f64 {
        point::distance(self.closest_point(p), p)
    }

    /// `p` lies on this pair within tolerance
    pub fn contains_point(&self, p: Point, config: &GeometryConfig) -> bool {
        point::points_equal(self.closest_point(p), p, config)
    }

    /// Whether a point assumed to lie on the infinite line also lies within the extent
    ///
    /// Rays reject points behind `a`; segments additionally reject points past `b`.
    pub fn within_extent(&self, p: Point, config: &GeometryConfig) -> bool {
        match self.kind {
            PairKind::Line => true,
            PairKind::Ray => !lies_behind(p, self.a, self.b, config),
            PairKind::Segment => {
                !lies_behind(p, self.a, self.b, config) && !lies_behind(p, self.b, self.a, config)
            }
        }
    }

    /// Axis-aligned bounds; rays and lines extend to infinity along their direction
    pub fn bounds(&self) -> BoundingBox2D {
        let (min_x, max_x) = extent_on_axis(self.a.x, self.b.x, self.kind);
        let (min_y, max_y) = extent_on_axis(self.a.y, self.b.y, self.kind);
        BoundingBox2D::new(Vector2::new(min_x, min_y), Vector2::new(max_x, max_y))
    }

    pub fn translate(&self, offset: Point) -> Self {
        Self::new(self.a + offset, self.b + offset, self.kind)
    }

    pub fn rotate(&self, angle: f64, center: Point) -> Self {
        Self::new(
            point::rotate(self.a, angle, center),
            point::rotate(self.b, angle, center),
            self.kind,
        )
    }

    /// Same kind and endpoints; segments and lines ignore endpoint order
    pub fn approx_eq(&self, other: &PointPair, config: &GeometryConfig) -> bool {
        if self.kind != other.kind {
            return false;
        }
        let same = point::points_equal(self.a, other.a, config)
            && point::points_equal(self.b, other.b, config);
        match self.kind {
            PairKind::Ray => same,
            PairKind::Line | PairKind::Segment => {
                same || (point::points_equal(self.a, other.b, config)
                    && point::points_equal(self.b, other.a, config))
            }
        }
    }

    /// Deterministic key; `Segment(a, b)` and `Segment(b, a)` share it, rays keep their direction
    pub fn hash_key(&self, config: &GeometryConfig) -> String {
        let mut ends = [
            point::point_hash(self.a, config),
            point::point_hash(self.b, config),
        ];
        if self.kind != PairKind::Ray {
            ends.sort();
        }
        format!("{}:{}", self.kind.name(), ends.join(";"))
    }
}

/// `p` lies strictly on the far side of `origin` from `toward`
///
/// Compares signs along the dominant axis of `toward - origin`. A point equal to
/// `origin` within tolerance is never behind it.
pub fn lies_behind(p: Point, origin: Point, toward: Point, config: &GeometryConfig) -> bool {
    if point::points_equal(p, origin, config) {
        return false;
    }
    let d = toward - origin;
    let offset = p - origin;
    let (along, reach) = if d.x.abs() >= d.y.abs() {
        (d.x, offset.x)
    } else {
        (d.y, offset.y)
    };
    let reach_sign = config.sign(reach);
    reach_sign != 0 && reach_sign != config.sign(along)
}

fn extent_on_axis(a: f64, b: f64, kind: PairKind) -> (f64, f64) {
    let (lo, hi) = (a.min(b), a.max(b));
    match kind {
        PairKind::Segment => (lo, hi),
        _ if a == b => (lo, hi),
        PairKind::Line => (f64::NEG_INFINITY, f64::INFINITY),
        PairKind::Ray if b > a => (a, f64::INFINITY),
        PairKind::Ray => (f64::NEG_INFINITY, a),
    }
}
