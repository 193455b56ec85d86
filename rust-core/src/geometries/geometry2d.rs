use std::f64::consts::PI;

use nalgebra::Vector2;

use crate::config::GeometryConfig;
use crate::geometries::geometry2d_bounding_box::BoundingBox2D;
use crate::geometries::point::{self, Point};
use crate::geometries::point_pair::PointPair;

/// Operations every closed 2D shape provides
///
/// Shapes are immutable values: `translate` returns a new shape.
pub trait Geometry2D: std::fmt::Debug {
    /// Closed containment: points on the boundary are inside
    fn contains_point(&self, point: Point, config: &GeometryConfig) -> bool;

    /// Axis-aligned bounds
    fn bounding_box(&self) -> BoundingBox2D;

    /// Centroid (circle center, rectangle middle, area-weighted polygon centroid)
    fn center(&self) -> Point;

    fn area(&self) -> f64;

    /// Corner points in boundary order, empty for circles
    fn vertices(&self) -> Vec<Point>;

    /// Boundary as closed loop of segments, empty for circles
    fn segments(&self) -> Vec<PointPair>;

    fn translate(&self, offset: Point) -> Self
    where
        Self: Sized;

    /// Tolerance equality against a shape of the same kind
    fn approx_eq(&self, other: &Self, config: &GeometryConfig) -> bool
    where
        Self: Sized;

    /// Rounded string key; shapes equal under `approx_eq` share it
    fn hash_key(&self, config: &GeometryConfig) -> String;

    /// Euclidean distance from `point` to the shape, 0 when contained
    fn distance_to_point(&self, point: Point, config: &GeometryConfig) -> f64 {
        if self.contains_point(point, config) {
            return 0.0;
        }
        self.segments()
            .iter()
            .map(|segment| segment.distance_to_point(point))
            .fold(f64::INFINITY, f64::min)
    }
}

// ======================== CIRCLE ========================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(radius >= 0.0, "Circle radius must be non-negative");
        Self { center, radius }
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    pub fn rotate(&self, angle: f64, center: Point) -> Self {
        Self::new(point::rotate(self.center, angle, center), self.radius)
    }
}

impl Geometry2D for Circle {
    fn contains_point(&self, point: Point, config: &GeometryConfig) -> bool {
        config.le(point::distance(point, self.center), self.radius)
    }

    fn bounding_box(&self) -> BoundingBox2D {
        let extent = Vector2::new(self.radius, self.radius);
        BoundingBox2D::new(self.center - extent, self.center + extent)
    }

    fn center(&self) -> Point {
        self.center
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn vertices(&self) -> Vec<Point> {
        Vec::new()
    }

    fn segments(&self) -> Vec<PointPair> {
        Vec::new()
    }

    fn translate(&self, offset: Point) -> Self {
        Self::new(self.center + offset, self.radius)
    }

    fn approx_eq(&self, other: &Self, config: &GeometryConfig) -> bool {
        point::points_equal(self.center, other.center, config)
            && config.approx_eq(self.radius, other.radius)
    }

    fn hash_key(&self, config: &GeometryConfig) -> String {
        format!(
            "circle:{};{}",
            point::point_hash(self.center, config),
            config.hash_coordinate(self.radius)
        )
    }

    fn distance_to_point(&self, point: Point, _config: &GeometryConfig) -> f64 {
        (point::distance(point, self.center) - self.radius).max(0.0)
    }
}

// ======================== RECTANGLE ========================

/// Axis-aligned rectangle; (x, y) is the minimum (top-left) corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        debug_assert!(w >= 0.0 && h >= 0.0, "Rectangle size must be non-negative");
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Rotated rectangles are no longer axis-aligned, so rotation yields a polygon
    pub fn rotate(&self, angle: f64, center: Point) -> Polygon {
        Polygon::new(
            self.vertices()
                .into_iter()
                .map(|v| point::rotate(v, angle, center))
                .collect(),
        )
    }
}

impl Geometry2D for Rectangle {
    fn contains_point(&self, point: Point, config: &GeometryConfig) -> bool {
        BoundingBox2D::from(*self).contains(point, config)
    }

    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::from(*self)
    }

    fn center(&self) -> Point {
        Vector2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    fn area(&self) -> f64 {
        self.w * self.h
    }

    /// Corners starting at (x, y), positive signed area order
    fn vertices(&self) -> Vec<Point> {
        vec![
            Vector2::new(self.x, self.y),
            Vector2::new(self.right(), self.y),
            Vector2::new(self.right(), self.bottom()),
            Vector2::new(self.x, self.bottom()),
        ]
    }

    fn segments(&self) -> Vec<PointPair> {
        closed_loop(&self.vertices())
    }

    fn translate(&self, offset: Point) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }

    fn approx_eq(&self, other: &Self, config: &GeometryConfig) -> bool {
        config.approx_eq(self.x, other.x)
            && config.approx_eq(self.y, other.y)
            && config.approx_eq(self.w, other.w)
            && config.approx_eq(self.h, other.h)
    }

    fn hash_key(&self, config: &GeometryConfig) -> String {
        format!(
            "rectangle:{};{};{};{}",
            config.hash_coordinate(self.x),
            config.hash_coordinate(self.y),
            config.hash_coordinate(self.w),
            config.hash_coordinate(self.h)
        )
    }
}

// ======================== TRIANGLE ========================

/// Triangle over three points; colinear triangles are allowed and have zero area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// Positive when a → b → c runs counter-clockwise
    pub fn signed_area(&self) -> f64 {
        point::orientation(self.a, self.b, self.c) / 2.0
    }

    pub fn is_degenerate(&self, config: &GeometryConfig) -> bool {
        config.approx_zero(self.signed_area())
    }

    /// Circle through all three vertices, `None` for colinear triangles
    pub fn circumcircle(&self, config: &GeometryConfig) -> Option<Circle> {
        let (a, b, c) = (self.a, self.b, self.c);
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        if config.approx_zero(d) {
            return None;
        }
        let a_sq = a.norm_squared();
        let b_sq = b.norm_squared();
        let c_sq = c.norm_squared();
        let center = Vector2::new(
            (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d,
            (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d,
        );
        Some(Circle::new(center, point::distance(center, a)))
    }

    /// Whether `p` is one of the three vertices
    pub fn has_vertex(&self, p: Point, config: &GeometryConfig) -> bool {
        [self.a, self.b, self.c]
            .iter()
            .any(|&v| point::points_equal(v, p, config))
    }

    pub fn rotate(&self, angle: f64, center: Point) -> Self {
        Self::new(
            point::rotate(self.a, angle, center),
            point::rotate(self.b, angle, center),
            point::rotate(self.c, angle, center),
        )
    }
}

impl Geometry2D for Triangle {
    /// Barycentric sign test; a point is inside unless it sees edges with opposite signs
    fn contains_point(&self, p: Point, config: &GeometryConfig) -> bool {
        if self.is_degenerate(config) {
            return self.segments().iter().any(|s| s.contains_point(p, config));
        }
        let signs = [
            config.sign(point::orientation(self.a, self.b, p)),
            config.sign(point::orientation(self.b, self.c, p)),
            config.sign(point::orientation(self.c, self.a, p)),
        ];
        let has_negative = signs.iter().any(|&s| s < 0);
        let has_positive = signs.iter().any(|&s| s > 0);
        !(has_negative && has_positive)
    }

    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::from_points(self.vertices()).unwrap_or_default()
    }

    fn center(&self) -> Point {
        (self.a + self.b + self.c) / 3.0
    }

    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    fn vertices(&self) -> Vec<Point> {
        vec![self.a, self.b, self.c]
    }

    fn segments(&self) -> Vec<PointPair> {
        closed_loop(&self.vertices())
    }

    fn translate(&self, offset: Point) -> Self {
        Self::new(self.a + offset, self.b + offset, self.c + offset)
    }

    /// Same vertex set, in any order
    fn approx_eq(&self, other: &Self, config: &GeometryConfig) -> bool {
        [self.a, self.b, self.c]
            .iter()
            .all(|&v| other.has_vertex(v, config))
            && [other.a, other.b, other.c]
                .iter()
                .all(|&v| self.has_vertex(v, config))
    }

    fn hash_key(&self, config: &GeometryConfig) -> String {
        let mut keys: Vec<String> = self
            .vertices()
            .into_iter()
            .map(|v| point::point_hash(v, config))
            .collect();
        keys.sort();
        format!("triangle:{}", keys.join(";"))
    }
}

// ======================== POLYGON ========================

/// Polygon over an ordered, counter-clockwise vertex list
///
/// Simplicity is not checked; self-intersecting outlines get best-effort answers
/// through the winding-number containment rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Create a regular polygon with its first vertex on the +x axis
    pub fn regular(center: Point, radius: f64, sides: usize) -> Self {
        let angle_step = 2.0 * PI / sides as f64;
        let vertices = (0..sides)
            .map(|i| {
                let angle = i as f64 * angle_step;
                center + Vector2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        Self { vertices }
    }

    /// Shoelace area, positive for counter-clockwise outlines
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        (0..n)
            .map(|i| point::cross(self.vertices[i], self.vertices[(i + 1) % n]))
            .sum::<f64>()
            / 2.0
    }

    /// Signed number of times the outline wraps around `p`
    pub fn winding_number(&self, p: Point) -> i32 {
        let n = self.vertices.len();
        if n < 3 {
            return 0;
        }
        let mut winding = 0;
        for i in 0..n {
            let v1 = self.vertices[i];
            let v2 = self.vertices[(i + 1) % n];
            let side = point::orientation(v1, v2, p);
            if v1.y <= p.y {
                if v2.y > p.y && side > 0.0 {
                    winding += 1;
                }
            } else if v2.y <= p.y && side < 0.0 {
                winding -= 1;
            }
        }
        winding
    }

    pub fn rotate(&self, angle: f64, center: Point) -> Self {
        Self::new(
            self.vertices
                .iter()
                .map(|&v| point::rotate(v, angle, center))
                .collect(),
        )
    }
}

impl Geometry2D for Polygon {
    /// Nonzero winding number, or on the outline; an empty polygon contains nothing
    fn contains_point(&self, p: Point, config: &GeometryConfig) -> bool {
        if self.vertices.is_empty() {
            return false;
        }
        self.winding_number(p) != 0 || self.segments().iter().any(|s| s.contains_point(p, config))
            || (self.vertices.len() == 1 && point::points_equal(self.vertices[0], p, config))
    }

    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::from_points(self.vertices.iter().copied()).unwrap_or_default()
    }

    /// Area-weighted centroid, vertex average for degenerate outlines
    fn center(&self) -> Point {
        let n = self.vertices.len();
        if n == 0 {
            return Point::zeros();
        }
        let signed_area = self.signed_area();
        if signed_area.abs() < f64::EPSILON {
            let sum: Point = self.vertices.iter().sum();
            return sum / n as f64;
        }
        let weighted: Point = (0..n)
            .map(|i| {
                let v1 = self.vertices[i];
                let v2 = self.vertices[(i + 1) % n];
                (v1 + v2) * point::cross(v1, v2)
            })
            .sum();
        weighted / (6.0 * signed_area)
    }

    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    fn vertices(&self) -> Vec<Point> {
        self.vertices.clone()
    }

    fn segments(&self) -> Vec<PointPair> {
        closed_loop(&self.vertices)
    }

    fn translate(&self, offset: Point) -> Self {
        Self::new(self.vertices.iter().map(|&v| v + offset).collect())
    }

    /// Same outline up to a cyclic shift of the starting vertex
    fn approx_eq(&self, other: &Self, config: &GeometryConfig) -> bool {
        let n = self.vertices.len();
        if n != other.vertices.len() {
            return false;
        }
        if n == 0 {
            return true;
        }
        (0..n).any(|shift| {
            (0..n).all(|i| {
                point::points_equal(self.vertices[i], other.vertices[(i + shift) % n], config)
            })
        })
    }

    /// Vertex keys in order, rotated to start at the smallest key
    fn hash_key(&self, config: &GeometryConfig) -> String {
        let keys: Vec<String> = self
            .vertices
            .iter()
            .map(|&v| point::point_hash(v, config))
            .collect();
        let start = keys
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let rotated: Vec<&str> = keys[start..]
            .iter()
            .chain(keys[..start].iter())
            .map(String::as_str)
            .collect();
        format!("polygon:{}", rotated.join(";"))
    }
}

/// Segments joining consecutive vertices, closing back to the first
///
/// Two vertices give a single segment, fewer give none.
pub fn closed_loop(vertices: &[Point]) -> Vec<PointPair> {
    match vertices.len() {
        0 | 1 => Vec::new(),
        2 => vec![PointPair::segment(vertices[0], vertices[1])],
        n => (0..n)
            .map(|i| PointPair::segment(vertices[i], vertices[(i + 1) % n]))
            .collect(),
    }
}
