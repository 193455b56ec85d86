// Point algebra module: vector operations on 2D points
// Points and vectors share one representation; add/subtract are nalgebra's `+`/`-`.

use std::f64::consts::{PI, TAU};

use nalgebra::Vector2;

use crate::config::GeometryConfig;
use crate::geometries::point_pair::PointPair;

/// A 2D point (or free vector)
pub type Point = Vector2<f64>;

#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Vector2::new(x, y)
}

/// Uniform scaling
#[inline]
pub fn scale(p: Point, factor: f64) -> Point {
    p * factor
}

/// Componentwise scaling
#[inline]
pub fn scale_by(p: Point, factors: Point) -> Point {
    p.component_mul(&factors)
}

#[inline]
pub fn dot(a: Point, b: Point) -> f64 {
    a.dot(&b)
}

/// z-component of the 3D cross product
#[inline]
pub fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

#[inline]
pub fn length(p: Point) -> f64 {
    p.norm()
}

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).norm()
}

#[inline]
pub fn distance_squared(a: Point, b: Point) -> f64 {
    (a - b).norm_squared()
}

#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    (a + b) / 2.0
}

/// Rescale `p` to `target_length`
///
/// A zero-length vector, or a requested length of 0, yields the zero vector.
pub fn normalized(p: Point, target_length: f64) -> Point {
    let len = p.norm();
    if len == 0.0 || target_length == 0.0 {
        return Point::zeros();
    }
    p * (target_length / len)
}

/// Rotate `p` by `angle` radians around `center`
pub fn rotate(p: Point, angle: f64, center: Point) -> Point {
    let (sin, cos) = angle.sin_cos();
    let d = p - center;
    Vector2::new(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}

/// Mirror `p` across the infinite line through `over`
///
/// A degenerate line mirrors through its single point.
pub fn reflect(p: Point, over: &PointPair) -> Point {
    let direction = over.b - over.a;
    if direction.norm_squared() == 0.0 {
        return over.a * 2.0 - p;
    }
    let foot = over.a + project(p - over.a, direction);
    foot * 2.0 - p
}

/// Linear interpolation, `t = 0` gives `a`, `t = 1` gives `b`
#[inline]
pub fn lerp(a: Point, b: Point, t: f64) -> Point {
    a + (b - a) * t
}

/// Vector projection of `p` onto `onto`; zero when `onto` has zero length
pub fn project(p: Point, onto: Point) -> Point {
    let len_sq = onto.norm_squared();
    if len_sq == 0.0 {
        return Point::zeros();
    }
    onto * (p.dot(&onto) / len_sq)
}

/// Polar angle of `p` in (-π, π]
#[inline]
pub fn angle(p: Point) -> f64 {
    p.y.atan2(p.x)
}

/// Polar angle of `to` as seen from `from`, wrapped to [0, 2π)
pub fn angle_between(from: Point, to: Point) -> f64 {
    let a = angle(to - from);
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}

/// Signed shortest angular delta from `from` to `to`, in (-π, π]
pub fn angle_difference(to: f64, from: f64) -> f64 {
    let delta = (to - from).rem_euclid(TAU);
    if delta > PI {
        delta - TAU
    } else {
        delta
    }
}

/// Tolerance equality: squared distance below epsilon
#[inline]
pub fn points_equal(a: Point, b: Point, config: &GeometryConfig) -> bool {
    distance_squared(a, b) < config.epsilon
}

/// Rounded string key, e.g. `"1.000000,2.500000"`
pub fn point_hash(p: Point, config: &GeometryConfig) -> String {
    format!(
        "{},{}",
        config.hash_coordinate(p.x),
        config.hash_coordinate(p.y)
    )
}

/// Signed doubled area of the triangle (a, b, c): positive when counter-clockwise
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> f64 {
    cross(b - a, c - a)
}
