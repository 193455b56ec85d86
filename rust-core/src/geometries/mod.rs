// Geometries module: shape representations, point algebra and the collision matrix
// This module provides every 2D primitive the engine's colliders, spatial index and renderer consume

// ======================== MODULE DECLARATIONS ========================
pub mod collider;
pub mod collision;
pub mod geometry2d;
pub mod geometry2d_bounding_box;
pub mod intersection;
pub mod point;
pub mod point_pair;
pub mod shape;

// Test modules
mod _tests_collider;
mod _tests_intersection;
mod _tests_point;

// ======================== POINT ALGEBRA ========================
pub use point::Point; // type - nalgebra::Vector2<f64>, doubles as point and free vector
// point free functions:
//   point(x, y) -> Point                                  - constructor shorthand
//   scale(p, factor) / scale_by(p, factors) -> Point      - uniform / componentwise scaling
//   dot(a, b) / cross(a, b) -> f64                        - dot product / z of the 3D cross product
//   length(p) / distance(a, b) / distance_squared(a, b)   - Euclidean measures
//   normalized(p, target_length) -> Point                 - rescale, zero vector for zero input
//   rotate(p, angle, center) -> Point                     - rotation in radians around a center
//   reflect(p, over: &PointPair) -> Point                 - mirror across an infinite line
//   lerp(a, b, t) / project(p, onto) / midpoint(a, b)     - interpolation and projection
//   angle(p) / angle_between(from, to)                    - polar angles, (-π, π] and [0, 2π)
//   angle_difference(to, from) -> f64                     - signed shortest delta in (-π, π]
//   points_equal(a, b, config) / point_hash(p, config)    - tolerance equality and rounded key
//   orientation(a, b, c) -> f64                           - doubled signed triangle area

// ======================== POINT PAIRS ========================
pub use point_pair::{
    PairKind,  // enum - Line (infinite), Ray (from a through b), Segment (bounded)
    PointPair, // struct - two points plus a PairKind
};
// PointPair impl methods:
//   line(a, b) / ray(a, b) / segment(a, b) -> Self       - constructors per kind
//   slope(&self) -> f64                                   - ±∞ for vertical pairs, never NaN
//   y_intercept / y_at_x / x_at_y -> Option<f64>          - None outside the extent
//   closest_point(&self, p) -> Point                      - projection clamped to the extent
//   contains_point / within_extent / is_degenerate        - tolerance predicates
//   bounds / translate / rotate / hash_key / approx_eq    - shared shape operations

// ======================== SHAPES ========================
pub use geometry2d::{
    Circle,     // struct - center + radius
    Geometry2D, // trait - per-shape operations (bounds, center, area, vertices, segments, ...)
    Polygon,    // struct - counter-clockwise vertex list, winding-number containment
    Rectangle,  // struct - axis-aligned (x, y, w, h), (x, y) is the top-left corner
    Triangle,   // struct - three points, may be degenerate
};
// Geometry2D trait methods:
//   contains_point(&self, point, config) -> bool          - closed containment
//   bounding_box(&self) -> BoundingBox2D                  - axis-aligned bounds
//   center(&self) -> Point                                - centroid
//   area(&self) -> f64                                    - enclosed area
//   vertices(&self) / segments(&self)                     - outline for rendering and collision
//   translate(&self, offset) -> Self                      - moved copy
//   approx_eq(&self, other, config) / hash_key(&self, config) - tolerance equality and key
//   distance_to_point(&self, point, config) -> f64        - 0 when contained

pub use shape::{
    Shape,     // enum - tagged union over all shapes, used for heterogeneous dispatch
    ShapeKind, // enum - the eight kinds, plus structural JSON classification
};

pub use geometry2d_bounding_box::BoundingBox2D; // struct - min/max corners, may be infinite

// ======================== QUERIES ========================
pub use intersection::{
    intersect_circle_pair, // fn(&Circle, &PointPair) -> Vec<Point>
    intersect_pairs,       // fn(&PointPair, &PointPair) -> Option<Point>
    intersections,         // fn(&PointPair, &[Shape]) -> Vec<Point>
};
pub use collision::{
    collide,        // fn(&Shape, &Shape) -> bool
    collide_offset, // fn(&Shape, &Shape, offset_a, offset_b) -> bool
    collide_values, // fn(&Value, &Value) -> Result<bool, GeometryError>
    collide_with,   // fn(&Shape, &Shape, offset_a, offset_b, &GeometryConfig) -> bool
    rect_point,     // fn(x, y, w, h, px, py) -> bool - closed, for the spatial index
    rect_rect,      // fn(x1, y1, w1, h1, x2, y2, w2, h2) -> bool - strict, for the spatial index
};
pub use collider::Collider; // struct - local shape + explicitly recomputed world bounds
