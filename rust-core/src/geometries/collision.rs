// Collision matrix: boolean collision between any two shape kinds
//
// Each unordered kind pair is implemented once in `dispatch`, in a single arm
// that matches both argument orders. Offsets translate the shapes before
// testing, which lets callers ask "what if this moved" without touching the
// shapes themselves.

use std::borrow::Cow;

use log::trace;
use nalgebra::Vector2;
use serde_json::Value;

use crate::config::GeometryConfig;
use crate::error::GeometryError;
use crate::geometries::geometry2d::{Circle, Geometry2D, Rectangle};
use crate::geometries::geometry2d_bounding_box::BoundingBox2D;
use crate::geometries::intersection::{intersect_circle_pair_with, intersect_pairs_with};
use crate::geometries::point::{self, Point};
use crate::geometries::point_pair::PointPair;
use crate::geometries::shape::Shape;

/// Collision test between two shapes in place
pub fn collide(a: &Shape, b: &Shape) -> bool {
    collide_with(a, b, Point::zeros(), Point::zeros(), &GeometryConfig::default())
}

/// Collision test with each shape shifted by its own offset
pub fn collide_offset(a: &Shape, b: &Shape, offset_a: Point, offset_b: Point) -> bool {
    collide_with(a, b, offset_a, offset_b, &GeometryConfig::default())
}

/// Collision test with explicit offsets and tolerance settings
pub fn collide_with(
    a: &Shape,
    b: &Shape,
    offset_a: Point,
    offset_b: Point,
    config: &GeometryConfig,
) -> bool {
    let a = shifted(a, offset_a);
    let b = shifted(b, offset_b);
    dispatch(&a, &b, config)
}

/// Collision test on structural JSON shape descriptions
///
/// # Errors
/// [`GeometryError::UnrecognizedShapeKind`] if either value is not a shape.
pub fn collide_values(a: &Value, b: &Value) -> Result<bool, GeometryError> {
    let shape_a = Shape::from_value(a)?;
    let shape_b = Shape::from_value(b)?;
    let result = collide(&shape_a, &shape_b);
    trace!(
        "{} vs {}: {}",
        shape_a.kind().name(),
        shape_b.kind().name(),
        result
    );
    Ok(result)
}

fn shifted(shape: &Shape, offset: Point) -> Cow<'_, Shape> {
    if offset == Point::zeros() {
        Cow::Borrowed(shape)
    } else {
        Cow::Owned(shape.translate(offset))
    }
}

fn dispatch(a: &Shape, b: &Shape, config: &GeometryConfig) -> bool {
    // Mixed-kind arms match both argument orders, so the match stays exhaustive
    match (a, b) {
        (Shape::Point(p), Shape::Point(q)) => point::points_equal(*p, *q, config),
        (Shape::Point(p), Shape::Circle(circle)) | (Shape::Circle(circle), Shape::Point(p)) => {
            circle.contains_point(*p, config)
        }
        (Shape::Point(p), Shape::Rectangle(rect)) | (Shape::Rectangle(rect), Shape::Point(p)) => {
            rect.contains_point(*p, config)
        }
        (Shape::Point(p), Shape::Triangle(triangle)) | (Shape::Triangle(triangle), Shape::Point(p)) => {
            triangle.contains_point(*p, config)
        }
        (Shape::Point(p), Shape::Polygon(polygon)) | (Shape::Polygon(polygon), Shape::Point(p)) => {
            polygon.contains_point(*p, config)
        }
        (Shape::Point(p), Shape::Pair(pair)) | (Shape::Pair(pair), Shape::Point(p)) => {
            pair.contains_point(*p, config)
        }

        (Shape::Circle(c1), Shape::Circle(c2)) => {
            config.le(point::distance(c1.center, c2.center), c1.radius + c2.radius)
        }
        (Shape::Circle(circle), Shape::Rectangle(rect)) | (Shape::Rectangle(rect), Shape::Circle(circle)) => {
            circle_rectangle(circle, rect, config)
        }
        (Shape::Circle(circle), Shape::Triangle(triangle))
        | (Shape::Triangle(triangle), Shape::Circle(circle)) => circle_outline(circle, triangle, config),
        (Shape::Circle(circle), Shape::Polygon(polygon))
        | (Shape::Polygon(polygon), Shape::Circle(circle)) => circle_outline(circle, polygon, config),
        (Shape::Circle(circle), Shape::Pair(pair)) | (Shape::Pair(pair), Shape::Circle(circle)) => {
            circle.contains_point(pair.a, config)
                || !intersect_circle_pair_with(circle, pair, config).is_empty()
        }

        (Shape::Rectangle(r1), Shape::Rectangle(r2)) => {
            BoundingBox2D::from(*r1).overlaps(&BoundingBox2D::from(*r2), config)
        }
        (Shape::Rectangle(rect), Shape::Triangle(triangle))
        | (Shape::Triangle(triangle), Shape::Rectangle(rect)) => outlines_collide(rect, triangle, config),
        (Shape::Rectangle(rect), Shape::Polygon(polygon))
        | (Shape::Polygon(polygon), Shape::Rectangle(rect)) => outlines_collide(rect, polygon, config),
        (Shape::Rectangle(rect), Shape::Pair(pair)) | (Shape::Pair(pair), Shape::Rectangle(rect)) => {
            pair_outline(pair, rect, config)
        }

        (Shape::Triangle(t1), Shape::Triangle(t2)) => outlines_collide(t1, t2, config),
        (Shape::Triangle(triangle), Shape::Polygon(polygon))
        | (Shape::Polygon(polygon), Shape::Triangle(triangle)) => outlines_collide(triangle, polygon, config),
        (Shape::Triangle(triangle), Shape::Pair(pair)) | (Shape::Pair(pair), Shape::Triangle(triangle)) => {
            pair_outline(pair, triangle, config)
        }

        (Shape::Polygon(p1), Shape::Polygon(p2)) => outlines_collide(p1, p2, config),
        (Shape::Polygon(polygon), Shape::Pair(pair)) | (Shape::Pair(pair), Shape::Polygon(polygon)) => {
            pair_outline(pair, polygon, config)
        }

        (Shape::Pair(p1), Shape::Pair(p2)) => intersect_pairs_with(p1, p2, config).is_some(),
    }
}

/// Classic AABB-vs-circle: clamp the center into the box and measure
fn circle_rectangle(circle: &Circle, rect: &Rectangle, config: &GeometryConfig) -> bool {
    let closest = Vector2::new(
        circle.center.x.clamp(rect.x, rect.right()),
        circle.center.y.clamp(rect.y, rect.bottom()),
    );
    config.le(point::distance(closest, circle.center), circle.radius)
}

/// Center inside the outline, or some boundary segment within reach of the radius
fn circle_outline<S: Geometry2D>(circle: &Circle, shape: &S, config: &GeometryConfig) -> bool {
    shape.contains_point(circle.center, config)
        || shape
            .segments()
            .iter()
            .any(|segment| config.le(segment.distance_to_point(circle.center), circle.radius))
}

/// Start point inside the shape, or the pair crosses one of its boundary segments
fn pair_outline<S: Geometry2D>(pair: &PointPair, shape: &S, config: &GeometryConfig) -> bool {
    shape.contains_point(pair.a, config)
        || shape
            .segments()
            .iter()
            .any(|segment| intersect_pairs_with(pair, segment, config).is_some())
}

/// Boundaries cross, or one shape sits wholly inside the other
fn outlines_collide<A: Geometry2D, B: Geometry2D>(a: &A, b: &B, config: &GeometryConfig) -> bool {
    let b_segments = b.segments();
    let crossing = a.segments().iter().any(|sa| {
        b_segments
            .iter()
            .any(|sb| intersect_pairs_with(sa, sb, config).is_some())
    });
    if crossing {
        return true;
    }
    let a_in_b = a
        .vertices()
        .first()
        .is_some_and(|&v| b.contains_point(v, config));
    let b_in_a = b
        .vertices()
        .first()
        .is_some_and(|&v| a.contains_point(v, config));
    a_in_b || b_in_a
}

// ======================== SPATIAL INDEX PRIMITIVES ========================

/// Strict overlap of two (x, y, w, h) rectangles; shared edges do not collide
#[allow(clippy::too_many_arguments)]
pub fn rect_rect(x1: f64, y1: f64, w1: f64, h1: f64, x2: f64, y2: f64, w2: f64, h2: f64) -> bool {
    let config = GeometryConfig::default();
    config.lt(x1, x2 + w2) && config.lt(x2, x1 + w1) && config.lt(y1, y2 + h2) && config.lt(y2, y1 + h1)
}

/// Closed containment of (px, py) in an (x, y, w, h) rectangle
pub fn rect_point(x: f64, y: f64, w: f64, h: f64, px: f64, py: f64) -> bool {
    let config = GeometryConfig::default();
    config.le(x, px) && config.le(px, x + w) && config.le(y, py) && config.le(py, y + h)
}
