// Shape module: the tagged union over every supported shape kind
// Heterogeneous dispatch matches on `Shape`; structural classification only
// happens for untyped JSON at the data boundary.

use log::trace;
use nalgebra::Vector2;
use serde_json::{json, Map, Value};

use crate::config::GeometryConfig;
use crate::error::GeometryError;
use crate::geometries::geometry2d::{Circle, Geometry2D, Polygon, Rectangle, Triangle};
use crate::geometries::geometry2d_bounding_box::BoundingBox2D;
use crate::geometries::point::{self, Point};
use crate::geometries::point_pair::{PairKind, PointPair};

/// The eight shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Circle,
    Triangle,
    Rectangle,
    Polygon,
    Segment,
    Ray,
    Line,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Point => "point",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Segment => "segment",
            ShapeKind::Ray => "ray",
            ShapeKind::Line => "line",
        }
    }

    /// Classify an untyped shape description by the fields it carries
    ///
    /// `{a,b,c}` → Triangle, `{x,y,w,h}` → Rectangle, `{x,y,radius}` → Circle,
    /// `{vertices}` → Polygon, `{a,b,kind}` → Segment/Ray/Line, `{x,y}` → Point.
    /// Anything else is [`GeometryError::UnrecognizedShapeKind`].
    pub fn classify(value: &Value) -> Result<ShapeKind, GeometryError> {
        let object = value
            .as_object()
            .ok_or_else(|| GeometryError::unrecognized(value))?;
        let has = |keys: &[&str]| keys.iter().all(|k| object.contains_key(*k));

        let kind = if has(&["a", "b", "c"]) {
            ShapeKind::Triangle
        } else if has(&["x", "y", "w", "h"]) {
            ShapeKind::Rectangle
        } else if has(&["x", "y", "radius"]) {
            ShapeKind::Circle
        } else if has(&["vertices"]) {
            ShapeKind::Polygon
        } else if has(&["a", "b", "kind"]) {
            match object.get("kind").and_then(Value::as_str) {
                Some("segment") => ShapeKind::Segment,
                Some("ray") => ShapeKind::Ray,
                Some("line") => ShapeKind::Line,
                _ => return Err(GeometryError::unrecognized(value)),
            }
        } else if has(&["x", "y"]) && object.len() == 2 {
            ShapeKind::Point
        } else {
            return Err(GeometryError::unrecognized(value));
        };
        trace!("classified {} as {}", value, kind.name());
        Ok(kind)
    }
}

/// Any supported shape
///
/// Segments, rays and lines share the [`PointPair`] variant; their kind lives in
/// [`PointPair::kind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    Circle(Circle),
    Rectangle(Rectangle),
    Triangle(Triangle),
    Polygon(Polygon),
    Pair(PointPair),
}

impl From<Point> for Shape {
    fn from(p: Point) -> Self {
        Shape::Point(p)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl From<PointPair> for Shape {
    fn from(pair: PointPair) -> Self {
        Shape::Pair(pair)
    }
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Pair(pair) => match pair.kind {
                PairKind::Segment => ShapeKind::Segment,
                PairKind::Ray => ShapeKind::Ray,
                PairKind::Line => ShapeKind::Line,
            },
        }
    }

    pub fn bounds(&self) -> BoundingBox2D {
        match self {
            Shape::Point(p) => BoundingBox2D::from_point(*p),
            Shape::Circle(circle) => circle.bounding_box(),
            Shape::Rectangle(rect) => rect.bounding_box(),
            Shape::Triangle(triangle) => triangle.bounding_box(),
            Shape::Polygon(polygon) => polygon.bounding_box(),
            Shape::Pair(pair) => pair.bounds(),
        }
    }

    /// Centroid for closed shapes, midpoint for point pairs
    pub fn center(&self) -> Point {
        match self {
            Shape::Point(p) => *p,
            Shape::Circle(circle) => circle.center(),
            Shape::Rectangle(rect) => rect.center(),
            Shape::Triangle(triangle) => triangle.center(),
            Shape::Polygon(polygon) => polygon.center(),
            Shape::Pair(pair) => pair.midpoint(),
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Shape::Point(_) | Shape::Pair(_) => 0.0,
            Shape::Circle(circle) => circle.area(),
            Shape::Rectangle(rect) => rect.area(),
            Shape::Triangle(triangle) => triangle.area(),
            Shape::Polygon(polygon) => polygon.area(),
        }
    }

    /// Points a renderer connects to draw the outline
    pub fn vertices(&self) -> Vec<Point> {
        match self {
            Shape::Point(p) => vec![*p],
            Shape::Circle(circle) => circle.vertices(),
            Shape::Rectangle(rect) => rect.vertices(),
            Shape::Triangle(triangle) => triangle.vertices(),
            Shape::Polygon(polygon) => polygon.vertices(),
            Shape::Pair(pair) => vec![pair.a, pair.b],
        }
    }

    /// Boundary segments; a point pair is its own single boundary
    pub fn segments(&self) -> Vec<PointPair> {
        match self {
            Shape::Point(_) => Vec::new(),
            Shape::Circle(circle) => circle.segments(),
            Shape::Rectangle(rect) => rect.segments(),
            Shape::Triangle(triangle) => triangle.segments(),
            Shape::Polygon(polygon) => polygon.segments(),
            Shape::Pair(pair) => vec![*pair],
        }
    }

    pub fn translate(&self, offset: Point) -> Shape {
        match self {
            Shape::Point(p) => Shape::Point(p + offset),
            Shape::Circle(circle) => Shape::Circle(circle.translate(offset)),
            Shape::Rectangle(rect) => Shape::Rectangle(rect.translate(offset)),
            Shape::Triangle(triangle) => Shape::Triangle(triangle.translate(offset)),
            Shape::Polygon(polygon) => Shape::Polygon(polygon.translate(offset)),
            Shape::Pair(pair) => Shape::Pair(pair.translate(offset)),
        }
    }

    /// Rotate around `center`; rectangles become polygons
    pub fn rotate(&self, angle: f64, center: Point) -> Shape {
        match self {
            Shape::Point(p) => Shape::Point(point::rotate(*p, angle, center)),
            Shape::Circle(circle) => Shape::Circle(circle.rotate(angle, center)),
            Shape::Rectangle(rect) => Shape::Polygon(rect.rotate(angle, center)),
            Shape::Triangle(triangle) => Shape::Triangle(triangle.rotate(angle, center)),
            Shape::Polygon(polygon) => Shape::Polygon(polygon.rotate(angle, center)),
            Shape::Pair(pair) => Shape::Pair(pair.rotate(angle, center)),
        }
    }

    /// Closed containment; for point pairs, lying on the pair
    pub fn contains_point(&self, p: Point, config: &GeometryConfig) -> bool {
        match self {
            Shape::Point(q) => point::points_equal(*q, p, config),
            Shape::Circle(circle) => circle.contains_point(p, config),
            Shape::Rectangle(rect) => rect.contains_point(p, config),
            Shape::Triangle(triangle) => triangle.contains_point(p, config),
            Shape::Polygon(polygon) => polygon.contains_point(p, config),
            Shape::Pair(pair) => pair.contains_point(p, config),
        }
    }

    pub fn distance_to_point(&self, p: Point, config: &GeometryConfig) -> f64 {
        match self {
            Shape::Point(q) => point::distance(*q, p),
            Shape::Circle(circle) => circle.distance_to_point(p, config),
            Shape::Rectangle(rect) => rect.distance_to_point(p, config),
            Shape::Triangle(triangle) => triangle.distance_to_point(p, config),
            Shape::Polygon(polygon) => polygon.distance_to_point(p, config),
            Shape::Pair(pair) => pair.distance_to_point(p),
        }
    }

    /// Tolerance equality; shapes of different kinds are never equal
    pub fn approx_eq(&self, other: &Shape, config: &GeometryConfig) -> bool {
        match (self, other) {
            (Shape::Point(a), Shape::Point(b)) => point::points_equal(*a, *b, config),
            (Shape::Circle(a), Shape::Circle(b)) => a.approx_eq(b, config),
            (Shape::Rectangle(a), Shape::Rectangle(b)) => a.approx_eq(b, config),
            (Shape::Triangle(a), Shape::Triangle(b)) => a.approx_eq(b, config),
            (Shape::Polygon(a), Shape::Polygon(b)) => a.approx_eq(b, config),
            (Shape::Pair(a), Shape::Pair(b)) => a.approx_eq(b, config),
            _ => false,
        }
    }

    pub fn hash_key(&self, config: &GeometryConfig) -> String {
        match self {
            Shape::Point(p) => format!("point:{}", point::point_hash(*p, config)),
            Shape::Circle(circle) => circle.hash_key(config),
            Shape::Rectangle(rect) => rect.hash_key(config),
            Shape::Triangle(triangle) => triangle.hash_key(config),
            Shape::Polygon(polygon) => polygon.hash_key(config),
            Shape::Pair(pair) => pair.hash_key(config),
        }
    }

    // ======================== JSON BOUNDARY ========================

    /// Build a shape from its structural JSON description
    pub fn from_value(value: &Value) -> Result<Shape, GeometryError> {
        let kind = ShapeKind::classify(value)?;
        let shape = match kind {
            ShapeKind::Point => Shape::Point(point_from_value(value)?),
            ShapeKind::Circle => {
                let radius = number_field(value, "radius")?;
                if radius < 0.0 {
                    return Err(GeometryError::InvalidShape {
                        kind: kind.name(),
                        message: format!("negative radius {}", radius),
                    });
                }
                Shape::Circle(Circle::new(point_from_value(value)?, radius))
            }
            ShapeKind::Rectangle => {
                let (w, h) = (number_field(value, "w")?, number_field(value, "h")?);
                if w < 0.0 || h < 0.0 {
                    return Err(GeometryError::InvalidShape {
                        kind: kind.name(),
                        message: format!("negative size {}x{}", w, h),
                    });
                }
                let origin = point_from_value(value)?;
                Shape::Rectangle(Rectangle::new(origin.x, origin.y, w, h))
            }
            ShapeKind::Triangle => Shape::Triangle(Triangle::new(
                point_field(value, "a")?,
                point_field(value, "b")?,
                point_field(value, "c")?,
            )),
            ShapeKind::Polygon => {
                let vertices = value
                    .get("vertices")
                    .and_then(Value::as_array)
                    .ok_or_else(|| GeometryError::unrecognized(value))?
                    .iter()
                    .map(point_from_value)
                    .collect::<Result<Vec<_>, _>>()?;
                Shape::Polygon(Polygon::new(vertices))
            }
            ShapeKind::Segment | ShapeKind::Ray | ShapeKind::Line => {
                let pair_kind = match kind {
                    ShapeKind::Segment => PairKind::Segment,
                    ShapeKind::Ray => PairKind::Ray,
                    _ => PairKind::Line,
                };
                Shape::Pair(PointPair::new(
                    point_field(value, "a")?,
                    point_field(value, "b")?,
                    pair_kind,
                ))
            }
        };
        Ok(shape)
    }

    /// Structural JSON description, the inverse of [`Shape::from_value`]
    pub fn to_value(&self) -> Value {
        match self {
            Shape::Point(p) => point_to_value(*p),
            Shape::Circle(circle) => json!({
                "x": circle.center.x,
                "y": circle.center.y,
                "radius": circle.radius,
            }),
            Shape::Rectangle(rect) => json!({
                "x": rect.x,
                "y": rect.y,
                "w": rect.w,
                "h": rect.h,
            }),
            Shape::Triangle(triangle) => json!({
                "a": point_to_value(triangle.a),
                "b": point_to_value(triangle.b),
                "c": point_to_value(triangle.c),
            }),
            Shape::Polygon(polygon) => json!({
                "vertices": polygon.vertices.iter().map(|&v| point_to_value(v)).collect::<Vec<_>>(),
            }),
            Shape::Pair(pair) => json!({
                "a": point_to_value(pair.a),
                "b": point_to_value(pair.b),
                "kind": pair.kind.name(),
            }),
        }
    }
}

pub fn point_to_value(p: Point) -> Value {
    let mut object = Map::new();
    object.insert("x".to_string(), json!(p.x));
    object.insert("y".to_string(), json!(p.y));
    Value::Object(object)
}

/// Read `{x, y}` from a JSON object
pub fn point_from_value(value: &Value) -> Result<Point, GeometryError> {
    Ok(Vector2::new(
        number_field(value, "x")?,
        number_field(value, "y")?,
    ))
}

fn point_field(value: &Value, key: &str) -> Result<Point, GeometryError> {
    let field = value
        .get(key)
        .ok_or_else(|| GeometryError::unrecognized(value))?;
    point_from_value(field)
}

fn number_field(value: &Value, key: &str) -> Result<f64, GeometryError> {
    value
        .get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| GeometryError::unrecognized(value))
}
