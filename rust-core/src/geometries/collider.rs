use crate::config::GeometryConfig;
use crate::geometries::collision::collide_with;
use crate::geometries::geometry2d_bounding_box::BoundingBox2D;
use crate::geometries::intersection::intersections_with;
use crate::geometries::point::Point;
use crate::geometries::point_pair::PointPair;
use crate::geometries::shape::Shape;

/// A local-space shape attached to an entity position
///
/// World bounds are cached and only change through [`Collider::recompute_bounds`],
/// which the owning system calls once per frame after moving the entity.
#[derive(Debug, Clone)]
pub struct Collider {
    shape: Shape,
    position: Point,
    bounds: BoundingBox2D,
}

impl Collider {
    /// Create a collider at the origin
    pub fn new(shape: Shape) -> Self {
        Self::at(shape, Point::zeros())
    }

    pub fn at(shape: Shape, position: Point) -> Self {
        let bounds = shape.bounds().translate(position);
        Self {
            shape,
            position,
            bounds,
        }
    }

    /// Local-space shape
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Cached world-space bounds as of the last recompute
    pub fn bounds(&self) -> BoundingBox2D {
        self.bounds
    }

    /// Move the collider and re-derive its world bounds
    pub fn recompute_bounds(&mut self, position: Point) {
        self.position = position;
        self.bounds = self.shape.bounds().translate(position);
    }

    /// The shape placed at the current position
    pub fn world_shape(&self) -> Shape {
        self.shape.translate(self.position)
    }

    pub fn collides_with(&self, other: &Collider) -> bool {
        self.collides_with_at(other, self.position)
    }

    /// Speculative test: would this collider hit `other` if it stood at `position`?
    pub fn collides_with_at(&self, other: &Collider, position: Point) -> bool {
        let config = GeometryConfig::default();
        // Bounds of lines and rays are infinite; the cheap reject only applies to finite boxes
        let moved_bounds = self.shape.bounds().translate(position).expand(config.epsilon.sqrt());
        if moved_bounds.is_finite() && other.bounds.is_finite() && !moved_bounds.intersects(&other.bounds) {
            return false;
        }
        collide_with(&self.shape, &other.shape, position, other.position, &config)
    }

    /// Where a world-space pair meets this collider's outline
    pub fn intersections(&self, pair: &PointPair) -> Vec<Point> {
        intersections_with(pair, &[self.world_shape()], &GeometryConfig::default())
    }
}
