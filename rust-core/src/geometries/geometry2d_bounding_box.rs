// 2D bounding box module: axis-aligned bounds for every shape kind
// Lines and rays produce boxes with infinite extents along their direction.

use nalgebra::Vector2;

use crate::config::GeometryConfig;
use crate::geometries::geometry2d::Rectangle;
use crate::geometries::point::Point;

/// 2D axis-aligned bounding box
///
/// Stored as minimum and maximum corners so that unbounded shapes can carry
/// infinite extents without producing NaN widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    /// Minimum corner (top-left in screen space)
    pub min: Vector2<f64>,
    /// Maximum corner
    pub max: Vector2<f64>,
}

impl BoundingBox2D {
    /// Create a new bounding box from minimum and maximum corners
    ///
    /// # Panics
    /// In debug builds, if any min coordinate exceeds the matching max coordinate
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y,
                     "Minimum coordinates must be less than or equal to maximum coordinates");
        Self { min, max }
    }

    /// Degenerate box holding a single point
    pub fn from_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Create a bounding box from a collection of points
    ///
    /// # Returns
    /// * `Some(BoundingBox2D)` if there are points to bound
    /// * `None` if the iterator is empty
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        Some(Self { min, max })
    }

    /// Closed containment test, tolerant of points on the boundary
    pub fn contains(&self, point: Point, config: &GeometryConfig) -> bool {
        config.le(self.min.x, point.x) && config.le(point.x, self.max.x) &&
        config.le(self.min.y, point.y) && config.le(point.y, self.max.y)
    }

    /// `true` if the boxes share any point, boundaries included
    pub fn intersects(&self, other: &BoundingBox2D) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y
    }

    /// `true` only for a positive-area overlap; touching edges do not count
    pub fn overlaps(&self, other: &BoundingBox2D, config: &GeometryConfig) -> bool {
        config.lt(self.min.x, other.max.x) && config.lt(other.min.x, self.max.x) &&
        config.lt(self.min.y, other.max.y) && config.lt(other.min.y, self.max.y)
    }

    /// Smallest box containing both
    pub fn union(&self, other: &BoundingBox2D) -> BoundingBox2D {
        BoundingBox2D {
            min: Vector2::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
            ),
            max: Vector2::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
            ),
        }
    }

    pub fn center(&self) -> Point {
        (self.min + self.max) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Half the diagonal: radius of the circle through all four corners
    pub fn circumradius(&self) -> f64 {
        (self.max - self.min).norm() / 2.0
    }

    /// Grow by `margin` in every direction
    pub fn expand(&self, margin: f64) -> BoundingBox2D {
        let margin_vec = Vector2::new(margin, margin);
        BoundingBox2D {
            min: self.min - margin_vec,
            max: self.max + margin_vec,
        }
    }

    pub fn translate(&self, offset: Point) -> BoundingBox2D {
        BoundingBox2D {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Every extent is finite (false for boxes of lines and rays)
    pub fn is_finite(&self) -> bool {
        self.min.x.is_finite() && self.min.y.is_finite() &&
        self.max.x.is_finite() && self.max.y.is_finite()
    }

    /// The same region as an (x, y, w, h) rectangle
    ///
    /// Only meaningful for finite boxes; infinite extents give infinite width/height.
    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle::new(self.min.x, self.min.y, self.width(), self.height())
    }
}

impl From<Rectangle> for BoundingBox2D {
    fn from(rect: Rectangle) -> Self {
        Self {
            min: Vector2::new(rect.x, rect.y),
            max: Vector2::new(rect.x + rect.w, rect.y + rect.h),
        }
    }
}

impl Default for BoundingBox2D {
    /// Empty box at the origin
    fn default() -> Self {
        Self {
            min: Vector2::zeros(),
            max: Vector2::zeros(),
        }
    }
}
