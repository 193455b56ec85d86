#[cfg(test)]
mod _tests_collider {
    use super::super::collider::Collider;
    use super::super::geometry2d::{Circle, Rectangle};
    use super::super::point::point;
    use super::super::point_pair::PointPair;
    use super::super::shape::Shape;
    use approx::assert_relative_eq;

    fn unit_box() -> Shape {
        Shape::Rectangle(Rectangle::new(-1.0, -1.0, 2.0, 2.0))
    }

    #[test]
    fn test_bounds_follow_position() {
        let collider = Collider::at(unit_box(), point(10.0, 5.0));
        let bounds = collider.bounds();

        assert_eq!(bounds.min, point(9.0, 4.0));
        assert_eq!(bounds.max, point(11.0, 6.0));
        assert_eq!(collider.position(), point(10.0, 5.0));
        assert_eq!(collider.shape(), &unit_box());
    }

    #[test]
    fn test_recompute_bounds_moves_the_cache() {
        let mut collider = Collider::new(unit_box());
        assert_eq!(collider.bounds().min, point(-1.0, -1.0));

        collider.recompute_bounds(point(3.0, 0.0));
        assert_eq!(collider.position(), point(3.0, 0.0));
        assert_eq!(collider.bounds().min, point(2.0, -1.0));
        assert_eq!(collider.bounds().max, point(4.0, 1.0));
    }

    #[test]
    fn test_world_shape_is_translated() {
        let collider = Collider::at(Shape::Circle(Circle::new(point(1.0, 0.0), 2.0)), point(0.0, 4.0));
        match collider.world_shape() {
            Shape::Circle(circle) => {
                assert_eq!(circle.center, point(1.0, 4.0));
                assert_relative_eq!(circle.radius, 2.0);
            }
            other => panic!("Expected a circle, got {:?}", other),
        }
    }

    #[test]
    fn test_colliders_use_positions() {
        let a = Collider::at(unit_box(), point(0.0, 0.0));
        let near = Collider::at(unit_box(), point(1.5, 0.0));
        let touching = Collider::at(unit_box(), point(2.0, 0.0));
        let far = Collider::at(unit_box(), point(10.0, 0.0));

        assert!(a.collides_with(&near));
        assert!(near.collides_with(&a));
        assert!(!a.collides_with(&touching), "Rectangles sharing an edge do not collide");
        assert!(!a.collides_with(&far));
    }

    #[test]
    fn test_speculative_position() {
        let mover = Collider::at(Shape::Circle(Circle::new(point(0.0, 0.0), 1.0)), point(0.0, 0.0));
        let wall = Collider::at(Shape::Rectangle(Rectangle::new(0.0, 0.0, 1.0, 10.0)), point(5.0, 0.0));

        assert!(!mover.collides_with(&wall));
        assert!(mover.collides_with_at(&wall, point(4.0, 5.0)), "Circle touching the wall edge");
        assert!(!mover.collides_with_at(&wall, point(3.5, 5.0)));
        // The speculative query leaves the collider where it was
        assert_eq!(mover.position(), point(0.0, 0.0));
    }

    #[test]
    fn test_unbounded_colliders() {
        let line = Collider::new(Shape::Pair(PointPair::line(point(0.0, 0.0), point(1.0, 1.0))));
        let far_box = Collider::at(unit_box(), point(100.0, 100.0));
        let off_box = Collider::at(unit_box(), point(100.0, -100.0));

        assert!(!line.bounds().is_finite());
        assert!(line.collides_with(&far_box));
        assert!(far_box.collides_with(&line));
        assert!(!line.collides_with(&off_box));
    }

    #[test]
    fn test_intersections_in_world_space() {
        let collider = Collider::at(unit_box(), point(5.0, 0.0));
        let ray = PointPair::ray(point(0.0, 0.0), point(1.0, 0.0));
        let hits = collider.intersections(&ray);

        assert_eq!(hits.len(), 2);
        assert!(hits.iter().any(|p| (p - point(4.0, 0.0)).norm() < 1e-9));
        assert!(hits.iter().any(|p| (p - point(6.0, 0.0)).norm() < 1e-9));
    }
}
