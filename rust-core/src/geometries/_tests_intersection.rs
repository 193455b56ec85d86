#[cfg(test)]
mod _tests_intersection {
    use super::super::geometry2d::{Circle, Polygon, Rectangle, Triangle};
    use super::super::intersection::*;
    use super::super::point::{point, Point};
    use super::super::point_pair::PointPair;
    use super::super::shape::Shape;
    use crate::config::GeometryConfig;
    use approx::assert_relative_eq;

    fn assert_point_approx_eq(actual: Point, expected: Point) {
        assert_relative_eq!(actual.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(actual.y, expected.y, epsilon = 1e-9);
    }

    fn contains_approx(points: &[Point], expected: Point) -> bool {
        points.iter().any(|p| (p - expected).norm() < 1e-9)
    }

    // ======================== PAIR / PAIR ========================

    #[test]
    fn test_crossing_lines() {
        let p = PointPair::line(point(0.0, 0.0), point(1.0, 1.0));
        let q = PointPair::line(point(0.0, 1.0), point(1.0, 0.0));
        assert_point_approx_eq(intersect_pairs(&p, &q).unwrap(), point(0.5, 0.5));
    }

    #[test]
    fn test_lines_meet_outside_their_defining_points() {
        let p = PointPair::line(point(0.0, 0.0), point(1.0, 0.0));
        let q = PointPair::line(point(5.0, 1.0), point(5.0, 2.0));
        assert_point_approx_eq(intersect_pairs(&p, &q).unwrap(), point(5.0, 0.0));
    }

    #[test]
    fn test_parallel_and_coincident_pairs() {
        let p = PointPair::line(point(0.0, 0.0), point(1.0, 1.0));
        let parallel = PointPair::line(point(0.0, 1.0), point(1.0, 2.0));
        let coincident = PointPair::line(point(2.0, 2.0), point(3.0, 3.0));

        assert!(intersect_pairs(&p, &parallel).is_none());
        assert!(intersect_pairs(&p, &coincident).is_none());
    }

    #[test]
    fn test_segment_extents() {
        let s1 = PointPair::segment(point(0.0, 0.0), point(2.0, 2.0));
        let s2 = PointPair::segment(point(0.0, 2.0), point(2.0, 0.0));
        assert_point_approx_eq(intersect_pairs(&s1, &s2).unwrap(), point(1.0, 1.0));

        // Lines would meet at (3, 3), beyond the end of s1
        let short = PointPair::segment(point(0.0, 0.0), point(2.0, 2.0));
        let far = PointPair::segment(point(3.0, 0.0), point(3.0, 6.0));
        assert!(intersect_pairs(&short, &far).is_none());

        // Shared endpoint counts
        let touching = PointPair::segment(point(2.0, 2.0), point(4.0, 0.0));
        assert_point_approx_eq(intersect_pairs(&short, &touching).unwrap(), point(2.0, 2.0));
    }

    #[test]
    fn test_ray_extents() {
        let ray = PointPair::ray(point(0.0, 0.0), point(1.0, 0.0));
        let ahead = PointPair::line(point(5.0, -1.0), point(5.0, 1.0));
        let behind = PointPair::line(point(-5.0, -1.0), point(-5.0, 1.0));

        assert_point_approx_eq(intersect_pairs(&ray, &ahead).unwrap(), point(5.0, 0.0));
        assert!(intersect_pairs(&ray, &behind).is_none());

        // Origin of the ray is part of it
        let at_origin = PointPair::line(point(0.0, -1.0), point(0.0, 1.0));
        assert_point_approx_eq(intersect_pairs(&ray, &at_origin).unwrap(), point(0.0, 0.0));
    }

    #[test]
    fn test_vertical_ray_extent() {
        let ray = PointPair::ray(point(0.0, 0.0), point(0.0, -1.0));
        let above = PointPair::line(point(-1.0, 3.0), point(1.0, 3.0));
        let below = PointPair::line(point(-1.0, -3.0), point(1.0, -3.0));

        assert!(intersect_pairs(&ray, &above).is_none());
        assert_point_approx_eq(intersect_pairs(&ray, &below).unwrap(), point(0.0, -3.0));
    }

    #[test]
    fn test_degenerate_pair_never_intersects() {
        let dot = PointPair::segment(point(1.0, 1.0), point(1.0, 1.0));
        let line = PointPair::line(point(0.0, 0.0), point(2.0, 2.0));
        assert!(intersect_pairs(&dot, &line).is_none());
        assert!(intersect_circle_pair(&Circle::new(point(1.0, 1.0), 1.0), &dot).is_empty());
    }

    #[test]
    fn test_pair_intersection_is_symmetric() {
        let pairs = [
            PointPair::line(point(0.0, 0.0), point(3.0, 1.0)),
            PointPair::ray(point(1.0, -2.0), point(1.5, 2.0)),
            PointPair::segment(point(-1.0, 2.0), point(4.0, -1.0)),
            PointPair::segment(point(0.0, 5.0), point(0.5, 5.5)),
        ];
        for p in pairs.iter() {
            for q in pairs.iter() {
                let pq = intersect_pairs(p, q);
                let qp = intersect_pairs(q, p);
                assert_eq!(pq.is_some(), qp.is_some(), "Asymmetric result for {:?} / {:?}", p, q);
                if let (Some(a), Some(b)) = (pq, qp) {
                    assert_point_approx_eq(a, b);
                }
            }
        }
    }

    // ======================== CIRCLE / PAIR ========================

    #[test]
    fn test_line_through_circle() {
        let circle = Circle::new(point(0.0, 0.0), 5.0);
        let line = PointPair::line(point(-10.0, 0.0), point(10.0, 0.0));
        let hits = intersect_circle_pair(&circle, &line);

        assert_eq!(hits.len(), 2);
        assert!(contains_approx(&hits, point(-5.0, 0.0)));
        assert!(contains_approx(&hits, point(5.0, 0.0)));
    }

    #[test]
    fn test_tangent_and_missing_lines() {
        let circle = Circle::new(point(0.0, 0.0), 5.0);
        let tangent = PointPair::line(point(-10.0, 5.0), point(10.0, 5.0));
        let miss = PointPair::line(point(-10.0, 6.0), point(10.0, 6.0));

        let hits = intersect_circle_pair(&circle, &tangent);
        assert_eq!(hits.len(), 1);
        assert_point_approx_eq(hits[0], point(0.0, 5.0));
        assert!(intersect_circle_pair(&circle, &miss).is_empty());
    }

    #[test]
    fn test_vertical_line_through_circle() {
        let circle = Circle::new(point(1.0, 1.0), 2.0);
        let vertical = PointPair::line(point(1.0, -10.0), point(1.0, 10.0));
        let hits = intersect_circle_pair(&circle, &vertical);

        assert_eq!(hits.len(), 2);
        assert!(contains_approx(&hits, point(1.0, 3.0)));
        assert!(contains_approx(&hits, point(1.0, -1.0)));
    }

    #[test]
    fn test_diagonal_line_through_circle() {
        let circle = Circle::new(point(0.0, 0.0), 2.0f64.sqrt());
        let diagonal = PointPair::line(point(-3.0, -3.0), point(3.0, 3.0));
        let hits = intersect_circle_pair(&circle, &diagonal);

        assert_eq!(hits.len(), 2);
        assert!(contains_approx(&hits, point(1.0, 1.0)));
        assert!(contains_approx(&hits, point(-1.0, -1.0)));
    }

    #[test]
    fn test_segment_and_ray_inside_circle() {
        let circle = Circle::new(point(0.0, 0.0), 5.0);

        // Entirely inside: no boundary crossing
        let inner = PointPair::segment(point(-1.0, 0.0), point(1.0, 0.0));
        assert!(intersect_circle_pair(&circle, &inner).is_empty());

        // Starting inside and leaving through +x
        let outward = PointPair::segment(point(0.0, 0.0), point(10.0, 0.0));
        let hits = intersect_circle_pair(&circle, &outward);
        assert_eq!(hits.len(), 1);
        assert_point_approx_eq(hits[0], point(5.0, 0.0));

        let ray = PointPair::ray(point(0.0, 0.0), point(0.0, 1.0));
        let hits = intersect_circle_pair(&circle, &ray);
        assert_eq!(hits.len(), 1);
        assert_point_approx_eq(hits[0], point(0.0, 5.0));
    }

    // ======================== PAIR / SHAPES ========================

    #[test]
    fn test_intersections_against_rectangle() {
        let rect = Shape::Rectangle(Rectangle::new(0.0, 0.0, 4.0, 4.0));
        let line = PointPair::line(point(-1.0, 2.0), point(5.0, 2.0));
        let hits = intersections(&line, &[rect]);

        assert_eq!(hits.len(), 2);
        assert!(contains_approx(&hits, point(0.0, 2.0)));
        assert!(contains_approx(&hits, point(4.0, 2.0)));
    }

    #[test]
    fn test_corner_hits_are_deduplicated() {
        let rect = Shape::Rectangle(Rectangle::new(0.0, 0.0, 4.0, 4.0));
        let diagonal = PointPair::line(point(-1.0, -1.0), point(5.0, 5.0));
        let hits = intersections(&diagonal, &[rect]);

        // Each corner is shared by two edges but reported once
        assert_eq!(hits.len(), 2);
        assert!(contains_approx(&hits, point(0.0, 0.0)));
        assert!(contains_approx(&hits, point(4.0, 4.0)));
    }

    #[test]
    fn test_intersections_across_many_shapes() {
        let config = GeometryConfig::default();
        let shapes = vec![
            Shape::Circle(Circle::new(point(10.0, 0.0), 1.0)),
            Shape::Triangle(Triangle::new(point(20.0, -1.0), point(22.0, -1.0), point(21.0, 1.0))),
            Shape::Polygon(Polygon::new(vec![
                point(-6.0, -1.0),
                point(-4.0, -1.0),
                point(-4.0, 1.0),
                point(-6.0, 1.0),
            ])),
            Shape::Point(point(30.0, 0.0)),
            Shape::Point(point(30.0, 1.0)),
            Shape::Pair(PointPair::segment(point(40.0, -1.0), point(40.0, 1.0))),
        ];
        let ray = PointPair::ray(point(0.0, 0.0), point(1.0, 0.0));
        let hits = intersections_with(&ray, &shapes, &config);

        // Circle (2) + triangle (2) + on-ray point (1) + segment (1); the polygon is behind
        assert_eq!(hits.len(), 6);
        assert!(contains_approx(&hits, point(9.0, 0.0)));
        assert!(contains_approx(&hits, point(11.0, 0.0)));
        assert!(contains_approx(&hits, point(30.0, 0.0)));
        assert!(contains_approx(&hits, point(40.0, 0.0)));
        assert!(!hits.iter().any(|p| p.x < 0.0));
    }

    #[test]
    fn test_intersections_with_offset() {
        let rect = Shape::Rectangle(Rectangle::new(0.0, 0.0, 2.0, 2.0));
        let segment = PointPair::segment(point(-1.0, 10.0), point(3.0, 10.0));

        assert!(intersections(&segment, &[rect.clone()]).is_empty());
        let hits = intersections_with_offset(&segment, &[rect], point(0.0, -9.0));
        assert_eq!(hits.len(), 2);
        assert!(contains_approx(&hits, point(0.0, 1.0)));
        assert!(contains_approx(&hits, point(2.0, 1.0)));
    }

    #[test]
    fn test_no_shapes_no_intersections() {
        let line = PointPair::line(point(0.0, 0.0), point(1.0, 0.0));
        assert!(intersections(&line, &[]).is_empty());
    }
}
