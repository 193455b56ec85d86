#[cfg(test)]
mod _tests_point {
    use super::super::point::*;
    use super::super::point_pair::PointPair;
    use crate::config::GeometryConfig;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_point_eq(actual: Point, expected: Point) {
        assert!(
            (actual - expected).norm() < 1e-10,
            "Points not approximately equal: {:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_scale_dot_cross() {
        let a = point(2.0, 3.0);
        let b = point(-1.0, 4.0);

        assert_point_eq(scale(a, 2.0), point(4.0, 6.0));
        assert_point_eq(scale_by(a, point(0.5, -1.0)), point(1.0, -3.0));
        assert_relative_eq!(dot(a, b), 10.0);
        assert_relative_eq!(cross(a, b), 11.0);
        assert_relative_eq!(length(point(3.0, 4.0)), 5.0);
        assert_relative_eq!(distance(a, b), (9.0f64 + 1.0).sqrt());
    }

    #[test]
    fn test_normalized_zero_vector() {
        assert_point_eq(normalized(point(3.0, 4.0), 10.0), point(6.0, 8.0));
        assert_point_eq(normalized(point(0.0, 0.0), 1.0), point(0.0, 0.0));
        assert_point_eq(normalized(point(3.0, 4.0), 0.0), point(0.0, 0.0));
    }

    #[test]
    fn test_rotate_around_center() {
        let rotated = rotate(point(2.0, 1.0), FRAC_PI_2, point(1.0, 1.0));
        assert_point_eq(rotated, point(1.0, 2.0));

        let half_turn = rotate(point(1.0, 0.0), PI, point(0.0, 0.0));
        assert_point_eq(half_turn, point(-1.0, 0.0));
    }

    #[test]
    fn test_reflect_over_line() {
        let diagonal = PointPair::line(point(0.0, 0.0), point(1.0, 1.0));
        assert_point_eq(reflect(point(1.0, 0.0), &diagonal), point(0.0, 1.0));

        let horizontal = PointPair::segment(point(0.0, 2.0), point(5.0, 2.0));
        assert_point_eq(reflect(point(3.0, 5.0), &horizontal), point(3.0, -1.0));
    }

    #[test]
    fn test_lerp_and_project() {
        assert_point_eq(lerp(point(0.0, 0.0), point(10.0, 20.0), 0.25), point(2.5, 5.0));
        assert_point_eq(project(point(3.0, 4.0), point(2.0, 0.0)), point(3.0, 0.0));
        assert_point_eq(project(point(3.0, 4.0), point(0.0, 0.0)), point(0.0, 0.0));
    }

    #[test]
    fn test_angle_between_wraps_to_positive() {
        let origin = point(0.0, 0.0);
        assert_relative_eq!(angle_between(origin, point(1.0, 0.0)), 0.0);
        assert_relative_eq!(angle_between(origin, point(0.0, 1.0)), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(angle_between(origin, point(0.0, -1.0)), 3.0 * FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_difference_wraps_across_zero() {
        // 350° to 10° is +20°, not -340°
        let delta = angle_difference(10f64.to_radians(), 350f64.to_radians());
        assert_relative_eq!(delta, 20f64.to_radians(), epsilon = 1e-12);

        let back = angle_difference(350f64.to_radians(), 10f64.to_radians());
        assert_relative_eq!(back, -20f64.to_radians(), epsilon = 1e-12);

        // Exactly opposite resolves to +π
        assert_relative_eq!(angle_difference(PI, 0.0), PI);
        assert_relative_eq!(angle_difference(0.0, PI), PI);
    }

    #[test]
    fn test_points_equal_and_hash_consistency() {
        let config = GeometryConfig::default();
        let a = point(1.0, 2.0);
        let b = point(1.0 + 1e-9, 2.0 - 1e-9);

        assert!(points_equal(a, b, &config));
        assert_eq!(point_hash(a, &config), point_hash(b, &config));
        assert!(!points_equal(a, point(1.001, 2.0), &config));
        assert_eq!(point_hash(a, &config), "1.000000,2.000000");
    }

    #[test]
    fn test_orientation_sign() {
        assert!(orientation(point(0.0, 0.0), point(1.0, 0.0), point(0.0, 1.0)) > 0.0);
        assert!(orientation(point(0.0, 0.0), point(0.0, 1.0), point(1.0, 0.0)) < 0.0);
        assert_relative_eq!(orientation(point(0.0, 0.0), point(1.0, 1.0), point(2.0, 2.0)), 0.0);
    }
}
