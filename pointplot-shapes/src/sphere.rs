//! Spherical shell point generation.

use crate::utils::{check_positive, steps};
use pointplot_core::{BoundedPointCloud, Point3d, Result};
use std::f64::consts::{PI, TAU};

/// Sample the surface of an origin-centered sphere.
///
/// The azimuth runs over `[0, 2*pi)` and the polar angle over `[0, pi)`,
/// both advancing by `step` radians, so the sampling density is even in
/// angle rather than in area. No extent is assigned; the bounds are
/// implied by the radius.
pub fn sphere_points(radius: f64, step: f64) -> Result<BoundedPointCloud> {
    check_positive("sphere radius", radius)?;
    check_positive("sphere step", step)?;

    let mut cloud = BoundedPointCloud::new();
    for s in steps(0.0, TAU, step) {
        for t in steps(0.0, PI, step) {
            cloud.push(Point3d::new(
                radius * s.cos() * t.sin(),
                radius * s.sin() * t.sin(),
                radius * t.cos(),
            ));
        }
    }

    Ok(cloud)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_points_lie_on_the_sphere() {
        let cloud = sphere_points(4.0, 0.5).unwrap();

        assert!(!cloud.is_empty());
        for point in cloud.iter() {
            assert_relative_eq!(point.coords.norm(), 4.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sample_count_is_the_angle_grid_product() {
        let cloud = sphere_points(1.0, 0.5).unwrap();

        // ceil(2*pi / 0.5) = 13 azimuth rows, ceil(pi / 0.5) = 7 polar
        // samples each.
        assert_eq!(cloud.len(), 13 * 7);
    }

    #[test]
    fn test_first_sample_is_the_north_pole() {
        let cloud = sphere_points(2.0, 0.5).unwrap();
        assert_relative_eq!(cloud[0], Point3d::new(0.0, 0.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_no_extent_is_assigned() {
        let cloud = sphere_points(1.0, 0.5).unwrap();
        assert!(cloud.extent().is_none());
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(sphere_points(0.0, 0.5).is_err());
        assert!(sphere_points(-1.0, 0.5).is_err());
        assert!(sphere_points(1.0, 0.0).is_err());
        assert!(sphere_points(1.0, f64::NAN).is_err());
    }
}
