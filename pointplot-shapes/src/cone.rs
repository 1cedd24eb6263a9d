//! Cone point factory.

use crate::utils::{check_positive, check_resolution, push_ring};
use pointplot_core::{BoundedPointCloud, Point3d, Result};

/// Factory for capped cone point sets.
///
/// The cone's axis runs along X with the solid centered on the origin: the
/// base disk sits at `x = -height / 2` and the apex at `x = +height / 2`.
/// `resolution` controls both the number of points per ring and the number
/// of rings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeFactory {
    height: f64,
    radius: f64,
    resolution: u32,
}

impl ConeFactory {
    /// Create a factory with explicit settings.
    pub fn new(height: f64, radius: f64, resolution: u32) -> Result<Self> {
        check_positive("cone height", height)?;
        check_positive("cone radius", radius)?;
        check_resolution(resolution)?;

        Ok(Self {
            height,
            radius,
            resolution,
        })
    }

    /// Axial length of the cone.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Set the axial length.
    pub fn set_height(&mut self, height: f64) -> Result<()> {
        check_positive("cone height", height)?;
        self.height = height;
        Ok(())
    }

    /// Radius of the base disk.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Set the base radius.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        check_positive("cone radius", radius)?;
        self.radius = radius;
        Ok(())
    }

    /// Number of points per ring.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Set the ring resolution.
    pub fn set_resolution(&mut self, resolution: u32) -> Result<()> {
        check_resolution(resolution)?;
        self.resolution = resolution;
        Ok(())
    }

    /// Generate the cone surface as a point set.
    ///
    /// Rings sweep from the base toward the apex with linearly tapering
    /// radius, the apex itself is a single point, and the base disk is
    /// filled with concentric rings down to a center point.
    pub fn make_points(&self) -> BoundedPointCloud {
        let mut cloud = BoundedPointCloud::new();
        let base = -self.height / 2.0;
        let rings = self.resolution;

        for i in 0..rings {
            let f = f64::from(i) / f64::from(rings);
            let x = base + f * self.height;
            push_ring(self.radius * (1.0 - f), self.resolution, x, &mut cloud);
        }
        cloud.push(Point3d::new(self.height / 2.0, 0.0, 0.0));

        for i in 1..rings {
            let r = self.radius * f64::from(i) / f64::from(rings);
            push_ring(r, self.resolution, base, &mut cloud);
        }
        cloud.push(Point3d::new(base, 0.0, 0.0));

        cloud
    }
}

impl Default for ConeFactory {
    fn default() -> Self {
        Self {
            height: 3.0,
            radius: 1.0,
            resolution: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_settings() {
        let factory = ConeFactory::default();
        assert_relative_eq!(factory.height(), 3.0);
        assert_relative_eq!(factory.radius(), 1.0);
        assert_eq!(factory.resolution(), 20);
    }

    #[test]
    fn test_point_count() {
        let factory = ConeFactory::new(2.0, 1.0, 4).unwrap();
        let cloud = factory.make_points();

        // 4 lateral rings + apex, 3 cap rings + center, 4 points each.
        assert_eq!(cloud.len(), 4 * 4 + 1 + 3 * 4 + 1);
    }

    #[test]
    fn test_points_stay_inside_the_solid() {
        let factory = ConeFactory::default();
        let cloud = factory.make_points();

        let half = factory.height() / 2.0;
        for point in cloud.iter() {
            assert!(point.x >= -half - 1e-12 && point.x <= half + 1e-12);
            assert!(point.y.hypot(point.z) <= factory.radius() + 1e-12);
        }
    }

    #[test]
    fn test_apex_and_base_center_are_present() {
        let factory = ConeFactory::new(2.0, 1.0, 4).unwrap();
        let cloud = factory.make_points();

        let apex = Point3d::new(1.0, 0.0, 0.0);
        let center = Point3d::new(-1.0, 0.0, 0.0);
        assert!(cloud.iter().any(|p| *p == apex));
        assert!(cloud.iter().any(|p| *p == center));
    }

    #[test]
    fn test_lateral_radius_tapers_toward_the_apex() {
        let factory = ConeFactory::new(4.0, 2.0, 4).unwrap();
        let cloud = factory.make_points();

        // First ring sits on the base circle at full radius.
        assert_relative_eq!(cloud[0].x, -2.0);
        assert_relative_eq!(cloud[0].y.hypot(cloud[0].z), 2.0, epsilon = 1e-12);
        // Last lateral ring is one step short of the apex.
        assert_relative_eq!(cloud[12].x, 1.0);
        assert_relative_eq!(cloud[12].y.hypot(cloud[12].z), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_bad_settings() {
        assert!(ConeFactory::new(0.0, 1.0, 20).is_err());
        assert!(ConeFactory::new(3.0, -1.0, 20).is_err());
        assert!(ConeFactory::new(3.0, 1.0, 2).is_err());

        let mut factory = ConeFactory::default();
        assert!(factory.set_height(f64::NAN).is_err());
        assert!(factory.set_radius(0.0).is_err());
        assert!(factory.set_resolution(0).is_err());
        // Rejected settings leave the factory untouched.
        assert_eq!(factory, ConeFactory::default());
    }
}
