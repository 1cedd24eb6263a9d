//! Arrow point factory.

use crate::utils::{check_positive, check_resolution, push_ring};
use pointplot_core::{BoundedPointCloud, Error, Point3d, Result};

/// Factory for unit-length arrow point sets.
///
/// The arrow spans `[0, 1]` along the X axis: a cylindrical shaft followed
/// by a conical tip whose point sits at `x = 1`. Scale and orient the
/// result through the consumer's transform; the proportions here are
/// fractions of the unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowFactory {
    shaft_radius: f64,
    tip_length: f64,
    tip_radius: f64,
    resolution: u32,
}

impl ArrowFactory {
    /// Create a factory with explicit proportions.
    pub fn new(shaft_radius: f64, tip_length: f64, tip_radius: f64, resolution: u32) -> Result<Self> {
        check_positive("arrow shaft radius", shaft_radius)?;
        check_tip_length(tip_length)?;
        check_positive("arrow tip radius", tip_radius)?;
        check_resolution(resolution)?;

        Ok(Self {
            shaft_radius,
            tip_length,
            tip_radius,
            resolution,
        })
    }

    /// Radius of the cylindrical shaft.
    pub fn shaft_radius(&self) -> f64 {
        self.shaft_radius
    }

    /// Set the shaft radius.
    pub fn set_shaft_radius(&mut self, shaft_radius: f64) -> Result<()> {
        check_positive("arrow shaft radius", shaft_radius)?;
        self.shaft_radius = shaft_radius;
        Ok(())
    }

    /// Fraction of the unit length taken by the tip cone.
    pub fn tip_length(&self) -> f64 {
        self.tip_length
    }

    /// Set the tip length fraction.
    pub fn set_tip_length(&mut self, tip_length: f64) -> Result<()> {
        check_tip_length(tip_length)?;
        self.tip_length = tip_length;
        Ok(())
    }

    /// Radius of the tip cone at its collar.
    pub fn tip_radius(&self) -> f64 {
        self.tip_radius
    }

    /// Set the tip radius.
    pub fn set_tip_radius(&mut self, tip_radius: f64) -> Result<()> {
        check_positive("arrow tip radius", tip_radius)?;
        self.tip_radius = tip_radius;
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

    /// Generate the arrow as a point set.
    ///
    /// Shaft rings run from the tail at `x = 0` to the tip collar, then
    /// the tip cone tapers from the collar's wider ring to a single point
    /// at `x = 1`.
    pub fn make_points(&self) -> BoundedPointCloud {
        let mut cloud = BoundedPointCloud::new();
        let shaft_end = 1.0 - self.tip_length;
        let rings = self.resolution;

        for i in 0..=rings {
            let x = shaft_end * f64::from(i) / f64::from(rings);
            push_ring(self.shaft_radius, self.resolution, x, &mut cloud);
        }

        for i in 0..rings {
            let f = f64::from(i) / f64::from(rings);
            let x = shaft_end + f * self.tip_length;
            push_ring(self.tip_radius * (1.0 - f), self.resolution, x, &mut cloud);
        }
        cloud.push(Point3d::new(1.0, 0.0, 0.0));

        cloud
    }
}

impl Default for ArrowFactory {
    fn default() -> Self {
        Self {
            shaft_radius: 0.05,
            tip_length: 0.2,
            tip_radius: 0.1,
            resolution: 20,
        }
    }
}

fn check_tip_length(tip_length: f64) -> Result<()> {
    if !tip_length.is_finite() || tip_length <= 0.0 || tip_length >= 1.0 {
        return Err(Error::InvalidArgument(format!(
            "arrow tip length must lie strictly between 0 and 1, got {}",
            tip_length
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_proportions() {
        let factory = ArrowFactory::default();
        assert_relative_eq!(factory.shaft_radius(), 0.05);
        assert_relative_eq!(factory.tip_length(), 0.2);
        assert_relative_eq!(factory.tip_radius(), 0.1);
        assert_eq!(factory.resolution(), 20);
    }

    #[test]
    fn test_point_count() {
        let factory = ArrowFactory::new(0.05, 0.2, 0.1, 4).unwrap();
        let cloud = factory.make_points();

        // 5 shaft rings and 4 tip rings of 4 points, plus the tip itself.
        assert_eq!(cloud.len(), 5 * 4 + 4 * 4 + 1);
    }

    #[test]
    fn test_arrow_spans_the_unit_interval() {
        let factory = ArrowFactory::default();
        let cloud = factory.make_points();

        for point in cloud.iter() {
            assert!(point.x >= -1e-12 && point.x <= 1.0 + 1e-12);
        }
        let tip = Point3d::new(1.0, 0.0, 0.0);
        assert!(cloud.iter().any(|p| *p == tip));
    }

    #[test]
    fn test_shaft_rings_hold_their_radius() {
        let factory = ArrowFactory::new(0.05, 0.2, 0.1, 4).unwrap();
        let cloud = factory.make_points();

        // Shaft rings occupy the first 5 * 4 points.
        for point in cloud.iter().take(20) {
            assert!(point.x <= 0.8 + 1e-12);
            assert_relative_eq!(point.y.hypot(point.z), 0.05, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_tip_collar_is_wider_than_the_shaft() {
        let factory = ArrowFactory::new(0.05, 0.2, 0.1, 4).unwrap();
        let cloud = factory.make_points();

        // The first tip ring sits at the collar with the full tip radius.
        let collar = &cloud[20];
        assert_relative_eq!(collar.x, 0.8, epsilon = 1e-12);
        assert_relative_eq!(collar.y.hypot(collar.z), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_bad_proportions() {
        assert!(ArrowFactory::new(0.0, 0.2, 0.1, 20).is_err());
        assert!(ArrowFactory::new(0.05, 0.0, 0.1, 20).is_err());
        assert!(ArrowFactory::new(0.05, 1.0, 0.1, 20).is_err());
        assert!(ArrowFactory::new(0.05, 1.5, 0.1, 20).is_err());
        assert!(ArrowFactory::new(0.05, 0.2, 0.1, 1).is_err());

        let mut factory = ArrowFactory::default();
        assert!(factory.set_tip_length(1.0).is_err());
        assert!(factory.set_shaft_radius(-0.1).is_err());
        assert_eq!(factory, ArrowFactory::default());
    }
}
