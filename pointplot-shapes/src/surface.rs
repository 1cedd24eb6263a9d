//! Grid sampling of height-field surfaces.

use crate::utils::{check_positive, steps};
use pointplot_core::{BoundedPointCloud, Error, Extent, Point3d, Result, Rotation};

/// A rectangular sweep domain sampled on a regular grid.
///
/// `x` runs over the half-open range `[x_begin, x_end)` and `y` over
/// `[y_begin, y_end)`, both advancing by `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSweep {
    x_begin: f64,
    x_end: f64,
    y_begin: f64,
    y_end: f64,
    step: f64,
}

impl SurfaceSweep {
    /// Create a sweep domain.
    ///
    /// The bounds must be finite and the step finite and strictly
    /// positive. Empty or inverted ranges are legal and produce an empty
    /// sample.
    pub fn new(x_begin: f64, x_end: f64, y_begin: f64, y_end: f64, step: f64) -> Result<Self> {
        for (name, value) in [
            ("sweep x begin", x_begin),
            ("sweep x end", x_end),
            ("sweep y begin", y_begin),
            ("sweep y end", y_end),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidArgument(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        check_positive("sweep step", step)?;

        Ok(Self {
            x_begin,
            x_end,
            y_begin,
            y_end,
            step,
        })
    }

    /// Create a square domain spanning `[-radius, radius)` on both axes.
    pub fn centered(radius: f64, step: f64) -> Result<Self> {
        check_positive("sweep radius", radius)?;
        Self::new(-radius, radius, -radius, radius, step)
    }

    /// Sample `z = height(x, y)` over the domain into a point cloud.
    ///
    /// The outer loop walks `x` and the inner loop walks `y`. The cloud's
    /// extent absorbs every sample *before* rotation, so it describes the
    /// swept surface rather than its rotated image; the stored points (and
    /// therefore their depths) are the rotated ones. The extent is seeded
    /// from the domain's begin corner and assigned even when the domain is
    /// empty.
    pub fn sample<F>(&self, height: F, rotation: Option<&Rotation>) -> BoundedPointCloud
    where
        F: Fn(f64, f64) -> f64,
    {
        let mut cloud = BoundedPointCloud::new();
        let corner = Point3d::new(
            self.x_begin,
            self.y_begin,
            height(self.x_begin, self.y_begin),
        );
        let mut extent = Extent::from_point(&corner);

        for x in steps(self.x_begin, self.x_end, self.step) {
            for y in steps(self.y_begin, self.y_end, self.step) {
                let point = Point3d::new(x, y, height(x, y));
                extent.expand(&point);

                match rotation {
                    Some(rotation) => cloud.push(rotation.rotate(&point)),
                    None => cloud.push(point),
                }
            }
        }

        cloud.set_extent(extent);
        cloud
    }
}

/// The height function `z = k * (x^2 + y^2) + c`.
///
/// The defaults describe the downward-opening dish used by the scatter
/// demo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paraboloid {
    /// Quadratic coefficient; negative values open downward.
    pub k: f64,
    /// Height of the surface at the origin.
    pub c: f64,
}

impl Paraboloid {
    /// Evaluate the surface height at `(x, y)`.
    pub fn height(&self, x: f64, y: f64) -> f64 {
        self.k * (x * x + y * y) + self.c
    }
}

impl Default for Paraboloid {
    fn default() -> Self {
        Self { k: -1.5, c: 0.0 }
    }
}
