//! Axis-aligned extent tracking for point sets

use crate::Point3d;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned bounding extent of a point set, widened incrementally
///
/// An extent is seeded from a single point and then only ever grows: as
/// points are absorbed, each per-axis minimum can only decrease and each
/// maximum only increase. It never shrinks short of being recreated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    min_z: f64,
    max_z: f64,
}

impl Extent {
    /// Seed an extent with a single point's coordinates on all six bounds
    pub fn from_point(point: &Point3d) -> Self {
        Self {
            min_x: point.x,
            max_x: point.x,
            min_y: point.y,
            max_y: point.y,
            min_z: point.z,
            max_z: point.z,
        }
    }

    /// Widen the extent to cover `point`
    pub fn expand(&mut self, point: &Point3d) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
        self.min_z = self.min_z.min(point.z);
        self.max_z = self.max_z.max(point.z);
    }

    /// Smallest X coordinate absorbed so far
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Largest X coordinate absorbed so far
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Smallest Y coordinate absorbed so far
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Largest Y coordinate absorbed so far
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Smallest Z coordinate absorbed so far
    pub fn min_z(&self) -> f64 {
        self.min_z
    }

    /// Largest Z coordinate absorbed so far
    pub fn max_z(&self) -> f64 {
        self.max_z
    }

    /// Midpoint of the extent on every axis
    pub fn center(&self) -> Point3d {
        Point3d::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
            (self.min_z + self.max_z) / 2.0,
        )
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min_x={:.3}, max_x={:.3}, min_y={:.3}, max_y={:.3}, min_z={:.3}, max_z={:.3}",
            self.min_x, self.max_x, self.min_y, self.max_y, self.min_z, self.max_z
        )
    }
}
