//! Bounded point cloud storage with parallel depth scalars

use crate::error::{Error, Result};
use crate::extent::Extent;
use crate::Point3d;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Default maximum number of points a cloud will hold
pub const DEFAULT_MAX_POINTS: usize = 1_000_000;

/// A capacity-bounded point cloud for scatter plotting
///
/// Alongside every point the cloud keeps a scalar depth value (the point's
/// Z coordinate at insertion time), which a renderer maps to color. The two
/// sequences always have the same length. Once the cloud is full, new
/// points stop growing it and instead overwrite a uniformly random existing
/// slot, so insertion order is only meaningful below capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundedPointCloud {
    points: Vec<Point3d>,
    depths: Vec<f64>,
    extent: Option<Extent>,
    max_points: usize,
}

impl BoundedPointCloud {
    /// Create an empty cloud with the default capacity
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            depths: Vec::new(),
            extent: None,
            max_points: DEFAULT_MAX_POINTS,
        }
    }

    /// Create an empty cloud holding at most `max_points` points
    pub fn with_max_points(max_points: usize) -> Result<Self> {
        if max_points == 0 {
            return Err(Error::InvalidArgument(
                "point capacity must be positive".to_string(),
            ));
        }
        Ok(Self {
            points: Vec::new(),
            depths: Vec::new(),
            extent: None,
            max_points,
        })
    }

    /// Add a point to the cloud
    ///
    /// Below capacity the point and its depth (the point's z) are appended
    /// together. At capacity a uniformly random slot is overwritten instead,
    /// point and depth as a pair. The replacement probability does not decay
    /// with the number of points seen, so a long stream skews toward recent
    /// points rather than sampling the stream uniformly.
    pub fn push(&mut self, point: Point3d) {
        if self.points.len() < self.max_points {
            self.depths.push(point.z);
            self.points.push(point);
        } else {
            let slot = rand::thread_rng().gen_range(0..self.max_points);
            self.depths[slot] = point.z;
            self.points[slot] = point;
        }
    }

    /// Remove all points and depth values
    ///
    /// Backing storage is released and the cloud starts from empty again.
    /// The extent, if one was assigned, is left in place; resetting it is
    /// the caller's decision.
    pub fn clear(&mut self) {
        self.points = Vec::new();
        self.depths = Vec::new();
    }

    /// Get the number of points in the cloud
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the cloud is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The maximum number of points this cloud will hold
    pub fn max_points(&self) -> usize {
        self.max_points
    }

    /// The stored points
    pub fn points(&self) -> &[Point3d] {
        &self.points
    }

    /// The depth scalar stored alongside each point
    pub fn depths(&self) -> &[f64] {
        &self.depths
    }

    /// The extent assigned to this cloud, if any
    ///
    /// The cloud never computes this itself; generators that sweep a domain
    /// assign it via [`set_extent`](Self::set_extent).
    pub fn extent(&self) -> Option<&Extent> {
        self.extent.as_ref()
    }

    /// Assign the extent describing this cloud
    pub fn set_extent(&mut self, extent: Extent) {
        self.extent = Some(extent);
    }

    /// Smallest and largest depth values, or `None` for an empty cloud
    pub fn depth_bounds(&self) -> Option<(f64, f64)> {
        if self.depths.is_empty() {
            return None;
        }
        let mut min = self.depths[0];
        let mut max = self.depths[0];
        for &depth in &self.depths {
            min = min.min(depth);
            max = max.max(depth);
        }
        Some((min, max))
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::slice::Iter<'_, Point3d> {
        self.points.iter()
    }
}

impl Default for BoundedPointCloud {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for BoundedPointCloud {
    type Output = Point3d;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl IntoIterator for BoundedPointCloud {
    type Item = Point3d;
    type IntoIter = std::vec::IntoIter<Point3d>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a BoundedPointCloud {
    type Item = &'a Point3d;
    type IntoIter = std::slice::Iter<'a, Point3d>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Extend<Point3d> for BoundedPointCloud {
    fn extend<I: IntoIterator<Item = Point3d>>(&mut self, iter: I) {
        for point in iter {
            self.push(point);
        }
    }
}

impl FromIterator<Point3d> for BoundedPointCloud {
    fn from_iter<I: IntoIterator<Item = Point3d>>(iter: I) -> Self {
        let mut cloud = Self::new();
        cloud.extend(iter);
        cloud
    }
}

/// The depth window a renderer maps onto its color scale
///
/// Depths outside the window are clamped to its edges. The default window
/// of `[-10, 10]` matches the scalar range the plotting front end has
/// historically used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthRange {
    min: f64,
    max: f64,
}

impl DepthRange {
    /// Create a depth window from its bounds
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !(min.is_finite() && max.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "depth range bounds must be finite, got ({}, {})",
                min, max
            )));
        }
        if min >= max {
            return Err(Error::InvalidArgument(format!(
                "depth range must satisfy min < max, got ({}, {})",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Lower edge of the window
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper edge of the window
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Map a depth into `[0, 1]` within the window, clamping at the edges
    pub fn normalized(&self, depth: f64) -> f64 {
        ((depth - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

impl Default for DepthRange {
    fn default() -> Self {
        Self {
            min: -10.0,
            max: 10.0,
        }
    }
}
