//! Core data structures for pointplot
//!
//! This crate provides the data side of a 3D scatter plot: a bounded point
//! cloud with a parallel depth scalar per point, an axis-aligned extent
//! tracker, and 3-axis rotation utilities. Turning the data into pixels is
//! left to whatever rendering front end consumes it.

pub mod error;
pub mod extent;
pub mod point_cloud;
pub mod rotation;

pub use error::*;
pub use extent::*;
pub use point_cloud::*;
pub use rotation::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix3, Point3, Vector3};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// A 3x3 matrix with double precision entries
pub type Matrix3d = Matrix3<f64>;
