//! # Pointplot Shapes
//!
//! Parametric point-set generators for pointplot.
//!
//! This crate samples surfaces and glyph shapes into
//! [`BoundedPointCloud`](pointplot_core::BoundedPointCloud)s: grid sweeps
//! of height fields, spherical shells, and the cone and arrow factories.

pub mod arrow;
pub mod cone;
pub mod sphere;
pub mod surface;

mod utils;

// Re-export commonly used items
pub use arrow::*;
pub use cone::*;
pub use sphere::*;
pub use surface::*;
