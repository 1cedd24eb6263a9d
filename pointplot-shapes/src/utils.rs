//! Shared helpers for the shape generators.

use pointplot_core::{BoundedPointCloud, Error, Point3d, Result};
use std::f64::consts::TAU;

/// Yield `ceil((end - begin) / step)` samples of the half-open range
/// `[begin, end)`, spaced `step` apart.
///
/// Sample `i` is computed as `begin + i * step` rather than by repeated
/// addition, so long sweeps do not accumulate rounding error.
pub(crate) fn steps(begin: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = ((end - begin) / step).ceil().max(0.0) as usize;
    (0..count).map(move |i| begin + i as f64 * step)
}

/// Push a ring of `nsubdiv` points around the X axis.
///
/// The ring lies in the YZ plane at `x`, starting on the +Y side and
/// winding counterclockwise when viewed from +X.
pub(crate) fn push_ring(radius: f64, nsubdiv: u32, x: f64, out: &mut BoundedPointCloud) {
    let dtheta = TAU / f64::from(nsubdiv);

    for i in 0..nsubdiv {
        let theta = dtheta * f64::from(i);
        out.push(Point3d::new(x, theta.cos() * radius, theta.sin() * radius));
    }
}

/// Check that a dimension or step is finite and strictly positive.
pub(crate) fn check_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "{} must be finite and positive, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Check that a ring resolution is high enough to describe a circle.
pub(crate) fn check_resolution(resolution: u32) -> Result<()> {
    if resolution < 3 {
        return Err(Error::InvalidArgument(format!(
            "ring resolution must be at least 3, got {}",
            resolution
        )));
    }
    Ok(())
}
