//! 3-axis rotation utilities
//!
//! Elementary rotation matrices around the coordinate axes, a combined
//! three-angle constructor, and a small wrapper that applies a rotation
//! to points as a matrix-vector product.

use crate::error::{Error, Result};
use crate::{Matrix3d, Point3d};
use serde::{Deserialize, Serialize};

/// Rotation matrix around the X axis by `t` radians
pub fn x_axis_rotation(t: f64) -> Matrix3d {
    Matrix3d::new(
        1.0, 0.0, 0.0,
        0.0, t.cos(), -t.sin(),
        0.0, t.sin(), t.cos(),
    )
}

/// Rotation matrix around the Y axis by `t` radians
pub fn y_axis_rotation(t: f64) -> Matrix3d {
    Matrix3d::new(
        t.cos(), 0.0, t.sin(),
        0.0, 1.0, 0.0,
        -t.sin(), 0.0, t.cos(),
    )
}

/// Rotation matrix around the Z axis by `t` radians
pub fn z_axis_rotation(t: f64) -> Matrix3d {
    Matrix3d::new(
        t.cos(), -t.sin(), 0.0,
        t.sin(), t.cos(), 0.0,
        0.0, 0.0, 1.0,
    )
}

/// Combined rotation matrix for rotations around all three axes
///
/// The X rotation is applied first, then Y, then Z, so the result is
/// `Rz * (Ry * Rx)`. The ordering is part of the contract: changing it
/// changes the orientation every caller sees.
pub fn rotation_matrix(rx: f64, ry: f64, rz: f64) -> Matrix3d {
    z_axis_rotation(rz) * (y_axis_rotation(ry) * x_axis_rotation(rx))
}

/// A rotation applied to points as the matrix-vector product `M * p`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    matrix: Matrix3d,
}

impl Rotation {
    /// Create a rotation from an arbitrary 3x3 matrix
    ///
    /// The matrix is not required to come from [`rotation_matrix`]; any
    /// linear map can be wrapped and applied.
    pub fn new(matrix: Matrix3d) -> Self {
        Self { matrix }
    }

    /// Create the identity rotation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3d::identity(),
        }
    }

    /// Create a rotation from three axis angles in radians
    ///
    /// Equivalent to `Rotation::new(rotation_matrix(rx, ry, rz))` once the
    /// angles have been checked for finiteness.
    pub fn from_angles(rx: f64, ry: f64, rz: f64) -> Result<Self> {
        if !(rx.is_finite() && ry.is_finite() && rz.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "rotation angles must be finite, got ({}, {}, {})",
                rx, ry, rz
            )));
        }
        Ok(Self::new(rotation_matrix(rx, ry, rz)))
    }

    /// Create a rotation from 9 row-major matrix entries
    ///
    /// This is the entry point for matrix data of dynamic size; anything
    /// other than exactly 9 entries is rejected.
    pub fn from_row_slice(entries: &[f64]) -> Result<Self> {
        if entries.len() != 9 {
            return Err(Error::DimensionMismatch {
                expected: 9,
                actual: entries.len(),
            });
        }
        Ok(Self::new(Matrix3d::from_row_slice(entries)))
    }

    /// Rotate a point
    pub fn rotate(&self, point: &Point3d) -> Point3d {
        Point3d::from(self.matrix * point.coords)
    }

    /// The current rotation matrix
    pub fn matrix(&self) -> &Matrix3d {
        &self.matrix
    }

    /// Replace the rotation matrix wholesale
    pub fn set_matrix(&mut self, matrix: Matrix3d) {
        self.matrix = matrix;
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Matrix3d> for Rotation {
    fn from(matrix: Matrix3d) -> Self {
        Self::new(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector3d;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_angles_give_identity() {
        let m = rotation_matrix(0.0, 0.0, 0.0);
        assert_relative_eq!(m, Matrix3d::identity(), epsilon = 1e-12);

        let rot = Rotation::new(m);
        let p = Point3d::new(1.5, -2.0, 0.25);
        assert_relative_eq!(rot.rotate(&p), p, epsilon = 1e-12);
    }

    #[test]
    fn test_x_axis_sign_convention() {
        let t = 0.7;
        let m = x_axis_rotation(t);

        let y = m * Vector3d::new(0.0, 1.0, 0.0);
        assert_relative_eq!(y, Vector3d::new(0.0, t.cos(), t.sin()), epsilon = 1e-12);

        let z = m * Vector3d::new(0.0, 0.0, 1.0);
        assert_relative_eq!(z, Vector3d::new(0.0, -t.sin(), t.cos()), epsilon = 1e-12);
    }

    #[test]
    fn test_combined_matches_sequential_application() {
        let (rx, ry, rz) = (30f64.to_radians(), 45f64.to_radians(), 60f64.to_radians());
        let p = Point3d::new(1.0, -2.0, 3.0);

        let combined = Rotation::new(rotation_matrix(rx, ry, rz)).rotate(&p);
        let staged = Point3d::from(
            z_axis_rotation(rz) * (y_axis_rotation(ry) * (x_axis_rotation(rx) * p.coords)),
        );

        assert_relative_eq!(combined, staged, epsilon = 1e-12);
    }

    #[test]
    fn test_construction_path_is_orthogonal() {
        let m = rotation_matrix(0.3, -1.1, 2.4);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(m * m.transpose(), Matrix3d::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_from_angles_rejects_non_finite() {
        assert!(Rotation::from_angles(f64::NAN, 0.0, 0.0).is_err());
        assert!(Rotation::from_angles(0.0, f64::INFINITY, 0.0).is_err());
        assert!(Rotation::from_angles(0.0, 0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_from_row_slice_checks_length() {
        let err = Rotation::from_row_slice(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 9,
                actual: 2
            }
        ));

        // Quarter turn around Z, row-major.
        let rot = Rotation::from_row_slice(&[
            0.0, -1.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 0.0, 1.0,
        ])
        .unwrap();
        let q = rot.rotate(&Point3d::new(1.0, 0.0, 0.0));
        assert_relative_eq!(q, Point3d::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_matrix_can_be_replaced() {
        let mut rot = Rotation::identity();
        rot.set_matrix(z_axis_rotation(std::f64::consts::FRAC_PI_2));
        let q = rot.rotate(&Point3d::new(1.0, 0.0, 0.0));
        assert_relative_eq!(q, Point3d::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }
}
