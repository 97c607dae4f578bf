use std::ops::Mul;

use super::{check_invertible, impl_matrix_common};
use crate::error::Result;
use crate::vec::Vector2;

/// 2x2 matrix, column-major `[m00, m10, m01, m11]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2 {
    pub m: [f64; 4],
}

impl_matrix_common!(Matrix2, 4);

impl Matrix2 {
    pub const fn identity() -> Self {
        Self::new([1.0, 0.0, 0.0, 1.0])
    }

    /// Counter-clockwise rotation
    pub fn rotation(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new([c, s, -s, c])
    }

    pub const fn scaling(x: f64, y: f64) -> Self {
        Self::new([x, 0.0, 0.0, y])
    }

    pub const fn from_columns(c0: Vector2, c1: Vector2) -> Self {
        Self::new([c0.x, c0.y, c1.x, c1.y])
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0] * m[3] - m[2] * m[1]
    }

    pub fn inverse(&self) -> Result<Self> {
        let inv_det = 1.0 / check_invertible(self.determinant())?;
        Ok(self.adjoint() * inv_det)
    }

    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self::new([m[0], m[2], m[1], m[3]])
    }

    pub fn adjoint(&self) -> Self {
        let m = &self.m;
        Self::new([m[3], -m[1], -m[2], m[0]])
    }
}

impl Mul for Matrix2 {
    type Output = Matrix2;

    fn mul(self, other: Matrix2) -> Matrix2 {
        let a = &self.m;
        let b = &other.m;
        Matrix2::new([
            a[0] * b[0] + a[2] * b[1],
            a[1] * b[0] + a[3] * b[1],
            a[0] * b[2] + a[2] * b[3],
            a[1] * b[2] + a[3] * b[3],
        ])
    }
}

impl Mul<Vector2> for Matrix2 {
    type Output = Vector2;

    fn mul(self, v: Vector2) -> Vector2 {
        let m = &self.m;
        Vector2::new(m[0] * v.x + m[2] * v.y, m[1] * v.x + m[3] * v.y)
    }
}

impl std::fmt::Display for Matrix2 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        super::fmt_rows(f, "Matrix2", &self.m, 2, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;
    use crate::near::Near;
    use pretty_assertions::assert_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_identity_and_default() {
        assert_eq!(Matrix2::default(), Matrix2::identity());
        assert_eq!(Matrix2::identity().determinant(), 1.0);
        assert_eq!(Matrix2::zero().m, [0.0; 4]);
    }

    #[test]
    fn test_zero_is_singular() {
        assert_eq!(
            Matrix2::zero().inverse(),
            Err(MathError::SingularMatrix { determinant: 0.0 })
        );
    }

    #[test]
    fn test_try_from_requires_exact_arity() {
        assert!(Matrix2::try_from(&[1.0, 2.0, 3.0][..]).is_err());
        assert_eq!(
            Matrix2::try_from(&[1.0, 2.0, 3.0, 4.0][..]),
            Ok(Matrix2::new([1.0, 2.0, 3.0, 4.0]))
        );
    }

    #[test]
    fn test_index() {
        let mut m = Matrix2::identity();
        assert_eq!(m.get(3), Ok(1.0));
        assert!(m.get(4).is_err());
        m.set(1, 5.0).unwrap();
        assert_eq!(m.data(), &[1.0, 5.0, 0.0, 1.0]);
        assert_eq!(m.set(4, 1.0), Err(MathError::OutOfRange { index: 4, len: 4 }));
    }

    #[test]
    fn test_rotation_vector() {
        let v = Matrix2::rotation(FRAC_PI_2) * Vector2::new(1.0, 0.0);
        assert!(v.near(&Vector2::new(0.0, 1.0)));
        let s = Matrix2::scaling(2.0, 3.0) * Vector2::new(1.0, 1.0);
        assert_eq!(s, Vector2::new(2.0, 3.0));
    }

    #[test]
    fn test_multiply_order() {
        // scale first, then rotate
        let m = Matrix2::rotation(FRAC_PI_2) * Matrix2::scaling(2.0, 1.0);
        let v = m * Vector2::new(1.0, 0.0);
        assert!(v.near(&Vector2::new(0.0, 2.0)));
    }

    #[test]
    fn test_multiply() {
        let a = Matrix2::new([1.0, 2.0, 3.0, 4.0]);
        let b = Matrix2::new([5.0, 6.0, 7.0, 8.0]);
        assert_eq!((a * b).m, [23.0, 34.0, 31.0, 46.0]);
        assert_eq!((a * 2.0).m, [2.0, 4.0, 6.0, 8.0]);
        assert_eq!((a + b).m, [6.0, 8.0, 10.0, 12.0]);
        assert_eq!((b - a).m, [4.0, 4.0, 4.0, 4.0]);
    }

    #[test]
    fn test_inverse() {
        let a = Matrix2::new([4.0, 2.0, 7.0, 6.0]);
        assert_eq!(a.determinant(), 10.0);
        let inv = a.inverse().unwrap();
        assert!((a * inv).near(&Matrix2::identity()));
        assert!(inv.near(&Matrix2::new([0.6, -0.2, -0.7, 0.4])));
    }

    #[test]
    fn test_transpose_adjoint() {
        let a = Matrix2::new([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a.transpose().m, [1.0, 3.0, 2.0, 4.0]);
        assert_eq!(a.adjoint().m, [4.0, -2.0, -3.0, 1.0]);
        assert_eq!(
            Matrix2::from_columns(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)),
            a
        );
    }

    #[test]
    fn test_frobenius_norm() {
        assert_eq!(Matrix2::new([1.0, 2.0, 2.0, 4.0]).frobenius_norm(), 5.0);
    }
}
