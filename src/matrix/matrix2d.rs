use std::ops::Mul;

use super::{Matrix3, check_invertible, impl_matrix_common};
use crate::error::Result;
use crate::vec::Vector2;

/// 2D affine transform stored as `[a, b, c, d, tx, ty]`, representing
///
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// | 0  0  1  |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2d {
    pub m: [f64; 6],
}

impl_matrix_common!(Matrix2d, 6);

impl Matrix2d {
    pub const fn identity() -> Self {
        Self::new([1.0, 0.0, 0.0, 1.0, 0.0, 0.0])
    }

    pub const fn translation(x: f64, y: f64) -> Self {
        Self::new([1.0, 0.0, 0.0, 1.0, x, y])
    }

    pub fn rotation(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new([c, s, -s, c, 0.0, 0.0])
    }

    pub const fn scaling(x: f64, y: f64) -> Self {
        Self::new([x, 0.0, 0.0, y, 0.0, 0.0])
    }

    /// Scale, then rotate, then translate
    pub fn from_rotation_translation_scale(
        radians: f64,
        translation: Vector2,
        scale: Vector2,
    ) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new([
            c * scale.x,
            s * scale.x,
            -s * scale.y,
            c * scale.y,
            translation.x,
            translation.y,
        ])
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0] * m[3] - m[1] * m[2]
    }

    pub fn inverse(&self) -> Result<Self> {
        let a = &self.m;
        let inv_det = 1.0 / check_invertible(self.determinant())?;
        Ok(Self::new([
            a[3] * inv_det,
            -a[1] * inv_det,
            -a[2] * inv_det,
            a[0] * inv_det,
            (a[2] * a[5] - a[3] * a[4]) * inv_det,
            (a[1] * a[4] - a[0] * a[5]) * inv_det,
        ]))
    }

    /// Post-multiplies a translation: the offset is applied before `self`.
    pub fn translate(&self, x: f64, y: f64) -> Self {
        let a = &self.m;
        Self::new([
            a[0],
            a[1],
            a[2],
            a[3],
            a[0] * x + a[2] * y + a[4],
            a[1] * x + a[3] * y + a[5],
        ])
    }

    /// Post-multiplies a rotation
    pub fn rotate(&self, radians: f64) -> Self {
        *self * Self::rotation(radians)
    }

    /// Post-multiplies a scale
    pub fn scale(&self, x: f64, y: f64) -> Self {
        let a = &self.m;
        Self::new([a[0] * x, a[1] * x, a[2] * y, a[3] * y, a[4], a[5]])
    }

    pub fn extract_translation(&self) -> Vector2 {
        Vector2::new(self.m[4], self.m[5])
    }

    /// Rotation angle of the first column.
    ///
    /// Only meaningful for transforms without skew.
    pub fn extract_rotation(&self) -> f64 {
        self.m[1].atan2(self.m[0])
    }

    /// Column norms of the linear part.
    ///
    /// Only meaningful for transforms without skew. A reflection shows up as a
    /// rotation, never as a negative scale.
    pub fn extract_scale(&self) -> Vector2 {
        let m = &self.m;
        Vector2::new(m[0].hypot(m[1]), m[2].hypot(m[3]))
    }

    pub fn to_matrix3(&self) -> Matrix3 {
        Matrix3::from_matrix2d(self)
    }
}

impl Mul for Matrix2d {
    type Output = Matrix2d;

    fn mul(self, other: Matrix2d) -> Matrix2d {
        let a = &self.m;
        let b = &other.m;
        Matrix2d::new([
            a[0] * b[0] + a[2] * b[1],
            a[1] * b[0] + a[3] * b[1],
            a[0] * b[2] + a[2] * b[3],
            a[1] * b[2] + a[3] * b[3],
            a[0] * b[4] + a[2] * b[5] + a[4],
            a[1] * b[4] + a[3] * b[5] + a[5],
        ])
    }
}

/// Transforms a point, translation included
impl Mul<Vector2> for Matrix2d {
    type Output = Vector2;

    fn mul(self, v: Vector2) -> Vector2 {
        let m = &self.m;
        Vector2::new(
            m[0] * v.x + m[2] * v.y + m[4],
            m[1] * v.x + m[3] * v.y + m[5],
        )
    }
}

impl std::fmt::Display for Matrix2d {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        super::fmt_rows(f, "Matrix2d", &self.m, 2, 3)
    }
}
