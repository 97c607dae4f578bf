use std::ops::Mul;

use super::{Matrix2d, Matrix4, check_invertible, impl_matrix_common};
use crate::error::Result;
use crate::quat::Quaternion;
use crate::vec::Vector3;

/// 3x3 matrix, column-major.
///
/// Doubles as a homogeneous 2D transform: the 2D builders keep the
/// translation in column 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    pub m: [f64; 9],
}

impl_matrix_common!(Matrix3, 9);

impl Matrix3 {
    pub const fn identity() -> Self {
        Self::new([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0])
    }

    pub const fn from_columns(c0: Vector3, c1: Vector3, c2: Vector3) -> Self {
        Self::new([c0.x, c0.y, c0.z, c1.x, c1.y, c1.z, c2.x, c2.y, c2.z])
    }

    /// Upper-left 3x3 block
    pub fn from_matrix4(m: &Matrix4) -> Self {
        let m = &m.m;
        Self::new([m[0], m[1], m[2], m[4], m[5], m[6], m[8], m[9], m[10]])
    }

    pub fn from_matrix2d(m: &Matrix2d) -> Self {
        let [a, b, c, d, tx, ty] = m.m;
        Self::new([a, b, 0.0, c, d, 0.0, tx, ty, 1.0])
    }

    /// Rotation matrix of `q`, which is expected to be normalized.
    pub fn from_quaternion(q: &Quaternion) -> Self {
        let x2 = q.x + q.x;
        let y2 = q.y + q.y;
        let z2 = q.z + q.z;
        let xx = q.x * x2;
        let xy = q.x * y2;
        let xz = q.x * z2;
        let yy = q.y * y2;
        let yz = q.y * z2;
        let zz = q.z * z2;
        let wx = q.w * x2;
        let wy = q.w * y2;
        let wz = q.w * z2;
        Self::new([
            1.0 - (yy + zz),
            xy + wz,
            xz - wy,
            xy - wz,
            1.0 - (xx + zz),
            yz + wx,
            xz + wy,
            yz - wx,
            1.0 - (xx + yy),
        ])
    }

    /// Matrix for transforming normals by `m`: the inverse transpose of its
    /// linear part.
    pub fn normal_from_matrix4(m: &Matrix4) -> Result<Self> {
        Ok(Self::from_matrix4(m).inverse()?.transpose())
    }

    /// Maps pixel coordinates to clip space, with y pointing down.
    pub fn projection(width: f64, height: f64) -> Self {
        Self::new([
            2.0 / width,
            0.0,
            0.0,
            0.0,
            -2.0 / height,
            0.0,
            -1.0,
            1.0,
            1.0,
        ])
    }

    pub const fn translation(x: f64, y: f64) -> Self {
        Self::new([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, 1.0])
    }

    /// Rotation around z
    pub fn rotation(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new([c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0])
    }

    pub const fn scaling(x: f64, y: f64) -> Self {
        Self::new([x, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, 1.0])
    }

    pub fn determinant(&self) -> f64 {
        let a = &self.m;
        a[0] * (a[4] * a[8] - a[5] * a[7]) - a[3] * (a[1] * a[8] - a[2] * a[7])
            + a[6] * (a[1] * a[5] - a[2] * a[4])
    }

    pub fn inverse(&self) -> Result<Self> {
        let inv_det = 1.0 / check_invertible(self.determinant())?;
        Ok(self.adjoint() * inv_det)
    }

    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self::new([m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8]])
    }

    /// Transposed cofactor matrix
    pub fn adjoint(&self) -> Self {
        let a = &self.m;
        Self::new([
            a[4] * a[8] - a[5] * a[7],
            a[2] * a[7] - a[1] * a[8],
            a[1] * a[5] - a[2] * a[4],
            a[5] * a[6] - a[3] * a[8],
            a[0] * a[8] - a[2] * a[6],
            a[2] * a[3] - a[0] * a[5],
            a[3] * a[7] - a[4] * a[6],
            a[1] * a[6] - a[0] * a[7],
            a[0] * a[4] - a[1] * a[3],
        ])
    }

    /// Post-multiplies a 2D translation
    pub fn translate(&self, x: f64, y: f64) -> Self {
        let a = &self.m;
        Self::new([
            a[0],
            a[1],
            a[2],
            a[3],
            a[4],
            a[5],
            x * a[0] + y * a[3] + a[6],
            x * a[1] + y * a[4] + a[7],
            x * a[2] + y * a[5] + a[8],
        ])
    }

    /// Post-multiplies a rotation around z
    pub fn rotate(&self, radians: f64) -> Self {
        *self * Self::rotation(radians)
    }

    /// Post-multiplies a 2D scale
    pub fn scale(&self, x: f64, y: f64) -> Self {
        let a = &self.m;
        Self::new([
            a[0] * x,
            a[1] * x,
            a[2] * x,
            a[3] * y,
            a[4] * y,
            a[5] * y,
            a[6],
            a[7],
            a[8],
        ])
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;

    fn mul(self, other: Matrix3) -> Matrix3 {
        let a = &self.m;
        let b = &other.m;
        Matrix3::new(std::array::from_fn(|i| {
            let (col, row) = (i / 3, i % 3);
            (0..3).map(|k| a[k * 3 + row] * b[col * 3 + k]).sum()
        }))
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        let m = &self.m;
        Vector3::new(
            m[0] * v.x + m[3] * v.y + m[6] * v.z,
            m[1] * v.x + m[4] * v.y + m[7] * v.z,
            m[2] * v.x + m[5] * v.y + m[8] * v.z,
        )
    }
}

impl std::fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        super::fmt_rows(f, "Matrix3", &self.m, 3, 3)
    }
}
