use std::ops::Mul;

use super::{Matrix3, check_invertible, impl_matrix_common};
use crate::error::Result;
use crate::quat::Quaternion;
use crate::vec::{Vector3, Vector4};

/// 4x4 matrix, column-major. Translation lives in `m[12..15]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    pub m: [f64; 16],
}

impl_matrix_common!(Matrix4, 16);

impl Matrix4 {
    #[rustfmt::skip]
    pub const fn identity() -> Self {
        Self::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub const fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut m = Self::identity();
        m.m[12] = x;
        m.m[13] = y;
        m.m[14] = z;
        m
    }

    pub const fn scaling(x: f64, y: f64, z: f64) -> Self {
        let mut m = Self::identity();
        m.m[0] = x;
        m.m[5] = y;
        m.m[10] = z;
        m
    }

    pub fn rotation_x(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Self::identity();
        m.m[5] = c;
        m.m[6] = s;
        m.m[9] = -s;
        m.m[10] = c;
        m
    }

    pub fn rotation_y(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Self::identity();
        m.m[0] = c;
        m.m[2] = -s;
        m.m[8] = s;
        m.m[10] = c;
        m
    }

    pub fn rotation_z(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Self::identity();
        m.m[0] = c;
        m.m[1] = s;
        m.m[4] = -s;
        m.m[5] = c;
        m
    }

    /// Rotation around an arbitrary axis (Rodrigues). The axis is normalized
    /// first, a zero axis gives NaN.
    #[rustfmt::skip]
    pub fn rotation(axis: &Vector3, radians: f64) -> Self {
        let Vector3 { x, y, z } = axis.normalize();
        let (s, c) = radians.sin_cos();
        let t = 1.0 - c;
        Self::new([
            t * x * x + c,     t * x * y + s * z, t * x * z - s * y, 0.0,
            t * x * y - s * z, t * y * y + c,     t * y * z + s * x, 0.0,
            t * x * z + s * y, t * y * z - s * x, t * z * z + c,     0.0,
            0.0,               0.0,               0.0,               1.0,
        ])
    }

    /// Right-handed view matrix looking from `eye` towards `target`.
    #[rustfmt::skip]
    pub fn look_at(eye: &Vector3, target: &Vector3, up: &Vector3) -> Self {
        let f = (*target - *eye).normalize();
        let r = f.cross(up).normalize();
        let u = r.cross(&f);
        Self::new([
            r.x, u.x, -f.x, 0.0,
            r.y, u.y, -f.y, 0.0,
            r.z, u.z, -f.z, 0.0,
            -r.dot(eye), -u.dot(eye), f.dot(eye), 1.0,
        ])
    }

    /// Symmetric right-handed perspective projection mapping depth to
    /// `[-1, 1]`. `fov_y` is in radians.
    #[rustfmt::skip]
    pub fn perspective(fov_y: f64, aspect: f64, near: f64, far: f64) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let nf = 1.0 / (near - far);
        Self::new([
            f / aspect, 0.0, 0.0,                      0.0,
            0.0,        f,   0.0,                      0.0,
            0.0,        0.0, (far + near) * nf,        -1.0,
            0.0,        0.0, 2.0 * far * near * nf,    0.0,
        ])
    }

    #[rustfmt::skip]
    pub fn orthographic(
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) -> Self {
        let rl = 1.0 / (right - left);
        let tb = 1.0 / (top - bottom);
        let fn_ = 1.0 / (far - near);
        Self::new([
            2.0 * rl,               0.0,                    0.0,                  0.0,
            0.0,                    2.0 * tb,               0.0,                  0.0,
            0.0,                    0.0,                    -2.0 * fn_,           0.0,
            -(right + left) * rl,   -(top + bottom) * tb,   -(far + near) * fn_,  1.0,
        ])
    }

    #[rustfmt::skip]
    pub fn frustum(
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) -> Self {
        let rl = 1.0 / (right - left);
        let tb = 1.0 / (top - bottom);
        let nf = 1.0 / (near - far);
        Self::new([
            2.0 * near * rl,      0.0,                  0.0,                      0.0,
            0.0,                  2.0 * near * tb,      0.0,                      0.0,
            (right + left) * rl,  (top + bottom) * tb,  (far + near) * nf,        -1.0,
            0.0,                  0.0,                  2.0 * far * near * nf,    0.0,
        ])
    }

    /// Rotation matrix of `q`, which is expected to be normalized.
    pub fn from_quaternion(q: &Quaternion) -> Self {
        let r = Matrix3::from_quaternion(q).m;
        let mut m = Self::identity();
        for col in 0..3 {
            m.m[col * 4..col * 4 + 3].copy_from_slice(&r[col * 3..col * 3 + 3]);
        }
        m
    }

    /// `rotation * scaling * translation`: the translation is applied first,
    /// in the rotated and scaled frame.
    pub fn trs(translation: &Vector3, rotation: &Quaternion, scale: &Vector3) -> Self {
        Self::from_quaternion(rotation)
            * Self::scaling(scale.x, scale.y, scale.z)
            * Self::translation(translation.x, translation.y, translation.z)
    }

    pub fn transpose(&self) -> Self {
        Self::new(std::array::from_fn(|i| self.m[(i % 4) * 4 + i / 4]))
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0] * (m[5] * (m[10] * m[15] - m[11] * m[14]) - m[9] * (m[6] * m[15] - m[7] * m[14])
            + m[13] * (m[6] * m[11] - m[7] * m[10]))
            - m[4]
                * (m[1] * (m[10] * m[15] - m[11] * m[14]) - m[9] * (m[2] * m[15] - m[3] * m[14])
                    + m[13] * (m[2] * m[11] - m[3] * m[10]))
            + m[8]
                * (m[1] * (m[6] * m[15] - m[7] * m[14]) - m[5] * (m[2] * m[15] - m[3] * m[14])
                    + m[13] * (m[2] * m[7] - m[3] * m[6]))
            - m[12]
                * (m[1] * (m[6] * m[11] - m[7] * m[10]) - m[5] * (m[2] * m[11] - m[3] * m[10])
                    + m[9] * (m[2] * m[7] - m[3] * m[6]))
    }

    /// Closed-form inverse through the adjugate.
    pub fn inverse(&self) -> Result<Self> {
        let inv = self.adjugate();
        let m = &self.m;
        let det = m[0] * inv[0] + m[1] * inv[4] + m[2] * inv[8] + m[3] * inv[12];
        let inv_det = 1.0 / check_invertible(det)?;
        Ok(Self::new(inv.map(|v| v * inv_det)))
    }

    fn adjugate(&self) -> [f64; 16] {
        let m = &self.m;
        let mut inv = [0.0; 16];

        inv[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
            + m[9] * m[7] * m[14]
            + m[13] * m[6] * m[11]
            - m[13] * m[7] * m[10];
        inv[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
            - m[8] * m[7] * m[14]
            - m[12] * m[6] * m[11]
            + m[12] * m[7] * m[10];
        inv[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
            + m[8] * m[7] * m[13]
            + m[12] * m[5] * m[11]
            - m[12] * m[7] * m[9];
        inv[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
            - m[8] * m[6] * m[13]
            - m[12] * m[5] * m[10]
            + m[12] * m[6] * m[9];

        inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
            - m[9] * m[3] * m[14]
            - m[13] * m[2] * m[11]
            + m[13] * m[3] * m[10];
        inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
            + m[8] * m[3] * m[14]
            + m[12] * m[2] * m[11]
            - m[12] * m[3] * m[10];
        inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
            - m[8] * m[3] * m[13]
            - m[12] * m[1] * m[11]
            + m[12] * m[3] * m[9];
        inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
            + m[8] * m[2] * m[13]
            + m[12] * m[1] * m[10]
            - m[12] * m[2] * m[9];

        inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
            + m[5] * m[3] * m[14]
            + m[13] * m[2] * m[7]
            - m[13] * m[3] * m[6];
        inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
            - m[4] * m[3] * m[14]
            - m[12] * m[2] * m[7]
            + m[12] * m[3] * m[6];
        inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
            + m[4] * m[3] * m[13]
            + m[12] * m[1] * m[7]
            - m[12] * m[3] * m[5];
        inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
            - m[4] * m[2] * m[13]
            - m[12] * m[1] * m[6]
            + m[12] * m[2] * m[5];

        inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
            - m[5] * m[3] * m[10]
            - m[9] * m[2] * m[7]
            + m[9] * m[3] * m[6];
        inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
            + m[4] * m[3] * m[10]
            + m[8] * m[2] * m[7]
            - m[8] * m[3] * m[6];
        inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
            - m[4] * m[3] * m[9]
            - m[8] * m[1] * m[7]
            + m[8] * m[3] * m[5];
        inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
            + m[4] * m[2] * m[9]
            + m[8] * m[1] * m[6]
            - m[8] * m[2] * m[5];

        inv
    }

    pub fn extract_translation(&self) -> Vector3 {
        Vector3::new(self.m[12], self.m[13], self.m[14])
    }

    /// Lengths of the three basis columns. Never negative, so a reflection
    /// is not recovered.
    pub fn extract_scale(&self) -> Vector3 {
        let column = |c: usize| Vector3::new(self.m[c * 4], self.m[c * 4 + 1], self.m[c * 4 + 2]);
        Vector3::new(column(0).length(), column(1).length(), column(2).length())
    }

    /// Rotation of the upper 3x3 block after dividing out [`Self::extract_scale`].
    ///
    /// A zero scale on any axis yields NaN components.
    pub fn extract_rotation(&self) -> Quaternion {
        let scale = self.extract_scale().to_array();
        let r = Matrix3::new(std::array::from_fn(|i| {
            let (col, row) = (i / 3, i % 3);
            self.m[col * 4 + row] / scale[col]
        }));
        Quaternion::from_rotation_matrix(&r)
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, other: Matrix4) -> Matrix4 {
        let a = &self.m;
        let b = &other.m;
        let mut result = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                for k in 0..4 {
                    result[col * 4 + row] += a[k * 4 + row] * b[col * 4 + k];
                }
            }
        }
        Matrix4::new(result)
    }
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;

    fn mul(self, v: Vector4) -> Vector4 {
        let m = &self.m;
        Vector4::new(
            m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12] * v.w,
            m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13] * v.w,
            m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14] * v.w,
            m[3] * v.x + m[7] * v.y + m[11] * v.z + m[15] * v.w,
        )
    }
}

/// Treats the vector as a point (`w = 1`). Use
/// [`Vector4::perspective_divide`] on the result after a projection.
impl Mul<Vector3> for Matrix4 {
    type Output = Vector4;

    fn mul(self, v: Vector3) -> Vector4 {
        self * Vector4::from(v)
    }
}

impl std::fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        super::fmt_rows(f, "Matrix4", &self.m, 4, 4)
    }
}
