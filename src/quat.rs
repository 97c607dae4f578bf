//! Rotation quaternions
//!
//! Quaternions are never normalized implicitly: construct from an axis and
//! angle, or call [`Quaternion::normalize`] after manual edits.

use std::ops::{Add, Mul, Neg, Sub};

use log::trace;

use crate::error::{MathError, Result, check_index, exact};
use crate::matrix::{Matrix3, Matrix4};
use crate::near::{AXIS_ANGLE_EPSILON, Near, SLERP_LERP_THRESHOLD, all_near};
use crate::vec::Vector3;

/// `x`, `y`, `z` is the vector part, `w` the scalar part.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

/// The identity rotation
impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Rotation of `radians` around `axis`. The axis is normalized first.
    pub fn from_axis_angle(axis: &Vector3, radians: f64) -> Self {
        let (s, c) = (radians * 0.5).sin_cos();
        let axis = axis.normalize();
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Roll `x`, pitch `y` and yaw `z` in radians, the inverse of
    /// [`Quaternion::to_euler`].
    pub fn from_euler(x: f64, y: f64, z: f64) -> Self {
        let (sx, cx) = (x * 0.5).sin_cos();
        let (sy, cy) = (y * 0.5).sin_cos();
        let (sz, cz) = (z * 0.5).sin_cos();
        Self::new(
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
            cx * cy * cz + sx * sy * sz,
        )
    }

    /// Rotation that maps +z onto `forward` with +y as close to `up` as
    /// possible.
    ///
    /// `forward` parallel to `up` has no defined basis and yields NaN.
    pub fn look_rotation(forward: &Vector3, up: &Vector3) -> Self {
        let forward = forward.normalize();
        let right = up.cross(&forward).normalize();
        let up = forward.cross(&right);
        Self::from_rotation_matrix(&Matrix3::from_columns(right, up, forward))
    }

    /// [`Quaternion::look_rotation`] with +y as up
    pub fn look_rotation_up(forward: &Vector3) -> Self {
        Self::look_rotation(forward, &Vector3::up())
    }

    /// Converts a pure rotation matrix.
    ///
    /// Uses the trace when it is positive, otherwise the branch of the
    /// largest diagonal element, so the result never divides by a value
    /// near zero.
    pub fn from_rotation_matrix(m: &Matrix3) -> Self {
        let r = |row: usize, col: usize| m.m[col * 3 + row];
        let (m00, m11, m22) = (r(0, 0), r(1, 1), r(2, 2));
        let trace = m00 + m11 + m22;
        if trace > 0.0 {
            let s = 0.5 / (trace + 1.0).sqrt();
            Self::new(
                (r(2, 1) - r(1, 2)) * s,
                (r(0, 2) - r(2, 0)) * s,
                (r(1, 0) - r(0, 1)) * s,
                0.25 / s,
            )
        } else if m00 > m11 && m00 > m22 {
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            Self::new(
                0.25 * s,
                (r(0, 1) + r(1, 0)) / s,
                (r(0, 2) + r(2, 0)) / s,
                (r(2, 1) - r(1, 2)) / s,
            )
        } else if m11 > m22 {
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            Self::new(
                (r(0, 1) + r(1, 0)) / s,
                0.25 * s,
                (r(1, 2) + r(2, 1)) / s,
                (r(0, 2) - r(2, 0)) / s,
            )
        } else {
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            Self::new(
                (r(0, 2) + r(2, 0)) / s,
                (r(1, 2) + r(2, 1)) / s,
                0.25 * s,
                (r(1, 0) - r(0, 1)) / s,
            )
        }
    }

    /// Rotation part of a transform, scale removed.
    pub fn from_matrix4(m: &Matrix4) -> Self {
        m.extract_rotation()
    }

    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        check_index(index, 4)?;
        Ok(self.to_array()[index])
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        check_index(index, 4)?;
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => self.w = value,
        }
        Ok(())
    }

    pub fn vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Unit quaternion. A zero quaternion gives NaN components.
    pub fn normalize(self) -> Self {
        let l = self.length();
        Self::new(self.x / l, self.y / l, self.z / l, self.w / l)
    }

    pub fn normalize_mut(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse. Equals [`Quaternion::conjugate`] for unit
    /// quaternions; a zero quaternion gives NaN components.
    pub fn inverse(&self) -> Self {
        let len_sq = self.length_squared();
        Self::new(
            -self.x / len_sq,
            -self.y / len_sq,
            -self.z / len_sq,
            self.w / len_sq,
        )
    }

    /// Componentwise interpolation, renormalized
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
            self.w + (other.w - self.w) * t,
        )
        .normalize()
    }

    /// Spherical interpolation along the shorter arc.
    ///
    /// Nearly parallel inputs fall back to [`Quaternion::lerp`].
    pub fn slerp(&self, other: &Self, t: f64) -> Self {
        let mut dot = self.dot(other);
        let mut other = *other;
        if dot < 0.0 {
            other = -other;
            dot = -dot;
        }

        if dot > SLERP_LERP_THRESHOLD {
            return self.lerp(&other, t);
        }

        let theta_0 = dot.clamp(-1.0, 1.0).acos();
        let theta = theta_0 * t;
        let sin_theta = theta.sin();
        let sin_theta_0 = theta_0.sin();

        let s0 = theta.cos() - dot * sin_theta / sin_theta_0;
        let s1 = sin_theta / sin_theta_0;
        *self * s0 + other * s1
    }

    /// Axis and angle in radians, angle in `[0, 2π]`.
    ///
    /// Without a usable vector part (angle near 0 or 2π) the axis is +x.
    pub fn to_axis_angle(&self) -> (Vector3, f64) {
        let w = self.w.clamp(-1.0, 1.0);
        let angle = 2.0 * w.acos();
        let s = (1.0 - w * w).sqrt();
        if s < AXIS_ANGLE_EPSILON {
            trace!("quaternion {self} has no usable rotation axis, using +x");
            return (Vector3::new(1.0, 0.0, 0.0), angle);
        }
        (Vector3::new(self.x / s, self.y / s, self.z / s), angle)
    }

    /// Roll (x), pitch (y) and yaw (z) in radians.
    ///
    /// Pitch is clamped to ±π/2 at gimbal lock.
    pub fn to_euler(&self) -> Vector3 {
        let Self { x, y, z, w } = *self;
        let roll = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));

        let sinp = 2.0 * (w * y - z * x);
        let pitch = if sinp.abs() >= 1.0 {
            std::f64::consts::FRAC_PI_2.copysign(sinp)
        } else {
            sinp.asin()
        };

        let yaw = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));
        Vector3::new(roll, pitch, yaw)
    }

    pub fn to_matrix4(&self) -> Matrix4 {
        Matrix4::from_quaternion(self)
    }

    pub fn to_matrix3(&self) -> Matrix3 {
        Matrix3::from_quaternion(self)
    }
}

/// Hamilton product: `a * b` rotates by `b` first, then by `a`.
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, o: Quaternion) -> Quaternion {
        Quaternion::new(
            self.w * o.x + self.x * o.w + self.y * o.z - self.z * o.y,
            self.w * o.y - self.x * o.z + self.y * o.w + self.z * o.x,
            self.w * o.z + self.x * o.y - self.y * o.x + self.z * o.w,
            self.w * o.w - self.x * o.x - self.y * o.y - self.z * o.z,
        )
    }
}

/// Rotates `v`. Assumes a unit quaternion.
impl Mul<Vector3> for Quaternion {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        let qv = self.vector();
        let uv = qv.cross(&v);
        let uuv = qv.cross(&uv);
        v + (uv * self.w + uuv) * 2.0
    }
}

impl Mul<f64> for Quaternion {
    type Output = Quaternion;

    fn mul(self, s: f64) -> Quaternion {
        Quaternion::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl Add for Quaternion {
    type Output = Quaternion;

    fn add(self, o: Quaternion) -> Quaternion {
        Quaternion::new(self.x + o.x, self.y + o.y, self.z + o.z, self.w + o.w)
    }
}

impl Sub for Quaternion {
    type Output = Quaternion;

    fn sub(self, o: Quaternion) -> Quaternion {
        Quaternion::new(self.x - o.x, self.y - o.y, self.z - o.z, self.w - o.w)
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        Quaternion::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Near for Quaternion {
    fn near_eps(&self, other: &Self, epsilon: f64) -> bool {
        all_near(&self.to_array(), &other.to_array(), epsilon)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Quaternion::new(x, y, z, w)
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(q: Quaternion) -> Self {
        q.to_array()
    }
}

impl TryFrom<&[f64]> for Quaternion {
    type Error = MathError;

    fn try_from(values: &[f64]) -> Result<Self> {
        exact::<4>("Quaternion", values).map(Quaternion::from)
    }
}

impl std::fmt::Display for Quaternion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Quaternion[{}, {}, {}, {}]",
            self.x, self.y, self.z, self.w
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Quaternion::default(), Quaternion::new(0.0, 0.0, 0.0, 1.0));
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(Quaternion::identity() * v, v);
    }

    #[test]
    fn test_not_normalized_on_construction() {
        let q = Quaternion::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(q.length(), 2.0);
        assert_eq!(q.normalize().to_array(), [0.5; 4]);
        let mut m = q;
        m.normalize_mut().normalize_mut();
        assert!(m.near(&q.normalize()));
    }

    #[test]
    fn test_zero_normalize_is_nan() {
        assert!(Quaternion::new(0.0, 0.0, 0.0, 0.0).normalize().x.is_nan());
    }

    #[test]
    fn test_rotate_vector() {
        let q = Quaternion::from_axis_angle(&Z, FRAC_PI_2);
        let v = q * Vector3::new(1.0, 0.0, 0.0);
        assert!(v.near(&Vector3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_product_composes() {
        let a = Quaternion::from_axis_angle(&Z, 0.3);
        let b = Quaternion::from_axis_angle(&Z, 0.5);
        assert!((a * b).near(&Quaternion::from_axis_angle(&Z, 0.8)));

        // b first, then a
        let rx = Quaternion::from_axis_angle(&Vector3::new(1.0, 0.0, 0.0), FRAC_PI_2);
        let rz = Quaternion::from_axis_angle(&Z, FRAC_PI_2);
        let v = Vector3::new(0.0, 1.0, 0.0);
        assert!(((rz * rx) * v).near(&(rz * (rx * v))));
    }

    #[test]
    fn test_inverse() {
        let q = Quaternion::from_axis_angle(&Vector3::new(1.0, 2.0, 3.0), 1.0);
        assert!((q * q.inverse()).near(&Quaternion::identity()));
        assert!(q.inverse().near(&q.conjugate()));
        let scaled = q * 2.0;
        assert!((scaled * scaled.inverse()).near(&Quaternion::identity()));
    }

    #[test]
    fn test_index() {
        let mut q = Quaternion::identity();
        assert_eq!(q.get(3), Ok(1.0));
        q.set(0, 0.5).unwrap();
        assert_eq!(q.x, 0.5);
        assert_eq!(q.get(4), Err(MathError::OutOfRange { index: 4, len: 4 }));
        assert!(q.set(9, 1.0).is_err());
        assert!(Quaternion::try_from(&[0.0, 0.0, 1.0][..]).is_err());
    }

    #[test]
    fn test_axis_angle() {
        let axis = Vector3::new(0.0, 1.0, 1.0).normalize();
        let (a, angle) = Quaternion::from_axis_angle(&axis, 2.0).to_axis_angle();
        assert!(a.near(&axis));
        assert!(angle.near(&2.0));
    }

    #[test]
    fn test_axis_angle_fallback() {
        let (axis, angle) = Quaternion::identity().to_axis_angle();
        assert_eq!(axis, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_axis_angle_fallback_with_rounding() {
        // |w| slightly above 1 from accumulated rounding
        let (axis, angle) = Quaternion::new(0.0, 0.0, 0.0, 1.0 + f64::EPSILON).to_axis_angle();
        assert_eq!(axis, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(angle, 0.0);

        for k in 1..1000 {
            let q = Quaternion::from_axis_angle(&Vector3::new(1.0, 2.0, 3.0), k as f64 * 1e-4);
            let (axis, angle) = (q * q.inverse()).to_axis_angle();
            assert_eq!(axis, Vector3::new(1.0, 0.0, 0.0), "k = {k}");
            assert!(angle.near_eps(&0.0, 1e-6), "k = {k}");
        }
    }

    #[test]
    fn test_euler() {
        let q = Quaternion::from_euler(0.1, 0.2, 0.3);
        assert!(q.to_euler().near(&Vector3::new(0.1, 0.2, 0.3)));
        let yaw = Quaternion::from_euler(0.0, 0.0, FRAC_PI_2);
        assert!(yaw.near(&Quaternion::from_axis_angle(&Z, FRAC_PI_2)));
    }

    #[test]
    fn test_euler_gimbal_lock() {
        let q = Quaternion::from_euler(0.0, FRAC_PI_2, 0.0);
        assert!(q.to_euler().y.near(&FRAC_PI_2));
        // pitch argument just past 1 from rounding still clamps
        let q = Quaternion::new(0.0, 0.7072, 0.0, 0.7072);
        assert_eq!(q.to_euler().y, FRAC_PI_2);
    }

    #[test]
    fn test_slerp() {
        let a = Quaternion::identity();
        let b = Quaternion::from_axis_angle(&Z, FRAC_PI_2);
        assert!(a.slerp(&b, 0.0).near(&a));
        assert!(a.slerp(&b, 1.0).near(&b));
        assert!(
            a.slerp(&b, 0.5)
                .near(&Quaternion::from_axis_angle(&Z, FRAC_PI_2 / 2.0))
        );
        assert_eq!(b.slerp(&b, 0.3), b.lerp(&b, 0.3));
    }

    #[test]
    fn test_slerp_shortest_path() {
        let a = Quaternion::from_axis_angle(&Z, 0.1);
        let b = -Quaternion::from_axis_angle(&Z, 0.5);
        let mid = a.slerp(&b, 0.5);
        let expected = Quaternion::from_axis_angle(&Z, 0.3);
        assert!(mid.near(&expected));
    }

    #[test]
    fn test_matrix_agrees_with_rotation() {
        let q = Quaternion::from_axis_angle(&Vector3::new(-1.0, 0.5, 2.0), 2.5);
        let v = Vector3::new(0.4, -1.2, 3.0);
        assert!((q.to_matrix4() * v).xyz().near(&(q * v)));
        assert!((q.to_matrix3() * v).near(&(q * v)));
    }

    #[test]
    fn test_matrix_round_trip() {
        for angle in [0.3, 2.0, PI * 0.95] {
            for axis in [
                Vector3::new(1.0, 0.2, 0.0),
                Vector3::new(0.0, 1.0, 0.1),
                Vector3::new(0.1, 0.0, 1.0),
            ] {
                let q = Quaternion::from_axis_angle(&axis, angle);
                let back = Quaternion::from_rotation_matrix(&q.to_matrix3());
                assert!(back.near(&q) || back.near(&-q), "{q} -> {back}");
                assert!(Quaternion::from_matrix4(&q.to_matrix4()).near(&back));
            }
        }
    }

    #[test]
    fn test_look_rotation() {
        let forward = Vector3::new(1.0, 0.0, 0.0);
        let q = Quaternion::look_rotation_up(&forward);
        assert!((q * Vector3::new(0.0, 0.0, 1.0)).near(&forward));
        assert!((q * Vector3::up()).near(&Vector3::up()));

        let q = Quaternion::look_rotation(&Vector3::new(0.0, 0.0, -3.0), &Vector3::up());
        assert!((q * Vector3::new(0.0, 0.0, 1.0)).near(&Vector3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_arithmetic() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(4.0, 3.0, 2.0, 1.0);
        assert_eq!(a + b, Quaternion::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(a - a, Quaternion::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(a.dot(&b), 20.0);
        assert_eq!(a * Quaternion::identity(), a);
        assert_eq!(Quaternion::identity() * a, a);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Quaternion::identity().to_string(),
            "Quaternion[0, 0, 0, 1]"
        );
    }
}
