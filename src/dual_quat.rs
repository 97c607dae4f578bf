//! Dual quaternions for rigid transforms
//!
//! Stored as eight components: the real quaternion holding the rotation,
//! followed by the dual quaternion encoding the translation.

use std::ops::{Add, Mul, Sub};

use log::trace;

use crate::error::{MathError, Result, check_index, exact};
use crate::matrix::Matrix4;
use crate::near::{DEGENERATE_LENGTH_EPSILON, Near, all_near};
use crate::quat::Quaternion;
use crate::vec::Vector3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualQuaternion {
    m: [f64; 8],
}

/// The identity transform
impl Default for DualQuaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl DualQuaternion {
    pub const fn new(m: [f64; 8]) -> Self {
        Self { m }
    }

    pub const fn identity() -> Self {
        Self::new([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0])
    }

    pub const fn from_parts(real: Quaternion, dual: Quaternion) -> Self {
        Self::new([
            real.x, real.y, real.z, real.w, dual.x, dual.y, dual.z, dual.w,
        ])
    }

    /// Rotate by `rotation`, then translate by `translation`.
    pub fn from_rotation_translation(rotation: &Quaternion, translation: &Vector3) -> Self {
        let t = Quaternion::new(translation.x, translation.y, translation.z, 0.0);
        Self::from_parts(*rotation, t * *rotation * 0.5)
    }

    pub fn from_translation(translation: &Vector3) -> Self {
        Self::from_rotation_translation(&Quaternion::identity(), translation)
    }

    pub fn from_rotation(rotation: &Quaternion) -> Self {
        Self::from_parts(*rotation, Quaternion::new(0.0, 0.0, 0.0, 0.0))
    }

    /// Rigid part of a transform. Scale is dropped, shear is not supported.
    pub fn from_matrix4(m: &Matrix4) -> Self {
        Self::from_rotation_translation(&m.extract_rotation(), &m.extract_translation())
    }

    /// `[real.x, real.y, real.z, real.w, dual.x, dual.y, dual.z, dual.w]`
    pub const fn data(&self) -> &[f64; 8] {
        &self.m
    }

    pub const fn to_array(self) -> [f64; 8] {
        self.m
    }

    pub const fn real(&self) -> Quaternion {
        Quaternion::new(self.m[0], self.m[1], self.m[2], self.m[3])
    }

    pub const fn dual(&self) -> Quaternion {
        Quaternion::new(self.m[4], self.m[5], self.m[6], self.m[7])
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        check_index(index, 8)?;
        Ok(self.m[index])
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        check_index(index, 8)?;
        self.m[index] = value;
        Ok(())
    }

    /// Dot product of the real parts
    pub fn dot(&self, other: &Self) -> f64 {
        self.real().dot(&other.real())
    }

    /// Squared length of the real part
    pub fn length_squared(&self) -> f64 {
        self.real().length_squared()
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Scales all eight components by the inverse length of the real part.
    ///
    /// This does not restore `real · dual = 0` for arbitrary input. A
    /// degenerate real part leaves the value unchanged.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len < DEGENERATE_LENGTH_EPSILON {
            trace!("not normalizing dual quaternion with real length {len:e}");
            return self;
        }
        self * (1.0 / len)
    }

    pub fn normalize_mut(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    /// Negates the vector parts of both halves
    pub fn conjugate(&self) -> Self {
        let m = &self.m;
        Self::new([-m[0], -m[1], -m[2], m[3], -m[4], -m[5], -m[6], m[7]])
    }

    /// Conjugate scaled by the inverse squared length of the real part.
    ///
    /// A degenerate real part returns the plain conjugate.
    pub fn inverse(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq < DEGENERATE_LENGTH_EPSILON {
            trace!("inverting degenerate dual quaternion, returning conjugate");
            return self.conjugate();
        }
        self.conjugate() * (1.0 / len_sq)
    }

    /// Vector part of `2 * dual * conjugate(real)`
    pub fn translation(&self) -> Vector3 {
        (self.dual() * self.real().conjugate()).vector() * 2.0
    }

    pub fn rotation(&self) -> Quaternion {
        self.real().normalize()
    }

    pub fn transform_point(&self, point: &Vector3) -> Vector3 {
        self.rotation() * *point + self.translation()
    }

    /// Componentwise interpolation, renormalized
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self::new(std::array::from_fn(|i| {
            self.m[i] + (other.m[i] - self.m[i]) * t
        }))
        .normalize()
    }

    /// Rigid transform matrix: the rotation is applied first, then the
    /// translation.
    pub fn to_matrix4(&self) -> Matrix4 {
        let t = self.translation();
        Matrix4::translation(t.x, t.y, t.z) * Matrix4::from_quaternion(&self.rotation())
    }
}

/// `a * b` applies `b` first, then `a`.
impl Mul for DualQuaternion {
    type Output = DualQuaternion;

    fn mul(self, other: DualQuaternion) -> DualQuaternion {
        let (ra, da) = (self.real(), self.dual());
        let (rb, db) = (other.real(), other.dual());
        DualQuaternion::from_parts(ra * rb, ra * db + da * rb)
    }
}

/// Transforms a point, see [`DualQuaternion::transform_point`]
impl Mul<Vector3> for DualQuaternion {
    type Output = Vector3;

    fn mul(self, point: Vector3) -> Vector3 {
        self.transform_point(&point)
    }
}

impl Mul<f64> for DualQuaternion {
    type Output = DualQuaternion;

    fn mul(self, s: f64) -> DualQuaternion {
        DualQuaternion::new(self.m.map(|v| v * s))
    }
}

impl Add for DualQuaternion {
    type Output = DualQuaternion;

    fn add(self, other: DualQuaternion) -> DualQuaternion {
        DualQuaternion::new(std::array::from_fn(|i| self.m[i] + other.m[i]))
    }
}

impl Sub for DualQuaternion {
    type Output = DualQuaternion;

    fn sub(self, other: DualQuaternion) -> DualQuaternion {
        DualQuaternion::new(std::array::from_fn(|i| self.m[i] - other.m[i]))
    }
}

impl Near for DualQuaternion {
    fn near_eps(&self, other: &Self, epsilon: f64) -> bool {
        all_near(&self.m, &other.m, epsilon)
    }
}

impl From<[f64; 8]> for DualQuaternion {
    fn from(m: [f64; 8]) -> Self {
        Self::new(m)
    }
}

impl From<DualQuaternion> for [f64; 8] {
    fn from(dq: DualQuaternion) -> Self {
        dq.m
    }
}

impl TryFrom<&[f64]> for DualQuaternion {
    type Error = MathError;

    fn try_from(values: &[f64]) -> Result<Self> {
        exact::<8>("DualQuaternion", values).map(DualQuaternion::from)
    }
}

impl std::fmt::Display for DualQuaternion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "DualQuaternion[real: {}, dual: {}]",
            self.real(),
            self.dual()
        )
    }
}
