use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{MathError, Result, check_index, exact};
use crate::near::{Near, all_near};
use crate::vec::{Vector2, Vector4};

/// A 3D vector for positions and directions
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const ONE: Vector3 = Vector3::new(1.0, 1.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub const fn one() -> Self {
        Self::ONE
    }

    pub const fn up() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    pub const fn down() -> Self {
        Self::new(0.0, -1.0, 0.0)
    }

    /// Forward is -Z in the right-handed convention
    pub const fn forward() -> Self {
        Self::new(0.0, 0.0, -1.0)
    }

    pub const fn back() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    pub const fn right() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    pub const fn left() -> Self {
        Self::new(-1.0, 0.0, 0.0)
    }

    /// Builds a vector from up to three values, missing components are zero.
    pub fn from_partial(values: &[f64]) -> Result<Self> {
        if values.len() > 3 {
            return Err(MathError::arity("Vector3", 3, values.len()));
        }
        let mut v = [0.0; 3];
        v[..values.len()].copy_from_slice(values);
        Ok(Self::from(v))
    }

    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        check_index(index, 3)?;
        Ok(self.to_array()[index])
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        check_index(index, 3)?;
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => self.z = value,
        }
        Ok(())
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn distance_squared(&self, other: &Self) -> f64 {
        (*self - *other).length_squared()
    }

    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Unit vector in the same direction. A zero vector yields NaN components.
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    pub fn normalize_mut(&mut self) -> &mut Self {
        let len = self.length();
        self.x /= len;
        self.y /= len;
        self.z /= len;
        self
    }

    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * (2.0 * self.dot(normal))
    }

    pub fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    pub fn xz(&self) -> Vector2 {
        Vector2::new(self.x, self.z)
    }

    pub fn yz(&self) -> Vector2 {
        Vector2::new(self.y, self.z)
    }

    /// Linear interpolation, `t` outside `[0, 1]` extrapolates.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        *self + (*other - *self) * t
    }

    pub fn to_vector4(&self, w: f64) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Angle in radians between the two directions, in `[0, π]`.
    pub fn angle_between(&self, other: &Self) -> f64 {
        let d = self.dot(other) / (self.length() * other.length());
        d.clamp(-1.0, 1.0).acos()
    }

    /// Projection onto `onto`. A zero `onto` yields NaN components.
    pub fn project(&self, onto: &Self) -> Self {
        *onto * (self.dot(onto) / onto.length_squared())
    }

    pub fn reject(&self, from: &Self) -> Self {
        *self - self.project(from)
    }

    /// Spherical interpolation of directions.
    ///
    /// Rotates `self` towards `other` by `t` times the angle between them,
    /// within the plane they span. Parallel or opposite directions span no
    /// plane and yield NaN components.
    pub fn slerp(&self, other: &Self, t: f64) -> Self {
        let dot = self
            .normalize()
            .dot(&other.normalize())
            .clamp(-1.0, 1.0);
        let theta = dot.acos() * t;
        let relative = (*other - *self * dot).normalize();
        *self * theta.cos() + relative * theta.sin()
    }

    pub fn clamp_length(&self, max_length: f64) -> Self {
        let len_sq = self.length_squared();
        if len_sq <= max_length * max_length {
            return *self;
        }
        *self * (max_length / len_sq.sqrt())
    }

    pub fn min(&self, other: &Self) -> Self {
        Vector3::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    pub fn max(&self, other: &Self) -> Self {
        Vector3::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    pub fn abs(&self) -> Self {
        Vector3::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    pub fn floor(&self) -> Self {
        Vector3::new(self.x.floor(), self.y.floor(), self.z.floor())
    }

    pub fn ceil(&self) -> Self {
        Vector3::new(self.x.ceil(), self.y.ceil(), self.z.ceil())
    }

    /// Rounds half away from zero
    pub fn round(&self) -> Self {
        Vector3::new(self.x.round(), self.y.round(), self.z.round())
    }
}

impl Add for Vector3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        Vector3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

/// Component-wise scale
impl Mul for Vector3 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Vector3::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;
    fn div(self, s: f64) -> Self {
        Vector3::new(self.x / s, self.y / s, self.z / s)
    }
}

impl Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Near for Vector3 {
    fn near_eps(&self, other: &Self, epsilon: f64) -> bool {
        all_near(&self.to_array(), &other.to_array(), epsilon)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = MathError;

    fn try_from(values: &[f64]) -> Result<Self> {
        exact::<3>("Vector3", values).map(Vector3::from)
    }
}

impl std::fmt::Display for Vector3 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Vector3[{}, {}, {}]", self.x, self.y, self.z)
    }
}
