use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{MathError, Result, check_index, exact};
use crate::near::{Near, all_near};
use crate::vec::{Vector2, Vector3};

/// A 4D vector, typically a homogeneous coordinate.
///
/// The default value is the homogeneous origin `(0, 0, 0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for Vector4 {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl Vector4 {
    pub const ZERO: Vector4 = Vector4::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Vector4 = Vector4::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub const fn one() -> Self {
        Self::ONE
    }

    /// Builds a vector from up to four values, missing x/y/z are zero and a
    /// missing w is one.
    pub fn from_partial(values: &[f64]) -> Result<Self> {
        if values.len() > 4 {
            return Err(MathError::arity("Vector4", 4, values.len()));
        }
        let mut v = Self::default().to_array();
        v[..values.len()].copy_from_slice(values);
        Ok(Self::from(v))
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

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(self)
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
        self.w /= len;
        self
    }

    /// Projects a homogeneous coordinate back to 3D.
    ///
    /// A `w` of exactly 0 (direction) or 1 (already affine) leaves xyz as is.
    pub fn perspective_divide(&self) -> Vector3 {
        if self.w == 0.0 || self.w == 1.0 {
            return self.xyz();
        }
        Vector3::new(self.x / self.w, self.y / self.w, self.z / self.w)
    }

    pub fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    pub fn rgb(&self) -> Vector3 {
        self.xyz()
    }

    /// Linear interpolation, `t` outside `[0, 1]` extrapolates.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Vector4::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
            self.w + (other.w - self.w) * t,
        )
    }
}

impl Add for Vector4 {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Vector4::new(self.x + o.x, self.y + o.y, self.z + o.z, self.w + o.w)
    }
}

impl Sub for Vector4 {
    type Output = Self;
    fn sub(self, o: Self) -> Self {
        Vector4::new(self.x - o.x, self.y - o.y, self.z - o.z, self.w - o.w)
    }
}

impl Mul<f64> for Vector4 {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        Vector4::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl Mul<Vector4> for f64 {
    type Output = Vector4;
    fn mul(self, v: Vector4) -> Vector4 {
        v * self
    }
}

impl Div<f64> for Vector4 {
    type Output = Self;
    fn div(self, s: f64) -> Self {
        Vector4::new(self.x / s, self.y / s, self.z / s, self.w / s)
    }
}

impl Neg for Vector4 {
    type Output = Self;
    fn neg(self) -> Self {
        Vector4::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Near for Vector4 {
    fn near_eps(&self, other: &Self, epsilon: f64) -> bool {
        all_near(&self.to_array(), &other.to_array(), epsilon)
    }
}

impl From<[f64; 4]> for Vector4 {
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Vector4::new(x, y, z, w)
    }
}

impl From<(f64, f64, f64, f64)> for Vector4 {
    fn from((x, y, z, w): (f64, f64, f64, f64)) -> Self {
        Vector4::new(x, y, z, w)
    }
}

impl From<Vector4> for [f64; 4] {
    fn from(v: Vector4) -> Self {
        v.to_array()
    }
}

/// Promotes a point with `w = 1`
impl From<Vector3> for Vector4 {
    fn from(v: Vector3) -> Self {
        v.to_vector4(1.0)
    }
}

impl TryFrom<&[f64]> for Vector4 {
    type Error = MathError;

    fn try_from(values: &[f64]) -> Result<Self> {
        exact::<4>("Vector4", values).map(Vector4::from)
    }
}

impl std::fmt::Display for Vector4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Vector4[{}, {}, {}, {}]",
            self.x, self.y, self.z, self.w
        )
    }
}
