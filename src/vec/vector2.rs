use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{MathError, Result, check_index, exact};
use crate::near::{Near, all_near};
use crate::vec::Vector3;

/// A 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);
    pub const ONE: Vector2 = Vector2::new(1.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub const fn one() -> Self {
        Self::ONE
    }

    /// Builds a vector from up to two values, missing components are zero.
    pub fn from_partial(values: &[f64]) -> Result<Self> {
        match *values {
            [] => Ok(Self::ZERO),
            [x] => Ok(Self::new(x, 0.0)),
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(MathError::arity("Vector2", 2, values.len())),
        }
    }

    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        check_index(index, 2)?;
        Ok(self.to_array()[index])
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        check_index(index, 2)?;
        match index {
            0 => self.x = value,
            _ => self.y = value,
        }
        Ok(())
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3D cross product of the two vectors
    pub fn cross(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
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
        self
    }

    /// Linear interpolation, `t` outside `[0, 1]` extrapolates.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        *self + (*other - *self) * t
    }

    /// Angle of the vector relative to the positive x axis
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Angle of the direction pointing from `self` to `other`
    pub fn angle_to(&self, other: &Self) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Counter-clockwise rotation
    pub fn rotate(&self, radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * (2.0 * self.dot(normal))
    }

    pub fn clamp_length(&self, max_length: f64) -> Self {
        let len_sq = self.length_squared();
        if len_sq <= max_length * max_length {
            return *self;
        }
        *self * (max_length / len_sq.sqrt())
    }

    pub fn to_vector3(&self, z: f64) -> Vector3 {
        Vector3::new(self.x, self.y, z)
    }
}

impl Add for Vector2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        Vector2::new(self.x * s, self.y * s)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;
    fn mul(self, v: Vector2) -> Vector2 {
        v * self
    }
}

impl Div<f64> for Vector2 {
    type Output = Self;
    fn div(self, s: f64) -> Self {
        Vector2::new(self.x / s, self.y / s)
    }
}

impl Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self {
        Vector2::new(-self.x, -self.y)
    }
}

impl Near for Vector2 {
    fn near_eps(&self, other: &Self, epsilon: f64) -> bool {
        all_near(&self.to_array(), &other.to_array(), epsilon)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector2::new(x, y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(v: Vector2) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[f64]> for Vector2 {
    type Error = MathError;

    fn try_from(values: &[f64]) -> Result<Self> {
        exact::<2>("Vector2", values).map(Vector2::from)
    }
}

impl std::fmt::Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Vector2[{}, {}]", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_construction() {
        assert_eq!(Vector2::default(), Vector2::ZERO);
        assert_eq!(Vector2::from_partial(&[]), Ok(Vector2::ZERO));
        assert_eq!(Vector2::from_partial(&[3.0]), Ok(Vector2::new(3.0, 0.0)));
        assert!(Vector2::from_partial(&[1.0, 2.0, 3.0]).is_err());
        assert!(Vector2::try_from(&[1.0][..]).is_err());
        assert_eq!(
            Vector2::try_from(&[1.0, 2.0][..]),
            Ok(Vector2::new(1.0, 2.0))
        );
        assert_eq!(Vector2::from((1.0, 2.0)), Vector2::from([1.0, 2.0]));
    }

    #[test]
    fn test_index() {
        let mut v = Vector2::new(1.0, 2.0);
        assert_eq!(v.get(1), Ok(2.0));
        assert_eq!(v.get(2), Err(MathError::OutOfRange { index: 2, len: 2 }));
        v.set(0, 5.0).unwrap();
        assert_eq!(v, Vector2::new(5.0, 2.0));
        assert_eq!(v.set(2, 1.0), Err(MathError::OutOfRange { index: 2, len: 2 }));
        assert_eq!(v, Vector2::new(5.0, 2.0));
    }

    #[test]
    fn test_near_is_strict() {
        let v = Vector2::new(1.0, 2.0);
        assert!(v.near(&Vector2::new(1.0 + 1e-7, 2.0 - 1e-7)));
        assert!(!v.near(&Vector2::new(1.0, 2.0 + 1e-5)));
        assert!(!v.near_eps(&Vector2::new(1.5, 2.0), 0.5));
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 4.0);
        assert_eq!(a + b, Vector2::new(4.0, 6.0));
        assert_eq!(a - b, Vector2::new(-2.0, -2.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(2.0 * a, Vector2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vector2::new(1.5, 2.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        assert_eq!(a.dot(&b), 11.0);
        assert_eq!(a.cross(&b), -2.0);
    }

    #[test]
    fn test_divide_by_zero_is_ieee() {
        let v = Vector2::new(1.0, -1.0) / 0.0;
        assert_eq!(v.x, f64::INFINITY);
        assert_eq!(v.y, f64::NEG_INFINITY);
    }

    #[test]
    fn test_length_and_normalize() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);
        assert!(v.normalize().near(&Vector2::new(0.6, 0.8)));
        let mut m = v;
        m.normalize_mut();
        assert!(m.near(&Vector2::new(0.6, 0.8)));
        let zero = Vector2::ZERO.normalize();
        assert!(zero.x.is_nan() && zero.y.is_nan());
    }

    #[test]
    fn test_distance() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.distance_squared(&b), 25.0);
    }

    #[test]
    fn test_lerp_extrapolates() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(10.0, 20.0);
        assert_eq!(a.lerp(&b, 0.5), Vector2::new(5.0, 10.0));
        assert_eq!(a.lerp(&b, 2.0), Vector2::new(20.0, 40.0));
    }

    #[test]
    fn test_angles() {
        assert!(Vector2::new(0.0, 1.0).angle().near(&FRAC_PI_2));
        let a = Vector2::new(1.0, 1.0);
        assert!(a.angle_to(&Vector2::new(2.0, 2.0)).near(&FRAC_PI_4));
        let r = Vector2::new(1.0, 0.0).rotate(PI);
        assert!(r.near(&Vector2::new(-1.0, 0.0)));
    }

    #[test]
    fn test_geometry_helpers() {
        assert_eq!(
            Vector2::new(1.0, 2.0).perpendicular(),
            Vector2::new(-2.0, 1.0)
        );
        let reflected = Vector2::new(1.0, -1.0).reflect(&Vector2::new(0.0, 1.0));
        assert_eq!(reflected, Vector2::new(1.0, 1.0));
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.clamp_length(10.0), v);
        assert!(v.clamp_length(2.5).length().near(&2.5));
        assert_eq!(v.to_vector3(7.0), Vector3::new(3.0, 4.0, 7.0));
    }

    #[test]
    fn test_near() {
        let a = Vector2::new(1.0, 2.0);
        assert!(a.near(&Vector2::new(1.0000001, 2.0)));
        assert!(!a.near(&Vector2::new(1.1, 2.0)));
        assert!(a.near_eps(&Vector2::new(1.05, 2.0), 0.1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector2::new(1.5, 2.0).to_string(), "Vector2[1.5, 2]");
    }
}
