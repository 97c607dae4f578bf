use std::ops::{Add, Mul, Sub};

use crate::error::{MathError, Result, check_index, exact};
use crate::near::{Near, all_near};
use crate::vec::{Vector3, Vector4};

/// RGBA color with floating point channels.
///
/// Channels are nominally in `[0, 1]` but this is only enforced by [`Color::clamp`]
/// and when converting to bytes.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Opaque black
impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new(r, g, b, a)
    }

    pub fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            a as f64 / 255.0,
        )
    }

    /// Parses `RRGGBB` or `RRGGBBAA`, optionally prefixed with `#`.
    ///
    /// Alpha defaults to 1.0 for the six digit form.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 && digits.len() != 8 {
            return Err(MathError::InvalidArgument(format!(
                "Invalid color format {hex:?}, expected #RRGGBB or #RRGGBBAA"
            )));
        }
        let bytes = hex::decode(digits).map_err(|e| {
            MathError::InvalidArgument(format!("Invalid color format {hex:?}: {e}"))
        })?;
        let a = bytes.get(3).copied().unwrap_or(255);
        Ok(Self::from_bytes(bytes[0], bytes[1], bytes[2], a))
    }

    pub fn from_vector4(v: &Vector4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    pub fn from_vector3(v: &Vector3, a: f64) -> Self {
        Self::new(v.x, v.y, v.z, a)
    }

    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Color::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Clamps every channel to `[0, 1]`
    pub fn clamp(&self) -> Self {
        Color::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }

    /// Channels scaled to `0..=255`, rounded half away from zero and saturated.
    pub fn to_bytes(&self) -> [u8; 4] {
        self.to_array().map(channel_to_byte)
    }

    /// Lowercase `#rrggbbaa`
    pub fn to_hex(&self) -> String {
        format!("#{}", hex::encode(self.to_bytes()))
    }

    pub fn to_vector3(&self) -> Vector3 {
        Vector3::new(self.r, self.g, self.b)
    }

    pub fn to_vector4(&self) -> Vector4 {
        Vector4::new(self.r, self.g, self.b, self.a)
    }

    pub const fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        check_index(index, 4)?;
        Ok(self.to_array()[index])
    }
}

fn channel_to_byte(c: f64) -> u8 {
    // `as` saturates, NaN maps to 0
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

impl Add for Color {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Color::new(self.r + o.r, self.g + o.g, self.b + o.b, self.a + o.a)
    }
}

impl Sub for Color {
    type Output = Self;
    fn sub(self, o: Self) -> Self {
        Color::new(self.r - o.r, self.g - o.g, self.b - o.b, self.a - o.a)
    }
}

impl Mul<f64> for Color {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        Color::new(self.r * s, self.g * s, self.b * s, self.a * s)
    }
}

/// Channel-wise modulation
impl Mul for Color {
    type Output = Self;
    fn mul(self, o: Self) -> Self {
        Color::new(self.r * o.r, self.g * o.g, self.b * o.b, self.a * o.a)
    }
}

impl Near for Color {
    fn near_eps(&self, other: &Self, epsilon: f64) -> bool {
        all_near(&self.to_array(), &other.to_array(), epsilon)
    }
}

impl From<[f64; 4]> for Color {
    fn from([r, g, b, a]: [f64; 4]) -> Self {
        Color::new(r, g, b, a)
    }
}

impl From<Vector4> for Color {
    fn from(v: Vector4) -> Self {
        Color::from_vector4(&v)
    }
}

impl TryFrom<&[f64]> for Color {
    type Error = MathError;

    fn try_from(values: &[f64]) -> Result<Self> {
        exact::<4>("Color", values).map(Color::from)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Color[{}, {}, {}, {}]", self.r, self.g, self.b, self.a)
    }
}
