//! Approximate equality and the numeric tolerances used across the crate.

/// Default per-component tolerance for [`Near::near`].
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Determinants with a smaller magnitude are treated as singular.
pub const SINGULAR_EPSILON: f64 = 1e-10;

/// Dual quaternions whose real part is shorter than this (or whose squared
/// length is smaller) are left as is by normalize and inverse.
pub const DEGENERATE_LENGTH_EPSILON: f64 = 1e-10;

/// Above this quaternion dot product slerp falls back to normalized lerp.
pub const SLERP_LERP_THRESHOLD: f64 = 0.9995;

/// Below this `sin(angle / 2)` the rotation axis is considered undefined.
pub const AXIS_ANGLE_EPSILON: f64 = 0.001;

/// Component-wise approximate equality.
///
/// Two values are near when every pair of components differs by strictly
/// less than the tolerance.
pub trait Near {
    fn near_eps(&self, other: &Self, epsilon: f64) -> bool;

    fn near(&self, other: &Self) -> bool {
        self.near_eps(other, DEFAULT_EPSILON)
    }
}

#[inline]
pub(crate) fn all_near(a: &[f64], b: &[f64], epsilon: f64) -> bool {
    a.iter().zip(b).all(|(a, b)| (a - b).abs() < epsilon)
}

impl Near for f64 {
    fn near_eps(&self, other: &Self, epsilon: f64) -> bool {
        (self - other).abs() < epsilon
    }
}
