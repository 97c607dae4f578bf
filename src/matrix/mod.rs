//! Column-major matrices
//!
//! All matrices follow the column-vector convention: `a * b` applies `b`
//! first, then `a`, and `m * v` transforms the vector `v`.
//!
//! - [`Matrix2`] 2x2 linear maps
//! - [`Matrix2d`] 2D affine transforms stored as a compact 2x3
//! - [`Matrix3`] 3x3 linear maps and homogeneous 2D transforms
//! - [`Matrix4`] homogeneous 3D transforms and projections

mod matrix2;
mod matrix2d;
mod matrix3;
mod matrix4;

pub use matrix2::*;
pub use matrix2d::*;
pub use matrix3::*;
pub use matrix4::*;

/// Implements the element-wise parts shared by every matrix type.
///
/// Assumes the type is a struct with a single field `m: [f64; $len]` and an
/// inherent `identity()` constructor.
macro_rules! impl_matrix_common {
    ($ty:ident, $len:literal) => {
        impl $ty {
            pub const fn new(m: [f64; $len]) -> Self {
                Self { m }
            }

            pub const fn zero() -> Self {
                Self { m: [0.0; $len] }
            }

            /// Column-major components
            pub const fn data(&self) -> &[f64; $len] {
                &self.m
            }

            pub const fn to_array(self) -> [f64; $len] {
                self.m
            }

            pub fn get(&self, index: usize) -> $crate::error::Result<f64> {
                $crate::error::check_index(index, $len)?;
                Ok(self.m[index])
            }

            pub fn set(&mut self, index: usize, value: f64) -> $crate::error::Result<()> {
                $crate::error::check_index(index, $len)?;
                self.m[index] = value;
                Ok(())
            }

            pub fn frobenius_norm(&self) -> f64 {
                self.m.iter().map(|v| v * v).sum::<f64>().sqrt()
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::identity()
            }
        }

        impl std::ops::Add for $ty {
            type Output = Self;
            fn add(self, other: Self) -> Self {
                Self {
                    m: std::array::from_fn(|i| self.m[i] + other.m[i]),
                }
            }
        }

        impl std::ops::Sub for $ty {
            type Output = Self;
            fn sub(self, other: Self) -> Self {
                Self {
                    m: std::array::from_fn(|i| self.m[i] - other.m[i]),
                }
            }
        }

        impl std::ops::Mul<f64> for $ty {
            type Output = Self;
            fn mul(self, s: f64) -> Self {
                Self {
                    m: self.m.map(|v| v * s),
                }
            }
        }

        impl $crate::near::Near for $ty {
            fn near_eps(&self, other: &Self, epsilon: f64) -> bool {
                $crate::near::all_near(&self.m, &other.m, epsilon)
            }
        }

        impl From<[f64; $len]> for $ty {
            fn from(m: [f64; $len]) -> Self {
                Self { m }
            }
        }

        impl From<$ty> for [f64; $len] {
            fn from(matrix: $ty) -> Self {
                matrix.m
            }
        }

        /// Requires exactly the number of components, shorter input is not
        /// zero-filled.
        impl TryFrom<&[f64]> for $ty {
            type Error = $crate::error::MathError;

            fn try_from(values: &[f64]) -> $crate::error::Result<Self> {
                $crate::error::exact::<$len>(stringify!($ty), values).map(Self::from)
            }
        }
    };
}

pub(crate) use impl_matrix_common;

/// Checks a determinant before inverting.
pub(crate) fn check_invertible(determinant: f64) -> crate::error::Result<f64> {
    if determinant.abs() < crate::near::SINGULAR_EPSILON || determinant.is_nan() {
        log::debug!("refusing to invert matrix with determinant {determinant:e}");
        return Err(crate::error::MathError::SingularMatrix { determinant });
    }
    Ok(determinant)
}

/// Writes rows of a column-major matrix with fixed precision.
pub(crate) fn fmt_rows(
    f: &mut std::fmt::Formatter,
    name: &str,
    m: &[f64],
    rows: usize,
    cols: usize,
) -> std::fmt::Result {
    writeln!(f, "{name}[")?;
    for row in 0..rows {
        let line = (0..cols)
            .map(|col| format!("{:8.4}", m[col * rows + row]))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "  {line}")?;
    }
    write!(f, "]")
}
