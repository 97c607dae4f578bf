//! Errors raised by the algebra core.
//!
//! Only genuine programming/input errors are reported here. Degenerate numeric
//! situations such as normalizing a zero vector produce IEEE special values
//! instead.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum MathError {
    /// Inverse requested on a matrix whose determinant magnitude is below
    /// [`crate::near::SINGULAR_EPSILON`].
    SingularMatrix { determinant: f64 },
    /// Indexed component access outside `0..len`.
    OutOfRange { index: usize, len: usize },
    /// Malformed construction input, e.g. wrong arity or a bad hex string.
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, MathError>;

impl MathError {
    pub(crate) fn arity(type_name: &str, expected: usize, actual: usize) -> Self {
        MathError::InvalidArgument(format!(
            "{type_name} expects {expected} components, got {actual}"
        ))
    }
}

impl Error for MathError {}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::SingularMatrix { determinant } => {
                write!(f, "Matrix is not invertible (determinant {determinant:e})")
            }
            MathError::OutOfRange { index, len } => {
                write!(f, "Index {index} out of range for {len} components")
            }
            MathError::InvalidArgument(message) => write!(f, "Invalid argument: {message}"),
        }
    }
}

/// Bounds check shared by all indexed accessors.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(MathError::OutOfRange { index, len })
    }
}

/// Converts a slice into a fixed-size array, rejecting any other length.
pub(crate) fn exact<const N: usize>(type_name: &str, values: &[f64]) -> Result<[f64; N]> {
    <[f64; N]>::try_from(values).map_err(|_| MathError::arity(type_name, N, values.len()))
}
