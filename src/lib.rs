//!
//! Linmath is a small fixed-size linear algebra library for graphics and
//! rigid body work.
//!
//! It provides `f64` vectors, column-major matrices, rotation quaternions,
//! dual quaternions for rigid transforms and RGBA colors. All types are
//! `Copy` values; operations return new values unless named `*_mut` or `set`.
//!
//! ```
//! use linmath::{Quaternion, Vector3};
//! use linmath::near::Near;
//!
//! let q = Quaternion::from_axis_angle(&Vector3::new(0.0, 0.0, 1.0), std::f64::consts::FRAC_PI_2);
//! let v = q * Vector3::new(1.0, 0.0, 0.0);
//! assert!(v.near(&Vector3::new(0.0, 1.0, 0.0)));
//! assert!((q.to_matrix4() * Vector3::new(1.0, 0.0, 0.0)).xyz().near(&v));
//! ```

pub mod color;
pub mod dual_quat;
pub mod error;
pub mod matrix;
pub mod near;
pub mod quat;
pub mod vec;

pub use color::Color;
pub use dual_quat::DualQuaternion;
pub use error::{MathError, Result};
pub use matrix::{Matrix2, Matrix2d, Matrix3, Matrix4};
pub use quat::Quaternion;
pub use vec::{Vector2, Vector3, Vector4};
