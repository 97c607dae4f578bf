//! Vector types
//!
//! - [`Vector2`] 2D vectors, with a scalar cross product
//! - [`Vector3`] 3D positions and directions
//! - [`Vector4`] homogeneous coordinates

mod vector2;
mod vector3;
mod vector4;

pub use vector2::*;
pub use vector3::*;
pub use vector4::*;
