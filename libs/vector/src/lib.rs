///! Small generic vector types and the usual componentwise operations.
mod bytemuck_traits;
mod convert;
mod vector2;
mod vector3;
mod vector4;

pub use convert::*;
pub use vector2::*;
pub use vector3::*;
pub use vector4::*;
