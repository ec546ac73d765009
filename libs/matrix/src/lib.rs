///! Matrix and transform utilities.
mod matrix4;
mod transforms;

pub use matrix4::*;
pub use transforms::*;
