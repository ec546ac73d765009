pub use super::super::internal::*;

pub use super::global_uniforms::*;
pub use super::shaders::*;
