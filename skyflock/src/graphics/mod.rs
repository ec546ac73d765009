//! Higher-level graphics utilities on top of WGPU.

mod camera;
mod canvas;
mod counters;
mod device_ctx;
mod global_uniforms;
mod graphics_ctx;
mod graphics_opts;
mod instance_raw;
mod internal;
mod mipmap;
mod object;
mod scenegraph;
mod shader;
mod shader_pack;
mod shaders;
mod texture;
mod vao;
mod vertex;
mod vertex_kf;

pub use camera::*;
pub use canvas::*;
pub use counters::*;
pub use device_ctx::*;
pub use graphics_ctx::*;
pub use graphics_opts::*;
pub use instance_raw::*;
pub use mipmap::*;
pub use object::*;
pub use scenegraph::*;
pub use shader::*;
pub use shader_pack::*;
pub use texture::*;
pub use vao::*;
pub use vertex::*;
pub use vertex_kf::*;
