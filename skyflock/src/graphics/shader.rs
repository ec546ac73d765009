use super::internal::*;

// Shaders are not intended to be manually constructed.
// Use `ShaderPack` instead.
#[derive(Clone)]
pub enum Shader {
	/// Sky dome gradient. Drawn with the global uniforms only.
	Sky,
	/// Keyframe-interpolated mesh: texture bind group, model transform,
	/// interpolation position `0..=1` between the pose pair, tint color.
	Bird(Arc<wgpu::BindGroup>, mat4, f32, vec4),
}
