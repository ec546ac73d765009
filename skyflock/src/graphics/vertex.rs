use super::internal::*;

/// Vertex struct for static meshes (e.g. the sky dome), copied into WGPU Vertex Buffers.
/// ! `repr(C)` required by WGPU.
/// ! changing field order or adding fields requires `desc()` and shaders to be updated.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable, Default)]
pub struct Vertex {
	pub position: vec3,
	pub normal: vec3,
	pub texcoords: vec2,
}

impl Vertex {
	/// Vertex descriptor corresponding to `struct VertexInput` in `sky.wgsl`.
	pub fn desc() -> wgpu::VertexBufferLayout<'static> {
		wgpu::VertexBufferLayout {
			array_stride: mem::size_of::<Self>() as wgpu::BufferAddress,
			step_mode: wgpu::VertexStepMode::Vertex,
			attributes: &Self::VERTEX_ATTR,
		}
	}

	const VERTEX_ATTR: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
		0 => Float32x3,
		1 => Float32x3,
		2 => Float32x2,
	];
}
