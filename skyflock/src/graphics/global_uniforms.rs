use super::internal::*;

/// Data buffer to be uploaded as global uniform data (shaders: `struct Globals`).
/// ! field order and padding must match `Globals` in the WGSL sources.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Default)]
pub struct GlobalsHostData {
	view_proj: [[f32; 4]; 4],
	cam_position: vec4,

	sun_dir: vec4,
	sun_color: vec4,
	hemi_sky: vec4,
	hemi_ground: vec4,

	fog_color: vec4,
	/// x: fog near, y: fog far
	fog_range: vec4,

	sky_top: vec4,
	sky_bottom: vec4,
	/// x: offset, y: exponent
	sky_params: vec4,
}

impl GlobalsHostData {
	pub fn from_scene(sg: &SceneGraph) -> Self {
		let atm = &sg.atmosphere;
		let lights = &sg.lights;
		Self {
			view_proj: sg.camera.matrix(sg.viewport),
			cam_position: sg.camera.position.append(1.0),
			sun_dir: lights.sun_dir.safe_normalized().append(0.0),
			sun_color: lights.sun_color.append(1.0),
			hemi_sky: lights.hemi_sky.append(1.0),
			hemi_ground: lights.hemi_ground.append(1.0),
			fog_color: atm.fog_color.append(1.0),
			fog_range: vec4(atm.fog_near, atm.fog_far, 0.0, 0.0),
			sky_top: atm.sky_top.append(1.0),
			sky_bottom: atm.sky_bottom.append(1.0),
			sky_params: vec4(atm.sky_offset, atm.sky_exponent, 0.0, 0.0),
		}
	}
}

pub(super) struct GlobalUniforms {
	pub buffer: wgpu::Buffer,
	pub bind_group: wgpu::BindGroup,
}

impl GlobalUniforms {
	pub fn new(device: &wgpu::Device) -> Self {
		let hostdata = GlobalsHostData::default();
		let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
			label: Some(file!()),
			contents: bytemuck::cast_slice(&[hostdata]),
			usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
		});

		let bind_group_layout = Self::bind_group_layout(device);

		let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
			layout: &bind_group_layout,
			entries: &[wgpu::BindGroupEntry {
				binding: 0,
				resource: buffer.as_entire_binding(),
			}],
			label: Some(file!()),
		});
		Self { buffer, bind_group }
	}

	pub fn bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
		device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
			entries: &[wgpu::BindGroupLayoutEntry {
				binding: 0,
				visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
				ty: wgpu::BindingType::Buffer {
					ty: wgpu::BufferBindingType::Uniform,
					has_dynamic_offset: false,
					min_binding_size: None,
				},
				count: None,
			}],
			label: Some(file!()),
		})
	}
}
