use super::global_uniforms::*;
use super::internal::*;

pub struct ShaderPack {
	dev: Arc<DeviceCtx>,
	pub sky_pipeline: SkyPipeline,
	pub bird_pipeline: BirdPipeline,
}

impl ShaderPack {
	pub fn new(opts: &GraphicsOpts, dev: &Arc<DeviceCtx>, surface_format: wgpu::TextureFormat) -> Self {
		let dev = dev.clone();
		let device = &dev.device;
		let camera_layout = GlobalUniforms::bind_group_layout(device);
		let sky_pipeline = SkyPipeline::new(opts, device, surface_format, &camera_layout);
		let bird_pipeline = BirdPipeline::new(opts, device, surface_format, &camera_layout);

		Self { dev, sky_pipeline, bird_pipeline }
	}

	pub fn sky(&self) -> Shader {
		Shader::Sky
	}

	pub fn bird(&self, texture: &Texture, transform: mat4, t: f32, tint: vec4) -> Shader {
		debug_assert!((0.0..=1.0).contains(&t));
		Shader::Bird(Arc::new(self.bird_pipeline.texture_bind_group(&self.dev, texture)), transform, t, tint)
	}
}
