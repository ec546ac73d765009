use super::internal::*;

/// Context: explicit handle to "globals":
///
///   * device and command queue,
///   * shaders
///   * performance counters
///
/// These are, logically speaking, global singletons.
pub struct GraphicsCtx {
	pub dev: Arc<DeviceCtx>,
	pub opts: GraphicsOpts,
	pub shader_pack: ShaderPack,
	pub white_texture: Arc<Texture>,
}

impl GraphicsCtx {
	pub fn new(opts: GraphicsOpts, dev: &Arc<DeviceCtx>, surface_format: wgpu::TextureFormat) -> Self {
		let dev = dev.clone();
		let shader_pack = ShaderPack::new(&opts, &dev, surface_format);

		Self {
			opts,
			shader_pack,
			white_texture: Arc::new(uniform_texture(&dev, vec4::ONES)),
			dev,
		}
	}

	pub fn device(&self) -> &wgpu::Device {
		&self.dev.device
	}

	pub fn queue(&self) -> &wgpu::Queue {
		&self.dev.queue
	}

	pub fn upload_buffer<T: Pod>(&self, dst: &wgpu::Buffer, src: &[T]) {
		self.dev.upload_buffer(dst, src)
	}

	pub fn upload_image_mip(&self, image: &DynamicImage, sampling: &TextureOpts) -> Texture {
		let mips = gen_mips(&self.opts, image);
		let mips = mips.iter().map(|vec| vec.as_ref()).collect::<Vec<_>>();
		self.dev.create_rgba_mipmap(&self.opts, &mips, image.dimensions().into(), sampling)
	}

	/// Upload RGBA pixel data to the GPU.
	pub fn upload_rgba(&self, rgba: &[u8], dimensions: uvec2, sampling: &TextureOpts) -> Texture {
		self.dev.create_rgba_mipmap(&self.opts, &[rgba], dimensions, sampling)
	}

	pub fn upload_meshbuffer(&self, buf: &MeshBuffer) -> VAO {
		self.dev.create_vao(buf.vertices(), buf.indices())
	}
}
