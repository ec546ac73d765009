use super::internal::*;

/// Convenience wrapper around a configured wgpu Device.
///
/// Exposes higher-level methods to create textures, buffers, etc,
/// using a single queue (i.e. synchronously).
///
/// Includes performance counters.
pub struct DeviceCtx {
	pub device: wgpu::Device,
	pub queue: wgpu::Queue,
	pub surface_format: wgpu::TextureFormat,
	pub counters: Counters,
}

#[derive(Copy, Clone)]
pub struct TextureOpts {
	pub max_filter: wgpu::FilterMode,
	pub format: wgpu::TextureFormat,
	pub address_mode: wgpu::AddressMode,
}

pub const NEAREST: TextureOpts = TextureOpts {
	max_filter: wgpu::FilterMode::Nearest,
	..TextureOpts::DEFAULT
};

impl TextureOpts {
	const DEFAULT: Self = Self {
		max_filter: wgpu::FilterMode::Linear,
		format: wgpu::TextureFormat::Rgba8UnormSrgb,
		address_mode: wgpu::AddressMode::Repeat,
	};
}

impl Default for TextureOpts {
	fn default() -> Self {
		Self::DEFAULT
	}
}

impl DeviceCtx {
	pub fn new(device: wgpu::Device, queue: wgpu::Queue, surface_format: wgpu::TextureFormat) -> Self {
		Self {
			device,
			queue,
			surface_format,
			counters: default(),
		}
	}

	pub fn upload_buffer<T: Pod>(&self, dst: &wgpu::Buffer, src: &[T]) {
		self.counters.buffer_uploads.inc();
		self.counters.bytes_uploaded.add((src.len() * mem::size_of::<T>()) as u64);
		self.queue.write_buffer(dst, 0, bytemuck::cast_slice(src));
	}

	pub fn create_rgba_mipmap(&self, opts: &GraphicsOpts, mips: &[&[u8]], dimensions: uvec2, sampling: &TextureOpts) -> Texture {
		self.counters.texture_uploads.inc();

		debug_assert!(mips[0].len() == 4 * dimensions.reduce(u32::mul) as usize);
		if mips.len() > 1 {
			assert!(dimensions.x().is_power_of_two());
			assert!(dimensions.y().is_power_of_two());
		}

		let mut size = wgpu::Extent3d {
			width: dimensions.x(),
			height: dimensions.y(),
			depth_or_array_layers: 1,
		};
		let texture = self.device.create_texture(&wgpu::TextureDescriptor {
			label: Some(file!()),
			size,
			mip_level_count: mips.len() as u32,
			sample_count: 1,
			dimension: wgpu::TextureDimension::D2,
			format: sampling.format,
			usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
		});

		for (i, rgba) in mips.iter().enumerate() {
			self.queue.write_texture(
				wgpu::ImageCopyTexture {
					aspect: wgpu::TextureAspect::All,
					texture: &texture,
					mip_level: i as u32,
					origin: wgpu::Origin3d::ZERO,
				},
				rgba,
				wgpu::ImageDataLayout {
					offset: 0,
					bytes_per_row: std::num::NonZeroU32::new(4 * size.width),
					rows_per_image: std::num::NonZeroU32::new(size.height),
				},
				size,
			);
			size.width /= 2;
			size.height /= 2;
		}

		let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
		let sampler = self.device.create_sampler(&wgpu::SamplerDescriptor {
			address_mode_u: sampling.address_mode,
			address_mode_v: sampling.address_mode,
			address_mode_w: sampling.address_mode,
			mag_filter: sampling.max_filter,
			min_filter: sampling.max_filter,
			mipmap_filter: sampling.max_filter,
			label: Some(file!()),
			// ! anisotropic sampling requires linear filtering
			anisotropy_clamp: match sampling.max_filter {
				wgpu::FilterMode::Linear => opts.anisotropy_clamp(),
				_ => None,
			},
			..default()
		});

		Texture { texture, view, sampler }
	}

	pub fn create_vao<T>(&self, vertices: &[T], indices: &[u32]) -> VAO
	where
		T: Pod,
	{
		debug_assert!(indices.len() < 1 << 31);
		self.counters.buffer_creates.inc();
		let vertex_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
			label: Some(file!()),
			contents: bytemuck::cast_slice(vertices),
			usage: wgpu::BufferUsages::VERTEX,
		});
		let index_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
			label: Some(file!()),
			contents: bytemuck::cast_slice(indices),
			usage: wgpu::BufferUsages::INDEX,
		});

		VAO {
			num_indices: indices.len() as u32,
			vertex_buffer,
			index_buffer,
		}
	}

	pub fn create_depth_texture(&self, opts: &GraphicsOpts, size: uvec2) -> Texture {
		let size = wgpu::Extent3d {
			width: size.x(),
			height: size.y(),
			depth_or_array_layers: 1,
		};
		let desc = wgpu::TextureDescriptor {
			label: Some(file!()),
			size,
			mip_level_count: 1,
			sample_count: opts.msaa_sample_count(),
			dimension: wgpu::TextureDimension::D2,
			format: Canvas::DEPTH_FORMAT,
			usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
		};
		let texture = self.device.create_texture(&desc);
		let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
		let sampler = self.device.create_sampler(&wgpu::SamplerDescriptor {
			address_mode_u: wgpu::AddressMode::ClampToEdge,
			address_mode_v: wgpu::AddressMode::ClampToEdge,
			address_mode_w: wgpu::AddressMode::ClampToEdge,
			mag_filter: wgpu::FilterMode::Linear,
			min_filter: wgpu::FilterMode::Linear,
			mipmap_filter: wgpu::FilterMode::Nearest,
			compare: Some(wgpu::CompareFunction::LessEqual),
			lod_min_clamp: -100.0,
			lod_max_clamp: 100.0,
			..default()
		});

		Texture { texture, view, sampler }
	}

	pub fn create_msaa_fb(&self, opts: &GraphicsOpts, config: &wgpu::SurfaceConfiguration) -> Option<MSAAFB> {
		if opts.msaa_enabled() {
			let fb = self.create_multisampled_framebuffer(opts, config);
			let fb_view = fb.create_view(&wgpu::TextureViewDescriptor::default());
			Some(MSAAFB { fb, fb_view })
		} else {
			None
		}
	}

	fn create_multisampled_framebuffer(&self, opts: &GraphicsOpts, config: &wgpu::SurfaceConfiguration) -> wgpu::Texture {
		let extent = wgpu::Extent3d {
			width: config.width,
			height: config.height,
			depth_or_array_layers: 1,
		};
		self.device.create_texture(&wgpu::TextureDescriptor {
			size: extent,
			mip_level_count: 1,
			sample_count: opts.msaa_sample_count(),
			dimension: wgpu::TextureDimension::D2,
			format: config.format,
			usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
			label: Some(file!()),
		})
	}
}
