use super::internal::*;

// User settings for graphics quality.
#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct GraphicsOpts {
	pub width: u32,

	pub height: u32,

	pub fullscreen: bool,

	pub vsync: bool,

	pub no_msaa: bool,

	pub no_mipmaps: bool,

	pub anisotropy: u8,
}

impl GraphicsOpts {
	pub fn msaa_enabled(&self) -> bool {
		!self.no_msaa
	}

	pub fn mipmaps_enabled(&self) -> bool {
		!self.no_mipmaps
	}

	pub fn msaa_sample_count(&self) -> u32 {
		// WGPU only guarantees 1 or 4 samples (https://github.com/gfx-rs/wgpu/issues/1832)
		match self.msaa_enabled() {
			true => 4,
			false => 1,
		}
	}

	pub fn anisotropy_clamp(&self) -> Option<std::num::NonZeroU8> {
		match self.anisotropy {
			2 | 4 | 8 | 16 => std::num::NonZeroU8::new(self.anisotropy),
			_ => None,
		}
	}
}

impl Default for GraphicsOpts {
	fn default() -> Self {
		Self {
			width: 1280,
			height: 768,
			fullscreen: false,
			vsync: true,
			no_msaa: false,
			no_mipmaps: false,
			anisotropy: 16,
		}
	}
}
