use super::internal::*;
use image::imageops::FilterType;

/// Generate a mipmap chain (RGBA bytes per level, starting at full resolution).
/// Only power-of-two images get more than one level.
pub fn gen_mips(opts: &GraphicsOpts, image: &DynamicImage) -> Vec<Vec<u8>> {
	let (mut w, mut h) = image.dimensions();
	let mut mips = vec![image.to_rgba8().into_raw()];

	if !opts.mipmaps_enabled() || !w.is_power_of_two() || !h.is_power_of_two() {
		return mips;
	}

	while w > 1 && h > 1 {
		w /= 2;
		h /= 2;
		mips.push(image.resize_exact(w, h, FilterType::Triangle).to_rgba8().into_raw());
	}
	mips
}
