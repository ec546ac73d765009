///! Color utilities: HSL, hex notation, sRGB conversion.
use crate::internal::*;

/// Color from hue, saturation, lightness (each in `0..=1`, hue wraps).
pub fn hsl(h: f32, s: f32, l: f32) -> vec3 {
	let h = fract(h);
	let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
	let p = 2.0 * l - q;
	vec3(hue_to_rgb(p, q, h + 1.0 / 3.0), hue_to_rgb(p, q, h), hue_to_rgb(p, q, h - 1.0 / 3.0))
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
	let t = fract(t);
	if t < 1.0 / 6.0 {
		p + (q - p) * 6.0 * t
	} else if t < 1.0 / 2.0 {
		q
	} else if t < 2.0 / 3.0 {
		p + (q - p) * 6.0 * (2.0 / 3.0 - t)
	} else {
		p
	}
}

/// Color from `0xRRGGBB` notation.
pub fn hex_color(hex: u32) -> vec3 {
	vec3(((hex >> 16) & 0xff) as f32, ((hex >> 8) & 0xff) as f32, (hex & 0xff) as f32) * (1.0 / 255.0)
}

/// Map a linear color component (`0..=1`) to an 8-bit sRGB value.
pub fn linear_to_srgb(c: f32) -> u8 {
	let c = c.clamp(0.0, 1.0);
	let s = if c <= 0.0031308 { 12.92 * c } else { 1.055 * c.powf(1.0 / 2.4) - 0.055 };
	(s * 255.0).round() as u8
}

#[cfg(test)]
mod test {
	use super::*;

	fn approx(a: vec3, b: vec3) {
		assert!(a.distance_to(b) < 1e-5, "{} != {}", a, b);
	}

	#[test]
	fn test_hsl() {
		approx(hsl(0.0, 1.0, 0.5), vec3(1.0, 0.0, 0.0));
		approx(hsl(1.0 / 3.0, 1.0, 0.5), vec3(0.0, 1.0, 0.0));
		approx(hsl(0.5, 1.0, 0.5), vec3(0.0, 1.0, 1.0));
		approx(hsl(0.25, 0.0, 0.7), vec3(0.7, 0.7, 0.7));
		// hue wraps
		approx(hsl(1.25, 1.0, 0.5), hsl(0.25, 1.0, 0.5));
	}

	#[test]
	fn test_hex_color() {
		approx(hex_color(0xff0000), vec3(1.0, 0.0, 0.0));
		approx(hex_color(0x000000), vec3::ZERO);
		approx(hex_color(0xffffff), vec3::ONES);
	}

	#[test]
	fn test_linear_to_srgb() {
		assert_eq!(linear_to_srgb(0.0), 0);
		assert_eq!(linear_to_srgb(1.0), 255);
		assert_eq!(linear_to_srgb(0.5), 188);
	}
}
