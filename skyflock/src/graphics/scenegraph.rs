use super::internal::*;

/// Retained description of one frame: camera, lights, atmosphere and the
/// objects to draw. Rebuilt from scratch every frame and handed to the Canvas.
pub struct SceneGraph {
	pub viewport: uvec2,
	pub bg_color: vec3,
	pub camera: Camera,
	pub lights: Lights,
	pub atmosphere: Atmosphere,
	pub objects: Vec<Object>,
}

impl SceneGraph {
	pub fn new(viewport: uvec2) -> Self {
		Self {
			viewport,
			bg_color: vec3(1.0, 1.0, 1.0),
			camera: default(),
			lights: default(),
			atmosphere: default(),
			objects: default(),
		}
	}

	pub fn push(&mut self, obj: Object) {
		self.objects.push(obj)
	}
}

/// Directional sun plus a hemisphere fill.
#[derive(Clone)]
pub struct Lights {
	/// Direction TOWARDS the sun (normalized).
	pub sun_dir: vec3,
	pub sun_color: vec3,
	pub hemi_sky: vec3,
	pub hemi_ground: vec3,
}

impl Default for Lights {
	fn default() -> Self {
		Self {
			sun_dir: vec3::EY,
			sun_color: vec3::ONES,
			hemi_sky: vec3(0.6, 0.6, 0.6),
			hemi_ground: vec3(0.3, 0.3, 0.3),
		}
	}
}

/// Distance fog and the sky dome gradient.
#[derive(Clone)]
pub struct Atmosphere {
	pub fog_color: vec3,
	pub fog_near: f32,
	pub fog_far: f32,

	pub sky_top: vec3,
	pub sky_bottom: vec3,
	pub sky_offset: f32,
	pub sky_exponent: f32,
}

impl Default for Atmosphere {
	fn default() -> Self {
		Self {
			// fog so far out it is effectively off
			fog_color: vec3::ONES,
			fog_near: 1e30,
			fog_far: 2e30,

			sky_top: vec3(0.53, 0.67, 0.73),
			sky_bottom: vec3::ONES,
			sky_offset: 0.0,
			sky_exponent: 1.0,
		}
	}
}
