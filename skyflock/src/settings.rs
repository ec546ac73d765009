use crate::internal::*;

/// All user-controlled settings, read from "settings.toml".
/// Every field has a default, so a missing or partial file is fine.
#[derive(Deserialize, Default, Clone)]
#[serde(default)]
pub struct Settings {
	pub graphics: GraphicsOpts,
	pub scene: SceneOpts,
	pub flock: FlockOpts,
}

/// Camera, lighting and atmosphere parameters.
#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct SceneOpts {
	pub camera_position: vec3,
	pub fov_y_deg: f32,
	pub max_fov_x_deg: f32,
	pub znear: f32,
	pub zfar: f32,
	pub mouse_sensitivity: f32,

	pub fog_near: f32,
	pub fog_far: f32,

	pub sky_radius: f32,
	pub sky_offset: f32,
	pub sky_exponent: f32,
	pub sky_top: vec3,
	pub sky_bottom: vec3,

	/// Position the sun shines from (directional, toward the origin).
	pub sun_position: vec3,
	pub sun_color: vec3,
	pub hemi_sky: vec3,
	pub hemi_ground: vec3,
	pub hemi_intensity: f32,
}

impl Default for SceneOpts {
	fn default() -> Self {
		Self {
			camera_position: vec3(-580.0, 55.0, 390.0),
			fov_y_deg: 35.0,
			max_fov_x_deg: 40.0,
			znear: 0.1,
			zfar: 5000.0,
			mouse_sensitivity: 100.0,

			fog_near: 1350.0,
			fog_far: 1500.0,

			sky_radius: 3000.0,
			sky_offset: 730.0,
			sky_exponent: 0.3,
			sky_top: hsl(0.6, 1.0, 0.5),
			sky_bottom: hex_color(0xefcb7f),

			sun_position: vec3(-300.0, 220.0, 245.0),
			sun_color: hsl(0.1, 1.0, 0.95),
			hemi_sky: hsl(0.6, 1.0, 0.5),
			hemi_ground: hsl(0.095, 1.0, 0.5),
			hemi_intensity: 0.6,
		}
	}
}

pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T> {
	info!("load settings: {path:?}");
	let mut f = open(path)?;
	let mut buf = String::new();
	f.read_to_string(&mut buf)?;
	toml::from_str(&buf).map_err(|e| anyhow!("load settings: {e:#}"))
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_defaults() {
		let settings: Settings = toml::from_str("").unwrap();
		assert_eq!(settings.flock.count, 40);
		assert_eq!(settings.scene.fov_y_deg, 35.0);
		assert_eq!(settings.graphics.width, 1280);
	}

	#[test]
	fn test_partial_override() {
		let settings: Settings = toml::from_str(
			"
[flock]
count = 7
speed = 25.0

[scene]
camera_position = [0.0, 10.0, 100.0]
",
		)
		.unwrap();
		assert_eq!(settings.flock.count, 7);
		assert_eq!(settings.flock.speed, 25.0);
		// untouched fields keep their defaults
		assert_eq!(settings.flock.half_depth, 700.0);
		assert_eq!(settings.scene.camera_position, vec3(0.0, 10.0, 100.0));
		assert_eq!(settings.scene.max_fov_x_deg, 40.0);
	}
}
