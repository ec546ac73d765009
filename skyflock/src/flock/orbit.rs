use super::internal::*;

/// Orbit camera: left-drag rotates around the target, scrolling zooms.
pub struct OrbitCamera {
	pub target: vec3,
	yaw: f32,
	pitch: f32,
	radius: f32,
}

impl OrbitCamera {
	const MIN_RADIUS: f32 = 10.0;
	const MAX_RADIUS: f32 = 2500.0;
	// stay shy of the poles so the up vector never degenerates
	const MAX_PITCH: f32 = 0.49 * PI;

	/// An orbit around the origin, starting at `opts.camera_position`.
	pub fn new(opts: &SceneOpts) -> Self {
		let p = opts.camera_position;
		let radius = p.len().clamp(Self::MIN_RADIUS, Self::MAX_RADIUS);
		Self {
			target: vec3::ZERO,
			yaw: f32::atan2(p.x(), p.z()),
			pitch: f32::asin((p.y() / radius).clamp(-1.0, 1.0)),
			radius,
		}
	}

	pub fn update(&mut self, inputs: &Inputs, opts: &SceneOpts) {
		if inputs.is_down(Button::MOUSE1) {
			let delta = inputs.mouse_delta * (opts.mouse_sensitivity * 1e-5);
			self.yaw -= delta.x() * 2.0 * PI;
			self.pitch = (self.pitch + delta.y() * PI).clamp(-Self::MAX_PITCH, Self::MAX_PITCH);
		}

		let zoom = 1.0 - 0.1 * inputs.scroll_delta;
		self.radius = (self.radius * zoom).clamp(Self::MIN_RADIUS, Self::MAX_RADIUS);
	}

	pub fn position(&self) -> vec3 {
		let dir = vec3(
			self.yaw.sin() * self.pitch.cos(), //
			self.pitch.sin(),
			self.yaw.cos() * self.pitch.cos(),
		);
		self.target + self.radius * dir
	}

	pub fn camera(&self, opts: &SceneOpts) -> Camera {
		Camera {
			position: self.position(),
			target: self.target,
			fov_y_deg: opts.fov_y_deg,
			max_fov_x_deg: opts.max_fov_x_deg,
			znear: opts.znear,
			zfar: opts.zfar,
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_starts_at_configured_position() {
		let opts = SceneOpts::default();
		let orbit = OrbitCamera::new(&opts);
		assert!(orbit.position().distance_to(opts.camera_position) < 1.0);
	}

	#[test]
	fn test_idle_inputs_keep_position() {
		let opts = SceneOpts::default();
		let mut orbit = OrbitCamera::new(&opts);
		let before = orbit.position();
		orbit.update(&default(), &opts);
		assert_eq!(orbit.position(), before);
	}
}
