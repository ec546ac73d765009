use super::internal::*;

// from https://sotrh.github.io/learn-wgpu/beginner/tutorial6-uniforms/.
#[derive(Clone)]
pub struct Camera {
	pub position: vec3,
	pub target: vec3,
	/// Baseline vertical field of view. The effective vertical FOV may be
	/// smaller on wide viewports, see `effective_fov_y`.
	pub fov_y_deg: f32,
	/// Cap on the horizontal field of view implied by `fov_y_deg` + aspect.
	pub max_fov_x_deg: f32,
	pub znear: f32,
	pub zfar: f32,
}

impl Camera {
	pub fn matrix(&self, viewport_size: uvec2) -> [[f32; 4]; 4] {
		// A collapsed viewport has no meaningful projection. Skip the update
		// rather than feed a NaN aspect ratio into the matrix.
		if viewport_size.y() == 0 {
			return mat4::UNIT.into();
		}

		let size = viewport_size.to_f32();
		let aspect = size.x() / size.y();
		let fov_y_deg = effective_fov_y(self.fov_y_deg, self.max_fov_x_deg, aspect);

		let eye: [f32; 3] = self.position.into();
		let target: [f32; 3] = self.target.into();
		let up: [f32; 3] = vec3::EY.into();

		let view = cgmath::Matrix4::look_at_rh(eye.into(), target.into(), up.into());
		let proj = cgmath::perspective(cgmath::Deg(fov_y_deg), aspect, self.znear, self.zfar);

		let proj_view = proj * view;

		let matrix = OPENGL_TO_WGPU_MATRIX * proj_view;
		matrix.into()
	}
}

impl Default for Camera {
	fn default() -> Self {
		Self {
			position: vec3(0.0, 0.0, -10.0),
			target: vec3::ZERO,
			fov_y_deg: 45.0,
			max_fov_x_deg: 90.0,
			znear: 0.1,
			zfar: 5000.0,
		}
	}
}

/// The vertical FOV to use at a given aspect ratio.
///
/// A wide viewport stretches a fixed vertical FOV into an ever larger
/// horizontal one (`fov_x = 2 atan(tan(fov_y / 2) * aspect)`). Past
/// `max_fov_x_deg` that gets disorienting, so from there on the vertical FOV
/// shrinks to hold the horizontal FOV at the cap.
pub fn effective_fov_y(base_fov_y_deg: f32, max_fov_x_deg: f32, aspect: f32) -> f32 {
	let fov_x = 2.0 * f32::atan(f32::tan(base_fov_y_deg * DEG / 2.0) * aspect) / DEG;
	if fov_x > max_fov_x_deg {
		2.0 * f32::atan(f32::tan(max_fov_x_deg * DEG / 2.0) / aspect) / DEG
	} else {
		base_fov_y_deg
	}
}

const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
	1.0, 0.0, 0.0, 0.0, //
	0.0, 1.0, 0.0, 0.0, //
	0.0, 0.0, 0.5, 0.0, //
	0.0, 0.0, 0.5, 1.0, //
);

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_wide_viewport_caps_horizontal_fov() {
		let aspect = 16.0 / 9.0;
		// at 16:9 the baseline 35° implies fov_x ≈ 58.5°, over the 40° cap,
		// so a reduced vertical FOV is substituted.
		let fov_x = 2.0 * f32::atan(f32::tan(35.0 * DEG / 2.0) * aspect) / DEG;
		assert!(fov_x > 40.0);

		let fov_y = effective_fov_y(35.0, 40.0, aspect);
		assert!(fov_y < 35.0);
		assert!((fov_y - 23.15).abs() < 0.1);

		// the substitute restores the capped horizontal FOV exactly.
		let fov_x = 2.0 * f32::atan(f32::tan(fov_y * DEG / 2.0) * aspect) / DEG;
		assert!((fov_x - 40.0).abs() < 1e-3);
	}

	#[test]
	fn test_square_viewport_keeps_baseline() {
		assert_eq!(effective_fov_y(35.0, 40.0, 1.0), 35.0);
	}

	#[test]
	fn test_zero_height_viewport() {
		let camera = Camera::default();
		// must not produce NaNs.
		let matrix = camera.matrix(uvec2(1280, 0));
		assert!(matrix.iter().flatten().all(|v| v.is_finite()));
	}
}
