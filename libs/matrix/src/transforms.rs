use super::*;
use vector::*;

/// Translation by `delta`.
pub fn translation_matrix(delta: vec3) -> mat4 {
	Matrix4([
		Vector4([1.0, 0.0, 0.0, 0.0]),
		Vector4([0.0, 1.0, 0.0, 0.0]),
		Vector4([0.0, 0.0, 1.0, 0.0]),
		delta.append(1.0),
	])
}

/// Uniform scaling.
pub fn scale_matrix(s: f32) -> mat4 {
	Matrix4([
		Vector4([s, 0.0, 0.0, 0.0]),
		Vector4([0.0, s, 0.0, 0.0]),
		Vector4([0.0, 0.0, s, 0.0]),
		Vector4([0.0, 0.0, 0.0, 1.0]),
	])
}

/// Rotation about the Y axis (radians).
pub fn yaw_matrix(angle: f32) -> mat4 {
	let (s, c) = angle.sin_cos();
	Matrix4([
		Vector4([c, 0.0, -s, 0.0]),
		Vector4([0.0, 1.0, 0.0, 0.0]),
		Vector4([s, 0.0, c, 0.0]),
		Vector4([0.0, 0.0, 0.0, 1.0]),
	])
}

/// Rotation about the X axis (radians).
pub fn pitch_matrix(angle: f32) -> mat4 {
	let (s, c) = angle.sin_cos();
	Matrix4([
		Vector4([1.0, 0.0, 0.0, 0.0]),
		Vector4([0.0, c, s, 0.0]),
		Vector4([0.0, -s, c, 0.0]),
		Vector4([0.0, 0.0, 0.0, 1.0]),
	])
}

/// Rotation about an arbitrary (normalized) axis (radians).
pub fn rotation_matrix(axis: vec3, angle: f32) -> mat4 {
	let (s, c) = angle.sin_cos();
	let k = 1.0 - c;
	let (x, y, z) = axis.into();
	Matrix4([
		Vector4([x * x * k + c, x * y * k + z * s, x * z * k - y * s, 0.0]),
		Vector4([x * y * k - z * s, y * y * k + c, y * z * k + x * s, 0.0]),
		Vector4([x * z * k + y * s, y * z * k - x * s, z * z * k + c, 0.0]),
		Vector4([0.0, 0.0, 0.0, 1.0]),
	])
}

#[cfg(test)]
mod test {
	use super::*;

	fn approx(a: vec3, b: vec3) {
		assert!(a.distance_to(b) < 1e-5, "{} != {}", a, b);
	}

	#[test]
	fn test_translation() {
		let m = translation_matrix(vec3(1.0, 2.0, 3.0));
		approx(m.transform_point(vec3::ZERO), vec3(1.0, 2.0, 3.0));
		approx(m.transform_vector(vec3::EX), vec3::EX);
	}

	#[test]
	fn test_compose() {
		// translation * scale: scales first, then translates.
		let m = translation_matrix(vec3(10.0, 0.0, 0.0)) * scale_matrix(2.0);
		approx(m.transform_point(vec3(1.0, 0.0, 0.0)), vec3(12.0, 0.0, 0.0));
	}

	#[test]
	fn test_yaw() {
		use std::f32::consts::PI;
		// quarter turn about Y maps +X onto -Z.
		approx(yaw_matrix(PI / 2.0).transform_point(vec3::EX), -vec3::EZ);
		approx(rotation_matrix(vec3::EY, PI / 2.0).transform_point(vec3::EX), -vec3::EZ);
	}
}
