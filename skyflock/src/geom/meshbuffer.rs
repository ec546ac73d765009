use crate::internal::*;

/// Host-side mesh: vertices + indices, ready for upload to a VAO.
#[derive(Default, Clone)]
pub struct MeshBuffer {
	pub vertices: Vec<Vertex>,
	pub indices: Vec<u32>,
}

impl MeshBuffer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn collect<'a>(shards: impl IntoIterator<Item = &'a MeshBuffer>) -> Self {
		let mut buf = Self::new();
		for shard in shards {
			buf.append(shard)
		}
		buf
	}

	pub fn vertices(&self) -> &[Vertex] {
		&self.vertices
	}

	pub fn indices(&self) -> &[u32] {
		&self.indices
	}

	/// Add a single vertex, assign it to the next free index.
	/// Vertices are typically pushed per 3.
	pub fn push(&mut self, v: Vertex) {
		let index = self.vertices.len() as u32;
		self.vertices.push(v);
		self.indices.push(index);
	}

	pub fn append(&mut self, rhs: &MeshBuffer) {
		let offset = self.vertices.len() as u32;
		self.indices.extend(rhs.indices.iter().map(|v| v + offset));
		self.vertices.extend_from_slice(&rhs.vertices);
	}

	/// A copy of `self`, with a function applied to the vertex positions.
	#[must_use = "Does not modify the original"]
	pub fn map_positions<F>(&self, f: F) -> Self
	where
		F: Fn(vec3) -> vec3,
	{
		Self {
			indices: self.indices.clone(),
			vertices: self.vertices.iter().map(|v| Vertex { position: f(v.position), ..*v }).collect(),
		}
	}

	/// UV sphere centered on the origin.
	/// `segments` counts (longitudinal, latitudinal) subdivisions.
	pub fn uv_sphere(radius: f32, segments: uvec2) -> Self {
		let (nw, nh) = (segments.x().max(3), segments.y().max(2));

		let mut buf = Self::new();
		for y in 0..=nh {
			let v = y as f32 / nh as f32;
			let phi = v * PI; // 0 at the north pole
			for x in 0..=nw {
				let u = x as f32 / nw as f32;
				let theta = u * 2.0 * PI;
				let normal = vec3(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
				buf.vertices.push(Vertex {
					position: radius * normal,
					normal,
					texcoords: vec2(u, v),
				});
			}
		}

		// counter-clockwise seen from outside
		let stride = nw + 1;
		for y in 0..nh {
			for x in 0..nw {
				let a = y * stride + x;
				let b = a + 1;
				let c = a + stride;
				let d = c + 1;
				buf.indices.extend_from_slice(&[a, b, c, b, d, c]);
			}
		}
		buf
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_append_offsets_indices() {
		let mut a = MeshBuffer::new();
		a.push(default());
		a.push(default());
		let mut b = MeshBuffer::new();
		b.push(default());
		a.append(&b);
		assert_eq!(a.indices, vec![0, 1, 2]);
	}

	#[test]
	fn test_uv_sphere() {
		let r = 3000.0;
		let sphere = MeshBuffer::uv_sphere(r, uvec2(32, 15));
		assert_eq!(sphere.vertices.len(), 33 * 16);
		assert_eq!(sphere.indices.len() as u32, 32 * 15 * 6);
		for v in sphere.vertices() {
			assert!((v.position.len() - r).abs() < 0.5);
			assert!(sphere.indices.iter().all(|&i| (i as usize) < sphere.vertices.len()));
		}
	}
}
