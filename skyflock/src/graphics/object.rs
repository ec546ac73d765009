use super::internal::*;

/// A single draw command: a mesh plus the shader to draw it with.
#[derive(Clone)]
pub struct Object {
	pub vao: Arc<VAO>,
	pub shader: Shader,
}

impl Object {
	pub fn new(vao: &Arc<VAO>, shader: Shader) -> Self {
		Self { vao: vao.clone(), shader }
	}
}
