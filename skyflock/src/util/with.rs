/// `With` is automatically implemented for every (sized) type,
/// and provides a method `with` that applies a function. E.g.
///
///    SceneGraph::new(viewport).with(|sg| sg.camera = camera)
///
/// This avoids the need for explicit mutability like
///
///  let mut sg = SceneGraph::new(viewport);
///  sg.camera = camera;
///  sg
///
pub trait With {
	fn with<F: FnOnce(&mut Self)>(self, f: F) -> Self;
}

impl<T> With for T {
	#[inline]
	fn with<F: FnOnce(&mut Self)>(mut self, f: F) -> Self {
		f(&mut self);
		self
	}
}
