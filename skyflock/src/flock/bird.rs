use super::internal::*;

/// One independently animated bird.
///
/// The bird owns its transform, tint and playback state; the mesh it is drawn
/// with is shared (immutable, behind `Arc`) and looked up at draw time.
#[derive(Clone, Debug)]
pub struct Bird {
	pub position: vec3,
	pub tint: vec3,
	pub mixer: Mixer,
}
