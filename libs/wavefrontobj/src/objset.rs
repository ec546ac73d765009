use smallvec::SmallVec;
use vector::*;

#[derive(Default, PartialEq, Debug)]
pub struct ObjSet {
	pub objects: Vec<Object>,
}

impl ObjSet {
	pub fn iter_faces(&self) -> impl Iterator<Item = &Face> + '_ {
		self.objects.iter().flat_map(|o| o.faces.iter())
	}
}

#[derive(Default, PartialEq, Debug)]
pub struct Object {
	pub name: String,
	pub faces: Vec<Face>,
}

pub type Face = SmallVec<[Vertex; 3]>;

#[derive(PartialEq, Debug, Clone)]
pub struct Vertex {
	pub position: vec3,
	pub texture: vec2,
	pub normal: vec3,
}
