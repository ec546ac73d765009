///! Minimal wavefront OBJ parser: triangle/polygon faces with positions,
///! texture coordinates and normals. Materials and the rest of the format
///! are ignored.
mod objset;
mod parse;

pub use objset::*;
pub use parse::*;
