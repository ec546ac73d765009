use super::*;
use anyhow::{anyhow, Result};
use smallvec::SmallVec;
use std::io::{BufRead, BufReader, Read};
use vector::*;

/// Parse a wavefront OBJ stream.
/// Faces may reference positions, texture coordinates and normals
/// (`f v/vt/vn`); missing coordinates default to zero.
pub fn parse(input: impl Read) -> Result<ObjSet> {
	let mut positions: Vec<vec3> = vec![];
	let mut texcoords: Vec<vec2> = vec![];
	let mut normals: Vec<vec3> = vec![];
	let mut set = ObjSet::default();

	for (i, line) in BufReader::new(input).lines().enumerate() {
		let line = line?;
		let line = line.trim();
		if line.is_empty() || line.starts_with('#') {
			continue;
		}

		let mut fields = line.split_whitespace();
		let key = fields.next().unwrap_or_default();
		(|| -> Result<()> {
			match key {
				"v" => positions.push(parse_vec3(fields)?),
				"vt" => texcoords.push(parse_vec2(fields)?),
				"vn" => normals.push(parse_vec3(fields)?),
				"o" | "g" => set.objects.push(Object {
					name: fields.next().unwrap_or_default().to_string(),
					faces: vec![],
				}),
				"f" => {
					let face = parse_face(fields, &positions, &texcoords, &normals)?;
					if set.objects.is_empty() {
						set.objects.push(Object::default());
					}
					set.objects.last_mut().unwrap().faces.push(face);
				}
				// mtllib, usemtl, s, ...: ignored.
				_ => (),
			}
			Ok(())
		})()
		.map_err(|e| anyhow!("obj line {}: {}: {}", i + 1, line, e))?;
	}

	Ok(set)
}

fn parse_face<'a>(fields: impl Iterator<Item = &'a str>, positions: &[vec3], texcoords: &[vec2], normals: &[vec3]) -> Result<Face> {
	let mut face = SmallVec::new();
	for field in fields {
		let mut idx = field.split('/');
		let position = *lookup(idx.next(), positions)?.ok_or(anyhow!("missing vertex index"))?;
		let texture = lookup(idx.next(), texcoords)?.copied().unwrap_or_default();
		let normal = lookup(idx.next(), normals)?.copied().unwrap_or_default();
		face.push(Vertex { position, texture, normal });
	}
	if face.len() < 3 {
		return Err(anyhow!("face with {} vertices", face.len()));
	}
	Ok(face)
}

// Resolve a 1-based index field (may be empty or absent).
fn lookup<'a, T>(field: Option<&str>, items: &'a [T]) -> Result<Option<&'a T>> {
	let field = match field {
		None | Some("") => return Ok(None),
		Some(f) => f,
	};
	let i: usize = field.parse()?;
	items.get(i.wrapping_sub(1)).map(Some).ok_or(anyhow!("index {} out of bounds", i))
}

fn parse_vec3<'a>(mut fields: impl Iterator<Item = &'a str>) -> Result<vec3> {
	let mut next = || -> Result<f32> { Ok(fields.next().ok_or(anyhow!("missing coordinate"))?.parse()?) };
	Ok(vec3(next()?, next()?, next()?))
}

fn parse_vec2<'a>(mut fields: impl Iterator<Item = &'a str>) -> Result<vec2> {
	let mut next = || -> Result<f32> { Ok(fields.next().ok_or(anyhow!("missing coordinate"))?.parse()?) };
	Ok(vec2(next()?, next()?))
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_parse_triangles() {
		let src = "
# comment
o wing
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
vt 1 0
vt 0 1
vn 0 0 1
f 1/1/1 2/2/1 3/3/1
";
		let set = parse(src.as_bytes()).unwrap();
		assert_eq!(set.objects.len(), 1);
		assert_eq!(set.objects[0].name, "wing");
		assert_eq!(set.objects[0].faces.len(), 1);
		let face = &set.objects[0].faces[0];
		assert_eq!(face.len(), 3);
		assert_eq!(face[1].position, vec3(1.0, 0.0, 0.0));
		assert_eq!(face[2].texture, vec2(0.0, 1.0));
		assert_eq!(face[0].normal, vec3(0.0, 0.0, 1.0));
	}

	#[test]
	fn test_positions_only() {
		let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
		let set = parse(src.as_bytes()).unwrap();
		assert_eq!(set.objects[0].faces[0][0].normal, vec3::ZERO);
	}

	#[test]
	fn test_bad_index() {
		let src = "v 0 0 0\nf 1 2 3\n";
		assert!(parse(src.as_bytes()).is_err());
	}
}
