use crate::internal::*;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
	pub min: vec3,
	pub max: vec3,
}

impl BoundingBox {
	pub fn new(min: vec3, max: vec3) -> Self {
		Self { min, max }
	}

	/// Smallest box containing all points. None for an empty iterator.
	pub fn from_points(points: impl IntoIterator<Item = vec3>) -> Option<Self> {
		let mut points = points.into_iter();
		let first = points.next()?;
		let mut bb = Self::new(first, first);
		for p in points {
			for i in 0..3 {
				bb.min[i] = bb.min[i].min(p[i]);
				bb.max[i] = bb.max[i].max(p[i]);
			}
		}
		Some(bb)
	}

	pub fn center(&self) -> vec3 {
		(self.min + self.max) * 0.5
	}

	pub fn size(&self) -> vec3 {
		self.max - self.min
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_from_points() {
		let bb = BoundingBox::from_points([vec3(1.0, -2.0, 0.0), vec3(-1.0, 4.0, 2.0)]).unwrap();
		assert_eq!(bb.min, vec3(-1.0, -2.0, 0.0));
		assert_eq!(bb.max, vec3(1.0, 4.0, 2.0));
		assert_eq!(bb.center(), vec3(0.0, 1.0, 1.0));
		assert_eq!(bb.size(), vec3(2.0, 6.0, 2.0));
		assert_eq!(BoundingBox::from_points([]), None);
	}
}
