use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::*;

#[allow(non_camel_case_types)]
pub type vec2 = Vector2<f32>;

#[allow(non_camel_case_types)]
pub type dvec2 = Vector2<f64>;

#[allow(non_camel_case_types)]
pub type ivec2 = Vector2<i32>;

#[allow(non_camel_case_types)]
pub type uvec2 = Vector2<u32>;

#[inline]
pub const fn vec2(x: f32, y: f32) -> vec2 {
	Vector2([x, y])
}

#[inline]
pub const fn dvec2(x: f64, y: f64) -> dvec2 {
	Vector2([x, y])
}

#[inline]
pub const fn ivec2(x: i32, y: i32) -> ivec2 {
	Vector2([x, y])
}

#[inline]
pub const fn uvec2(x: u32, y: u32) -> uvec2 {
	Vector2([x, y])
}

/// 2-component vector.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector2<T>(pub [T; 2]);

impl<T: Copy> Vector2<T> {
	#[inline]
	pub const fn new(x: T, y: T) -> Self {
		Self([x, y])
	}

	#[inline]
	pub fn x(&self) -> T {
		self.0[0]
	}

	#[inline]
	pub fn y(&self) -> T {
		self.0[1]
	}

	/// Apply a function to each component.
	#[inline]
	pub fn map<F, U>(&self, f: F) -> Vector2<U>
	where
		F: Fn(T) -> U,
	{
		Vector2([f(self.0[0]), f(self.0[1])])
	}

	/// Fold the components pairwise. E.g. `uvec2(3, 4).reduce(u32::mul) == 12`.
	#[inline]
	pub fn reduce<F>(&self, f: F) -> T
	where
		F: Fn(T, T) -> T,
	{
		f(self.0[0], self.0[1])
	}
}

impl Vector2<u32> {
	pub const ZERO: Self = Self([0, 0]);

	#[inline]
	pub fn to_f32(self) -> vec2 {
		self.convert()
	}
}

impl Vector2<f64> {
	#[inline]
	pub fn to_f32(self) -> vec2 {
		self.convert()
	}
}

impl Vector2<f32> {
	pub const ZERO: Self = Self([0.0, 0.0]);
	pub const ONES: Self = Self([1.0, 1.0]);
}

impl<T> Index<usize> for Vector2<T> {
	type Output = T;

	#[inline]
	fn index(&self, i: usize) -> &T {
		&self.0[i]
	}
}

impl<T> IndexMut<usize> for Vector2<T> {
	#[inline]
	fn index_mut(&mut self, i: usize) -> &mut T {
		&mut self.0[i]
	}
}

impl<T: Copy> From<(T, T)> for Vector2<T> {
	#[inline]
	fn from((x, y): (T, T)) -> Self {
		Self([x, y])
	}
}

impl<T: Copy> From<[T; 2]> for Vector2<T> {
	#[inline]
	fn from(arr: [T; 2]) -> Self {
		Self(arr)
	}
}

impl<T: Copy> From<Vector2<T>> for [T; 2] {
	#[inline]
	fn from(v: Vector2<T>) -> Self {
		v.0
	}
}

impl<T> Add for Vector2<T>
where
	T: Add<Output = T> + Copy,
{
	type Output = Self;

	#[inline]
	fn add(self, rhs: Self) -> Self {
		Self([self.0[0] + rhs.0[0], self.0[1] + rhs.0[1]])
	}
}

impl<T> AddAssign for Vector2<T>
where
	T: Add<Output = T> + Copy,
{
	#[inline]
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs
	}
}

impl<T> Sub for Vector2<T>
where
	T: Sub<Output = T> + Copy,
{
	type Output = Self;

	#[inline]
	fn sub(self, rhs: Self) -> Self {
		Self([self.0[0] - rhs.0[0], self.0[1] - rhs.0[1]])
	}
}

impl<T> Mul<T> for Vector2<T>
where
	T: Mul<Output = T> + Copy,
{
	type Output = Self;

	#[inline]
	fn mul(self, rhs: T) -> Self {
		self.map(|v| v * rhs)
	}
}

impl<T> Neg for Vector2<T>
where
	T: Neg<Output = T> + Copy,
{
	type Output = Self;

	#[inline]
	fn neg(self) -> Self {
		self.map(|v| -v)
	}
}

impl Mul<vec2> for f32 {
	type Output = vec2;

	#[inline]
	fn mul(self, rhs: vec2) -> vec2 {
		rhs * self
	}
}

impl<T: fmt::Display> fmt::Display for Vector2<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "({}, {})", self.0[0], self.0[1])
	}
}

impl<T: fmt::Debug> fmt::Debug for Vector2<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{:?}", self.0)
	}
}
