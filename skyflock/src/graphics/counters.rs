use std::sync::atomic::{AtomicU64, Ordering};

/// Performance counters, incremented all over the graphics stack.
#[derive(Default)]
pub struct Counters {
	pub draw_calls: Counter,
	pub draw_instances: Counter,
	pub vertices: Counter,
	pub buffer_creates: Counter,
	pub buffer_uploads: Counter,
	pub bytes_uploaded: Counter,
	pub texture_uploads: Counter,
}

#[derive(Default)]
pub struct Counter(AtomicU64);

impl Counter {
	#[inline]
	pub fn inc(&self) {
		self.add(1)
	}

	#[inline]
	pub fn add(&self, n: u64) {
		self.0.fetch_add(n, Ordering::Relaxed);
	}

	pub fn get(&self) -> u64 {
		self.0.load(Ordering::Relaxed)
	}
}

impl Counters {
	/// Log the totals (called on exit).
	pub fn log_totals(&self) {
		log::debug!(
			"draw calls: {}, instances: {}, vertices: {}, buffer uploads: {} ({} bytes), textures: {}",
			self.draw_calls.get(),
			self.draw_instances.get(),
			self.vertices.get(),
			self.buffer_uploads.get(),
			self.bytes_uploaded.get(),
			self.texture_uploads.get(),
		);
	}
}
