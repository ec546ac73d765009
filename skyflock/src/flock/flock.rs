use super::internal::*;

/// Shared flock parameters, read from settings and (for `speed`) adjustable
/// at runtime. Passed by reference into `Flock::advance` so there is no
/// hidden global configuration.
#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct FlockOpts {
	/// Number of birds.
	pub count: u32,

	/// Shared flight speed scalar (world units per second).
	pub speed: f32,

	/// Birds fly through the corridor `[-half_depth, half_depth)` along z.
	pub half_depth: f32,

	/// Bird height in world units.
	pub size: f32,

	/// Spawn spread (x, y) around the corridor axis.
	pub spread: vec2,

	/// RNG seed for spawn placement. 0 seeds from entropy.
	pub seed: u64,
}

impl Default for FlockOpts {
	fn default() -> Self {
		Self {
			count: 40,
			speed: 100.0,
			half_depth: 700.0,
			size: 60.0,
			spread: vec2(150.0, 200.0),
			seed: 0,
		}
	}
}

/// The actor pool: owns every bird. Empty until the model finishes loading.
#[derive(Default, Clone)]
pub struct Flock {
	birds: Vec<Bird>,
}

impl Flock {
	/// Spawn the whole flock in one batch.
	///
	/// Birds are spread over the corridor: evenly laddered in height,
	/// lattice-spaced in depth, randomly jittered sideways. Each bird gets its
	/// own tint, playback speed and start phase.
	pub fn spawn(opts: &FlockOpts) -> Self {
		let mut rng = match opts.seed {
			0 => Xoshiro256PlusPlus::from_entropy(),
			seed => Xoshiro256PlusPlus::seed_from_u64(seed),
		};

		let n = opts.count.max(1);
		let birds = (0..n)
			.map(|i| {
				let u = i as f32 / (n - 1).max(1) as f32;
				let m = opts.half_depth;
				let position = vec3(
					rng.gen_range(-opts.spread.x()..=opts.spread.x()),
					(u * 2.0 - 1.0) * opts.spread.y(),
					(2.0 * m * i as f32 * 1.7).rem_euclid(2.0 * m) - m,
				);
				let tint = hsl(rng.gen::<f32>(), 1.0, 0.8);
				let mixer = Mixer::new(0 /*fly*/, 1.0, rng.gen_range(0.9..=1.1)) //
					.with(|mixer| mixer.advance(rng.gen_range(0.0..10.0)));
				Bird { position, tint, mixer }
			})
			.collect();

		Self { birds }
	}

	/// The per-frame update: advance every bird's animation player and move it
	/// along the corridor. Never fails; an empty flock is a no-op.
	pub fn advance(&mut self, opts: &FlockOpts, dt: f32) {
		for bird in &mut self.birds {
			bird.mixer.advance(dt);
			bird.position[2] = advance_coord(bird.position.z(), opts.half_depth, bird.mixer.time_scale() * opts.speed, dt);
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = &Bird> + '_ {
		self.birds.iter()
	}

	pub fn len(&self) -> usize {
		self.birds.len()
	}

	pub fn is_empty(&self) -> bool {
		self.birds.is_empty()
	}
}

/// Advance one wrap-axis coordinate: sawtooth motion through the corridor
/// `[-half_span, half_span)`.
///
/// Stateless given `(coord, velocity, dt)`: the result is reduced into the
/// corridor in one step (`rem_euclid`), so no error accumulates and no
/// re-normalization is ever needed, no matter how large `dt` is.
pub fn advance_coord(coord: f32, half_span: f32, velocity: f32, dt: f32) -> f32 {
	let step = velocity * dt;
	if step == 0.0 {
		// keep a zero-length frame bit-identical
		return coord;
	}
	(coord + half_span + step).rem_euclid(2.0 * half_span) - half_span
}

#[cfg(test)]
mod test {
	use super::*;

	fn test_opts() -> FlockOpts {
		FlockOpts { seed: 12345, ..default() }
	}

	#[test]
	fn test_wrap_invariant() {
		let m = 700.0;
		// seeds inside and outside the corridor, deltas up to many periods
		for coord in [-700.0, -699.9, -10.0, 0.0, 1.5, 699.9, 890.0, -1401.0] {
			for dt in [0.0, 0.001, 0.3, 7.0, 100.0, 1e4] {
				for velocity in [0.0, 90.0, 100.0, 110.0] {
					let new = advance_coord(coord, m, velocity, dt);
					if velocity * dt == 0.0 {
						// a zero-length step never touches the coordinate
						assert_eq!(new, coord);
					} else {
						assert!((-m..m).contains(&new), "coord {} dt {} velocity {} -> {}", coord, dt, velocity, new);
					}
				}
			}
		}
	}

	#[test]
	fn test_zero_dt_is_identity() {
		for coord in [-700.0f32, -0.1, 0.0, 123.456, 699.99] {
			assert_eq!(advance_coord(coord, 700.0, 100.0, 0.0).to_bits(), coord.to_bits());
		}
	}

	#[test]
	fn test_deterministic() {
		let a = advance_coord(690.0, 700.0, 107.3, 1.23);
		let b = advance_coord(690.0, 700.0, 107.3, 1.23);
		assert_eq!(a.to_bits(), b.to_bits());
	}

	#[test]
	fn test_literal_wrap() {
		// speed 100, dt 7: one step of 700 units.
		// 690 + 700 + 700 = 2090; 2090 mod 1400 = 690; 690 - 700 = -10.
		assert_eq!(advance_coord(690.0, 700.0, 100.0, 7.0), -10.0);
		assert_eq!(advance_coord(0.0, 700.0, 100.0, 7.0), -700.0);
		assert_eq!(advance_coord(-700.0, 700.0, 100.0, 7.0), 0.0);
	}

	#[test]
	fn test_spawn_spans_corridor() {
		let opts = test_opts();
		let flock = Flock::spawn(&opts);
		assert_eq!(flock.len(), 40);
		for bird in flock.iter() {
			assert!((-opts.half_depth..opts.half_depth).contains(&bird.position.z()));
			assert!(bird.position.x().abs() <= opts.spread.x());
			assert!(bird.position.y().abs() <= opts.spread.y());
			assert!((0.9..=1.1).contains(&bird.mixer.time_scale()));
		}
		// not all in one plane
		assert!(flock.iter().any(|b| b.position.z() != 0.0));
	}

	#[test]
	fn test_spawn_deterministic_with_seed() {
		let opts = test_opts();
		let a = Flock::spawn(&opts);
		let b = Flock::spawn(&opts);
		for (ba, bb) in a.iter().zip(b.iter()) {
			assert_eq!(ba.position, bb.position);
			assert_eq!(ba.tint, bb.tint);
		}
	}

	#[test]
	fn test_advance_whole_flock() {
		// all speed multipliers pinned to 1: after dt = 7 at speed 100 every
		// bird must sit exactly one wrap-law step from where it started.
		let opts = test_opts();
		let flock = Flock::spawn(&opts);
		let start: Vec<f32> = flock.iter().map(|b| b.position.z()).collect();

		let mut moved = flock.clone();
		for bird in &mut moved.birds {
			bird.mixer = Mixer::new(0, 1.0, 1.0);
		}
		moved.advance(&opts, 7.0);

		for (bird, z0) in moved.iter().zip(start) {
			let expected = (z0 + 700.0 + 700.0).rem_euclid(1400.0) - 700.0;
			assert_eq!(bird.position.z(), expected);
		}
	}

	#[test]
	fn test_advance_empty_flock() {
		// the pool may still be empty while the model loads
		Flock::default().advance(&test_opts(), 0.016);
	}
}
