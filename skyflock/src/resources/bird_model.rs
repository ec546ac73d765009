use super::internal::*;
use rayon::prelude::*;

/// GPU-resident template for one bird: named keyframe cycles plus a skin
/// texture. Per-actor state (transform, tint, playback) lives in the flock;
/// the meshes themselves are shared via `Arc` and never mutated.
pub struct BirdModel {
	clips: Vec<Clip>,
	pub skin: Arc<Texture>,
}

impl BirdModel {
	const BODY: &'static str = "flamingo";

	pub fn load(ctx: &GraphicsCtx, assets: &AssetsDir) -> Result<Self> {
		// the flight cycle is required, further cycles are optional.
		let mut clips = vec![Clip::load(ctx, assets, Self::BODY, "fly")?];
		for cycle in ["glide"] {
			if assets.find_obj(&format!("{}_{cycle}_0", Self::BODY)).is_ok() {
				clips.push(Clip::load(ctx, assets, Self::BODY, cycle)?);
			}
		}

		let skin = match upload_image(ctx, assets, Self::BODY, &default()) {
			Ok(texture) => Arc::new(texture),
			Err(e) => {
				info!("no skin texture ({e:#}), using flat white");
				ctx.white_texture.clone()
			}
		};

		Ok(Self { clips, skin })
	}

	/// Clip by index; out-of-range indices fall back to clip 0.
	pub fn clip(&self, i: usize) -> &Clip {
		self.clips.get(i).unwrap_or(&self.clips[0])
	}

	pub fn num_clips(&self) -> usize {
		self.clips.len()
	}
}

/// One animation cycle, as keyframe-pair meshes on the GPU.
/// `frames[i]` morphs pose i into pose i+1 (wrapping).
pub struct Clip {
	pub name: String,
	frames: Vec<Arc<VAO>>,
}

impl Clip {
	// Load an animation cycle from `assets/obj/{body}_{cycle}_{i}.obj`.
	//
	// E.g. for body "flamingo", cycle "fly" with 4 keyframes:
	// 	`flamingo_fly_0.obj`, `flamingo_fly_1.obj`, ... `flamingo_fly_3.obj`
	pub fn load(ctx: &GraphicsCtx, assets: &AssetsDir, body: &str, cycle: &str) -> Result<Self> {
		let name = format!("{body}_{cycle}");
		let n = (0..).take_while(|i| assets.find_obj(&format!("{name}_{i}")).is_ok()).count();
		if n == 0 {
			return Err(anyhow!("animation cycle not found: {name}_0"));
		}

		let poses = Self::load_poses(assets, &name, n)?;
		let poses = Self::rescale_poses(poses);
		let frames = Self::morph(ctx, &poses)?;

		info!("loaded cycle {name}: {} keyframes", frames.len());
		Ok(Self { name: cycle.to_string(), frames })
	}

	/// The morph frame and interpolation position for a playback phase in `[0, 1)`.
	pub fn pose(&self, phase: f32) -> (&Arc<VAO>, f32) {
		let (i, t) = frame_lerp(phase, self.frames.len());
		(&self.frames[i], t)
	}

	// Load `n` keyframes of an animation cycle.
	// E.g.: cycle_name: `flamingo_fly`, n: 4
	fn load_poses(assets: &AssetsDir, cycle_name: &str, n: usize) -> Result<Vec<MeshBuffer>> {
		(0..n)
			.into_par_iter()
			.map(|i| load_wavefront_merged(assets, &format!("{cycle_name}_{i}")))
			.collect::<Result<Vec<_>>>()
	}

	// Center the poses on the origin and normalize their height to 1,
	// so that actor scale is controlled by the transform alone.
	// All poses share one bounding box to keep the cycle from wobbling.
	fn rescale_poses(poses: Vec<MeshBuffer>) -> Vec<MeshBuffer> {
		let bounds = BoundingBox::from_points(
			poses.iter() //
				.flat_map(|mesh| mesh.vertices.iter().map(|v| v.position)),
		)
		.unwrap_or(BoundingBox::new(default(), default()));
		let center = bounds.center();
		let scale = 1.0 / bounds.size().y().max(1e-6);
		poses.into_iter().map(|mesh| mesh.map_positions(|p| (p - center) * scale)).collect()
	}

	fn morph(ctx: &GraphicsCtx, poses: &[MeshBuffer]) -> Result<Vec<Arc<VAO>>> {
		let indices = poses[0].indices();

		poses
			.iter()
			.enumerate()
			.map(|(i, pose)| -> Result<Arc<VAO>> {
				let next = &poses[wrap(i + 1, poses.len())];
				let host_vertices = Self::morph2(pose, next)?;
				Ok(Arc::new(ctx.dev.create_vao(&host_vertices, indices)))
			})
			.collect::<Result<Vec<_>>>()
	}

	fn morph2(pose1: &MeshBuffer, pose2: &MeshBuffer) -> Result<Vec<VertexKF>> {
		check_indices_per_frame(&[pose1, pose2])?;

		Ok(pose1
			.vertices()
			.iter()
			.zip(pose2.vertices().iter())
			.map(|(v1, v2)| VertexKF {
				texcoords: v1.texcoords,
				position1: v1.position,
				position2: v2.position,
				normal1: v1.normal,
				normal2: v2.normal,
			})
			.collect::<Vec<_>>())
	}
}

/// Map a phase in `[0, 1)` onto (keyframe index, interpolation position).
pub fn frame_lerp(phase: f32, num_frames: usize) -> (usize, f32) {
	let r = fract(phase) * (num_frames as f32);
	let i = (r.floor() as usize).min(num_frames - 1);
	(i, r - i as f32)
}

fn check_indices_per_frame(poses: &[&MeshBuffer]) -> Result<()> {
	for pose in &poses[1..] {
		if pose.vertices.len() != poses[0].vertices.len() {
			return Err(anyhow!("keyframes have different number of vertices"));
		}
		if pose.indices != poses[0].indices {
			return Err(anyhow!("keyframes have different indices"));
		}
	}
	Ok(())
}

fn wrap(i: usize, len: usize) -> usize {
	if i == len {
		0
	} else {
		i
	}
}

/// Load and upload the bird model on a background thread.
/// The returned channel delivers the result exactly once; poll it with
/// `try_recv` from the frame loop.
pub fn load_bird_model(ctx: &Arc<GraphicsCtx>, assets: AssetsDir) -> Receiver<Result<BirdModel>> {
	let (send, recv) = mpsc::channel();
	let ctx = ctx.clone();
	std::thread::spawn(move || {
		let result = BirdModel::load(&ctx, &assets);
		info!("bird model loading done");
		send.send(result).unwrap_or_else(|err| error!("{}", err));
		// Note: send error only occurs if receiver dropped, so main program must already be terminating.
	});
	recv
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_frame_lerp() {
		assert_eq!(frame_lerp(0.0, 4), (0, 0.0));
		assert_eq!(frame_lerp(0.25, 4), (1, 0.0));
		assert_eq!(frame_lerp(0.875, 4), (3, 0.5));

		// phase just below 1 must not index out of bounds
		let (i, t) = frame_lerp(0.999999, 6);
		assert!(i < 6);
		assert!((0.0..1.0).contains(&t));

		// phase wraps
		assert_eq!(frame_lerp(1.25, 4), frame_lerp(0.25, 4));
	}

	#[test]
	fn test_wrap() {
		assert_eq!(wrap(0, 6), 0);
		assert_eq!(wrap(5, 6), 5);
		assert_eq!(wrap(6, 6), 0);
	}
}
