use super::internal::*;

/// Build the scene graph for one frame.
/// `model` is None while the bird meshes are still loading; the sky renders
/// regardless, birds join once they exist.
pub fn draw_scene(ctx: &GraphicsCtx, viewport: uvec2, opts: &SceneOpts, flock_opts: &FlockOpts, camera: Camera, sky: &Sky, flock: &Flock, model: Option<&BirdModel>) -> SceneGraph {
	let mut sg = SceneGraph::new(viewport).with(|sg| {
		sg.camera = camera;
		sg.bg_color = opts.sky_bottom;
		sg.lights = lights(opts);
		sg.atmosphere = atmosphere(opts);
	});

	sky.draw_on(&mut sg, ctx);

	if let Some(model) = model {
		draw_flock(ctx, &mut sg, flock, model, flock_opts.size);
	}

	sg
}

fn draw_flock(ctx: &GraphicsCtx, sg: &mut SceneGraph, flock: &Flock, model: &BirdModel, size: f32) {
	for bird in flock.iter() {
		let clip = model.clip(bird.mixer.clip());
		let (vao, t) = clip.pose(bird.mixer.phase());
		let transf = translation_matrix(bird.position) * scale_matrix(size);
		sg.push(Object::new(vao, ctx.shader_pack.bird(&model.skin, transf, t, bird.tint.append(1.0))));
	}
}
