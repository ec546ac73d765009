use super::internal::*;

/// The sky dome: a large inward-facing sphere with a gradient shader.
pub struct Sky {
	vao: Arc<VAO>,
}

impl Sky {
	// segment counts from the original scene; the dome is far away and smooth
	// shading hides the coarse tessellation.
	const SEGMENTS: uvec2 = uvec2(32, 15);

	pub fn new(ctx: &GraphicsCtx, opts: &SceneOpts) -> Self {
		let dome = MeshBuffer::uv_sphere(opts.sky_radius, Self::SEGMENTS);
		Self {
			vao: Arc::new(ctx.upload_meshbuffer(&dome)),
		}
	}

	pub fn draw_on(&self, sg: &mut SceneGraph, ctx: &GraphicsCtx) {
		sg.push(Object::new(&self.vao, ctx.shader_pack.sky()));
	}
}

/// Fog and sky-gradient parameters for the scene graph.
pub fn atmosphere(opts: &SceneOpts) -> Atmosphere {
	Atmosphere {
		// fog fades into the horizon color
		fog_color: opts.sky_bottom,
		fog_near: opts.fog_near,
		fog_far: opts.fog_far,

		sky_top: opts.sky_top,
		sky_bottom: opts.sky_bottom,
		sky_offset: opts.sky_offset,
		sky_exponent: opts.sky_exponent,
	}
}

/// Sun + hemisphere light parameters for the scene graph.
pub fn lights(opts: &SceneOpts) -> Lights {
	Lights {
		sun_dir: opts.sun_position.safe_normalized(),
		sun_color: opts.sun_color,
		hemi_sky: opts.hemi_sky * opts.hemi_intensity,
		hemi_ground: opts.hemi_ground * opts.hemi_intensity,
	}
}
