use super::internal::*;

/// The demo application: owns the flock, camera, sky and the pending
/// model load. Driven by the `Shell` once per frame.
pub struct FlockApp {
	ctx: Arc<GraphicsCtx>,
	scene_opts: SceneOpts,
	flock_opts: FlockOpts,
	orbit: OrbitCamera,
	sky: Sky,
	flock: Flock,
	model: ModelState,
}

/// The model arrives asynchronously; until then the flock stays empty
/// and the update loop runs over nothing.
enum ModelState {
	Loading(Receiver<Result<BirdModel>>),
	Ready(BirdModel),
	Failed,
}

impl FlockApp {
	const SPEED_STEP: f32 = 10.0;

	pub fn new(ctx: &Arc<GraphicsCtx>, settings: Settings) -> Result<Self> {
		let model = match AssetsDir::find() {
			Ok(assets) => ModelState::Loading(load_bird_model(ctx, assets)),
			Err(e) => {
				// keep showing the sky; the flock just never appears.
				error!("bird model: {e:#}");
				ModelState::Failed
			}
		};

		Ok(Self {
			ctx: ctx.clone(),
			orbit: OrbitCamera::new(&settings.scene),
			sky: Sky::new(ctx, &settings.scene),
			scene_opts: settings.scene,
			flock_opts: settings.flock,
			flock: default(),
			model,
		})
	}

	// Check whether the background load finished; spawn the flock when it has.
	fn poll_model(&mut self) {
		let recv = match &self.model {
			ModelState::Loading(recv) => recv,
			_ => return,
		};
		match recv.try_recv() {
			Ok(Ok(model)) => {
				self.flock = Flock::spawn(&self.flock_opts);
				info!("spawned {} birds", self.flock.len());
				self.model = ModelState::Ready(model);
			}
			Ok(Err(e)) => {
				error!("bird model: {e:#}");
				self.model = ModelState::Failed;
			}
			Err(mpsc::TryRecvError::Empty) => (),
			Err(mpsc::TryRecvError::Disconnected) => self.model = ModelState::Failed,
		}
	}

	// Runtime tweak handle for the shared speed scalar.
	fn handle_keys(&mut self, inputs: &Inputs) {
		let mut speed = self.flock_opts.speed;
		if inputs.was_pressed(Button::Key(VirtualKeyCode::Up)) {
			speed += Self::SPEED_STEP;
		}
		if inputs.was_pressed(Button::Key(VirtualKeyCode::Down)) {
			speed -= Self::SPEED_STEP;
		}
		let speed = speed.max(0.0);
		if speed != self.flock_opts.speed {
			self.flock_opts.speed = speed;
			info!("flock speed: {}", speed);
		}
	}

	fn model(&self) -> Option<&BirdModel> {
		match &self.model {
			ModelState::Ready(model) => Some(model),
			_ => None,
		}
	}
}

impl App for FlockApp {
	fn handle_tick(&mut self, inputs: &Inputs) -> StateChange {
		self.poll_model();
		self.handle_keys(inputs);
		self.orbit.update(inputs, &self.scene_opts);
		self.flock.advance(&self.flock_opts, inputs.dt());

		match inputs.was_pressed(Button::ESC) {
			true => StateChange::Exit,
			false => StateChange::None,
		}
	}

	fn handle_draw(&self, viewport_size: uvec2) -> SceneGraph {
		draw_scene(
			&self.ctx,
			viewport_size,
			&self.scene_opts,
			&self.flock_opts,
			self.orbit.camera(&self.scene_opts),
			&self.sky,
			&self.flock,
			self.model(),
		)
	}
}
