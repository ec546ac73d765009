use super::internal::*;
use winit::dpi::LogicalSize;
use winit::event::{DeviceEvent, Event};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// The Shell is a "Graphics Terminal".
///
/// It opens a window, runs an `App`, feeds it user input and a per-frame
/// clock tick, and renders the scene graph the App hands back:
///
///   user inputs + dt     App{
///  ------------------>     handle_tick()
///   scenegraph
///  <------------------     handle_draw()
///                        }
///
/// The display driver paces the loop: every finished frame requests the
/// next redraw, so the App ticks once per display refresh.
pub struct Shell {
	window: Window,
	canvas: Canvas,

	clock: FrameClock,
	epoch: Instant,
	input_state: Inputs,
	app: Box<dyn App>,
}

impl Shell {
	/// Open a Shell window that will construct and run an `App`. E.g.:
	///
	///   Shell::main_loop(opts, FlockApp::new)
	///
	/// The constructor function should return quickly: anything slow
	/// (e.g. loading assets) belongs on a background thread.
	pub fn main_loop<F, A>(opts: GraphicsOpts, new_app: F) -> Result<()>
	where
		A: App,
		F: FnOnce(&Arc<GraphicsCtx>) -> Result<A>,
	{
		let event_loop = EventLoop::new();
		let window = WindowBuilder::new() //
			.with_inner_size(LogicalSize::<u32> {
				width: opts.width,
				height: opts.height,
			})
			.with_fullscreen(match opts.fullscreen {
				true => Some(winit::window::Fullscreen::Borderless(None)),
				false => None,
			})
			.with_title("skyflock")
			.build(&event_loop)?;

		let canvas = Canvas::new(opts, &window)?;
		let app = Box::new(new_app(canvas.graphics_context())?);

		let shell = Self {
			window,
			canvas,
			clock: FrameClock::new(),
			epoch: Instant::now(),
			input_state: default(),
			app,
		};

		Ok(shell.event_loop(event_loop))
	}

	fn event_loop(mut self, event_loop: EventLoop<()>) {
		let my_window_id = self.window.id();
		event_loop.run(move |event, _, control_flow| {
			match event {
				Event::WindowEvent { ref event, window_id } if window_id == my_window_id => {
					match event {
						WindowEvent::CloseRequested => self.exit(control_flow),
						WindowEvent::Resized(physical_size) => {
							self.handle_resize(*physical_size);
						}
						WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
							self.handle_resize(**new_inner_size);
						}
						WindowEvent::Focused(false) => self.input_state.clear(),
						event => self.input_state.record_window_event(event),
					};
				}
				Event::DeviceEvent {
					event: DeviceEvent::MouseMotion { delta },
					..
				} => {
					self.input_state.record_mouse_motion(delta.into());
				}
				Event::RedrawRequested(window_id) if window_id == my_window_id => {
					// Note: without testing for ControlFlow::Exit,
					// closing the window *sometimes* hangs in what appears to be
					// a race condition (not *data* race) between exit and a pending redraw.
					if *control_flow != ControlFlow::Exit {
						self.handle_request_redraw(control_flow);
					}
				}
				Event::MainEventsCleared => {
					if *control_flow != ControlFlow::Exit {
						self.window.request_redraw(); // Continuously draw
					}
				}
				_ => {}
			}
		});
	}
}

impl Shell {
	pub fn viewport_size(&self) -> uvec2 {
		self.canvas.viewport_size()
	}

	fn handle_request_redraw(&mut self, control_flow: &mut ControlFlow) {
		self.tick(control_flow);
		self.redraw();
	}

	fn tick(&mut self, control_flow: &mut ControlFlow) {
		self.update_dt();
		let state_change = self.app.handle_tick(&self.input_state);
		self.input_state.forget();

		use StateChange::*;
		match state_change {
			None => (),
			Exit => self.exit(control_flow),
		}
	}

	/// Update the current time step, in preparation of a new `tick` call.
	fn update_dt(&mut self) {
		let now = self.epoch.elapsed().as_secs_f64();
		self.input_state.tick_time = Duration::from_secs_f32(self.clock.tick(now));
	}

	fn redraw(&mut self) {
		let scene = self.app.handle_draw(self.canvas.viewport_size());
		self.canvas.render(scene);
	}

	fn handle_resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
		if size.width > 0 && size.height > 0 {
			self.canvas.resize(uvec2(size.width, size.height));
		}
	}

	fn exit(&self, control_flow: &mut ControlFlow) {
		self.canvas.graphics_context().dev.counters.log_totals();
		*control_flow = ControlFlow::Exit;
	}
}
