use super::internal::*;

pub trait App: 'static {
	/// Called once per frame by the `Shell`, before drawing.
	///
	/// The App must advance its state forward in time,
	/// given the inputs since the last tick.
	///
	/// The App may request a Shell state change (e.g. exit).
	fn handle_tick(&mut self, inputs: &Inputs) -> StateChange;

	/// Called by the `Shell` when a redraw is needed.
	fn handle_draw(&self, viewport_size: uvec2) -> SceneGraph;
}

/// Returned by an `App` to request a change in the `Shell`'s state machine.
pub enum StateChange {
	/// Keep going.
	None,

	/// Close the window and leave the main loop.
	Exit,
}
