use super::internal::*;
use winit::event::{KeyboardInput, MouseButton, MouseScrollDelta};

/// Accumulates input events since the last tick,
/// allowing for queries like "is this key currently held down?".
///
/// Also de-bounces events faster than a tick,
/// and removes OS key repeats.
#[derive(Default, Debug)]
pub struct Inputs {
	pub buttons_down: Set<Button>,
	pub buttons_pressed: Set<Button>,
	pub buttons_released: Set<Button>,
	pub mouse_delta: vec2,
	pub scroll_delta: f32,
	pub tick_time: Duration,
}

/// A keystroke or mouse click, uniformly treated as a "button" push.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum Button {
	Key(VirtualKeyCode),
	Mouse(MouseButton),
}

impl Button {
	pub const MOUSE1: Self = Self::Mouse(MouseButton::Left);
	pub const ESC: Self = Self::Key(VirtualKeyCode::Escape);
}

impl Inputs {
	/// Duration of the last frame, in seconds.
	pub fn dt(&self) -> f32 {
		self.tick_time.as_secs_f32()
	}

	/// Is the button currently held down?
	pub fn is_down(&self, button: Button) -> bool {
		self.buttons_down.contains(&button)
	}

	/// Did the button go down since the last tick? (de-bounced, no OS repeats)
	pub fn was_pressed(&self, button: Button) -> bool {
		self.buttons_pressed.contains(&button)
	}

	pub fn was_released(&self, button: Button) -> bool {
		self.buttons_released.contains(&button)
	}

	pub fn record_window_event(&mut self, event: &WindowEvent) {
		match event {
			WindowEvent::KeyboardInput {
				input: KeyboardInput {
					virtual_keycode: Some(key), state, ..
				},
				..
			} => self.record_button(Button::Key(*key), *state),
			WindowEvent::MouseInput { button, state, .. } => self.record_button(Button::Mouse(*button), *state),
			WindowEvent::MouseWheel { delta, .. } => self.record_scroll(delta),
			_ => (),
		}
	}

	pub fn record_button(&mut self, button: Button, state: ElementState) {
		match state {
			ElementState::Pressed => {
				// OS key repeats arrive as extra Pressed events: ignore.
				if self.buttons_down.insert(button) {
					self.buttons_pressed.insert(button);
				}
			}
			ElementState::Released => {
				self.buttons_down.remove(&button);
				self.buttons_released.insert(button);
			}
		}
	}

	pub fn record_mouse_motion(&mut self, delta: dvec2) {
		self.mouse_delta += delta.to_f32();
	}

	fn record_scroll(&mut self, delta: &MouseScrollDelta) {
		self.scroll_delta += match delta {
			MouseScrollDelta::LineDelta(_, y) => *y,
			MouseScrollDelta::PixelDelta(p) => (p.y / 50.0) as f32,
		};
	}

	/// To be called after each tick:
	/// clears per-tick events, keeps the held-down state.
	pub fn forget(&mut self) {
		self.buttons_pressed.clear();
		self.buttons_released.clear();
		self.mouse_delta = vec2::ZERO;
		self.scroll_delta = 0.0;
	}

	/// Clear all state, including held-down buttons.
	/// Needed after focus loss: the release events go elsewhere.
	pub fn clear(&mut self) {
		*self = Self {
			tick_time: self.tick_time,
			..default()
		};
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_debounce_key_repeat() {
		let mut inputs = Inputs::default();
		inputs.record_button(Button::ESC, ElementState::Pressed);
		inputs.record_button(Button::ESC, ElementState::Pressed); // OS repeat
		assert!(inputs.was_pressed(Button::ESC));
		assert!(inputs.is_down(Button::ESC));

		inputs.forget();
		assert!(!inputs.was_pressed(Button::ESC)); // edge is gone
		assert!(inputs.is_down(Button::ESC)); // still held

		inputs.record_button(Button::ESC, ElementState::Released);
		assert!(!inputs.is_down(Button::ESC));
		assert!(inputs.was_released(Button::ESC));
	}

	#[test]
	fn test_mouse_accumulates() {
		let mut inputs = Inputs::default();
		inputs.record_mouse_motion(dvec2(1.0, 2.0));
		inputs.record_mouse_motion(dvec2(0.5, -1.0));
		assert_eq!(inputs.mouse_delta, vec2(1.5, 1.0));

		inputs.forget();
		assert_eq!(inputs.mouse_delta, vec2::ZERO);
	}
}
