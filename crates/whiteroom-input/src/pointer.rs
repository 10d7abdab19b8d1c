//! Pointer state: cursor position and held buttons, plus wheel conversion.
//!
//! Wheel travel is reported in page pixels with positive meaning "scroll
//! down" (away from the scene), the convention the camera zoom expects.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

/// Pixels of wheel travel per line step.
pub const PIXELS_PER_LINE: f32 = 40.0;

/// Converts a winit wheel delta to page pixels, positive = scroll down.
///
/// winit reports scrolling up as positive on both variants, so the sign is
/// flipped here.
pub fn wheel_pixels(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_x, y) => -y * PIXELS_PER_LINE,
        MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32),
    }
}

fn button_index(button: MouseButton) -> Option<usize> {
    match button {
        MouseButton::Left => Some(0),
        MouseButton::Right => Some(1),
        MouseButton::Middle => Some(2),
        _ => None,
    }
}

/// Cursor position and held buttons, fed from winit window events.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    position: Vec2,
    held: [bool; 3],
    in_window: bool,
}

impl PointerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a `CursorMoved` event. Returns the movement since the last
    /// known position.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) -> Vec2 {
        let new_pos = Vec2::new(x as f32, y as f32);
        let delta = new_pos - self.position;
        self.position = new_pos;
        self.in_window = true;
        delta
    }

    /// Process a `MouseInput` event. Returns true when the button went from
    /// up to down. Buttons beyond left/right/middle are ignored.
    pub fn on_button(&mut self, button: MouseButton, state: ElementState) -> bool {
        let Some(idx) = button_index(button) else {
            return false;
        };
        let down = state == ElementState::Pressed;
        let was_down = std::mem::replace(&mut self.held[idx], down);
        down && !was_down
    }

    pub fn on_cursor_entered(&mut self) {
        self.in_window = true;
    }

    /// Process a `CursorLeft` event. Held buttons are dropped since their
    /// release will not be delivered here.
    pub fn on_cursor_left(&mut self) {
        self.in_window = false;
        self.held = [false; 3];
    }

    /// Window lost focus.
    pub fn on_blur(&mut self) {
        self.held = [false; 3];
    }

    /// Current cursor position in window coordinates.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[must_use]
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        button_index(button).is_some_and(|i| self.held[i])
    }

    #[must_use]
    pub fn is_in_window(&self) -> bool {
        self.in_window
    }
}
