//! Input sources for the white room: held keys, pointer state, and the
//! action map that names them.

pub mod action_map;
pub mod keyboard;
pub mod pointer;

pub use action_map::{Action, ActionState, InputMap};
pub use keyboard::{KeyboardState, RawKeyEvent};
pub use pointer::{PIXELS_PER_LINE, PointerState, wheel_pixels};
