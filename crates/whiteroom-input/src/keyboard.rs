//! Held-key tracker.
//!
//! Keys are identified by physical [`KeyCode`] so the WASD cluster stays in
//! place on every layout. Keys winit cannot identify never reach the tracker.

use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// A key transition reduced to what the room reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawKeyEvent {
    pub code: KeyCode,
    pub down: bool,
    /// OS auto-repeat while held.
    pub repeat: bool,
}

impl RawKeyEvent {
    pub fn pressed(code: KeyCode) -> Self {
        Self {
            code,
            down: true,
            repeat: false,
        }
    }

    pub fn released(code: KeyCode) -> Self {
        Self {
            code,
            down: false,
            repeat: false,
        }
    }

    /// `None` for keys without a known physical code.
    pub fn from_winit(event: &KeyEvent) -> Option<Self> {
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        Some(Self {
            code,
            down: event.state == ElementState::Pressed,
            repeat: event.repeat,
        })
    }
}

/// Keys held right now, plus the ones that went down or up this tick.
#[derive(Clone, Debug, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
    went_down: HashSet<KeyCode>,
    went_up: HashSet<KeyCode>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. Auto-repeats are ignored, as are presses of a key
    /// already down and releases of a key that is not. Returns true if the
    /// held set changed.
    pub fn apply(&mut self, event: RawKeyEvent) -> bool {
        if event.repeat {
            return false;
        }
        let changed = if event.down {
            self.held.insert(event.code)
        } else {
            self.held.remove(&event.code)
        };
        if changed {
            let edges = if event.down {
                &mut self.went_down
            } else {
                &mut self.went_up
            };
            edges.insert(event.code);
        }
        changed
    }

    #[must_use]
    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    #[must_use]
    pub fn went_down(&self, code: KeyCode) -> bool {
        self.went_down.contains(&code)
    }

    #[must_use]
    pub fn went_up(&self, code: KeyCode) -> bool {
        self.went_up.contains(&code)
    }

    pub fn held(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.held.iter().copied()
    }

    /// Let go of every key as if each had been released. Returns how many
    /// were down.
    ///
    /// Called when controls lock or the window loses focus, since the real
    /// releases may never arrive.
    pub fn release_all(&mut self) -> usize {
        let count = self.held.len();
        self.went_up.extend(self.held.drain());
        self.went_down.clear();
        count
    }

    /// Forget this tick's edges. Held keys stay held.
    pub fn end_tick(&mut self) {
        self.went_down.clear();
        self.went_up.clear();
    }
}
