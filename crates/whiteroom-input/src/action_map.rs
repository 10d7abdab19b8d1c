//! Named actions and the keys bound to them.
//!
//! [`InputMap`] lists the keys for each [`Action`] and persists as RON.
//! [`ActionState`] is recomputed from the keyboard once per tick.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;
use winit::keyboard::KeyCode;

use crate::keyboard::KeyboardState;

/// What the player can do from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Away from the camera.
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    Sprint,
    /// Use the prop the player is standing at.
    Interact,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::MoveForward,
        Action::MoveBack,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Sprint,
        Action::Interact,
    ];
}

/// Keys per action. Any one bound key held makes the action active.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputMap {
    pub bindings: HashMap<Action, Vec<KeyCode>>,
}

impl Default for InputMap {
    /// WASD to walk, either Shift to sprint, E to interact.
    fn default() -> Self {
        let mut map = Self::empty();
        map.bind(Action::MoveForward, [KeyCode::KeyW]);
        map.bind(Action::MoveBack, [KeyCode::KeyS]);
        map.bind(Action::MoveLeft, [KeyCode::KeyA]);
        map.bind(Action::MoveRight, [KeyCode::KeyD]);
        map.bind(Action::Sprint, [KeyCode::ShiftLeft, KeyCode::ShiftRight]);
        map.bind(Action::Interact, [KeyCode::KeyE]);
        map
    }
}

impl InputMap {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Replace the keys bound to `action`.
    pub fn bind(&mut self, action: Action, keys: impl IntoIterator<Item = KeyCode>) {
        self.bindings.insert(action, keys.into_iter().collect());
    }

    #[must_use]
    pub fn keys(&self, action: Action) -> &[KeyCode] {
        self.bindings.get(&action).map_or(&[], Vec::as_slice)
    }

    /// # Errors
    /// Fails only if a binding cannot be represented in RON.
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new().depth_limit(3))
    }

    /// # Errors
    /// Returns the parse error with its position in `text`.
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    /// Write the bindings to `path`, creating its directory.
    ///
    /// # Errors
    /// Serialization or I/O failure.
    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let text = self.to_ron()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Read bindings from `path`. A missing or malformed file yields the
    /// default bindings and a warning.
    pub fn load(path: &Path) -> Self {
        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| Self::from_ron(&text).map_err(|e| e.to_string()));
        parsed.unwrap_or_else(|reason| {
            warn!(path = %path.display(), %reason, "using default key bindings");
            Self::default()
        })
    }
}

/// Actions active this tick, and the ones whose key went down since the
/// last tick even if it is already up again.
#[derive(Clone, Debug, Default)]
pub struct ActionState {
    active: HashSet<Action>,
    pressed: HashSet<Action>,
}

impl ActionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute both sets from the keyboard. Call before the keyboard's
    /// `end_tick` so its down edges are still visible.
    pub fn refresh(&mut self, map: &InputMap, keyboard: &KeyboardState) {
        self.active.clear();
        self.pressed.clear();
        for (action, keys) in &map.bindings {
            if keys.iter().any(|k| keyboard.is_held(*k)) {
                self.active.insert(*action);
            }
            if keys.iter().any(|k| keyboard.went_down(*k)) {
                self.pressed.insert(*action);
            }
        }
    }

    #[must_use]
    pub fn is_active(&self, action: Action) -> bool {
        self.active.contains(&action)
    }

    /// A bound key went down since the last tick. Catches taps that were
    /// released before the tick sampled the held set.
    #[must_use]
    pub fn was_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    pub fn clear(&mut self) {
        self.active.clear();
        self.pressed.clear();
    }
}
