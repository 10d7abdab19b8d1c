//! Near/hover feedback on props: a gentle scale-up and a vertical bob.

use whiteroom_config::InteractionConfig;
use whiteroom_math::decay_alpha;

/// Visual state for one prop this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightState {
    pub scale: f32,
    /// Vertical offset in meters.
    pub bob: f32,
}

impl Default for HighlightState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            bob: 0.0,
        }
    }
}

/// Per-prop highlight animation, indexed like the item list.
#[derive(Clone, Debug)]
pub struct PropHighlights {
    near_scale: f32,
    hover_scale: f32,
    remaining: f32,
    bob_amplitude: f32,
    bob_frequency: f32,
    elapsed: f32,
    states: Vec<HighlightState>,
}

impl PropHighlights {
    pub fn new(config: &InteractionConfig, count: usize) -> Self {
        Self {
            near_scale: config.highlight_near_scale,
            hover_scale: config.highlight_hover_scale,
            remaining: config.highlight_remaining,
            bob_amplitude: config.bob_amplitude,
            bob_frequency: config.bob_frequency,
            elapsed: 0.0,
            states: vec![HighlightState::default(); count],
        }
    }

    pub fn states(&self) -> &[HighlightState] {
        &self.states
    }

    pub fn get(&self, index: usize) -> Option<HighlightState> {
        self.states.get(index).copied()
    }

    /// Advance by `dt` seconds. Near beats hover when both apply.
    pub fn update(&mut self, dt: f32, near: Option<usize>, hovered: Option<usize>) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.elapsed += dt;
        let alpha = decay_alpha(self.remaining, dt);
        let wave = (self.elapsed * self.bob_frequency).sin() * self.bob_amplitude;

        for (i, state) in self.states.iter_mut().enumerate() {
            let is_near = near == Some(i);
            let is_hovered = hovered == Some(i);
            let target = if is_near {
                self.near_scale
            } else if is_hovered {
                self.hover_scale
            } else {
                1.0
            };
            state.scale += (target - state.scale) * alpha;
            state.bob = if is_near || is_hovered { wave } else { 0.0 };
        }
    }
}
