//! Camera-relative walking.

use glam::{Quat, Vec3};
use whiteroom_config::MovementConfig;
use whiteroom_input::{Action, ActionState};
use whiteroom_math::RoomBounds;

use crate::PlayerTransform;

/// Directional and sprint keys held this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
}

impl MoveInput {
    pub fn from_actions(actions: &ActionState) -> Self {
        Self {
            forward: actions.is_active(Action::MoveForward),
            back: actions.is_active(Action::MoveBack),
            left: actions.is_active(Action::MoveLeft),
            right: actions.is_active(Action::MoveRight),
            sprint: actions.is_active(Action::Sprint),
        }
    }

    /// True if any directional key is held, even when opposite keys cancel.
    pub fn any_direction(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }

    /// Unnormalized camera-space direction: forward is -Z, right is +X.
    pub fn direction(&self) -> Vec3 {
        let mut v = Vec3::ZERO;
        if self.forward {
            v.z -= 1.0;
        }
        if self.back {
            v.z += 1.0;
        }
        if self.left {
            v.x -= 1.0;
        }
        if self.right {
            v.x += 1.0;
        }
        v
    }
}

/// Animation clip the renderer should play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationState {
    Idle,
    Walk,
    Run,
}

impl AnimationState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walk => "walk",
            Self::Run => "run",
        }
    }
}

/// Turns held keys and the camera yaw into a per-tick displacement.
#[derive(Clone, Debug, PartialEq)]
pub struct MovementIntegrator {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    /// Walkable square; x and z are clamped into it after every step.
    pub bounds: RoomBounds,
}

impl MovementIntegrator {
    /// `bounds` is the walkable square, as built by the room clamp.
    pub fn new(movement: &MovementConfig, bounds: RoomBounds) -> Self {
        Self {
            walk_speed: movement.walk_speed,
            sprint_speed: movement.sprint_speed,
            bounds,
        }
    }

    /// Advance one tick. While `disabled` the transform is left as is.
    ///
    /// Facing follows the world displacement and is kept when standing still.
    pub fn step(
        &self,
        transform: &mut PlayerTransform,
        input: &MoveInput,
        camera_yaw: f32,
        disabled: bool,
    ) -> AnimationState {
        if disabled {
            return AnimationState::Idle;
        }

        let v = input.direction();
        if v.length_squared() > 0.0 {
            let speed = if input.sprint {
                self.sprint_speed
            } else {
                self.walk_speed
            };
            let step = Quat::from_rotation_y(camera_yaw) * v.normalize() * speed;
            transform.position += step;
            transform.facing = step.x.atan2(step.z);
        }
        transform.position = self.bounds.clamp_xz(transform.position);

        match (input.any_direction(), input.sprint) {
            (false, _) => AnimationState::Idle,
            (true, true) => AnimationState::Run,
            (true, false) => AnimationState::Walk,
        }
    }
}
