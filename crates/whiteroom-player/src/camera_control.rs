//! Orbit state shared by the pointer handlers, the proximity tracker, and
//! the follow camera.

use glam::{Vec2, Vec3};
use tracing::warn;
use whiteroom_config::CameraConfig;
use winit::event::MouseButton;

/// Camera orbit and focus record.
///
/// Pointer handlers write yaw/pitch/free-look, the wheel writes
/// `user_distance`, and proximity writes `distance`, `focus_blend` and
/// `focus_point`. Pitch stays inside `[pitch_min, pitch_max]` and both
/// distances stay inside `[distance_min, distance_max]`.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraControlState {
    pub yaw: f32,
    pitch: f32,
    /// Effective orbit distance, eased toward the proximity target.
    distance: f32,
    /// Distance the user asked for with the wheel.
    user_distance: f32,
    /// 0 = following the player, 1 = framing the near item.
    pub focus_blend: f32,
    pub focus_point: Option<Vec3>,
    free_look: bool,
    last_pointer: Vec2,

    pub pitch_min: f32,
    pub pitch_max: f32,
    pub distance_min: f32,
    pub distance_max: f32,
    /// Radians per pixel of drag.
    pub drag_sensitivity: f32,
    /// Meters per pixel of wheel travel.
    pub wheel_sensitivity: f32,
}

impl Default for CameraControlState {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

impl CameraControlState {
    pub fn new(config: &CameraConfig) -> Self {
        let (pitch_min, pitch_max) = ordered(config.pitch_min, config.pitch_max);
        let (distance_min, distance_max) = ordered(config.distance_min, config.distance_max);
        let distance = config.initial_distance.clamp(distance_min, distance_max);
        Self {
            yaw: config.initial_yaw,
            pitch: config.initial_pitch.clamp(pitch_min, pitch_max),
            distance,
            user_distance: distance,
            focus_blend: 0.0,
            focus_point: None,
            free_look: false,
            last_pointer: Vec2::ZERO,
            pitch_min,
            pitch_max,
            distance_min,
            distance_max,
            drag_sensitivity: config.drag_sensitivity,
            wheel_sensitivity: config.wheel_sensitivity,
        }
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        if pitch.is_finite() {
            self.pitch = pitch.clamp(self.pitch_min, self.pitch_max);
        }
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn set_distance(&mut self, distance: f32) {
        if distance.is_finite() {
            self.distance = distance.clamp(self.distance_min, self.distance_max);
        }
    }

    pub fn user_distance(&self) -> f32 {
        self.user_distance
    }

    pub fn set_user_distance(&mut self, distance: f32) {
        if distance.is_finite() {
            self.user_distance = distance.clamp(self.distance_min, self.distance_max);
        }
    }

    pub fn is_free_look(&self) -> bool {
        self.free_look
    }

    /// Right button down starts free-look from `position`.
    pub fn pointer_down(&mut self, button: MouseButton, position: Vec2, locked: bool) {
        if locked || button != MouseButton::Right {
            return;
        }
        if !position.is_finite() {
            warn!(?position, "ignoring non-finite pointer position");
            return;
        }
        self.free_look = true;
        self.last_pointer = position;
    }

    /// Right button up ends free-look. Runs even while locked so a drag that
    /// started before an overlay opened cannot stay latched.
    pub fn pointer_up(&mut self, button: MouseButton) {
        if button == MouseButton::Right {
            self.free_look = false;
        }
    }

    /// Pointer moved to `position`. `right_held` is the live button state;
    /// a move without it ends free-look.
    pub fn pointer_move(&mut self, position: Vec2, right_held: bool, locked: bool) {
        if locked {
            return;
        }
        if !right_held {
            self.free_look = false;
            return;
        }
        if !self.free_look {
            return;
        }
        if !position.is_finite() {
            warn!(?position, "ignoring non-finite pointer position");
            return;
        }
        let delta = position - self.last_pointer;
        self.last_pointer = position;
        self.yaw -= delta.x * self.drag_sensitivity;
        self.set_pitch(self.pitch - delta.y * self.drag_sensitivity);
    }

    pub fn pointer_leave(&mut self) {
        self.free_look = false;
    }

    /// Window lost focus.
    pub fn blur(&mut self) {
        self.free_look = false;
    }

    /// Wheel travel in page pixels, positive = scroll down = farther.
    pub fn wheel(&mut self, delta_y: f32, locked: bool) {
        if locked {
            return;
        }
        if !delta_y.is_finite() {
            warn!(delta_y, "ignoring non-finite wheel delta");
            return;
        }
        self.set_user_distance(self.user_distance + delta_y * self.wheel_sensitivity);
    }
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_initial_values() {
        let c = CameraControlState::default();
        assert_eq!(c.yaw, PI);
        assert_eq!(c.pitch(), 0.2);
        assert_eq!(c.distance(), 10.0);
        assert_eq!(c.user_distance(), 10.0);
        assert_eq!(c.focus_blend, 0.0);
        assert!(c.focus_point.is_none());
        assert!(!c.is_free_look());
    }

    #[test]
    fn test_right_drag_orbits() {
        let mut c = CameraControlState::default();
        c.pointer_down(MouseButton::Right, Vec2::new(100.0, 100.0), false);
        assert!(c.is_free_look());
        c.pointer_move(Vec2::new(120.0, 90.0), true, false);
        assert!((c.yaw - (PI - 0.1)).abs() < 1e-6);
        assert!((c.pitch() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_left_button_does_not_start_free_look() {
        let mut c = CameraControlState::default();
        c.pointer_down(MouseButton::Left, Vec2::ZERO, false);
        assert!(!c.is_free_look());
        c.pointer_move(Vec2::new(50.0, 0.0), true, false);
        assert_eq!(c.yaw, PI);
    }

    #[test]
    fn test_pitch_clamped_while_dragging() {
        let mut c = CameraControlState::default();
        c.pointer_down(MouseButton::Right, Vec2::ZERO, false);
        c.pointer_move(Vec2::new(0.0, -1000.0), true, false);
        assert_eq!(c.pitch(), 0.65);
        c.pointer_move(Vec2::new(0.0, 1000.0), true, false);
        assert_eq!(c.pitch(), 0.05);
    }

    #[test]
    fn test_move_without_button_ends_free_look() {
        let mut c = CameraControlState::default();
        c.pointer_down(MouseButton::Right, Vec2::ZERO, false);
        c.pointer_move(Vec2::new(10.0, 0.0), false, false);
        assert!(!c.is_free_look());
        c.pointer_move(Vec2::new(30.0, 0.0), true, false);
        assert_eq!(c.yaw, PI);
    }

    #[test]
    fn test_release_leave_and_blur_end_free_look() {
        let mut c = CameraControlState::default();
        for end in [
            CameraControlState::blur as fn(&mut CameraControlState),
            CameraControlState::pointer_leave,
            |c: &mut CameraControlState| c.pointer_up(MouseButton::Right),
        ] {
            c.pointer_down(MouseButton::Right, Vec2::ZERO, false);
            end(&mut c);
            assert!(!c.is_free_look());
        }
    }

    #[test]
    fn test_locked_handlers_are_no_ops() {
        let mut c = CameraControlState::default();
        c.pointer_down(MouseButton::Right, Vec2::ZERO, true);
        assert!(!c.is_free_look());

        c.pointer_down(MouseButton::Right, Vec2::ZERO, false);
        c.pointer_move(Vec2::new(100.0, 100.0), true, true);
        assert_eq!(c.yaw, PI);
        assert!(c.is_free_look());

        c.wheel(500.0, true);
        assert_eq!(c.user_distance(), 10.0);
    }

    #[test]
    fn test_wheel_adjusts_and_clamps_user_distance() {
        let mut c = CameraControlState::default();
        c.wheel(100.0, false);
        assert!((c.user_distance() - 11.0).abs() < 1e-6);
        c.wheel(10_000.0, false);
        assert_eq!(c.user_distance(), 18.0);
        c.wheel(-10_000.0, false);
        assert_eq!(c.user_distance(), 4.0);
    }

    #[test]
    fn test_non_finite_input_ignored() {
        let mut c = CameraControlState::default();
        c.wheel(f32::NAN, false);
        assert_eq!(c.user_distance(), 10.0);
        c.pointer_down(MouseButton::Right, Vec2::ZERO, false);
        c.pointer_move(Vec2::new(f32::NAN, 3.0), true, false);
        assert_eq!(c.yaw, PI);
        assert_eq!(c.pitch(), 0.2);
        c.set_distance(f32::INFINITY);
        assert_eq!(c.distance(), 10.0);
    }

    #[test]
    fn test_swapped_limits_are_ordered() {
        let cfg = CameraConfig {
            pitch_min: 0.9,
            pitch_max: 0.1,
            ..CameraConfig::default()
        };
        let c = CameraControlState::new(&cfg);
        assert!(c.pitch_min <= c.pitch_max);
        assert!((c.pitch_min..=c.pitch_max).contains(&c.pitch()));
    }
}
