//! Shoulder follow camera kept inside the room.
//!
//! Each tick the camera computes where it wants to be from the orbit state,
//! pulls that point back along the anchor ray if it would leave the room,
//! and eases its position toward the result.

use glam::Vec3;
use whiteroom_config::{CameraConfig, RoomConfig};
use whiteroom_math::RoomBounds;

use crate::{CameraControlState, CameraPose};

#[derive(Clone, Debug, PartialEq)]
pub struct FollowCamera {
    pub shoulder_height: f32,
    pub shoulder_offset: f32,
    pub shoulder_lift: f32,
    pub look_height: f32,
    pub follow_rate: f32,
    pub hit_epsilon: f32,
    pub min_y: f32,
    /// Vertical field of view, radians.
    pub fov_y: f32,
    interior: RoomBounds,
    position: Vec3,
    target: Vec3,
}

impl FollowCamera {
    pub fn new(camera: &CameraConfig, room: &RoomConfig) -> Self {
        let half = (room.size * 0.5 - camera.wall_pad).max(0.0);
        let top = (room.height - camera.ceiling_gap).max(camera.min_y);
        Self {
            shoulder_height: camera.shoulder_height,
            shoulder_offset: camera.shoulder_offset,
            shoulder_lift: camera.shoulder_lift,
            look_height: camera.look_height,
            follow_rate: camera.follow_rate.clamp(0.0, 1.0),
            hit_epsilon: camera.hit_epsilon,
            min_y: camera.min_y,
            fov_y: camera.fov_y_degrees.to_radians(),
            interior: RoomBounds::new(
                Vec3::new(-half, camera.min_y, -half),
                Vec3::new(half, top, half),
            ),
            position: Vec3::ZERO,
            target: Vec3::ZERO,
        }
    }

    /// Volume the camera must stay inside.
    pub fn interior(&self) -> RoomBounds {
        self.interior
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            target: self.target,
        }
    }

    /// Orbit center: the player's shoulder.
    pub fn anchor(&self, player: Vec3) -> Vec3 {
        player + Vec3::new(0.0, self.shoulder_height, 0.0)
    }

    /// Where the orbit puts the camera before the room is considered.
    pub fn desired_position(&self, control: &CameraControlState, player: Vec3) -> Vec3 {
        let yaw = control.yaw;
        let pitch = control.pitch().clamp(control.pitch_min, control.pitch_max);
        let d = control.distance();
        let blend = control.focus_blend.clamp(0.0, 1.0);

        let polar = std::f32::consts::FRAC_PI_2 - pitch;
        let (sin_yaw, cos_yaw) = yaw.sin_cos();
        let mut offset = Vec3::new(
            d * polar.sin() * sin_yaw,
            d * polar.cos(),
            d * polar.sin() * cos_yaw,
        );
        let right = Vec3::new(cos_yaw, 0.0, -sin_yaw);
        offset += right * (self.shoulder_offset * blend);
        offset.y += self.shoulder_lift * blend;

        let mut desired = self.anchor(player) + offset;
        desired.y = desired.y.max(self.min_y);
        desired
    }

    /// Pull `desired` back toward `anchor` so it stays inside the room,
    /// leaving a gap of `hit_epsilon` of the ray length before the wall.
    pub fn resolve_inside_room(&self, anchor: Vec3, desired: Vec3) -> Vec3 {
        if self.interior.contains_point(desired) {
            return desired;
        }
        let dir = desired - anchor;
        let t = self.interior.exit_fraction(anchor, dir);
        let t = (t - self.hit_epsilon).clamp(0.0, 1.0);
        anchor + dir * t
    }

    /// Point the camera looks at: above the player, blended toward the
    /// focus point.
    pub fn look_target(&self, control: &CameraControlState, player: Vec3) -> Vec3 {
        let base = player + Vec3::new(0.0, self.look_height, 0.0);
        let focus = control.focus_point.unwrap_or(base);
        base.lerp(focus, control.focus_blend.clamp(0.0, 1.0))
    }

    /// The position the camera is easing toward this tick.
    pub fn resolved_position(&self, control: &CameraControlState, player: Vec3) -> Vec3 {
        let anchor = self.anchor(player);
        self.resolve_inside_room(anchor, self.desired_position(control, player))
    }

    /// Jump straight to the resolved position, as at session start.
    pub fn snap(&mut self, control: &CameraControlState, player: Vec3) -> CameraPose {
        self.position = self.resolved_position(control, player);
        self.target = self.look_target(control, player);
        self.pose()
    }

    /// Ease one tick toward the resolved position.
    pub fn update(&mut self, control: &CameraControlState, player: Vec3) -> CameraPose {
        let goal = self.resolved_position(control, player);
        self.position = self.position.lerp(goal, self.follow_rate);
        self.target = self.look_target(control, player);
        self.pose()
    }
}
