use glam::Vec3;
use whiteroom_config::RoomConfig;

/// Height of the ground shadow decal above the floor.
pub const SHADOW_DECAL_HEIGHT: f32 = 0.02;

/// Where the avatar stands and which way it faces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerTransform {
    pub position: Vec3,
    /// Radians about +Y; 0 faces +Z.
    pub facing: f32,
}

impl PlayerTransform {
    /// The session start transform.
    pub fn spawn(room: &RoomConfig) -> Self {
        Self {
            position: Vec3::from_array(room.spawn),
            facing: 0.0,
        }
    }

    /// Floor position of the blob shadow under the avatar.
    pub fn shadow_decal(&self) -> Vec3 {
        Vec3::new(self.position.x, SHADOW_DECAL_HEIGHT, self.position.z)
    }
}
