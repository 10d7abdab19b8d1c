use glam::{Quat, Vec3};

/// A box rotated about the vertical axis only.
///
/// Collision boxes sit on the floor plane (`center.y == 0`); pick boxes are
/// raised to the prop's hitbox offset. The rotation is always a pure yaw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedBox {
    /// World-space center.
    pub center: Vec3,
    /// Half size along the box-local x, y, z axes.
    pub half_extents: Vec3,
    /// Yaw rotation from box-local to world space.
    pub rotation: Quat,
}

impl OrientedBox {
    /// Create a box centered at `center`, rotated by `yaw` radians about +Y.
    pub fn from_yaw(center: Vec3, half_extents: Vec3, yaw: f32) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
            rotation: Quat::from_rotation_y(yaw),
        }
    }

    /// Transform a world-space point into box-local space.
    pub fn to_local(&self, world: Vec3) -> Vec3 {
        self.rotation.inverse() * (world - self.center)
    }

    /// Transform a box-local point back into world space.
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.rotation * local + self.center
    }

    /// Transform a world-space direction into box-local space.
    pub fn dir_to_local(&self, dir: Vec3) -> Vec3 {
        self.rotation.inverse() * dir
    }

    /// Returns true if `world` lies strictly inside the box footprint on both
    /// local x and z, after shrinking each face inward by `skin`.
    ///
    /// Height is ignored: the player is always treated as standing on the floor.
    pub fn footprint_contains(&self, world: Vec3, skin: f32) -> bool {
        let local = self.to_local(world);
        let hx = self.half_extents.x - skin;
        let hz = self.half_extents.z - skin;
        local.x > -hx && local.x < hx && local.z > -hz && local.z < hz
    }
}
