use glam::Vec3;
use whiteroom_config::RoomConfig;
use whiteroom_math::RoomBounds;

/// The square the player may stand in: the room floor inset by
/// `bound_margin` on every side. Height spans floor to ceiling.
pub fn walkable_bounds(room: &RoomConfig) -> RoomBounds {
    let half = (room.size * 0.5 - room.bound_margin).max(0.0);
    RoomBounds::new(Vec3::new(-half, 0.0, -half), Vec3::new(half, room.height, half))
}

/// Clamp the player's x and z into `bounds`. Returns true if it moved.
pub fn clamp_to_room(position: &mut Vec3, bounds: &RoomBounds) -> bool {
    let clamped = bounds.clamp_xz(*position);
    let moved = clamped != *position;
    *position = clamped;
    moved
}
