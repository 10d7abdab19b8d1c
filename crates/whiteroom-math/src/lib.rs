//! f32 room volumes, yaw-oriented boxes, ray queries, and per-tick smoothing for the white room.

mod obb;
mod ray;
mod room_bounds;
mod smoothing;

pub use obb::OrientedBox;
pub use ray::{ray_obb, ray_sphere};
pub use room_bounds::{AXIS_EPSILON, RoomBounds};
pub use smoothing::{decay_alpha, lerp};
