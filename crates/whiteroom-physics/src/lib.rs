//! Player-vs-prop collision: a static registry of yaw-oriented boxes, a
//! minimum-translation push-out resolver, and the walkable-floor clamp.
//!
//! There is no rigid-body simulation. The player is a point on the floor and
//! each prop footprint is a rectangle that point is pushed out of.

mod registry;
mod resolver;
mod room;

pub use registry::{BoxCollider, OrientedBoxRegistry};
pub use resolver::{CollisionResolver, push_out};
pub use room::{clamp_to_room, walkable_bounds};
