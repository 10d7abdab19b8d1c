use glam::Vec3;
use tracing::trace;
use whiteroom_config::CollisionConfig;
use whiteroom_math::OrientedBox;

use crate::OrientedBoxRegistry;

/// Push `position` out of one box footprint along the box's local axis of
/// least penetration.
///
/// Returns the corrected position, or `None` when the point is not inside
/// the skin-shrunk footprint. The push is clamped to `±max_push`, so a deep
/// penetration can take several ticks to clear. Only x and z change.
pub fn push_out(obb: &OrientedBox, position: Vec3, skin: f32, max_push: f32) -> Option<Vec3> {
    if !obb.footprint_contains(position, skin) {
        return None;
    }
    let local = obb.to_local(position);
    let hx = obb.half_extents.x - skin;
    let hz = obb.half_extents.z - skin;

    // (-x face, +x face, -z face, +z face); strict `<` keeps the earliest on ties.
    let candidates = [
        (-hx - local.x, Vec3::X),
        (hx - local.x, Vec3::X),
        (-hz - local.z, Vec3::Z),
        (hz - local.z, Vec3::Z),
    ];
    let mut best = candidates[0];
    for c in &candidates[1..] {
        if c.0.abs() < best.0.abs() {
            best = *c;
        }
    }
    let (push, axis) = best;
    let push = push.clamp(-max_push, max_push);

    let corrected = obb.to_world(local + axis * push);
    Some(Vec3::new(corrected.x, position.y, corrected.z))
}

/// Sequential per-box push-out against an [`OrientedBoxRegistry`].
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionResolver {
    pub skin: f32,
    pub max_push: f32,
    /// Maximum sweeps over the box list per call. A sweep runs only if the
    /// previous one moved the player.
    pub passes: u32,
}

impl Default for CollisionResolver {
    fn default() -> Self {
        Self::from_config(&CollisionConfig::default())
    }
}

impl CollisionResolver {
    pub fn from_config(config: &CollisionConfig) -> Self {
        Self {
            skin: config.skin,
            max_push: config.max_push,
            passes: config.passes.max(1),
        }
    }

    /// Resolve `position` against every box in order. Each box sees the
    /// position as corrected by the boxes before it.
    ///
    /// Returns how many corrections were applied.
    pub fn resolve(&self, registry: &OrientedBoxRegistry, position: &mut Vec3) -> usize {
        let mut corrections = 0;
        for _ in 0..self.passes.max(1) {
            let mut moved = false;
            for collider in registry.colliders() {
                if let Some(corrected) = push_out(&collider.obb, *position, self.skin, self.max_push)
                {
                    trace!(
                        item = %collider.item_id,
                        dx = corrected.x - position.x,
                        dz = corrected.z - position.z,
                        "pushed player out of prop"
                    );
                    *position = corrected;
                    corrections += 1;
                    moved = true;
                }
            }
            if !moved {
                break;
            }
        }
        corrections
    }
}
