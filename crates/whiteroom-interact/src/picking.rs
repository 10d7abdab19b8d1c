use glam::Vec3;
use whiteroom_math::{ray_obb, ray_sphere};

use crate::InteractiveItem;

/// Nearest item under a pointer ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub index: usize,
    /// Distance along the ray.
    pub distance: f32,
}

/// Cast a ray against every item and return the closest hit.
///
/// Items with a hitbox are tested against their raised pick box; items
/// without one use a sphere of `fallback_radius` centered `fallback_height`
/// above the item origin. Ties keep the earlier item.
pub fn pick(
    items: &[InteractiveItem],
    origin: Vec3,
    dir: Vec3,
    fallback_radius: f32,
    fallback_height: f32,
) -> Option<PickHit> {
    let dir = dir.try_normalize()?;
    if !origin.is_finite() {
        return None;
    }
    let mut best: Option<PickHit> = None;
    for (index, item) in items.iter().enumerate() {
        let hit = match item.pick_box() {
            Some(obb) => ray_obb(origin, dir, &obb),
            None => ray_sphere(
                origin,
                dir,
                item.position + Vec3::new(0.0, fallback_height, 0.0),
                fallback_radius,
            ),
        };
        if let Some(distance) = hit
            && best.is_none_or(|b| distance < b.distance)
        {
            best = Some(PickHit { index, distance });
        }
    }
    best
}
