use glam::Vec3;
use whiteroom_config::ItemSpec;
use whiteroom_math::OrientedBox;

/// A collision box and the prop it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxCollider {
    pub item_id: String,
    pub obb: OrientedBox,
}

/// Static set of prop collision boxes, in authoring order.
///
/// Each box sits on the floor plane at the prop's (x, z), so only the
/// footprint matters for resolution.
#[derive(Clone, Debug, Default)]
pub struct OrientedBoxRegistry {
    colliders: Vec<BoxCollider>,
}

impl OrientedBoxRegistry {
    /// Build from the item list. Items without a hitbox are skipped.
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a ItemSpec>) -> Self {
        let colliders = items
            .into_iter()
            .filter_map(|spec| {
                let hitbox = spec.hitbox.as_ref()?;
                let [x, _, z] = spec.position;
                Some(BoxCollider {
                    item_id: spec.id.clone(),
                    obb: OrientedBox::from_yaw(
                        Vec3::new(x, 0.0, z),
                        Vec3::from_array(hitbox.half_extents),
                        spec.yaw,
                    ),
                })
            })
            .collect();
        Self { colliders }
    }

    pub fn from_boxes(boxes: impl IntoIterator<Item = OrientedBox>) -> Self {
        Self {
            colliders: boxes
                .into_iter()
                .enumerate()
                .map(|(i, obb)| BoxCollider {
                    item_id: format!("box{i}"),
                    obb,
                })
                .collect(),
        }
    }

    pub fn colliders(&self) -> &[BoxCollider] {
        &self.colliders
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Bottom-then-top corners of every box, for debug outlines.
    pub fn outlines(&self) -> Vec<[Vec3; 8]> {
        self.colliders
            .iter()
            .map(|c| {
                let h = c.obb.half_extents;
                let mut corners = [Vec3::ZERO; 8];
                for (i, corner) in corners.iter_mut().enumerate() {
                    let sx = if i & 1 == 0 { -h.x } else { h.x };
                    let sz = if i & 2 == 0 { -h.z } else { h.z };
                    let sy = if i & 4 == 0 { 0.0 } else { 2.0 * h.y };
                    *corner = c.obb.to_world(Vec3::new(sx, sy, sz));
                }
                corners
            })
            .collect()
    }
}
