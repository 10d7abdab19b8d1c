use glam::Vec3;
use whiteroom_config::{Hitbox, ItemAction, ItemSpec};
use whiteroom_math::OrientedBox;

/// A prop the player can walk up to or click.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractiveItem {
    pub id: String,
    pub label: String,
    pub ui_label: String,
    pub position: Vec3,
    pub yaw: f32,
    /// Activation radius override.
    pub radius: Option<f32>,
    pub hitbox: Option<Hitbox>,
    pub action: ItemAction,
}

impl InteractiveItem {
    pub fn from_spec(spec: &ItemSpec) -> Self {
        Self {
            id: spec.id.clone(),
            label: spec.label.clone(),
            ui_label: spec.ui_label.clone(),
            position: Vec3::from_array(spec.position),
            yaw: spec.yaw,
            radius: spec.radius,
            hitbox: spec.hitbox.clone(),
            action: spec.action.clone(),
        }
    }

    /// Activation radius, falling back to `default`.
    pub fn radius_or(&self, default: f32) -> f32 {
        self.radius.unwrap_or(default)
    }

    /// Distance on the floor plane.
    pub fn planar_distance(&self, point: Vec3) -> f32 {
        let dx = point.x - self.position.x;
        let dz = point.z - self.position.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Pick box raised to the hitbox offset, if the item has one.
    pub fn pick_box(&self) -> Option<OrientedBox> {
        let hb = self.hitbox.as_ref()?;
        Some(OrientedBox::from_yaw(
            self.position + Vec3::new(0.0, hb.y_offset, 0.0),
            Vec3::from_array(hb.pick_extents()),
            self.yaw,
        ))
    }
}

/// How an action was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Interact key pressed while near.
    Interact,
    /// Left click on the prop.
    Click,
}

/// An item action raised this tick.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionEvent {
    pub item_id: String,
    pub action: ItemAction,
    pub trigger: Trigger,
}

impl ActionEvent {
    pub fn new(item: &InteractiveItem, trigger: Trigger) -> Self {
        Self {
            item_id: item.id.clone(),
            action: item.action.clone(),
            trigger,
        }
    }
}
