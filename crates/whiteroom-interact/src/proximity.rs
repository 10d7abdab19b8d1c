//! Nearest-prop detection, the interact edge, and the camera zoom/focus it
//! drives.

use glam::Vec3;
use tracing::debug;
use whiteroom_config::InteractionConfig;
use whiteroom_math::lerp;
use whiteroom_player::CameraControlState;

use crate::{ActionEvent, InteractiveItem, Trigger};

/// Result of one proximity tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProximityUpdate {
    /// Index of the near item, if any.
    pub near: Option<usize>,
    /// True on the tick the near item changed (including to or from none).
    pub changed: bool,
    /// Raised on a fresh interact press while an item is near and controls
    /// are unlocked.
    pub event: Option<ActionEvent>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProximityTracker {
    pub default_radius: f32,
    pub zoom_amount: f32,
    pub focus_height: f32,
    /// Per-tick blend toward the camera targets.
    pub blend_rate: f32,
    near: Option<usize>,
    interact_was_held: bool,
}

impl Default for ProximityTracker {
    fn default() -> Self {
        Self::new(&InteractionConfig::default())
    }
}

impl ProximityTracker {
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            default_radius: config.default_radius,
            zoom_amount: config.zoom_amount,
            focus_height: config.focus_height,
            blend_rate: config.focus_blend_rate.clamp(0.0, 1.0),
            near: None,
            interact_was_held: false,
        }
    }

    /// Index of the item nearest the player relative to its radius, and
    /// whether it is within that radius.
    ///
    /// Score is planar distance over radius; the lowest score wins and the
    /// earlier item wins a tie. The radius test is inclusive.
    pub fn nearest(&self, items: &[InteractiveItem], player: Vec3) -> Option<usize> {
        let mut best: Option<(usize, f32, f32, f32)> = None;
        for (i, item) in items.iter().enumerate() {
            let d = item.planar_distance(player);
            let r = item.radius_or(self.default_radius);
            let score = d / r.max(0.001);
            if best.is_none_or(|(_, s, _, _)| score < s) {
                best = Some((i, score, d, r));
            }
        }
        best.and_then(|(i, _, d, r)| (d <= r).then_some(i))
    }

    pub fn near(&self) -> Option<usize> {
        self.near
    }

    /// Run one tick.
    ///
    /// While `locked`, the near item and camera blend are still tracked but
    /// no action fires. The interact key state is recorded either way, so a
    /// key held through an unlock needs a fresh press.
    pub fn update(
        &mut self,
        items: &[InteractiveItem],
        player: Vec3,
        interact_held: bool,
        locked: bool,
        camera: &mut CameraControlState,
    ) -> ProximityUpdate {
        let near = self.nearest(items, player);
        let changed = near != self.near;
        if changed {
            debug!(
                from = ?self.near.map(|i| items[i].id.as_str()),
                to = ?near.map(|i| items[i].id.as_str()),
                "near item changed"
            );
            self.near = near;
        }

        let rising = interact_held && !self.interact_was_held;
        self.interact_was_held = interact_held;
        let event = match near {
            Some(i) if rising && !locked => {
                debug!(item = %items[i].id, "interact");
                Some(ActionEvent::new(&items[i], Trigger::Interact))
            }
            _ => None,
        };

        self.drive_camera(near.map(|i| &items[i]), camera);

        ProximityUpdate {
            near,
            changed,
            event,
        }
    }

    fn drive_camera(&self, near: Option<&InteractiveItem>, camera: &mut CameraControlState) {
        let user = camera.user_distance();
        let (target_distance, target_blend) = match near {
            Some(_) => (user - self.zoom_amount, 1.0),
            None => (user, 0.0),
        };
        let target_distance = target_distance.clamp(camera.distance_min, camera.distance_max);
        camera.set_distance(lerp(camera.distance(), target_distance, self.blend_rate));
        camera.focus_blend = lerp(camera.focus_blend, target_blend, self.blend_rate);
        camera.focus_point =
            near.map(|item| Vec3::new(item.position.x, self.focus_height, item.position.z));
    }
}
