//! The authored list of interactive props, persisted as `scene.ron`.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::persist::{read_or_seed, write_ron};

const SCENE_FILE: &str = "scene.ron";

/// What happens when a prop is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemAction {
    /// Open an external link in a new window.
    Url(String),
    /// Open the contact form.
    Contact,
    /// Open the about panel.
    About,
    /// Open the gallery for the given project id.
    Project(String),
}

/// Solid footprint of a prop, plus the box used for pointer picking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    /// Collision half-extents in the prop's local frame.
    pub half_extents: [f32; 3],
    /// Height of the pick box center above the prop origin.
    #[serde(default)]
    pub y_offset: f32,
    /// Pick box half-extents when they differ from the collision ones.
    #[serde(default)]
    pub pick_half_extents: Option<[f32; 3]>,
}

impl Hitbox {
    /// Half-extents of the pick box.
    #[must_use]
    pub fn pick_extents(&self) -> [f32; 3] {
        self.pick_half_extents.unwrap_or(self.half_extents)
    }
}

/// One interactive prop as authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub id: String,
    /// Floating caption above the prop.
    #[serde(default)]
    pub label: String,
    /// Prompt shown while the prop is near.
    #[serde(default)]
    pub ui_label: String,
    pub position: [f32; 3],
    /// Rotation about +Y, radians.
    #[serde(default)]
    pub yaw: f32,
    /// Activation radius; the interaction default applies when absent.
    #[serde(default)]
    pub radius: Option<f32>,
    /// Props without a hitbox take part in proximity only.
    #[serde(default)]
    pub hitbox: Option<Hitbox>,
    pub action: ItemAction,
}

/// All props in the room, in authoring order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneTable {
    pub items: Vec<ItemSpec>,
}

fn item(
    id: &str,
    label: &str,
    ui_label: &str,
    position: [f32; 3],
    yaw: f32,
    action: ItemAction,
) -> ItemSpec {
    ItemSpec {
        id: id.to_string(),
        label: label.to_string(),
        ui_label: ui_label.to_string(),
        position,
        yaw,
        radius: None,
        hitbox: None,
        action,
    }
}

fn with_box(
    mut spec: ItemSpec,
    radius: f32,
    half_extents: [f32; 3],
    pick: [f32; 3],
    y_offset: f32,
) -> ItemSpec {
    spec.radius = Some(radius);
    spec.hitbox = Some(Hitbox {
        half_extents,
        y_offset,
        pick_half_extents: Some(pick),
    });
    spec
}

impl Default for SceneTable {
    fn default() -> Self {
        let items = vec![
            item(
                "linkedin",
                "LinkedIn",
                "LinkedIn Profile",
                [25.0, 0.0, -20.0],
                -0.8,
                ItemAction::Url("https://www.linkedin.com/in/orkunefeözdemir67".to_string()),
            ),
            item(
                "github",
                "GitHub",
                "GitHub Repository",
                [19.0, 0.0, -26.0],
                -0.8,
                ItemAction::Url("https://github.com/orkrun".to_string()),
            ),
            item(
                "gmail",
                "Contact Me",
                "Get in Touch",
                [23.0, 0.0, -24.0],
                -0.8,
                ItemAction::Contact,
            ),
            with_box(
                item(
                    "aboutTable",
                    "About",
                    "About & Experience",
                    [0.0, 0.0, 10.0],
                    1.6,
                    ItemAction::About,
                ),
                7.5,
                [3.6, 2.0, 2.4],
                [5.0, 2.0, 3.0],
                1.5,
            ),
            with_box(
                item(
                    "carProject",
                    "My Game",
                    "Open Project",
                    [-19.0, 0.0, -19.0],
                    0.8,
                    ItemAction::Project("car-game".to_string()),
                ),
                8.5,
                [5.0, 2.0, 10.0],
                [4.0, 1.5, 10.0],
                1.2,
            ),
            with_box(
                item(
                    "serverProject",
                    "Servers",
                    "Open Project",
                    [-1.0, 0.0, -24.0],
                    0.0,
                    ItemAction::Project("server-project".to_string()),
                ),
                7.5,
                [2.4, 3.0, 2.0],
                [3.5, 2.5, 3.0],
                2.2,
            ),
            with_box(
                item(
                    "chickProject",
                    "Chick Game",
                    "Open Project",
                    [-23.0, 0.0, -5.0],
                    1.7,
                    ItemAction::Project("chick-game".to_string()),
                ),
                7.0,
                [2.6, 2.6, 2.6],
                [3.25, 2.0, 3.25],
                1.6,
            ),
        ];
        Self { items }
    }
}

fn positive_finite(v: &[f32]) -> bool {
    v.iter().all(|x| x.is_finite() && *x > 0.0)
}

impl SceneTable {
    /// Reject layouts the simulation cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for spec in &self.items {
            if spec.id.is_empty() {
                return Err(ConfigError::InvalidScene("item with empty id".to_string()));
            }
            if !seen.insert(spec.id.as_str()) {
                return Err(ConfigError::InvalidScene(format!("duplicate item id `{}`", spec.id)));
            }
            if !spec.position.iter().all(|x| x.is_finite()) || !spec.yaw.is_finite() {
                return Err(ConfigError::InvalidScene(format!(
                    "item `{}` has a non-finite placement",
                    spec.id
                )));
            }
            if let Some(r) = spec.radius
                && !positive_finite(&[r])
            {
                return Err(ConfigError::InvalidScene(format!(
                    "item `{}` has radius {r}",
                    spec.id
                )));
            }
            if let Some(hb) = &spec.hitbox
                && (!positive_finite(&hb.half_extents)
                    || !positive_finite(&hb.pick_extents())
                    || !hb.y_offset.is_finite())
            {
                return Err(ConfigError::InvalidScene(format!(
                    "item `{}` has a degenerate hitbox",
                    spec.id
                )));
            }
        }
        Ok(())
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ItemSpec> {
        self.items.iter().find(|s| s.id == id)
    }

    /// Read and validate `scene.ron`, writing the default layout there
    /// first if the file does not exist yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let scene: SceneTable = read_or_seed(config_dir, SCENE_FILE)?;
        scene.validate()?;
        log::debug!("scene has {} items", scene.items.len());
        Ok(scene)
    }

    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        write_ron(self, config_dir, SCENE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_is_valid() {
        let scene = SceneTable::default();
        assert_eq!(scene.items.len(), 7);
        scene.validate().unwrap();
    }

    #[test]
    fn test_default_scene_hitboxes() {
        let scene = SceneTable::default();
        let boxed: Vec<&str> = scene
            .items
            .iter()
            .filter(|s| s.hitbox.is_some())
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(boxed, ["aboutTable", "carProject", "serverProject", "chickProject"]);
        let gmail = scene.get("gmail").unwrap();
        assert_eq!(gmail.action, ItemAction::Contact);
        assert!(gmail.radius.is_none());
    }

    #[test]
    fn test_pick_extents_fall_back_to_collision() {
        let hb = Hitbox {
            half_extents: [1.0, 2.0, 3.0],
            y_offset: 0.5,
            pick_half_extents: None,
        };
        assert_eq!(hb.pick_extents(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut scene = SceneTable::default();
        scene.items[1].id = "linkedin".to_string();
        let err = scene.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidScene(ref m) if m.contains("linkedin")));
    }

    #[test]
    fn test_non_positive_radius_rejected() {
        let mut scene = SceneTable::default();
        scene.items[0].radius = Some(0.0);
        assert!(scene.validate().is_err());
    }

    #[test]
    fn test_degenerate_hitbox_rejected() {
        let mut scene = SceneTable::default();
        if let Some(hb) = scene.items[3].hitbox.as_mut() {
            hb.half_extents[2] = -1.0;
        }
        assert!(scene.validate().is_err());
    }

    #[test]
    fn test_minimal_item_parses_with_defaults() {
        let text = r#"(items: [(id: "desk", position: (1.0, 0.0, 2.0), action: About)])"#;
        let scene: SceneTable = ron::from_str(text).unwrap();
        let desk = &scene.items[0];
        assert_eq!(desk.yaw, 0.0);
        assert!(desk.radius.is_none());
        assert!(desk.hitbox.is_none());
        scene.validate().unwrap();
    }

    #[test]
    fn test_load_or_create_round_trips_default() {
        let dir = tempfile::tempdir().unwrap();
        let created = SceneTable::load_or_create(dir.path()).unwrap();
        let loaded = SceneTable::load_or_create(dir.path()).unwrap();
        assert_eq!(created, loaded);
        assert_eq!(loaded, SceneTable::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let text = r#"(items: [
            (id: "a", position: (0.0, 0.0, 0.0), action: Contact),
            (id: "a", position: (1.0, 0.0, 0.0), action: About),
        ])"#;
        std::fs::write(dir.path().join(SCENE_FILE), text).unwrap();
        let err = SceneTable::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidScene(_)));
    }
}
