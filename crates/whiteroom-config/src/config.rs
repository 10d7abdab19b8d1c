//! Tuning sections with the scene's shipped defaults and RON persistence.

use std::f32::consts::PI;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::persist::{read_or_seed, read_ron, write_ron};

const CONFIG_FILE: &str = "config.ron";

/// Platform directory holding `config.ron` and `scene.ron`.
#[must_use]
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("whiteroom"))
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Room dimensions and player spawn.
    pub room: RoomConfig,
    /// Walking speeds.
    pub movement: MovementConfig,
    /// Follow camera and pointer look.
    pub camera: CameraConfig,
    /// Proximity, zoom/focus blend, picking and highlight.
    pub interaction: InteractionConfig,
    /// Player-vs-prop penetration resolution.
    pub collision: CollisionConfig,
    /// Collider overlay and log verbosity.
    pub debug: DebugConfig,
}

/// The square room the player walks in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RoomConfig {
    /// Side length of the square floor, in meters.
    pub size: f32,
    /// Floor-to-ceiling height.
    pub height: f32,
    /// Distance the player keeps from each wall.
    pub bound_margin: f32,
    /// Where the player appears at session start.
    pub spawn: [f32; 3],
}

/// Per-tick walking displacement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MovementConfig {
    pub walk_speed: f32,
    pub sprint_speed: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub pitch_min: f32,
    pub pitch_max: f32,
    pub distance_min: f32,
    pub distance_max: f32,
    /// Starting orbit distance, also the starting user-requested distance.
    pub initial_distance: f32,
    pub initial_yaw: f32,
    pub initial_pitch: f32,
    /// Height of the orbit anchor above the player origin.
    pub shoulder_height: f32,
    /// Sideways shift toward the camera's right at full focus blend.
    pub shoulder_offset: f32,
    /// Extra height at full focus blend.
    pub shoulder_lift: f32,
    /// Lowest allowed camera height.
    pub min_y: f32,
    /// Gap kept between the camera and each wall.
    pub wall_pad: f32,
    /// Gap kept below the ceiling.
    pub ceiling_gap: f32,
    /// Pull-back from a wall hit, as a fraction of the anchor-to-camera ray.
    pub hit_epsilon: f32,
    /// Per-tick lerp factor toward the resolved position.
    pub follow_rate: f32,
    /// Height above the player the camera looks at when not focused.
    pub look_height: f32,
    /// Radians of yaw/pitch per pixel of right-button drag.
    pub drag_sensitivity: f32,
    /// Meters of distance per pixel of wheel travel.
    pub wheel_sensitivity: f32,
    /// Vertical field of view used for pointer rays.
    pub fov_y_degrees: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InteractionConfig {
    /// Activation radius for items that do not declare one.
    pub default_radius: f32,
    /// How much closer the camera moves while an item is near.
    pub zoom_amount: f32,
    /// Height of the look-at point on a focused item.
    pub focus_height: f32,
    /// Per-tick blend toward the near/not-near camera targets.
    pub focus_blend_rate: f32,
    /// Pick sphere radius for items without a pick box.
    pub pick_radius: f32,
    /// Pick sphere center height above the item.
    pub pick_height: f32,
    pub highlight_near_scale: f32,
    pub highlight_hover_scale: f32,
    /// Fraction of the scale gap left after one second of easing.
    pub highlight_remaining: f32,
    pub bob_amplitude: f32,
    /// Bob angular speed in radians per second.
    pub bob_frequency: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CollisionConfig {
    /// Inward shrink of each box face before a point counts as inside.
    pub skin: f32,
    /// Largest correction applied per box per tick.
    pub max_push: f32,
    /// Sequential sweeps over the box list per tick.
    pub passes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Expose collision and pick boxes to the renderer.
    pub show_colliders: bool,
    /// Default tracing level when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            size: 56.0,
            height: 28.0,
            bound_margin: 1.0,
            spawn: [0.0, 1.0, 0.0],
        }
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_speed: 0.10,
            sprint_speed: 0.16,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            pitch_min: 0.05,
            pitch_max: 0.65,
            distance_min: 4.0,
            distance_max: 18.0,
            initial_distance: 10.0,
            initial_yaw: PI,
            initial_pitch: 0.2,
            shoulder_height: 1.6,
            shoulder_offset: 0.95,
            shoulder_lift: 0.08,
            min_y: 0.85,
            wall_pad: 0.55,
            ceiling_gap: 0.4,
            hit_epsilon: 0.12,
            follow_rate: 0.12,
            look_height: 1.2,
            drag_sensitivity: 0.005,
            wheel_sensitivity: 0.01,
            fov_y_degrees: 55.0,
        }
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            default_radius: 3.4,
            zoom_amount: 2.4,
            focus_height: 0.8,
            focus_blend_rate: 0.08,
            pick_radius: 1.3,
            pick_height: 1.3,
            highlight_near_scale: 1.08,
            highlight_hover_scale: 1.04,
            highlight_remaining: 0.001,
            bob_amplitude: 0.05,
            bob_frequency: 3.0,
        }
    }
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            skin: 0.10,
            max_push: 0.35,
            passes: 1,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_colliders: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Read `config.ron` from `config_dir`, writing the defaults there first
    /// if the file does not exist yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        read_or_seed(config_dir, CONFIG_FILE)
    }

    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        write_ron(self, config_dir, CONFIG_FILE)
    }

    /// Re-read `config.ron`. `None` when the file matches `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let fresh: Config = read_ron(config_dir, CONFIG_FILE)?;
        if fresh == *self {
            return Ok(None);
        }
        log::info!("config.ron changed on disk");
        Ok(Some(fresh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_room_layout() {
        let config = Config::default();
        assert_eq!(config.room.size, 56.0);
        assert_eq!(config.room.height, 28.0);
        assert_eq!(config.room.spawn, [0.0, 1.0, 0.0]);
        assert_eq!(config.camera.pitch_min, 0.05);
        assert_eq!(config.camera.pitch_max, 0.65);
        assert_eq!(config.interaction.default_radius, 3.4);
        assert_eq!(config.collision.max_push, 0.35);
        assert_eq!(config.collision.passes, 1);
    }

    #[test]
    fn test_saved_file_is_readable_ron() {
        let dir = tempfile::tempdir().unwrap();
        Config::default().save(dir.path()).unwrap();
        let text = std::fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert!(text.contains("walk_speed: 0.1"));
        assert!(text.contains("log_level: \"info\""));
    }

    #[test]
    fn test_missing_section_uses_default() {
        let config: Config = ron::from_str("(room: (size: 40.0))").unwrap();
        assert_eq!(config.room.size, 40.0);
        assert_eq!(config.room.height, 28.0);
        assert_eq!(config.camera, CameraConfig::default());
    }

    #[test]
    fn test_unknown_section_tolerated() {
        let parsed: Config = ron::from_str("(audio: (volume: 0.5))").unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_saved_tuning_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let mut tuned = Config::default();
        tuned.movement.sprint_speed = 0.2;
        tuned.debug.log_level = "trace".to_string();

        tuned.save(dir.path()).unwrap();
        assert_eq!(Config::load_or_create(dir.path()).unwrap(), tuned);
    }

    #[test]
    fn test_reload_picks_up_edit() {
        let dir = tempfile::tempdir().unwrap();
        let running = Config::default();
        running.save(dir.path()).unwrap();

        let mut edited = running.clone();
        edited.camera.follow_rate = 0.2;
        edited.save(dir.path()).unwrap();

        let fresh = running.reload(dir.path()).unwrap().unwrap();
        assert_eq!(fresh.camera.follow_rate, 0.2);
    }

    #[test]
    fn test_reload_unchanged_file() {
        let dir = tempfile::tempdir().unwrap();
        let running = Config::default();
        running.save(dir.path()).unwrap();
        assert!(running.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_ron_produces_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{{not valid}}").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_reload_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::default().reload(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_default_config_dir_is_namespaced() {
        if let Some(dir) = default_config_dir() {
            assert!(dir.ends_with("whiteroom"));
        }
    }
}
