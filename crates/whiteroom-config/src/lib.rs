//! Tuning and scene configuration for the white room.
//!
//! Settings persist to disk as RON files. Every section is `#[serde(default)]`
//! so older or partial files keep loading as new fields appear.

mod config;
mod error;
mod persist;
mod scene;

pub use config::{
    CameraConfig, CollisionConfig, Config, DebugConfig, InteractionConfig, MovementConfig,
    RoomConfig, default_config_dir,
};
pub use error::ConfigError;
pub use scene::{Hitbox, ItemAction, ItemSpec, SceneTable};
