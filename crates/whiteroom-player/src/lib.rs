//! The avatar and the camera that follows it: per-tick movement, pointer
//! look and wheel zoom, and the room-bounded shoulder camera.

pub mod camera_control;
pub mod follow_camera;
pub mod movement;
pub mod pose;
pub mod transform;

pub use camera_control::CameraControlState;
pub use follow_camera::FollowCamera;
pub use movement::{AnimationState, MoveInput, MovementIntegrator};
pub use pose::CameraPose;
pub use transform::PlayerTransform;
