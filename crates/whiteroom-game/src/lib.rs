//! The white room session: host events in, one fixed-rate pipeline per tick,
//! a [`FrameOutput`] for the renderer and UI out.
//!
//! ```no_run
//! use whiteroom_game::Session;
//!
//! let dir = whiteroom_config::default_config_dir().unwrap_or_else(|| ".".into());
//! let mut session = Session::launch(&dir).expect("load scene");
//! session.set_viewport(1280.0, 720.0);
//! let frame = session.advance(1.0 / 60.0);
//! println!("camera at {}", frame.camera.position);
//! ```

pub mod frame_clock;
pub mod overlay;
pub mod session;

pub use frame_clock::{FIXED_DT, FrameClock, MAX_FRAME_TIME};
pub use overlay::{Overlay, OverlayRouter};
pub use session::{FrameOutput, INPUT_FILE, Session};
