//! Interactive props: which one the player is near, which one the pointer
//! is over, and the action events they raise.

mod highlight;
mod item;
mod picking;
mod proximity;

pub use highlight::{HighlightState, PropHighlights};
pub use item::{ActionEvent, InteractiveItem, Trigger};
pub use picking::{PickHit, pick};
pub use proximity::{ProximityTracker, ProximityUpdate};
pub use whiteroom_config::ItemAction;
