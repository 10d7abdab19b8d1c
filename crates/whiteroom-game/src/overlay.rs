//! Which panel the UI shows on top of the room.

use tracing::debug;
use whiteroom_interact::{ActionEvent, ItemAction};

/// Panel currently open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    None,
    Contact,
    About,
    /// Screenshot gallery for the project id.
    Project(String),
}

/// Turns item actions into overlay transitions.
///
/// Opening any overlay locks the controls until [`close`](Self::close).
/// Links are queued for the host to open and do not lock.
#[derive(Clone, Debug, Default)]
pub struct OverlayRouter {
    current: Overlay,
    pending_urls: Vec<String>,
}

impl OverlayRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Overlay {
        &self.current
    }

    pub fn is_open(&self) -> bool {
        self.current != Overlay::None
    }

    /// Apply an action. Returns true if an overlay opened.
    pub fn route(&mut self, event: &ActionEvent) -> bool {
        let next = match &event.action {
            ItemAction::Url(url) => {
                debug!(item = %event.item_id, %url, "queue link");
                self.pending_urls.push(url.clone());
                return false;
            }
            ItemAction::Contact => Overlay::Contact,
            ItemAction::About => Overlay::About,
            ItemAction::Project(id) => Overlay::Project(id.clone()),
        };
        debug!(item = %event.item_id, from = ?self.current, to = ?next, "open overlay");
        self.current = next;
        true
    }

    /// Back to the room. Returns true if an overlay was open.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        debug!(from = ?self.current, "close overlay");
        self.current = Overlay::None;
        true
    }

    /// Links queued since the last call.
    pub fn take_pending_urls(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending_urls)
    }
}
