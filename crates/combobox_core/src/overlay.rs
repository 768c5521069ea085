//! Open/closed lifecycle of the dropdown overlay.

use serde::{Deserialize, Serialize};

/// Why the overlay is being closed. Every reason goes through the same transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloseReason {
    /// The consuming application asked for it.
    Explicit,
    /// The overlay collaborator saw a pointer interaction outside the content.
    OutsideInteraction,
    /// Escape key inside the overlay.
    Escape,
    /// Auto-close after an item activation.
    AfterSelect,
    /// The trigger was activated while the overlay was already open.
    TriggerToggle,
}

/// Open/closed flag for the dropdown overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlayLifecycle {
    open: bool,
    last_close: Option<CloseReason>,
}

impl OverlayLifecycle {
    /// Whether the overlay is visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Reason for the most recent closed transition, if any.
    pub fn last_close(&self) -> Option<CloseReason> {
        self.last_close
    }

    /// Opens the overlay. Returns `true` only on a closed-to-open transition.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        true
    }

    /// Closes the overlay. Returns `true` only on an open-to-closed transition.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.last_close = Some(reason);
        true
    }
}
