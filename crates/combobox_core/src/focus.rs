//! Keyboard focus cursor over the visible item list.

use serde::{Deserialize, Serialize};

/// Keyboard movement requests for the focus cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusMove {
    /// Next visible item, wrapping to the first.
    Next,
    /// Previous visible item, wrapping to the last.
    Previous,
    /// First visible item.
    First,
    /// Last visible item.
    Last,
}

impl FocusMove {
    /// Maps a DOM `KeyboardEvent.key` value to a movement.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Next),
            "ArrowUp" => Some(Self::Previous),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}

/// Highlighted position in the visible (post-filter) item list, or no focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FocusCursor {
    index: Option<usize>,
}

impl FocusCursor {
    /// Focused index, `None` for the sentinel.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Whether `index` is the focused position.
    pub fn is_focused(&self, index: usize) -> bool {
        self.index == Some(index)
    }

    /// Returns to the sentinel.
    pub fn reset(&mut self) -> bool {
        self.index.take().is_some()
    }

    /// Focuses `index` when it addresses one of `len` visible items.
    pub fn set(&mut self, index: usize, len: usize) -> bool {
        if index >= len || self.index == Some(index) {
            return false;
        }
        self.index = Some(index);
        true
    }

    /// Applies a keyboard movement over `len` visible items.
    pub fn apply(&mut self, movement: FocusMove, len: usize) -> bool {
        if len == 0 {
            return self.reset();
        }
        let next = match (movement, self.index) {
            (FocusMove::First, _) | (FocusMove::Next, None) => 0,
            (FocusMove::Last, _) | (FocusMove::Previous, None) => len - 1,
            (FocusMove::Next, Some(current)) => step(current, 1, len),
            (FocusMove::Previous, Some(current)) => step(current, -1, len),
        };
        let changed = self.index != Some(next);
        self.index = Some(next);
        changed
    }

    /// Pulls the cursor back inside a visible list of `len` items.
    ///
    /// An empty list resets to the sentinel; an index past the end lands on the last item.
    pub fn clamp(&mut self, len: usize) -> bool {
        match self.index {
            Some(_) if len == 0 => self.reset(),
            Some(current) if current >= len => {
                self.index = Some(len - 1);
                true
            }
            _ => false,
        }
    }
}

fn step(current: usize, delta: i64, len: usize) -> usize {
    let len = len as i64;
    (current.min(len as usize - 1) as i64 + delta).rem_euclid(len) as usize
}
