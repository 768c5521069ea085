//! Registered output slots for out-of-tree rendering.
//!
//! A render target (the trigger surface) owns an [`OutputSlot`] and hands out weak
//! [`SlotHandle`]s. Writers never keep the target alive; once the owner drops its slot, writes
//! become no-ops.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Owning side of a slot, held by the render target.
pub struct OutputSlot<T> {
    cell: Rc<RefCell<Option<T>>>,
}

/// Non-owning writer registered with a producer.
pub struct SlotHandle<T> {
    cell: Weak<RefCell<Option<T>>>,
}

impl<T> OutputSlot<T> {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self {
            cell: Rc::new(RefCell::new(None)),
        }
    }

    /// Weak writer for this slot.
    pub fn handle(&self) -> SlotHandle<T> {
        SlotHandle {
            cell: Rc::downgrade(&self.cell),
        }
    }

}

impl<T: Clone> OutputSlot<T> {
    /// Clone of the last written value.
    pub fn current(&self) -> Option<T> {
        self.cell.borrow().clone()
    }
}

impl<T> Default for OutputSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SlotHandle<T> {
    /// Writes `value` into the slot. Returns `false` when the owner is gone.
    pub fn write(&self, value: T) -> bool {
        match self.cell.upgrade() {
            Some(cell) => {
                *cell.borrow_mut() = Some(value);
                true
            }
            None => false,
        }
    }

    /// Whether the owning slot is still alive.
    pub fn is_attached(&self) -> bool {
        self.cell.strong_count() > 0
    }
}

impl<T> Clone for SlotHandle<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T> fmt::Debug for OutputSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputSlot")
            .field("filled", &self.cell.borrow().is_some())
            .finish()
    }
}

impl<T> fmt::Debug for SlotHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotHandle")
            .field("attached", &self.is_attached())
            .finish()
    }
}
