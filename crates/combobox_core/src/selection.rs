//! Selection store with explicit controlled and uncontrolled variants.
//!
//! The variant is fixed at construction. An uncontrolled store owns and mutates its sequence; a
//! controlled store only proposes the next sequence and waits for the owner to [`sync`] it back.
//!
//! [`sync`]: SelectionStore::sync

use serde::{Deserialize, Serialize};

use crate::error::ComboboxError;
use crate::model::SelectMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Canonical ordered set of selected keys.
pub enum SelectionStore {
    /// The widget is the sole owner and mutator of the value.
    Uncontrolled {
        /// Single or multiple selection.
        mode: SelectMode,
        /// Selected keys in insertion order.
        value: Vec<String>,
    },
    /// The consumer owns the value; the widget treats it as read-only input.
    Controlled {
        /// Single or multiple selection.
        mode: SelectMode,
        /// Last value fed in by the owner.
        value: Vec<String>,
    },
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::Uncontrolled {
            mode: SelectMode::Multiple,
            value: Vec::new(),
        }
    }
}

impl SelectionStore {
    /// Creates a store that owns its value, seeded from `initial`.
    ///
    /// Duplicate keys are dropped and a single-select store keeps only the first key.
    pub fn uncontrolled<I, S>(mode: SelectMode, initial: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Uncontrolled {
            mode,
            value: normalize(mode, initial),
        }
    }

    /// Creates a store whose value is owned by the consumer.
    pub fn controlled<I, S>(mode: SelectMode, value: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Controlled {
            mode,
            value: normalize(mode, value),
        }
    }

    /// Strict form of [`SelectionStore::uncontrolled`].
    ///
    /// # Errors
    ///
    /// Returns [`ComboboxError::TooManySingleValues`] when a single-select store is seeded with
    /// more than one key.
    pub fn try_uncontrolled<I, S>(mode: SelectMode, initial: I) -> Result<Self, ComboboxError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let initial = check_single(mode, initial)?;
        Ok(Self::uncontrolled(mode, initial))
    }

    /// Strict form of [`SelectionStore::controlled`].
    ///
    /// # Errors
    ///
    /// Returns [`ComboboxError::TooManySingleValues`] when a single-select store is given more
    /// than one key.
    pub fn try_controlled<I, S>(mode: SelectMode, value: I) -> Result<Self, ComboboxError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let value = check_single(mode, value)?;
        Ok(Self::controlled(mode, value))
    }

    /// Single or multiple selection.
    pub fn mode(&self) -> SelectMode {
        match self {
            Self::Uncontrolled { mode, .. } | Self::Controlled { mode, .. } => *mode,
        }
    }

    /// Whether the consumer owns the value.
    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled { .. })
    }

    /// Currently displayed selection.
    pub fn value(&self) -> &[String] {
        match self {
            Self::Uncontrolled { value, .. } | Self::Controlled { value, .. } => value,
        }
    }

    /// Number of selected keys.
    pub fn len(&self) -> usize {
        self.value().len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.value().is_empty()
    }

    /// Membership test.
    pub fn contains(&self, key: &str) -> bool {
        self.value().iter().any(|selected| selected == key)
    }

    /// Removes `key` if present, otherwise adds it, and returns the resulting value.
    ///
    /// Uncontrolled stores apply the result. Controlled stores leave their value untouched; the
    /// returned sequence is only a proposal for the owner.
    pub fn toggle(&mut self, key: &str) -> Vec<String> {
        let next = toggled(self.mode(), self.value(), key);
        if let Self::Uncontrolled { value, .. } = self {
            *value = next.clone();
        }
        next
    }

    /// Empties the selection, returning the empty proposal or `None` when already empty.
    pub fn clear(&mut self) -> Option<Vec<String>> {
        if self.is_empty() {
            return None;
        }
        if let Self::Uncontrolled { value, .. } = self {
            value.clear();
        }
        Some(Vec::new())
    }

    /// Accepts a value fed back by the owner of a controlled store.
    ///
    /// Returns `true` when the displayed value changed. Uncontrolled stores ignore the call so an
    /// owner that starts supplying a value mid-life cannot flip the store's mode.
    pub fn sync<I, S>(&mut self, next: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self {
            Self::Controlled { mode, value } => {
                let next = normalize(*mode, next);
                if *value == next {
                    false
                } else {
                    *value = next;
                    true
                }
            }
            Self::Uncontrolled { .. } => false,
        }
    }
}

fn toggled(mode: SelectMode, current: &[String], key: &str) -> Vec<String> {
    if current.iter().any(|selected| selected == key) {
        return current
            .iter()
            .filter(|selected| *selected != key)
            .cloned()
            .collect();
    }
    match mode {
        SelectMode::Single => vec![key.to_string()],
        SelectMode::Multiple => {
            let mut next = current.to_vec();
            next.push(key.to_string());
            next
        }
    }
}

fn normalize<I, S>(mode: SelectMode, keys: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut value: Vec<String> = Vec::new();
    for key in keys {
        let key = key.into();
        if !value.contains(&key) {
            value.push(key);
        }
    }
    if mode == SelectMode::Single {
        value.truncate(1);
    }
    value
}

fn check_single<I, S>(mode: SelectMode, keys: I) -> Result<Vec<String>, ComboboxError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
    if mode == SelectMode::Single && keys.len() > 1 {
        return Err(ComboboxError::TooManySingleValues { count: keys.len() });
    }
    Ok(keys)
}
