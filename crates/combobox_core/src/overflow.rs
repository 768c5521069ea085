//! Chip overflow summarization.

use serde::{Deserialize, Serialize};

/// Default aggregate badge template.
pub const DEFAULT_SUMMARY_TEMPLATE: &str = "{count} items selected";
const COUNT_TOKEN: &str = "{count}";

/// Threshold and template controlling when chips collapse into one summary badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverflowPolicy {
    /// Largest selection rendered as individual chips; 0 disables summarizing.
    pub max_display_count: usize,
    /// Summary text with `{count}` standing in for the selection size.
    pub summary_template: String,
}

impl Default for OverflowPolicy {
    fn default() -> Self {
        Self {
            max_display_count: 0,
            summary_template: DEFAULT_SUMMARY_TEMPLATE.to_string(),
        }
    }
}

/// How the trigger should present a non-empty selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverflowDecision {
    /// One removable chip per key, in selection order.
    Chips(Vec<String>),
    /// A single aggregate badge.
    Summary(String),
}

impl OverflowPolicy {
    /// Creates a policy with the given threshold and template.
    pub fn new(max_display_count: usize, summary_template: impl Into<String>) -> Self {
        Self {
            max_display_count,
            summary_template: summary_template.into(),
        }
    }

    /// Whether `count` selected keys exceed the threshold.
    pub fn should_summarize(&self, count: usize) -> bool {
        self.max_display_count > 0 && count > self.max_display_count
    }

    /// Template with the first `{count}` replaced by `count`.
    pub fn summary_text(&self, count: usize) -> String {
        self.summary_template
            .replacen(COUNT_TOKEN, &count.to_string(), 1)
    }

    /// Chips or summary for the current selection.
    pub fn summarize(&self, selected: &[String]) -> OverflowDecision {
        if self.should_summarize(selected.len()) {
            OverflowDecision::Summary(self.summary_text(selected.len()))
        } else {
            OverflowDecision::Chips(selected.to_vec())
        }
    }
}
