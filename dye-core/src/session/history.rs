//! Append-only list of formatted calculations.

use crate::config::messages::EMPTY_HISTORY;
use crate::format::format_history_entry;
use crate::model::Calculation;

/// History of one session. Lives only as long as the session.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful calculation.
    pub fn record(&mut self, calc: &Calculation) {
        self.entries.push(format_history_entry(calc));
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries separated by blank lines, or the placeholder when empty.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            EMPTY_HISTORY.to_string()
        } else {
            self.entries.join("\n")
        }
    }
}
