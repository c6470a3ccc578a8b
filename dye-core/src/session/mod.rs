//! Form state and history for one user session.
//!
//! The session owns everything a front end needs between actions: the five
//! inputs, the text currently shown in the result area and the history. It
//! holds no reference to the store; each calculation borrows it.

mod history;

pub use history::History;

use crate::calc::parse_request;
use crate::config::messages;
use crate::error::{DyeError, Result};
use crate::format::format_result;
use crate::model::{Calculation, FabricType};
use crate::store::RecipeStore;

/// One calculator screen.
#[derive(Debug, Clone)]
pub struct Session {
    color_id: String,
    fabric: Option<FabricType>,
    width: Option<&'static str>,
    liters: String,
    percent: String,
    result_text: String,
    history: History,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            color_id: String::new(),
            fabric: None,
            width: None,
            liters: String::new(),
            percent: String::new(),
            result_text: messages::RESULT_PLACEHOLDER.to_string(),
            history: History::new(),
        }
    }
}

impl Session {
    /// Create a session with an empty form and history.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_color(&mut self, color_id: impl Into<String>) {
        self.color_id = color_id.into();
    }

    pub fn set_liters(&mut self, liters: impl Into<String>) {
        self.liters = liters.into();
    }

    pub fn set_percent(&mut self, percent: impl Into<String>) {
        self.percent = percent.into();
    }

    /// Change the fabric. Always clears the width, and returns the widths
    /// now selectable.
    pub fn select_fabric(&mut self, fabric: Option<FabricType>) -> &'static [&'static str] {
        self.fabric = fabric;
        self.width = None;
        self.width_options()
    }

    /// Choose a width. Only labels offered for the current fabric are
    /// accepted; returns whether the selection changed.
    pub fn select_width(&mut self, width: &str) -> bool {
        match self.width_options().iter().find(|w| **w == width.trim()) {
            Some(w) => {
                self.width = Some(*w);
                true
            }
            None => false,
        }
    }

    /// Widths selectable for the current fabric.
    pub fn width_options(&self) -> &'static [&'static str] {
        self.fabric.map(|f| f.widths()).unwrap_or(&[])
    }

    pub fn fabric(&self) -> Option<FabricType> {
        self.fabric
    }

    pub fn width(&self) -> Option<&'static str> {
        self.width
    }

    /// Fabric as shown in its selector.
    pub fn fabric_label(&self) -> &'static str {
        self.fabric
            .map(|f| f.name())
            .unwrap_or(messages::FABRIC_PLACEHOLDER)
    }

    /// Width as shown in its selector.
    pub fn width_label(&self) -> &'static str {
        self.width.unwrap_or(messages::WIDTH_PLACEHOLDER)
    }

    /// Text for the result area.
    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Run the calculation for the current form.
    ///
    /// On success the result area shows the amounts and one history entry is
    /// appended. On failure the result area shows the matching user message
    /// and history is untouched.
    pub fn calculate(&mut self, store: &RecipeStore) -> Result<Calculation> {
        let outcome = parse_request(
            &self.color_id,
            self.fabric.map(|f| f.name()).unwrap_or(""),
            self.width.unwrap_or(""),
            &self.liters,
            &self.percent,
        )
        .and_then(|request| store.calculate(request));

        match &outcome {
            Ok(calc) => {
                self.result_text = format_result(calc);
                self.history.record(calc);
            }
            Err(e) => self.result_text = user_message(e),
        }
        outcome
    }

    /// Clear the form and the result area. History is kept.
    pub fn reset(&mut self) {
        let history = std::mem::take(&mut self.history);
        *self = Self {
            history,
            ..Self::default()
        };
    }

    /// History as a single block of text.
    pub fn show_history(&self) -> String {
        self.history.render()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

/// Text shown to the user for a failed calculation.
pub fn user_message(err: &DyeError) -> String {
    match err {
        DyeError::MissingField { .. } => messages::INCOMPLETE_FIELDS.to_string(),
        DyeError::NotFound { .. } => messages::NOT_FOUND.to_string(),
        DyeError::DataUnavailable { .. } => messages::DATA_UNAVAILABLE.to_string(),
        other => format!("{}: {}", messages::ERROR_PREFIX, other),
    }
}
