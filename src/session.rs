//! An interactive calculator session.

use crate::calculator::{
    Calculator, CalculatorState, ClipboardError, InputToken, copy_to_clipboard, display_text,
    renderable_text,
};
use crate::config::{Config, DisplayConfig};

/// Owns the one live calculator state and the settings used to advance and
/// display it.
pub struct Session {
    calculator: Calculator,
    display: DisplayConfig,
    state: CalculatorState,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            calculator: Calculator::new(config.max_input_len),
            display: config.display.clone(),
            state: CalculatorState::initial(),
        }
    }

    /// Press one key.
    pub fn press(&mut self, token: InputToken) {
        let state = std::mem::take(&mut self.state);
        self.state = self.calculator.reduce(state, token);
    }

    /// Press a sequence of keys in order.
    pub fn feed(&mut self, tokens: impl IntoIterator<Item = InputToken>) {
        for token in tokens {
            self.press(token);
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Text for the display, grouped as configured.
    pub fn display(&self) -> String {
        display_text(&self.state, &self.display)
    }

    /// The current value without grouping, or `None` while an error is shown.
    pub fn raw_value(&self) -> Option<String> {
        if self.state.has_error {
            return None;
        }
        Some(renderable_text(&self.state))
    }

    /// Copy the current value to the system clipboard.
    pub fn copy(&self) -> Result<(), ClipboardError> {
        let value = self.raw_value().ok_or(ClipboardError::ErrorDisplayed)?;
        copy_to_clipboard(&value)
    }

    /// Serialize the current state as pretty JSON.
    pub fn state_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.state)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
