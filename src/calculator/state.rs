//! The calculator's visible state.

use super::operator::OperatorSymbol;
use serde::Serialize;

/// Everything the keypad shows and remembers between key presses.
///
/// A state is never edited in place by the reducer; every transition
/// produces a new value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CalculatorState {
    /// Text currently being typed.
    pub edit_buffer: String,
    /// First number of the pending operation, empty until entered.
    pub first_operand: String,
    /// Second number, empty until typing resumes after an operator.
    pub second_operand: String,
    pub pending_operator: Option<OperatorSymbol>,
    /// Whether typing goes into the first operand.
    pub is_editing_first: bool,
    pub has_error: bool,
    pub error_message: String,
    /// Set right after `=` so that the next entry starts fresh.
    pub just_completed: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::initial()
    }
}

impl CalculatorState {
    /// The state at start-up and after a clear.
    pub fn initial() -> Self {
        Self {
            edit_buffer: "0".to_string(),
            first_operand: String::new(),
            second_operand: String::new(),
            pending_operator: None,
            is_editing_first: true,
            has_error: false,
            error_message: String::new(),
            just_completed: false,
        }
    }

    /// A fresh state showing an error message.
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            has_error: true,
            error_message: message.into(),
            ..Self::initial()
        }
    }

    /// The operand currently receiving input.
    pub fn active_operand(&self) -> &str {
        if self.is_editing_first {
            &self.first_operand
        } else {
            &self.second_operand
        }
    }

    /// Replace the active operand, keeping the edit buffer in sync.
    pub(crate) fn with_active_operand(mut self, text: String) -> Self {
        if self.is_editing_first {
            self.first_operand = text.clone();
        } else {
            self.second_operand = text.clone();
        }
        self.edit_buffer = text;
        self
    }

    /// Whether both operands and an operator are present.
    pub fn has_complete_operation(&self) -> bool {
        !self.first_operand.is_empty()
            && !self.second_operand.is_empty()
            && self.pending_operator.is_some()
    }
}

/// The text to display for a state.
///
/// Shows the error message when in error, otherwise the edit buffer,
/// falling back to the first operand (right after an operator is pressed).
pub fn renderable_text(state: &CalculatorState) -> String {
    if state.has_error {
        return state.error_message.clone();
    }

    [&state.edit_buffer, &state.first_operand]
        .into_iter()
        .find(|text| !text.is_empty())
        .cloned()
        .unwrap_or_else(|| "0".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = CalculatorState::initial();
        assert_eq!(state.edit_buffer, "0");
        assert!(state.first_operand.is_empty());
        assert!(state.is_editing_first);
        assert!(!state.has_error);
        assert_eq!(state, CalculatorState::default());
        assert_eq!(renderable_text(&state), "0");
    }

    #[test]
    fn test_render_falls_back_to_first_operand() {
        let state = CalculatorState {
            edit_buffer: String::new(),
            first_operand: "42".to_string(),
            pending_operator: Some(OperatorSymbol::Add),
            is_editing_first: false,
            ..CalculatorState::initial()
        };
        assert_eq!(renderable_text(&state), "42");
    }

    #[test]
    fn test_render_error_message() {
        let state = CalculatorState::with_error("Division By Zero");
        assert_eq!(renderable_text(&state), "Division By Zero");
    }

    #[test]
    fn test_active_operand_tracks_target() {
        let state = CalculatorState::initial().with_active_operand("12".to_string());
        assert_eq!(state.first_operand, "12");
        assert_eq!(state.edit_buffer, "12");

        let state = CalculatorState {
            is_editing_first: false,
            ..state
        }
        .with_active_operand("3".to_string());
        assert_eq!(state.first_operand, "12");
        assert_eq!(state.second_operand, "3");
        assert_eq!(state.active_operand(), "3");
    }
}
