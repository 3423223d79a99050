//! The input reducer.
//!
//! Folds keypad tokens into [`CalculatorState`] values, calling the
//! arithmetic engine whenever an operator or `=` completes an operation.

use super::display::format_value;
use super::evaluation::evaluate;
use super::operator::OperatorSymbol;
use super::state::{CalculatorState, renderable_text};
use serde::Serialize;

/// Default cap on typed operand length, sign excluded.
pub const DEFAULT_MAX_INPUT_LEN: usize = 13;

/// A single key press, already mapped from whatever the front-end received.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum InputToken {
    /// A digit in `0..=9`.
    Digit(u8),
    Decimal,
    Operator(OperatorSymbol),
    Equals,
    Clear,
    Backspace,
    ToggleSign,
}

/// Reducer settings.
#[derive(Clone, Copy, Debug)]
pub struct Calculator {
    max_input_len: usize,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INPUT_LEN)
    }
}

impl Calculator {
    /// Create a reducer capping operands at `max_input_len` characters.
    pub fn new(max_input_len: usize) -> Self {
        Self {
            max_input_len: max_input_len.max(1),
        }
    }

    pub fn max_input_len(&self) -> usize {
        self.max_input_len
    }

    /// Compute the state following `token`.
    ///
    /// Total: every token yields a valid state, arithmetic errors included.
    pub fn reduce(&self, state: CalculatorState, token: InputToken) -> CalculatorState {
        let next = match token {
            InputToken::Clear => CalculatorState::initial(),
            InputToken::Digit(d) => self.push_digit(state, d),
            InputToken::Decimal => self.push_decimal(state),
            // Only a clear or a new entry leaves the error state.
            _ if state.has_error => state,
            InputToken::Operator(op) => press_operator(state, op),
            InputToken::Equals => press_equals(state),
            InputToken::Backspace => backspace(state),
            InputToken::ToggleSign => toggle_sign(state),
        };

        tracing::trace!(?token, display = %renderable_text(&next), "reduced");
        next
    }

    fn push_digit(&self, state: CalculatorState, digit: u8) -> CalculatorState {
        if digit > 9 {
            return state;
        }
        let digit = char::from(b'0' + digit);
        let state = fresh_entry(state);
        let current = state.active_operand();

        let text = match current {
            "0" => Some(digit.to_string()),
            "-0" => Some(format!("-{digit}")),
            _ if unsigned_len(current) >= self.max_input_len => None,
            _ => Some(format!("{current}{digit}")),
        };

        match text {
            Some(text) => state.with_active_operand(text),
            None => state,
        }
    }

    fn push_decimal(&self, state: CalculatorState) -> CalculatorState {
        let state = fresh_entry(state);
        let current = state.active_operand();

        if current.contains('.') || unsigned_len(current) >= self.max_input_len {
            return state;
        }

        let text = match current {
            "" => "0.".to_string(),
            "-" => "-0.".to_string(),
            _ => format!("{current}."),
        };

        state.with_active_operand(text)
    }
}

/// Compute the state following `token` with the default settings.
pub fn reduce(state: CalculatorState, token: InputToken) -> CalculatorState {
    Calculator::default().reduce(state, token)
}

/// Prepare a state to receive a new digit or decimal point.
///
/// An error or a just-completed result is discarded in favour of a new first
/// operand.
fn fresh_entry(state: CalculatorState) -> CalculatorState {
    if state.has_error || state.just_completed {
        CalculatorState::initial()
    } else {
        state
    }
}

fn press_operator(state: CalculatorState, op: OperatorSymbol) -> CalculatorState {
    if state.first_operand.is_empty() {
        return state;
    }

    let state = if state.second_operand.is_empty() {
        state
    } else {
        match complete_operation(state) {
            Ok(state) => state,
            Err(error_state) => return error_state,
        }
    };

    CalculatorState {
        edit_buffer: String::new(),
        second_operand: String::new(),
        pending_operator: Some(op),
        is_editing_first: false,
        just_completed: false,
        ..state
    }
}

fn press_equals(state: CalculatorState) -> CalculatorState {
    if !state.has_complete_operation() {
        return state;
    }

    match complete_operation(state) {
        Ok(state) => CalculatorState {
            just_completed: true,
            ..state
        },
        Err(error_state) => error_state,
    }
}

/// Evaluate the pending operation, folding its result into the first operand.
///
/// On failure the returned state is a fresh error state.
fn complete_operation(state: CalculatorState) -> Result<CalculatorState, CalculatorState> {
    let Some(op) = state.pending_operator else {
        return Ok(state);
    };

    match evaluate(&state.first_operand, &state.second_operand, op).into_result() {
        Ok(value) => {
            let result = format_value(value);
            Ok(CalculatorState {
                edit_buffer: result.clone(),
                first_operand: result,
                second_operand: String::new(),
                pending_operator: None,
                is_editing_first: true,
                ..state
            })
        }
        Err(kind) => Err(CalculatorState::with_error(kind.to_string())),
    }
}

fn backspace(state: CalculatorState) -> CalculatorState {
    let mut text = state.active_operand().to_string();
    text.pop();

    if text.is_empty() || text == "-" {
        text = "0".to_string();
    }

    CalculatorState {
        just_completed: false,
        ..state
    }
    .with_active_operand(text)
}

fn toggle_sign(state: CalculatorState) -> CalculatorState {
    let current = state.active_operand();

    if current.is_empty() || current == "0" {
        return state;
    }

    let text = match current.strip_prefix('-') {
        Some(unsigned) => unsigned.to_string(),
        None => format!("-{current}"),
    };

    state.with_active_operand(text)
}

fn unsigned_len(text: &str) -> usize {
    text.trim_start_matches('-').chars().count()
}
