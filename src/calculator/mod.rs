//! Calculator core for the keypad.
//!
//! This module provides functionality to:
//! - Evaluate single two-operand operations
//! - Fold key presses into calculator states
//! - Format operands and results for display
//! - Copy results to the clipboard

mod clipboard;
mod display;
mod evaluation;
mod operator;
mod reducer;
mod state;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use display::{display_text, format_value, group_thousands};
pub use evaluation::{CalculationResult, ErrorKind, evaluate, parse_operand};
pub use operator::OperatorSymbol;
pub use reducer::{Calculator, DEFAULT_MAX_INPUT_LEN, InputToken, reduce};
pub use state::{CalculatorState, renderable_text};
