//! Number formatting for operands and the display.

use super::state::{CalculatorState, renderable_text};
use crate::config::DisplayConfig;

/// Format a computed value as operand text.
///
/// Uses the shortest representation that parses back to the same value,
/// without an exponent, so results can be fed into the next operation.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // Also covers -0
        return "0".to_string();
    }
    format!("{}", value)
}

/// The text to show for a state, grouped as configured.
pub fn display_text(state: &CalculatorState, config: &DisplayConfig) -> String {
    let text = renderable_text(state);

    if config.grouping && !state.has_error {
        group_thousands(&text, config.separator)
    } else {
        text
    }
}

/// Insert `separator` between every three digits of the integer part.
///
/// The sign, a trailing decimal point and the fractional part are kept as
/// typed. Text that is not a plain number is returned unchanged.
pub fn group_thousands(text: &str, separator: char) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };

    let (int_part, fraction) = match unsigned.find('.') {
        Some(dot_pos) => unsigned.split_at(dot_pos),
        None => (unsigned, ""),
    };

    if int_part.is_empty()
        || !int_part.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().skip(1).all(|c| c.is_ascii_digit())
    {
        return text.to_string();
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    let grouped: String = grouped.chars().rev().collect();
    format!("{sign}{grouped}{fraction}")
}
