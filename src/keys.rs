//! Keyboard mirroring.
//!
//! Maps key names, as a keyboard event or a typed line reports them, onto the
//! same tokens the on-screen keypad produces.

use crate::calculator::{InputToken, OperatorSymbol};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// A named key in braces (`{Enter}`), or any other single character.
    static ref KEY: Regex = Regex::new(r"\{([^{}]*)\}|\S").unwrap();
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown key `{0}`")]
    UnknownKey(String),
    #[error("unterminated key name starting at column {0}")]
    Unterminated(usize),
}

/// Map a single key name onto a token.
///
/// Key names follow browser `KeyboardEvent.key` values, so `Enter`,
/// `Backspace` and `Escape` work alongside the printable keys.
pub fn token_for_key(key: &str) -> Option<InputToken> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return token_for_char(c);
    }

    match key.to_ascii_lowercase().as_str() {
        "enter" | "return" => Some(InputToken::Equals),
        "backspace" | "bs" => Some(InputToken::Backspace),
        "escape" | "esc" | "delete" | "del" | "clear" => Some(InputToken::Clear),
        "f9" | "negate" => Some(InputToken::ToggleSign),
        _ => None,
    }
}

fn token_for_char(c: char) -> Option<InputToken> {
    if let Some(digit) = c.to_digit(10) {
        return Some(InputToken::Digit(digit as u8));
    }

    match c {
        '.' | ',' => Some(InputToken::Decimal),
        '=' => Some(InputToken::Equals),
        'c' | 'C' => Some(InputToken::Clear),
        'n' | '±' => Some(InputToken::ToggleSign),
        _ => OperatorSymbol::from_char(c).map(InputToken::Operator),
    }
}

/// Split a typed line into tokens.
///
/// Printable keys are written as-is and named keys in braces, so
/// `12.5*{Backspace}3{Enter}` presses eight keys. Whitespace is ignored.
pub fn parse_key_sequence(line: &str) -> Result<Vec<InputToken>, KeyError> {
    let mut tokens = Vec::new();

    for caps in KEY.captures_iter(line) {
        let whole = caps.get(0).map_or("", |m| m.as_str());

        let key = match caps.get(1) {
            Some(name) => name.as_str().trim(),
            None if whole == "{" => {
                let column = caps.get(0).map_or(0, |m| m.start());
                return Err(KeyError::Unterminated(column));
            }
            None => whole,
        };

        match token_for_key(key) {
            Some(token) => tokens.push(token),
            None => {
                tracing::warn!(key, "unknown key");
                return Err(KeyError::UnknownKey(key.to_string()));
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use InputToken::*;

    #[test]
    fn test_printable_keys() {
        assert_eq!(token_for_key("7"), Some(Digit(7)));
        assert_eq!(token_for_key("."), Some(Decimal));
        assert_eq!(token_for_key("+"), Some(Operator(OperatorSymbol::Add)));
        assert_eq!(token_for_key("÷"), Some(Operator(OperatorSymbol::Divide)));
        assert_eq!(token_for_key("="), Some(Equals));
        assert_eq!(token_for_key("±"), Some(ToggleSign));
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(token_for_key("Enter"), Some(Equals));
        assert_eq!(token_for_key("Backspace"), Some(Backspace));
        assert_eq!(token_for_key("Escape"), Some(Clear));
        assert_eq!(token_for_key("Delete"), Some(Clear));
        assert_eq!(token_for_key("F9"), Some(ToggleSign));
        assert_eq!(token_for_key("Shift"), None);
        assert_eq!(token_for_key(""), None);
    }

    #[test]
    fn test_key_sequence() {
        let tokens = parse_key_sequence("12.5*{Backspace}3{Enter}").unwrap();
        assert_eq!(
            tokens,
            vec![
                Digit(1),
                Digit(2),
                Decimal,
                Digit(5),
                Operator(OperatorSymbol::Multiply),
                Backspace,
                Digit(3),
                Equals,
            ]
        );
    }

    #[test]
    fn test_whitespace_ignored() {
        let tokens = parse_key_sequence("  6 + 4 = ").unwrap();
        assert_eq!(
            tokens,
            vec![Digit(6), Operator(OperatorSymbol::Add), Digit(4), Equals]
        );
        assert!(parse_key_sequence("   ").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            parse_key_sequence("2?"),
            Err(KeyError::UnknownKey("?".to_string()))
        );
        assert_eq!(
            parse_key_sequence("{Tab}"),
            Err(KeyError::UnknownKey("Tab".to_string()))
        );
    }

    #[test]
    fn test_unterminated_name() {
        assert_eq!(parse_key_sequence("12{Ent"), Err(KeyError::Unterminated(2)));
    }
}
