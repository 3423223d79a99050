//! Binary operators accepted by the keypad.

use serde::Serialize;
use std::fmt;

/// A binary operator awaiting its right-hand operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorSymbol {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

impl OperatorSymbol {
    /// All operators, in keypad order.
    pub const ALL: [OperatorSymbol; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Remainder,
    ];

    /// Parse an operator from its keypad glyph.
    ///
    /// Besides the ASCII symbols, the multiply and divide glyphs found on
    /// printed keypads (`×`, `x`, `÷`) are accepted.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' | 'x' | 'X' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            '%' => Some(Self::Remainder),
            _ => None,
        }
    }

    /// The canonical ASCII symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Remainder => '%',
        }
    }

    /// Whether a zero right-hand operand is undefined for this operator.
    pub fn rejects_zero_divisor(self) -> bool {
        matches!(self, Self::Divide | Self::Remainder)
    }

    /// Apply the operator with plain IEEE-754 double semantics.
    ///
    /// Remainder follows the sign of the dividend.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Remainder => lhs % rhs,
        }
    }
}

impl fmt::Display for OperatorSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_parsed() {
        assert_eq!(OperatorSymbol::from_char('+'), Some(OperatorSymbol::Add));
        assert_eq!(OperatorSymbol::from_char('×'), Some(OperatorSymbol::Multiply));
        assert_eq!(OperatorSymbol::from_char('x'), Some(OperatorSymbol::Multiply));
        assert_eq!(OperatorSymbol::from_char('÷'), Some(OperatorSymbol::Divide));
        assert_eq!(OperatorSymbol::from_char('%'), Some(OperatorSymbol::Remainder));
        assert_eq!(OperatorSymbol::from_char('='), None);
    }

    #[test]
    fn test_symbol_matches_parse() {
        for op in OperatorSymbol::ALL {
            assert_eq!(OperatorSymbol::from_char(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_remainder_takes_dividend_sign() {
        assert_eq!(OperatorSymbol::Remainder.apply(-7.0, 3.0), -1.0);
        assert_eq!(OperatorSymbol::Remainder.apply(7.0, -3.0), 1.0);
    }
}
