//! The arithmetic engine.
//!
//! Evaluates a single two-operand operation given the operands as they were
//! typed on the keypad, classifying anything that is not a finite number.

use super::operator::OperatorSymbol;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

lazy_static! {
    /// A keypad operand: optional leading minus, digits with at most one
    /// decimal point, no grouping separators.
    static ref OPERAND: Regex = Regex::new(r"^-?(\d+\.?\d*|\.\d+)$").unwrap();
}

/// Why an operation produced no value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// An operand did not parse as a finite number.
    #[error("Wrong Input")]
    InvalidInput,
    /// A zero divisor, or a result too large to represent.
    #[error("Division By Zero")]
    DivisionByZero,
}

/// Outcome of evaluating one operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculationResult {
    /// The numeric result, `None` on error.
    pub value: Option<f64>,
    pub is_error: bool,
    pub error_kind: Option<ErrorKind>,
}

impl CalculationResult {
    fn success(value: f64) -> Self {
        Self {
            value: Some(value),
            is_error: false,
            error_kind: None,
        }
    }

    fn failure(kind: ErrorKind) -> Self {
        Self {
            value: None,
            is_error: true,
            error_kind: Some(kind),
        }
    }

    /// Convert into a `Result` for `?`-style handling.
    pub fn into_result(self) -> Result<f64, ErrorKind> {
        match (self.value, self.error_kind) {
            (Some(value), None) => Ok(value),
            (_, Some(kind)) => Err(kind),
            (None, None) => Err(ErrorKind::InvalidInput),
        }
    }
}

/// Evaluate `n1 <operator> n2`.
///
/// Never panics; every failure is reported through the returned result.
pub fn evaluate(n1: &str, n2: &str, operator: OperatorSymbol) -> CalculationResult {
    match try_evaluate(n1, n2, operator) {
        Ok(value) => CalculationResult::success(value),
        Err(kind) => {
            tracing::debug!(n1, n2, %operator, error = %kind, "calculation failed");
            CalculationResult::failure(kind)
        }
    }
}

fn try_evaluate(n1: &str, n2: &str, operator: OperatorSymbol) -> Result<f64, ErrorKind> {
    let lhs = parse_operand(n1)?;
    let rhs = parse_operand(n2)?;

    if operator.rejects_zero_divisor() && rhs == 0.0 {
        return Err(ErrorKind::DivisionByZero);
    }

    let value = operator.apply(lhs, rhs);

    // Overflow is caught separately from the zero divisor above.
    if !value.is_finite() {
        return Err(ErrorKind::DivisionByZero);
    }

    Ok(value)
}

/// Parse a keypad operand into a finite number.
pub fn parse_operand(text: &str) -> Result<f64, ErrorKind> {
    let trimmed = text.trim();

    if !OPERAND.is_match(trimmed) {
        return Err(ErrorKind::InvalidInput);
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ErrorKind::InvalidInput)
}
