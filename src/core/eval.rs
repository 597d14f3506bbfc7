//! Pure numeric evaluation for binary operations and scientific functions.
//!
//! Evaluation returns a tagged result instead of letting NaN propagate:
//! undefined arithmetic (division by zero, invalid logarithm domains,
//! non-finite float results) comes back as an `EvalError`, and conversion
//! to the display error marker happens only at the formatting step.

use super::event::{BinaryOp, UnaryFunction};
use thiserror::Error;

/// Errors produced at the evaluation boundary.
///
/// These never cross the engine's public boundary; the engine converts
/// them to the error-marker display string.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("logarithm of non-positive value {input}")]
    LogDomain { input: f64 },

    #[error("result is not a finite number")]
    NonFinite,
}

/// Evaluate a binary operation.
///
/// A valid result is always finite; NaN and infinities are reported as
/// `EvalError::NonFinite` rather than leaking into the display.
///
/// # Example
///
/// ```rust
/// use tally::core::{evaluate_binary, BinaryOp, EvalError};
///
/// assert_eq!(evaluate_binary(5.0, BinaryOp::Add, 3.0), Ok(8.0));
/// assert_eq!(
///     evaluate_binary(8.0, BinaryOp::Divide, 0.0),
///     Err(EvalError::DivisionByZero)
/// );
/// ```
pub fn evaluate_binary(left: f64, op: BinaryOp, right: f64) -> Result<f64, EvalError> {
    let result = match op {
        BinaryOp::Add => left + right,
        BinaryOp::Subtract => left - right,
        BinaryOp::Multiply => left * right,
        BinaryOp::Divide => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            left / right
        }
        BinaryOp::Power => left.powf(right),
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(EvalError::NonFinite)
    }
}

/// Apply a single-value scientific function.
///
/// Logarithms require a positive input; inverse trigonometric functions
/// outside their domain surface as `EvalError::NonFinite`.
///
/// # Example
///
/// ```rust
/// use tally::core::{apply_function, EvalError, UnaryFunction};
///
/// assert_eq!(apply_function(UnaryFunction::Ln, 1.0), Ok(0.0));
/// assert_eq!(
///     apply_function(UnaryFunction::Log10, -4.0),
///     Err(EvalError::LogDomain { input: -4.0 })
/// );
/// ```
pub fn apply_function(function: UnaryFunction, input: f64) -> Result<f64, EvalError> {
    let result = match function {
        UnaryFunction::Sin => input.sin(),
        UnaryFunction::Cos => input.cos(),
        UnaryFunction::Tan => input.tan(),
        UnaryFunction::Asin => input.asin(),
        UnaryFunction::Acos => input.acos(),
        UnaryFunction::Atan => input.atan(),
        UnaryFunction::Log10 => {
            if input <= 0.0 {
                return Err(EvalError::LogDomain { input });
            }
            input.log10()
        }
        UnaryFunction::Ln => {
            if input <= 0.0 {
                return Err(EvalError::LogDomain { input });
            }
            input.ln()
        }
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(EvalError::NonFinite)
    }
}
