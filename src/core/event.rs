//! Keypad input events for the calculator engine.
//!
//! Every interaction with the engine is one of these discrete events.
//! The enums are plain data: pure, cloneable, comparable, and serializable,
//! so a presentation layer can queue, replay, or log them freely.

use serde::{Deserialize, Serialize};

/// Binary operation awaiting a right-hand operand.
///
/// # Example
///
/// ```rust
/// use tally::core::BinaryOp;
///
/// assert_eq!(BinaryOp::Add.symbol(), "+");
/// assert_eq!(BinaryOp::Power.symbol(), "^");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    /// Get the operator symbol used in history descriptions.
    pub fn symbol(&self) -> &str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }
}

/// Single-value scientific function applied immediately to the display.
///
/// # Example
///
/// ```rust
/// use tally::core::UnaryFunction;
///
/// assert_eq!(UnaryFunction::Asin.name(), "sin⁻¹");
/// assert_eq!(UnaryFunction::Ln.name(), "ln");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum UnaryFunction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log10,
    Ln,
}

impl UnaryFunction {
    /// Get the function's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "sin⁻¹",
            Self::Acos => "cos⁻¹",
            Self::Atan => "tan⁻¹",
            Self::Log10 => "log",
            Self::Ln => "ln",
        }
    }
}

/// Mathematical constant loadable into the display.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Constant {
    E,
    Pi,
}

impl Constant {
    /// Get the constant's numeric value.
    pub fn value(&self) -> f64 {
        match self {
            Self::E => std::f64::consts::E,
            Self::Pi => std::f64::consts::PI,
        }
    }

    /// Get the constant's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::E => "e",
            Self::Pi => "π",
        }
    }
}

/// One discrete input event dispatched to the calculator engine.
///
/// # Example
///
/// ```rust
/// use tally::core::{BinaryOp, InputEvent};
///
/// let events = [
///     InputEvent::Digit('4'),
///     InputEvent::Decimal,
///     InputEvent::Digit('2'),
///     InputEvent::BinaryOp(BinaryOp::Multiply),
/// ];
/// assert_eq!(events.len(), 4);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum InputEvent {
    /// A digit key, '0' through '9'
    Digit(char),
    /// The decimal point key
    Decimal,
    /// A binary operation key; resolves any pending operation first
    BinaryOp(BinaryOp),
    /// The equals key; resolves the pending operation
    Equals,
    /// A single-value function key; applied immediately
    Function(UnaryFunction),
    /// A constant key; overwrites the display
    Constant(Constant),
    /// The clear key; resets evaluation state but not memory or history
    Clear,
    /// Add the displayed value into the memory register
    MemoryAdd,
    /// Subtract the displayed value from the memory register
    MemorySubtract,
    /// Write the memory register into the display
    MemoryRecall,
    /// Reset the memory register to zero
    MemoryClear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_op_symbols_are_stable() {
        assert_eq!(BinaryOp::Add.symbol(), "+");
        assert_eq!(BinaryOp::Subtract.symbol(), "-");
        assert_eq!(BinaryOp::Multiply.symbol(), "*");
        assert_eq!(BinaryOp::Divide.symbol(), "/");
        assert_eq!(BinaryOp::Power.symbol(), "^");
    }

    #[test]
    fn unary_function_names_are_stable() {
        assert_eq!(UnaryFunction::Sin.name(), "sin");
        assert_eq!(UnaryFunction::Acos.name(), "cos⁻¹");
        assert_eq!(UnaryFunction::Log10.name(), "log");
        assert_eq!(UnaryFunction::Ln.name(), "ln");
    }

    #[test]
    fn constant_values_match_std() {
        assert_eq!(Constant::E.value(), std::f64::consts::E);
        assert_eq!(Constant::Pi.value(), std::f64::consts::PI);
    }

    #[test]
    fn event_serializes_correctly() {
        let event = InputEvent::BinaryOp(BinaryOp::Divide);
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: InputEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn event_is_comparable() {
        assert_eq!(InputEvent::Digit('7'), InputEvent::Digit('7'));
        assert_ne!(InputEvent::Digit('7'), InputEvent::Digit('8'));
        assert_ne!(InputEvent::Equals, InputEvent::Clear);
    }
}
