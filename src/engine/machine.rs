//! Calculator engine that drives the pure core one input event at a time.

use crate::core::{
    apply_function, evaluate_binary, format_value, parse_display, BinaryOp, Constant, History,
    HistoryEntry, InputEvent, UnaryFunction, ERROR_DISPLAY,
};
use crate::engine::memory::MemoryRegister;
use crate::engine::snapshot::Snapshot;

/// The calculator's evaluation state machine.
///
/// The engine owns all evaluation state: the display string, the pending
/// operand/operation pair, the accumulation flag, the memory register, the
/// calculation history, and the undo stack. State mutates only through
/// [`Calculator::handle_input`] and [`Calculator::undo`]; the read accessors
/// are pure.
///
/// Failure states are data, never errors: an undefined result (division by
/// zero, invalid logarithm domain) sets the display to the error marker, and
/// any subsequent input transitions back to normal operation.
///
/// # Example
///
/// ```rust
/// use tally::{BinaryOp, Calculator, InputEvent, UnaryFunction};
///
/// let mut calc = Calculator::new();
/// calc.handle_input(InputEvent::Digit('8'));
/// calc.handle_input(InputEvent::BinaryOp(BinaryOp::Divide));
/// calc.handle_input(InputEvent::Digit('0'));
/// calc.handle_input(InputEvent::Equals);
/// assert_eq!(calc.display(), "Error");
///
/// // Any further input recovers
/// calc.handle_input(InputEvent::Digit('2'));
/// assert_eq!(calc.display(), "2");
/// ```
#[derive(Debug)]
pub struct Calculator {
    display: String,
    pending_operand: Option<f64>,
    pending_op: Option<BinaryOp>,
    accumulating: bool,
    memory: MemoryRegister,
    history: History,
    undo_stack: Vec<Snapshot>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create an engine in the neutral state: display `"0"`, nothing
    /// pending, memory zero, empty history.
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending_operand: None,
            pending_op: None,
            accumulating: false,
            memory: MemoryRegister::new(),
            history: History::new(),
            undo_stack: Vec::new(),
        }
    }

    /// Get the current display string (pure)
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Get the calculation history (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Get the memory register's value (pure)
    pub fn memory(&self) -> f64 {
        self.memory.recall()
    }

    /// Process one input event to completion.
    ///
    /// The current evaluation state is snapshotted before processing, so a
    /// single [`Calculator::undo`] steps back over this event.
    pub fn handle_input(&mut self, event: InputEvent) {
        self.undo_stack.push(self.snapshot());

        match event {
            InputEvent::Digit(digit) => self.enter_digit(digit),
            InputEvent::Decimal => self.enter_decimal(),
            InputEvent::BinaryOp(op) => self.select_operation(op),
            InputEvent::Equals => self.resolve_pending(),
            InputEvent::Function(function) => self.apply_unary(function),
            InputEvent::Constant(constant) => self.load_constant(constant),
            InputEvent::Clear => self.clear(),
            InputEvent::MemoryAdd => {
                self.memory.add(parse_display(&self.display));
                self.accumulating = false;
            }
            InputEvent::MemorySubtract => {
                self.memory.subtract(parse_display(&self.display));
                self.accumulating = false;
            }
            InputEvent::MemoryRecall => {
                self.display = format_value(self.memory.recall());
                // Recalled value is treated as an in-progress number
                self.accumulating = true;
            }
            InputEvent::MemoryClear => self.memory.clear(),
        }
    }

    /// Restore the state captured before the most recent input event.
    ///
    /// Pops the undo stack and restores the display and pending
    /// operand/operation; the accumulation flag is recomputed as "display
    /// differs from the neutral zero string". No-op when the stack is empty.
    pub fn undo(&mut self) {
        if let Some(snapshot) = self.undo_stack.pop() {
            self.accumulating = snapshot.display != "0";
            self.display = snapshot.display;
            self.pending_operand = snapshot.pending_operand;
            self.pending_op = snapshot.pending_op;
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            pending_operand: self.pending_operand,
            pending_op: self.pending_op,
        }
    }

    fn enter_digit(&mut self, digit: char) {
        if self.accumulating {
            self.display.push(digit);
        } else {
            self.display = digit.to_string();
            self.accumulating = true;
        }
    }

    fn enter_decimal(&mut self) {
        if !self.display.contains('.') {
            self.display.push('.');
            self.accumulating = true;
        } else if !self.accumulating {
            // Display is a completed result that already has a point
            self.display = "0.".to_string();
            self.accumulating = true;
        }
    }

    fn select_operation(&mut self, op: BinaryOp) {
        // Resolve first for left-to-right chaining without precedence
        if self.pending_op.is_some() && self.pending_operand.is_some() {
            self.resolve_pending();
        }
        self.pending_operand = Some(parse_display(&self.display));
        self.pending_op = Some(op);
        self.accumulating = false;
    }

    fn resolve_pending(&mut self) {
        let (Some(left), Some(op)) = (self.pending_operand, self.pending_op) else {
            return;
        };
        let right = parse_display(&self.display);

        match evaluate_binary(left, op, right) {
            Ok(result) => {
                self.display = format_value(result);
                let expression = format!(
                    "{} {} {}",
                    format_value(left),
                    op.symbol(),
                    format_value(right)
                );
                self.history = self
                    .history
                    .record(HistoryEntry::new(expression, self.display.clone()));
            }
            Err(_) => {
                self.display = ERROR_DISPLAY.to_string();
            }
        }

        self.pending_operand = None;
        self.pending_op = None;
        self.accumulating = false;
    }

    fn apply_unary(&mut self, function: UnaryFunction) {
        let input = parse_display(&self.display);
        self.display = match apply_function(function, input) {
            Ok(result) => format_value(result),
            Err(_) => ERROR_DISPLAY.to_string(),
        };
        self.accumulating = false;
    }

    fn load_constant(&mut self, constant: Constant) {
        self.display = format_value(constant.value());
        self.accumulating = false;
    }

    fn clear(&mut self) {
        self.display = "0".to_string();
        self.pending_operand = None;
        self.pending_op = None;
        self.accumulating = false;
        self.undo_stack.clear();
    }
}
