//! Scientific Functions
//!
//! This example demonstrates single-value functions, constants, and the
//! error-marker convention for undefined results.
//!
//! Key concepts:
//! - Functions apply immediately to the display, without touching history
//! - Constants overwrite the display with their decimal representation
//! - Undefined results surface as the error marker, never as a panic
//!
//! Run with: cargo run --example scientific_functions

use tally::{BinaryOp, Calculator, Constant, InputEvent, UnaryFunction};

fn main() {
    println!("=== Scientific Functions Example ===\n");

    let mut calc = Calculator::new();

    // cos(pi)
    calc.handle_input(InputEvent::Constant(Constant::Pi));
    println!("pi         -> {}", calc.display());
    calc.handle_input(InputEvent::Function(UnaryFunction::Cos));
    println!("cos(pi)    -> {}", calc.display());

    // ln(e)
    calc.handle_input(InputEvent::Constant(Constant::E));
    calc.handle_input(InputEvent::Function(UnaryFunction::Ln));
    println!("ln(e)      -> {}", calc.display());

    // log10 of a negative number is undefined
    calc.handle_input(InputEvent::Digit('5'));
    calc.handle_input(InputEvent::BinaryOp(BinaryOp::Subtract));
    calc.handle_input(InputEvent::Digit('9'));
    calc.handle_input(InputEvent::Equals);
    println!("5 - 9      -> {}", calc.display());
    calc.handle_input(InputEvent::Function(UnaryFunction::Log10));
    println!("log10(-4)  -> {}", calc.display());

    // Any further input recovers from the error display
    calc.handle_input(InputEvent::Digit('3'));
    println!("digit 3    -> {}", calc.display());

    println!("\nHistory length: {} (functions record nothing)", calc.history().len());

    println!("\n=== Example Complete ===");
}
