//! Basic Arithmetic
//!
//! This example demonstrates driving the calculator engine with keypad
//! events and reading back the display and history.
//!
//! Key concepts:
//! - One input event at a time, handled to completion
//! - Left-to-right chaining with no operator precedence
//! - History entries recorded for each completed evaluation
//!
//! Run with: cargo run --example basic_arithmetic

use tally::{BinaryOp, Calculator, InputEvent};

fn type_digits(calc: &mut Calculator, digits: &str) {
    for digit in digits.chars() {
        calc.handle_input(InputEvent::Digit(digit));
    }
}

fn main() {
    println!("=== Basic Arithmetic Example ===\n");

    let mut calc = Calculator::new();

    // 12 + 7.5 =
    type_digits(&mut calc, "12");
    calc.handle_input(InputEvent::BinaryOp(BinaryOp::Add));
    type_digits(&mut calc, "7");
    calc.handle_input(InputEvent::Decimal);
    type_digits(&mut calc, "5");
    calc.handle_input(InputEvent::Equals);
    println!("12 + 7.5 = {}", calc.display());

    // Chain onto the result: * 2 =
    calc.handle_input(InputEvent::BinaryOp(BinaryOp::Multiply));
    type_digits(&mut calc, "2");
    calc.handle_input(InputEvent::Equals);
    println!("... * 2 = {}", calc.display());

    println!("\nHistory (newest first):");
    for entry in calc.history().entries().iter().rev() {
        println!("  {} = {}", entry.expression, entry.result);
    }

    println!("\n=== Example Complete ===");
}
