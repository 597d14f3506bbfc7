//! Memory and Undo
//!
//! This example demonstrates the memory register and single-step undo.
//!
//! Key concepts:
//! - Memory is independent of the display and survives clears
//! - Every input event is snapshotted first, so undo steps back one event
//! - Clear empties the undo stack but leaves memory and history alone
//!
//! Run with: cargo run --example memory_and_undo

use tally::{BinaryOp, Calculator, InputEvent};

fn main() {
    println!("=== Memory and Undo Example ===\n");

    let mut calc = Calculator::new();

    // Store 5 + 3 into memory one value at a time
    calc.handle_input(InputEvent::Digit('5'));
    calc.handle_input(InputEvent::MemoryAdd);
    calc.handle_input(InputEvent::Digit('3'));
    calc.handle_input(InputEvent::MemoryAdd);
    println!("M+ 5, M+ 3 -> memory = {}", calc.memory());

    calc.handle_input(InputEvent::MemoryRecall);
    println!("MR         -> display = {}", calc.display());

    // Clear wipes the evaluation state, not the register
    calc.handle_input(InputEvent::Clear);
    println!("C          -> display = {}, memory = {}", calc.display(), calc.memory());

    // Undo steps back over the last event
    calc.handle_input(InputEvent::Digit('7'));
    calc.handle_input(InputEvent::BinaryOp(BinaryOp::Multiply));
    println!("7, *       -> display = {}", calc.display());
    calc.undo();
    println!("undo       -> display = {} (operation forgotten)", calc.display());

    println!("\n=== Example Complete ===");
}
