//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated input sequences.

use proptest::prelude::*;
use tally::core::format_value;
use tally::{BinaryOp, Calculator, History, HistoryEntry, InputEvent};

fn type_digits(calc: &mut Calculator, digits: &str) {
    for digit in digits.chars() {
        calc.handle_input(InputEvent::Digit(digit));
    }
}

prop_compose! {
    fn arbitrary_digit()(value in 0..10u32) -> char {
        char::from_digit(value, 10).unwrap()
    }
}

prop_compose! {
    fn digit_run()(digits in prop::collection::vec(arbitrary_digit(), 1..10)) -> String {
        digits.into_iter().collect()
    }
}

prop_compose! {
    fn arbitrary_op()(variant in 0..5u8) -> BinaryOp {
        match variant {
            0 => BinaryOp::Add,
            1 => BinaryOp::Subtract,
            2 => BinaryOp::Multiply,
            3 => BinaryOp::Divide,
            _ => BinaryOp::Power,
        }
    }
}

fn entry_event() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        arbitrary_digit().prop_map(InputEvent::Digit),
        Just(InputEvent::Decimal),
    ]
}

proptest! {
    #[test]
    fn digit_runs_concatenate(run in digit_run()) {
        let mut calc = Calculator::new();
        type_digits(&mut calc, &run);
        prop_assert_eq!(calc.display(), run);
    }

    #[test]
    fn display_never_has_two_decimal_points(
        events in prop::collection::vec(entry_event(), 1..20)
    ) {
        let mut calc = Calculator::new();
        for event in events {
            calc.handle_input(event);
        }
        let points = calc.display().matches('.').count();
        prop_assert!(points <= 1);
    }

    #[test]
    fn addition_chains_left_to_right(
        a in 0..1000u32,
        b in 0..1000u32,
        c in 0..1000u32,
    ) {
        let mut calc = Calculator::new();
        type_digits(&mut calc, &a.to_string());
        calc.handle_input(InputEvent::BinaryOp(BinaryOp::Add));
        type_digits(&mut calc, &b.to_string());
        calc.handle_input(InputEvent::BinaryOp(BinaryOp::Add));
        type_digits(&mut calc, &c.to_string());
        calc.handle_input(InputEvent::Equals);

        prop_assert_eq!(calc.display(), format_value(f64::from(a + b + c)));
        prop_assert_eq!(calc.history().len(), 2);
        prop_assert_eq!(
            calc.history().entries()[0].expression.clone(),
            format!("{a} + {b}")
        );
    }

    #[test]
    fn division_by_zero_recovers_on_next_digit(
        left in digit_run(),
        next in arbitrary_digit(),
    ) {
        let mut calc = Calculator::new();
        type_digits(&mut calc, &left);
        calc.handle_input(InputEvent::BinaryOp(BinaryOp::Divide));
        calc.handle_input(InputEvent::Digit('0'));
        calc.handle_input(InputEvent::Equals);
        prop_assert_eq!(calc.display(), "Error");
        prop_assert!(calc.history().is_empty());

        calc.handle_input(InputEvent::Digit(next));
        prop_assert_eq!(calc.display(), next.to_string());
    }

    #[test]
    fn undo_restores_display_before_operation(
        run in digit_run(),
        op in arbitrary_op(),
    ) {
        let mut calc = Calculator::new();
        type_digits(&mut calc, &run);
        calc.handle_input(InputEvent::BinaryOp(op));

        calc.undo();

        prop_assert_eq!(calc.display(), run);
    }

    #[test]
    fn equals_without_pending_is_idempotent(
        run in digit_run(),
        presses in 1..5usize,
    ) {
        let mut calc = Calculator::new();
        type_digits(&mut calc, &run);
        let before = calc.display().to_string();

        for _ in 0..presses {
            calc.handle_input(InputEvent::Equals);
        }

        prop_assert_eq!(calc.display(), before);
        prop_assert!(calc.history().is_empty());
    }

    #[test]
    fn memory_accumulates_typed_values(
        first in 0..10_000u32,
        second in 0..10_000u32,
    ) {
        let mut calc = Calculator::new();
        calc.handle_input(InputEvent::MemoryClear);
        type_digits(&mut calc, &first.to_string());
        calc.handle_input(InputEvent::MemoryAdd);
        type_digits(&mut calc, &second.to_string());
        calc.handle_input(InputEvent::MemoryAdd);
        calc.handle_input(InputEvent::MemoryRecall);

        prop_assert_eq!(calc.display(), format_value(f64::from(first + second)));
    }

    #[test]
    fn clear_preserves_memory_and_history(
        stored in 1..1000u32,
        left in 1..100u32,
        right in 1..100u32,
    ) {
        let mut calc = Calculator::new();
        type_digits(&mut calc, &stored.to_string());
        calc.handle_input(InputEvent::MemoryAdd);
        type_digits(&mut calc, &left.to_string());
        calc.handle_input(InputEvent::BinaryOp(BinaryOp::Multiply));
        type_digits(&mut calc, &right.to_string());
        calc.handle_input(InputEvent::Equals);

        calc.handle_input(InputEvent::Clear);

        prop_assert_eq!(calc.display(), "0");
        prop_assert_eq!(calc.memory(), f64::from(stored));
        prop_assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn history_roundtrip_serialization(
        expressions in prop::collection::vec("[0-9 +*/-]{1,12}", 0..5)
    ) {
        let mut history = History::new();
        for expression in &expressions {
            history = history.record(HistoryEntry::new(expression.clone(), "1"));
        }

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(history.len(), deserialized.len());
    }
}
