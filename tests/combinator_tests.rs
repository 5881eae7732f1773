//! Unit tests for predicate, transform, and sink composition.

#![cfg(feature = "combinator")]

use seqflow::combinator::{
    ArityError, InvocationError, and, and_all, compose, constant, fallible, identity, not, or,
    or_all, tee, then, then_all, try_tee, try_then,
};
use seqflow::{all, any};
use std::cell::{Cell, RefCell};

// =============================================================================
// Predicate conjunction and disjunction
// =============================================================================

#[test]
fn test_and_matches_plain_conjunction() {
    let starts_with_a = |name: &&str| name.starts_with('A');
    let longer_than_three = |name: &&str| name.len() > 3;
    let condition = and(starts_with_a, longer_than_three);

    assert!(!condition(&"Ana"));
    assert!(condition(&"Andrew"));
    assert!(!condition(&"Bogdan"));
}

#[test]
fn test_and_skips_right_operand_when_left_false() {
    let evaluations = Cell::new(0);
    let gate = |n: &i32| *n > 0;
    let counting = |_: &i32| {
        evaluations.set(evaluations.get() + 1);
        true
    };

    let condition = and(gate, counting);
    assert!(!condition(&-1));
    assert_eq!(evaluations.get(), 0);

    assert!(condition(&1));
    assert_eq!(evaluations.get(), 1);
}

#[test]
fn test_or_skips_right_operand_when_left_true() {
    let evaluations = Cell::new(0);
    let gate = |n: &i32| *n > 0;
    let counting = |_: &i32| {
        evaluations.set(evaluations.get() + 1);
        false
    };

    let condition = or(gate, counting);
    assert!(condition(&1));
    assert_eq!(evaluations.get(), 0);

    assert!(!condition(&-1));
    assert_eq!(evaluations.get(), 1);
}

#[test]
fn test_not_inverts() {
    let even = |n: &i32| n % 2 == 0;
    let odd = not(even);
    assert!(odd(&3));
    assert!(!odd(&8));
}

#[test]
fn test_composed_predicate_snapshots_captured_values() {
    let threshold = 10;
    let over = move |n: &i32| *n > threshold;
    let under_double = move |n: &i32| *n < threshold * 2;
    let in_band = and(over, under_double);

    assert!(in_band(&15));
    assert!(!in_band(&5));
    assert!(!in_band(&25));
}

// =============================================================================
// N-ary composition and arity errors
// =============================================================================

#[test]
fn test_and_all_evaluates_left_to_right() {
    let order = RefCell::new(Vec::new());
    let conditions: Vec<Box<dyn Fn(&i32) -> bool + '_>> = vec![
        Box::new(|n| *n > 0),
        Box::new(|n| {
            order.borrow_mut().push(*n);
            n % 2 == 0
        }),
    ];
    let composed = and_all(conditions).unwrap();

    assert!(!composed(&-2)); // first operand fails, second never runs
    assert!(composed(&4));
    drop(composed);
    assert_eq!(order.into_inner(), vec![4]);
}

#[test]
fn test_and_all_zero_operands_is_construction_error() {
    let empty: Vec<fn(&u8) -> bool> = Vec::new();
    assert_eq!(
        and_all(empty).map(|_| ()).unwrap_err(),
        ArityError {
            combinator: "and_all"
        }
    );
}

#[test]
fn test_then_all_applies_left_to_right() {
    let steps: Vec<fn(i32) -> i32> = vec![|n| n + 1, |n| n * 2, |n| n - 3];
    let chained = then_all(steps).unwrap();
    assert_eq!(chained(5), 9);
}

#[test]
fn test_then_all_zero_operands_is_construction_error() {
    let empty: Vec<fn(u8) -> u8> = Vec::new();
    assert_eq!(
        then_all(empty).map(|_| ()).unwrap_err(),
        ArityError {
            combinator: "then_all"
        }
    );
}

#[test]
fn test_or_all_single_operand_is_identity() {
    let composed = or_all(vec![|n: &i32| *n == 7]).unwrap();
    assert!(composed(&7));
    assert!(!composed(&8));
}

// =============================================================================
// Variadic macros
// =============================================================================

#[test]
fn test_all_macro_three_operands() {
    let positive = |n: &i32| *n > 0;
    let even = |n: &i32| n % 2 == 0;
    let small = |n: &i32| *n < 100;

    let wanted = all!(positive, even, small);
    assert!(wanted(&42));
    assert!(!wanted(&-2));
    assert!(!wanted(&43));
    assert!(!wanted(&200));
}

#[test]
fn test_any_macro_short_circuits() {
    let evaluations = Cell::new(0);
    let counting = |_: &i32| {
        evaluations.set(evaluations.get() + 1);
        false
    };

    let composed = any!(|n: &i32| *n == 1, |n: &i32| *n == 2, counting);
    assert!(composed(&2));
    assert_eq!(evaluations.get(), 0);
}

// =============================================================================
// Transform chaining
// =============================================================================

#[test]
fn test_then_converts_and_measures() {
    let render = |n: i32| n.to_string();
    let measure = |s: String| s.len();
    let digits = then(render, measure);

    assert_eq!(digits(129), 3);
    assert_eq!(digits(7), 1);
}

#[test]
fn test_compose_applies_inner_first() {
    let add_one = |n: i32| n + 1;
    let double = |n: i32| n * 2;

    assert_eq!(compose(add_one, double)(5), 11);
    assert_eq!(then(add_one, double)(5), 12);
}

#[test]
fn test_identity_is_composition_unit() {
    let double = |n: i32| n * 2;
    assert_eq!(then(identity, double)(21), double(21));
    assert_eq!(then(double, identity)(21), double(21));
}

#[test]
fn test_constant_ignores_input() {
    let always = constant::<_, i32>("fixed");
    assert_eq!(always(1), "fixed");
    assert_eq!(always(-1), "fixed");
}

// =============================================================================
// Fallible chains
// =============================================================================

#[test]
fn test_fallible_tags_the_originating_stage() {
    let parse = fallible("parse", |s: &str| s.parse::<i32>());
    let error = parse("x").unwrap_err();
    assert_eq!(error.stage, "parse");
    assert!(!error.message.is_empty());
}

#[test]
fn test_try_then_propagates_first_failure_only() {
    let invocations = Cell::new(0);
    let parse = fallible("parse", |s: &str| s.parse::<i32>());
    let counting = |n: i32| {
        invocations.set(invocations.get() + 1);
        Ok::<_, InvocationError>(n * 2)
    };
    let chain = try_then(parse, counting);

    assert_eq!(chain("21").unwrap(), 42);
    assert_eq!(invocations.get(), 1);

    assert_eq!(chain("x").unwrap_err().stage, "parse");
    assert_eq!(invocations.get(), 1); // second stage skipped on failure
}

// =============================================================================
// Sink chaining
// =============================================================================

#[test]
fn test_tee_delivers_to_both_sinks_in_order() {
    let log = RefCell::new(Vec::new());
    let greet = |name: &&str| log.borrow_mut().push(format!("Hello {name}!"));
    let wish = |_: &&str| log.borrow_mut().push("Have a nice day".to_string());

    let greeting = tee(greet, wish);
    greeting(&"Alex");
    drop(greeting);

    assert_eq!(
        log.into_inner(),
        vec!["Hello Alex!".to_string(), "Have a nice day".to_string()]
    );
}

#[test]
fn test_try_tee_skips_second_sink_after_failure() {
    let delivered = Cell::new(0);
    let rejecting = |n: &i32| {
        if *n < 0 {
            Err(InvocationError {
                stage: "validate",
                message: format!("negative input {n}"),
            })
        } else {
            Ok(())
        }
    };
    let counting = |_: &i32| {
        delivered.set(delivered.get() + 1);
        Ok(())
    };
    let chained = try_tee(rejecting, counting);

    assert!(chained(&3).is_ok());
    assert_eq!(delivered.get(), 1);

    assert_eq!(chained(&-3).unwrap_err().stage, "validate");
    assert_eq!(delivered.get(), 1);
}
