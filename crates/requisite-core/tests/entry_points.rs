// crates/requisite-core/tests/entry_points.rs
// ============================================================================
// Module: Entry Point Tests
// Description: Pass/fail behavior of every Requires/Ensures requirement.
// Purpose: Ensure passing checks return the value and failing checks return Err.
// ============================================================================
//! ## Overview
//! Integration tests covering each terminal check on both entry points.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use std::collections::BTreeMap;
use std::collections::HashSet;

use requisite_core::ArgumentErrorKind;
use requisite_core::ContractViolation;
use requisite_core::Ensures;
use requisite_core::Operand;
use requisite_core::RequirementKind;
use requisite_core::RequirementType;
use requisite_core::Requires;
use requisite_core::ensures;
use requisite_core::operand;
use requisite_core::requires;
use support::TestResult;
use support::ensure;
use support::expect_failure;

// ============================================================================
// SECTION: Presence
// ============================================================================

#[test]
fn not_null_returns_inner_value() -> TestResult {
    let name = Requires::that(Some(String::from("ada")), "name").not_null()?;
    ensure(name == "ada", "not_null should unwrap the present value")?;
    let port = Requires::that(Some(0_u16), "port").not_null()?;
    ensure(port == 0, "a present default value is not null")?;
    Ok(())
}

#[test]
fn not_null_fails_on_absent_value() -> TestResult {
    let error = expect_failure(Requires::that(None::<u32>, "port").not_null(), "absent")?;
    ensure(error.requirement_name() == "NotNull", "kind should be NotNull")?;
    ensure(
        error.message() == "Precondition NotNull failed: port must not be null",
        format!("unexpected message: {}", error.message()),
    )?;
    let argument = error.as_argument_error().ok_or("precondition should be an argument error")?;
    ensure(argument.kind() == ArgumentErrorKind::Null, "NotNull maps to a null argument")?;
    ensure(argument.parameter() == "port", "parameter should be the value expression")?;
    ensure(argument.actual_value().is_none(), "null failures carry no actual value")?;
    Ok(())
}

#[test]
fn not_default_checks_type_default() -> TestResult {
    ensure(Requires::that(7_u64, "id").not_default()? == 7, "non-default passes")?;
    let error = expect_failure(Requires::that(0_u64, "id").not_default(), "zero")?;
    ensure(error.context().kind() == RequirementKind::NotDefault, "kind should be NotDefault")?;
    let error = expect_failure(Requires::that(String::new(), "label").not_default(), "empty")?;
    ensure(
        error.message() == "Precondition NotDefault failed: label must not be the default value of String",
        format!("unexpected message: {}", error.message()),
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Equality
// ============================================================================

#[test]
fn equal_and_not_equal() -> TestResult {
    let expected = 3;
    ensure(Requires::that(3, "count").equal(operand!(expected))? == 3, "equal passes")?;
    let error = expect_failure(Requires::that(4, "count").equal(operand!(expected)), "equal")?;
    ensure(
        error.message() == "Precondition Equal failed: count must be equal to 3",
        format!("unexpected message: {}", error.message()),
    )?;

    ensure(Requires::that("a", "mode").not_equal(Operand::of("b"))? == "a", "not_equal passes")?;
    let error = expect_failure(Requires::that("b", "mode").not_equal(Operand::of("b")), "ne")?;
    ensure(error.requirement_name() == "NotEqual", "kind should be NotEqual")?;
    Ok(())
}

// ============================================================================
// SECTION: Ordering
// ============================================================================

#[test]
fn ordering_checks_pass_and_fail() -> TestResult {
    ensure(Requires::that(1, "n").less_than(Operand::of(2))? == 1, "1 < 2")?;
    ensure(Requires::that(2, "n").less_than_or_equal(Operand::of(2))? == 2, "2 <= 2")?;
    ensure(Requires::that(3, "n").greater_than(Operand::of(2))? == 3, "3 > 2")?;
    ensure(Requires::that(2, "n").greater_than_or_equal(Operand::of(2))? == 2, "2 >= 2")?;
    ensure(Requires::that(5, "n").in_range(Operand::of(1), Operand::of(5))? == 5, "5 in 1..=5")?;

    expect_failure(Requires::that(2, "n").less_than(Operand::of(2)), "2 < 2")?;
    expect_failure(Requires::that(3, "n").less_than_or_equal(Operand::of(2)), "3 <= 2")?;
    expect_failure(Requires::that(2, "n").greater_than(Operand::of(2)), "2 > 2")?;
    expect_failure(Requires::that(1, "n").greater_than_or_equal(Operand::of(2)), "1 >= 2")?;
    expect_failure(Requires::that(6, "n").in_range(Operand::of(1), Operand::of(5)), "6 in range")?;
    expect_failure(Requires::that(0, "n").in_range(Operand::of(1), Operand::of(5)), "0 in range")?;
    Ok(())
}

#[test]
fn ordering_failures_are_out_of_range() -> TestResult {
    let error = expect_failure(Requires::that(11, "n").less_than(Operand::of(10)), "11 < 10")?;
    let argument = error.as_argument_error().ok_or("expected argument error")?;
    ensure(argument.kind() == ArgumentErrorKind::OutOfRange, "ordering maps to out of range")?;
    ensure(argument.actual_value() == Some(&serde_json::json!(11)), "actual value recorded")?;
    Ok(())
}

#[test]
fn equality_failures_carry_actual_value() -> TestResult {
    let error = expect_failure(Requires::that(4, "port").equal(Operand::of(5)), "4 == 5")?;
    let argument = error.as_argument_error().ok_or("expected argument error")?;
    ensure(argument.kind() == ArgumentErrorKind::Mismatch, "Equal maps to mismatch")?;
    ensure(argument.actual_value() == Some(&serde_json::json!(4)), "actual value recorded")?;

    let error = expect_failure(Requires::that(5, "port").not_equal(Operand::of(5)), "5 != 5")?;
    let argument = error.as_argument_error().ok_or("expected argument error")?;
    ensure(argument.kind() == ArgumentErrorKind::Mismatch, "NotEqual maps to mismatch")?;
    ensure(argument.actual_value() == Some(&serde_json::json!(5)), "actual value recorded")?;

    let error = expect_failure(Requires::that("x1", "zip").digits_only(), "letter")?;
    let argument = error.as_argument_error().ok_or("expected argument error")?;
    ensure(argument.kind() == ArgumentErrorKind::Invalid, "text kinds stay invalid")?;
    ensure(argument.actual_value().is_none(), "invalid carries no actual value")?;
    Ok(())
}

#[test]
fn nan_never_satisfies_ordering() -> TestResult {
    expect_failure(Requires::that(f64::NAN, "ratio").less_than(Operand::of(1.0)), "nan <")?;
    expect_failure(Requires::that(f64::NAN, "ratio").greater_than_or_equal(Operand::of(0.0)), "nan >=")?;
    expect_failure(Requires::that(0.5, "ratio").less_than(Operand::of(f64::NAN)), "< nan")?;
    ensure(Requires::that(0.5, "ratio").less_than(Operand::of(1.0)).is_ok(), "0.5 < 1.0")?;
    Ok(())
}

#[test]
fn absent_values_sort_first() -> TestResult {
    ensure(
        Requires::that(None::<i32>, "low").less_than(Operand::of(Some(i32::MIN))).is_ok(),
        "absent sorts before every present value",
    )?;
    ensure(
        Requires::that(None::<i32>, "low").greater_than_or_equal(Operand::of(None)).is_ok(),
        "two absent values are equal",
    )?;
    expect_failure(
        Requires::that(None::<i32>, "low").greater_than(Operand::of(Some(0))),
        "absent above present",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Text and Collections
// ============================================================================

#[test]
fn digits_only_is_ascii() -> TestResult {
    ensure(Requires::that("0123", "pin").digits_only()? == "0123", "digits pass")?;
    ensure(Requires::that("", "pin").digits_only().is_ok(), "empty text passes")?;
    expect_failure(Requires::that("12a", "pin").digits_only(), "letter")?;
    expect_failure(Requires::that("١٢", "pin").digits_only(), "non-ascii digits")?;
    Ok(())
}

#[test]
fn not_empty_covers_text_and_collections() -> TestResult {
    ensure(Requires::that(vec![1], "items").not_empty().is_ok(), "vec with element")?;
    ensure(Requires::that("x", "text").not_empty().is_ok(), "text with char")?;
    expect_failure(Requires::that(Vec::<u8>::new(), "items").not_empty(), "empty vec")?;
    expect_failure(Requires::that(BTreeMap::<u8, u8>::new(), "map").not_empty(), "empty map")?;
    expect_failure(Requires::that(HashSet::<u8>::new(), "set").not_empty(), "empty set")?;
    expect_failure(Requires::that("", "text").not_empty(), "empty text")?;
    Ok(())
}

#[test]
fn not_empty_or_white_space_rejects_blank_text() -> TestResult {
    ensure(Requires::that(" a ", "title").not_empty_or_white_space().is_ok(), "padded text")?;
    expect_failure(Requires::that(" \t\n", "title").not_empty_or_white_space(), "blank")?;
    expect_failure(Requires::that(String::new(), "title").not_empty_or_white_space(), "empty")?;
    Ok(())
}

#[test]
fn is_true_checks_condition() -> TestResult {
    ensure(Requires::that(true, "ready").is_true()?, "true passes")?;
    let error = expect_failure(Requires::that(false, "ready").is_true(), "false")?;
    ensure(
        error.message() == "Precondition True failed: ready must be true",
        format!("unexpected message: {}", error.message()),
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Postconditions and Macros
// ============================================================================

#[test]
fn ensures_reports_postcondition() -> TestResult {
    let error = expect_failure(Ensures::that(-1, "balance").greater_than_or_equal(Operand::of(0)), "neg")?;
    ensure(error.requirement_type() == RequirementType::Postcondition, "type is postcondition")?;
    ensure(matches!(error, ContractViolation::Postcondition(_)), "postcondition variant")?;
    ensure(error.as_argument_error().is_none(), "postconditions are not argument errors")?;
    ensure(
        error.to_string()
            == "Postcondition GreaterThanOrEqual failed: balance must be greater than or equal to 0",
        format!("unexpected message: {error}"),
    )?;
    Ok(())
}

#[test]
fn macros_capture_source_text() -> TestResult {
    let retries = 9;
    let limit = 5;
    let error = expect_failure(requires!(retries).less_than_or_equal(operand!(limit)), "macro")?;
    ensure(
        error.message() == "Precondition LessThanOrEqual failed: retries must be less than or equal to 5",
        format!("unexpected message: {}", error.message()),
    )?;
    ensure(error.context().value_expression() == "retries", "expression from stringify")?;

    let total = 0_u32;
    let error = expect_failure(ensures!(total, "sum").not_default(), "explicit expression")?;
    ensure(error.context().value_expression() == "sum", "explicit expression wins")?;
    Ok(())
}
