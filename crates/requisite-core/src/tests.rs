// crates/requisite-core/src/tests.rs
// ============================================================================
// Module: Requisite Unit Tests
// Description: Crate-internal tests for template resolution and capture.
// Purpose: Cover crate-private wiring the integration tests cannot reach.
// Dependencies: requisite-core
// ============================================================================

//! ## Overview
//! Unit tests for crate-private subject wiring, with test-only lint
//! relaxations.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

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

// ============================================================================
// SECTION: Tests
// ============================================================================

use std::collections::BTreeMap;

use crate::core::MessageTemplate;
use crate::core::Operand;
use crate::core::RequirementKind;
use crate::runtime::Requires;

#[test]
fn overrides_apply_only_to_their_kind() {
    let mut overrides = BTreeMap::new();
    overrides.insert(RequirementKind::LessThan, MessageTemplate::new("{ValueExpression} too big"));

    let error =
        Requires::that(9, "n").with_overrides(&overrides).less_than(Operand::of(5)).unwrap_err();
    assert_eq!(error.message(), "n too big");

    let error =
        Requires::that(1, "n").with_overrides(&overrides).greater_than(Operand::of(5)).unwrap_err();
    assert_eq!(error.message(), "Precondition GreaterThan failed: n must be greater than 5");
}

#[test]
fn per_call_template_beats_overrides() {
    let mut overrides = BTreeMap::new();
    overrides.insert(RequirementKind::True, MessageTemplate::new("override"));

    let error = Requires::that(false, "ready")
        .with_overrides(&overrides)
        .with_template("per-call {ValueExpression}")
        .is_true()
        .unwrap_err();
    assert_eq!(error.message(), "per-call ready");
}

#[test]
fn operand_without_expression_uses_value_text() {
    let field = Operand::of("limit").into_field();
    assert_eq!(field.expression, "limit");
    let field = Operand::new(3, "max").into_field();
    assert_eq!(field.expression, "max");
    assert_eq!(field.value, serde_json::json!(3));
}

#[test]
fn emptiness_covers_std_collections() {
    use std::collections::HashMap;
    use std::collections::VecDeque;

    use crate::runtime::predicates::is_not_empty;
    use crate::runtime::predicates::is_not_null;

    assert!(!is_not_empty(""));
    assert!(is_not_empty(&[1_u8; 2]));
    assert!(!is_not_empty(&[0_u8; 0]));
    assert!(!is_not_empty(&VecDeque::<u8>::new()));
    assert!(!is_not_empty(&HashMap::<u8, u8>::new()));
    assert!(is_not_empty(&Some(0)));
    assert!(is_not_null(&Some(())));
    assert!(!is_not_null(&None::<u8>));
}
