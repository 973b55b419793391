// crates/requisite-core/tests/audit.rs
// ============================================================================
// Module: Audit Tests
// Description: Audit sinks, redaction, and contract-level routing.
// Purpose: Ensure violations are reported once and never alter the outcome.
// ============================================================================
//! ## Overview
//! Integration tests covering audit events emitted by failed checks.

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

use std::fs;
use std::sync::Arc;

use requisite_core::AuditRedaction;
use requisite_core::Contract;
use requisite_core::FileAuditSink;
use requisite_core::MemoryAuditSink;
use requisite_core::Operand;
use requisite_core::RequirementKind;
use requisite_core::RequirementType;
use requisite_core::Requires;
use serde_json::Value;
use serde_json::json;
use support::TestResult;
use support::ensure;
use support::expect_failure;

// ============================================================================
// SECTION: Subject-Level Audit
// ============================================================================

#[test]
fn failed_check_records_one_event() -> TestResult {
    let sink = MemoryAuditSink::new();
    let error = expect_failure(
        Requires::that(3, "threads").with_audit(&sink, AuditRedaction::Full).greater_than(Operand::of(4)),
        "3 > 4",
    )?;
    let events = sink.events();
    ensure(events.len() == 1, "exactly one event per failure")?;
    let event = &events[0];
    ensure(event.event == "contract_violation", "event identifier")?;
    ensure(event.requirement_type == RequirementType::Precondition, "requirement type")?;
    ensure(event.requirement_name == "GreaterThan", "requirement name")?;
    ensure(event.message == error.message(), "audit sees the rendered message")?;
    ensure(event.fields == *error.context(), "audit sees the same context")?;
    Ok(())
}

#[test]
fn passing_check_records_nothing() -> TestResult {
    let sink = MemoryAuditSink::new();
    let value =
        Requires::that(5, "threads").with_audit(&sink, AuditRedaction::Full).greater_than(Operand::of(4))?;
    ensure(value == 5, "value returned")?;
    ensure(sink.events().is_empty(), "no event on pass")?;
    Ok(())
}

#[test]
fn redacted_events_hide_values_but_not_the_failure() -> TestResult {
    let sink = MemoryAuditSink::new();
    let error = expect_failure(
        Requires::that("hunter2", "password")
            .with_audit(&sink, AuditRedaction::ValuesRedacted)
            .not_equal(Operand::new("hunter2", "previous")),
        "same password",
    )?;
    ensure(
        error.message() == "Precondition NotEqual failed: password must not be equal to hunter2",
        format!("caller message keeps values: {}", error.message()),
    )?;
    let events = sink.events();
    let event = events.first().ok_or("missing event")?;
    ensure(event.redaction == AuditRedaction::ValuesRedacted, "redaction recorded")?;
    ensure(
        event.message == "Precondition NotEqual failed: password must not be equal to <redacted>",
        format!("unexpected audit message: {}", event.message),
    )?;
    let payload = serde_json::to_value(event)?;
    ensure(payload["fields"]["Value"] == json!("<redacted>"), "value hidden in payload")?;
    ensure(payload["fields"]["TargetExpression"] == json!("previous"), "expression kept")?;
    ensure(payload["redaction"] == json!("values_redacted"), "redaction serialized")?;
    Ok(())
}

// ============================================================================
// SECTION: File Sink
// ============================================================================

#[test]
fn file_sink_appends_json_lines() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("violations.jsonl");
    let sink = FileAuditSink::new(&path)?;
    for attempt in 0 .. 2 {
        expect_failure(
            Requires::that(attempt, "attempt")
                .with_audit(&sink, AuditRedaction::Full)
                .greater_than(Operand::of(5)),
            "attempt",
        )?;
    }
    let text = fs::read_to_string(&path)?;
    let lines = text.lines().map(serde_json::from_str::<Value>).collect::<Result<Vec<_>, _>>()?;
    ensure(lines.len() == 2, "one line per violation")?;
    ensure(lines[1]["fields"]["Value"] == json!(1), "second attempt recorded")?;
    ensure(lines[0]["requirement_type"] == json!("Precondition"), "type recorded")?;
    Ok(())
}

// ============================================================================
// SECTION: Contract
// ============================================================================

#[test]
fn contract_routes_overrides_and_audit() -> TestResult {
    let sink = Arc::new(MemoryAuditSink::new());
    let contract = Contract::new()
        .with_template(RequirementKind::NotEmptyOrWhiteSpace, "{ValueExpression} is blank")
        .with_audit_sink(sink.clone())
        .with_redaction(AuditRedaction::ValuesRedacted);

    let error = expect_failure(contract.requires("  ", "title").not_empty_or_white_space(), "blank")?;
    ensure(error.message() == "title is blank", "contract override applied")?;

    let error = expect_failure(contract.ensures(Vec::<u8>::new(), "out").not_empty(), "empty")?;
    ensure(
        error.message() == "Postcondition NotEmpty failed: out must not be empty",
        "kinds without override use the default",
    )?;

    let error = expect_failure(
        contract
            .requires("  ", "title")
            .with_template("custom {ValueExpression}")
            .not_empty_or_white_space(),
        "per-call",
    )?;
    ensure(error.message() == "custom title", "per-call template wins over the contract")?;

    ensure(sink.events().len() == 3, "every failure audited")?;
    ensure(
        contract.template_for(RequirementKind::True).as_str()
            == "{RequirementType} {RequirementName} failed: {ValueExpression} must be true",
        "template_for falls back to the default",
    )?;
    Ok(())
}
