// crates/requisite-core/src/runtime/check.rs
// ============================================================================
// Module: Check Entry Points
// Description: Requires/Ensures subjects and the failure-reporting pipeline.
// Purpose: Evaluate a requirement and turn a failure into the caller's error.
// Dependencies: crate::{audit, core, interfaces, runtime::predicates}, serde
// ============================================================================

//! ## Overview
//! [`Requires::that`] and [`Ensures::that`] wrap a value in a [`Subject`].
//! Each terminal method evaluates one requirement. On pass the original value
//! is returned unchanged; on fail the subject runs the reporting pipeline:
//!
//! 1. build the [`FailureContext`] for the kind,
//! 2. resolve the template (per-call, then contract override, then default),
//! 3. render the message,
//! 4. report to the audit sink, if any,
//! 5. hand message and context to the failure factory.
//!
//! The subject is consumed by the terminal method, so every check produces
//! exactly one outcome.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::marker::PhantomData;

use serde::Serialize;

use crate::audit::AuditRedaction;
use crate::audit::ContractAuditEvent;
use crate::audit::ContractAuditSink;
use crate::core::ContractViolation;
use crate::core::FailureContext;
use crate::core::MessageTemplate;
use crate::core::Operand;
use crate::core::RequirementDetail;
use crate::core::RequirementKind;
use crate::core::RequirementType;
use crate::core::capture;
use crate::core::datatype_name;
use crate::core::render;
use crate::interfaces::FailureFactory;
use crate::runtime::factory::DefaultFailureFactory;
use crate::runtime::predicates;
use crate::runtime::predicates::IsEmpty;

// ============================================================================
// SECTION: Entry Points
// ============================================================================

/// Precondition entry point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Requires;

impl Requires {
    /// Starts a precondition check on `value`, named `expression` in messages.
    pub fn that<'a, T>(value: T, expression: impl Into<Cow<'a, str>>) -> Subject<'a, T> {
        Subject::new(RequirementType::Precondition, value, expression.into())
    }
}

/// Postcondition entry point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ensures;

impl Ensures {
    /// Starts a postcondition check on `value`, named `expression` in messages.
    pub fn that<'a, T>(value: T, expression: impl Into<Cow<'a, str>>) -> Subject<'a, T> {
        Subject::new(RequirementType::Postcondition, value, expression.into())
    }
}

// ============================================================================
// SECTION: Reporting State
// ============================================================================

/// Everything a failed check needs besides the value itself.
struct Reporter<'a, F> {
    /// Entry point that created the subject.
    requirement_type: RequirementType,
    /// Source text of the checked value.
    expression: Cow<'a, str>,
    /// Per-call template; replaces every other template when set.
    template: Option<Cow<'a, str>>,
    /// Per-kind templates from a contract.
    overrides: Option<&'a BTreeMap<RequirementKind, MessageTemplate>>,
    /// Audit sink and the redaction it receives.
    audit: Option<(&'a dyn ContractAuditSink, AuditRedaction)>,
    /// Failure factory.
    factory: F,
}

impl<'a, F> Reporter<'a, F> {
    /// Returns the template used for `kind`.
    fn template_for(&self, kind: RequirementKind) -> Cow<'a, str> {
        if let Some(template) = &self.template {
            return template.clone();
        }
        match self.overrides.and_then(|overrides| overrides.get(&kind)) {
            Some(template) => Cow::Borrowed(template.as_str()),
            None => Cow::Owned(kind.default_template()),
        }
    }

    /// Runs the failure pipeline for a failed requirement.
    fn fail<E>(self, detail: RequirementDetail) -> E
    where
        F: FailureFactory<E>,
    {
        let kind = detail.kind();
        let template = self.template_for(kind);
        let context = FailureContext::new(self.requirement_type, self.expression, detail);
        let message = render(&template, &context);
        if let Some((sink, redaction)) = self.audit {
            sink.record(&ContractAuditEvent::new(&template, &message, &context, redaction));
        }
        self.factory.create(message, context)
    }
}

// ============================================================================
// SECTION: Subject
// ============================================================================

/// A value awaiting one requirement check.
///
/// `E` is the error returned on failure and `F` the factory producing it.
#[must_use = "a subject does nothing until a requirement is checked"]
pub struct Subject<'a, T, E = ContractViolation, F = DefaultFailureFactory> {
    /// Checked value.
    value: T,
    /// Failure reporting state.
    reporter: Reporter<'a, F>,
    /// Failure type marker.
    failure: PhantomData<fn() -> E>,
}

impl<'a, T> Subject<'a, T> {
    /// Creates a subject with the default template and factory.
    pub(crate) const fn new(
        requirement_type: RequirementType,
        value: T,
        expression: Cow<'a, str>,
    ) -> Self {
        Self {
            value,
            reporter: Reporter {
                requirement_type,
                expression,
                template: None,
                overrides: None,
                audit: None,
                factory: DefaultFailureFactory,
            },
            failure: PhantomData,
        }
    }
}

impl<'a, T, E, F> Subject<'a, T, E, F> {
    /// Replaces the message template for this check.
    pub fn with_template(mut self, template: impl Into<Cow<'a, str>>) -> Self {
        self.reporter.template = Some(template.into());
        self
    }

    /// Uses per-kind template overrides below the per-call template.
    pub(crate) fn with_overrides(
        mut self,
        overrides: &'a BTreeMap<RequirementKind, MessageTemplate>,
    ) -> Self {
        self.reporter.overrides = Some(overrides);
        self
    }

    /// Reports a failure of this check to `sink` before the factory runs.
    pub fn with_audit(mut self, sink: &'a dyn ContractAuditSink, redaction: AuditRedaction) -> Self {
        self.reporter.audit = Some((sink, redaction));
        self
    }

    /// Replaces the failure factory with a closure.
    pub fn with_factory<E2, F2>(self, factory: F2) -> Subject<'a, T, E2, F2>
    where
        F2: Fn(String, FailureContext) -> E2,
    {
        self.with_failure_factory(factory)
    }

    /// Replaces the failure factory with any [`FailureFactory`].
    pub fn with_failure_factory<E2, F2>(self, factory: F2) -> Subject<'a, T, E2, F2>
    where
        F2: FailureFactory<E2>,
    {
        let Reporter {
            requirement_type,
            expression,
            template,
            overrides,
            audit,
            factory: _,
        } = self.reporter;
        Subject {
            value: self.value,
            reporter: Reporter {
                requirement_type,
                expression,
                template,
                overrides,
                audit,
                factory,
            },
            failure: PhantomData,
        }
    }

    /// Returns the checked value.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the source text of the checked value.
    pub fn expression(&self) -> &str {
        &self.reporter.expression
    }

    /// Returns the entry point that created this subject.
    pub const fn requirement_type(&self) -> RequirementType {
        self.reporter.requirement_type
    }
}

// ============================================================================
// SECTION: Presence
// ============================================================================

impl<T, E, F: FailureFactory<E>> Subject<'_, Option<T>, E, F> {
    /// Requires the value to be present and returns it unwrapped.
    ///
    /// # Errors
    ///
    /// Returns the factory's failure when the value is `None`.
    pub fn not_null(self) -> Result<T, E> {
        if predicates::is_not_null(&self.value)
            && let Some(value) = self.value
        {
            return Ok(value);
        }
        Err(self.reporter.fail(RequirementDetail::NotNull))
    }
}

impl<T, E, F: FailureFactory<E>> Subject<'_, T, E, F> {
    /// Requires the value to differ from its type's default.
    ///
    /// # Errors
    ///
    /// Returns the factory's failure when the value equals `T::default()`.
    pub fn not_default(self) -> Result<T, E>
    where
        T: Default + PartialEq,
    {
        if predicates::is_not_default(&self.value) {
            return Ok(self.value);
        }
        Err(self.reporter.fail(RequirementDetail::NotDefault {
            value_datatype: datatype_name::<T>(),
        }))
    }

    // ------------------------------------------------------------------------
    // Equality
    // ------------------------------------------------------------------------

    /// Requires the value to equal `target`.
    ///
    /// # Errors
    ///
    /// Returns the factory's failure when the values differ.
    pub fn equal<B>(self, target: Operand<B>) -> Result<T, E>
    where
        T: PartialEq<B> + Serialize,
        B: Serialize,
    {
        if predicates::is_equal(&self.value, target.value()) {
            return Ok(self.value);
        }
        Err(self.reporter.fail(RequirementDetail::Equal {
            value: capture(&self.value),
            target: target.into_field(),
        }))
    }

    /// Requires the value to differ from `target`.
    ///
    /// # Errors
    ///
    /// Returns the factory's failure when the values are equal.
    pub fn not_equal<B>(self, target: Operand<B>) -> Result<T, E>
    where
        T: PartialEq<B> + Serialize,
        B: Serialize,
    {
        if predicates::is_not_equal(&self.value, target.value()) {
            return Ok(self.value);
        }
        Err(self.reporter.fail(RequirementDetail::NotEqual {
            value: capture(&self.value),
            target: target.into_field(),
        }))
    }

    // ------------------------------------------------------------------------
    // Ordering
    // ------------------------------------------------------------------------

    /// Requires `value < upper`.
    ///
    /// # Errors
    ///
    /// Returns the factory's failure when the value is not strictly below the
    /// bound or the two are incomparable.
    pub fn less_than<B>(self, upper: Operand<B>) -> Result<T, E>
    where
        T: PartialOrd<B> + Serialize,
        B: Serialize,
    {
        if predicates::is_less_than(&self.value, upper.value()) {
            return Ok(self.value);
        }
        Err(self.reporter.fail(RequirementDetail::LessThan {
            value: capture(&self.value),
            upper_bound: upper.into_field(),
        }))
    }

    /// Requires `value <= upper`.
    ///
    /// # Errors
    ///
    /// Returns the factory's failure when the value is above the bound or the
    /// two are incomparable.
    pub fn less_than_or_equal<B>(self, upper: Operand<B>) -> Result<T, E>
    where
        T: PartialOrd<B> + Serialize,
        B: Serialize,
    {
        if predicates::is_less_than_or_equal(&self.value, upper.value()) {
            return Ok(self.value);
        }
        Err(self.reporter.fail(RequirementDetail::LessThanOrEqual {
            value: capture(&self.value),
            upper_bound: upper.into_field(),
        }))
    }

    /// Requires `value > lower`.
    ///
    /// # Errors
    ///
    /// Returns the factory's failure when the value is not strictly above the
    /// bound or the two are incomparable.
    pub fn greater_than<B>(self, lower: Operand<B>) -> Result<T, E>
    where
        T: PartialOrd<B> + Serialize,
        B: Serialize,
    {
        if predicates::is_greater_than(&self.value, lower.value()) {
            return Ok(self.value);
        }
        Err(self.reporter.fail(RequirementDetail::GreaterThan {
            value: capture(&self.value),
            lower_bound: lower.into_field(),
        }))
    }

    /// Requires `value >= lower`.
    ///
    /// # Errors
    ///
    /// Returns the factory's failure when the value is below the bound or the
    /// two are incomparable.
    pub fn greater_than_or_equal<B>(self, lower: Operand<B>) -> Result<T, E>
    where
        T: PartialOrd<B> + Serialize,
        B: Serialize,
    {
        if predicates::is_greater_than_or_equal(&self.value, lower.value()) {
            return Ok(self.value);
        }
        Err(self.reporter.fail(RequirementDetail::GreaterThanOrEqual {
            value: capture(&self.value),
            lower_bound: lower.into_field(),
        }))
    }

    /// Requires `lower <= value <= upper`.
    ///
    /// # Errors
    ///
    /// Returns the factory's failure when the value lies outside the range.
    pub fn in_range<B>(self, lower: Operand<B>, upper: Operand<B>) -> Result<T, E>
    where
        T: PartialOrd<B> + Serialize,
        B: Serialize,
    {
        if predicates::is_in_range(&self.value, lower.value(), upper.value()) {
            return Ok(self.value);
        }
        Err(self.reporter.fail(RequirementDetail::InRange {
            value: capture(&self.value),
            lower_bound: lower.into_field(),
            upper_bound: upper.into_field(),
        }))
    }

    // ------------------------------------------------------------------------
    // Text and collections
    // ------------------------------------------------------------------------

    /// Requires every character to be an ASCII digit.
    ///
    /// # Errors
    ///
    /// Returns the factory's failure when a non-digit character is present.
    pub fn digits_only(self) -> Result<T, E>
    where
        T: AsRef<str>,
    {
        if predicates::is_digits_only(self.value.as_ref()) {
            return Ok(self.value);
        }
        Err(self.reporter.fail(RequirementDetail::DigitsOnly {
            value: capture(self.value.as_ref()),
        }))
    }

    /// Requires text with at least one non-whitespace character.
    ///
    /// # Errors
    ///
    /// Returns the factory's failure when the text is empty or blank.
    pub fn not_empty_or_white_space(self) -> Result<T, E>
    where
        T: AsRef<str>,
    {
        if predicates::is_not_empty_or_white_space(self.value.as_ref()) {
            return Ok(self.value);
        }
        Err(self.reporter.fail(RequirementDetail::NotEmptyOrWhiteSpace {
            value: capture(self.value.as_ref()),
        }))
    }

    /// Requires a non-empty collection or text.
    ///
    /// # Errors
    ///
    /// Returns the factory's failure when the value holds no elements.
    pub fn not_empty(self) -> Result<T, E>
    where
        T: IsEmpty,
    {
        if predicates::is_not_empty(&self.value) {
            return Ok(self.value);
        }
        Err(self.reporter.fail(RequirementDetail::NotEmpty {
            value_datatype: datatype_name::<T>(),
        }))
    }
}

// ============================================================================
// SECTION: Conditions
// ============================================================================

impl<E, F: FailureFactory<E>> Subject<'_, bool, E, F> {
    /// Requires the condition to hold.
    ///
    /// # Errors
    ///
    /// Returns the factory's failure when the condition is false.
    pub fn is_true(self) -> Result<bool, E> {
        if self.value {
            return Ok(true);
        }
        Err(self.reporter.fail(RequirementDetail::True))
    }
}
