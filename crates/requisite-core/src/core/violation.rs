// crates/requisite-core/src/core/violation.rs
// ============================================================================
// Module: Contract Violations
// Description: Default failure objects for precondition and postcondition checks.
// Purpose: Give callers typed, inspectable failures with stable messages.
// Dependencies: crate::core::{context, kind}, serde_json, thiserror
// ============================================================================

//! ## Overview
//! [`ContractViolation`] is what the default factory produces. Precondition
//! failures are argument errors naming the offending parameter; postcondition
//! failures carry only the message and the context, since they describe an
//! internal invariant rather than caller input. `Display` is exactly the
//! rendered message.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use thiserror::Error;

use crate::core::context::FailureContext;
use crate::core::kind::RequirementKind;
use crate::core::kind::RequirementType;

// ============================================================================
// SECTION: Argument Errors
// ============================================================================

/// Classification of a precondition failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentErrorKind {
    /// A required value was absent.
    Null,
    /// An ordered value fell outside its bounds.
    OutOfRange,
    /// A value did not match, or matched, an equality target.
    Mismatch,
    /// Any other invalid argument.
    Invalid,
}

/// Invalid argument reported by a failed precondition.
///
/// # Invariants
/// - `parameter` equals the context's `ValueExpression`.
/// - `actual_value` is set exactly for [`ArgumentErrorKind::OutOfRange`] and
///   [`ArgumentErrorKind::Mismatch`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ArgumentError {
    /// Failure classification.
    kind: ArgumentErrorKind,
    /// Rendered message.
    message: String,
    /// Name of the invalid argument.
    parameter: String,
    /// Offending value for ordering and equality failures.
    actual_value: Option<Value>,
    /// Structured failure context.
    context: FailureContext,
}

impl ArgumentError {
    /// Builds an argument error from a rendered message and its context.
    #[must_use]
    pub fn from_context(message: String, context: FailureContext) -> Self {
        let requirement = context.kind();
        let (kind, actual_value) = match requirement {
            _ if requirement.is_ordering() => {
                (ArgumentErrorKind::OutOfRange, context.value().cloned())
            }
            RequirementKind::Equal | RequirementKind::NotEqual => {
                (ArgumentErrorKind::Mismatch, context.value().cloned())
            }
            RequirementKind::NotNull => (ArgumentErrorKind::Null, None),
            _ => (ArgumentErrorKind::Invalid, None),
        };
        Self {
            kind,
            message,
            parameter: context.value_expression().to_string(),
            actual_value,
            context,
        }
    }

    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> ArgumentErrorKind {
        self.kind
    }

    /// Returns the rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the invalid argument name.
    #[must_use]
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Returns the offending value for ordering and equality failures.
    #[must_use]
    pub const fn actual_value(&self) -> Option<&Value> {
        self.actual_value.as_ref()
    }

    /// Returns the failure context.
    #[must_use]
    pub const fn context(&self) -> &FailureContext {
        &self.context
    }
}

// ============================================================================
// SECTION: Postcondition Errors
// ============================================================================

/// Internal invariant violation reported by a failed postcondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PostconditionError {
    /// Rendered message.
    message: String,
    /// Structured failure context.
    context: FailureContext,
}

impl PostconditionError {
    /// Builds a postcondition error from a rendered message and its context.
    #[must_use]
    pub const fn new(message: String, context: FailureContext) -> Self {
        Self {
            message,
            context,
        }
    }

    /// Returns the rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the failure context.
    #[must_use]
    pub const fn context(&self) -> &FailureContext {
        &self.context
    }
}

// ============================================================================
// SECTION: Contract Violation
// ============================================================================

/// Failure produced by the default factory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// Caller passed an invalid argument.
    #[error(transparent)]
    Precondition(#[from] ArgumentError),
    /// Operation broke its own guarantee.
    #[error(transparent)]
    Postcondition(#[from] PostconditionError),
}

impl ContractViolation {
    /// Returns the rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Precondition(error) => error.message(),
            Self::Postcondition(error) => error.message(),
        }
    }

    /// Returns the failure context.
    #[must_use]
    pub const fn context(&self) -> &FailureContext {
        match self {
            Self::Precondition(error) => error.context(),
            Self::Postcondition(error) => error.context(),
        }
    }

    /// Returns the entry point that raised the failure.
    #[must_use]
    pub const fn requirement_type(&self) -> RequirementType {
        self.context().requirement_type()
    }

    /// Returns the requirement name.
    #[must_use]
    pub const fn requirement_name(&self) -> &'static str {
        self.context().requirement_name()
    }

    /// Returns the argument error for precondition failures.
    #[must_use]
    pub const fn as_argument_error(&self) -> Option<&ArgumentError> {
        match self {
            Self::Precondition(error) => Some(error),
            Self::Postcondition(_) => None,
        }
    }
}
