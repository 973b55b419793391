// crates/requisite-core/src/lib.rs
// ============================================================================
// Module: Requisite Root
// Description: Public API surface for design-by-contract checks.
// Purpose: Wire together core types, runtime checks, auditing, and macros.
// Dependencies: crate::{audit, core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Requisite provides precondition ([`Requires`]) and postcondition
//! ([`Ensures`]) checks over values. A passing check returns the value
//! unchanged. A failing check builds a [`FailureContext`], renders a message
//! from a template, and returns the failure produced by a [`FailureFactory`]
//! as `Err`.
//!
//! ```
//! use requisite_core::ContractViolation;
//! use requisite_core::Operand;
//! use requisite_core::Requires;
//!
//! fn reserve(count: u32) -> Result<u32, ContractViolation> {
//!     Requires::that(count, "count").greater_than_or_equal(Operand::of(1))
//! }
//!
//! let error = reserve(0).unwrap_err();
//! assert_eq!(
//!     error.message(),
//!     "Precondition GreaterThanOrEqual failed: count must be greater than or equal to 1"
//! );
//! ```

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod audit;
pub mod core;
pub mod interfaces;
pub mod runtime;

#[cfg(test)]
mod tests;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::AuditRedaction;
pub use audit::ContractAuditEvent;
pub use audit::ContractAuditSink;
pub use audit::FileAuditSink;
pub use audit::MemoryAuditSink;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use crate::core::ArgumentError;
pub use crate::core::ArgumentErrorKind;
pub use crate::core::ContextField;
pub use crate::core::ContractViolation;
pub use crate::core::FailureContext;
pub use crate::core::FieldName;
pub use crate::core::MessageTemplate;
pub use crate::core::Operand;
pub use crate::core::OperandField;
pub use crate::core::PostconditionError;
pub use crate::core::RequirementDetail;
pub use crate::core::RequirementKind;
pub use crate::core::RequirementType;
pub use crate::core::render;
pub use interfaces::FailureFactory;
pub use runtime::Contract;
pub use runtime::DefaultFailureFactory;
pub use runtime::Ensures;
pub use runtime::IsEmpty;
pub use runtime::Requires;
pub use runtime::Subject;

// ============================================================================
// SECTION: Macros
// ============================================================================

/// Starts a precondition check, using the argument's source text as its
/// expression.
///
/// ```
/// use requisite_core::requires;
///
/// let name = "ada";
/// assert_eq!(requires!(name).not_empty_or_white_space().ok(), Some("ada"));
/// ```
#[macro_export]
macro_rules! requires {
    ($value:expr) => {
        $crate::Requires::that($value, stringify!($value))
    };
    ($value:expr, $expression:expr) => {
        $crate::Requires::that($value, $expression)
    };
}

/// Starts a postcondition check, using the argument's source text as its
/// expression.
#[macro_export]
macro_rules! ensures {
    ($value:expr) => {
        $crate::Ensures::that($value, stringify!($value))
    };
    ($value:expr, $expression:expr) => {
        $crate::Ensures::that($value, $expression)
    };
}

/// Builds an [`Operand`] named by its source text.
#[macro_export]
macro_rules! operand {
    ($value:expr) => {
        $crate::Operand::new($value, stringify!($value))
    };
    ($value:expr, $expression:expr) => {
        $crate::Operand::new($value, $expression)
    };
}
