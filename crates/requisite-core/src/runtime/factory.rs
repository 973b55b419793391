// crates/requisite-core/src/runtime/factory.rs
// ============================================================================
// Module: Default Failure Factory
// Description: Requirement-type-specific construction of contract violations.
// Purpose: Map preconditions to argument errors and postconditions to invariant errors.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The default policy mirrors the split between caller error and internal
//! error: a failed precondition becomes an [`ArgumentError`] naming the
//! offending parameter, a failed postcondition becomes a
//! [`PostconditionError`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ArgumentError;
use crate::core::ContractViolation;
use crate::core::FailureContext;
use crate::core::PostconditionError;
use crate::core::RequirementType;
use crate::interfaces::FailureFactory;

// ============================================================================
// SECTION: Default Factory
// ============================================================================

/// Factory used when the caller supplies none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultFailureFactory;

impl FailureFactory<ContractViolation> for DefaultFailureFactory {
    fn create(&self, message: String, context: FailureContext) -> ContractViolation {
        match context.requirement_type() {
            RequirementType::Precondition => {
                ContractViolation::Precondition(ArgumentError::from_context(message, context))
            }
            RequirementType::Postcondition => {
                ContractViolation::Postcondition(PostconditionError::new(message, context))
            }
        }
    }
}
