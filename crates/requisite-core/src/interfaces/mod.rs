// crates/requisite-core/src/interfaces/mod.rs
// ============================================================================
// Module: Requisite Interfaces
// Description: Caller-pluggable strategies used by the check pipeline.
// Purpose: Define the failure factory contract.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! A failure factory turns a rendered message and its context into the value
//! returned as `Err` from a failed check. Factories are supplied per call and
//! are never retained past it. Any `Fn(String, FailureContext) -> E` closure
//! is a factory.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::FailureContext;

// ============================================================================
// SECTION: Failure Factory
// ============================================================================

/// Builds the failure object for a failed requirement.
///
/// The message is always rendered before the factory runs, so it is identical
/// whichever factory is used.
pub trait FailureFactory<E> {
    /// Creates the failure for a rendered message and its context.
    fn create(&self, message: String, context: FailureContext) -> E;
}

impl<E, F> FailureFactory<E> for F
where
    F: Fn(String, FailureContext) -> E,
{
    fn create(&self, message: String, context: FailureContext) -> E {
        self(message, context)
    }
}
