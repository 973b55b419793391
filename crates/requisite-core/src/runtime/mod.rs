// crates/requisite-core/src/runtime/mod.rs
// ============================================================================
// Module: Requisite Runtime
// Description: Predicates, check entry points, factories, and contracts.
// Purpose: Evaluate requirements and report failures.
// Dependencies: crate::{audit, core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime pieces that execute checks. Predicates decide pass or fail;
//! subjects orchestrate failure reporting; contracts carry shared settings.

pub mod check;
pub mod contract;
pub mod factory;
pub mod predicates;

pub use check::Ensures;
pub use check::Requires;
pub use check::Subject;
pub use contract::Contract;
pub use factory::DefaultFailureFactory;
pub use predicates::IsEmpty;
