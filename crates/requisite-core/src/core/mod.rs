// crates/requisite-core/src/core/mod.rs
// ============================================================================
// Module: Requisite Core Types
// Description: Requirement kinds, failure contexts, templates, and violations.
// Purpose: Provide the stable data model of the failure-reporting pipeline.
// Dependencies: serde, serde_json, smallvec, thiserror
// ============================================================================

//! ## Overview
//! Core types describe what a failed check looks like: which requirement
//! failed, the structured context captured at failure time, the template used
//! to describe it, and the default failure objects. They hold no state between
//! checks.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod context;
pub mod datatype;
pub mod kind;
pub mod template;
pub mod violation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use context::ContextField;
pub use context::FailureContext;
pub use context::Operand;
pub use context::OperandField;
pub use context::REDACTED;
pub use context::RequirementDetail;
pub use context::UNSERIALIZABLE;
pub use context::capture;
pub use context::value_text;
pub use datatype::canonical_name;
pub use datatype::datatype_name;
pub use kind::FieldName;
pub use kind::RequirementKind;
pub use kind::RequirementType;
pub use template::MessageTemplate;
pub use template::Segment;
pub use template::parse_segments;
pub use template::render;
pub use violation::ArgumentError;
pub use violation::ArgumentErrorKind;
pub use violation::ContractViolation;
pub use violation::PostconditionError;
