// crates/requisite-config/src/lib.rs
// ============================================================================
// Module: Requisite Config Library
// Description: Canonical config model and validation for contracts.
// Purpose: Single source of truth for requisite.toml semantics.
// Dependencies: requisite-core, serde, toml
// ============================================================================

//! ## Overview
//! `requisite-config` loads `requisite.toml`, validates it fail-closed, and
//! builds a [`requisite_core::Contract`] with the configured message templates
//! and audit sink.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::AuditConfig;
pub use config::AuditSinkKind;
pub use config::CONFIG_ENV_VAR;
pub use config::ConfigError;
pub use config::DEFAULT_CONFIG_NAME;
pub use config::MessagesConfig;
pub use config::RequisiteConfig;
