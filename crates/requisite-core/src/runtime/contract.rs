// crates/requisite-core/src/runtime/contract.rs
// ============================================================================
// Module: Contract
// Description: Shared check settings: template overrides and audit routing.
// Purpose: Let an application configure messages and auditing once.
// Dependencies: crate::{audit, core, runtime::check}
// ============================================================================

//! ## Overview
//! A [`Contract`] is an immutable bundle of per-kind template overrides and an
//! audit sink. Subjects created through it resolve templates as per-call
//! template, then the contract's override for the kind, then the built-in
//! default. Contracts are `Send + Sync` and can be shared behind an `Arc`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::audit::AuditRedaction;
use crate::audit::ContractAuditSink;
use crate::audit::NoopAuditSink;
use crate::core::MessageTemplate;
use crate::core::RequirementKind;
use crate::runtime::check::Ensures;
use crate::runtime::check::Requires;
use crate::runtime::check::Subject;

// ============================================================================
// SECTION: Contract
// ============================================================================

/// Shared settings for requirement checks.
#[derive(Clone)]
pub struct Contract {
    /// Template overrides keyed by kind.
    templates: BTreeMap<RequirementKind, MessageTemplate>,
    /// Sink receiving violation events.
    audit: Arc<dyn ContractAuditSink>,
    /// Redaction applied to audit events.
    redaction: AuditRedaction,
}

impl Contract {
    /// Creates a contract with default templates and no auditing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            templates: BTreeMap::new(),
            audit: Arc::new(NoopAuditSink),
            redaction: AuditRedaction::Full,
        }
    }

    /// Overrides the template for one kind.
    #[must_use]
    pub fn with_template(mut self, kind: RequirementKind, template: impl Into<MessageTemplate>) -> Self {
        self.templates.insert(kind, template.into());
        self
    }

    /// Routes violation events to `sink`.
    #[must_use]
    pub fn with_audit_sink(mut self, sink: Arc<dyn ContractAuditSink>) -> Self {
        self.audit = sink;
        self
    }

    /// Sets the redaction applied to audit events.
    #[must_use]
    pub const fn with_redaction(mut self, redaction: AuditRedaction) -> Self {
        self.redaction = redaction;
        self
    }

    /// Returns the template a failure of `kind` renders with, absent a per-call template.
    #[must_use]
    pub fn template_for(&self, kind: RequirementKind) -> MessageTemplate {
        self.templates.get(&kind).cloned().unwrap_or_else(|| MessageTemplate::for_kind(kind))
    }

    /// Returns the configured overrides.
    #[must_use]
    pub const fn templates(&self) -> &BTreeMap<RequirementKind, MessageTemplate> {
        &self.templates
    }

    /// Returns the audit redaction.
    #[must_use]
    pub const fn redaction(&self) -> AuditRedaction {
        self.redaction
    }

    /// Starts a precondition check governed by this contract.
    pub fn requires<'a, T>(&'a self, value: T, expression: impl Into<Cow<'a, str>>) -> Subject<'a, T> {
        self.govern(Requires::that(value, expression))
    }

    /// Starts a postcondition check governed by this contract.
    pub fn ensures<'a, T>(&'a self, value: T, expression: impl Into<Cow<'a, str>>) -> Subject<'a, T> {
        self.govern(Ensures::that(value, expression))
    }

    /// Attaches overrides and auditing to a fresh subject.
    fn govern<'a, T>(&'a self, subject: Subject<'a, T>) -> Subject<'a, T> {
        subject.with_overrides(&self.templates).with_audit(self.audit.as_ref(), self.redaction)
    }
}

impl Default for Contract {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contract")
            .field("templates", &self.templates)
            .field("redaction", &self.redaction)
            .finish_non_exhaustive()
    }
}
