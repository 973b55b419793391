// crates/requisite-core/src/audit.rs
// ============================================================================
// Module: Contract Audit Logging
// Description: Structured audit events for failed requirement checks.
// Purpose: Emit violation records without hard logging dependencies.
// Dependencies: crate::core, serde, serde_json
// ============================================================================

//! ## Overview
//! Each failed check can be reported to a [`ContractAuditSink`] after its
//! message is rendered and before the failure factory runs. Sinks observe
//! only; they cannot change or suppress the failure. Deployments route the
//! JSON-line payloads to whatever logging pipeline they already run.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Deserialize;
use serde::Serialize;

use crate::core::FailureContext;
use crate::core::RequirementType;
use crate::core::render;

// ============================================================================
// SECTION: Types
// ============================================================================

/// How much caller data an audit event may carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditRedaction {
    /// Values and bounds are logged as captured.
    #[default]
    Full,
    /// Values and bounds are replaced by a redaction marker.
    ValuesRedacted,
}

/// Contract violation audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct ContractAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Entry point that raised the failure.
    pub requirement_type: RequirementType,
    /// Requirement name.
    pub requirement_name: &'static str,
    /// Rendered message (re-rendered from redacted fields when redacting).
    pub message: String,
    /// Redaction classification for payload logging.
    pub redaction: AuditRedaction,
    /// Failure context fields.
    pub fields: FailureContext,
}

impl ContractAuditEvent {
    /// Creates a violation event with a consistent timestamp.
    #[must_use]
    pub fn new(
        template: &str,
        message: &str,
        context: &FailureContext,
        redaction: AuditRedaction,
    ) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        let (message, fields) = match redaction {
            AuditRedaction::Full => (message.to_string(), context.clone()),
            AuditRedaction::ValuesRedacted => {
                let redacted = context.redacted();
                (render(template, &redacted), redacted)
            }
        };
        Self {
            event: "contract_violation",
            timestamp_ms,
            requirement_type: context.requirement_type(),
            requirement_name: context.requirement_name(),
            message,
            redaction,
            fields,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for contract violations.
pub trait ContractAuditSink: Send + Sync {
    /// Record a violation event.
    fn record(&self, event: &ContractAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl ContractAuditSink for StderrAuditSink {
    fn record(&self, event: &ContractAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl ContractAuditSink for FileAuditSink {
    fn record(&self, event: &ContractAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// Audit sink that keeps events in memory.
#[derive(Default)]
pub struct MemoryAuditSink {
    /// Recorded events in arrival order.
    events: Mutex<Vec<ContractAuditEvent>>,
}

impl MemoryAuditSink {
    /// Creates an empty in-memory sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<ContractAuditEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl ContractAuditSink for MemoryAuditSink {
    fn record(&self, event: &ContractAuditEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl ContractAuditSink for NoopAuditSink {
    fn record(&self, _event: &ContractAuditEvent) {}
}
