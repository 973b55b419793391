// crates/requisite-core/src/core/template.rs
// ============================================================================
// Module: Message Templates
// Description: Placeholder substitution over failure contexts.
// Purpose: Render diagnostic messages from `{FieldName}` templates.
// Dependencies: crate::core::{context, kind}
// ============================================================================

//! ## Overview
//! Templates use a fixed placeholder grammar: `{Identifier}` where the
//! identifier is `[A-Za-z_][A-Za-z0-9_]*`. Rendering is a pure function of
//! the template text and the failure context.
//!
//! Invariants:
//! - Placeholders naming a field the context carries are replaced by that
//!   field's text (see [`value_text`]).
//! - Any other placeholder is copied through literally, braces included.
//! - A `{` that does not open a well-formed placeholder is literal text; there
//!   is no escape syntax.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::context::FailureContext;
use crate::core::context::value_text;
use crate::core::kind::FieldName;
use crate::core::kind::RequirementKind;

// ============================================================================
// SECTION: Segments
// ============================================================================

/// Parsed piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text copied as-is.
    Literal(&'a str),
    /// Placeholder identifier without braces.
    Placeholder(&'a str),
}

/// Returns the length of the identifier at the start of `bytes`, if any.
fn identifier_len(bytes: &[u8]) -> Option<usize> {
    let first = *bytes.first()?;
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return None;
    }
    let len = bytes.iter().take_while(|byte| byte.is_ascii_alphanumeric() || **byte == b'_').count();
    Some(len)
}

/// Splits a template into literal and placeholder segments.
#[must_use]
pub fn parse_segments(template: &str) -> Vec<Segment<'_>> {
    let bytes = template.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut index = 0;

    while index < bytes.len() {
        if bytes[index] == b'{'
            && let Some(len) = identifier_len(&bytes[index + 1 ..])
            && bytes.get(index + 1 + len) == Some(&b'}')
        {
            if literal_start < index {
                segments.push(Segment::Literal(&template[literal_start .. index]));
            }
            segments.push(Segment::Placeholder(&template[index + 1 .. index + 1 + len]));
            index += len + 2;
            literal_start = index;
            continue;
        }
        index += 1;
    }

    if literal_start < bytes.len() {
        segments.push(Segment::Literal(&template[literal_start ..]));
    }
    segments
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders `template` against `context`.
#[must_use]
pub fn render(template: &str, context: &FailureContext) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    for segment in parse_segments(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(name) => match context.get_by_name(name) {
                Some(value) => out.push_str(&value_text(&value)),
                None => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            },
        }
    }
    out
}

// ============================================================================
// SECTION: Message Template
// ============================================================================

/// Owned message template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTemplate(String);

impl MessageTemplate {
    /// Wraps template text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the built-in template for a kind.
    #[must_use]
    pub fn for_kind(kind: RequirementKind) -> Self {
        Self(kind.default_template())
    }

    /// Returns the template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the placeholder identifiers in order of appearance.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&str> {
        parse_segments(&self.0)
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(name),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Returns the placeholders that `kind` has no field for.
    #[must_use]
    pub fn unresolved_for(&self, kind: RequirementKind) -> Vec<&str> {
        self.placeholders()
            .into_iter()
            .filter(|name| !FieldName::parse(name).is_some_and(|field| kind.has_field(field)))
            .collect()
    }

    /// Renders the template against a failure context.
    #[must_use]
    pub fn render(&self, context: &FailureContext) -> String {
        render(&self.0, context)
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MessageTemplate {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for MessageTemplate {
    fn from(text: String) -> Self {
        Self(text)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
