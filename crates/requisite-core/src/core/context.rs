// crates/requisite-core/src/core/context.rs
// ============================================================================
// Module: Failure Context
// Description: Structured record describing a failed requirement check.
// Purpose: Hold a fixed per-kind field schema with an enumerable mapping view.
// Dependencies: crate::core::kind, serde, serde_json, smallvec
// ============================================================================

//! ## Overview
//! A [`FailureContext`] is built fresh for each failed check and consumed by
//! the renderer, the audit sink, and the failure factory. The per-kind payload
//! lives in [`RequirementDetail`], a tagged union whose variants fix the field
//! schema at compile time. Callers that inspect failures generically use
//! [`FailureContext::fields`] or [`FailureContext::get`], which expose the same
//! data as an ordered name-to-value mapping.
//!
//! Invariants:
//! - `fields()` yields exactly `kind().fields()`, in that order.
//! - Field values are captured at failure time and never mutated afterwards.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;
use serde_json::Map;
use serde_json::Value;
use smallvec::SmallVec;

use crate::core::kind::FieldName;
use crate::core::kind::RequirementKind;
use crate::core::kind::RequirementType;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Placeholder stored when a value cannot be serialized.
pub const UNSERIALIZABLE: &str = "<unserializable>";

/// Placeholder stored for payload fields in redacted contexts.
pub const REDACTED: &str = "<redacted>";

// ============================================================================
// SECTION: Value Capture
// ============================================================================

/// Captures a value as a dynamically typed context field.
#[must_use]
pub fn capture<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|_| Value::String(UNSERIALIZABLE.to_string()))
}

/// Returns the textual form of a captured value.
///
/// Strings render verbatim, `null` renders empty, and composite values render
/// as compact JSON.
#[must_use]
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

// ============================================================================
// SECTION: Operands
// ============================================================================

/// A comparison operand together with its source expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand<B> {
    /// Operand value.
    value: B,
    /// Source text; `None` means the value's own text is used.
    expression: Option<String>,
}

impl<B> Operand<B> {
    /// Creates an operand with an explicit source expression.
    pub fn new(value: B, expression: impl Into<String>) -> Self {
        Self {
            value,
            expression: Some(expression.into()),
        }
    }

    /// Creates an operand whose expression is its rendered value.
    pub const fn of(value: B) -> Self {
        Self {
            value,
            expression: None,
        }
    }

    /// Returns the operand value.
    pub const fn value(&self) -> &B {
        &self.value
    }

    /// Returns the explicit source expression, if any.
    pub fn expression(&self) -> Option<&str> {
        self.expression.as_deref()
    }
}

impl<B: Serialize> Operand<B> {
    /// Captures the operand for a failure context.
    #[must_use]
    pub fn into_field(self) -> OperandField {
        let value = capture(&self.value);
        let expression = self.expression.unwrap_or_else(|| value_text(&value));
        OperandField {
            value,
            expression,
        }
    }
}

/// A captured operand inside a failure context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperandField {
    /// Captured operand value.
    pub value: Value,
    /// Source text of the operand.
    pub expression: String,
}

impl OperandField {
    /// Returns a copy with the value replaced by the redaction marker.
    fn redacted(&self) -> Self {
        Self {
            value: Value::String(REDACTED.to_string()),
            expression: self.expression.clone(),
        }
    }
}

// ============================================================================
// SECTION: Requirement Detail
// ============================================================================

/// Kind-specific payload of a failure context.
///
/// # Invariants
/// - Each variant carries exactly the non-common fields its kind declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementDetail {
    /// Absent optional value.
    NotNull,
    /// Value equal to its type default.
    NotDefault {
        /// Short type name of the value.
        value_datatype: String,
    },
    /// Value different from the target.
    Equal {
        /// Checked value.
        value: Value,
        /// Equality target.
        target: OperandField,
    },
    /// Value equal to the forbidden target.
    NotEqual {
        /// Checked value.
        value: Value,
        /// Forbidden target.
        target: OperandField,
    },
    /// Value not strictly below the bound.
    LessThan {
        /// Checked value.
        value: Value,
        /// Exclusive upper bound.
        upper_bound: OperandField,
    },
    /// Value above the bound.
    LessThanOrEqual {
        /// Checked value.
        value: Value,
        /// Inclusive upper bound.
        upper_bound: OperandField,
    },
    /// Value not strictly above the bound.
    GreaterThan {
        /// Checked value.
        value: Value,
        /// Exclusive lower bound.
        lower_bound: OperandField,
    },
    /// Value below the bound.
    GreaterThanOrEqual {
        /// Checked value.
        value: Value,
        /// Inclusive lower bound.
        lower_bound: OperandField,
    },
    /// Value outside the inclusive range.
    InRange {
        /// Checked value.
        value: Value,
        /// Inclusive lower bound.
        lower_bound: OperandField,
        /// Inclusive upper bound.
        upper_bound: OperandField,
    },
    /// Text containing a non-digit character.
    DigitsOnly {
        /// Checked text.
        value: Value,
    },
    /// Empty collection or text.
    NotEmpty {
        /// Short type name of the value.
        value_datatype: String,
    },
    /// Empty or whitespace-only text.
    NotEmptyOrWhiteSpace {
        /// Checked text.
        value: Value,
    },
    /// False condition.
    True,
}

impl RequirementDetail {
    /// Returns the requirement kind this detail belongs to.
    #[must_use]
    pub const fn kind(&self) -> RequirementKind {
        match self {
            Self::NotNull => RequirementKind::NotNull,
            Self::NotDefault {
                ..
            } => RequirementKind::NotDefault,
            Self::Equal {
                ..
            } => RequirementKind::Equal,
            Self::NotEqual {
                ..
            } => RequirementKind::NotEqual,
            Self::LessThan {
                ..
            } => RequirementKind::LessThan,
            Self::LessThanOrEqual {
                ..
            } => RequirementKind::LessThanOrEqual,
            Self::GreaterThan {
                ..
            } => RequirementKind::GreaterThan,
            Self::GreaterThanOrEqual {
                ..
            } => RequirementKind::GreaterThanOrEqual,
            Self::InRange {
                ..
            } => RequirementKind::InRange,
            Self::DigitsOnly {
                ..
            } => RequirementKind::DigitsOnly,
            Self::NotEmpty {
                ..
            } => RequirementKind::NotEmpty,
            Self::NotEmptyOrWhiteSpace {
                ..
            } => RequirementKind::NotEmptyOrWhiteSpace,
            Self::True => RequirementKind::True,
        }
    }

    /// Returns the checked value when this kind records it.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        match self {
            Self::Equal {
                value, ..
            }
            | Self::NotEqual {
                value, ..
            }
            | Self::LessThan {
                value, ..
            }
            | Self::LessThanOrEqual {
                value, ..
            }
            | Self::GreaterThan {
                value, ..
            }
            | Self::GreaterThanOrEqual {
                value, ..
            }
            | Self::InRange {
                value, ..
            }
            | Self::DigitsOnly {
                value,
            }
            | Self::NotEmptyOrWhiteSpace {
                value,
            } => Some(value),
            Self::NotNull
            | Self::True
            | Self::NotDefault {
                ..
            }
            | Self::NotEmpty {
                ..
            } => None,
        }
    }

    /// Returns the datatype name when this kind records it.
    fn value_datatype(&self) -> Option<&str> {
        match self {
            Self::NotDefault {
                value_datatype,
            }
            | Self::NotEmpty {
                value_datatype,
            } => Some(value_datatype.as_str()),
            _ => None,
        }
    }

    /// Returns the lower bound when this kind records it.
    const fn lower_bound(&self) -> Option<&OperandField> {
        match self {
            Self::GreaterThan {
                lower_bound, ..
            }
            | Self::GreaterThanOrEqual {
                lower_bound, ..
            }
            | Self::InRange {
                lower_bound, ..
            } => Some(lower_bound),
            _ => None,
        }
    }

    /// Returns the upper bound when this kind records it.
    const fn upper_bound(&self) -> Option<&OperandField> {
        match self {
            Self::LessThan {
                upper_bound, ..
            }
            | Self::LessThanOrEqual {
                upper_bound, ..
            }
            | Self::InRange {
                upper_bound, ..
            } => Some(upper_bound),
            _ => None,
        }
    }

    /// Returns the equality target when this kind records it.
    const fn target(&self) -> Option<&OperandField> {
        match self {
            Self::Equal {
                target, ..
            }
            | Self::NotEqual {
                target, ..
            } => Some(target),
            _ => None,
        }
    }

    /// Returns a copy with every payload value replaced by the redaction marker.
    fn redacted(&self) -> Self {
        let hidden = || Value::String(REDACTED.to_string());
        match self {
            Self::Equal {
                target, ..
            } => Self::Equal {
                value: hidden(),
                target: target.redacted(),
            },
            Self::NotEqual {
                target, ..
            } => Self::NotEqual {
                value: hidden(),
                target: target.redacted(),
            },
            Self::LessThan {
                upper_bound, ..
            } => Self::LessThan {
                value: hidden(),
                upper_bound: upper_bound.redacted(),
            },
            Self::LessThanOrEqual {
                upper_bound, ..
            } => Self::LessThanOrEqual {
                value: hidden(),
                upper_bound: upper_bound.redacted(),
            },
            Self::GreaterThan {
                lower_bound, ..
            } => Self::GreaterThan {
                value: hidden(),
                lower_bound: lower_bound.redacted(),
            },
            Self::GreaterThanOrEqual {
                lower_bound, ..
            } => Self::GreaterThanOrEqual {
                value: hidden(),
                lower_bound: lower_bound.redacted(),
            },
            Self::InRange {
                lower_bound,
                upper_bound,
                ..
            } => Self::InRange {
                value: hidden(),
                lower_bound: lower_bound.redacted(),
                upper_bound: upper_bound.redacted(),
            },
            Self::DigitsOnly {
                ..
            } => Self::DigitsOnly {
                value: hidden(),
            },
            Self::NotEmptyOrWhiteSpace {
                ..
            } => Self::NotEmptyOrWhiteSpace {
                value: hidden(),
            },
            Self::NotNull
            | Self::True
            | Self::NotDefault {
                ..
            }
            | Self::NotEmpty {
                ..
            } => self.clone(),
        }
    }
}

// ============================================================================
// SECTION: Failure Context
// ============================================================================

/// One entry of the enumerable field view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextField {
    /// Field name.
    pub name: FieldName,
    /// Field value.
    pub value: Value,
}

/// Structured description of a failed requirement check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureContext {
    /// Entry point that raised the failure.
    requirement_type: RequirementType,
    /// Source text of the checked value.
    value_expression: String,
    /// Kind-specific fields.
    detail: RequirementDetail,
}

impl FailureContext {
    /// Creates a failure context.
    pub fn new(
        requirement_type: RequirementType,
        value_expression: impl Into<String>,
        detail: RequirementDetail,
    ) -> Self {
        Self {
            requirement_type,
            value_expression: value_expression.into(),
            detail,
        }
    }

    /// Returns the entry point that raised the failure.
    #[must_use]
    pub const fn requirement_type(&self) -> RequirementType {
        self.requirement_type
    }

    /// Returns the requirement kind.
    #[must_use]
    pub const fn kind(&self) -> RequirementKind {
        self.detail.kind()
    }

    /// Returns the requirement name.
    #[must_use]
    pub const fn requirement_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns the source text of the checked value.
    #[must_use]
    pub fn value_expression(&self) -> &str {
        &self.value_expression
    }

    /// Returns the kind-specific payload.
    #[must_use]
    pub const fn detail(&self) -> &RequirementDetail {
        &self.detail
    }

    /// Returns the checked value when the kind records it.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        self.detail.value()
    }

    /// Returns the number of fields carried by this context.
    #[must_use]
    pub const fn field_count(&self) -> usize {
        self.kind().fields().len()
    }

    /// Looks up a field value; `None` when the kind does not carry the field.
    #[must_use]
    pub fn get(&self, field: FieldName) -> Option<Value> {
        let detail = &self.detail;
        match field {
            FieldName::RequirementType => {
                Some(Value::String(self.requirement_type.as_str().to_string()))
            }
            FieldName::RequirementName => Some(Value::String(self.requirement_name().to_string())),
            FieldName::ValueExpression => Some(Value::String(self.value_expression.clone())),
            FieldName::Value => detail.value().cloned(),
            FieldName::ValueDatatype => {
                detail.value_datatype().map(|name| Value::String(name.to_string()))
            }
            FieldName::LowerBound => detail.lower_bound().map(|bound| bound.value.clone()),
            FieldName::LowerBoundExpression => {
                detail.lower_bound().map(|bound| Value::String(bound.expression.clone()))
            }
            FieldName::UpperBound => detail.upper_bound().map(|bound| bound.value.clone()),
            FieldName::UpperBoundExpression => {
                detail.upper_bound().map(|bound| Value::String(bound.expression.clone()))
            }
            FieldName::Target => detail.target().map(|target| target.value.clone()),
            FieldName::TargetExpression => {
                detail.target().map(|target| Value::String(target.expression.clone()))
            }
        }
    }

    /// Looks up a field by its placeholder identifier.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<Value> {
        FieldName::parse(name).and_then(|field| self.get(field))
    }

    /// Returns the ordered field view.
    #[must_use]
    pub fn fields(&self) -> SmallVec<[ContextField; 8]> {
        self.kind()
            .fields()
            .iter()
            .filter_map(|&name| {
                self.get(name).map(|value| ContextField {
                    name,
                    value,
                })
            })
            .collect()
    }

    /// Returns the field view as a JSON object keyed by field name.
    ///
    /// Keys are sorted by name, not in field order; use [`Self::fields`] or
    /// the `Serialize` impl for the ordered view.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        self.fields().into_iter().map(|field| (field.name.as_str().to_string(), field.value)).collect()
    }

    /// Returns a copy with caller payload values replaced by a redaction marker.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            requirement_type: self.requirement_type,
            value_expression: self.value_expression.clone(),
            detail: self.detail.redacted(),
        }
    }
}

impl Serialize for FailureContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for field in &fields {
            map.serialize_entry(field.name.as_str(), &field.value)?;
        }
        map.end()
    }
}
