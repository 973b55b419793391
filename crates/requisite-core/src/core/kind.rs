// crates/requisite-core/src/core/kind.rs
// ============================================================================
// Module: Requirement Kinds
// Description: Requirement families, requirement types, and context field names.
// Purpose: Name every check kind and pin its field schema and default template.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Each [`RequirementKind`] owns a fixed field schema and a constant default
//! message template. [`RequirementType`] tags whether a check was entered
//! through `Requires` or `Ensures`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Requirement Type
// ============================================================================

/// Which entry point raised a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequirementType {
    /// Checked on inputs before an operation proceeds.
    Precondition,
    /// Checked on outputs after an operation completes.
    Postcondition,
}

impl RequirementType {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Precondition => "Precondition",
            Self::Postcondition => "Postcondition",
        }
    }
}

impl fmt::Display for RequirementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Field Names
// ============================================================================

/// Keys of the failure context mapping.
///
/// # Invariants
/// - `as_str` values are stable; templates reference them as `{Name}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldName {
    /// Precondition or postcondition tag.
    RequirementType,
    /// Requirement kind name.
    RequirementName,
    /// The checked value.
    Value,
    /// Source text of the checked value.
    ValueExpression,
    /// Short type name of the checked value.
    ValueDatatype,
    /// Lower bound operand.
    LowerBound,
    /// Source text of the lower bound.
    LowerBoundExpression,
    /// Upper bound operand.
    UpperBound,
    /// Source text of the upper bound.
    UpperBoundExpression,
    /// Equality target operand.
    Target,
    /// Source text of the equality target.
    TargetExpression,
}

impl FieldName {
    /// Every field name, in canonical order.
    pub const ALL: [Self; 11] = [
        Self::RequirementType,
        Self::RequirementName,
        Self::Value,
        Self::ValueExpression,
        Self::ValueDatatype,
        Self::LowerBound,
        Self::LowerBoundExpression,
        Self::UpperBound,
        Self::UpperBoundExpression,
        Self::Target,
        Self::TargetExpression,
    ];

    /// Returns the placeholder identifier for this field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RequirementType => "RequirementType",
            Self::RequirementName => "RequirementName",
            Self::Value => "Value",
            Self::ValueExpression => "ValueExpression",
            Self::ValueDatatype => "ValueDatatype",
            Self::LowerBound => "LowerBound",
            Self::LowerBoundExpression => "LowerBoundExpression",
            Self::UpperBound => "UpperBound",
            Self::UpperBoundExpression => "UpperBoundExpression",
            Self::Target => "Target",
            Self::TargetExpression => "TargetExpression",
        }
    }

    /// Parses a placeholder identifier.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    /// Returns true for fields that carry caller data rather than metadata.
    #[must_use]
    pub const fn is_payload(self) -> bool {
        matches!(self, Self::Value | Self::LowerBound | Self::UpperBound | Self::Target)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Requirement Kind
// ============================================================================

/// Named family of requirement check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RequirementKind {
    /// Optional value must be present.
    NotNull,
    /// Value must differ from its type's default.
    NotDefault,
    /// Value must equal a target.
    Equal,
    /// Value must differ from a target.
    NotEqual,
    /// Value must be strictly below an upper bound.
    LessThan,
    /// Value must be at or below an upper bound.
    LessThanOrEqual,
    /// Value must be strictly above a lower bound.
    GreaterThan,
    /// Value must be at or above a lower bound.
    GreaterThanOrEqual,
    /// Value must lie within inclusive bounds.
    InRange,
    /// Text must consist of ASCII digits.
    DigitsOnly,
    /// Collection or text must not be empty.
    NotEmpty,
    /// Text must contain a non-whitespace character.
    NotEmptyOrWhiteSpace,
    /// Condition must hold.
    True,
}

/// Prefix shared by every default template.
const TEMPLATE_PREFIX: &str = "{RequirementType} {RequirementName} failed: ";

/// Fields carried by kinds that only name the checked expression.
const EXPRESSION_FIELDS: &[FieldName] =
    &[FieldName::RequirementType, FieldName::RequirementName, FieldName::ValueExpression];

/// Fields carried by kinds that describe the value's type.
const DATATYPE_FIELDS: &[FieldName] = &[
    FieldName::RequirementType,
    FieldName::RequirementName,
    FieldName::ValueExpression,
    FieldName::ValueDatatype,
];

/// Fields carried by kinds that report the value itself.
const VALUE_FIELDS: &[FieldName] = &[
    FieldName::RequirementType,
    FieldName::RequirementName,
    FieldName::Value,
    FieldName::ValueExpression,
];

/// Fields carried by equality kinds.
const TARGET_FIELDS: &[FieldName] = &[
    FieldName::RequirementType,
    FieldName::RequirementName,
    FieldName::Value,
    FieldName::ValueExpression,
    FieldName::Target,
    FieldName::TargetExpression,
];

/// Fields carried by upper-bound kinds.
const UPPER_FIELDS: &[FieldName] = &[
    FieldName::RequirementType,
    FieldName::RequirementName,
    FieldName::Value,
    FieldName::ValueExpression,
    FieldName::UpperBound,
    FieldName::UpperBoundExpression,
];

/// Fields carried by lower-bound kinds.
const LOWER_FIELDS: &[FieldName] = &[
    FieldName::RequirementType,
    FieldName::RequirementName,
    FieldName::Value,
    FieldName::ValueExpression,
    FieldName::LowerBound,
    FieldName::LowerBoundExpression,
];

/// Fields carried by range kinds.
const RANGE_FIELDS: &[FieldName] = &[
    FieldName::RequirementType,
    FieldName::RequirementName,
    FieldName::Value,
    FieldName::ValueExpression,
    FieldName::LowerBound,
    FieldName::LowerBoundExpression,
    FieldName::UpperBound,
    FieldName::UpperBoundExpression,
];

impl RequirementKind {
    /// Every requirement kind.
    pub const ALL: [Self; 13] = [
        Self::NotNull,
        Self::NotDefault,
        Self::Equal,
        Self::NotEqual,
        Self::LessThan,
        Self::LessThanOrEqual,
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::InRange,
        Self::DigitsOnly,
        Self::NotEmpty,
        Self::NotEmptyOrWhiteSpace,
        Self::True,
    ];

    /// Returns the requirement name rendered into `{RequirementName}`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NotNull => "NotNull",
            Self::NotDefault => "NotDefault",
            Self::Equal => "Equal",
            Self::NotEqual => "NotEqual",
            Self::LessThan => "LessThan",
            Self::LessThanOrEqual => "LessThanOrEqual",
            Self::GreaterThan => "GreaterThan",
            Self::GreaterThanOrEqual => "GreaterThanOrEqual",
            Self::InRange => "InRange",
            Self::DigitsOnly => "DigitsOnly",
            Self::NotEmpty => "NotEmpty",
            Self::NotEmptyOrWhiteSpace => "NotEmptyOrWhiteSpace",
            Self::True => "True",
        }
    }

    /// Returns the fixed field schema, in enumeration order.
    #[must_use]
    pub const fn fields(self) -> &'static [FieldName] {
        match self {
            Self::NotNull | Self::True => EXPRESSION_FIELDS,
            Self::NotDefault | Self::NotEmpty => DATATYPE_FIELDS,
            Self::DigitsOnly | Self::NotEmptyOrWhiteSpace => VALUE_FIELDS,
            Self::Equal | Self::NotEqual => TARGET_FIELDS,
            Self::LessThan | Self::LessThanOrEqual => UPPER_FIELDS,
            Self::GreaterThan | Self::GreaterThanOrEqual => LOWER_FIELDS,
            Self::InRange => RANGE_FIELDS,
        }
    }

    /// Returns true when this kind carries the given field.
    #[must_use]
    pub fn has_field(self, field: FieldName) -> bool {
        self.fields().contains(&field)
    }

    /// Returns true for kinds decided by ordering comparison.
    #[must_use]
    pub const fn is_ordering(self) -> bool {
        matches!(
            self,
            Self::LessThan
                | Self::LessThanOrEqual
                | Self::GreaterThan
                | Self::GreaterThanOrEqual
                | Self::InRange
        )
    }

    /// Returns the clause that follows the shared `... failed: ` prefix.
    const fn clause(self) -> &'static str {
        match self {
            Self::NotNull => "{ValueExpression} must not be null",
            Self::NotDefault => "{ValueExpression} must not be the default value of {ValueDatatype}",
            Self::Equal => "{ValueExpression} must be equal to {Target}",
            Self::NotEqual => "{ValueExpression} must not be equal to {Target}",
            Self::LessThan => "{ValueExpression} must be less than {UpperBound}",
            Self::LessThanOrEqual => "{ValueExpression} must be less than or equal to {UpperBound}",
            Self::GreaterThan => "{ValueExpression} must be greater than {LowerBound}",
            Self::GreaterThanOrEqual => {
                "{ValueExpression} must be greater than or equal to {LowerBound}"
            }
            Self::InRange => "{ValueExpression} must be between {LowerBound} and {UpperBound}",
            Self::DigitsOnly => "{ValueExpression} must contain only digits",
            Self::NotEmpty => "{ValueExpression} must not be empty",
            Self::NotEmptyOrWhiteSpace => "{ValueExpression} must not be empty or whitespace",
            Self::True => "{ValueExpression} must be true",
        }
    }

    /// Returns the built-in message template.
    #[must_use]
    pub fn default_template(self) -> String {
        format!("{TEMPLATE_PREFIX}{}", self.clause())
    }

    /// Parses a requirement name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
