// crates/requisite-core/src/runtime/predicates.rs
// ============================================================================
// Module: Requirement Predicates
// Description: Stateless boolean tests behind each requirement kind.
// Purpose: Keep the pass/fail decision separate from failure reporting.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Every predicate is pure and allocation-free. Ordering predicates use the
//! natural order of the type through `PartialOrd`; an incomparable pair (such
//! as a NaN operand) never satisfies an ordering requirement.
//!
//! Absence ordering: optional operands compare as `Option<T>` does, so an
//! absent value sorts before every present value and two absent values are
//! equal.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;

// ============================================================================
// SECTION: Presence
// ============================================================================

/// Returns true when the optional value is present.
#[must_use]
pub const fn is_not_null<T>(value: &Option<T>) -> bool {
    value.is_some()
}

/// Returns true when the value differs from its type's default.
#[must_use]
pub fn is_not_default<T: Default + PartialEq>(value: &T) -> bool {
    *value != T::default()
}

// ============================================================================
// SECTION: Equality
// ============================================================================

/// Returns true when `value` equals `target`.
#[must_use]
pub fn is_equal<T: PartialEq<B> + ?Sized, B: ?Sized>(value: &T, target: &B) -> bool {
    value == target
}

/// Returns true when `value` differs from `target`.
#[must_use]
pub fn is_not_equal<T: PartialEq<B> + ?Sized, B: ?Sized>(value: &T, target: &B) -> bool {
    value != target
}

// ============================================================================
// SECTION: Ordering
// ============================================================================

/// Returns true when `value` is strictly below `upper`.
#[must_use]
pub fn is_less_than<T: PartialOrd<B> + ?Sized, B: ?Sized>(value: &T, upper: &B) -> bool {
    matches!(value.partial_cmp(upper), Some(Ordering::Less))
}

/// Returns true when `value` is at or below `upper`.
#[must_use]
pub fn is_less_than_or_equal<T: PartialOrd<B> + ?Sized, B: ?Sized>(value: &T, upper: &B) -> bool {
    matches!(value.partial_cmp(upper), Some(Ordering::Less | Ordering::Equal))
}

/// Returns true when `value` is strictly above `lower`.
#[must_use]
pub fn is_greater_than<T: PartialOrd<B> + ?Sized, B: ?Sized>(value: &T, lower: &B) -> bool {
    matches!(value.partial_cmp(lower), Some(Ordering::Greater))
}

/// Returns true when `value` is at or above `lower`.
#[must_use]
pub fn is_greater_than_or_equal<T: PartialOrd<B> + ?Sized, B: ?Sized>(
    value: &T,
    lower: &B,
) -> bool {
    matches!(value.partial_cmp(lower), Some(Ordering::Greater | Ordering::Equal))
}

/// Returns true when `lower <= value <= upper`.
#[must_use]
pub fn is_in_range<T: PartialOrd<B> + ?Sized, B: ?Sized>(value: &T, lower: &B, upper: &B) -> bool {
    is_greater_than_or_equal(value, lower) && is_less_than_or_equal(value, upper)
}

// ============================================================================
// SECTION: Text
// ============================================================================

/// Returns true when every character is an ASCII digit; the empty string passes.
#[must_use]
pub fn is_digits_only(text: &str) -> bool {
    text.chars().all(|ch| ch.is_ascii_digit())
}

/// Returns true when the text holds at least one non-whitespace character.
#[must_use]
pub fn is_not_empty_or_white_space(text: &str) -> bool {
    !text.trim().is_empty()
}

// ============================================================================
// SECTION: Emptiness
// ============================================================================

/// Values that can be empty.
pub trait IsEmpty {
    /// Returns true when the value holds no elements.
    fn is_empty(&self) -> bool;
}

/// Returns true when the value holds at least one element.
#[must_use]
pub fn is_not_empty<T: IsEmpty + ?Sized>(value: &T) -> bool {
    !value.is_empty()
}

impl IsEmpty for str {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl IsEmpty for String {
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl<T> IsEmpty for [T] {
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<T, const N: usize> IsEmpty for [T; N] {
    fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl<T> IsEmpty for VecDeque<T> {
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl<K, V, S> IsEmpty for HashMap<K, V, S> {
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl<T, S> IsEmpty for HashSet<T, S> {
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl<K, V> IsEmpty for BTreeMap<K, V> {
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl<T> IsEmpty for BTreeSet<T> {
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl<T> IsEmpty for Option<T> {
    fn is_empty(&self) -> bool {
        self.is_none()
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for &T {
    fn is_empty(&self) -> bool {
        T::is_empty(self)
    }
}
