// crates/requisite-core/src/core/datatype.rs
// ============================================================================
// Module: Datatype Naming
// Description: Canonical short type names for failure contexts.
// Purpose: Render `ValueDatatype` with module paths stripped and arity notation.
// Dependencies: std::any
// ============================================================================

//! ## Overview
//! `ValueDatatype` is asserted on literally, so its text must be stable:
//! module paths are dropped and a generic type renders as its name followed
//! by a backtick and its type parameter count (`Vec<i32>` becomes ``Vec`1``).
//! Non-generic, reference, tuple, and array types keep their shape with paths
//! stripped.

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Returns the canonical short name of `T`.
#[must_use]
pub fn datatype_name<T: ?Sized>() -> String {
    canonical_name(std::any::type_name::<T>())
}

/// Canonicalizes a fully qualified type name.
#[must_use]
pub fn canonical_name(full: &str) -> String {
    let trimmed = full.trim();
    let (prefix, body) = split_reference_prefix(trimmed);
    if body.starts_with('(') || body.starts_with('[') {
        return format!("{prefix}{}", strip_paths(body));
    }
    match generic_split(body) {
        Some((head, args)) => {
            format!("{prefix}{}`{}", last_segment(head), count_top_level_args(args))
        }
        None => format!("{prefix}{}", strip_paths(body)),
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Splits leading `&`, `&mut `, and `*const `/`*mut ` qualifiers from the type body.
fn split_reference_prefix(name: &str) -> (&str, &str) {
    let mut rest = name;
    loop {
        if let Some(stripped) = rest.strip_prefix("&mut ") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('&') {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix("*const ") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix("*mut ") {
            rest = stripped;
        } else {
            break;
        }
    }
    let prefix_len = name.len() - rest.len();
    (&name[.. prefix_len], rest)
}

/// Splits `Head<Args>` into its head and argument list when the body is generic.
fn generic_split(body: &str) -> Option<(&str, &str)> {
    let open = body.find('<')?;
    let inner = body.strip_suffix('>')?;
    let head = &inner[.. open];
    if head.contains(['(', '[', ' ']) {
        return None;
    }
    Some((head, &inner[open + 1 ..]))
}

/// Counts comma-separated arguments at nesting depth zero.
///
/// The `>` of a `->` return arrow does not close a generic.
fn count_top_level_args(args: &str) -> usize {
    let mut depth = 0usize;
    let mut count = 1;
    let mut previous = None;
    for ch in args.chars() {
        match ch {
            '>' if previous == Some('-') => {}
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => count += 1,
            _ => {}
        }
        previous = Some(ch);
    }
    count
}

/// Returns the final `::` segment of a path.
fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// Replaces every qualified path in `text` by its final segment.
fn strip_paths(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut token = String::new();
    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            token.push(ch);
        } else {
            out.push_str(last_segment(&token));
            token.clear();
            out.push(ch);
        }
    }
    out.push_str(last_segment(&token));
    out
}

// ============================================================================
// SECTION: Tests
// ============================================================================
