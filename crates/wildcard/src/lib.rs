//! Wildcard matching with `*`, `?` and `.`.
//!
//! - `*` matches zero or more elements
//! - `?` matches zero or one element
//! - `.` matches exactly one element
//!
//! Every other element is compared literally. There is no escaping, so the
//! three wildcard characters can never be matched literally except by
//! themselves.
//!
//! Matching is available at two granularities. The byte-oriented functions
//! ([`matches`], [`matches_bytes`]) never allocate and are exact for
//! literal and `*`-only patterns, but `?` and `.` see multi-byte characters as
//! several elements. The scalar-aware functions ([`matches_by_char`],
//! [`matches_chars`]) decode the input to Unicode scalar values first.
//!
//! ```
//! assert!(wildcard::matches("arn:*:s3:::bucket/*", "arn:aws:s3:::bucket/key"));
//! assert!(wildcard::matches_by_char("caf.", "café"));
//! assert!(!wildcard::matches("caf.", "café"));
//! assert!(wildcard::matches_ignore_case("THIS", "this"));
//! ```

// public modules
pub mod element;
pub mod matcher;

// private modules
mod pattern;

// public uses
pub use element::Element;
pub use pattern::{Case, Granularity, Pattern, UnknownGranularityError};

// ---

/// Tests whether `subject` matches `pattern`, comparing UTF-8 bytes.
#[inline]
pub fn matches(pattern: &str, subject: &str) -> bool {
    matches_bytes(pattern.as_bytes(), subject.as_bytes())
}

/// Same as [`matches`] but lowercases both operands first.
pub fn matches_ignore_case(pattern: &str, subject: &str) -> bool {
    matches(&fold_case(pattern), &fold_case(subject))
}

/// Tests whether `subject` matches `pattern`, comparing Unicode scalar values.
pub fn matches_by_char(pattern: &str, subject: &str) -> bool {
    shortcut(pattern.as_bytes(), subject.as_bytes()).unwrap_or_else(|| {
        let pattern: Vec<char> = pattern.chars().collect();
        let subject: Vec<char> = subject.chars().collect();
        matcher::matches(&pattern, &subject)
    })
}

/// Same as [`matches_by_char`] but lowercases both operands first.
pub fn matches_by_char_ignore_case(pattern: &str, subject: &str) -> bool {
    matches_by_char(&fold_case(pattern), &fold_case(subject))
}

/// Tests whether raw `subject` bytes match `pattern`.
///
/// Useful for binary data or text in unknown encodings.
#[inline]
pub fn matches_bytes(pattern: &[u8], subject: &[u8]) -> bool {
    dispatch(pattern, subject)
}

/// Same as [`matches_bytes`] but folds ASCII letters to lowercase first.
pub fn matches_bytes_ignore_case(pattern: &[u8], subject: &[u8]) -> bool {
    matches_bytes(&pattern.to_ascii_lowercase(), &subject.to_ascii_lowercase())
}

/// Tests whether pre-decoded scalar values match `pattern`.
#[inline]
pub fn matches_chars(pattern: &[char], subject: &[char]) -> bool {
    dispatch(pattern, subject)
}

// ---

#[inline]
fn dispatch<E: Element>(pattern: &[E], subject: &[E]) -> bool {
    shortcut(pattern, subject).unwrap_or_else(|| matcher::matches(pattern, subject))
}

/// Lowercases every scalar value on its own.
///
/// Unlike [`str::to_lowercase`], the result for a character never depends on
/// its neighbours, so a `Σ` followed by a wildcard folds the same way as a `Σ`
/// in the subject.
pub(crate) fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Same as [`fold_case`] for bytes that may not be valid UTF-8.
///
/// Invalid sequences are kept as is.
pub(crate) fn fold_case_bytes(s: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(s.len());
    for chunk in s.utf8_chunks() {
        result.extend_from_slice(fold_case(chunk.valid()).as_bytes());
        result.extend_from_slice(chunk.invalid());
    }
    result
}

/// Resolves trivial cases without running the matcher.
///
/// The outcome is the same at every granularity because wildcards are ASCII
/// and can never be part of a multi-byte sequence.
#[inline]
fn shortcut<E: Element>(pattern: &[E], subject: &[E]) -> Option<bool> {
    match pattern {
        [] => Some(subject.is_empty()),
        [e] if *e == E::STAR => Some(true),
        _ if pattern == subject => Some(true),
        _ if E::find_wildcard(pattern).is_none() => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
