//! Structured log view over a [`TypedError`](crate::TypedError).
//!
//! # Properties
//!
//! - Borrows from the error with an explicit lifetime
//! - CANNOT outlive the error that created it
//! - NO heap allocations in accessors
//! - Message text is bounded in rendered output, never in the error itself
//!
//! The error value keeps whatever text the generator produced, verbatim.
//! Only rendering through [`ErrorLog::write_to`] truncates, so that a runaway
//! generator message cannot flood a log sink.

use std::borrow::Cow;
use std::fmt;

/// Maximum length for the message field in formatted output
const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Truncation indicator appended to truncated strings
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Log entry with borrowed data from a `TypedError`.
///
/// # Example
///
/// ```rust
/// # use kinded_errors::{Arg, ErrorFactory, GenerationError};
/// # #[derive(Debug, Clone, Copy, PartialEq)] enum Kind { User, System }
/// let factory = ErrorFactory::new(
///     |_: Kind, _: &str, fallback: &str, _: &[Arg<'_>]| Ok::<_, GenerationError>(fallback.to_owned()),
///     Kind::System,
/// );
/// let err = factory.error(Kind::User, "out_of_range", "Number is out of range", &[]);
///
/// let mut line = String::new();
/// err.log().write_to(&mut line).unwrap();
/// assert_eq!(line, "[User] message='Number is out of range'");
/// ```
#[derive(Debug)]
pub struct ErrorLog<'a, K> {
    kind: &'a K,
    message: &'a str,
}

impl<'a, K> ErrorLog<'a, K> {
    #[inline]
    pub(crate) const fn new(kind: &'a K, message: &'a str) -> Self {
        Self { kind, message }
    }

    #[inline]
    pub const fn kind(&self) -> &K {
        self.kind
    }

    /// Raw message, untruncated. Bounding is the sink's job here.
    #[inline]
    pub const fn message(&self) -> &str {
        self.message
    }

    /// Write `[<kind>] message='<text>'` without allocating for short messages.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result
    where
        K: fmt::Debug,
    {
        write!(
            f,
            "[{:?}] message='{}'",
            self.kind,
            truncate_with_indicator(self.message)
        )
    }

    /// Format for human-readable logs in trusted debug contexts.
    ///
    /// Only available with BOTH the `trusted_debug` feature AND debug
    /// assertions enabled.
    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    pub fn format_for_trusted_debug(&self) -> String
    where
        K: fmt::Debug,
    {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut output);
        output
    }
}

/// Truncate a string for display, marking the cut.
///
/// Returns a Cow<str> to avoid allocation when no truncation is needed.
fn truncate_with_indicator(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    let max_content_len = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());

    // Last char boundary at or before the limit
    let mut idx = max_content_len;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }

    if idx == 0 {
        return Cow::Borrowed(TRUNCATION_INDICATOR);
    }

    let mut result = String::with_capacity(idx + TRUNCATION_INDICATOR.len());
    result.push_str(&s[..idx]);
    result.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(result)
}
