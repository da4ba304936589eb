//! The classified error value returned by every factory call.
//!
//! # Key Properties
//!
//! - Always well-formed: a kind and a resolved message, nothing optional
//! - Immutable: fields are private and only read accessors exist
//! - Owned message text is zeroized on drop
//! - No back-reference to the factory or generator that produced it

use crate::ErrorLog;
use std::fmt;
use std::hash::{Hash, Hasher};
use zeroize::Zeroize;

/// Error value pairing a caller-defined kind with a resolved message.
///
/// Only [`ErrorFactory::error`](crate::ErrorFactory::error) creates these.
/// Callers inspect [`kind`](Self::kind) to decide how to react (show to the
/// end user, log internally) and [`message`](Self::message) for the text.
#[must_use = "errors should be handled or logged"]
pub struct TypedError<K> {
    kind: K,
    message: String,
}

impl<K> TypedError<K> {
    #[inline]
    pub(crate) fn new(kind: K, message: String) -> Self {
        Self { kind, message }
    }

    /// Borrow the kind. Use [`kind`](Self::kind) for `Copy` kinds.
    #[inline]
    pub const fn kind_ref(&self) -> &K {
        &self.kind
    }

    /// Resolved message text.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check the kind without copying it out.
    #[inline]
    pub fn is_kind(&self, kind: &K) -> bool
    where
        K: PartialEq,
    {
        self.kind == *kind
    }

    /// Take the message, leaving nothing behind to zeroize.
    #[inline]
    pub fn into_message(mut self) -> String {
        std::mem::take(&mut self.message)
    }

    /// Structured log view with a lifetime tied to this error.
    ///
    /// ```rust
    /// # use kinded_errors::{ErrorFactory, Arg, GenerationError};
    /// # #[derive(Debug, Clone, Copy, PartialEq)] enum Kind { System }
    /// # let factory = ErrorFactory::new(
    /// #     |_: Kind, d: &str, _: &str, _: &[Arg<'_>]| Ok::<_, GenerationError>(d.to_owned()),
    /// #     Kind::System,
    /// # );
    /// let err = factory.error(Kind::System, "disk full", "", &[]);
    /// let log = err.log();
    /// assert_eq!(log.message(), "disk full");
    /// // log must be dropped before err
    /// ```
    #[inline]
    pub fn log(&self) -> ErrorLog<'_, K> {
        ErrorLog::new(&self.kind, &self.message)
    }

    /// Callback-style access to the log view; the view dies with the closure.
    #[inline]
    pub fn with_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ErrorLog<'_, K>) -> R,
    {
        let log = self.log();
        f(&log)
    }
}

impl<K: Copy> TypedError<K> {
    /// Kind of this error.
    #[inline]
    pub fn kind(&self) -> K {
        self.kind
    }

    /// Split into kind and message.
    #[inline]
    pub fn into_parts(mut self) -> (K, String) {
        (self.kind, std::mem::take(&mut self.message))
    }
}

impl<K> Drop for TypedError<K> {
    fn drop(&mut self) {
        self.message.zeroize();
    }
}

impl<K: Clone> Clone for TypedError<K> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            message: self.message.clone(),
        }
    }
}

impl<K: PartialEq> PartialEq for TypedError<K> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl<K: Eq> Eq for TypedError<K> {}

impl<K: Hash> Hash for TypedError<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.message.hash(state);
    }
}

impl<K: fmt::Debug> fmt::Debug for TypedError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl<K> fmt::Display for TypedError<K> {
    /// Renders the message only; the kind is for the caller to act on.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl<K: fmt::Debug> std::error::Error for TypedError<K> {}
