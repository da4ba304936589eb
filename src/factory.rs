//! Error factory: binds a message generator and a default kind.
//!
//! # Fallback Policy
//!
//! The factory never fails. When the generator resolves a message, the
//! produced error carries the kind the caller asked for. When the generator
//! fails, the produced error carries the factory's **default kind** instead,
//! and the generation error's text becomes the message:
//!
//! ```rust
//! use kinded_errors::{Arg, ErrorFactory, GenerationError};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Kind { User, System }
//!
//! let factory = ErrorFactory::new(
//!     |_: Kind, _: &str, _: &str, _: &[Arg<'_>]| Err(GenerationError::new("abc")),
//!     Kind::System,
//! );
//!
//! let err = factory.error(Kind::User, "message", "fallback", &[]);
//! assert_eq!(err.kind(), Kind::System);
//! assert_eq!(err.message(), "abc");
//! ```
//!
//! # Concurrency
//!
//! The factory holds only its two bound values. It is `Send + Sync` whenever
//! the kind is, and clones share the same generator.

use crate::{Arg, GenerationError, MessageGenerator, TypedError};
use std::fmt;
use std::sync::Arc;

/// Produces [`TypedError`] values through a caller-supplied message generator.
pub struct ErrorFactory<K> {
    generator: MessageGenerator<K>,
    default_kind: K,
}

impl<K: Copy> ErrorFactory<K> {
    /// Bind `generator` and `default_kind`.
    ///
    /// Nothing is validated and the generator is not called here; a
    /// misbehaving generator only shows up when [`error`](Self::error) runs.
    #[inline]
    pub fn new<G>(generator: G, default_kind: K) -> Self
    where
        G: Fn(K, &str, &str, &[Arg<'_>]) -> Result<String, GenerationError>
            + Send
            + Sync
            + 'static,
    {
        Self::from_shared(crate::generator::shared(generator), default_kind)
    }

    /// Bind a generator that is already shared elsewhere.
    #[inline]
    pub fn from_shared(generator: MessageGenerator<K>, default_kind: K) -> Self {
        Self {
            generator,
            default_kind,
        }
    }

    /// Kind used when message generation fails.
    #[inline]
    pub fn default_kind(&self) -> K {
        self.default_kind
    }

    /// The bound generator, for building sibling factories.
    #[inline]
    pub fn generator(&self) -> &MessageGenerator<K> {
        &self.generator
    }

    /// Build an error of `kind`.
    ///
    /// `descriptor`, `fallback` and `args` are handed to the generator
    /// unmodified and are not retained. On generator failure the result is
    /// downgraded to [`default_kind`](Self::default_kind) with the failure
    /// text as its message.
    ///
    /// For a variadic call site see [`typed_err!`](crate::typed_err).
    pub fn error(
        &self,
        kind: K,
        descriptor: &str,
        fallback: &str,
        args: &[Arg<'_>],
    ) -> TypedError<K> {
        match (self.generator)(kind, descriptor, fallback, args) {
            Ok(message) => TypedError::new(kind, message),
            Err(failure) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "kinded_errors::factory",
                    descriptor,
                    error = %failure,
                    "message generation failed, using default kind"
                );
                TypedError::new(self.default_kind, failure.to_string())
            }
        }
    }
}

impl<K: Copy> Clone for ErrorFactory<K> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
            default_kind: self.default_kind,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for ErrorFactory<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorFactory")
            .field("generator", &"<fn>")
            .field("default_kind", &self.default_kind)
            .finish()
    }
}
