//! Message generation contract.
//!
//! A message generator is a plain function value supplied by the caller. It
//! receives the requested kind, a descriptor (typically a lookup key), a
//! fallback text and the ordered arguments, and either resolves a
//! presentation-ready message or reports a [`GenerationError`].
//!
//! The factory invokes it exactly once per constructed error, synchronously,
//! and never retries. Whatever state a concrete generator keeps (catalogs,
//! caches, locale handles) is its own business.
//!
//! # Example
//!
//! ```rust
//! use kinded_errors::{Arg, GenerationError};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Kind { User, System }
//!
//! fn english(kind: Kind, descriptor: &str, fallback: &str, args: &[Arg<'_>])
//!     -> Result<String, GenerationError>
//! {
//!     match (kind, descriptor) {
//!         (Kind::User, "out_of_range") => Ok(format!("{} is out of range", args[0])),
//!         _ if !fallback.is_empty() => Ok(fallback.to_owned()),
//!         _ => Err(GenerationError::new("no message for descriptor")),
//!     }
//! }
//!
//! assert_eq!(english(Kind::User, "out_of_range", "", &[Arg::Int(9)]).unwrap(), "9 is out of range");
//! assert!(english(Kind::System, "unknown", "", &[]).is_err());
//! ```

use crate::Arg;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Shared, thread-safe message generator bound into an [`ErrorFactory`](crate::ErrorFactory).
///
/// Arguments: `(kind, descriptor, fallback, args)`.
pub type MessageGenerator<K> =
    Arc<dyn Fn(K, &str, &str, &[Arg<'_>]) -> Result<String, GenerationError> + Send + Sync>;

/// Wrap a closure or `fn` as a [`MessageGenerator`] so it can be shared
/// between several factories.
#[inline]
pub fn shared<K, G>(generator: G) -> MessageGenerator<K>
where
    G: Fn(K, &str, &str, &[Arg<'_>]) -> Result<String, GenerationError> + Send + Sync + 'static,
{
    Arc::new(generator)
}

/// Failure reported by a message generator.
///
/// Its `Display` output is what ends up as the message of the error produced
/// by the factory's fallback path, so the text should read well on its own.
pub struct GenerationError {
    description: Option<Cow<'static, str>>,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl GenerationError {
    /// Failure described by text only.
    #[inline]
    pub fn new(description: impl Into<Cow<'static, str>>) -> Self {
        Self {
            description: Some(description.into()),
            source: None,
        }
    }

    /// Failure with a context line in front of an underlying error.
    ///
    /// Renders as `"{description}: {source}"`.
    #[inline]
    pub fn wrap(
        description: impl Into<Cow<'static, str>>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self {
            description: Some(description.into()),
            source: Some(source.into()),
        }
    }

    /// Failure that is entirely the underlying error. Renders as the source.
    #[inline]
    pub fn from_source(source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self {
            description: None,
            source: Some(source.into()),
        }
    }

    /// Context line, if one was given.
    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.description, &self.source) {
            (Some(description), Some(source)) => write!(f, "{}: {}", description, source),
            (Some(description), None) => f.write_str(description),
            (None, Some(source)) => fmt::Display::fmt(source, f),
            (None, None) => Ok(()),
        }
    }
}

impl fmt::Debug for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationError")
            .field("description", &self.description)
            .field("source", &self.source)
            .finish()
    }
}

impl Error for GenerationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

impl From<&'static str> for GenerationError {
    fn from(description: &'static str) -> Self {
        Self::new(description)
    }
}

impl From<String> for GenerationError {
    fn from(description: String) -> Self {
        Self::new(description)
    }
}

impl From<fmt::Error> for GenerationError {
    fn from(error: fmt::Error) -> Self {
        Self::wrap("message formatting failed", error)
    }
}
