//! # Kinded Errors
//!
//! Classified error construction with pluggable message generation.
//!
//! ## Design Philosophy
//!
//! 1. **Callers own the taxonomy**: the error kind is a type parameter, usually
//!    a small `Copy` enum such as `User` / `System`
//! 2. **Callers own the wording**: messages come from an injected generator
//!    (a localization lookup, a static table, a formatter)
//! 3. **Construction never fails**: a failing generator still yields a
//!    well-formed error, downgraded to the factory's default kind
//! 4. **Message text is zeroized** when the error is dropped
//!
//! ## Components
//!
//! - [`TypedError`]: immutable `(kind, message)` value
//! - [`MessageGenerator`]: `Fn(kind, descriptor, fallback, &[Arg]) -> Result<String, GenerationError>`
//! - [`ErrorFactory`]: binds one generator and one default kind
//!
//! ## Quick Start
//!
//! ```rust
//! use kinded_errors::{typed_err, Arg, ErrorFactory, GenerationError, TypedError};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Kind { User, System }
//!
//! fn generate(kind: Kind, descriptor: &str, fallback: &str, args: &[Arg<'_>])
//!     -> Result<String, GenerationError>
//! {
//!     match (kind, descriptor) {
//!         (Kind::User, "out_of_range") => Ok(format!(
//!             "Number {} is out of range [{}, {}]", args[0], args[1], args[2]
//!         )),
//!         (Kind::System, _) => Ok(fallback.to_owned()),
//!         _ => Err(GenerationError::new("unknown user message")),
//!     }
//! }
//!
//! fn check(num: i64, factory: &ErrorFactory<Kind>) -> Result<i64, TypedError<Kind>> {
//!     if !(1..=5).contains(&num) {
//!         return Err(typed_err!(factory, Kind::User, "out_of_range", "Number is out of range", num, 1, 5));
//!     }
//!     Ok(num)
//! }
//!
//! let factory = ErrorFactory::new(generate, Kind::System);
//! let err = check(9, &factory).unwrap_err();
//! assert_eq!(err.kind(), Kind::User);
//! assert_eq!(err.to_string(), "Number 9 is out of range [1, 5]");
//!
//! // Generator failure: the requested kind is replaced by the default
//! let err = factory.error(Kind::User, "missing", "", &[]);
//! assert_eq!(err.kind(), Kind::System);
//! assert_eq!(err.message(), "unknown user message");
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): emit a debug event when generation fails
//! - `trusted_debug`: enable `ErrorLog::format_for_trusted_debug` (debug builds only)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod args;
pub mod convenience;
pub mod error;
pub mod factory;
pub mod generator;
pub mod logging;

pub use args::*;
pub use error::*;
pub use factory::*;
pub use generator::*;
pub use logging::*;

/// Result alias for functions failing with a [`TypedError`] of kind `K`.
pub type Result<T, K> = std::result::Result<T, TypedError<K>>;
