//! Convenience macros for variadic call sites.
//!
//! [`ErrorFactory::error`](crate::ErrorFactory::error) takes its arguments as a
//! slice. These macros let a call site list them inline instead, converting
//! each value through `Arg::from`.
//!
//! # Usage
//!
//! ```rust
//! # use kinded_errors::{typed_err, Arg, ErrorFactory, GenerationError};
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Kind { User, System }
//!
//! let factory = ErrorFactory::new(
//!     |_: Kind, _: &str, fallback: &str, args: &[Arg<'_>]| {
//!         let mut out = fallback.to_owned();
//!         for arg in args {
//!             out = out.replacen("{}", &arg.to_string(), 1);
//!         }
//!         Ok::<_, GenerationError>(out)
//!     },
//!     Kind::System,
//! );
//!
//! let (num, min, max) = (9, 1, 5);
//! let err = typed_err!(factory, Kind::User, "out_of_range", "{} is not in [{}, {}]", num, min, max);
//! assert_eq!(err.message(), "9 is not in [1, 5]");
//!
//! let err = typed_err!(factory, Kind::System, "cannot_read", "Cannot read a message");
//! assert_eq!(err.kind(), Kind::System);
//! ```

/// Build an [`Args`](crate::Args) list from heterogeneous values.
///
/// ```rust
/// # use kinded_errors::{args, Arg};
/// let empty = args![];
/// assert!(empty.is_empty());
///
/// let owned = String::from("owned");
/// let list = args![1u8, -2, "text", owned, 'c', true];
/// assert_eq!(list[0], Arg::UInt(1));
/// assert_eq!(list[1], Arg::Int(-2));
/// assert_eq!(list[3].as_str(), Some("owned"));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($arg:expr),+ $(,)?) => {{
        let mut list = $crate::Args::new();
        $(
            list.push($crate::Arg::from($arg));
        )+
        list
    }};
}

/// Build a [`TypedError`](crate::TypedError) through a factory with inline arguments.
///
/// `typed_err!(factory, kind, descriptor, fallback, args...)` expands to
/// `factory.error(kind, descriptor, fallback, &args![args...])`.
#[macro_export]
macro_rules! typed_err {
    ($factory:expr, $kind:expr, $descriptor:expr, $fallback:expr $(,)?) => {
        $factory.error($kind, $descriptor, $fallback, &[])
    };
    ($factory:expr, $kind:expr, $descriptor:expr, $fallback:expr, $($arg:expr),+ $(,)?) => {
        $factory.error($kind, $descriptor, $fallback, &$crate::args![$($arg),+])
    };
}
