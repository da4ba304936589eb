//! Opaque message arguments.
//!
//! Arguments are handed to the message generator exactly as the caller
//! supplied them. The factory never looks inside an [`Arg`]; only the
//! generator decides whether and how to substitute them into a message.
//!
//! # Example
//!
//! ```rust
//! use kinded_errors::{args, Arg};
//!
//! let values = args![5, "disk0", 2.5];
//! assert_eq!(values[0], Arg::Int(5));
//! assert_eq!(values[1].as_str(), Some("disk0"));
//! assert_eq!(values.len(), 3);
//! ```

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// Inline capacity of [`Args`]. Most messages take a handful of values.
pub const INLINE_ARGS: usize = 4;

/// Ordered argument list built by the [`args!`](crate::args) macro.
///
/// Stays on the stack for up to [`INLINE_ARGS`] values.
pub type Args<'a> = SmallVec<[Arg<'a>; INLINE_ARGS]>;

/// A single argument value passed through to the message generator.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<'a> {
    /// Signed integer
    Int(i64),
    /// Unsigned integer that does not fit the signed variant's intent
    UInt(u64),
    /// Floating point number
    Float(f64),
    /// Boolean flag
    Bool(bool),
    /// Single character
    Char(char),
    /// Text, borrowed when possible
    Str(Cow<'a, str>),
}

impl<'a> Arg<'a> {
    /// Signed view of integer arguments.
    ///
    /// Unsigned values are returned only if they fit in `i64`.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Arg::Int(v) => Some(v),
            Arg::UInt(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Arg::Float(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Arg::Bool(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Arg::Str(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Detach from any borrowed text so the argument can be stored.
    pub fn into_owned(self) -> Arg<'static> {
        match self {
            Arg::Int(v) => Arg::Int(v),
            Arg::UInt(v) => Arg::UInt(v),
            Arg::Float(v) => Arg::Float(v),
            Arg::Bool(v) => Arg::Bool(v),
            Arg::Char(v) => Arg::Char(v),
            Arg::Str(s) => Arg::Str(Cow::Owned(s.into_owned())),
        }
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Int(v) => fmt::Display::fmt(v, f),
            Arg::UInt(v) => fmt::Display::fmt(v, f),
            Arg::Float(v) => fmt::Display::fmt(v, f),
            Arg::Bool(v) => fmt::Display::fmt(v, f),
            Arg::Char(v) => fmt::Display::fmt(v, f),
            Arg::Str(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg<'_> {
                #[inline]
                fn from(value: $ty) -> Self {
                    Arg::Int(value as i64)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg<'_> {
                #[inline]
                fn from(value: $ty) -> Self {
                    Arg::UInt(value as u64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Arg<'_> {
    #[inline]
    fn from(value: f32) -> Self {
        Arg::Float(f64::from(value))
    }
}

impl From<f64> for Arg<'_> {
    #[inline]
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<bool> for Arg<'_> {
    #[inline]
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<char> for Arg<'_> {
    #[inline]
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Arg::Str(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    #[inline]
    fn from(value: &'a String) -> Self {
        Arg::Str(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Arg<'_> {
    #[inline]
    fn from(value: String) -> Self {
        Arg::Str(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Arg<'a> {
    #[inline]
    fn from(value: Cow<'a, str>) -> Self {
        Arg::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_keep_sign_class() {
        assert_eq!(Arg::from(-3i32), Arg::Int(-3));
        assert_eq!(Arg::from(7u8), Arg::UInt(7));
        assert_eq!(Arg::from(7usize).as_i64(), Some(7));
        assert_eq!(Arg::from(u64::MAX).as_i64(), None);
    }

    #[test]
    fn display_renders_plain_values() {
        assert_eq!(Arg::from(42).to_string(), "42");
        assert_eq!(Arg::from("text").to_string(), "text");
        assert_eq!(Arg::from(true).to_string(), "true");
        assert_eq!(Arg::from('x').to_string(), "x");
        assert_eq!(Arg::from(1.5).to_string(), "1.5");
    }

    #[test]
    fn borrowed_text_stays_borrowed() {
        let owned = String::from("path");
        let arg = Arg::from(&owned);
        assert!(matches!(arg, Arg::Str(Cow::Borrowed(_))));

        let detached = arg.into_owned();
        assert!(matches!(detached, Arg::Str(Cow::Owned(_))));
        assert_eq!(detached.as_str(), Some("path"));
    }

    #[test]
    fn accessors_reject_other_variants() {
        assert_eq!(Arg::from("5").as_i64(), None);
        assert_eq!(Arg::from(5).as_str(), None);
        assert_eq!(Arg::from(5).as_f64(), None);
        assert_eq!(Arg::from(false).as_bool(), Some(false));
    }
}
