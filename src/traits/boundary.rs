//! Explicit entry points onto the railway from `Option` and `Result`.
//!
//! Absence is never silently accepted as a success: an `Option` must be
//! classified at the boundary, normally as a `NullValue` failure.
//!
//! # Examples
//!
//! ```
//! use rop_rail::traits::{OptionExt, ResultExt};
//! use rop_rail::{Error, RopResult};
//!
//! let wheels: RopResult<u8> = None::<u8>.ok_or_null();
//! assert_eq!(wheels.errors(), &[Error::null_value()]);
//!
//! let doors = "5".parse::<u8>().into_rop_with(|e| Error::custom("BadDoors").with_message(e.to_string()));
//! assert_eq!(doors.into_value(), Some(5));
//! ```

use core::fmt::Display;

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

use crate::rail::RopResult;
use crate::types::Error;

/// Classifies an `Option` at the boundary of the railway.
pub trait OptionExt<T> {
    /// `Some(v)` succeeds, `None` fails with a single `NullValue` error.
    fn ok_or_null(self) -> RopResult<T>;

    /// `Some(v)` succeeds, `None` fails with `error`.
    fn ok_or_error(self, error: Error) -> RopResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn ok_or_null(self) -> RopResult<T> {
        RopResult::from_option(self)
    }

    #[inline]
    fn ok_or_error(self, error: Error) -> RopResult<T> {
        match self {
            Some(value) => RopResult::from_value(value),
            None => RopResult::from_error(error),
        }
    }
}

/// Lifts a standard `Result` onto the railway.
pub trait ResultExt<T, E> {
    /// Converts the error with `Into<Error>`.
    fn into_rop(self) -> RopResult<T>
    where
        E: Into<Error>;

    /// Converts the error with `f`, only when there is one.
    fn into_rop_with<F>(self, f: F) -> RopResult<T>
    where
        F: FnOnce(E) -> Error;

    /// Reports the error as an `UnhandledException` (code `"3"`) carrying its
    /// text, the same shape produced by
    /// [`RopResult::try_switch`](crate::RopResult::try_switch).
    fn or_unhandled(self) -> RopResult<T>
    where
        E: Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_rop(self) -> RopResult<T>
    where
        E: Into<Error>,
    {
        self.into_rop_with(Into::into)
    }

    #[inline]
    fn into_rop_with<F>(self, f: F) -> RopResult<T>
    where
        F: FnOnce(E) -> Error,
    {
        match self {
            Ok(value) => RopResult::from_value(value),
            Err(error) => RopResult::from_error(f(error)),
        }
    }

    #[inline]
    fn or_unhandled(self) -> RopResult<T>
    where
        E: Display,
    {
        self.into_rop_with(|error| Error::unhandled_exception(error.to_string()))
    }
}
