use crate::types::{EmptyErrors, Error, Errors};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two-track result: a success payload or a non-empty set of [`Error`]s.
///
/// `RopResult<T>` is the railway value threaded through every combinator in
/// this crate. Exactly one track is occupied: `Success` carries the payload and
/// no errors, `Failure` carries at least one error and no payload.
///
/// An absent value can never be a success. Sources that may be absent go
/// through [`RopResult::from_option`] (or
/// [`OptionExt::ok_or_null`](crate::traits::OptionExt::ok_or_null)), which
/// classify `None` as a [`DomainError::NullValue`](crate::DomainError::NullValue)
/// failure.
///
/// Every operation consumes the value and returns a new one; nothing is
/// mutated in place.
///
/// # Serde Support
///
/// With the `serde` feature a success serializes as `{"data": ...}` and a
/// failure as `{"errors": [...]}`.
///
/// # Examples
///
/// ```
/// use rop_rail::{DomainError, RopResult};
///
/// let present = RopResult::from_option(Some(7));
/// assert!(present.is_success());
/// assert_eq!(present.data(), &7);
///
/// let absent = RopResult::<i32>::from_option(None);
/// assert!(absent.is_failure());
/// assert_eq!(absent.errors()[0].domain_error(), &DomainError::NullValue);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RopResult<T> {
    #[cfg_attr(feature = "serde", serde(rename = "data"))]
    Success(T),
    #[cfg_attr(feature = "serde", serde(rename = "errors"))]
    Failure(Errors),
}

impl<T> RopResult<T> {
    /// Wraps a present value on the success track.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::RopResult;
    ///
    /// let r = RopResult::from_value("wheel");
    /// assert!(r.is_success());
    /// assert!(r.errors().is_empty());
    /// ```
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self::Success(value)
    }

    /// Classifies an optional value: `Some` succeeds, `None` fails with a
    /// single `NullValue` error.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, RopResult};
    ///
    /// let r = RopResult::<String>::from_option(None);
    /// assert_eq!(r.errors(), &[Error::null_value()]);
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Success(value),
            None => Self::from_error(Error::null_value()),
        }
    }

    /// Puts a single error on the failure track.
    #[inline]
    pub fn from_error(error: Error) -> Self {
        Self::Failure(Errors::one(error))
    }

    /// Puts an existing error set on the failure track.
    #[inline]
    pub fn from_errors(errors: Errors) -> Self {
        Self::Failure(errors)
    }

    /// Builds a failure from any iterator of errors, rejecting an empty one.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, RopResult};
    ///
    /// let r = RopResult::<u8>::try_from_errors([Error::fail(), Error::fail()]).unwrap();
    /// assert_eq!(r.errors().len(), 2);
    ///
    /// assert!(RopResult::<u8>::try_from_errors(Vec::<Error>::new()).is_err());
    /// ```
    #[inline]
    pub fn try_from_errors<I>(errors: I) -> Result<Self, EmptyErrors>
    where
        I: IntoIterator<Item = Error>,
    {
        Errors::try_from_iter(errors).map(Self::Failure)
    }

    /// Lifts a standard single-error `Result`.
    #[inline]
    pub fn from_result(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::from_error(error),
        }
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Calling this on a failure is a precondition violation, not a
    /// recoverable error: check [`is_success`](Self::is_success) first or use
    /// [`value`](Self::value).
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn data(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(errors) => panic!("RopResult::data called on a failure: {}", errors),
        }
    }

    /// Consumes the result and returns the success payload.
    ///
    /// # Panics
    ///
    /// Same precondition as [`data`](Self::data).
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn into_data(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(errors) => {
                panic!("RopResult::into_data called on a failure: {}", errors)
            }
        }
    }

    /// Returns the payload if on the success track.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the errors: empty on success, at least one on failure.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[Error] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(errors) => errors.as_slice(),
        }
    }

    #[inline]
    pub fn into_errors(self) -> Option<Errors> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// Folds both tracks into a single value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, RopResult};
    ///
    /// let ok = RopResult::from_value(3).match_with(|n| n * 2, |_| 0);
    /// assert_eq!(ok, 6);
    ///
    /// let failed = RopResult::<i32>::from_error(Error::fail())
    ///     .match_with(|n| n * 2, |errors| -(errors.len() as i32));
    /// assert_eq!(failed, -1);
    /// ```
    #[inline]
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Errors) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(errors) => on_failure(errors),
        }
    }

    /// Borrows the payload, leaving a clone of the errors on failure.
    #[inline]
    pub fn as_ref(&self) -> RopResult<&T> {
        match self {
            Self::Success(value) => RopResult::Success(value),
            Self::Failure(errors) => RopResult::Failure(errors.clone()),
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_std(self) -> Result<T, Errors> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }
}

impl<T> From<Option<T>> for RopResult<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T> From<Result<T, Errors>> for RopResult<T> {
    #[inline]
    fn from(result: Result<T, Errors>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(errors) => Self::Failure(errors),
        }
    }
}

impl<T> From<RopResult<T>> for Result<T, Errors> {
    #[inline]
    fn from(result: RopResult<T>) -> Self {
        result.into_std()
    }
}
