use alloc::vec::Vec;

use crate::rail::core::RopResult;
use crate::types::{Error, Errors};

impl<T> RopResult<T> {
    /// Combines the payload with the payload of another result.
    ///
    /// - `self` failed: its errors are forwarded; `other` and `combine` are
    ///   not consulted.
    /// - `self` succeeded and `other` failed: `other`'s errors are forwarded.
    /// - both succeeded: `combine(self_data, other_data)`.
    ///
    /// To report the errors of both sides at once use
    /// [`with_field`](crate::builder::with_field) instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, RopResult};
    ///
    /// let total = RopResult::from_value(2)
    ///     .apply(RopResult::from_value(3), |a, b| RopResult::from_value(a + b));
    /// assert_eq!(total.into_value(), Some(5));
    ///
    /// let missing = RopResult::from_value(2)
    ///     .apply(RopResult::<i32>::from_error(Error::null_value()), |a, b| RopResult::from_value(a + b));
    /// assert_eq!(missing.errors(), &[Error::null_value()]);
    /// ```
    #[inline]
    pub fn apply<U, F>(self, other: RopResult<U>, combine: F) -> Self
    where
        F: FnOnce(T, U) -> Self,
    {
        match self {
            Self::Success(value) => match other {
                RopResult::Success(other_value) => combine(value, other_value),
                RopResult::Failure(errors) => Self::Failure(errors),
            },
            Self::Failure(errors) => Self::Failure(errors),
        }
    }

    /// Combines the payload with a raw value that cannot fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::RopResult;
    ///
    /// let label = RopResult::from_value(String::from("v"))
    ///     .apply_value(8, |s, n| RopResult::from_value(format!("{s}{n}")));
    /// assert_eq!(label.into_value().as_deref(), Some("v8"));
    /// ```
    #[inline]
    pub fn apply_value<U, F>(self, value: U, combine: F) -> Self
    where
        F: FnOnce(T, U) -> Self,
    {
        match self {
            Self::Success(current) => combine(current, value),
            Self::Failure(errors) => Self::Failure(errors),
        }
    }
}

/// Fans several results into one.
///
/// - Every input succeeded: the **first** input is returned; later successes
///   are dropped.
/// - Any input failed: the errors of all failing inputs are merged by
///   [`Errors::merge_distinct`]: `None`-kind entries removed, structural
///   duplicates removed, first-occurrence order across inputs.
///
/// Two degenerate cases have no natural answer and are settled as follows:
/// an empty input yields a single `NullValue` error (there is no first value),
/// and failures whose errors are all `None`-kind yield a single `Fail` error.
///
/// # Examples
///
/// ```
/// use rop_rail::{combine, Error, RopResult};
///
/// let first = combine([RopResult::from_value(1), RopResult::from_value(2)]);
/// assert_eq!(first.into_value(), Some(1));
///
/// let merged = combine([
///     RopResult::from_value(1),
///     RopResult::from_error(Error::fail()),
///     RopResult::from_error(Error::fail()),
///     RopResult::from_error(Error::null_value()),
/// ]);
/// assert_eq!(merged.errors(), &[Error::fail(), Error::null_value()]);
/// ```
pub fn combine<T, I>(results: I) -> RopResult<T>
where
    I: IntoIterator<Item = RopResult<T>>,
{
    let mut first = None;
    let mut failures = Vec::new();

    for result in results {
        match result {
            RopResult::Success(value) => {
                if first.is_none() {
                    first = Some(value);
                }
            }
            RopResult::Failure(errors) => failures.push(errors),
        }
    }

    if failures.is_empty() {
        return RopResult::from_option(first);
    }
    merged_failure(failures)
}

fn merged_failure<T>(failures: Vec<Errors>) -> RopResult<T> {
    match Errors::merge_distinct(failures) {
        Some(errors) => RopResult::Failure(errors),
        None => RopResult::from_error(Error::fail()),
    }
}

/// Collects every payload, or the merged errors of every failure.
///
/// Uses the same merge rules as [`combine`].
///
/// # Examples
///
/// ```
/// use rop_rail::{Error, RopResult};
///
/// let all: RopResult<Vec<i32>> = vec![RopResult::from_value(1), RopResult::from_value(2)]
///     .into_iter()
///     .collect();
/// assert_eq!(all.into_value(), Some(vec![1, 2]));
///
/// let some_failed: RopResult<Vec<i32>> = vec![
///     RopResult::from_error(Error::fail()),
///     RopResult::from_value(2),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(some_failed.errors(), &[Error::fail()]);
/// ```
impl<T> FromIterator<RopResult<T>> for RopResult<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = RopResult<T>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, upper) = iter.size_hint();
        let mut values = Vec::with_capacity(upper.unwrap_or(lower));
        let mut failures = Vec::new();

        for result in iter {
            match result {
                RopResult::Success(value) => {
                    if failures.is_empty() {
                        values.push(value);
                    }
                }
                RopResult::Failure(errors) => failures.push(errors),
            }
        }

        if failures.is_empty() {
            RopResult::Success(values)
        } else {
            merged_failure(failures)
        }
    }
}
