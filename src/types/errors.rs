use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::ops::Deref;

use smallvec::smallvec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize, Serializer};

use crate::types::{Error, ErrorVec};

/// Ordered, non-empty set of [`Error`]s carried by a failed
/// [`RopResult`](crate::RopResult).
///
/// There is no way to build an empty `Errors`: the constructors either take at
/// least one error or report [`EmptyErrors`]. Deserializing `[]` fails for the
/// same reason.
///
/// # Examples
///
/// ```
/// use rop_rail::{Error, Errors};
///
/// let errors = Errors::try_from_iter([Error::null_value(), Error::fail()]).unwrap();
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.head(), &Error::null_value());
///
/// assert!(Errors::try_from_iter(Vec::<Error>::new()).is_err());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(try_from = "Vec<Error>"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Errors {
    items: ErrorVec<Error>,
}

impl Errors {
    /// Creates a set holding exactly one error.
    #[inline]
    pub fn one(error: Error) -> Self {
        Self { items: smallvec![error] }
    }

    /// Collects an iterator of errors, rejecting an empty one.
    pub fn try_from_iter<I>(errors: I) -> Result<Self, EmptyErrors>
    where
        I: IntoIterator<Item = Error>,
    {
        let items: ErrorVec<Error> = errors.into_iter().collect();
        if items.is_empty() {
            Err(EmptyErrors)
        } else {
            Ok(Self { items })
        }
    }

    /// Merges several error sets into one.
    ///
    /// Entries whose kind is [`DomainError::None`](crate::DomainError::None) are
    /// dropped and structurally equal errors are kept once, at the position of
    /// their first occurrence. Returns `None` when nothing survives filtering.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{DomainError, Error, Errors};
    ///
    /// let merged = Errors::merge_distinct([
    ///     Errors::try_from_iter([Error::fail(), Error::new(DomainError::None)]).unwrap(),
    ///     Errors::try_from_iter([Error::null_value(), Error::fail()]).unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(merged.as_slice(), &[Error::fail(), Error::null_value()]);
    /// ```
    pub fn merge_distinct<I>(sets: I) -> Option<Self>
    where
        I: IntoIterator<Item = Errors>,
    {
        let mut items = ErrorVec::new();
        for error in sets.into_iter().flatten() {
            if error.domain_error().is_none() || items.contains(&error) {
                continue;
            }
            items.push(error);
        }

        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// Appends `other` after `self`, keeping duplicates and order.
    #[inline]
    pub fn concat(mut self, other: Errors) -> Self {
        self.items.extend(other.items);
        self
    }

    /// Returns the first error. Always present.
    #[inline]
    pub fn head(&self) -> &Error {
        &self.items[0]
    }

    /// Rewrites every error. The set stays non-empty.
    #[inline]
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(Error) -> Error,
    {
        Self { items: self.items.into_iter().map(f).collect() }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Error] {
        &self.items
    }

    #[inline]
    pub fn into_inner(self) -> ErrorVec<Error> {
        self.items
    }
}

impl Deref for Errors {
    type Target = [Error];

    #[inline]
    fn deref(&self) -> &[Error] {
        &self.items
    }
}

impl AsRef<[Error]> for Errors {
    #[inline]
    fn as_ref(&self) -> &[Error] {
        &self.items
    }
}

impl From<Error> for Errors {
    #[inline]
    fn from(error: Error) -> Self {
        Self::one(error)
    }
}

impl TryFrom<Vec<Error>> for Errors {
    type Error = EmptyErrors;

    fn try_from(errors: Vec<Error>) -> Result<Self, EmptyErrors> {
        Self::try_from_iter(errors)
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = smallvec::IntoIter<[Error; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = core::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// `"; "`-separated on one line, or one `- error` line per entry with `{:#}`.
impl Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            for error in &self.items {
                writeln!(f, "- {}", error)?;
            }
            return Ok(());
        }

        for (i, error) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Errors {}

#[cfg(feature = "serde")]
impl Serialize for Errors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.items.as_slice().serialize(serializer)
    }
}

/// Returned when an error set would have been empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyErrors;

impl Display for EmptyErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an error set must contain at least one error")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EmptyErrors {}
