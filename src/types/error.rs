use alloc::borrow::Cow;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Diagnostic code attached to errors produced by the panic and fault boundaries
/// ([`RopResult::try_catch_switch`](crate::RopResult::try_catch_switch) and
/// [`RopResult::try_switch`](crate::RopResult::try_switch)).
pub const UNHANDLED_EXCEPTION_CODE: &str = "3";

/// Classification tag carried by every [`Error`].
///
/// The set is open: callers add their own kinds through [`DomainError::Custom`].
///
/// # Examples
///
/// ```
/// use rop_rail::DomainError;
///
/// let kind = DomainError::custom("OutOfStock");
/// assert_eq!(kind.to_string(), "OutOfStock");
/// assert!(!kind.is_none());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DomainError {
    /// Not an actual failure. Filtered out when error sets are merged.
    None,
    /// A value was absent where one was required.
    NullValue,
    /// Explicit unconditional failure marker.
    Fail,
    /// A fault trapped at a fault boundary.
    UnhandledException,
    /// A predicate lifted into the railway evaluated to `false`.
    BooleanSwitchFailed,
    /// Caller-defined domain kind.
    Custom(Cow<'static, str>),
}

impl DomainError {
    /// Creates a caller-defined kind.
    #[inline]
    pub fn custom<S>(name: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::Custom(name.into())
    }

    /// Returns `true` for the [`DomainError::None`] sentinel.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the display name of the kind.
    pub fn name(&self) -> &str {
        match self {
            Self::None => "None",
            Self::NullValue => "NullValue",
            Self::Fail => "Fail",
            Self::UnhandledException => "UnhandledException",
            Self::BooleanSwitchFailed => "BooleanSwitchFailed",
            Self::Custom(name) => name.as_ref(),
        }
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable error value: a [`DomainError`] plus an optional code and message.
///
/// Two errors are equal iff all three fields are equal, which is what
/// [`combine`](crate::combine) relies on when deduplicating.
///
/// # Examples
///
/// ```
/// use rop_rail::{DomainError, Error};
///
/// let err = Error::new(DomainError::custom("InvalidVin"))
///     .with_code("E042")
///     .with_message("vin must be 17 characters");
///
/// assert_eq!(err.code(), Some("E042"));
/// assert_eq!(err.to_string(), "InvalidVin [E042]: vin must be 17 characters");
/// assert_eq!(Error::null_value(), Error::new(DomainError::NullValue));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Error {
    domain_error: DomainError,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    code: Option<Cow<'static, str>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    message: Option<Cow<'static, str>>,
}

impl Error {
    /// Creates an error of the given kind with no code and no message.
    #[inline]
    pub fn new(domain_error: DomainError) -> Self {
        Self { domain_error, code: None, message: None }
    }

    /// `Error { NullValue }`.
    #[inline]
    pub fn null_value() -> Self {
        Self::new(DomainError::NullValue)
    }

    /// `Error { Fail }`.
    #[inline]
    pub fn fail() -> Self {
        Self::new(DomainError::Fail)
    }

    /// `Error { BooleanSwitchFailed }`.
    #[inline]
    pub fn boolean_switch_failed() -> Self {
        Self::new(DomainError::BooleanSwitchFailed)
    }

    /// `Error { UnhandledException, code: "3", message }`.
    #[inline]
    pub fn unhandled_exception<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self::new(DomainError::UnhandledException)
            .with_code(UNHANDLED_EXCEPTION_CODE)
            .with_message(message)
    }

    /// Shorthand for `Error::new(DomainError::custom(name))`.
    #[inline]
    pub fn custom<S>(name: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(DomainError::custom(name))
    }

    /// Returns a copy of this error with `code` set.
    #[inline]
    pub fn with_code<C>(self, code: C) -> Self
    where
        C: Into<Cow<'static, str>>,
    {
        Self { code: Some(code.into()), ..self }
    }

    /// Returns a copy of this error with `message` set.
    #[inline]
    pub fn with_message<M>(self, message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { message: Some(message.into()), ..self }
    }

    #[inline]
    pub fn domain_error(&self) -> &DomainError {
        &self.domain_error
    }

    #[inline]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl From<DomainError> for Error {
    #[inline]
    fn from(domain_error: DomainError) -> Self {
        Self::new(domain_error)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.domain_error)?;
        if let Some(code) = &self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
