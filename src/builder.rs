//! Builder pipeline: assembling an aggregate from independently fallible parts.
//!
//! Each stage takes the aggregate so far (itself a [`RopResult`]), one field
//! input and a setter returning a new aggregate with that field replaced.
//! Two input shapes are supported side by side:
//!
//! - [`with_field`]: the field is a `RopResult<F>` and may have failed. Errors
//!   from both sides are accumulated, aggregate errors first.
//! - [`with_value`]: the field is a raw `F` and cannot fail.
//!
//! Setters receive the aggregate by value and return a new one, typically a
//! struct-update expression (`Car { engine, ..car }`), so an earlier snapshot
//! can never be seen half-updated.
//!
//! # Examples
//!
//! ```
//! use rop_rail::builder::AggregateBuilder;
//! use rop_rail::{Error, RopResult};
//!
//! #[derive(Debug, Default, Clone, PartialEq)]
//! struct Bike {
//!     frame: Option<&'static str>,
//!     gears: u8,
//! }
//!
//! let bike = AggregateBuilder::new(Bike::default())
//!     .with_field(RopResult::from_value("steel"), |b, frame| Bike { frame: Some(frame), ..b })
//!     .with_value(21, |b, gears| Bike { gears, ..b })
//!     .finish();
//!
//! assert_eq!(bike.data(), &Bike { frame: Some("steel"), gears: 21 });
//!
//! let broken = AggregateBuilder::new(Bike::default())
//!     .with_field(RopResult::<&str>::from_error(Error::fail()), |b, frame| Bike { frame: Some(frame), ..b })
//!     .with_value(21, |b, gears| Bike { gears, ..b })
//!     .finish();
//!
//! assert_eq!(broken.errors(), &[Error::fail()]);
//! ```
use crate::rail::RopResult;

/// Stage for a fallible field.
///
/// Both sides succeeded: `Success(setter(aggregate, field))`. Otherwise a
/// failure holding the aggregate's errors followed by the field's errors, for
/// whichever sides failed. Errors are neither filtered nor deduplicated.
///
/// # Examples
///
/// ```
/// use rop_rail::builder::with_field;
/// use rop_rail::{Error, RopResult};
///
/// let both_failed = with_field(
///     RopResult::<Vec<u8>>::from_error(Error::null_value()),
///     RopResult::<u8>::from_error(Error::fail()),
///     |mut v, x| { v.push(x); v },
/// );
/// assert_eq!(both_failed.errors(), &[Error::null_value(), Error::fail()]);
/// ```
pub fn with_field<A, F, S>(aggregate: RopResult<A>, field: RopResult<F>, setter: S) -> RopResult<A>
where
    S: FnOnce(A, F) -> A,
{
    match (aggregate, field) {
        (RopResult::Success(current), RopResult::Success(value)) => {
            RopResult::Success(setter(current, value))
        }
        (RopResult::Failure(errors), RopResult::Success(_))
        | (RopResult::Success(_), RopResult::Failure(errors)) => RopResult::Failure(errors),
        (RopResult::Failure(errors), RopResult::Failure(field_errors)) => {
            RopResult::Failure(errors.concat(field_errors))
        }
    }
}

/// Stage for a raw field that cannot fail.
///
/// The aggregate's errors are forwarded unchanged when it has already failed.
#[inline]
pub fn with_value<A, F, S>(aggregate: RopResult<A>, value: F, setter: S) -> RopResult<A>
where
    S: FnOnce(A, F) -> A,
{
    aggregate.map(|current| setter(current, value))
}

impl<A> RopResult<A> {
    /// Method form of [`with_field`].
    #[inline]
    pub fn with_field<F, S>(self, field: RopResult<F>, setter: S) -> Self
    where
        S: FnOnce(A, F) -> A,
    {
        with_field(self, field, setter)
    }

    /// Method form of [`with_value`].
    #[inline]
    pub fn with_value<F, S>(self, value: F, setter: S) -> Self
    where
        S: FnOnce(A, F) -> A,
    {
        with_value(self, value, setter)
    }
}

/// Fluent wrapper over a `RopResult<A>` for multi-stage assembly.
///
/// Stages run strictly in order. Once a stage fails, later stages keep the
/// same errors without calling their setters, and observers added with
/// [`tee`](Self::tee) are skipped.
#[must_use]
#[derive(Debug, Clone)]
pub struct AggregateBuilder<A> {
    current: RopResult<A>,
}

impl<A> AggregateBuilder<A> {
    /// Starts from an empty aggregate on the success track.
    #[inline]
    pub fn new(aggregate: A) -> Self {
        Self { current: RopResult::from_value(aggregate) }
    }

    /// Starts from an aggregate that may already have failed.
    #[inline]
    pub fn from_result(current: RopResult<A>) -> Self {
        Self { current }
    }

    #[inline]
    pub fn with_field<F, S>(self, field: RopResult<F>, setter: S) -> Self
    where
        S: FnOnce(A, F) -> A,
    {
        Self { current: with_field(self.current, field, setter) }
    }

    #[inline]
    pub fn with_value<F, S>(self, value: F, setter: S) -> Self
    where
        S: FnOnce(A, F) -> A,
    {
        Self { current: with_value(self.current, value, setter) }
    }

    /// Chains a stage that inspects the whole aggregate and may reject it.
    #[inline]
    pub fn validate<V>(self, validator: V) -> Self
    where
        V: FnOnce(A) -> RopResult<A>,
    {
        Self { current: self.current.bind(validator) }
    }

    /// Observes the aggregate while the pipeline is still on the success track.
    #[inline]
    pub fn tee<F>(self, f: F) -> Self
    where
        F: FnOnce(&A),
    {
        Self { current: self.current.tee(f) }
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        self.current.is_success()
    }

    /// Borrows the current stage.
    #[inline]
    pub fn current(&self) -> &RopResult<A> {
        &self.current
    }

    #[inline]
    pub fn finish(self) -> RopResult<A> {
        self.current
    }
}

impl<A> From<RopResult<A>> for AggregateBuilder<A> {
    #[inline]
    fn from(current: RopResult<A>) -> Self {
        Self::from_result(current)
    }
}
