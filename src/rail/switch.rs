use core::fmt::Display;

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

use crate::rail::core::RopResult;
use crate::types::{Error, Errors};

impl<T> RopResult<T> {
    /// Chains a step that may itself fail.
    ///
    /// `f` runs only on the success track; a failure is forwarded with its
    /// errors untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, RopResult};
    ///
    /// fn parse_doors(raw: &str) -> RopResult<u8> {
    ///     RopResult::from_option(raw.parse().ok())
    /// }
    ///
    /// assert_eq!(RopResult::from_value("4").bind(parse_doors).into_value(), Some(4));
    /// assert_eq!(
    ///     RopResult::from_value("four").bind(parse_doors).errors(),
    ///     &[Error::null_value()]
    /// );
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> RopResult<U>
    where
        F: FnOnce(T) -> RopResult<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(errors) => RopResult::Failure(errors),
        }
    }

    /// Transforms the payload with a step that cannot fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::RopResult;
    ///
    /// let doubled = RopResult::from_value(21).map(|x| x * 2);
    /// assert_eq!(doubled.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> RopResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => RopResult::Success(f(value)),
            Self::Failure(errors) => RopResult::Failure(errors),
        }
    }

    /// Maps the success track with `on_success` and observes the failure track
    /// with `on_failure`.
    ///
    /// The value returned by `on_failure` is discarded: a failure stays a
    /// failure carrying its original errors. Only the side effect of
    /// `on_failure` is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, RopResult};
    ///
    /// let mut seen = 0;
    /// let r = RopResult::<i32>::from_error(Error::fail())
    ///     .double_map(|x| x + 1, |errors| { seen = errors.len(); 99 });
    ///
    /// assert_eq!(seen, 1);
    /// assert_eq!(r.errors(), &[Error::fail()]);
    /// ```
    #[inline]
    pub fn double_map<U, S, F>(self, on_success: S, on_failure: F) -> RopResult<U>
    where
        S: FnOnce(T) -> U,
        F: FnOnce(&Errors) -> U,
    {
        match self {
            Self::Success(value) => RopResult::Success(on_success(value)),
            Self::Failure(errors) => {
                let _ = on_failure(&errors);
                RopResult::Failure(errors)
            }
        }
    }

    /// Runs a dead-end observer on the payload and passes `self` through.
    ///
    /// Skipped entirely on the failure track.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::RopResult;
    ///
    /// let mut log = Vec::new();
    /// let r = RopResult::from_value(5).tee(|n| log.push(*n));
    ///
    /// assert_eq!(log, vec![5]);
    /// assert_eq!(r.into_value(), Some(5));
    /// ```
    #[inline]
    pub fn tee<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Applies `f` to the payload without consulting the track.
    ///
    /// On success this is [`map`](Self::map). On failure there is no payload to
    /// hand to `f`, so `f` is not invoked and the result is a single
    /// `NullValue` error; the original errors are not carried over. Prefer
    /// [`map`](Self::map) unless that exact behavior is wanted.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, RopResult};
    ///
    /// let r = RopResult::<i32>::from_error(Error::fail()).succeed(|x| x + 1);
    /// assert_eq!(r.errors(), &[Error::null_value()]);
    /// ```
    #[inline]
    pub fn succeed<U, F>(self, f: F) -> RopResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => RopResult::Success(f(value)),
            Self::Failure(_) => RopResult::from_error(Error::null_value()),
        }
    }

    /// Runs `f` for its side effect and then always fails with a single
    /// `Fail` error, whatever the incoming track was.
    ///
    /// Not railway-safe: the original errors of a failed input are replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, RopResult};
    ///
    /// let mut touched = false;
    /// let r: RopResult<()> = RopResult::from_value(1).fail(|_| touched = true);
    ///
    /// assert!(touched);
    /// assert_eq!(r.errors(), &[Error::fail()]);
    /// ```
    #[inline]
    pub fn fail<U, F>(self, f: F) -> RopResult<U>
    where
        F: FnOnce(T) -> U,
    {
        if let Self::Success(value) = self {
            let _ = f(value);
        }
        RopResult::from_error(Error::fail())
    }

    /// Lifts a predicate into the railway.
    ///
    /// `true` becomes `Success(true)`, `false` becomes a single
    /// `BooleanSwitchFailed` error. A failed input is forwarded without
    /// calling the predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, RopResult};
    ///
    /// assert_eq!(RopResult::from_value(4).boolean_switch(|n| n % 2 == 0).into_value(), Some(true));
    /// assert_eq!(
    ///     RopResult::from_value(3).boolean_switch(|n| n % 2 == 0).errors(),
    ///     &[Error::boolean_switch_failed()]
    /// );
    /// ```
    #[inline]
    pub fn boolean_switch<F>(self, f: F) -> RopResult<bool>
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Success(value) => {
                if f(value) {
                    RopResult::Success(true)
                } else {
                    RopResult::from_error(Error::boolean_switch_failed())
                }
            }
            Self::Failure(errors) => RopResult::Failure(errors),
        }
    }

    /// Runs a fallible step and turns its error into an `UnhandledException`
    /// domain error with code `"3"` and the error's text as message.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, RopResult};
    ///
    /// let r = RopResult::from_value("x1").try_switch(|s| s.parse::<u32>());
    /// assert_eq!(
    ///     r.errors(),
    ///     &[Error::unhandled_exception("invalid digit found in string")]
    /// );
    /// ```
    #[inline]
    pub fn try_switch<U, E, F>(self, f: F) -> RopResult<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Display,
    {
        match self {
            Self::Success(value) => match f(value) {
                Ok(output) => RopResult::Success(output),
                Err(error) => RopResult::from_error(Error::unhandled_exception(error.to_string())),
            },
            Self::Failure(errors) => RopResult::Failure(errors),
        }
    }

    /// Runs `f` behind a panic boundary.
    ///
    /// A panic raised by `f` is caught and reported as a single
    /// `UnhandledException` error with code `"3"` and the panic message; it
    /// never unwinds past this call. A failed input is forwarded without
    /// calling `f`.
    ///
    /// The process-wide panic hook still runs, so the panic message is
    /// reported on stderr by the default hook.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, RopResult};
    ///
    /// let ok = RopResult::from_value(2).try_catch_switch(|n| n * 10);
    /// assert_eq!(ok.into_value(), Some(20));
    ///
    /// let caught = RopResult::from_value(0).try_catch_switch(|n: i32| -> i32 {
    ///     if n == 0 {
    ///         panic!("boom");
    ///     }
    ///     n
    /// });
    /// assert_eq!(caught.errors(), &[Error::unhandled_exception("boom")]);
    /// ```
    #[cfg(feature = "std")]
    pub fn try_catch_switch<U, F>(self, f: F) -> RopResult<U>
    where
        F: FnOnce(T) -> U,
    {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        match self {
            Self::Success(value) => match catch_unwind(AssertUnwindSafe(move || f(value))) {
                Ok(output) => RopResult::Success(output),
                Err(payload) => {
                    RopResult::from_error(Error::unhandled_exception(panic_message(payload)))
                }
            },
            Self::Failure(errors) => RopResult::Failure(errors),
        }
    }

    /// Replaces a failure with the outcome of `f`; successes pass through.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, RopResult};
    ///
    /// let r = RopResult::<u8>::from_error(Error::null_value()).recover(|_| RopResult::from_value(0));
    /// assert_eq!(r.into_value(), Some(0));
    /// ```
    #[inline]
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(Errors) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(errors) => f(errors),
        }
    }

    /// Rewrites each error on the failure track.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, RopResult};
    ///
    /// let r = RopResult::<u8>::from_error(Error::fail())
    ///     .map_errors(|e| e.with_code("E1"));
    /// assert_eq!(r.errors()[0].code(), Some("E1"));
    /// ```
    #[inline]
    pub fn map_errors<F>(self, f: F) -> Self
    where
        F: FnMut(Error) -> Error,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(errors) => Self::Failure(errors.map(f)),
        }
    }
}

#[cfg(feature = "std")]
fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    match payload.downcast::<&'static str>() {
        Ok(message) => (*message).to_string(),
        Err(payload) => match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(_) => "unknown panic".to_string(),
        },
    }
}
