//! External cancellation of bus calls.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::bus::BusError;

pin_project! {
    /// Races a bus call against a cancellation signal.
    ///
    /// The signal is polled first: once it completes, the call is abandoned
    /// unfinished and [`BusError::Cancelled`] is returned. Polling again after
    /// completion returns `Poll::Pending`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rop_rail::bus::{BusError, CancelExt};
    ///
    /// async fn example() {
    ///     let call = async { Ok::<_, BusError>(1) };
    ///     let result = call.with_cancel(core::future::ready(())).await;
    ///     assert_eq!(result, Err(BusError::Cancelled));
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct Cancellable<F, C> {
        #[pin]
        future: F,
        #[pin]
        cancel: C,
        terminated: bool,
    }
}

impl<F, C> Cancellable<F, C> {
    #[inline]
    pub fn new(future: F, cancel: C) -> Self {
        Self { future, cancel, terminated: false }
    }
}

impl<F, C, T> Future for Cancellable<F, C>
where
    F: Future<Output = Result<T, BusError>>,
    C: Future<Output = ()>,
{
    type Output = Result<T, BusError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        if *this.terminated {
            return Poll::Pending;
        }

        if this.cancel.poll(cx).is_ready() {
            *this.terminated = true;
            return Poll::Ready(Err(BusError::Cancelled));
        }

        match this.future.poll(cx) {
            Poll::Ready(output) => {
                *this.terminated = true;
                Poll::Ready(output)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, C, T> FusedFuture for Cancellable<F, C>
where
    F: Future<Output = Result<T, BusError>>,
    C: Future<Output = ()>,
{
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}

/// Adds [`with_cancel`](Self::with_cancel) to any bus call.
pub trait CancelExt<T>: Future<Output = Result<T, BusError>> + Sized {
    /// Cancels the call when `cancel` completes first.
    fn with_cancel<C>(self, cancel: C) -> Cancellable<Self, C>
    where
        C: Future<Output = ()>,
    {
        Cancellable::new(self, cancel)
    }
}

impl<F, T> CancelExt<T> for F where F: Future<Output = Result<T, BusError>> {}
