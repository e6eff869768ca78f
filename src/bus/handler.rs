use alloc::vec::Vec;
use core::any::{type_name, Any};
use core::future::Future;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bus::{BusError, RequestBus};
use crate::rail::RopResult;
use crate::types::{Error, Errors};

/// Handler side of a request/response exchange.
///
/// A request is first validated; a non-empty error list rejects it and
/// [`handle`](Self::handle) is never called.
///
/// # Examples
///
/// ```rust
/// use rop_rail::bus::RequestHandler;
/// use rop_rail::Error;
///
/// struct Echo;
///
/// impl RequestHandler<String> for Echo {
///     type Response = String;
///
///     async fn validate(&self, request: &String) -> Vec<Error> {
///         if request.is_empty() {
///             vec![Error::custom("EmptyRequest")]
///         } else {
///             Vec::new()
///         }
///     }
///
///     async fn handle(&self, request: String) -> String {
///         request
///     }
/// }
/// ```
pub trait RequestHandler<Req> {
    type Response;

    /// Checks a request before it is handled. An empty list means proceed.
    fn validate(&self, _request: &Req) -> impl Future<Output = Vec<Error>> + Send {
        async { Vec::new() }
    }

    /// Produces the response for a request that passed validation.
    fn handle(&self, request: Req) -> impl Future<Output = Self::Response> + Send;
}

/// What a handler sends back: a response, or the validation errors that
/// rejected the request.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<R> {
    Response(R),
    Rejected(Errors),
}

impl<R> Reply<R> {
    /// Puts the reply on the railway: rejections become failures.
    #[inline]
    pub fn into_result(self) -> RopResult<R> {
        match self {
            Self::Response(response) => RopResult::from_value(response),
            Self::Rejected(errors) => RopResult::from_errors(errors),
        }
    }
}

/// Runs the validate-then-handle protocol for one request.
pub async fn consume<Req, H>(handler: &H, request: Req) -> Reply<H::Response>
where
    H: RequestHandler<Req>,
{
    let rejected = handler.validate(&request).await;
    match Errors::try_from_iter(rejected) {
        Ok(errors) => Reply::Rejected(errors),
        Err(_) => Reply::Response(handler.handle(request).await),
    }
}

/// Decodes a type-erased reply coming off a transport.
///
/// Accepted payloads are a [`Reply<R>`], a bare [`Errors`] (validation
/// rejection) or a bare `R`. Anything else is a protocol violation and is
/// reported as [`BusError::UnexpectedResponse`], never as a domain error.
pub fn decode_reply<R>(payload: Box<dyn Any + Send>) -> Result<RopResult<R>, BusError>
where
    R: 'static,
{
    let payload = match payload.downcast::<Reply<R>>() {
        Ok(reply) => return Ok(reply.into_result()),
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<Errors>() {
        Ok(errors) => return Ok(RopResult::from_errors(*errors)),
        Err(payload) => payload,
    };
    match payload.downcast::<R>() {
        Ok(response) => Ok(RopResult::from_value(*response)),
        Err(_) => Err(BusError::UnexpectedResponse { expected: type_name::<R>() }),
    }
}

/// In-process [`RequestBus`] that dispatches straight to one handler.
///
/// The handler is fixed at construction, so resolving the target of a request
/// is a compile-time matter.
#[derive(Debug, Clone, Default)]
pub struct HandlerBus<H> {
    handler: H,
}

impl<H> HandlerBus<H> {
    #[inline]
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    #[inline]
    pub fn handler(&self) -> &H {
        &self.handler
    }
}

impl<Req, H> RequestBus<Req> for HandlerBus<H>
where
    H: RequestHandler<Req> + Sync,
    H::Response: Send,
    Req: Send + Sync,
{
    type Response = H::Response;

    async fn send(&self, request: Req) -> Result<RopResult<Self::Response>, BusError> {
        let reply = consume(&self.handler, request).await;
        #[cfg(feature = "tracing")]
        if let Reply::Rejected(errors) = &reply {
            tracing::debug!(
                request = type_name::<Req>(),
                error_count = errors.len(),
                errors = %errors,
                "request rejected by validation"
            );
        }
        Ok(reply.into_result())
    }
}
