//! Request/response boundary for message-bus collaborators.
//!
//! The railway does not deliver messages. This module fixes the contract a
//! transport has to honor so its results land on the railway:
//!
//! - [`RequestBus`]: send a typed request, eventually get a
//!   `RopResult<Response>`; a remote validation rejection arrives as a
//!   failure carrying the remote [`Error`](crate::Error)s.
//! - [`RequestHandler`]: validate, then handle. [`consume`] is the glue.
//! - [`HandlerBus`]: in-process bus bound to a single handler.
//! - [`Cancellable`]: external cancellation of a pending call.
//!
//! Transport faults (cancellation, timeout, an undecodable reply) are
//! [`BusError`]s on the outer `Result`, distinct from domain errors.
//!
//! # Feature Flag
//!
//! Requires the `async` feature; `send_timeout` additionally needs
//! `async-tokio`.
//!
//! # Examples
//!
//! ```rust
//! use rop_rail::bus::{HandlerBus, RequestBus, RequestHandler};
//! use rop_rail::Error;
//!
//! struct PriceLookup;
//!
//! impl RequestHandler<u32> for PriceLookup {
//!     type Response = u64;
//!
//!     async fn validate(&self, sku: &u32) -> Vec<Error> {
//!         if *sku == 0 { vec![Error::custom("UnknownSku")] } else { Vec::new() }
//!     }
//!
//!     async fn handle(&self, sku: u32) -> u64 {
//!         u64::from(sku) * 100
//!     }
//! }
//!
//! async fn example() {
//!     let bus = HandlerBus::new(PriceLookup);
//!     let price = bus.send(7u32).await.unwrap();
//!     assert_eq!(price.into_value(), Some(700));
//!
//!     let rejected = bus.send(0u32).await.unwrap();
//!     assert_eq!(rejected.errors(), &[Error::custom("UnknownSku")]);
//! }
//! ```

use core::fmt::{self, Display};
use core::future::Future;

use crate::rail::RopResult;

mod cancel;
mod handler;
#[cfg(feature = "async-tokio")]
mod timeout;

pub use cancel::{CancelExt, Cancellable};
pub use handler::{consume, decode_reply, HandlerBus, Reply, RequestHandler};
#[cfg(feature = "async-tokio")]
pub use timeout::send_timeout;

/// Client side of a request/response exchange.
pub trait RequestBus<Req> {
    type Response;

    /// Sends `request` and waits for the reply.
    ///
    /// `Ok(Failure(..))` is a domain-level rejection; `Err(..)` is a transport
    /// fault.
    fn send(
        &self,
        request: Req,
    ) -> impl Future<Output = Result<RopResult<Self::Response>, BusError>> + Send;
}

/// Transport-level failure of a bus call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// The caller cancelled the call before a reply arrived.
    Cancelled,
    /// No reply arrived within the allotted time.
    Timeout(core::time::Duration),
    /// The reply could not be decoded as the expected response type.
    UnexpectedResponse { expected: &'static str },
}

impl Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => f.write_str("request cancelled"),
            Self::Timeout(limit) => write!(f, "no reply within {:?}", limit),
            Self::UnexpectedResponse { expected } => {
                write!(f, "response is not of the expected type {}", expected)
            }
        }
    }
}

impl std::error::Error for BusError {}
