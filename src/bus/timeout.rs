//! Tokio-backed deadline for bus calls.

use core::time::Duration;

use crate::bus::{BusError, RequestBus};
use crate::rail::RopResult;

/// Sends `request` and gives up after `limit`.
///
/// The pending call is dropped on expiry and [`BusError::Timeout`] is
/// returned. Nothing is retried.
///
/// # Example
///
/// ```rust,ignore
/// use rop_rail::bus::send_timeout;
///
/// let reply = send_timeout(&bus, request, Duration::from_secs(2)).await?;
/// ```
pub async fn send_timeout<B, Req>(
    bus: &B,
    request: Req,
    limit: Duration,
) -> Result<RopResult<B::Response>, BusError>
where
    B: RequestBus<Req>,
{
    match tokio::time::timeout(limit, bus.send(request)).await {
        Ok(reply) => reply,
        Err(_) => Err(BusError::Timeout(limit)),
    }
}
