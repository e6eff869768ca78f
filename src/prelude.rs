//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use rop_rail::prelude::*;
//!
//! fn wheels(count: Option<u8>) -> RopResult<u8> {
//!     count.ok_or_null().boolean_switch(|n| n == 4).map(|_| 4)
//! }
//!
//! assert_eq!(wheels(Some(4)).into_value(), Some(4));
//! assert_eq!(wheels(None).errors(), &[Error::null_value()]);
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`RopResult`], [`Error`], [`DomainError`], [`Errors`], [`AggregateBuilder`]
//! - **Functions**: [`combine`]
//! - **Traits**: [`OptionExt`], [`ResultExt`]

pub use crate::builder::AggregateBuilder;
pub use crate::rail::{combine, RopResult};
pub use crate::traits::{OptionExt, ResultExt};
pub use crate::types::{DomainError, Error, Errors};

#[cfg(feature = "tracing")]
pub use crate::traits::TraceExt;

#[cfg(feature = "async")]
pub use crate::bus::{CancelExt, HandlerBus, RequestBus, RequestHandler};
