//! Railway-oriented error handling: a two-track [`RopResult`] carrying either a
//! value or a non-empty set of domain [`Error`]s, the combinators that thread
//! it through a computation, and a builder pipeline for assembling aggregates
//! from independently fallible parts.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `rop_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining
//!
//! ```
//! use rop_rail::{Error, RopResult};
//!
//! let r = RopResult::from_value(3)
//!     .map(|n| n * 2)
//!     .boolean_switch(|n| n > 5);
//!
//! assert_eq!(r.into_value(), Some(true));
//!
//! let r = RopResult::<i32>::from_error(Error::fail()).map(|n| n * 2);
//! assert_eq!(r.errors(), &[Error::fail()]);
//! ```
//!
//! ## Fan-in
//!
//! ```
//! use rop_rail::{combine, Error, RopResult};
//!
//! let checks = [
//!     RopResult::from_value("ok"),
//!     RopResult::from_error(Error::custom("TooShort")),
//!     RopResult::from_error(Error::custom("TooShort")),
//! ];
//!
//! assert_eq!(combine(checks).errors(), &[Error::custom("TooShort")]);
//! ```
//!
//! ## Builder Pipeline
//!
//! ```
//! use rop_rail::builder::AggregateBuilder;
//! use rop_rail::RopResult;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Order {
//!     sku: u32,
//!     quantity: u16,
//! }
//!
//! let order = AggregateBuilder::new(Order::default())
//!     .with_field(RopResult::from_value(42), |o, sku| Order { sku, ..o })
//!     .with_value(3, |o, quantity| Order { quantity, ..o })
//!     .finish();
//!
//! assert_eq!(order.into_value(), Some(Order { sku: 42, quantity: 3 }));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Builder pipeline stages for aggregate assembly
pub mod builder;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The `RopResult` type and its combinators
pub mod rail;
/// Boundary conversions and instrumentation traits
pub mod traits;
/// Error model: `Error`, `DomainError`, `Errors`
pub mod types;

/// Request/response bus boundary (requires `async` feature)
#[cfg(feature = "async")]
pub mod bus;

pub use builder::AggregateBuilder;
pub use rail::{combine, RopResult};
pub use types::{
    DomainError, EmptyErrors, Error, ErrorVec, Errors, UNHANDLED_EXCEPTION_CODE,
};
