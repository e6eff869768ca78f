//! The [`RopResult`] railway type and its combinators.
//!
//! A `RopResult<T>` is on one of two tracks. Combinators run their closure on
//! the success track and forward the failure track untouched, with a few
//! deliberate exceptions documented on each method:
//!
//! | Method | Success | Failure |
//! |---|---|---|
//! | [`bind`](RopResult::bind) / [`map`](RopResult::map) | transform | forward |
//! | [`double_map`](RopResult::double_map) | map | observe, forward original errors |
//! | [`tee`](RopResult::tee) | observe, pass through | pass through |
//! | [`succeed`](RopResult::succeed) | map | `NullValue` |
//! | [`fail`](RopResult::fail) | observe, `Fail` | `Fail` |
//! | [`apply`](RopResult::apply) | combine with other | forward |
//! | [`boolean_switch`](RopResult::boolean_switch) | predicate | forward |
//! | [`try_catch_switch`](RopResult::try_catch_switch) | trap panics | forward |
//! | [`combine`] | first success | merged errors |
//!
//! # Examples
//!
//! ```
//! use rop_rail::{Error, RopResult};
//!
//! let mut audit = Vec::new();
//! let r = RopResult::from_value(" 42 ")
//!     .map(str::trim)
//!     .try_switch(|s| s.parse::<u32>())
//!     .tee(|n| audit.push(*n))
//!     .bind(|n| if n > 10 { RopResult::from_value(n) } else { RopResult::from_error(Error::fail()) });
//!
//! assert_eq!(r.into_value(), Some(42));
//! assert_eq!(audit, vec![42]);
//! ```
pub mod combine;
pub mod core;
pub mod iter;
pub mod switch;

pub use self::combine::combine;
pub use self::core::*;
pub use self::iter::*;
