//! Extension traits at the edges of the railway.
//!
//! - [`OptionExt`]: classify an `Option` (absence becomes `NullValue`)
//! - [`ResultExt`]: lift a standard `Result` with an explicit error mapping
//! - `TraceExt`: emit `tracing` events for a stage (`tracing` feature)
//!
//! # Examples
//!
//! ```
//! use rop_rail::traits::OptionExt;
//! use rop_rail::DomainError;
//!
//! let engine: Option<&str> = None;
//! let r = engine.ok_or_null();
//! assert_eq!(r.errors()[0].domain_error(), &DomainError::NullValue);
//! ```

pub mod boundary;
#[cfg(feature = "tracing")]
pub mod trace;

pub use boundary::{OptionExt, ResultExt};
#[cfg(feature = "tracing")]
pub use trace::TraceExt;
