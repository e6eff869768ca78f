//! Error model: [`Error`], its [`DomainError`] classification and the
//! non-empty [`Errors`] set.
//!
//! # Examples
//!
//! ```
//! use rop_rail::{DomainError, Error, Errors};
//!
//! let errors = Errors::one(Error::custom("MissingEngine").with_message("no engine fitted"));
//!
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors.head().domain_error(), &DomainError::custom("MissingEngine"));
//! println!("{}", errors);
//! // Output: MissingEngine: no engine fitted
//! ```
use smallvec::SmallVec;

pub mod error;
pub mod errors;

pub use error::*;
pub use errors::*;

/// SmallVec-backed storage for error lists.
///
/// Uses inline storage for one element, the common case of a single failure.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
