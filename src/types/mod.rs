//! Error types and storage.
//!
//! # Examples
//!
//! ```
//! use valtra::types::{Accumulator, ValidationError};
//!
//! let mut errors = Accumulator::new();
//! errors.push(ValidationError::new("name is required"));
//! errors.push(ValidationError::new("age cannot be smaller than 18"));
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.as_slice()[0].message(), "name is required");
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod validation_error;

pub use accumulator::Accumulator;
pub use validation_error::ValidationError;

/// SmallVec-backed collection used for accumulating errors.
///
/// Most wrapped values fail at most one or two checks, so two slots are kept
/// inline before spilling to the heap.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Result alias for callers that turn a [`Value`](crate::Value) or a
/// [`Collector`](crate::Collector) into a `Result`.
pub type ValidationResult<T> = Result<T, ErrorVec<ValidationError>>;
