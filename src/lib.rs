//! Valtra wraps a single value, runs ordered checks and transformations over
//! it, and accumulates every failure instead of stopping at the first one.
//! A [`Collector`] merges the failures of many values so a whole record can
//! be validated field by field and reported at once.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `valtra::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Validating a single value
//!
//! ```
//! use valtra::{max, min, required, val_named};
//!
//! let age = val_named(25, "age").validate((required(), min(20), max(30)));
//! assert!(age.is_valid());
//! assert_eq!(*age.value(), 25);
//! ```
//!
//! ## Normalising, then validating
//!
//! ```
//! use valtra::{required, trim_space, uppercase, val};
//!
//! let v = val(String::from(" hello "))
//!     .transform((trim_space(), uppercase()))
//!     .validate((required(),));
//!
//! assert_eq!(v.value(), "HELLO");
//! assert!(v.errors().is_empty());
//! ```
//!
//! ## Collecting errors across the fields of a record
//!
//! ```
//! use valtra::{email, min, required, trim_space, val_named, Collector};
//!
//! struct User {
//!     name: String,
//!     email: String,
//!     age: u32,
//! }
//!
//! let mut c = Collector::new();
//! let user = User {
//!     name: val_named(String::from("  "), "name")
//!         .transform((trim_space(),))
//!         .validate((required(),))
//!         .collect(&mut c),
//!     email: val_named(String::from("nobody"), "email")
//!         .validate((email(),))
//!         .collect(&mut c),
//!     age: val_named(30u32, "age").validate((min(18),)).collect(&mut c),
//! };
//!
//! assert_eq!(user.age, 30);
//! assert!(!c.is_valid());
//! let messages: Vec<String> = c.errors().iter().map(ToString::to_string).collect();
//! assert_eq!(
//!     messages,
//!     ["name is required", "email must be in correct email format"]
//! );
//! ```

#[macro_use]
mod macros;

/// Convenience re-exports for quick starts
pub mod prelude;
/// Capabilities behind checks, mappers, bounds and lengths
pub mod traits;
/// Transformations that normalise text payloads
pub mod transformations;
/// Error type and error storage
pub mod types;
/// Built-in validation rules
pub mod validations;
/// The wrapped value and the cross-value collector
pub mod value;

pub use traits::{Check, Checks, Length, Mapper, Mappers, Number};
pub use transformations::{
    capitalise, lowercase, trim_space, uppercase, Capitalise, Lowercase, TrimSpace, Uppercase,
};
pub use types::{Accumulator, ErrorVec, ValidationError, ValidationResult};
pub use validations::{
    email, is_email, max, max_length, max_length_map, max_length_slice, max_length_string, min,
    min_length, min_length_map, min_length_slice, min_length_string, required, Email, Max,
    MaxLength, Min, MinLength, Required,
};
pub use value::{val, val_named, validate, Collector, Value, DEFAULT_NAME};
