//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use valtra::prelude::*;
//!
//! let mut c = Collector::new();
//! let username = val_named(String::from(" Alice "), "username")
//!     .transform((trim_space(), lowercase()))
//!     .validate((required(), min_length_string(3), max_length_string(20)))
//!     .collect(&mut c);
//!
//! assert!(c.is_valid());
//! assert_eq!(username, "alice");
//! ```

// Entry points
pub use crate::value::{val, val_named, Collector, Value};

// Checks
pub use crate::validations::{
    email, max, max_length, max_length_map, max_length_slice, max_length_string, min, min_length,
    min_length_map, min_length_slice, min_length_string, required,
};

// Mappers
pub use crate::transformations::{capitalise, lowercase, trim_space, uppercase};

// Traits and error type for custom rules
pub use crate::traits::{Check, Mapper};
pub use crate::types::ValidationError;
