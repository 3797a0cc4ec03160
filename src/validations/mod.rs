//! Built-in checks.
//!
//! Every factory here returns a small check type implementing
//! [`Check`](crate::Check), with a `message` builder that swaps the default
//! text for a fixed one:
//!
//! ```
//! use valtra::{min, val_named};
//!
//! let v = val_named(16, "age").validate((min(18).message("you must be an adult"),));
//! assert_eq!(v.errors()[0].message(), "you must be an adult");
//! ```
//!
//! Override messages are used exactly as given; the value's name and the
//! bound are only interpolated into the default messages.

pub mod bounds;
pub mod email;
pub mod length;
pub mod required;

pub use bounds::{max, min, Max, Min};
pub use email::{email, is_email, Email};
pub use length::{
    max_length, max_length_map, max_length_slice, max_length_string, min_length, min_length_map,
    min_length_slice, min_length_string, MaxLength, MinLength,
};
pub use required::{required, Required};
