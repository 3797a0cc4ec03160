//! The wrapped value and the collector that merges errors across values.
//!
//! A [`Value`] binds a payload to a name and an error list. Chained calls to
//! [`Value::validate`] and [`Value::transform`] grow that list without ever
//! stopping early, and [`Value::collect`] hands it to a [`Collector`] so a
//! whole record can be reported at once.
//!
//! # Examples
//!
//! ```
//! use valtra::{email, lowercase, trim_space, val_named};
//!
//! let address = val_named(String::from("  Bob@Example.COM "), "email")
//!     .transform((trim_space(), lowercase()))
//!     .validate((email(),));
//!
//! assert!(address.is_valid());
//! assert_eq!(address.value(), "bob@example.com");
//! ```
pub mod collector;
pub mod core;

pub use self::collector::Collector;
pub use self::core::*;
