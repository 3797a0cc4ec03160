//! Built-in text normalisation steps for [`Value::transform`](crate::Value::transform).
//!
//! None of these fail; they exist to clean input up before it is validated
//! or stored. Mappers that can fail are written as closures:
//!
//! ```
//! use valtra::{trim_space, val, ValidationError, Value};
//!
//! let parse_ready = |v: &Value<String>| {
//!     if v.value().chars().all(|c| c.is_ascii_digit()) {
//!         Ok(v.value().clone())
//!     } else {
//!         Err(ValidationError::new(format!("{} must contain only digits", v.name())))
//!     }
//! };
//!
//! let v = val(String::from(" 12a ")).transform((trim_space(), parse_ready));
//! assert_eq!(v.value(), "12a");
//! assert_eq!(v.errors()[0].message(), "value must contain only digits");
//! ```

pub mod case;
pub mod whitespace;

pub use case::{capitalise, lowercase, uppercase, Capitalise, Lowercase, Uppercase};
pub use whitespace::{trim_space, TrimSpace};
