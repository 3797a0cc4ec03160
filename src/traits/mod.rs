//! Capabilities the validation pipeline is built on.
//!
//! - [`Check`] / [`Checks`]: a rule that reports at most one error, and an
//!   ordered batch of rules for [`Value::validate`](crate::Value::validate)
//! - [`Mapper`] / [`Mappers`]: a step that rewrites the payload or fails, and
//!   an ordered batch of steps for [`Value::transform`](crate::Value::transform)
//! - [`Number`]: primitive numeric types usable with `min`/`max`
//! - [`Length`]: containers usable with the length checks

pub mod check;
pub mod length;
pub mod mapper;
pub mod number;

pub use check::{Check, Checks};
pub use length::Length;
pub use mapper::{Mapper, Mappers};
pub use number::Number;
