use std::borrow::Cow;

use crate::traits::Check;
use crate::types::ValidationError;
use crate::value::Value;

/// Check that fails when the payload equals its type's default value.
///
/// Created by [`required`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Required {
    message: Option<Cow<'static, str>>,
}

impl Required {
    /// Replaces the default message. An empty message is ignored.
    #[inline]
    pub fn message<S: Into<Cow<'static, str>>>(mut self, message: S) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T> Check<T> for Required
where
    T: Default + PartialEq,
{
    fn check(&self, value: &Value<T>) -> Option<ValidationError> {
        if *value.value() != T::default() {
            return None;
        }
        Some(ValidationError::or_default(self.message.as_ref(), || {
            format!("{} is required", value.name())
        }))
    }
}

/// Requires the payload to differ from `T::default()`.
///
/// For strings this means non-empty, for numbers non-zero, for `Option`
/// `Some`.
///
/// # Examples
///
/// ```
/// use valtra::{required, val};
///
/// assert!(!val(String::new()).validate((required(),)).is_valid());
/// assert!(val(String::from("John")).validate((required(),)).is_valid());
/// assert!(!val(0u32).validate((required(),)).is_valid());
/// ```
#[inline]
pub fn required() -> Required {
    Required::default()
}
