use std::borrow::Cow;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single validation failure.
///
/// The message is the entire payload: either the default text a built-in
/// check formats from the value's name and its bound, or a caller-supplied
/// override used verbatim.
///
/// # Examples
///
/// ```
/// use valtra::ValidationError;
///
/// let err = ValidationError::new("age cannot be smaller than 18");
/// assert_eq!(err.to_string(), "age cannot be smaller than 18");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the override when one was given and is non-empty, otherwise
    /// builds the default message lazily.
    #[inline]
    pub(crate) fn or_default<F>(custom: Option<&Cow<'static, str>>, default: F) -> Self
    where
        F: FnOnce() -> String,
    {
        match custom {
            Some(message) if !message.is_empty() => Self::new(message.to_string()),
            _ => Self::new(default()),
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

impl From<&str> for ValidationError {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ValidationError {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<Cow<'_, str>> for ValidationError {
    #[inline]
    fn from(message: Cow<'_, str>) -> Self {
        Self::new(message.into_owned())
    }
}
