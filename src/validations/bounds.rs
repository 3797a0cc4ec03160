use std::borrow::Cow;

use crate::traits::{Check, Number};
use crate::types::ValidationError;
use crate::value::Value;

/// Check that fails when the payload is below a bound. Created by [`min`].
#[derive(Debug, Clone, PartialEq)]
pub struct Min<N> {
    bound: N,
    message: Option<Cow<'static, str>>,
}

/// Check that fails when the payload is above a bound. Created by [`max`].
#[derive(Debug, Clone, PartialEq)]
pub struct Max<N> {
    bound: N,
    message: Option<Cow<'static, str>>,
}

impl<N: Number> Min<N> {
    #[inline]
    pub fn bound(&self) -> N {
        self.bound
    }

    /// Replaces the default message. An empty message is ignored.
    #[inline]
    pub fn message<S: Into<Cow<'static, str>>>(mut self, message: S) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<N: Number> Max<N> {
    #[inline]
    pub fn bound(&self) -> N {
        self.bound
    }

    /// Replaces the default message. An empty message is ignored.
    #[inline]
    pub fn message<S: Into<Cow<'static, str>>>(mut self, message: S) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<N: Number> Check<N> for Min<N> {
    fn check(&self, value: &Value<N>) -> Option<ValidationError> {
        (*value.value() < self.bound).then(|| {
            ValidationError::or_default(self.message.as_ref(), || {
                format!("{} cannot be smaller than {}", value.name(), self.bound)
            })
        })
    }
}

impl<N: Number> Check<N> for Max<N> {
    fn check(&self, value: &Value<N>) -> Option<ValidationError> {
        (*value.value() > self.bound).then(|| {
            ValidationError::or_default(self.message.as_ref(), || {
                format!("{} cannot be larger than {}", value.name(), self.bound)
            })
        })
    }
}

/// Requires the payload to be at least `bound`.
///
/// # Examples
///
/// ```
/// use valtra::{min, val_named};
///
/// assert!(val_named(5, "count").validate((min(1),)).is_valid());
///
/// let v = val_named(0, "count").validate((min(1),));
/// assert_eq!(v.errors()[0].message(), "count cannot be smaller than 1");
/// ```
#[inline]
pub fn min<N: Number>(bound: N) -> Min<N> {
    Min {
        bound,
        message: None,
    }
}

/// Requires the payload to be at most `bound`.
///
/// # Examples
///
/// ```
/// use valtra::{max, val};
///
/// assert!(val(100).validate((max(100),)).is_valid());
/// assert!(!val(100.5).validate((max(100.0),)).is_valid());
/// ```
#[inline]
pub fn max<N: Number>(bound: N) -> Max<N> {
    Max {
        bound,
        message: None,
    }
}
