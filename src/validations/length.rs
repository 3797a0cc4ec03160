use std::borrow::Cow;

use crate::traits::{Check, Length};
use crate::types::ValidationError;
use crate::value::Value;

/// Check that fails when a container is shorter than a bound.
///
/// Created by [`min_length`] or one of its typed aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinLength {
    bound: usize,
    message: Option<Cow<'static, str>>,
}

/// Check that fails when a container is longer than a bound.
///
/// Created by [`max_length`] or one of its typed aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxLength {
    bound: usize,
    message: Option<Cow<'static, str>>,
}

impl MinLength {
    #[inline]
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Replaces the default message. An empty message is ignored.
    #[inline]
    pub fn message<S: Into<Cow<'static, str>>>(mut self, message: S) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl MaxLength {
    #[inline]
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Replaces the default message. An empty message is ignored.
    #[inline]
    pub fn message<S: Into<Cow<'static, str>>>(mut self, message: S) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<C: Length> Check<C> for MinLength {
    fn check(&self, value: &Value<C>) -> Option<ValidationError> {
        if value.value().length() >= self.bound {
            return None;
        }
        Some(ValidationError::or_default(self.message.as_ref(), || {
            format!("{}'s length cannot be smaller than {}", value.name(), self.bound)
        }))
    }
}

impl<C: Length> Check<C> for MaxLength {
    fn check(&self, value: &Value<C>) -> Option<ValidationError> {
        if value.value().length() <= self.bound {
            return None;
        }
        Some(ValidationError::or_default(self.message.as_ref(), || {
            format!("{}'s length cannot be larger than {}", value.name(), self.bound)
        }))
    }
}

/// Requires any [`Length`] container to hold at least `bound` items.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use valtra::{min_length, val_named};
///
/// let tags: BTreeSet<&str> = ["a"].into_iter().collect();
/// let v = val_named(tags, "tags").validate((min_length(2),));
/// assert_eq!(v.errors()[0].message(), "tags's length cannot be smaller than 2");
/// ```
#[inline]
pub fn min_length(bound: usize) -> MinLength {
    MinLength {
        bound,
        message: None,
    }
}

/// Requires any [`Length`] container to hold at most `bound` items.
#[inline]
pub fn max_length(bound: usize) -> MaxLength {
    MaxLength {
        bound,
        message: None,
    }
}

/// Requires text to be at least `bound` bytes long.
///
/// Length is measured in UTF-8 bytes, so each non-ASCII character counts for
/// more than one.
///
/// # Examples
///
/// ```
/// use valtra::{min_length_string, val};
///
/// assert!(val("username").validate((min_length_string(5),)).is_valid());
/// assert!(val("ëë").validate((min_length_string(4),)).is_valid());
/// ```
#[inline]
pub fn min_length_string(bound: usize) -> MinLength {
    min_length(bound)
}

/// Requires text to be at most `bound` bytes long.
///
/// # Examples
///
/// ```
/// use valtra::{max_length_string, val};
///
/// assert!(val(String::from("username")).validate((max_length_string(20),)).is_valid());
/// assert!(!val("ëë").validate((max_length_string(3),)).is_valid());
/// ```
#[inline]
pub fn max_length_string(bound: usize) -> MaxLength {
    max_length(bound)
}

/// Requires a sequence to hold at least `bound` elements.
///
/// # Examples
///
/// ```
/// use valtra::{min_length_slice, val};
///
/// assert!(val(vec![1]).validate((min_length_slice(1),)).is_valid());
/// assert!(!val(Vec::<u8>::new()).validate((min_length_slice(1),)).is_valid());
/// ```
#[inline]
pub fn min_length_slice(bound: usize) -> MinLength {
    min_length(bound)
}

/// Requires a sequence to hold at most `bound` elements.
#[inline]
pub fn max_length_slice(bound: usize) -> MaxLength {
    max_length(bound)
}

/// Requires a map to hold at least `bound` entries.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use valtra::{min_length_map, val};
///
/// let scores = HashMap::from([("no", 1)]);
/// assert!(val(scores).validate((min_length_map(1),)).is_valid());
/// ```
#[inline]
pub fn min_length_map(bound: usize) -> MinLength {
    min_length(bound)
}

/// Requires a map to hold at most `bound` entries.
#[inline]
pub fn max_length_map(bound: usize) -> MaxLength {
    max_length(bound)
}

