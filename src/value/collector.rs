use crate::types::{Accumulator, ErrorVec, ValidationError, ValidationResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gathers the errors of many [`Value`](crate::Value)s into one report.
///
/// Create one collector per record being validated, pass it to
/// [`Value::collect`](crate::Value::collect) for every field, then inspect it
/// once at the end. Errors can only enter a collector through
/// `Value::collect`, so every entry comes from a named value.
///
/// # Examples
///
/// ```
/// use valtra::{min, required, trim_space, val_named, Collector};
///
/// let mut c = Collector::new();
/// let name = val_named(String::from(" John "), "name")
///     .validate((required(),))
///     .transform((trim_space(),))
///     .collect(&mut c);
/// let age = val_named(25, "age").validate((min(18),)).collect(&mut c);
///
/// assert!(c.is_valid());
/// assert_eq!(name, "John");
/// assert_eq!(age, 25);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Collector {
    errors: Accumulator<ValidationError>,
}

impl Collector {
    /// Creates a collector with no errors.
    #[inline]
    pub fn new() -> Self {
        Self {
            errors: Accumulator::new(),
        }
    }

    /// All collected errors, in the order the values were collected.
    #[inline]
    pub fn errors(&self) -> &[ValidationError] {
        self.errors.as_slice()
    }

    /// Returns `true` if no collected value carried an error.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn into_errors(self) -> ErrorVec<ValidationError> {
        self.errors.into_inner()
    }

    /// Returns `record` if nothing failed, otherwise every collected error.
    ///
    /// # Examples
    ///
    /// ```
    /// use valtra::{min, val_named, Collector};
    ///
    /// let mut c = Collector::new();
    /// let age = val_named(12, "age").validate((min(18),)).collect(&mut c);
    ///
    /// let errors = c.into_result(age).unwrap_err();
    /// assert_eq!(errors[0].message(), "age cannot be smaller than 18");
    /// ```
    pub fn into_result<T>(self, record: T) -> ValidationResult<T> {
        if self.errors.is_empty() {
            Ok(record)
        } else {
            Err(self.errors.into_inner())
        }
    }

    #[inline]
    pub(crate) fn absorb(&mut self, errors: Accumulator<ValidationError>) {
        self.errors.extend(errors);
    }
}

impl<'a> IntoIterator for &'a Collector {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
