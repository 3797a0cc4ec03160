use std::borrow::Cow;

use crate::traits::{Checks, Mappers};
use crate::types::{Accumulator, ErrorVec, ValidationError, ValidationResult};
use crate::value::collector::Collector;

/// Name used in default error messages when a value was not given one.
pub const DEFAULT_NAME: &str = "value";

/// A payload under validation, together with its display name and the
/// errors found so far.
///
/// `Value` is the entry point of the library. Each chained call consumes the
/// value and hands back its updated state: [`validate`](Value::validate) only
/// ever adds errors, [`transform`](Value::transform) may also replace the
/// payload, and [`collect`](Value::collect) moves the errors into a shared
/// [`Collector`] and returns the payload.
///
/// Errors are kept in the order the failing checks and mappers ran and are
/// never deduplicated.
///
/// # Examples
///
/// ```
/// use valtra::{max, min, required, val_named};
///
/// let age = val_named(25, "age").validate((required(), min(20), max(30)));
/// assert!(age.is_valid());
///
/// let age = val_named(15, "age").validate((required(), min(18), max(12)));
/// let messages: Vec<_> = age.errors().iter().map(|e| e.message()).collect();
/// assert_eq!(
///     messages,
///     ["age cannot be smaller than 18", "age cannot be larger than 12"]
/// );
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Value<T> {
    value: T,
    name: Cow<'static, str>,
    errors: Accumulator<ValidationError>,
}

impl<T> Value<T> {
    /// Wraps `value` under the default name `"value"`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            value,
            name: Cow::Borrowed(DEFAULT_NAME),
            errors: Accumulator::new(),
        }
    }

    /// Wraps `value` under `name`. An empty name falls back to `"value"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use valtra::Value;
    ///
    /// assert_eq!(Value::named("bob", "username").name(), "username");
    /// assert_eq!(Value::named("bob", "").name(), "value");
    /// ```
    #[inline]
    pub fn named<N>(value: T, name: N) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self::new(value).with_name(name)
    }

    /// Renames the value. Errors already recorded keep the old name.
    #[inline]
    pub fn with_name<N>(mut self, name: N) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        let name = name.into();
        self.name = if name.is_empty() {
            Cow::Borrowed(DEFAULT_NAME)
        } else {
            name
        };
        self
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Errors recorded so far, in the order they occurred.
    #[inline]
    pub fn errors(&self) -> &[ValidationError] {
        self.errors.as_slice()
    }

    /// Returns `true` if no check or mapper has failed.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Applies every check in `checks` to the current payload.
    ///
    /// All checks run, left to right, even after one of them fails. Each
    /// failure appends one error. The payload is never modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use valtra::{min_length_string, required, val};
    ///
    /// let v = val(String::new()).validate((required(), min_length_string(5)));
    /// assert_eq!(v.errors().len(), 2);
    /// assert_eq!(v.errors()[0].message(), "value is required");
    /// ```
    pub fn validate<C>(mut self, checks: C) -> Self
    where
        C: Checks<T>,
    {
        #[cfg(feature = "tracing")]
        let before = self.errors.len();

        checks.run(&mut self);

        trace_event!(
            name = %self.name,
            failed = self.errors.len() - before,
            total = self.errors.len(),
            "validated value"
        );
        self
    }

    /// Applies every mapper in `mappers`, feeding each one the payload left by
    /// the previous one.
    ///
    /// A mapper that fails records its error and leaves the payload as it
    /// was; the remaining mappers still run.
    ///
    /// # Examples
    ///
    /// ```
    /// use valtra::{trim_space, uppercase, val};
    ///
    /// let v = val(String::from("  hello ")).transform((trim_space(), uppercase()));
    /// assert_eq!(v.value(), "HELLO");
    /// ```
    pub fn transform<M>(mut self, mappers: M) -> Self
    where
        M: Mappers<T>,
    {
        #[cfg(feature = "tracing")]
        let before = self.errors.len();

        mappers.run(&mut self);

        trace_event!(
            name = %self.name,
            failed = self.errors.len() - before,
            total = self.errors.len(),
            "transformed value"
        );
        self
    }

    /// Appends this value's errors to `collector` and returns the payload.
    ///
    /// This is how a field of a larger record is initialised while still
    /// taking part in one shared error report.
    ///
    /// # Examples
    ///
    /// ```
    /// use valtra::{min, required, val_named, Collector};
    ///
    /// struct User {
    ///     name: String,
    ///     age: u8,
    /// }
    ///
    /// let mut c = Collector::new();
    /// let user = User {
    ///     name: val_named(String::new(), "name").validate((required(),)).collect(&mut c),
    ///     age: val_named(15u8, "age").validate((min(18),)).collect(&mut c),
    /// };
    ///
    /// assert_eq!(user.age, 15);
    /// assert!(user.name.is_empty());
    /// assert_eq!(c.errors().len(), 2);
    /// ```
    pub fn collect(self, collector: &mut Collector) -> T {
        debug_event!(
            name = %self.name,
            errors = self.errors.len(),
            "collecting value"
        );
        collector.absorb(self.errors);
        self.value
    }

    /// Returns the payload when valid, otherwise every recorded error.
    pub fn into_result(self) -> ValidationResult<T> {
        if self.errors.is_empty() {
            Ok(self.value)
        } else {
            Err(self.errors.into_inner())
        }
    }

    /// Splits the value into its payload and its recorded errors.
    #[inline]
    pub fn into_parts(self) -> (T, ErrorVec<ValidationError>) {
        (self.value, self.errors.into_inner())
    }

    #[inline]
    pub(crate) fn record(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    #[inline]
    pub(crate) fn replace(&mut self, value: T) {
        self.value = value;
    }
}

impl<T> From<T> for Value<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// Wraps `value` under the default name `"value"`.
///
/// # Examples
///
/// ```
/// use valtra::{max, val};
///
/// let v = val(25).validate((max(30),));
/// assert!(v.is_valid());
/// assert_eq!(v.name(), "value");
/// ```
#[inline]
pub fn val<T>(value: T) -> Value<T> {
    Value::new(value)
}

/// Wraps `value` under `name`; an empty name falls back to `"value"`.
#[inline]
pub fn val_named<T, N>(value: T, name: N) -> Value<T>
where
    N: Into<Cow<'static, str>>,
{
    Value::named(value, name)
}

/// Runs `checks` against a bare `value` and returns the errors they report.
///
/// Equivalent to `val(value).validate(checks)` followed by taking the errors.
///
/// # Examples
///
/// ```
/// use valtra::{max, min, validate};
///
/// let errors = validate(42, (min(0), max(10)));
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].message(), "value cannot be larger than 10");
/// ```
pub fn validate<T, C>(value: T, checks: C) -> ErrorVec<ValidationError>
where
    C: Checks<T>,
{
    Value::new(value).validate(checks).into_parts().1
}
