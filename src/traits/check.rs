use crate::types::ValidationError;
use crate::value::Value;

/// A single validation rule.
///
/// A check inspects the current state of a [`Value`] (payload and name) and
/// reports at most one error. Built-in rules such as [`min`](crate::min) or
/// [`email`](crate::email) implement this trait, and so does every closure of
/// the shape `Fn(&Value<T>) -> Option<ValidationError>`, so custom rules can
/// be mixed freely with the built-in ones.
///
/// # Examples
///
/// ```
/// use valtra::{val, Check, ValidationError, Value};
///
/// let even = |v: &Value<i32>| {
///     (v.value() % 2 != 0).then(|| ValidationError::new(format!("{} must be even", v.name())))
/// };
///
/// assert!(even.check(&val(4)).is_none());
/// assert_eq!(even.check(&val(3)).unwrap().message(), "value must be even");
/// ```
pub trait Check<T> {
    /// Returns `Some(error)` when the rule is violated.
    fn check(&self, value: &Value<T>) -> Option<ValidationError>;
}

impl<T, F> Check<T> for F
where
    F: Fn(&Value<T>) -> Option<ValidationError>,
{
    #[inline]
    fn check(&self, value: &Value<T>) -> Option<ValidationError> {
        self(value)
    }
}

/// An ordered batch of checks accepted by [`Value::validate`].
///
/// Implemented for tuples of up to eight (possibly different) checks, and for
/// arrays, slices and `Vec`s of one check type. Every check in the batch runs,
/// left to right, against the same payload; a failing check never stops the
/// ones after it.
pub trait Checks<T> {
    /// Runs every check and records each reported error on `value`.
    fn run(&self, value: &mut Value<T>);
}

impl<T, C> Checks<T> for [C]
where
    C: Check<T>,
{
    fn run(&self, value: &mut Value<T>) {
        for check in self {
            if let Some(error) = check.check(value) {
                value.record(error);
            }
        }
    }
}

impl<T, C, const N: usize> Checks<T> for [C; N]
where
    C: Check<T>,
{
    #[inline]
    fn run(&self, value: &mut Value<T>) {
        self.as_slice().run(value);
    }
}

impl<T, C> Checks<T> for Vec<C>
where
    C: Check<T>,
{
    #[inline]
    fn run(&self, value: &mut Value<T>) {
        self.as_slice().run(value);
    }
}

impl<T, C> Checks<T> for &C
where
    C: Checks<T> + ?Sized,
{
    #[inline]
    fn run(&self, value: &mut Value<T>) {
        (**self).run(value);
    }
}

macro_rules! impl_checks_for_tuple {
    ($($check:ident),+) => {
        impl<T, $($check),+> Checks<T> for ($($check,)+)
        where
            $($check: Check<T>,)+
        {
            #[allow(non_snake_case)]
            fn run(&self, value: &mut Value<T>) {
                let ($($check,)+) = self;
                $(
                    if let Some(error) = $check.check(value) {
                        value.record(error);
                    }
                )+
            }
        }
    };
}

impl_checks_for_tuple!(A);
impl_checks_for_tuple!(A, B);
impl_checks_for_tuple!(A, B, C);
impl_checks_for_tuple!(A, B, C, D);
impl_checks_for_tuple!(A, B, C, D, E);
impl_checks_for_tuple!(A, B, C, D, E, F);
impl_checks_for_tuple!(A, B, C, D, E, F, G);
impl_checks_for_tuple!(A, B, C, D, E, F, G, H);
