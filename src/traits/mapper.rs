use crate::types::ValidationError;
use crate::value::Value;

/// A single transformation step.
///
/// A mapper reads the current state of a [`Value`] and produces either a
/// replacement payload or an error. Every closure of the shape
/// `Fn(&Value<T>) -> Result<T, ValidationError>` is a mapper.
///
/// # Examples
///
/// ```
/// use valtra::{val, ValidationError, Value};
///
/// let halve = |v: &Value<u32>| {
///     if v.value() % 2 == 0 {
///         Ok(v.value() / 2)
///     } else {
///         Err(ValidationError::new(format!("{} is odd", v.name())))
///     }
/// };
///
/// let v = val(7u32).transform((halve,));
/// assert_eq!(*v.value(), 7);
/// assert_eq!(v.errors()[0].message(), "value is odd");
/// ```
pub trait Mapper<T> {
    fn apply(&self, value: &Value<T>) -> Result<T, ValidationError>;
}

impl<T, F> Mapper<T> for F
where
    F: Fn(&Value<T>) -> Result<T, ValidationError>,
{
    #[inline]
    fn apply(&self, value: &Value<T>) -> Result<T, ValidationError> {
        self(value)
    }
}

#[inline]
fn step<T, M: Mapper<T>>(mapper: &M, value: &mut Value<T>) {
    match mapper.apply(value) {
        Ok(next) => value.replace(next),
        Err(error) => value.record(error),
    }
}

/// An ordered batch of mappers accepted by [`Value::transform`].
///
/// Mappers run left to right. A successful mapper replaces the payload and
/// the next one sees the new payload; a failing one records its error, keeps
/// the previous payload and lets the rest of the batch run.
pub trait Mappers<T> {
    fn run(&self, value: &mut Value<T>);
}

impl<T, M> Mappers<T> for [M]
where
    M: Mapper<T>,
{
    fn run(&self, value: &mut Value<T>) {
        for mapper in self {
            step(mapper, value);
        }
    }
}

impl<T, M, const N: usize> Mappers<T> for [M; N]
where
    M: Mapper<T>,
{
    #[inline]
    fn run(&self, value: &mut Value<T>) {
        self.as_slice().run(value);
    }
}

impl<T, M> Mappers<T> for Vec<M>
where
    M: Mapper<T>,
{
    #[inline]
    fn run(&self, value: &mut Value<T>) {
        self.as_slice().run(value);
    }
}

impl<T, M> Mappers<T> for &M
where
    M: Mappers<T> + ?Sized,
{
    #[inline]
    fn run(&self, value: &mut Value<T>) {
        (**self).run(value);
    }
}

macro_rules! impl_mappers_for_tuple {
    ($($mapper:ident),+) => {
        impl<T, $($mapper),+> Mappers<T> for ($($mapper,)+)
        where
            $($mapper: Mapper<T>,)+
        {
            #[allow(non_snake_case)]
            fn run(&self, value: &mut Value<T>) {
                let ($($mapper,)+) = self;
                $( step($mapper, value); )+
            }
        }
    };
}

impl_mappers_for_tuple!(A);
impl_mappers_for_tuple!(A, B);
impl_mappers_for_tuple!(A, B, C);
impl_mappers_for_tuple!(A, B, C, D);
impl_mappers_for_tuple!(A, B, C, D, E);
impl_mappers_for_tuple!(A, B, C, D, E, F);
impl_mappers_for_tuple!(A, B, C, D, E, F, G);
impl_mappers_for_tuple!(A, B, C, D, E, F, G, H);
