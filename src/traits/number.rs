use std::fmt::{Debug, Display};

mod sealed {
    pub trait Sealed {}
}

/// Primitive numeric types accepted by [`min`](crate::min) and
/// [`max`](crate::max).
///
/// Comparisons use the type's own `<` and `>`; floats get no epsilon
/// tolerance, and a `NaN` payload passes both bounds because every ordering
/// comparison with it is false.
pub trait Number: Copy + PartialOrd + Display + Debug + sealed::Sealed {}

macro_rules! impl_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Number for $ty {}
        )*
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
