use crate::traits::Mapper;
use crate::types::ValidationError;
use crate::value::Value;

/// Mapper removing leading and trailing whitespace. Created by [`trim_space`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimSpace;

impl Mapper<String> for TrimSpace {
    #[inline]
    fn apply(&self, value: &Value<String>) -> Result<String, ValidationError> {
        Ok(value.value().trim().to_owned())
    }
}

/// Strips leading and trailing Unicode whitespace from the payload.
///
/// # Examples
///
/// ```
/// use valtra::{trim_space, val};
///
/// let v = val(String::from("\t John \n")).transform((trim_space(),));
/// assert_eq!(v.value(), "John");
/// ```
#[inline]
pub fn trim_space() -> TrimSpace {
    TrimSpace
}
