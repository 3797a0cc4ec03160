use crate::traits::Mapper;
use crate::types::ValidationError;
use crate::value::Value;

/// Mapper converting text to upper case. Created by [`uppercase`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uppercase;

/// Mapper converting text to lower case. Created by [`lowercase`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lowercase;

/// Mapper upper-casing the first character and lower-casing the rest.
/// Created by [`capitalise`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capitalise;

impl Mapper<String> for Uppercase {
    #[inline]
    fn apply(&self, value: &Value<String>) -> Result<String, ValidationError> {
        Ok(value.value().to_uppercase())
    }
}

impl Mapper<String> for Lowercase {
    #[inline]
    fn apply(&self, value: &Value<String>) -> Result<String, ValidationError> {
        Ok(value.value().to_lowercase())
    }
}

impl Mapper<String> for Capitalise {
    fn apply(&self, value: &Value<String>) -> Result<String, ValidationError> {
        let mut chars = value.value().chars();
        let Some(first) = chars.next() else {
            return Ok(String::new());
        };

        let rest = chars.as_str();
        let mut out = String::with_capacity(value.value().len());
        out.extend(first.to_uppercase());
        out.push_str(&rest.to_lowercase());
        Ok(out)
    }
}

/// Converts the payload to upper case using Unicode case mapping.
///
/// # Examples
///
/// ```
/// use valtra::{uppercase, val};
///
/// let v = val(String::from("straße")).transform((uppercase(),));
/// assert_eq!(v.value(), "STRASSE");
/// ```
#[inline]
pub fn uppercase() -> Uppercase {
    Uppercase
}

/// Converts the payload to lower case using Unicode case mapping.
#[inline]
pub fn lowercase() -> Lowercase {
    Lowercase
}

/// Upper-cases the first character of the payload and lower-cases the rest.
///
/// An empty payload is left empty.
///
/// # Examples
///
/// ```
/// use valtra::{capitalise, val};
///
/// assert_eq!(val(String::from("hELLO wORLD")).transform((capitalise(),)).value(), "Hello world");
/// assert_eq!(val(String::from("élan")).transform((capitalise(),)).value(), "Élan");
/// assert_eq!(val(String::new()).transform((capitalise(),)).value(), "");
/// ```
#[inline]
pub fn capitalise() -> Capitalise {
    Capitalise
}
