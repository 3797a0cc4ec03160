use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::traits::Check;
use crate::types::ValidationError;
use crate::value::Value;

/// Permissive, Unicode-aware email shape.
///
/// Local part: letters, numbers, marks and `._%+-`, or a quoted string that
/// may contain escaped quotes. Domain: letters, numbers, marks, `.` and `-`,
/// with a top-level label of at least two letters or marks.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(?:"(?:[^"]|\\")*"|[\p{L}\p{N}\p{M}._%+-]+)@[\p{L}\p{N}\p{M}.-]+\.[\p{L}\p{M}]{2,}$"#,
    )
    .expect("email pattern is a valid regex")
});

/// Returns `true` if `input` has the shape of an email address.
///
/// This only checks the shape. Whether the address can receive mail is only
/// known after a confirmation message reaches it.
///
/// # Examples
///
/// ```
/// use valtra::validations::is_email;
///
/// assert!(is_email("test@example.com"));
/// assert!(is_email("tëst@example.com"));
/// assert!(is_email(r#""john doe"@example.com"#));
/// assert!(!is_email("not-an-email"));
/// ```
#[inline]
pub fn is_email(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}

/// Check that fails when text is not shaped like an email address.
///
/// Created by [`email`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Email {
    message: Option<Cow<'static, str>>,
}

impl Email {
    /// Replaces the default message. An empty message is ignored.
    #[inline]
    pub fn message<S: Into<Cow<'static, str>>>(mut self, message: S) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<S: AsRef<str>> Check<S> for Email {
    fn check(&self, value: &Value<S>) -> Option<ValidationError> {
        if is_email(value.value().as_ref()) {
            return None;
        }
        Some(ValidationError::or_default(self.message.as_ref(), || {
            format!("{} must be in correct email format", value.name())
        }))
    }
}

/// Requires text to be shaped like an email address. See [`is_email`].
///
/// # Examples
///
/// ```
/// use valtra::{email, val_named};
///
/// assert!(val_named("user@example.com", "email").validate((email(),)).is_valid());
///
/// let v = val_named("user@", "email").validate((email(),));
/// assert_eq!(v.errors()[0].message(), "email must be in correct email format");
/// ```
#[inline]
pub fn email() -> Email {
    Email::default()
}
