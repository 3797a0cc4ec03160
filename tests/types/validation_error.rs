use std::borrow::Cow;
use std::error::Error;

use valtra::ValidationError;
#[cfg(feature = "serde")]
use valtra::{min, required, val_named, Collector};

#[test]
fn display_prints_message_only() {
    let err = ValidationError::new("age cannot be smaller than 18");
    assert_eq!(format!("{err}"), "age cannot be smaller than 18");
    assert_eq!(err.message(), "age cannot be smaller than 18");
}

#[test]
fn conversions_from_strings() {
    let a = ValidationError::from("x");
    let b = ValidationError::from(String::from("x"));
    let c = ValidationError::from(Cow::Borrowed("x"));
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(c.into_message(), "x");
}

#[test]
fn implements_std_error() {
    let err: Box<dyn Error> = Box::new(ValidationError::new("bad"));
    assert!(err.source().is_none());
    assert_eq!(err.to_string(), "bad");
}

#[cfg(feature = "serde")]
#[test]
fn validation_error_serializes_as_plain_string() {
    let err = ValidationError::new("name is required");
    let json = serde_json::to_string(&err).unwrap();
    assert_eq!(json, r#""name is required""#);

    let back: ValidationError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
}

#[cfg(feature = "serde")]
#[test]
fn collector_serializes_its_errors() {
    let mut c = Collector::new();
    val_named(String::new(), "name").validate((required(),)).collect(&mut c);
    val_named(3, "age").validate((min(18),)).collect(&mut c);

    let json = serde_json::to_value(&c).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "errors": ["name is required", "age cannot be smaller than 18"]
        })
    );

    let back: Collector = serde_json::from_value(json).unwrap();
    assert_eq!(back, c);
}
