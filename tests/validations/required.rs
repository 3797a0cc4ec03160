use valtra::{required, val, val_named, Value};

#[test]
fn empty_string_is_rejected() {
    let v = val_named(String::new(), "name").validate((required(),));
    assert_eq!(v.errors().len(), 1);
    assert_eq!(v.errors()[0].message(), "name is required");
}

#[test]
fn non_empty_string_passes() {
    assert!(val(String::from("John")).validate((required(),)).is_valid());
    assert!(val("John").validate((required(),)).is_valid());
}

#[test]
fn whitespace_only_string_is_not_empty() {
    assert!(val(String::from(" ")).validate((required(),)).is_valid());
}

#[test]
fn zero_numbers_are_rejected() {
    assert!(!val(0).validate((required(),)).is_valid());
    assert!(!val(0.0f64).validate((required(),)).is_valid());
    assert!(!val(0u64).validate((required(),)).is_valid());

    assert!(val(-1).validate((required(),)).is_valid());
    assert!(val(0.5f32).validate((required(),)).is_valid());
}

#[test]
fn none_is_rejected_some_passes() {
    let missing: Value<Option<u32>> = val_named(None, "manager_id").validate((required(),));
    assert_eq!(missing.errors()[0].message(), "manager_id is required");

    assert!(val(Some(0u32)).validate((required(),)).is_valid());
}

#[test]
fn empty_collections_are_rejected() {
    assert!(!val(Vec::<u8>::new()).validate((required(),)).is_valid());
    assert!(val(vec![0u8]).validate((required(),)).is_valid());
    assert!(!val(false).validate((required(),)).is_valid());
}
