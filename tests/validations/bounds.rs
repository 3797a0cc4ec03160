use valtra::{max, min, val, val_named};

#[test]
fn min_passes_at_and_above_bound() {
    assert!(val(5).validate((min(5),)).is_valid());
    assert!(val(6).validate((min(5),)).is_valid());
}

#[test]
fn min_fails_below_bound() {
    let v = val_named(4, "count").validate((min(5),));
    assert_eq!(v.errors()[0].message(), "count cannot be smaller than 5");
}

#[test]
fn max_passes_at_and_below_bound() {
    assert!(val(100).validate((max(100),)).is_valid());
    assert!(val(-3).validate((max(100),)).is_valid());
}

#[test]
fn max_fails_above_bound() {
    let v = val_named(101, "count").validate((max(100),));
    assert_eq!(v.errors()[0].message(), "count cannot be larger than 100");
}

#[test]
fn floats_compare_without_tolerance() {
    assert!(!val(0.1 + 0.2).validate((max(0.3),)).is_valid());
    assert!(val(2.5f32).validate((min(2.5f32), max(2.5f32))).is_valid());

    let v = val_named(1.25, "ratio").validate((min(1.5),));
    assert_eq!(v.errors()[0].message(), "ratio cannot be smaller than 1.5");
}

#[test]
fn unsigned_and_wide_integers_are_supported() {
    assert!(!val(0u8).validate((min(1u8),)).is_valid());
    assert!(val(u128::MAX).validate((min(0u128),)).is_valid());
    assert!(!val(i64::MIN).validate((min(i64::MIN + 1),)).is_valid());
    assert!(val(7usize).validate((max(7usize),)).is_valid());
}

#[test]
fn bound_is_exposed() {
    assert_eq!(min(3).bound(), 3);
    assert_eq!(max(9u16).bound(), 9);
}

#[test]
fn min_and_max_together_bracket_a_range() {
    let in_range = |n: i32| val(n).validate((min(1), max(10))).is_valid();

    assert!(!in_range(0));
    assert!(in_range(1));
    assert!(in_range(10));
    assert!(!in_range(11));
}
