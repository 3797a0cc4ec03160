use valtra::validations::is_email;
use valtra::{email, val, val_named};

#[test]
fn accepts_common_addresses() {
    for input in [
        "test@example.com",
        "first.last@example.co.uk",
        "user+tag@sub.example.org",
        "under_score%x@example-host.io",
        "12345@example.com",
    ] {
        assert!(is_email(input), "{input} should be accepted");
    }
}

#[test]
fn accepts_unicode_addresses() {
    for input in [
        "tëst@example.com",
        "josé@exämple.com",
        "用户@例子.广告",
        "θσερ@παράδειγμα.δοκιμή",
    ] {
        assert!(is_email(input), "{input} should be accepted");
    }
}

#[test]
fn accepts_quoted_local_parts() {
    assert!(is_email(r#""john doe"@example.com"#));
    assert!(is_email(r#""a\"b"@example.com"#));
}

#[test]
fn rejects_malformed_addresses() {
    for input in [
        "not-an-email",
        "",
        "@example.com",
        "user@",
        "user@example",
        "user@example.c",
        "user@example.c0m",
        "user name@example.com",
        "user@@example.com",
        "user@exa mple.com",
    ] {
        assert!(!is_email(input), "{input:?} should be rejected");
    }
}

#[test]
fn email_check_uses_name_in_default_message() {
    let v = val_named("not-an-email", "contact").validate((email(),));
    assert_eq!(
        v.errors()[0].message(),
        "contact must be in correct email format"
    );
}

#[test]
fn email_check_works_for_owned_and_borrowed_text() {
    assert!(val("test@example.com").validate((email(),)).is_valid());
    assert!(val(String::from("test@example.com")).validate((email(),)).is_valid());
    assert!(!val(String::from("nope")).validate((email(),)).is_valid());
}
