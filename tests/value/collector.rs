use valtra::{email, max, min, min_length_string, required, trim_space, val, val_named, Collector};

#[test]
fn new_collector_is_empty_and_valid() {
    let c = Collector::new();
    assert!(c.is_valid());
    assert!(c.is_empty());
    assert_eq!(c.len(), 0);
    assert!(c.errors().is_empty());
    assert_eq!(c, Collector::default());
}

#[test]
fn collects_errors_from_multiple_values() {
    let mut c = Collector::new();

    let name = val_named(String::new(), "name")
        .validate((required(),))
        .collect(&mut c);
    let age = val_named(15, "age").validate((min(18),)).collect(&mut c);

    assert!(!c.is_valid());
    assert_eq!(c.errors().len(), 2);
    assert_eq!(name, "");
    assert_eq!(age, 15);
}

#[test]
fn collector_with_no_errors() {
    let mut c = Collector::new();

    let name = val_named(String::from(" John "), "name")
        .validate((required(),))
        .transform((trim_space(),))
        .collect(&mut c);
    let age = val_named(25, "age").validate((min(18),)).collect(&mut c);

    assert!(c.is_valid());
    assert!(c.errors().is_empty());
    assert_eq!(name, "John");
    assert_eq!(age, 25);
}

#[test]
fn merges_one_and_two_errors_into_three() {
    let mut c = Collector::new();

    val(5).validate((min(10),)).collect(&mut c);
    val_named(String::from("x"), "code")
        .validate((min_length_string(3), email()))
        .collect(&mut c);

    assert_eq!(c.len(), 3);
    assert!(!c.is_valid());
}

#[test]
fn preserves_collection_order() {
    let mut c = Collector::new();

    val_named(100, "b").validate((max(10),)).collect(&mut c);
    val_named(0, "a").validate((min(1),)).collect(&mut c);
    val_named(50, "c").validate((min(60), max(40))).collect(&mut c);

    let messages: Vec<String> = c.errors().iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        [
            "b cannot be larger than 10",
            "a cannot be smaller than 1",
            "c cannot be smaller than 60",
            "c cannot be larger than 40",
        ]
    );
}

#[test]
fn collecting_a_valid_value_adds_nothing() {
    let mut c = Collector::new();
    val(1).validate((min(10),)).collect(&mut c);
    val(20).validate((min(10),)).collect(&mut c);

    assert_eq!(c.len(), 1);
}

#[test]
fn into_result_returns_record_or_errors() {
    #[derive(Debug, PartialEq)]
    struct Signup {
        email: String,
        age: u16,
    }

    let build = |email_input: &str, age_input: u16| {
        let mut c = Collector::new();
        let record = Signup {
            email: val_named(email_input.to_owned(), "email")
                .validate((email(),))
                .collect(&mut c),
            age: val_named(age_input, "age").validate((min(13),)).collect(&mut c),
        };
        c.into_result(record)
    };

    assert_eq!(
        build("kim@example.org", 30),
        Ok(Signup {
            email: "kim@example.org".into(),
            age: 30,
        })
    );

    let errors = build("kim", 9).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[1].message(), "age cannot be smaller than 13");
}

#[test]
fn iterating_a_collector_borrows_its_errors() {
    let mut c = Collector::new();
    val(0u8).validate((required(),)).collect(&mut c);

    let count = (&c).into_iter().count();
    assert_eq!(count, 1);
    for error in &c {
        assert_eq!(error.message(), "value is required");
    }

    let owned = c.into_errors();
    assert_eq!(owned.len(), 1);
}
