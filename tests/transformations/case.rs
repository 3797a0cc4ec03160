use valtra::{capitalise, lowercase, uppercase, val, Mapper};

fn apply<M: Mapper<String>>(mapper: M, input: &str) -> String {
    val(input.to_owned()).transform((mapper,)).into_value()
}

#[test]
fn uppercase_converts_text() {
    assert_eq!(apply(uppercase(), "hello World"), "HELLO WORLD");
    assert_eq!(apply(uppercase(), "ëlan"), "ËLAN");
    assert_eq!(apply(uppercase(), ""), "");
}

#[test]
fn uppercase_twice_equals_once() {
    let once = val(String::from("MiXeD ß")).transform((uppercase(),));
    let twice = val(String::from("MiXeD ß")).transform((uppercase(), uppercase()));
    assert_eq!(once.value(), twice.value());
    assert!(twice.is_valid());
}

#[test]
fn lowercase_converts_text() {
    assert_eq!(apply(lowercase(), "HELLO World"), "hello world");
    assert_eq!(apply(lowercase(), "ΑΒΓ Δ"), "αβγ δ");
}

#[test]
fn capitalise_upper_cases_first_and_lower_cases_rest() {
    assert_eq!(apply(capitalise(), "hello"), "Hello");
    assert_eq!(apply(capitalise(), "hELLO wORLD"), "Hello world");
    assert_eq!(apply(capitalise(), "x"), "X");
    assert_eq!(apply(capitalise(), "élan"), "Élan");
}

#[test]
fn capitalise_leaves_empty_input_alone() {
    let v = val(String::new()).transform((capitalise(),));
    assert_eq!(v.value(), "");
    assert!(v.is_valid());
}

#[test]
fn built_in_mappers_never_record_errors() {
    let v = val(String::from("  ")).transform((uppercase(), lowercase(), capitalise()));
    assert!(v.is_valid());
    assert_eq!(v.value(), "  ");
}
