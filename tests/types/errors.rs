use rop_rail::{DomainError, EmptyErrors, Error, Errors};

#[test]
fn try_from_iter_rejects_empty_input() {
    assert_eq!(Errors::try_from_iter(Vec::new()), Err(EmptyErrors));
    assert_eq!(Errors::try_from(Vec::<Error>::new()), Err(EmptyErrors));
}

#[test]
fn try_from_iter_keeps_order_and_duplicates() {
    let errors =
        Errors::try_from_iter([Error::fail(), Error::null_value(), Error::fail()]).unwrap();

    assert_eq!(errors.as_slice(), &[Error::fail(), Error::null_value(), Error::fail()]);
    assert_eq!(errors.head(), &Error::fail());
}

#[test]
fn merge_distinct_filters_none_and_duplicates_in_first_occurrence_order() {
    let first = Errors::try_from_iter([
        Error::custom("B"),
        Error::new(DomainError::None),
        Error::custom("A"),
    ])
    .unwrap();
    let second = Errors::try_from_iter([Error::custom("A"), Error::custom("C")]).unwrap();

    let merged = Errors::merge_distinct([first, second]).unwrap();

    assert_eq!(
        merged.as_slice(),
        &[Error::custom("B"), Error::custom("A"), Error::custom("C")]
    );
}

#[test]
fn merge_distinct_distinguishes_by_all_fields() {
    let merged = Errors::merge_distinct([
        Errors::one(Error::fail().with_code("1")),
        Errors::one(Error::fail().with_code("2")),
        Errors::one(Error::fail().with_code("1")),
    ])
    .unwrap();

    assert_eq!(merged.len(), 2);
}

#[test]
fn merge_distinct_of_only_sentinels_is_none() {
    let merged = Errors::merge_distinct([
        Errors::one(Error::new(DomainError::None)),
        Errors::one(Error::new(DomainError::None).with_message("noise")),
    ]);

    assert!(merged.is_none());
}

#[test]
fn concat_keeps_everything() {
    let joined = Errors::one(Error::fail()).concat(Errors::one(Error::fail()));
    assert_eq!(joined.as_slice(), &[Error::fail(), Error::fail()]);
}

#[test]
fn map_rewrites_each_error() {
    let errors = Errors::try_from_iter([Error::fail(), Error::null_value()])
        .unwrap()
        .map(|e| e.with_code("X"));

    assert!(errors.iter().all(|e| e.code() == Some("X")));
    assert_eq!(errors.len(), 2);
}

#[test]
fn display_single_line_and_alternate() {
    let errors =
        Errors::try_from_iter([Error::fail(), Error::custom("Late").with_message("2 days")])
            .unwrap();

    assert_eq!(errors.to_string(), "Fail; Late: 2 days");
    assert_eq!(format!("{:#}", errors), "- Fail\n- Late: 2 days\n");
}

#[test]
fn empty_errors_display() {
    assert_eq!(EmptyErrors.to_string(), "an error set must contain at least one error");
}

#[cfg(feature = "serde")]
#[test]
fn errors_serde_rejects_empty_list() {
    let errors = Errors::one(Error::null_value());
    let json = serde_json::to_string(&errors).unwrap();
    assert_eq!(json, r#"[{"domain_error":"NullValue"}]"#);

    let back: Errors = serde_json::from_str(&json).unwrap();
    assert_eq!(back, errors);

    assert!(serde_json::from_str::<Errors>("[]").is_err());
}
