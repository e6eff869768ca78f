use rop_rail::{DomainError, Error, UNHANDLED_EXCEPTION_CODE};
use std::collections::HashSet;

mod errors;

#[test]
fn error_equality_is_structural() {
    let a = Error::custom("InvalidVin").with_code("E1").with_message("too short");
    let b = Error::custom("InvalidVin").with_code("E1").with_message("too short");
    let c = Error::custom("InvalidVin").with_code("E2").with_message("too short");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(Error::fail(), Error::fail().with_message("x"));
}

#[test]
fn error_works_as_set_key() {
    let mut seen = HashSet::new();
    assert!(seen.insert(Error::null_value()));
    assert!(!seen.insert(Error::new(DomainError::NullValue)));
    assert!(seen.insert(Error::fail()));
    assert_eq!(seen.len(), 2);
}

#[test]
fn shorthand_constructors_set_kind() {
    assert_eq!(Error::null_value().domain_error(), &DomainError::NullValue);
    assert_eq!(Error::fail().domain_error(), &DomainError::Fail);
    assert_eq!(
        Error::boolean_switch_failed().domain_error(),
        &DomainError::BooleanSwitchFailed
    );
    assert_eq!(Error::custom("Late").domain_error(), &DomainError::custom("Late"));
}

#[test]
fn unhandled_exception_carries_fixed_code_and_message() {
    let err = Error::unhandled_exception("boom");

    assert_eq!(err.domain_error(), &DomainError::UnhandledException);
    assert_eq!(err.code(), Some(UNHANDLED_EXCEPTION_CODE));
    assert_eq!(err.code(), Some("3"));
    assert_eq!(err.message(), Some("boom"));
}

#[test]
fn builders_return_new_values() {
    let base = Error::fail();
    let coded = base.clone().with_code("E9");

    assert_eq!(base.code(), None);
    assert_eq!(coded.code(), Some("E9"));
    assert_eq!(coded.message(), None);
}

#[test]
fn error_display_includes_present_fields_only() {
    assert_eq!(Error::null_value().to_string(), "NullValue");
    assert_eq!(Error::fail().with_code("7").to_string(), "Fail [7]");
    assert_eq!(
        Error::unhandled_exception("boom").to_string(),
        "UnhandledException [3]: boom"
    );
    assert_eq!(Error::custom("Late").with_message("2 days").to_string(), "Late: 2 days");
}

#[test]
fn none_kind_is_the_only_sentinel() {
    assert!(DomainError::None.is_none());
    assert!(!DomainError::NullValue.is_none());
    assert!(!DomainError::custom("None").is_none());
}

#[test]
fn domain_error_converts_into_error() {
    let err: Error = DomainError::BooleanSwitchFailed.into();
    assert_eq!(err, Error::boolean_switch_failed());
}

#[test]
fn error_implements_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&Error::fail());
}

#[cfg(feature = "serde")]
#[test]
fn error_serde_skips_absent_fields() {
    let json = serde_json::to_value(Error::fail()).unwrap();
    assert_eq!(json, serde_json::json!({ "domain_error": "Fail" }));

    let json = serde_json::to_value(Error::unhandled_exception("boom")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "domain_error": "UnhandledException", "code": "3", "message": "boom" })
    );

    let back: Error = serde_json::from_value(json).unwrap();
    assert_eq!(back, Error::unhandled_exception("boom"));
}
