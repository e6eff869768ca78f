use rop_rail::builder::{with_field, with_value, AggregateBuilder};
use rop_rail::{Error, RopResult};

#[derive(Debug, Clone, Default, PartialEq)]
struct Profile {
    name: Option<String>,
    age: Option<u8>,
}

fn set_name(p: Profile, name: String) -> Profile {
    Profile { name: Some(name), ..p }
}

fn set_age(p: Profile, age: u8) -> Profile {
    Profile { age: Some(age), ..p }
}

#[test]
fn with_field_sets_when_both_succeed() {
    let r = with_field(
        RopResult::from_value(Profile::default()),
        RopResult::from_value(String::from("ada")),
        set_name,
    );

    assert_eq!(r.data().name.as_deref(), Some("ada"));
    assert_eq!(r.data().age, None);
}

#[test]
fn with_field_reports_field_failure() {
    let r = with_field(
        RopResult::from_value(Profile::default()),
        RopResult::<String>::from_error(Error::custom("BadName")),
        set_name,
    );

    assert_eq!(r.errors(), &[Error::custom("BadName")]);
}

#[test]
fn with_field_reports_aggregate_failure() {
    let r = with_field(
        RopResult::<Profile>::from_error(Error::custom("NoProfile")),
        RopResult::from_value(String::from("ada")),
        set_name,
    );

    assert_eq!(r.errors(), &[Error::custom("NoProfile")]);
}

#[test]
fn with_field_accumulates_aggregate_errors_first() {
    let r = with_field(
        RopResult::<Profile>::try_from_errors([Error::custom("A1"), Error::custom("A2")]).unwrap(),
        RopResult::<String>::try_from_errors([Error::custom("F1"), Error::custom("A1")]).unwrap(),
        set_name,
    );

    assert_eq!(
        r.errors(),
        &[
            Error::custom("A1"),
            Error::custom("A2"),
            Error::custom("F1"),
            Error::custom("A1"),
        ]
    );
}

#[test]
fn with_value_sets_raw_field() {
    let r = with_value(RopResult::from_value(Profile::default()), 36, set_age);
    assert_eq!(r.data().age, Some(36));
}

#[test]
fn with_value_ignores_raw_field_after_failure() {
    let mut setter_called = false;
    let r = with_value(RopResult::<Profile>::from_error(Error::fail()), 36, |p, age| {
        setter_called = true;
        set_age(p, age)
    });

    assert!(!setter_called);
    assert_eq!(r.errors(), &[Error::fail()]);
}

#[test]
fn setter_leaves_earlier_snapshot_untouched() {
    let snapshot = Profile::default();
    let r = RopResult::from_value(snapshot.clone()).with_value(36, set_age);

    assert_eq!(snapshot, Profile::default());
    assert_eq!(r.data().age, Some(36));
}

#[test]
fn method_forms_mix_both_policies() {
    let r = RopResult::from_value(Profile::default())
        .with_field(RopResult::from_value(String::from("ada")), set_name)
        .with_value(36, set_age);

    assert_eq!(
        r.into_value(),
        Some(Profile { name: Some(String::from("ada")), age: Some(36) })
    );
}

#[test]
fn aggregate_builder_skips_tee_after_failure() {
    let mut observed = Vec::new();

    let r = AggregateBuilder::new(Profile::default())
        .tee(|p| observed.push(p.clone()))
        .with_field(RopResult::<String>::from_error(Error::fail()), set_name)
        .tee(|p| observed.push(p.clone()))
        .with_value(36, set_age)
        .finish();

    assert_eq!(observed, vec![Profile::default()]);
    assert_eq!(r.errors(), &[Error::fail()]);
}

#[test]
fn aggregate_builder_validate_can_reject() {
    let builder = AggregateBuilder::new(Profile::default())
        .with_value(12, set_age)
        .validate(|p| match p.age {
            Some(age) if age >= 18 => RopResult::from_value(p),
            _ => RopResult::from_error(Error::custom("Underage")),
        });

    assert!(!builder.is_success());
    assert_eq!(builder.current().errors(), &[Error::custom("Underage")]);
}

#[test]
fn aggregate_builder_from_failed_result() {
    let r = AggregateBuilder::from(RopResult::<Profile>::from_error(Error::null_value()))
        .with_value(1, set_age)
        .finish();

    assert_eq!(r.errors(), &[Error::null_value()]);
}
