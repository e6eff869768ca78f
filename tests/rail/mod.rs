use std::cell::Cell;

use rop_rail::{DomainError, Error, Errors, RopResult};


#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
struct Order {
    id: u32,
}

/// Counts closure invocations.
#[derive(Default)]
pub(crate) struct Calls(Cell<usize>);

impl Calls {
    pub(crate) fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub(crate) fn count(&self) -> usize {
        self.0.get()
    }
}

pub(crate) fn failed<T>() -> RopResult<T> {
    RopResult::try_from_errors([Error::custom("First"), Error::custom("Second")]).unwrap()
}

#[test]
fn from_value_is_success_with_no_errors() {
    let order = Order { id: 7 };
    let result = RopResult::from_value(order.clone());

    assert!(result.is_success());
    assert!(!result.is_failure());
    assert!(result.errors().is_empty());
    assert_eq!(result.data(), &order);
}

#[test]
fn absent_value_is_null_value_failure() {
    let order: Option<Order> = None;
    let result = RopResult::from_option(order);

    assert!(!result.is_success());
    assert!(result.is_failure());
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0], Error::null_value());
}

#[test]
fn present_option_is_success() {
    let result: RopResult<Order> = Some(Order { id: 1 }).into();
    assert_eq!(result.into_value(), Some(Order { id: 1 }));
}

#[test]
fn from_error_is_single_error_failure() {
    let result = RopResult::<Order>::from_error(Error::null_value());

    assert!(result.is_failure());
    assert_eq!(result.errors(), &[Error::null_value()]);
}

#[test]
fn from_errors_copies_every_error() {
    let errors = Errors::try_from_iter([Error::null_value(), Error::null_value()]).unwrap();
    let result = RopResult::<Order>::from_errors(errors);

    assert!(result.is_failure());
    assert_eq!(result.errors().len(), 2);
    assert_eq!(result.errors()[0], Error::null_value());
    assert_eq!(result.errors()[1], Error::null_value());
}

#[test]
fn try_from_errors_rejects_empty() {
    assert!(RopResult::<Order>::try_from_errors(Vec::new()).is_err());
}

#[test]
fn from_result_lifts_both_sides() {
    assert_eq!(RopResult::from_result(Ok::<_, Error>(3)).into_value(), Some(3));
    assert_eq!(
        RopResult::<u8>::from_result(Err(Error::fail())).errors(),
        &[Error::fail()]
    );
}

#[test]
fn tracks_are_complements() {
    let ok = RopResult::from_value(1);
    let ko = failed::<i32>();

    assert_ne!(ok.is_success(), ok.is_failure());
    assert_ne!(ko.is_success(), ko.is_failure());
}

#[test]
#[should_panic(expected = "called on a failure")]
fn data_on_failure_is_a_precondition_violation() {
    let result = RopResult::<Order>::from_error(Error::fail());
    let _ = result.data();
}

#[test]
fn value_accessors_are_total() {
    let ko = failed::<i32>();
    assert!(ko.value().is_none());
    assert_eq!(ko.clone().into_errors().map(|e| e.len()), Some(2));
    assert!(RopResult::from_value(1).into_errors().is_none());
}

#[test]
fn match_with_folds_success() {
    let result = RopResult::from_value(Order::default());
    let matched: bool = result.match_with(|_order| true, |_errors| false);

    assert!(matched);
}

#[test]
fn match_with_folds_failure() {
    let result = RopResult::<Order>::from_error(Error::fail());
    let kinds = result.match_with(|_| Vec::new(), |errors| {
        errors.iter().map(|e| e.domain_error().clone()).collect::<Vec<_>>()
    });

    assert_eq!(kinds, vec![DomainError::Fail]);
}

#[test]
fn into_std_round_trips() {
    let std_result: Result<u8, Errors> = RopResult::from_value(4).into_std();
    assert_eq!(std_result, Ok(4));

    let back: RopResult<u8> = std_result.into();
    assert_eq!(back, RopResult::from_value(4));
}

#[test]
fn as_ref_borrows_payload() {
    let result = RopResult::from_value(String::from("engine"));
    assert_eq!(result.as_ref().map(|s| s.len()).into_value(), Some(6));
    assert!(result.is_success());
}

#[test]
fn iterates_over_payload_only() {
    let ok = RopResult::from_value(5);
    assert_eq!(ok.iter().copied().collect::<Vec<_>>(), vec![5]);
    assert_eq!(ok.iter_errors().count(), 0);

    let ko = failed::<i32>();
    assert_eq!(ko.iter().count(), 0);
    assert_eq!(ko.iter_errors().count(), 2);
    assert_eq!(ko.into_iter().count(), 0);
}

#[cfg(feature = "serde")]
#[test]
fn serializes_only_the_observable_track() {
    let ok = RopResult::from_value(Order { id: 9 });
    let json = serde_json::to_value(&ok).unwrap();
    assert_eq!(json, serde_json::json!({ "data": { "id": 9 } }));

    let ko = RopResult::<Order>::from_error(Error::fail());
    let json = serde_json::to_value(&ko).unwrap();
    assert_eq!(json, serde_json::json!({ "errors": [{ "domain_error": "Fail" }] }));

    let back: RopResult<Order> = serde_json::from_value(json).unwrap();
    assert_eq!(back, ko);
    assert!(serde_json::from_value::<RopResult<Order>>(serde_json::json!({ "errors": [] })).is_err());
}
