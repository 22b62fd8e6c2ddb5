//! Tests for in-memory evaluation.

use filterforge_core::{FilterForgeError, Record, Value};
use filterforge_test::{candidate_with_age, candidate_with_name, candidate_with_tags, Person};
use rust_decimal::Decimal;

use crate::filter::{Filter, Modulus};

#[test]
fn test_not_negates_child() {
    let adult = Filter::greater_or_equal("age", 18);
    for age in [12, 18, 40] {
        let candidate = candidate_with_age(age);
        let inner = adult.matches(&candidate).unwrap();
        assert_eq!(Filter::not(adult.clone()).matches(&candidate).unwrap(), !inner);
    }
}

#[test]
fn test_not_on_absent_candidate() {
    // The leaf is false without a candidate, so its negation holds
    let filter = Filter::not(Filter::equal("age", 5));
    assert!(filter.evaluate_absent().unwrap());
}

#[test]
fn test_empty_junctions() {
    let candidate = candidate_with_age(3);
    assert!(Filter::and([]).matches(&candidate).unwrap());
    assert!(!Filter::or([]).matches(&candidate).unwrap());
    assert!(Filter::and([]).evaluate_absent().unwrap());
    assert!(!Filter::or([]).evaluate_absent().unwrap());
}

#[test]
fn test_junctions_short_circuit() {
    let candidate = candidate_with_age(6);
    // The second child would fail on a zero modulus if it were evaluated
    let and = Filter::and([Filter::equal("age", 7), Filter::modulo("age", 0, 0)]);
    assert!(!and.matches(&candidate).unwrap());
    let or = Filter::or([Filter::equal("age", 6), Filter::modulo("age", 0, 0)]);
    assert!(or.matches(&candidate).unwrap());
}

#[test]
fn test_junction_errors_propagate() {
    let candidate = candidate_with_age(6);
    let and = Filter::and([Filter::equal("age", 6), Filter::modulo("age", 0, 0)]);
    assert!(matches!(
        and.matches(&candidate),
        Err(FilterForgeError::ZeroModulus { .. })
    ));
}

#[test]
fn test_comparison_operators() {
    let candidate = candidate_with_age(30);
    assert!(Filter::equal("age", 30).matches(&candidate).unwrap());
    assert!(Filter::greater("age", 29).matches(&candidate).unwrap());
    assert!(!Filter::greater("age", 30).matches(&candidate).unwrap());
    assert!(Filter::greater_or_equal("age", 30).matches(&candidate).unwrap());
    assert!(Filter::less("age", 31).matches(&candidate).unwrap());
    assert!(Filter::less_or_equal("age", 30).matches(&candidate).unwrap());
    assert!(!Filter::less_or_equal("age", 29).matches(&candidate).unwrap());
}

#[test]
fn test_comparison_across_numeric_kinds() {
    let candidate = Record::new()
        .with("price", Decimal::new(10, 1))
        .with("weight", 2.5);
    // 1.0 and 1.00 differ in scale but compare equal
    assert!(Filter::equal("price", Decimal::new(100, 2))
        .matches(&candidate)
        .unwrap());
    assert!(Filter::greater("weight", 2).matches(&candidate).unwrap());
    assert!(Filter::less("price", 1.5).matches(&candidate).unwrap());
}

#[test]
fn test_comparison_on_null_is_false() {
    let candidate = Record::new().with("age", Value::Null);
    assert!(!Filter::equal("age", 5).matches(&candidate).unwrap());
    assert!(!Filter::greater("age", 5).matches(&candidate).unwrap());
    // null = null does not hold either
    assert!(!Filter::equal("age", Value::Null).matches(&candidate).unwrap());
    // Missing property behaves like null
    assert!(!Filter::less("height", 5).matches(&candidate).unwrap());
}

#[test]
fn test_ordering_incomparable_values_fails() {
    let candidate = candidate_with_name("Kevin");
    let result = Filter::greater("name", 5).matches(&candidate);
    match result {
        Err(FilterForgeError::Incomparable {
            path,
            operator,
            value,
        }) => {
            assert_eq!(path, "name");
            assert_eq!(operator, ">");
            assert_eq!(value, "5");
        }
        other => panic!("expected Incomparable, got {:?}", other),
    }
}

#[test]
fn test_equal_on_mismatched_kinds_is_false() {
    let candidate = candidate_with_name("5");
    assert!(!Filter::equal("name", 5).matches(&candidate).unwrap());
}

#[test]
fn test_like_case_insensitive() {
    let filter = Filter::like("name", "%evi%", false);
    assert!(filter.matches(&candidate_with_name("KEVIN")).unwrap());
    assert!(!filter.matches(&candidate_with_name("Kevon")).unwrap());
}

#[test]
fn test_like_case_sensitive() {
    let filter = Filter::like("name", "%evi%", true);
    assert!(!filter.matches(&candidate_with_name("KEVIN")).unwrap());
    assert!(filter.matches(&candidate_with_name("Kevin")).unwrap());
}

#[test]
fn test_like_on_non_string_is_false() {
    let filter = Filter::like("age", "%1%", true);
    assert!(!filter.matches(&candidate_with_age(11)).unwrap());
    assert!(!filter.evaluate_absent().unwrap());
}

#[test]
fn test_in_membership() {
    let filter = Filter::in_values("age", [3, 5, 8]);
    assert!(filter.matches(&candidate_with_age(5)).unwrap());
    assert!(!filter.matches(&candidate_with_age(4)).unwrap());
    // Membership follows equality across numeric kinds
    assert!(filter.matches(&Record::new().with("age", 5.0)).unwrap());
}

#[test]
fn test_in_rejects_null() {
    let filter = Filter::in_values("age", [Value::Null, Value::I64(1)]);
    assert!(!filter.matches(&Record::new()).unwrap());
}

#[test]
fn test_contains() {
    let filter = Filter::contains("tags", 4);
    assert!(!filter.matches(&candidate_with_tags([5])).unwrap());
    assert!(filter.matches(&candidate_with_tags([4, 5])).unwrap());
    assert!(!filter.evaluate_absent().unwrap());
    assert!(!filter.matches(&Record::new()).unwrap());
}

#[test]
fn test_contains_on_non_collection_is_false() {
    let filter = Filter::contains("age", 4);
    assert!(!filter.matches(&candidate_with_age(4)).unwrap());
}

#[test]
fn test_contains_on_set() {
    let candidate = Record::new().with("tags", Value::set(["a", "b"]));
    assert!(Filter::contains("tags", "b").matches(&candidate).unwrap());
}

#[test]
fn test_is_null() {
    let filter = Filter::is_null("email");
    assert!(filter.matches(&Person::new("Ann")).unwrap());
    assert!(!filter
        .matches(&Person::new("Ann").with_email("ann@example.com"))
        .unwrap());
    assert!(!filter.evaluate_absent().unwrap());
}

#[test]
fn test_modulo_literal() {
    let filter = Filter::modulo("age", 4, 2);
    assert!(filter.matches(&candidate_with_age(6)).unwrap());
    assert!(!filter.matches(&candidate_with_age(7)).unwrap());
    assert!(!filter.matches(&Record::new()).unwrap());
}

#[test]
fn test_modulo_zero_is_fatal() {
    let filter = Filter::modulo("age", 0, 2);
    assert!(matches!(
        filter.matches(&candidate_with_age(6)),
        Err(FilterForgeError::ZeroModulus { .. })
    ));
    assert!(filter.evaluate_absent().is_err());
}

#[test]
fn test_modulo_from_property() {
    let filter = Filter::modulo("age", Modulus::property("width"), 1);
    let candidate = candidate_with_age(7).with("width", 3);
    assert!(filter.matches(&candidate).unwrap());

    // Missing divisor
    assert!(!filter.matches(&candidate_with_age(7)).unwrap());

    let zero = candidate_with_age(7).with("width", 0);
    assert!(matches!(
        filter.matches(&zero),
        Err(FilterForgeError::ZeroModulus { .. })
    ));
}

#[test]
fn test_modulo_truncates_fractions() {
    let filter = Filter::modulo("age", 4, 2);
    assert!(filter.matches(&Record::new().with("age", 6.9)).unwrap());
    assert!(filter
        .matches(&Record::new().with("age", Decimal::new(65, 1)))
        .unwrap());
    // Negative dividends keep the sign of the dividend
    assert!(Filter::modulo("age", 4, -2)
        .matches(&candidate_with_age(-6))
        .unwrap());
}

#[test]
fn test_modulo_on_non_numeric_fails() {
    let filter = Filter::modulo("name", 2, 0);
    assert!(matches!(
        filter.matches(&candidate_with_name("Kevin")),
        Err(FilterForgeError::NotNumeric { .. })
    ));
}

#[test]
fn test_dangling_not_fails() {
    let filter = Filter::and([Filter::Not(None)]);
    assert!(matches!(
        filter.matches(&candidate_with_age(1)),
        Err(FilterForgeError::DanglingNot)
    ));
}

#[test]
fn test_nested_paths() {
    let person = Person::new("Kevin").with_age(31).with_city("Ghent");
    let filter = Filter::and([
        Filter::equal("address.city", "Ghent"),
        Filter::like("name", "K%", true),
        Filter::not(Filter::is_null("age")),
    ]);
    assert!(filter.matches(&person).unwrap());
    assert!(!filter.matches(&Person::new("Kevin").with_age(31)).unwrap());
}
