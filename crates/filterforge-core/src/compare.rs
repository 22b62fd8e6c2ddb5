//! Value comparison functions.

use std::cmp::Ordering;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::value::Value;

/// Compares two values.
///
/// Returns `None` when the values cannot be ordered against each other:
/// nulls, collections, records, and mixed non-numeric kinds.
pub fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::I64(x), Value::I64(y)) => Some(x.cmp(y)),
        (Value::F64(x), Value::F64(y)) => x.partial_cmp(y),
        (Value::I64(x), Value::F64(y)) => (*x as f64).partial_cmp(y),
        (Value::F64(x), Value::I64(y)) => x.partial_cmp(&(*y as f64)),
        (Value::Decimal(x), Value::Decimal(y)) => Some(x.cmp(y)),
        (Value::Decimal(x), Value::I64(y)) => Some(x.cmp(&Decimal::from(*y))),
        (Value::I64(x), Value::Decimal(y)) => Some(Decimal::from(*x).cmp(y)),
        (Value::Decimal(x), Value::F64(y)) => x.to_f64()?.partial_cmp(y),
        (Value::F64(x), Value::Decimal(y)) => x.partial_cmp(&y.to_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        (Value::Date(x), Value::Date(y)) => Some(x.cmp(y)),
        (Value::DateTime(x), Value::DateTime(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

/// Checks if two values are equal for filtering purposes.
///
/// Comparable values are equal when they order as equal, so `1.0` and `1.00`
/// match as decimals and `2` matches `2.0`. Everything else falls back to
/// structural equality.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match compare_values(a, b) {
        Some(ordering) => ordering == Ordering::Equal,
        None => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn decimal(s: &str) -> Value {
        Value::Decimal(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn test_cross_numeric_ordering() {
        assert_eq!(
            compare_values(&Value::I64(2), &Value::F64(2.5)),
            Some(Ordering::Less)
        );
        assert_eq!(
            compare_values(&decimal("3.10"), &Value::I64(3)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            compare_values(&Value::F64(0.5), &decimal("0.50")),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_incomparable_kinds() {
        assert_eq!(compare_values(&Value::from("a"), &Value::I64(1)), None);
        assert_eq!(compare_values(&Value::Null, &Value::Null), None);
        assert_eq!(
            compare_values(&Value::list([1]), &Value::list([1])),
            None
        );
        assert_eq!(compare_values(&Value::F64(f64::NAN), &Value::F64(1.0)), None);
    }

    #[test]
    fn test_values_equal_prefers_ordering() {
        assert!(values_equal(&decimal("1.0"), &decimal("1.00")));
        assert!(values_equal(&Value::I64(2), &Value::F64(2.0)));
        assert!(!values_equal(&Value::from("a"), &Value::from("b")));
    }

    #[test]
    fn test_values_equal_falls_back_to_structure() {
        assert!(values_equal(&Value::list([1, 2]), &Value::list([1, 2])));
        assert!(!values_equal(&Value::list([1, 2]), &Value::list([2, 1])));
        assert!(values_equal(&Value::Null, &Value::Null));
        assert!(!values_equal(&Value::from("1"), &Value::I64(1)));
    }
}
