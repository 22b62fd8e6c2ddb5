//! Declarative filter definitions.
//!
//! Search forms describe a filter as an attribute, a filter type and up to
//! two values. [`FlexibleFilterDefinition::to_filter`] lowers such a record
//! into an executable [`Filter`] over the attribute's path.

use std::fmt;

use filterforge_core::{AttributeMetadata, FilterForgeError, Result, Value};
use serde::{Deserialize, Serialize};

use crate::filter::{ComparisonOperator, Filter};

/// Filter vocabulary offered by flexible search forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexibleFilterType {
    Between,
    Contains,
    Equals,
    GreaterOrEqual,
    GreaterThan,
    LessOrEqual,
    LessThan,
    NotContains,
    NotEqual,
    NotStartsWith,
    StartsWith,
}

impl FlexibleFilterType {
    pub const ALL: [FlexibleFilterType; 11] = [
        FlexibleFilterType::Between,
        FlexibleFilterType::Contains,
        FlexibleFilterType::Equals,
        FlexibleFilterType::GreaterOrEqual,
        FlexibleFilterType::GreaterThan,
        FlexibleFilterType::LessOrEqual,
        FlexibleFilterType::LessThan,
        FlexibleFilterType::NotContains,
        FlexibleFilterType::NotEqual,
        FlexibleFilterType::NotStartsWith,
        FlexibleFilterType::StartsWith,
    ];

    /// Returns true if the type takes an upper bound in `value_to`.
    pub fn requires_value_to(&self) -> bool {
        matches!(self, FlexibleFilterType::Between)
    }

    /// Returns true if the type only applies to string values.
    pub fn is_string_only(&self) -> bool {
        matches!(
            self,
            FlexibleFilterType::Contains
                | FlexibleFilterType::NotContains
                | FlexibleFilterType::StartsWith
                | FlexibleFilterType::NotStartsWith
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlexibleFilterType::Between => "between",
            FlexibleFilterType::Contains => "contains",
            FlexibleFilterType::Equals => "equals",
            FlexibleFilterType::GreaterOrEqual => "greater_or_equal",
            FlexibleFilterType::GreaterThan => "greater_than",
            FlexibleFilterType::LessOrEqual => "less_or_equal",
            FlexibleFilterType::LessThan => "less_than",
            FlexibleFilterType::NotContains => "not_contains",
            FlexibleFilterType::NotEqual => "not_equal",
            FlexibleFilterType::NotStartsWith => "not_starts_with",
            FlexibleFilterType::StartsWith => "starts_with",
        }
    }
}

impl fmt::Display for FlexibleFilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filter as entered in a flexible search form.
#[derive(Debug, Clone)]
pub struct FlexibleFilterDefinition {
    pub attribute: AttributeMetadata,
    pub filter_type: FlexibleFilterType,
    pub value: Option<Value>,
    /// Upper bound, only used by [`FlexibleFilterType::Between`].
    pub value_to: Option<Value>,
}

impl FlexibleFilterDefinition {
    pub fn new(attribute: AttributeMetadata, filter_type: FlexibleFilterType) -> Self {
        Self {
            attribute,
            filter_type,
            value: None,
            value_to: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_value_to(mut self, value: impl Into<Value>) -> Self {
        self.value_to = Some(value.into());
        self
    }

    /// Lowers the definition into an executable filter.
    ///
    /// # Errors
    ///
    /// Returns [`FilterForgeError::InvalidFilter`] if `value` is missing,
    /// if `Between` has no `value_to`, or if a string-only type is given a
    /// non-string value.
    pub fn to_filter(&self) -> Result<Filter> {
        let path = self.attribute.path.clone();
        let value = self
            .value
            .clone()
            .filter(|v| !v.is_null())
            .ok_or_else(|| self.invalid("a value is required"))?;

        let filter = match self.filter_type {
            FlexibleFilterType::Equals => Filter::equal(path, value),
            FlexibleFilterType::NotEqual => Filter::not(Filter::equal(path, value)),
            FlexibleFilterType::GreaterThan => Filter::greater(path, value),
            FlexibleFilterType::GreaterOrEqual => Filter::greater_or_equal(path, value),
            FlexibleFilterType::LessThan => Filter::less(path, value),
            FlexibleFilterType::LessOrEqual => Filter::less_or_equal(path, value),
            FlexibleFilterType::Between => {
                let upper = self
                    .value_to
                    .clone()
                    .filter(|v| !v.is_null())
                    .ok_or_else(|| self.invalid("between requires an upper bound"))?;
                Filter::and([
                    Filter::comparison(path.clone(), ComparisonOperator::GreaterOrEqual, value),
                    Filter::comparison(path, ComparisonOperator::LessOrEqual, upper),
                ])
            }
            FlexibleFilterType::Contains => {
                Filter::like(path, format!("%{}%", self.text(&value)?), false)
            }
            FlexibleFilterType::NotContains => {
                Filter::not(Filter::like(path, format!("%{}%", self.text(&value)?), false))
            }
            FlexibleFilterType::StartsWith => {
                Filter::like(path, format!("{}%", self.text(&value)?), false)
            }
            FlexibleFilterType::NotStartsWith => {
                Filter::not(Filter::like(path, format!("{}%", self.text(&value)?), false))
            }
        };
        Ok(filter)
    }

    fn text<'a>(&self, value: &'a Value) -> Result<&'a str> {
        value.as_str().ok_or_else(|| {
            self.invalid(&format!("expected a string value, got {}", value.type_name()))
        })
    }

    fn invalid(&self, reason: &str) -> FilterForgeError {
        FilterForgeError::InvalidFilter(format!(
            "{} filter on '{}': {}",
            self.filter_type, self.attribute.path, reason
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filterforge_test::candidate_with_name;

    fn on(path: &str, filter_type: FlexibleFilterType) -> FlexibleFilterDefinition {
        FlexibleFilterDefinition::new(AttributeMetadata::basic(path), filter_type)
    }

    #[test]
    fn test_comparisons() {
        let cases = [
            (FlexibleFilterType::Equals, Filter::equal("age", 5)),
            (FlexibleFilterType::GreaterThan, Filter::greater("age", 5)),
            (
                FlexibleFilterType::GreaterOrEqual,
                Filter::greater_or_equal("age", 5),
            ),
            (FlexibleFilterType::LessThan, Filter::less("age", 5)),
            (FlexibleFilterType::LessOrEqual, Filter::less_or_equal("age", 5)),
            (
                FlexibleFilterType::NotEqual,
                Filter::not(Filter::equal("age", 5)),
            ),
        ];
        for (filter_type, expected) in cases {
            let lowered = on("age", filter_type).with_value(5).to_filter().unwrap();
            assert_eq!(lowered, expected, "{}", filter_type);
        }
    }

    #[test]
    fn test_between() {
        let filter = on("age", FlexibleFilterType::Between)
            .with_value(18)
            .with_value_to(65)
            .to_filter()
            .unwrap();
        assert_eq!(
            filter,
            Filter::and([
                Filter::greater_or_equal("age", 18),
                Filter::less_or_equal("age", 65),
            ])
        );

        let missing = on("age", FlexibleFilterType::Between).with_value(18).to_filter();
        assert!(matches!(missing, Err(FilterForgeError::InvalidFilter(_))));
    }

    #[test]
    fn test_string_types() {
        let contains = on("name", FlexibleFilterType::Contains)
            .with_value("evi")
            .to_filter()
            .unwrap();
        assert_eq!(contains, Filter::like("name", "%evi%", false));
        assert!(contains.matches(&candidate_with_name("KEVIN")).unwrap());

        let starts = on("name", FlexibleFilterType::NotStartsWith)
            .with_value("Ke")
            .to_filter()
            .unwrap();
        assert_eq!(starts, Filter::not(Filter::like("name", "Ke%", false)));
        assert!(!starts.matches(&candidate_with_name("kevin")).unwrap());
        assert!(starts.matches(&candidate_with_name("Ann")).unwrap());
    }

    #[test]
    fn test_string_type_rejects_other_values() {
        let result = on("name", FlexibleFilterType::StartsWith)
            .with_value(5)
            .to_filter();
        assert!(matches!(result, Err(FilterForgeError::InvalidFilter(_))));
    }

    #[test]
    fn test_missing_value() {
        for filter_type in FlexibleFilterType::ALL {
            assert!(on("age", filter_type).to_filter().is_err(), "{}", filter_type);
        }
        assert!(on("age", FlexibleFilterType::Equals)
            .with_value(Value::Null)
            .to_filter()
            .is_err());
    }

    #[test]
    fn test_vocabulary() {
        let needs_upper: Vec<_> = FlexibleFilterType::ALL
            .iter()
            .filter(|t| t.requires_value_to())
            .collect();
        assert_eq!(needs_upper, [&FlexibleFilterType::Between]);
        assert_eq!(
            FlexibleFilterType::ALL
                .iter()
                .filter(|t| t.is_string_only())
                .count(),
            4
        );
    }

    #[test]
    fn test_serde_names() {
        let yaml = serde_yaml::to_string(&FlexibleFilterType::NotStartsWith).unwrap();
        assert_eq!(yaml.trim(), "not_starts_with");
        for filter_type in FlexibleFilterType::ALL {
            let parsed: FlexibleFilterType = serde_yaml::from_str(filter_type.as_str()).unwrap();
            assert_eq!(parsed, filter_type);
        }
    }
}
