//! The filter tree.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use filterforge_core::{unordered_hash, values_equal, FilterForgeError, Result, Value};

use crate::junction::Junction;

/// Ordering or equality test applied by [`Filter::Comparison`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    Equal,
    Greater,
    Less,
    GreaterOrEqual,
    LessOrEqual,
}

impl ComparisonOperator {
    /// Operator symbol used in textual output.
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "=",
            ComparisonOperator::Greater => ">",
            ComparisonOperator::Less => "<",
            ComparisonOperator::GreaterOrEqual => ">=",
            ComparisonOperator::LessOrEqual => "<=",
        }
    }

    /// Returns true if `actual` ordered against the literal as `ordering`
    /// satisfies this operator.
    pub fn accepts(&self, ordering: std::cmp::Ordering) -> bool {
        match self {
            ComparisonOperator::Equal => ordering.is_eq(),
            ComparisonOperator::Greater => ordering.is_gt(),
            ComparisonOperator::Less => ordering.is_lt(),
            ComparisonOperator::GreaterOrEqual => ordering.is_ge(),
            ComparisonOperator::LessOrEqual => ordering.is_le(),
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Divisor of a [`Filter::Modulo`] test.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Modulus {
    /// Fixed divisor.
    Literal(i64),
    /// Divisor read from another property of the candidate.
    Property(Arc<str>),
}

impl Modulus {
    pub fn property(path: impl Into<Arc<str>>) -> Self {
        Modulus::Property(path.into())
    }

    /// Builds a modulus from optional parts, as delivered by search forms.
    ///
    /// Exactly one of `literal` and `path` must be present.
    pub fn from_parts(literal: Option<i64>, path: Option<&str>) -> Result<Self> {
        match (literal, path) {
            (Some(value), None) => Ok(Modulus::Literal(value)),
            (None, Some(path)) if !path.is_empty() => Ok(Modulus::property(path)),
            (None, _) => Err(FilterForgeError::InvalidFilter(
                "modulo needs either a literal modulus or a property path".to_string(),
            )),
            (Some(_), Some(_)) => Err(FilterForgeError::InvalidFilter(
                "modulo takes a literal modulus or a property path, not both".to_string(),
            )),
        }
    }
}

impl From<i64> for Modulus {
    fn from(v: i64) -> Self {
        Modulus::Literal(v)
    }
}

impl From<i32> for Modulus {
    fn from(v: i32) -> Self {
        Modulus::Literal(v.into())
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modulus::Literal(v) => write!(f, "{}", v),
            Modulus::Property(path) => f.write_str(path),
        }
    }
}

/// Candidate values of a [`Filter::In`] test.
///
/// Duplicates are dropped on construction; equality and hashing ignore order.
#[derive(Debug, Clone, Default)]
pub struct ValueSet(Vec<Value>);

impl ValueSet {
    pub fn new<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        let mut items: Vec<Value> = Vec::new();
        for value in values {
            let value = value.into();
            if !items.contains(&value) {
                items.push(value);
            }
        }
        ValueSet(items)
    }

    /// Membership using filter equality (see [`values_equal`]).
    pub fn contains_equal(&self, value: &Value) -> bool {
        self.0.iter().any(|item| values_equal(value, item))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for ValueSet {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().all(|item| other.0.contains(item))
    }
}

impl Eq for ValueSet {}

impl Hash for ValueSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        unordered_hash(&self.0).hash(state);
    }
}

impl<'a> IntoIterator for &'a ValueSet {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A boolean test over a candidate object.
///
/// Leaves inspect exactly one property path; `Not`, `And` and `Or` combine
/// other filters. Equality and hashing are structural, and junction children
/// are compared in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Filter {
    Comparison {
        property_path: Arc<str>,
        operator: ComparisonOperator,
        value: Value,
    },
    /// Full-string match where `%` stands for any sequence of characters.
    Like {
        property_path: Arc<str>,
        pattern: Arc<str>,
        case_sensitive: bool,
    },
    In {
        property_path: Arc<str>,
        values: ValueSet,
    },
    /// Collection-valued property holds `value`.
    Contains {
        property_path: Arc<str>,
        value: Value,
    },
    IsNull {
        property_path: Arc<str>,
    },
    /// `property % modulus == remainder` with integral semantics.
    Modulo {
        property_path: Arc<str>,
        modulus: Modulus,
        remainder: i64,
    },
    /// Negation. The child is `None` only after a removal pass took it away.
    Not(Option<Box<Filter>>),
    And(Junction),
    Or(Junction),
}

impl Filter {
    // Constructors for every variant

    pub fn comparison(
        property_path: impl Into<Arc<str>>,
        operator: ComparisonOperator,
        value: impl Into<Value>,
    ) -> Self {
        Filter::Comparison {
            property_path: property_path.into(),
            operator,
            value: value.into(),
        }
    }

    pub fn equal(property_path: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        Self::comparison(property_path, ComparisonOperator::Equal, value)
    }

    pub fn greater(property_path: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        Self::comparison(property_path, ComparisonOperator::Greater, value)
    }

    pub fn less(property_path: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        Self::comparison(property_path, ComparisonOperator::Less, value)
    }

    pub fn greater_or_equal(property_path: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        Self::comparison(property_path, ComparisonOperator::GreaterOrEqual, value)
    }

    pub fn less_or_equal(property_path: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        Self::comparison(property_path, ComparisonOperator::LessOrEqual, value)
    }

    pub fn like(
        property_path: impl Into<Arc<str>>,
        pattern: impl Into<Arc<str>>,
        case_sensitive: bool,
    ) -> Self {
        Filter::Like {
            property_path: property_path.into(),
            pattern: pattern.into(),
            case_sensitive,
        }
    }

    pub fn in_values<V: Into<Value>>(
        property_path: impl Into<Arc<str>>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Filter::In {
            property_path: property_path.into(),
            values: ValueSet::new(values),
        }
    }

    pub fn contains(property_path: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        Filter::Contains {
            property_path: property_path.into(),
            value: value.into(),
        }
    }

    pub fn is_null(property_path: impl Into<Arc<str>>) -> Self {
        Filter::IsNull {
            property_path: property_path.into(),
        }
    }

    pub fn modulo(
        property_path: impl Into<Arc<str>>,
        modulus: impl Into<Modulus>,
        remainder: i64,
    ) -> Self {
        Filter::Modulo {
            property_path: property_path.into(),
            modulus: modulus.into(),
            remainder,
        }
    }

    pub fn not(child: Filter) -> Self {
        Filter::Not(Some(Box::new(child)))
    }

    pub fn and(children: impl IntoIterator<Item = Filter>) -> Self {
        Filter::And(children.into_iter().collect())
    }

    pub fn or(children: impl IntoIterator<Item = Filter>) -> Self {
        Filter::Or(children.into_iter().collect())
    }

    /// Returns the property path of a leaf filter.
    pub fn property_path(&self) -> Option<&str> {
        match self {
            Filter::Comparison { property_path, .. }
            | Filter::Like { property_path, .. }
            | Filter::In { property_path, .. }
            | Filter::Contains { property_path, .. }
            | Filter::IsNull { property_path }
            | Filter::Modulo { property_path, .. } => Some(&**property_path),
            Filter::Not(_) | Filter::And(_) | Filter::Or(_) => None,
        }
    }

    /// Returns true for leaves, which test exactly one property.
    pub fn is_property_filter(&self) -> bool {
        self.property_path().is_some()
    }

    /// Returns true if this is a leaf on `path`.
    pub fn has_property_path(&self, path: &str) -> bool {
        self.property_path() == Some(path)
    }

    pub fn as_junction(&self) -> Option<&Junction> {
        match self {
            Filter::And(j) | Filter::Or(j) => Some(j),
            _ => None,
        }
    }

    pub fn as_junction_mut(&mut self) -> Option<&mut Junction> {
        match self {
            Filter::And(j) | Filter::Or(j) => Some(j),
            _ => None,
        }
    }

    /// Returns true for a junction without children or a `Not` without a
    /// child: nodes that no longer constrain anything after a removal.
    pub fn is_vacant(&self) -> bool {
        match self {
            Filter::And(j) | Filter::Or(j) => j.is_empty(),
            Filter::Not(child) => child.is_none(),
            _ => false,
        }
    }

    /// Returns true if this is `Comparison` with [`ComparisonOperator::Equal`].
    pub fn is_equality(&self) -> bool {
        matches!(
            self,
            Filter::Comparison {
                operator: ComparisonOperator::Equal,
                ..
            }
        )
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Filter::Comparison { .. } => "comparison",
            Filter::Like { .. } => "like",
            Filter::In { .. } => "in",
            Filter::Contains { .. } => "contains",
            Filter::IsNull { .. } => "is_null",
            Filter::Modulo { .. } => "modulo",
            Filter::Not(_) => "not",
            Filter::And(_) => "and",
            Filter::Or(_) => "or",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Comparison {
                property_path,
                operator,
                value,
            } => write!(f, "{} {} {}", property_path, operator, value),
            Filter::Like {
                property_path,
                pattern,
                case_sensitive,
            } => {
                let keyword = if *case_sensitive { "LIKE" } else { "ILIKE" };
                write!(f, "{} {} '{}'", property_path, keyword, pattern)
            }
            Filter::In {
                property_path,
                values,
            } => {
                write!(f, "{} IN (", property_path)?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, ")")
            }
            Filter::Contains {
                property_path,
                value,
            } => write!(f, "{} CONTAINS {}", property_path, value),
            Filter::IsNull { property_path } => write!(f, "{} IS NULL", property_path),
            Filter::Modulo {
                property_path,
                modulus,
                remainder,
            } => write!(f, "{} % {} = {}", property_path, modulus, remainder),
            Filter::Not(Some(child)) => write!(f, "NOT ({})", child),
            Filter::Not(None) => write!(f, "NOT ()"),
            Filter::And(j) => j.fmt_joined(f, "AND", "TRUE"),
            Filter::Or(j) => j.fmt_joined(f, "OR", "FALSE"),
        }
    }
}
