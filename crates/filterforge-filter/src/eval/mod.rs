//! In-memory filter evaluation.
//!
//! # Evaluation Semantics
//!
//! This uses **two-valued logic** (true/false), not SQL 3-valued NULL logic:
//!
//! - **Absent candidate**: every leaf evaluates to `false`; junctions and
//!   `Not` still combine their children, so `And()` stays `true` and
//!   `Not(leaf)` becomes `true`
//! - **Null property**: every leaf except `IsNull` evaluates to `false`,
//!   including `Equal` against a null literal
//! - **Wrong kind of value**: non-strings under `Like` and non-collections
//!   under `Contains` evaluate to `false`
//! - **Fatal misuse**: ordering incomparable operands, a zero modulus,
//!   non-numeric modulo operands, and a `Not` without child abort with an
//!   error

#[cfg(test)]
mod tests;

use filterforge_core::{
    compare_values, values_equal, FilterForgeError, PropertyAccessor, Result, Value,
};

use crate::filter::{ComparisonOperator, Filter, Modulus};
use crate::like::LikePattern;

impl Filter {
    /// Evaluates this filter against an optional candidate.
    pub fn evaluate<C>(&self, candidate: Option<&C>) -> Result<bool>
    where
        C: PropertyAccessor + ?Sized,
    {
        match self {
            Filter::Comparison {
                property_path,
                operator,
                value,
            } => {
                let Some(candidate) = candidate else {
                    return Ok(false);
                };
                let actual = candidate.resolve(property_path);
                if actual.is_null() {
                    return Ok(false);
                }
                eval_comparison(&actual, *operator, value, property_path)
            }

            Filter::Like {
                property_path,
                pattern,
                case_sensitive,
            } => {
                let Some(candidate) = candidate else {
                    return Ok(false);
                };
                let actual = candidate.resolve(property_path);
                let Some(text) = actual.as_str() else {
                    return Ok(false);
                };
                Ok(LikePattern::new(pattern, *case_sensitive)?.is_match(text))
            }

            Filter::In {
                property_path,
                values,
            } => {
                let Some(candidate) = candidate else {
                    return Ok(false);
                };
                let actual = candidate.resolve(property_path);
                Ok(!actual.is_null() && values.contains_equal(&actual))
            }

            Filter::Contains {
                property_path,
                value,
            } => {
                let Some(candidate) = candidate else {
                    return Ok(false);
                };
                let actual = candidate.resolve(property_path);
                let Some(items) = actual.as_collection() else {
                    return Ok(false);
                };
                Ok(items.iter().any(|item| values_equal(item, value)))
            }

            Filter::IsNull { property_path } => match candidate {
                Some(candidate) => Ok(candidate.resolve(property_path).is_null()),
                None => Ok(false),
            },

            Filter::Modulo {
                property_path,
                modulus,
                remainder,
            } => {
                // A literal zero is a configuration error regardless of the candidate
                if let Modulus::Literal(0) = modulus {
                    return Err(FilterForgeError::ZeroModulus {
                        path: property_path.to_string(),
                    });
                }
                let Some(candidate) = candidate else {
                    return Ok(false);
                };
                eval_modulo(candidate, property_path, modulus, *remainder)
            }

            Filter::Not(child) => {
                let child = child.as_deref().ok_or(FilterForgeError::DanglingNot)?;
                Ok(!child.evaluate(candidate)?)
            }

            Filter::And(junction) => {
                for child in junction.children() {
                    if !child.evaluate(candidate)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }

            Filter::Or(junction) => {
                for child in junction.children() {
                    if child.evaluate(candidate)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }

    /// Evaluates this filter against a present candidate.
    pub fn matches<C>(&self, candidate: &C) -> Result<bool>
    where
        C: PropertyAccessor + ?Sized,
    {
        self.evaluate(Some(candidate))
    }

    /// Evaluates this filter without a candidate.
    pub fn evaluate_absent(&self) -> Result<bool> {
        self.evaluate::<Value>(None)
    }
}

fn eval_comparison(
    actual: &Value,
    operator: ComparisonOperator,
    literal: &Value,
    property_path: &str,
) -> Result<bool> {
    if operator == ComparisonOperator::Equal {
        return Ok(values_equal(actual, literal));
    }
    match compare_values(actual, literal) {
        Some(ordering) => Ok(operator.accepts(ordering)),
        None => Err(FilterForgeError::Incomparable {
            path: property_path.to_string(),
            operator: operator.symbol(),
            value: literal.to_string(),
        }),
    }
}

fn eval_modulo<C>(
    candidate: &C,
    property_path: &str,
    modulus: &Modulus,
    remainder: i64,
) -> Result<bool>
where
    C: PropertyAccessor + ?Sized,
{
    let Some(dividend) = integral_at(candidate, property_path)? else {
        return Ok(false);
    };
    let divisor = match modulus {
        Modulus::Literal(value) => *value,
        Modulus::Property(path) => match integral_at(candidate, path)? {
            Some(value) => value,
            None => return Ok(false),
        },
    };
    if divisor == 0 {
        return Err(FilterForgeError::ZeroModulus {
            path: property_path.to_string(),
        });
    }
    Ok(dividend.wrapping_rem(divisor) == remainder)
}

// Ok(None) for a null property, an error for anything non-numeric.
fn integral_at<C>(candidate: &C, path: &str) -> Result<Option<i64>>
where
    C: PropertyAccessor + ?Sized,
{
    let value = candidate.resolve(path);
    if value.is_null() {
        return Ok(None);
    }
    value
        .as_integral()
        .map(Some)
        .ok_or_else(|| FilterForgeError::NotNumeric {
            path: path.to_string(),
        })
}
