//! Composable filters for FilterForge.
//!
//! This crate provides the [`Filter`] tree: comparison, pattern, membership,
//! null and modulo leaves combined with `Not`, `And` and `Or`. Filters are
//! evaluated in memory against any [`PropertyAccessor`](filterforge_core::PropertyAccessor)
//! and can be lowered from declarative [`FlexibleFilterDefinition`]s.

mod definition;
mod eval;
mod filter;
mod junction;
mod like;

pub use definition::{FlexibleFilterDefinition, FlexibleFilterType};
pub use filter::{ComparisonOperator, Filter, Modulus, ValueSet};
pub use junction::Junction;
pub use like::LikePattern;
