//! Filter tree rewrites for FilterForge.
//!
//! Structural primitives work on any [`Filter`](filterforge_filter::Filter)
//! tree by property path:
//!
//! - [`extract_filter`] finds the first leaf on a path
//! - [`flatten`] inlines nested `And`s
//! - [`remove_filters`] drops leaves and prunes what they leave behind
//! - [`replace_filter`] substitutes leaves in place
//!
//! [`rewrite_relation_filters`] builds on them to turn equality tests on
//! relations and collections into the tests those attributes actually
//! support, driven by [`EntityMetadata`](filterforge_core::EntityMetadata).

mod extract;
mod flatten;
mod relation;
mod remove;
mod replace;

pub use extract::extract_filter;
pub use flatten::flatten;
pub use relation::{rewrite_relation_filters, rewrite_relation_filters_with, RewriteReport};
pub use remove::remove_filters;
pub use replace::replace_filter;
