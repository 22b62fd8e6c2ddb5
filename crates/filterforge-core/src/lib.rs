//! FilterForge Core - Core types shared by the filter engine
//!
//! This crate provides the fundamental abstractions for FilterForge:
//! - Dynamic values carried by filters and produced by property lookup
//! - Value comparison with cross-numeric ordering
//! - The `PropertyAccessor` seam for resolving dotted property paths
//! - Attribute and entity metadata consumed by the rewrite pass

pub mod accessor;
pub mod compare;
pub mod error;
pub mod metadata;
pub mod value;

pub use accessor::{PropertyAccessor, Record};
pub use compare::{compare_values, values_equal};
pub use error::{FilterForgeError, Result};
pub use metadata::{AttributeKind, AttributeMetadata, AttributeMetadataIter, EntityMetadata};
pub use value::{unordered_hash, Value};
