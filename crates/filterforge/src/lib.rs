//! FilterForge - Composable Filters in Rust
//!
//! Build filter trees, rewrite them against entity metadata, and evaluate
//! them against in-memory objects.
//!
//! # Example
//!
//! ```rust
//! use filterforge::prelude::*;
//!
//! let metadata = EntityMetadata::new(
//!     "Employee",
//!     vec![AttributeMetadata::basic("name"), AttributeMetadata::to_many("tags")],
//! );
//!
//! let mut filter = Filter::and([
//!     Filter::like("name", "%evi%", false),
//!     Filter::equal("tags", Value::list(["rust", "sql"])),
//! ]);
//! rewrite_relation_filters(&mut filter, &metadata);
//!
//! let kevin = Record::new()
//!     .with("name", "KEVIN")
//!     .with("tags", Value::list(["sql"]));
//! assert!(filter.matches(&kevin).unwrap());
//! ```

// Value model and metadata
pub use filterforge_core::{
    compare_values, values_equal, AttributeKind, AttributeMetadata, EntityMetadata,
    FilterForgeError, PropertyAccessor, Record, Result, Value,
};

// Filters
pub use filterforge_filter::{
    ComparisonOperator, Filter, FlexibleFilterDefinition, FlexibleFilterType, Junction,
    LikePattern, Modulus, ValueSet,
};

// Tree rewrites
pub use filterforge_rewrite::{
    extract_filter, flatten, remove_filters, replace_filter, rewrite_relation_filters,
    rewrite_relation_filters_with, RewriteReport,
};

// Configuration
pub use filterforge_config::{
    ConfigError, EmptyCollectionPolicy, FilterForgeConfig, LoggingConfig, RewriteConfig,
};

/// Console output, enabled with the `console` feature.
#[cfg(feature = "console")]
pub mod console {
    pub use filterforge_console::{init, init_with, RewriteConsoleLayer};
}

pub mod prelude {
    pub use super::{AttributeMetadata, EntityMetadata, PropertyAccessor, Record, Value};
    pub use super::{ComparisonOperator, Filter, FlexibleFilterDefinition, FlexibleFilterType};
    pub use super::{
        extract_filter, flatten, remove_filters, replace_filter, rewrite_relation_filters,
    };
    pub use super::{FilterForgeConfig, FilterForgeError};
}
