//! Error types for FilterForge

use thiserror::Error;

/// Main error type for FilterForge operations.
///
/// Recoverable mismatches during evaluation (null properties, non-string
/// values under LIKE, non-collections under CONTAINS) are not errors; they
/// evaluate to `false`. These variants abort evaluation.
#[derive(Debug, Error)]
pub enum FilterForgeError {
    /// Ordering comparison between operands that cannot be ordered
    #[error("Cannot evaluate '{path} {operator} {value}': operands are not comparable")]
    Incomparable {
        path: String,
        operator: &'static str,
        value: String,
    },

    /// Modulo filter whose effective modulus is zero
    #[error("Modulus for '{path}' is zero")]
    ZeroModulus { path: String },

    /// Modulo operand that is not an integral number
    #[error("Value at '{path}' is not numeric")]
    NotNumeric { path: String },

    /// NOT filter whose child was removed and never cleaned up
    #[error("NOT filter has no child to negate")]
    DanglingNot,

    /// Filter built with an inconsistent shape
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}

/// Result type alias for FilterForge operations
pub type Result<T> = std::result::Result<T, FilterForgeError>;
