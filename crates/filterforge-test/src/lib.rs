//! Shared test fixtures for FilterForge crates.
//!
//! This crate provides candidate types and sample metadata for testing.
//! It does NOT depend on `filterforge-filter` to avoid circular dependencies.
//!
//! - [`person`] - Typed candidate implementing `PropertyAccessor`
//! - [`records`] - Dynamic `Record` candidates
//! - [`metadata`] - Sample entity metadata covering every attribute kind
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! filterforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use filterforge_test::person::Person;
//! use filterforge_test::metadata::employee_metadata;
//! ```

pub mod metadata;
pub mod person;
pub mod records;

// Re-export commonly used items at crate root for convenience
pub use metadata::employee_metadata;
pub use person::Person;
pub use records::{candidate_with_age, candidate_with_name, candidate_with_tags};
