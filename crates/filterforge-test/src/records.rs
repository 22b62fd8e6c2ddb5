//! Dynamic record candidates.
//!
//! Pure functions building [`Record`]s with one interesting field, for
//! tests that exercise a single filter leaf.

use filterforge_core::{Record, Value};

/// Record with a single integer `age` field.
pub fn candidate_with_age(age: i64) -> Record {
    Record::new().with("age", age)
}

/// Record with a `tags` list field.
pub fn candidate_with_tags<V: Into<Value>>(tags: impl IntoIterator<Item = V>) -> Record {
    Record::new().with("tags", Value::list(tags))
}

/// Record with a single string `name` field.
pub fn candidate_with_name(name: &str) -> Record {
    Record::new().with("name", name)
}
