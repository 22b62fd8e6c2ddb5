//! Property access on candidate objects.
//!
//! Filters never inspect candidates directly. They go through
//! [`PropertyAccessor`], which resolves a dotted property path such as
//! `"address.city"` into a [`Value`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// Resolves named properties on a candidate object.
///
/// Implementors only provide single-segment lookup; [`resolve`](Self::resolve)
/// walks dotted paths through nested [`Value::Record`]s. Types with nested
/// typed structs can override `resolve` instead.
pub trait PropertyAccessor {
    /// Returns the value of a direct property, or `None` if there is no
    /// property with that name.
    fn property(&self, name: &str) -> Option<Value>;

    /// Resolves a dotted property path.
    ///
    /// Any segment that cannot be resolved yields [`Value::Null`] rather than
    /// an error.
    fn resolve(&self, path: &str) -> Value {
        let mut segments = path.split('.');
        let Some(first) = segments.next() else {
            return Value::Null;
        };
        let Some(mut current) = self.property(first) else {
            return Value::Null;
        };
        for segment in segments {
            current = match current.as_record().and_then(|r| r.get(segment)) {
                Some(value) => value.clone(),
                None => return Value::Null,
            };
        }
        current
    }
}

impl<T: PropertyAccessor + ?Sized> PropertyAccessor for &T {
    fn property(&self, name: &str) -> Option<Value> {
        (**self).property(name)
    }

    fn resolve(&self, path: &str) -> Value {
        (**self).resolve(path)
    }
}

impl<T: PropertyAccessor + ?Sized> PropertyAccessor for Arc<T> {
    fn property(&self, name: &str) -> Option<Value> {
        (**self).property(name)
    }

    fn resolve(&self, path: &str) -> Value {
        (**self).resolve(path)
    }
}

/// A dynamic object with named properties.
///
/// Records are the ready-made candidate type: build them field by field and
/// nest them through [`Value::Record`] to form dotted paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Record {
    fields: BTreeMap<Arc<str>, Value>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, consuming and returning the record.
    pub fn with(mut self, name: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a field, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<Arc<str>>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Gets a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Iterates fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_ref(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<Arc<str>>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record{{")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, "}}")
    }
}

impl PropertyAccessor for Record {
    fn property(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl PropertyAccessor for Value {
    fn property(&self, name: &str) -> Option<Value> {
        self.as_record()?.property(name)
    }
}
