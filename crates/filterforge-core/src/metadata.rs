//! Attribute and entity metadata.
//!
//! Metadata tells the rewrite pass how an attribute is stored: a plain value,
//! a to-one or to-many relation, or an embedded element collection. It is
//! assembled by callers (typically from an entity model built elsewhere) with
//! the builder methods below.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Classification of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Plain value stored on the entity.
    Basic,
    /// Reference to a single related entity.
    ToOne,
    /// Collection of related entities.
    ToMany,
    /// Embedded collection of plain values.
    ElementCollection,
}

impl AttributeKind {
    /// Returns true for attributes backed by a collection.
    pub fn is_collection(&self) -> bool {
        matches!(self, AttributeKind::ToMany | AttributeKind::ElementCollection)
    }

    /// Returns true for relations to other entities.
    pub fn is_relation(&self) -> bool {
        matches!(self, AttributeKind::ToOne | AttributeKind::ToMany)
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttributeKind::Basic => "basic",
            AttributeKind::ToOne => "to_one",
            AttributeKind::ToMany => "to_many",
            AttributeKind::ElementCollection => "element_collection",
        };
        f.write_str(name)
    }
}

/// Describes a single attribute of an entity.
#[derive(Debug, Clone)]
pub struct AttributeMetadata {
    /// Property path of the attribute, as used in filters built for it.
    pub path: Arc<str>,
    /// Path to search on when it differs from `path`.
    pub actual_search_path: Option<Arc<str>>,
    /// How the attribute is stored.
    pub kind: AttributeKind,
    /// Whether a search may supply several values at once.
    pub multiple_values_allowed: bool,
    /// Metadata of the related entity, for relations.
    pub nested: Option<Arc<EntityMetadata>>,
    /// Path used instead of `path` when a to-one relation is reached
    /// through an intermediate collection.
    pub replacement_search_path: Option<Arc<str>>,
}

impl AttributeMetadata {
    pub fn new(path: impl Into<Arc<str>>, kind: AttributeKind) -> Self {
        Self {
            path: path.into(),
            actual_search_path: None,
            kind,
            multiple_values_allowed: false,
            nested: None,
            replacement_search_path: None,
        }
    }

    pub fn basic(path: impl Into<Arc<str>>) -> Self {
        Self::new(path, AttributeKind::Basic)
    }

    pub fn to_one(path: impl Into<Arc<str>>) -> Self {
        Self::new(path, AttributeKind::ToOne)
    }

    pub fn to_many(path: impl Into<Arc<str>>) -> Self {
        Self::new(path, AttributeKind::ToMany)
    }

    pub fn element_collection(path: impl Into<Arc<str>>) -> Self {
        Self::new(path, AttributeKind::ElementCollection)
    }

    pub fn with_actual_search_path(mut self, path: impl Into<Arc<str>>) -> Self {
        self.actual_search_path = Some(path.into());
        self
    }

    pub fn with_replacement_search_path(mut self, path: impl Into<Arc<str>>) -> Self {
        self.replacement_search_path = Some(path.into());
        self
    }

    pub fn with_multiple_values(mut self) -> Self {
        self.multiple_values_allowed = true;
        self
    }

    pub fn with_nested(mut self, nested: impl Into<Arc<EntityMetadata>>) -> Self {
        self.nested = Some(nested.into());
        self
    }

    /// Returns the path to search on, falling back to `path`.
    pub fn actual_search_path(&self) -> &str {
        self.actual_search_path.as_deref().unwrap_or(&*self.path)
    }

    /// Returns true if filters on this attribute may need a semantic rewrite.
    pub fn needs_rewrite(&self) -> bool {
        self.kind != AttributeKind::Basic || self.multiple_values_allowed
    }
}

/// Describes an entity as an ordered set of attributes.
#[derive(Debug, Clone)]
pub struct EntityMetadata {
    pub name: Arc<str>,
    attributes: Vec<AttributeMetadata>,
    attribute_indices: HashMap<Arc<str>, usize>,
}

impl EntityMetadata {
    pub fn new(name: impl Into<Arc<str>>, attributes: Vec<AttributeMetadata>) -> Self {
        let mut metadata = Self {
            name: name.into(),
            attributes: Vec::new(),
            attribute_indices: HashMap::new(),
        };
        for attribute in attributes {
            metadata.add_attribute(attribute);
        }
        metadata
    }

    /// Adds an attribute. A later attribute with the same path shadows the
    /// earlier one in [`attribute`](Self::attribute) lookups.
    pub fn add_attribute(&mut self, attribute: AttributeMetadata) {
        let idx = self.attributes.len();
        self.attribute_indices.insert(attribute.path.clone(), idx);
        self.attributes.push(attribute);
    }

    pub fn with_attribute(mut self, attribute: AttributeMetadata) -> Self {
        self.add_attribute(attribute);
        self
    }

    /// Looks up a direct attribute by path.
    pub fn attribute(&self, path: &str) -> Option<&AttributeMetadata> {
        self.attribute_indices
            .get(path)
            .and_then(|&idx| self.attributes.get(idx))
    }

    /// Direct attributes in declaration order.
    pub fn attributes(&self) -> &[AttributeMetadata] {
        &self.attributes
    }

    /// All attributes, descending into nested relation metadata pre-order.
    pub fn iter_recursive(&self) -> AttributeMetadataIter<'_> {
        AttributeMetadataIter {
            stack: vec![self.attributes.iter()],
        }
    }
}

/// Pre-order iterator over attributes and their nested metadata.
pub struct AttributeMetadataIter<'a> {
    stack: Vec<std::slice::Iter<'a, AttributeMetadata>>,
}

impl<'a> Iterator for AttributeMetadataIter<'a> {
    type Item = &'a AttributeMetadata;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(attribute) => {
                    if let Some(nested) = &attribute.nested {
                        self.stack.push(nested.attributes.iter());
                    }
                    return Some(attribute);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
