//! Metadata-driven rewrite of relation and collection filters.
//!
//! Search forms produce `attribute = value` for every attribute, but an
//! equality test only makes sense for single-valued attributes. This pass
//! walks the entity metadata and rewrites the first equality filter found
//! for each attribute that needs it:
//!
//! | kind | value | rewritten to |
//! |------|-------|--------------|
//! | to-many, element collection | `[a, b]` | `Or(Contains(p, a), Contains(p, b))` |
//! | to-many, element collection | `a` | `Contains(p, a)` |
//! | to-one, multi-valued basic | `[a, b]` | `In(p, {a, b})` |
//! | to-one | `a` | `Equal(replacement path, a)` if one is configured |
//! | any of the above | `[]` | dropped, or `Or()` under `MatchNothing` |
//!
//! `p` is the attribute's actual search path.


use filterforge_config::{EmptyCollectionPolicy, RewriteConfig};
use filterforge_core::{AttributeKind, AttributeMetadata, EntityMetadata, Value};
use filterforge_filter::Filter;
use tracing::{debug, info};

use crate::extract::extract_filter;
use crate::remove::remove_where;
use crate::replace::replace_where;

/// Outcome of a relation rewrite pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Leaves replaced by a rewritten filter.
    pub rewritten: usize,
    /// Leaves removed under the drop policy.
    pub removed: usize,
}

impl RewriteReport {
    /// Returns true if the pass left the tree untouched.
    pub fn is_unchanged(&self) -> bool {
        self.rewritten == 0 && self.removed == 0
    }
}

/// Rewrites relation filters with the default configuration.
pub fn rewrite_relation_filters(filter: &mut Filter, metadata: &EntityMetadata) -> RewriteReport {
    rewrite_relation_filters_with(filter, metadata, &RewriteConfig::default())
}

/// Rewrites equality filters on relations and collections into the tests
/// those attributes support.
///
/// Attributes are visited in declaration order, descending into nested
/// relation metadata. Only the equality leaf located for an attribute is
/// rewritten, along with identical copies of it unless
/// `config.replace_first_only` is set; other leaves on the same path are
/// left alone.
pub fn rewrite_relation_filters_with(
    filter: &mut Filter,
    metadata: &EntityMetadata,
    config: &RewriteConfig,
) -> RewriteReport {
    let mut report = RewriteReport::default();

    for attribute in metadata.iter_recursive() {
        if !attribute.needs_rewrite() {
            continue;
        }
        let target = match extract_filter(filter, &attribute.path) {
            Some(leaf) if leaf.is_equality() => leaf.clone(),
            _ => continue,
        };
        let Filter::Comparison { value, .. } = &target else {
            continue;
        };
        let Some(action) = plan(attribute, value, config.empty_collection) else {
            continue;
        };
        let is_target = |leaf: &Filter| *leaf == target;

        match action {
            Action::Replace(replacement) => {
                let count =
                    replace_where(filter, &replacement, &is_target, config.replace_first_only);
                debug!(
                    event = "rewrite_relation",
                    attribute = %attribute.path,
                    kind = %attribute.kind,
                    action = "replace",
                    replacement = %replacement,
                    count,
                );
                report.rewritten += count;
            }
            Action::Drop => {
                let count = remove_where(filter, &is_target);
                // Dropping the only child of a root negation leaves nothing
                // to negate
                if count > 0 && matches!(filter, Filter::Not(None)) {
                    *filter = Filter::and([]);
                }
                debug!(
                    event = "rewrite_relation",
                    attribute = %attribute.path,
                    kind = %attribute.kind,
                    action = "drop",
                    count,
                );
                report.removed += count;
            }
        }
    }

    if !report.is_unchanged() {
        info!(
            event = "rewrite_end",
            entity = %metadata.name,
            rewritten = report.rewritten,
            removed = report.removed,
        );
    }
    report
}

enum Action {
    Replace(Filter),
    Drop,
}

fn plan(
    attribute: &AttributeMetadata,
    value: &Value,
    policy: EmptyCollectionPolicy,
) -> Option<Action> {
    let search_path = attribute.actual_search_path();

    if let Some(items) = value.as_collection() {
        if items.is_empty() {
            return Some(match policy {
                EmptyCollectionPolicy::Drop => Action::Drop,
                EmptyCollectionPolicy::MatchNothing => Action::Replace(Filter::or([])),
            });
        }
        let replacement = match attribute.kind {
            AttributeKind::ToMany | AttributeKind::ElementCollection => Filter::or(
                items
                    .iter()
                    .map(|item| Filter::contains(search_path, item.clone())),
            ),
            AttributeKind::ToOne | AttributeKind::Basic => {
                Filter::in_values(search_path, items.iter().cloned())
            }
        };
        return Some(Action::Replace(replacement));
    }

    match attribute.kind {
        AttributeKind::ToMany | AttributeKind::ElementCollection => Some(Action::Replace(
            Filter::contains(search_path, value.clone()),
        )),
        AttributeKind::ToOne => attribute
            .replacement_search_path
            .as_ref()
            .map(|path| Action::Replace(Filter::equal(path.clone(), value.clone()))),
        AttributeKind::Basic => None,
    }
}
