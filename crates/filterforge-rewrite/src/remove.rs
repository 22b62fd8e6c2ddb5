use filterforge_filter::Filter;
use tracing::trace;

/// Removes every leaf whose property path is in `paths`.
///
/// Junctions and negations emptied by the removal are pruned from their
/// parents. A `Not` whose child disappears keeps a `None` child. A matching
/// root leaf becomes an empty `And`, which constrains nothing.
///
/// Returns the number of leaves removed.
pub fn remove_filters(filter: &mut Filter, paths: &[&str]) -> usize {
    let removed = remove_where(filter, &|leaf: &Filter| {
        leaf.property_path().is_some_and(|path| paths.contains(&path))
    });

    if removed > 0 {
        trace!(event = "filters_removed", paths = ?paths, removed);
    }
    removed
}

/// Removes nodes accepted by `is_target`, pruning what they leave behind
/// the same way as [`remove_filters`].
pub(crate) fn remove_where<F>(filter: &mut Filter, is_target: &F) -> usize
where
    F: Fn(&Filter) -> bool,
{
    if is_target(filter) {
        *filter = Filter::and([]);
        return 1;
    }
    prune(filter, is_target)
}

fn prune<F>(filter: &mut Filter, is_target: &F) -> usize
where
    F: Fn(&Filter) -> bool,
{
    match filter {
        Filter::And(junction) | Filter::Or(junction) => {
            let children = junction.children_mut();
            let before = children.len();
            children.retain(|child| !is_target(child));
            let mut removed = before - children.len();

            // Only strip nodes this pass emptied; pre-existing empty
            // junctions keep their meaning.
            children.retain_mut(|child| {
                if child.is_property_filter() {
                    return true;
                }
                let nested = prune(child, is_target);
                removed += nested;
                nested == 0 || !child.is_vacant()
            });
            removed
        }
        Filter::Not(slot) => {
            let Some(child) = slot.as_deref_mut() else {
                return 0;
            };
            if is_target(child) {
                *slot = None;
                return 1;
            }
            let removed = prune(child, is_target);
            if removed > 0 && child.is_vacant() {
                *slot = None;
            }
            removed
        }
        _ => 0,
    }
}
