use std::ops::ControlFlow;

use filterforge_filter::Filter;
use tracing::trace;

/// Replaces leaves on `path` with clones of `replacement`, in pre-order.
///
/// With `first_only`, the walk stops right after the first substitution.
/// A matching root leaf is replaced as well. Replacements are not searched
/// again, so `replacement` may itself test `path`.
///
/// Returns the number of substitutions.
pub fn replace_filter(
    filter: &mut Filter,
    replacement: &Filter,
    path: &str,
    first_only: bool,
) -> usize {
    let replaced = replace_where(
        filter,
        replacement,
        &|leaf: &Filter| leaf.has_property_path(path),
        first_only,
    );

    if replaced > 0 {
        trace!(
            event = "filters_replaced",
            path,
            replacement = %replacement,
            replaced,
        );
    }
    replaced
}

/// Replaces nodes accepted by `is_target` with clones of `replacement`, in
/// pre-order. Replacements are not searched again.
pub(crate) fn replace_where<F>(
    filter: &mut Filter,
    replacement: &Filter,
    is_target: &F,
    first_only: bool,
) -> usize
where
    F: Fn(&Filter) -> bool,
{
    let mut replaced = 0;
    // Break only means `first_only` ended the walk early
    let _stopped_early: ControlFlow<()> =
        replace_walk(filter, replacement, is_target, first_only, &mut replaced);
    replaced
}

fn replace_walk<F>(
    filter: &mut Filter,
    replacement: &Filter,
    is_target: &F,
    first_only: bool,
    replaced: &mut usize,
) -> ControlFlow<()>
where
    F: Fn(&Filter) -> bool,
{
    if is_target(filter) {
        *filter = replacement.clone();
        *replaced += 1;
        return if first_only {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        };
    }

    match filter {
        Filter::And(junction) | Filter::Or(junction) => {
            for child in junction.children_mut() {
                replace_walk(child, replacement, is_target, first_only, replaced)?;
            }
        }
        Filter::Not(Some(child)) => {
            replace_walk(child, replacement, is_target, first_only, replaced)?;
        }
        _ => {}
    }
    ControlFlow::Continue(())
}
