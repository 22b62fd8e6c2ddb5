use filterforge_filter::{Filter, Junction};

/// Flattens nested conjunctions into a single list of conjuncts.
///
/// Children of an `And` that are themselves `And`s are inlined recursively
/// in pre-order. Any other child, `Or` included, is kept as a unit. A filter
/// that is not an `And` flattens to itself.
pub fn flatten(filter: &Filter) -> Vec<Filter> {
    match filter {
        Filter::And(junction) => {
            let mut conjuncts = Vec::with_capacity(junction.len());
            flatten_into(junction, &mut conjuncts);
            conjuncts
        }
        other => vec![other.clone()],
    }
}

fn flatten_into(junction: &Junction, conjuncts: &mut Vec<Filter>) {
    for child in junction {
        match child {
            Filter::And(inner) => flatten_into(inner, conjuncts),
            other => conjuncts.push(other.clone()),
        }
    }
}
